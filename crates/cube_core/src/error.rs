/// Error returned when converting an out-of-range index to a cube element.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} index {index} out of range (must be less than {count})")]
pub struct IndexOutOfRange {
    /// Kind of element (`"face"`, `"facet"`, or `"piece"`).
    pub kind: &'static str,
    /// Index that was requested.
    pub index: usize,
    /// Number of elements of that kind.
    pub count: usize,
}
impl IndexOutOfRange {
    pub(crate) fn check(kind: &'static str, index: usize, count: usize) -> Result<(), Self> {
        match index < count {
            true => Ok(()),
            false => Err(Self { kind, index, count }),
        }
    }
}
