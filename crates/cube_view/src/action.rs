use cube_core::{ScrambleParams, Twist};

/// Action on the cube that is tracked in the undo/redo history.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Scramble twists, applied all at once. Cannot be undone.
    Scramble {
        /// Parameters used to generate the scramble.
        params: ScrambleParams,
    },
    /// Single twist.
    Twist(Twist),
}
impl Action {
    /// Returns the undo behavior for the action.
    pub(crate) fn undo_behavior(&self) -> UndoBehavior {
        match self {
            Action::Scramble { .. } => UndoBehavior::Boundary,
            Action::Twist(_) => UndoBehavior::Action,
        }
    }
}

pub(crate) enum UndoBehavior {
    /// Action: can be undone and redone.
    Action,
    /// Boundary: cannot be undone.
    Boundary,
}
