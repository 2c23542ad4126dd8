//! Exact integer vectors on the cube lattice.

use cgmath::{Vector3, vec3};

use crate::Float;
use crate::approx_cmp::to_approx_integer;

/// Integer vector with coordinates on the cube lattice.
///
/// Positions of pieces and directions of face normals always have
/// coordinates in `{-1, 0, 1}`.
pub type GridVector = Vector3<i8>;

/// Returns the dot product of two grid vectors.
pub fn grid_dot(a: GridVector, b: GridVector) -> i8 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Returns the cross product of two grid vectors.
pub fn grid_cross(a: GridVector, b: GridVector) -> GridVector {
    vec3(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Rotates `v` by a quarter turn (π/2, counterclockwise when viewed from the
/// tip of `axis`) around the unit grid vector `axis`.
///
/// The rotation is exact: `axis × v + axis (axis · v)`.
pub fn quarter_turn(axis: GridVector, v: GridVector) -> GridVector {
    debug_assert_eq!(grid_dot(axis, axis), 1, "axis must be a unit vector");
    grid_cross(axis, v) + axis * grid_dot(axis, v)
}

/// Returns whether every coordinate of `v` is in `{-1, 0, 1}`.
pub fn is_in_unit_cube(v: GridVector) -> bool {
    [v.x, v.y, v.z].iter().all(|c| (-1..=1).contains(c))
}

/// Converts a grid vector to a floating-point vector.
pub fn to_float(v: GridVector) -> Vector3<Float> {
    v.map(Float::from)
}

/// Rounds a floating-point vector to the nearest grid vector, or returns
/// `None` if some coordinate is not approximately an integer in the range of
/// `i8`.
pub fn round_to_grid(v: Vector3<Float>) -> Option<GridVector> {
    let coord = |c: Float| i8::try_from(to_approx_integer(c)?).ok();
    Some(vec3(coord(v.x)?, coord(v.y)?, coord(v.z)?))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    const AXES: [GridVector; 6] = [
        vec3(1, 0, 0),
        vec3(-1, 0, 0),
        vec3(0, 1, 0),
        vec3(0, -1, 0),
        vec3(0, 0, 1),
        vec3(0, 0, -1),
    ];

    #[test]
    fn test_quarter_turn_right_handed() {
        let z = vec3(0, 0, 1);
        assert_eq!(quarter_turn(z, vec3(1, 0, 0)), vec3(0, 1, 0));
        assert_eq!(quarter_turn(z, vec3(0, 1, 0)), vec3(-1, 0, 0));
        assert_eq!(quarter_turn(z, vec3(1, 1, 1)), vec3(-1, 1, 1));
        assert_eq!(quarter_turn(vec3(1, 0, 0), vec3(0, 1, 0)), vec3(0, 0, 1));
    }

    #[test]
    fn test_round_to_grid() {
        assert_eq!(round_to_grid(vec3(0.99999, -0.00001, -1.0)), Some(vec3(1, 0, -1)));
        assert_eq!(round_to_grid(vec3(0.5, 0.0, 0.0)), None);
        assert_eq!(round_to_grid(vec3(300.0, 0.0, 0.0)), None);
    }

    proptest! {
        #[test]
        fn proptest_quarter_turn_has_order_4(
            axis in prop::sample::select(AXES.to_vec()),
            x in -1_i8..=1, y in -1_i8..=1, z in -1_i8..=1,
        ) {
            let v = vec3(x, y, z);
            let mut w = v;
            for i in 1..=4 {
                w = quarter_turn(axis, w);
                prop_assert!(is_in_unit_cube(w));
                prop_assert_eq!(grid_dot(w, axis), grid_dot(v, axis));
                prop_assert_eq!(w == v, i == 4 || v == axis * grid_dot(v, axis));
            }
        }
    }
}
