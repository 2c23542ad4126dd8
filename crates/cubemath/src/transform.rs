//! Floating-point rigid transforms used for rendering and animation.

use cgmath::{InnerSpace, Matrix, Matrix3, Matrix4, Rad, SquareMatrix, Vector3};

use crate::approx_cmp::is_approx_nonzero;
use crate::{Float, grid};

/// Angle of a quarter turn, in radians.
pub const QUARTER_TURN: Float = std::f32::consts::FRAC_PI_2;

/// Maximum distance between a column and a grid axis for
/// [`snap_to_grid_rotation()`] to accept it.
const SNAP_TOLERANCE: Float = 0.01;

/// Returns a rotation by `angle` radians around `axis`, which need not be
/// normalized.
///
/// Returns the identity if `axis` is zero.
pub fn rotation(axis: Vector3<Float>, angle: Float) -> Matrix4<Float> {
    if !is_approx_nonzero(axis.magnitude()) {
        debug_panic!("rotation axis {axis:?} is zero");
        return Matrix4::identity();
    }
    Matrix4::from_axis_angle(axis.normalize(), Rad(angle))
}

/// Returns the upper-left 3x3 submatrix of `m`.
pub fn linear_part(m: &Matrix4<Float>) -> Matrix3<Float> {
    Matrix3::from_cols(m.x.truncate(), m.y.truncate(), m.z.truncate())
}

/// Transforms `v` by the inverse of the rotation part of `m`, assuming that
/// part is orthogonal.
pub fn inverse_rotate(m: &Matrix4<Float>, v: Vector3<Float>) -> Vector3<Float> {
    linear_part(m).transpose() * v
}

/// Returns the rotation around the grid vector `axis` by `quarter_turns`
/// quarter turns.
pub fn grid_rotation(axis: grid::GridVector, quarter_turns: i32) -> Matrix4<Float> {
    rotation(grid::to_float(axis), quarter_turns as Float * QUARTER_TURN)
}

/// Returns the exact rotation that maps each coordinate axis to a grid axis,
/// if the linear part of `m` is within a small tolerance of one. The
/// translation part of `m` is kept.
///
/// Returns `None` if `m` is not close to such a rotation, such as partway
/// through a quarter turn.
pub fn snap_to_grid_rotation(m: &Matrix4<Float>) -> Option<Matrix4<Float>> {
    let snap = |v: Vector3<Float>| -> Option<grid::GridVector> {
        let g = v.map(Float::round).cast::<i8>()?;
        let is_axis = grid::is_in_unit_cube(g) && grid::grid_dot(g, g) == 1;
        (is_axis && (v - grid::to_float(g)).magnitude() < SNAP_TOLERANCE).then_some(g)
    };
    let x = snap(m.x.truncate())?;
    let y = snap(m.y.truncate())?;
    let z = snap(m.z.truncate())?;
    if grid::grid_cross(x, y) != z {
        return None;
    }
    Some(Matrix4::from_cols(
        grid::to_float(x).extend(0.0),
        grid::to_float(y).extend(0.0),
        grid::to_float(z).extend(0.0),
        m.w,
    ))
}
