//! Vector, matrix, and permutation primitives for a 3x3x3 cube.
//!
//! Integer vectors ([`GridVector`]) describe positions and directions on the
//! cube lattice exactly. Floating-point matrices (from [`cgmath`]) describe
//! the visual transforms that animations interpolate.

pub use {approx, cgmath};

/// Floating-point type used for transforms.
pub type Float = f32;

/// Small floating-point value used for comparisons.
pub const EPSILON: Float = 0.0001;

/// Asserts that both arguments are approximately equal.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::EPSILON)
    };
}

macro_rules! debug_panic {
    ($($tok:tt)*) => {
        match cfg!(debug_assertions) {
            true => panic!($($tok)*),
            false => log::error!($($tok)*),
        }
    };
}

pub mod approx_cmp;
pub mod grid;
pub mod permutations;
pub mod transform;

/// Structs, traits, and constants.
pub mod prelude {
    pub use cgmath::{InnerSpace, Matrix, Matrix3, Matrix4, Rad, SquareMatrix, Vector3, vec3};

    pub use crate::approx_cmp::*;
    pub use crate::grid::{GridVector, grid_dot, quarter_turn};
    pub use crate::permutations::{self, Parity};
    pub use crate::transform::*;
    pub use crate::{EPSILON, Float};
}
pub use prelude::*;
