//! Permutation model of a 3x3x3 Rubik's cube.
//!
//! The cube is addressed three ways:
//!
//! - a [`Face`] is one of the six sides, each with a fixed integer frame;
//! - a [`Piece`] is one of the 27 cubies, identified by its lattice position;
//! - a [`Facet`] is one of the 54 stickers, identified by its face and its
//!   coordinates within that face.
//!
//! [`RubikState`] tracks where every facet and piece currently is.

mod error;
mod face;
mod facet;
mod piece;
mod scramble;
mod state;
mod twist;

pub use error::IndexOutOfRange;
pub use face::Face;
pub use facet::Facet;
pub use piece::{Piece, PieceKind};
pub use scramble::{ScrambleParams, generate_scramble};
pub use state::{RubikState, face_rotation_facet_cycles};
pub use twist::{Twist, TwistDirection, TwistParseError, format_twists, parse_twists};

/// Number of faces on the cube.
pub const FACE_COUNT: usize = 6;
/// Number of facets (stickers) on the cube.
pub const FACET_COUNT: usize = 54;
/// Number of pieces (cubies) in the cube, including the hidden core.
pub const PIECE_COUNT: usize = 27;

/// Structs, traits, and constants.
pub mod prelude {
    pub use crate::{
        FACE_COUNT, FACET_COUNT, Face, Facet, PIECE_COUNT, Piece, PieceKind, RubikState,
        ScrambleParams, Twist, TwistDirection,
    };
}
