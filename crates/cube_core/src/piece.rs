use std::fmt;

use cubemath::grid::{GridVector, grid_dot, is_in_unit_cube, quarter_turn};
use cubemath::vec3;
use serde::{Deserialize, Serialize};

use crate::{Face, IndexOutOfRange, PIECE_COUNT};

/// Cubie in the 3x3x3 lattice, identified by its position relative to the
/// center of the cube.
///
/// The index of a piece is `(x+1)*9 + (y+1)*3 + (z+1)`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    /// X coordinate in `{-1, 0, 1}`.
    pub x: i8,
    /// Y coordinate in `{-1, 0, 1}`.
    pub y: i8,
    /// Z coordinate in `{-1, 0, 1}`.
    pub z: i8,
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { x, y, z } = self;
        write!(f, "({x}, {y}, {z})")
    }
}

impl From<Piece> for usize {
    fn from(piece: Piece) -> Self {
        piece.index()
    }
}

/// Kind of piece, determined by how many faces it touches.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PieceKind {
    /// Hidden piece at the center of the cube.
    Core,
    /// Piece in the center of a face, with one facet.
    Center,
    /// Piece on an edge, with two facets.
    Edge,
    /// Piece on a corner, with three facets.
    Corner,
}

impl Piece {
    /// Constructs a piece from its coordinates.
    pub fn new(x: i8, y: i8, z: i8) -> Self {
        let ret = Self { x, y, z };
        debug_assert!(is_in_unit_cube(ret.pos()), "piece {ret} out of range");
        ret
    }
    /// Constructs a piece from a lattice position.
    pub fn from_pos(pos: GridVector) -> Self {
        Self::new(pos.x, pos.y, pos.z)
    }
    /// Returns the piece at face-local coordinates `(a, b)` on `face`, which
    /// is `a*t + b*b - n` in terms of the face frame.
    pub fn on_face(face: Face, a: i8, b: i8) -> Self {
        debug_assert!((-1..=1).contains(&a) && (-1..=1).contains(&b));
        Self::from_pos(face.tangent() * a + face.bitangent() * b - face.normal())
    }

    /// Returns the piece with index `i`.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `i >= 27`.
    pub fn from_index(i: usize) -> Self {
        debug_assert!(i < PIECE_COUNT, "piece index {i} out of range");
        let coord = |n: usize| (n % 3) as i8 - 1;
        Self::new(coord(i / 9), coord(i / 3), coord(i))
    }
    /// Returns the piece with index `i`, or an error if `i >= 27`.
    pub fn try_from_index(i: usize) -> Result<Self, IndexOutOfRange> {
        IndexOutOfRange::check("piece", i, PIECE_COUNT)?;
        Ok(Self::from_index(i))
    }
    /// Returns the index of the piece in `0..27`.
    pub fn index(self) -> usize {
        let coord = |c: i8| (c + 1) as usize;
        coord(self.x) * 9 + coord(self.y) * 3 + coord(self.z)
    }

    /// Returns the position of the piece as a vector.
    pub fn pos(self) -> GridVector {
        vec3(self.x, self.y, self.z)
    }
    /// Returns what kind of piece this is.
    pub fn kind(self) -> PieceKind {
        match [self.x, self.y, self.z].iter().filter(|&&c| c != 0).count() {
            0 => PieceKind::Core,
            1 => PieceKind::Center,
            2 => PieceKind::Edge,
            _ => PieceKind::Corner,
        }
    }
    /// Returns whether the piece is in the layer turned by `face`.
    pub fn is_on_face(self, face: Face) -> bool {
        grid_dot(self.pos(), face.outward_normal()) == 1
    }
    /// Returns where a quarter turn of `face` moves this piece.
    #[must_use]
    pub fn turned(self, face: Face) -> Self {
        match self.is_on_face(face) {
            true => Self::from_pos(quarter_turn(face.outward_normal(), self.pos())),
            false => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_piece_index_round_trip() {
        for i in 0..PIECE_COUNT {
            assert_eq!(Piece::from_index(i).index(), i);
        }
        assert_eq!(Piece::new(-1, -1, -1).index(), 0);
        assert_eq!(Piece::new(0, 0, 0).index(), 13);
        assert_eq!(Piece::new(1, 1, 1).index(), 26);
        assert_eq!(usize::from(Piece::new(1, 0, -1)), 21);
        assert!(Piece::try_from_index(27).is_err());
    }

    #[test]
    fn test_piece_on_face() {
        assert_eq!(Piece::on_face(Face::Front, -1, -1), Piece::new(-1, -1, -1));
        assert_eq!(Piece::on_face(Face::Front, 0, 0), Piece::new(0, 0, -1));
        assert_eq!(Piece::on_face(Face::Right, 0, 0), Piece::new(1, 0, 0));
        assert_eq!(Piece::on_face(Face::Top, 1, -1), Piece::new(-1, 1, -1));
        for face in Face::iter() {
            for a in -1..=1 {
                for b in -1..=1 {
                    assert!(Piece::on_face(face, a, b).is_on_face(face));
                }
            }
        }
    }

    #[test]
    fn test_piece_kinds() {
        let kinds = (0..PIECE_COUNT).map(|i| Piece::from_index(i).kind());
        let count = |k| kinds.clone().filter(|&kind| kind == k).count();
        assert_eq!(count(PieceKind::Core), 1);
        assert_eq!(count(PieceKind::Center), 6);
        assert_eq!(count(PieceKind::Edge), 12);
        assert_eq!(count(PieceKind::Corner), 8);
    }

    #[test]
    fn test_piece_turned() {
        for face in Face::iter() {
            let center = Piece::on_face(face, 0, 0);
            assert_eq!(center.turned(face), center);
            let opposite = Piece::on_face(face.opposite(), 1, 1);
            assert_eq!(opposite.turned(face), opposite);
        }
        assert_eq!(
            Piece::new(-1, -1, -1).turned(Face::Front),
            Piece::new(-1, 1, -1),
        );
    }
}
