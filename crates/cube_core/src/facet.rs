use std::fmt;

use cubemath::grid::{grid_dot, quarter_turn};
use serde::{Deserialize, Serialize};

use crate::{FACET_COUNT, Face, IndexOutOfRange, Piece};

/// Sticker on the cube, identified by its face and its coordinates `(a, b)`
/// within the face frame.
///
/// The index of a facet is `face*9 + (a+1)*3 + (b+1)`. Geometrically, the
/// facet is the side of [`Facet::piece()`] that points out of `face`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Facet {
    /// Face that the facet is on.
    pub face: Face,
    /// Coordinate along the face tangent, in `{-1, 0, 1}`.
    pub a: i8,
    /// Coordinate along the face bitangent, in `{-1, 0, 1}`.
    pub b: i8,
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { face, a, b } = self;
        write!(f, "{face}({a}, {b})")
    }
}

impl From<Facet> for usize {
    fn from(facet: Facet) -> Self {
        facet.index()
    }
}

impl Facet {
    /// Constructs a facet from face-local coordinates.
    pub fn new(face: Face, a: i8, b: i8) -> Self {
        debug_assert!(
            (-1..=1).contains(&a) && (-1..=1).contains(&b),
            "facet coordinates ({a}, {b}) out of range",
        );
        Self { face, a, b }
    }

    /// Returns the facet with index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 54`.
    pub fn from_index(i: usize) -> Self {
        let coord = |n: usize| (n % 3) as i8 - 1;
        Self::new(Face::from_index(i / 9), coord(i / 3), coord(i))
    }
    /// Returns the facet with index `i`, or an error if `i >= 54`.
    pub fn try_from_index(i: usize) -> Result<Self, IndexOutOfRange> {
        IndexOutOfRange::check("facet", i, FACET_COUNT)?;
        Ok(Self::from_index(i))
    }
    /// Returns the index of the facet in `0..54`.
    pub fn index(self) -> usize {
        let coord = |c: i8| (c + 1) as usize;
        self.face.index() * 9 + coord(self.a) * 3 + coord(self.b)
    }

    /// Returns the piece that this facet is attached to.
    pub fn piece(self) -> Piece {
        Piece::on_face(self.face, self.a, self.b)
    }

    /// Returns where a quarter turn of `face` moves this facet.
    #[must_use]
    pub fn turned(self, face: Face) -> Self {
        let piece = self.piece();
        if !piece.is_on_face(face) {
            return self;
        }
        let axis = face.outward_normal();
        let new_pos = quarter_turn(axis, piece.pos());
        let new_face = Face::from_outward_normal(quarter_turn(axis, self.face.outward_normal()))
            .expect("rotating an axis by a quarter turn gives another axis");
        Self::new(
            new_face,
            grid_dot(new_pos, new_face.tangent()),
            grid_dot(new_pos, new_face.bitangent()),
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_facet_index_round_trip() {
        for i in 0..FACET_COUNT {
            assert_eq!(Facet::from_index(i).index(), i);
        }
        assert_eq!(Facet::new(Face::Front, -1, -1).index(), 0);
        assert_eq!(Facet::new(Face::Right, 0, 0).index(), 13);
        assert_eq!(Facet::new(Face::Top, 1, 1).index(), 53);
        assert!(Facet::try_from_index(54).is_err());
        assert!(Facet::try_from_index(53).is_ok());
    }

    #[test]
    fn test_facet_pieces() {
        // Every corner piece has 3 facets, every edge 2, every center 1.
        let mut counts = [0; crate::PIECE_COUNT];
        for i in 0..FACET_COUNT {
            counts[Facet::from_index(i).piece().index()] += 1;
        }
        for (i, &n) in counts.iter().enumerate() {
            let expected = match Piece::from_index(i).kind() {
                crate::PieceKind::Core => 0,
                crate::PieceKind::Center => 1,
                crate::PieceKind::Edge => 2,
                crate::PieceKind::Corner => 3,
            };
            assert_eq!(n, expected, "piece {}", Piece::from_index(i));
        }
    }

    #[test]
    fn test_facet_turned() {
        for face in Face::iter() {
            for i in 0..FACET_COUNT {
                let facet = Facet::from_index(i);
                let turned = facet.turned(face);
                assert_eq!(turned.piece(), facet.piece().turned(face));
                let mut f = facet;
                for _ in 0..4 {
                    f = f.turned(face);
                }
                assert_eq!(f, facet);
            }
        }
        // Corner of the front face moves along the front face.
        assert_eq!(
            Facet::new(Face::Front, -1, -1).turned(Face::Front),
            Facet::new(Face::Front, -1, 1),
        );
    }
}
