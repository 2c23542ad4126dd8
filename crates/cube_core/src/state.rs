//! Facet and piece permutation state of the cube.

use std::fmt;

use cubemath::permutations;
use itertools::Itertools;

use crate::{FACET_COUNT, Face, Facet, PIECE_COUNT, Piece, Twist};

/// Returns the five 4-cycles of facet slots that a quarter turn of `face`
/// performs: the corners of the face, the edges of the face, and three cycles
/// of facets on the adjacent faces.
///
/// Each cycle is `[s, r(s), r²(s), r³(s)]` where `r` is the quarter turn, so
/// that the facet in slot `cycle[i]` moves to slot `cycle[i + 1]`.
pub fn face_rotation_facet_cycles(face: Face) -> [[usize; 4]; 5] {
    let next = face.next();
    let mut seeds = vec![Facet::new(face, -1, -1), Facet::new(face, 0, -1)];
    seeds.extend(
        itertools::iproduct!(-1..=1, -1..=1)
            .map(|(a, b)| Facet::new(next, a, b))
            .filter(|facet| facet.piece().is_on_face(face)),
    );
    debug_assert_eq!(seeds.len(), 5);

    std::array::from_fn(|i| {
        let mut facet = seeds[i];
        std::array::from_fn(|_| {
            let slot = facet.index();
            facet = facet.turned(face);
            slot
        })
    })
}

/// State of the cube, stored as permutations of facets and pieces.
///
/// Each permutation is stored together with its inverse. `facet_mapping[i]`
/// is the slot where the facet that started in slot `i` is now, and
/// `inv_facet_mapping[slot]` is the facet currently in `slot`. Pieces work
/// the same way.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RubikState {
    facet_mapping: [usize; FACET_COUNT],
    inv_facet_mapping: [usize; FACET_COUNT],
    piece_mapping: [usize; PIECE_COUNT],
    inv_piece_mapping: [usize; PIECE_COUNT],
}

impl Default for RubikState {
    fn default() -> Self {
        Self::new()
    }
}

impl RubikState {
    /// Constructs a solved cube.
    pub fn new() -> Self {
        Self {
            facet_mapping: std::array::from_fn(|i| i),
            inv_facet_mapping: std::array::from_fn(|i| i),
            piece_mapping: std::array::from_fn(|i| i),
            inv_piece_mapping: std::array::from_fn(|i| i),
        }
    }

    /// Returns the facet permutation, indexed by facet.
    pub fn facet_mapping(&self) -> &[usize; FACET_COUNT] {
        &self.facet_mapping
    }
    /// Returns the inverse facet permutation, indexed by slot.
    pub fn inv_facet_mapping(&self) -> &[usize; FACET_COUNT] {
        &self.inv_facet_mapping
    }
    /// Returns the piece permutation, indexed by piece.
    pub fn piece_mapping(&self) -> &[usize; PIECE_COUNT] {
        &self.piece_mapping
    }
    /// Returns the inverse piece permutation, indexed by slot.
    pub fn inv_piece_mapping(&self) -> &[usize; PIECE_COUNT] {
        &self.inv_piece_mapping
    }

    /// Returns the facet currently in `slot`.
    pub fn facet_at(&self, slot: Facet) -> Facet {
        Facet::from_index(self.inv_facet_mapping[slot.index()])
    }
    /// Returns the piece currently in `slot`.
    pub fn piece_at(&self, slot: Piece) -> Piece {
        Piece::from_index(self.inv_piece_mapping[slot.index()])
    }

    /// Returns whether every facet and piece is in its starting slot.
    pub fn is_solved(&self) -> bool {
        permutations::is_identity(&self.facet_mapping)
            && permutations::is_identity(&self.piece_mapping)
    }

    /// Returns whether each mapping is a permutation and the exact inverse of
    /// its partner.
    pub fn is_consistent(&self) -> bool {
        fn mutual_inverses(m: &[usize], inv: &[usize]) -> bool {
            permutations::is_permutation(m)
                && m.iter().enumerate().all(|(i, &j)| inv.get(j) == Some(&i))
        }
        mutual_inverses(&self.facet_mapping, &self.inv_facet_mapping)
            && mutual_inverses(&self.piece_mapping, &self.inv_piece_mapping)
    }

    /// Returns the indices of the 9 pieces on `face`, in row-major order of
    /// the face-local coordinates `(a, b)`.
    ///
    /// If `default_config` is true, returns the slots on the face; otherwise
    /// returns the pieces currently occupying those slots.
    pub fn pieces_on_face(&self, face: Face, default_config: bool) -> [usize; 9] {
        std::array::from_fn(|i| {
            let slot = Piece::on_face(face, (i / 3) as i8 - 1, (i % 3) as i8 - 1).index();
            match default_config {
                true => slot,
                false => self.inv_piece_mapping[slot],
            }
        })
    }

    /// Moves the facet in slot `cycle[0]` to slot `cycle[1]`, the one in
    /// `cycle[1]` to `cycle[2]`, and so on, with the one in `cycle[3]` moving
    /// to `cycle[0]`.
    ///
    /// The four slots must be distinct.
    pub fn cycle4_facets(&mut self, cycle: [usize; 4]) {
        debug_assert!(cycle.iter().all_unique(), "repeated slot in {cycle:?}");
        log::trace!("cycling facet slots {cycle:?}");

        let facets = cycle.map(|slot| self.inv_facet_mapping[slot]);
        for (i, &facet) in facets.iter().enumerate() {
            self.facet_mapping[facet] = cycle[(i + 1) % 4];
        }
        for facet in facets {
            self.inv_facet_mapping[self.facet_mapping[facet]] = facet;
        }
    }

    /// Applies a quarter turn of `face`.
    pub fn apply_face_rotation(&mut self, face: Face) {
        log::trace!("applying rotation of face {face}");

        for cycle in face_rotation_facet_cycles(face) {
            self.cycle4_facets(cycle);
        }

        let slots = self.pieces_on_face(face, true);
        let mut moved = [0; 9];
        for (a, b) in itertools::iproduct!(0..3, 0..3) {
            let dst = slots[a * 3 + b];
            let src = slots[(2 - b) * 3 + a];
            let piece = self.inv_piece_mapping[src];
            self.piece_mapping[piece] = dst;
            moved[a * 3 + b] = piece;
        }
        for piece in moved {
            self.inv_piece_mapping[self.piece_mapping[piece]] = piece;
        }

        debug_assert!(self.is_consistent(), "inconsistent state after turning {face}");
    }

    /// Applies a twist, which may be more than one quarter turn.
    pub fn apply_twist(&mut self, twist: Twist) {
        for _ in 0..twist.direction.quarter_turns().rem_euclid(4) {
            self.apply_face_rotation(twist.face);
        }
    }
    /// Applies a sequence of twists in order.
    pub fn apply_twists(&mut self, twists: impl IntoIterator<Item = Twist>) {
        for twist in twists {
            self.apply_twist(twist);
        }
    }
}

impl fmt::Display for RubikState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn moved(mapping: &[usize]) -> String {
            mapping
                .iter()
                .enumerate()
                .filter(|(i, j)| i != *j)
                .map(|(i, j)| format!("{i}->{j}"))
                .join(" ")
        }
        writeln!(f, "facets: [{}]", moved(&self.facet_mapping))?;
        write!(f, "pieces: [{}]", moved(&self.piece_mapping))
    }
}
