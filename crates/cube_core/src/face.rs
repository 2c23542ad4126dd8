use std::fmt;

use cubemath::grid::{GridVector, grid_cross};
use cubemath::vec3;
use serde::{Deserialize, Serialize};
use strum::VariantArray;

use crate::{FACE_COUNT, IndexOutOfRange};

/// Side of the cube.
///
/// Faces are cyclically ordered `F R D B L T`, so that the opposite of every
/// face is three steps away. Each face has a fixed right-handed integer frame
/// (tangent, bitangent, inward normal) used to address its facets.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::EnumIter,
    strum::VariantArray,
)]
pub enum Face {
    /// Front face.
    Front = 0,
    /// Right face.
    Right = 1,
    /// Down face.
    Down = 2,
    /// Back face.
    Back = 3,
    /// Left face.
    Left = 4,
    /// Top face.
    Top = 5,
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl From<Face> for usize {
    fn from(face: Face) -> Self {
        face.index()
    }
}

impl Face {
    /// Returns the index of the face in `0..6`.
    pub fn index(self) -> usize {
        self as usize
    }
    /// Returns the face with index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 6`.
    pub fn from_index(i: usize) -> Self {
        Self::VARIANTS[i]
    }
    /// Returns the face with index `i`, or an error if `i >= 6`.
    pub fn try_from_index(i: usize) -> Result<Self, IndexOutOfRange> {
        IndexOutOfRange::check("face", i, FACE_COUNT)?;
        Ok(Self::VARIANTS[i])
    }

    /// Returns the next face in cyclic order.
    #[must_use]
    pub fn next(self) -> Self {
        Self::VARIANTS[(self.index() + 1) % FACE_COUNT]
    }
    /// Returns the previous face in cyclic order.
    #[must_use]
    pub fn prev(self) -> Self {
        Self::VARIANTS[(self.index() + FACE_COUNT - 1) % FACE_COUNT]
    }
    /// Returns the face on the other side of the cube.
    #[must_use]
    pub fn opposite(self) -> Self {
        Self::VARIANTS[(self.index() + 3) % FACE_COUNT]
    }
    /// Returns the four faces that share an edge with this one:
    /// `[next, prev, next.next, prev.prev]`.
    pub fn adjacent(self) -> [Self; 4] {
        [
            self.next(),
            self.prev(),
            self.next().next(),
            self.prev().prev(),
        ]
    }

    /// Returns the tangent vector `t` of the face frame.
    pub fn tangent(self) -> GridVector {
        match self {
            Face::Front => vec3(1, 0, 0),
            Face::Right => vec3(0, -1, 0),
            Face::Down => vec3(0, 0, 1),
            Face::Back => vec3(-1, 0, 0),
            Face::Left => vec3(0, 1, 0),
            Face::Top => vec3(0, 0, -1),
        }
    }
    /// Returns the bitangent vector `b` of the face frame.
    pub fn bitangent(self) -> GridVector {
        match self {
            Face::Front | Face::Back => vec3(0, 1, 0),
            Face::Right | Face::Left => vec3(0, 0, 1),
            Face::Down | Face::Top => vec3(1, 0, 0),
        }
    }
    /// Returns the normal vector `n` of the face frame, which points into the
    /// cube.
    pub fn normal(self) -> GridVector {
        grid_cross(self.tangent(), self.bitangent())
    }
    /// Returns the unit vector from the center of the cube toward this face.
    pub fn outward_normal(self) -> GridVector {
        -self.normal()
    }
    /// Returns the face whose outward normal is `v`, or `None` if `v` is not
    /// an axis-aligned unit vector.
    pub fn from_outward_normal(v: GridVector) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|face| face.outward_normal() == v)
    }

    /// Returns the single-letter notation for the face.
    pub fn symbol(self) -> char {
        match self {
            Face::Front => 'F',
            Face::Right => 'R',
            Face::Down => 'D',
            Face::Back => 'B',
            Face::Left => 'L',
            Face::Top => 'T',
        }
    }
    /// Returns the face with the given notation letter. `U` (up) is accepted
    /// as a synonym for `T`.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'F' => Some(Face::Front),
            'R' => Some(Face::Right),
            'D' => Some(Face::Down),
            'B' => Some(Face::Back),
            'L' => Some(Face::Left),
            'T' | 'U' => Some(Face::Top),
            _ => None,
        }
    }
}
