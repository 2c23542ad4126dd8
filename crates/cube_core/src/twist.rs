//! Twist notation.
//!
//! A twist is written as a face letter (`F R D B L T`, or `U` for the top)
//! followed by an optional suffix: `'` for the reverse direction or `2` for a
//! half turn.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::Face;

/// Direction and amount of a face twist.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum TwistDirection {
    /// One quarter turn, the same rotation as
    /// [`crate::RubikState::apply_face_rotation()`].
    Clockwise,
    /// Two quarter turns.
    Double,
    /// One quarter turn in reverse, equivalent to three quarter turns.
    CounterClockwise,
}
impl TwistDirection {
    /// Returns the signed number of quarter turns: `1`, `2`, or `-1`.
    pub fn quarter_turns(self) -> i32 {
        match self {
            TwistDirection::Clockwise => 1,
            TwistDirection::Double => 2,
            TwistDirection::CounterClockwise => -1,
        }
    }
    /// Returns the reverse direction.
    #[must_use]
    pub fn rev(self) -> Self {
        match self {
            TwistDirection::Clockwise => TwistDirection::CounterClockwise,
            TwistDirection::Double => TwistDirection::Double,
            TwistDirection::CounterClockwise => TwistDirection::Clockwise,
        }
    }
    fn suffix(self) -> &'static str {
        match self {
            TwistDirection::Clockwise => "",
            TwistDirection::Double => "2",
            TwistDirection::CounterClockwise => "'",
        }
    }
}

/// Face twist.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Twist {
    /// Face to turn.
    pub face: Face,
    /// Direction and amount to turn it.
    pub direction: TwistDirection,
}
impl Twist {
    /// Constructs a clockwise quarter twist of `face`.
    pub fn quarter(face: Face) -> Self {
        Self {
            face,
            direction: TwistDirection::Clockwise,
        }
    }
    /// Returns the twist that undoes this one.
    #[must_use]
    pub fn rev(self) -> Self {
        Self {
            face: self.face,
            direction: self.direction.rev(),
        }
    }
}

impl fmt::Display for Twist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.direction.suffix())
    }
}

/// Error parsing twist notation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TwistParseError {
    /// Empty string.
    #[error("empty twist")]
    Empty,
    /// Unknown face letter.
    #[error("unknown face {0:?}")]
    UnknownFace(char),
    /// Unknown suffix after the face letter.
    #[error("invalid suffix {suffix:?} in twist {twist:?}")]
    InvalidSuffix {
        /// Whole twist string.
        twist: String,
        /// Unrecognized suffix.
        suffix: String,
    },
}

impl FromStr for Twist {
    type Err = TwistParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let face_char = chars.next().ok_or(TwistParseError::Empty)?;
        let face = Face::from_symbol(face_char).ok_or(TwistParseError::UnknownFace(face_char))?;
        let direction = match chars.as_str() {
            "" => TwistDirection::Clockwise,
            "'" => TwistDirection::CounterClockwise,
            "2" | "2'" => TwistDirection::Double,
            suffix => {
                return Err(TwistParseError::InvalidSuffix {
                    twist: s.to_owned(),
                    suffix: suffix.to_owned(),
                });
            }
        };
        Ok(Self { face, direction })
    }
}

/// Parses a whitespace-separated sequence of twists.
pub fn parse_twists(s: &str) -> Result<Vec<Twist>, TwistParseError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Formats a sequence of twists separated by spaces.
pub fn format_twists(twists: &[Twist]) -> String {
    twists.iter().join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_twists() {
        let twists = parse_twists("F R' U2  b2'\tL").expect("valid notation");
        assert_eq!(
            twists,
            vec![
                Twist::quarter(Face::Front),
                Twist::quarter(Face::Right).rev(),
                Twist {
                    face: Face::Top,
                    direction: TwistDirection::Double,
                },
                Twist {
                    face: Face::Back,
                    direction: TwistDirection::Double,
                },
                Twist::quarter(Face::Left),
            ],
        );
        assert_eq!(format_twists(&twists), "F R' T2 B2 L");
        assert_eq!(parse_twists(""), Ok(vec![]));
    }

    #[test]
    fn test_parse_twist_errors() {
        assert_eq!("X".parse::<Twist>(), Err(TwistParseError::UnknownFace('X')));
        assert_eq!("".parse::<Twist>(), Err(TwistParseError::Empty));
        assert_eq!(
            parse_twists("F R3"),
            Err(TwistParseError::InvalidSuffix {
                twist: "R3".to_owned(),
                suffix: "3".to_owned(),
            }),
        );
    }

    #[test]
    fn test_rev() {
        for direction in <TwistDirection as strum::IntoEnumIterator>::iter() {
            assert_eq!(direction.rev().rev(), direction);
            assert_eq!((direction.quarter_turns() + direction.rev().quarter_turns()) % 4, 0);
        }
    }
}
