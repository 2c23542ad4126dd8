use serde::{Deserialize, Serialize};

/// Key on the keyboard.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Key {
    Enter,
    Escape,
    Space,
    Up,
    Down,
    Left,
    Right,
    #[serde(rename = "0")]
    #[strum(serialize = "0")]
    Digit0,
    #[serde(rename = "1")]
    #[strum(serialize = "1")]
    Digit1,
    #[serde(rename = "2")]
    #[strum(serialize = "2")]
    Digit2,
    #[serde(rename = "3")]
    #[strum(serialize = "3")]
    Digit3,
    H,
    Y,
    Z,
}

/// Command that can be bound to a key.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, strum::EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Advance to the next game stage.
    NextStage,
    /// Return the view to its starting orientation.
    ResetView,
    /// Show or hide the help text.
    ToggleHelp,

    /// Rotate the whole cube upward.
    RotateUp,
    /// Rotate the whole cube downward.
    RotateDown,
    /// Rotate the whole cube to the left.
    RotateLeft,
    /// Rotate the whole cube to the right.
    RotateRight,

    /// Twist the face currently facing the front of the view.
    TurnFront,
    /// Twist the face currently facing the right of the view.
    TurnRight,
    /// Twist the face currently facing the top of the view.
    TurnTop,

    /// Undo the last twist.
    Undo,
    /// Redo the last undone twist.
    Redo,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub key: Key,
    pub command: Command,
}
