use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InteractionPreferences {
    /// Number of quarter turns for each keyboard view rotation.
    pub view_rotation_quarter_turns: f32,
    /// Number of twists to scramble the cube with when starting a game. If
    /// zero, the game starts solved.
    pub scramble_length: usize,
    /// Fixed scramble seed, for reproducible games.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scramble_seed: Option<String>,
    /// Whether the help overlay is shown when a game starts.
    pub show_help: bool,
}
