use serde::{Deserialize, Serialize};

use crate::{AnimationPreferences, InteractionPreferences, Keybind};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Preferences {
    pub animation: AnimationPreferences,
    pub interaction: InteractionPreferences,
    pub keybinds: Vec<Keybind>,
}
