use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnimationPreferences {
    /// Speed of face and view rotations, in radians per second.
    pub rotation_speed: f32,
}
