mod rotate;

pub use rotate::{DEFAULT_ROTATION_SPEED, RotateAnimation, TransformId, TransformStore};
