use std::ops::{Index, IndexMut};

use cubemath::prelude::*;
use web_time::Duration;

/// Rotation speed used when preferences specify an unusable one, in radians
/// per second.
pub const DEFAULT_ROTATION_SPEED: Float = 5.0;

/// Handle to a transform in a [`TransformStore`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TransformId(usize);

/// Storage for transforms that animations modify.
///
/// Animations hold [`TransformId`]s instead of references, so the owner of
/// the store can read and write transforms between frames.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TransformStore {
    transforms: Vec<Matrix4<Float>>,
}
impl TransformStore {
    /// Constructs an empty store.
    pub fn new() -> Self {
        Self::default()
    }
    /// Adds a transform and returns its handle.
    pub fn push(&mut self, transform: Matrix4<Float>) -> TransformId {
        self.transforms.push(transform);
        TransformId(self.transforms.len() - 1)
    }
    /// Returns the number of transforms.
    pub fn len(&self) -> usize {
        self.transforms.len()
    }
    /// Returns whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}
impl Index<TransformId> for TransformStore {
    type Output = Matrix4<Float>;

    fn index(&self, id: TransformId) -> &Self::Output {
        &self.transforms[id.0]
    }
}
impl IndexMut<TransformId> for TransformStore {
    fn index_mut(&mut self, id: TransformId) -> &mut Self::Output {
        &mut self.transforms[id.0]
    }
}

/// Animation that rotates one transform around a fixed axis at constant
/// speed, then snaps it to the exact final transform.
///
/// While the animation is running it is _locked_; callers use this to reject
/// new commands until the animation finishes. The same instance is reused for
/// every animation on its target.
#[derive(Debug, Clone)]
pub struct RotateAnimation {
    /// Rotation speed in radians per second.
    speed: Float,

    /// Transform being animated.
    target: Option<TransformId>,
    /// Rotation axis, as given. [`rotation()`] normalizes it.
    axis: Vector3<Float>,
    /// Angle still to rotate, in radians. Its sign is the direction of
    /// rotation.
    remaining_angle: Float,
    /// Transform to snap to when the animation completes.
    final_transform: Matrix4<Float>,
    locked: bool,
}
impl Default for RotateAnimation {
    fn default() -> Self {
        Self::new(DEFAULT_ROTATION_SPEED)
    }
}
impl RotateAnimation {
    /// Constructs an idle animation that rotates at `speed` radians per
    /// second.
    pub fn new(speed: Float) -> Self {
        let speed = if speed.is_finite() && speed > 0.0 {
            speed
        } else {
            log::warn!("Invalid rotation speed {speed}; using {DEFAULT_ROTATION_SPEED}");
            DEFAULT_ROTATION_SPEED
        };
        Self {
            speed,

            target: None,
            axis: Vector3::unit_z(),
            remaining_angle: 0.0,
            final_transform: Matrix4::identity(),
            locked: false,
        }
    }

    /// Starts rotating `transforms[target]` by `angle` radians around `axis`.
    /// Any animation already in progress is abandoned where it is.
    pub fn start_animation(
        &mut self,
        transforms: &TransformStore,
        target: TransformId,
        axis: Vector3<Float>,
        angle: Float,
    ) {
        self.axis = axis;
        self.remaining_angle = angle;
        self.final_transform = rotation(axis, angle) * transforms[target];
        self.target = Some(target);
        self.locked = true;
    }

    /// Steps the animation forward by `delta`. Returns whether the animation
    /// is still running.
    pub fn update(&mut self, transforms: &mut TransformStore, delta: Duration) -> bool {
        if !self.locked {
            return false;
        }
        let Some(target) = self.target else {
            self.locked = false;
            return false;
        };

        let old_angle = self.remaining_angle;
        let step = (self.speed * delta.as_secs_f32()).copysign(old_angle);
        self.remaining_angle -= step;

        if old_angle * self.remaining_angle <= 0.0 {
            transforms[target] = self.final_transform;
            self.remaining_angle = 0.0;
            self.locked = false;
        } else {
            transforms[target] = rotation(self.axis, step) * transforms[target];
        }

        self.locked
    }

    /// Returns whether the animation is running.
    pub fn is_locked(&self) -> bool {
        self.locked
    }
    /// Returns the angle still to rotate, in radians.
    pub fn remaining_angle(&self) -> Float {
        self.remaining_angle
    }
    /// Returns the rotation speed in radians per second.
    pub fn speed(&self) -> Float {
        self.speed
    }
}
