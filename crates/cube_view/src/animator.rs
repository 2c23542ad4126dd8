//! Visual transforms of the cube and the animations that drive them.

use cube_core::{Face, PIECE_COUNT, Piece};
use cubemath::grid::{self, round_to_grid};
use cubemath::prelude::*;
use cubeprefs::AnimationPreferences;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::animations::{RotateAnimation, TransformId, TransformStore};

/// Scale applied to the whole cube so that it fits in the unit sphere.
const CUBE_SCALE: Float = 2.0 / 3.0 / 1.732_050_8;
/// Scale applied to each piece, leaving a small overlap between neighbors.
const PIECE_SCALE: Float = 1.025;

/// One of the three view directions that face-turn commands refer to.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum VisibleFace {
    /// Face pointing toward the front of the view.
    Front,
    /// Face pointing toward the right of the view.
    Right,
    /// Face pointing toward the top of the view.
    Top,
}
impl VisibleFace {
    /// Returns the direction, in view space, that the face points.
    pub fn view_normal(self) -> Vector3<Float> {
        match self {
            VisibleFace::Front => vec3(0.0, 0.0, -1.0),
            VisibleFace::Right => vec3(1.0, 0.0, 0.0),
            VisibleFace::Top => vec3(0.0, 1.0, 0.0),
        }
    }
}

/// Direction to rotate the whole cube.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum ViewDirection {
    /// Rotate upward, around the X axis.
    Up,
    /// Rotate downward, around the X axis.
    Down,
    /// Rotate to the left, around the Y axis.
    Left,
    /// Rotate to the right, around the Y axis.
    Right,
}
impl ViewDirection {
    /// Returns the axis of rotation.
    pub fn axis(self) -> Vector3<Float> {
        match self {
            ViewDirection::Up => vec3(1.0, 0.0, 0.0),
            ViewDirection::Down => vec3(-1.0, 0.0, 0.0),
            ViewDirection::Left => vec3(0.0, -1.0, 0.0),
            ViewDirection::Right => vec3(0.0, 1.0, 0.0),
        }
    }
}

/// Transforms of all 27 pieces and the view, along with one rotation
/// animation for each of them.
///
/// The animator is _locked_ while any animation is running.
#[derive(Debug, Clone)]
pub struct CubeAnimator {
    transforms: TransformStore,
    /// Model transform of each piece, indexed by piece.
    piece_transforms: Vec<TransformId>,
    view_transform: TransformId,

    piece_anims: Vec<RotateAnimation>,
    view_anim: RotateAnimation,

    projection: Matrix4<Float>,
}
impl CubeAnimator {
    /// Constructs an animator with every piece in its starting position and
    /// the default view.
    pub fn new(prefs: &AnimationPreferences) -> Self {
        let mut transforms = TransformStore::new();
        let piece_transforms = (0..PIECE_COUNT)
            .map(|i| transforms.push(Self::initial_piece_transform(Piece::from_index(i))))
            .collect();
        let view_transform = transforms.push(Matrix4::identity());
        let anim = RotateAnimation::new(prefs.rotation_speed);

        Self {
            transforms,
            piece_transforms,
            view_transform,

            piece_anims: vec![anim.clone(); PIECE_COUNT],
            view_anim: anim,

            projection: Matrix4::identity(),
        }
    }

    /// Returns the model transform of a piece in the solved state.
    pub fn initial_piece_transform(piece: Piece) -> Matrix4<Float> {
        Matrix4::from_scale(CUBE_SCALE)
            * Matrix4::from_translation(grid::to_float(piece.pos()))
            * Matrix4::from_scale(PIECE_SCALE)
    }

    /// Moves every piece back to its starting position. Must not be called
    /// while a piece animation is running.
    pub fn reset_pieces(&mut self) {
        debug_assert!(!self.piece_anims.iter().any(|a| a.is_locked()));
        for i in 0..PIECE_COUNT {
            self.transforms[self.piece_transforms[i]] =
                Self::initial_piece_transform(Piece::from_index(i));
        }
    }

    /// Returns whether any animation is running.
    pub fn is_locked(&self) -> bool {
        self.view_anim.is_locked() || self.piece_anims.iter().any(|a| a.is_locked())
    }

    /// Steps all animations forward by `delta`. Returns whether any animation
    /// is still running.
    pub fn update(&mut self, delta: Duration) -> bool {
        let view_was_rotating = self.view_anim.is_locked();
        let mut running = self.view_anim.update(&mut self.transforms, delta);
        if view_was_rotating && !self.view_anim.is_locked() {
            self.snap_view();
        }
        for anim in &mut self.piece_anims {
            running |= anim.update(&mut self.transforms, delta);
        }
        running
    }

    /// Starts rotating `pieces` around the outward normal of `face` by
    /// `angle` radians.
    pub fn launch_face_rotation(&mut self, face: Face, pieces: &[usize], angle: Float) {
        let axis = grid::to_float(face.outward_normal());
        for &piece in pieces {
            self.piece_anims[piece].start_animation(
                &self.transforms,
                self.piece_transforms[piece],
                axis,
                angle,
            );
        }
    }

    /// Rotates `pieces` around the outward normal of `face` by
    /// `quarter_turns` quarter turns, with no animation.
    pub fn apply_face_rotation_instantly(&mut self, face: Face, pieces: &[usize], quarter_turns: i32) {
        let rot = grid_rotation(face.outward_normal(), quarter_turns);
        for &piece in pieces {
            let id = self.piece_transforms[piece];
            self.transforms[id] = rot * self.transforms[id];
        }
    }

    /// Starts rotating the view around `axis` by `quarter_turns` quarter
    /// turns.
    pub fn launch_view_rotation(&mut self, axis: Vector3<Float>, quarter_turns: Float) {
        let angle = quarter_turns * QUARTER_TURN;
        self.view_anim
            .start_animation(&self.transforms, self.view_transform, axis, angle);
    }

    /// Removes rounding error from the view if it is close to an exact grid
    /// rotation, so that it stays axis-aligned after any number of quarter
    /// turns.
    fn snap_view(&mut self) {
        let view = &mut self.transforms[self.view_transform];
        if let Some(snapped) = snap_to_grid_rotation(view) {
            *view = snapped;
        }
    }

    /// Returns the view to its starting orientation. Must not be called while
    /// the view is rotating.
    pub fn reset_view(&mut self) {
        debug_assert!(!self.view_anim.is_locked());
        self.transforms[self.view_transform] = Matrix4::identity();
    }

    /// Returns the view transform.
    pub fn view(&self) -> &Matrix4<Float> {
        &self.transforms[self.view_transform]
    }
    /// Returns the model transform of a piece.
    pub fn piece_transform(&self, piece: usize) -> &Matrix4<Float> {
        &self.transforms[self.piece_transforms[piece]]
    }

    /// Returns the face of the cube that currently points in the direction
    /// of `visible`, or `None` if the view is not axis-aligned.
    pub fn face_in_view(&self, visible: VisibleFace) -> Option<Face> {
        let direction = inverse_rotate(self.view(), visible.view_normal());
        Face::from_outward_normal(round_to_grid(direction)?)
    }

    /// Updates the projection for a viewport of the given size, so that the
    /// unit square is always visible.
    pub fn resize(&mut self, width: u32, height: u32) {
        let aspect = height.max(1) as Float / width.max(1) as Float;
        self.projection = if aspect > 1.0 {
            cubemath::cgmath::ortho(-1.0, 1.0, -aspect, aspect, -1.0, 1.0)
        } else {
            cubemath::cgmath::ortho(-1.0 / aspect, 1.0 / aspect, -1.0, 1.0, -1.0, 1.0)
        };
    }
    /// Returns the projection transform.
    pub fn projection(&self) -> &Matrix4<Float> {
        &self.projection
    }

    /// Returns the full transform used to draw a piece: projection, fixed
    /// camera tilt, view, and model.
    pub fn model_view_projection(&self, piece: usize) -> Matrix4<Float> {
        let camera = Matrix4::from_angle_x(Rad(-std::f32::consts::FRAC_PI_4))
            * Matrix4::from_angle_y(Rad(std::f32::consts::PI / 7.0));
        self.projection * camera * *self.view() * *self.piece_transform(piece)
    }
}

#[cfg(test)]
mod tests {
    use cube_core::RubikState;
    use cubemath::assert_approx_eq;
    use cubemath::cgmath::vec4;
    use pretty_assertions::assert_eq;

    use super::*;

    const FRAME: Duration = Duration::from_millis(10);

    fn animator() -> CubeAnimator {
        CubeAnimator::new(&cubeprefs::DEFAULT_PREFS.animation)
    }

    fn finish(animator: &mut CubeAnimator) {
        for _ in 0..1000 {
            if !animator.update(FRAME) {
                return;
            }
        }
        panic!("animations did not finish");
    }

    #[test]
    fn test_face_in_view() {
        let mut animator = animator();
        let visible = |a: &CubeAnimator| {
            [VisibleFace::Front, VisibleFace::Right, VisibleFace::Top]
                .map(|v| a.face_in_view(v).expect("axis-aligned view"))
        };
        assert_eq!(visible(&animator), [Face::Front, Face::Right, Face::Top]);

        animator.launch_view_rotation(ViewDirection::Up.axis(), 1.0);
        assert!(animator.is_locked());
        animator.update(FRAME);
        assert_eq!(animator.face_in_view(VisibleFace::Front), None);
        finish(&mut animator);
        assert!(!animator.is_locked());
        assert_eq!(visible(&animator), [Face::Down, Face::Right, Face::Front]);

        animator.launch_view_rotation(ViewDirection::Right.axis(), 1.0);
        finish(&mut animator);
        assert_eq!(visible(&animator), [Face::Right, Face::Top, Face::Front]);

        animator.reset_view();
        assert_eq!(visible(&animator), [Face::Front, Face::Right, Face::Top]);

        for (direction, expected) in [
            (ViewDirection::Down, [Face::Top, Face::Right, Face::Back]),
            (ViewDirection::Left, [Face::Left, Face::Front, Face::Top]),
        ] {
            animator.reset_view();
            animator.launch_view_rotation(direction.axis(), 1.0);
            finish(&mut animator);
            assert_eq!(visible(&animator), expected, "{direction:?}");
        }
    }

    #[test]
    fn test_face_rotation_animation_matches_state() {
        let mut animator = animator();
        let mut state = RubikState::new();

        let pieces = state.pieces_on_face(Face::Front, false);
        animator.launch_face_rotation(Face::Front, &pieces, QUARTER_TURN);
        state.apply_face_rotation(Face::Front);
        assert!(animator.is_locked());
        finish(&mut animator);

        // Each piece is drawn where the state says it is.
        for i in 0..PIECE_COUNT {
            let slot = Piece::from_index(state.piece_mapping()[i]);
            let pos = animator.piece_transform(i).w.truncate() / CUBE_SCALE;
            assert_eq!(round_to_grid(pos), Some(slot.pos()), "piece {i}");
        }

        let mut instant = self::animator();
        instant.apply_face_rotation_instantly(Face::Front, &pieces, 1);
        for i in 0..PIECE_COUNT {
            assert_approx_eq!(*instant.piece_transform(i), *animator.piece_transform(i));
        }

        animator.reset_pieces();
        for i in 0..PIECE_COUNT {
            assert_eq!(
                *animator.piece_transform(i),
                CubeAnimator::initial_piece_transform(Piece::from_index(i)),
            );
        }
    }

    #[test]
    fn test_partial_view_rotation_is_not_snapped() {
        let mut animator = animator();
        animator.launch_view_rotation(ViewDirection::Right.axis(), 0.5);
        finish(&mut animator);
        assert_eq!(animator.face_in_view(VisibleFace::Front), None);
        assert_eq!(animator.face_in_view(VisibleFace::Top), Some(Face::Top));

        animator.launch_view_rotation(ViewDirection::Right.axis(), 0.5);
        finish(&mut animator);
        assert_eq!(animator.face_in_view(VisibleFace::Front), Some(Face::Right));
    }

    #[test]
    fn test_lock_covers_view_and_pieces() {
        let mut animator = animator();
        assert!(!animator.is_locked());
        animator.launch_face_rotation(Face::Top, &[0], -QUARTER_TURN);
        assert!(animator.is_locked());
        finish(&mut animator);
        animator.launch_view_rotation(ViewDirection::Left.axis(), 2.0);
        assert!(animator.is_locked());
        finish(&mut animator);
        assert!(!animator.is_locked());
    }

    #[test]
    fn test_resize() {
        let mut animator = animator();
        animator.resize(800, 400);
        let corner = animator.projection() * vec4(2.0, 1.0, 0.0, 1.0);
        assert_approx_eq!(corner, vec4(1.0, 1.0, 0.0, 1.0));

        animator.resize(400, 800);
        let corner = animator.projection() * vec4(1.0, 2.0, 0.0, 1.0);
        assert_approx_eq!(corner, vec4(1.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn test_model_view_projection_keeps_cube_in_view() {
        let mut animator = animator();
        animator.resize(640, 480);
        for i in 0..PIECE_COUNT {
            let center = animator.model_view_projection(i) * vec4(0.0, 0.0, 0.0, 1.0);
            assert!(center.x.abs() <= 1.0 && center.y.abs() <= 1.0 && center.z.abs() <= 1.0);
        }
    }
}
