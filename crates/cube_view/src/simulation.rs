use cube_core::{RubikState, ScrambleParams, Twist, generate_scramble};
use cubemath::{Float, QUARTER_TURN};
use cubeprefs::{InteractionPreferences, Preferences};
use web_time::{Duration, Instant};

use crate::action::{Action, UndoBehavior};
use crate::animator::{CubeAnimator, ViewDirection, VisibleFace};

const ASSUMED_FPS: f32 = 120.0;

/// Lines of help text for the keyboard controls.
pub const HELP_LINES: &[&str] = &[
    "1 / 2 / 3 : rotate visible faces",
    "left/right: rotate cube horizontally",
    "up / down : rotate cube vertically",
];

/// Cube simulation, which manages the cube state, animations, undo stack,
/// etc.
///
/// Twists update the logical state immediately and start an animation of the
/// affected pieces. New twists and view rotations are rejected until all
/// animations finish.
#[derive(Debug, Clone)]
pub struct CubeSimulation {
    /// Latest cube state, not including any animation in progress.
    state: RubikState,
    /// Visual transforms and animations.
    animator: CubeAnimator,
    /// Number of quarter turns for each view rotation.
    view_rotation_quarter_turns: Float,

    /// Scramble applied to the cube, if any.
    scramble: Option<ScrambleParams>,
    /// Stack of actions to undo.
    undo_stack: Vec<Action>,
    /// Stack of actions to redo.
    redo_stack: Vec<Action>,
    /// Whether the cube is solved.
    solved: bool,
    /// Whether the solved state has been handled by the UI.
    solved_state_handled: bool,
    /// Whether the help text is visible.
    show_help: bool,

    /// Time of last frame, or `None` if we are not in the middle of an
    /// animation.
    last_frame_time: Option<Instant>,
}
impl CubeSimulation {
    /// Constructs a new simulation with a solved cube.
    pub fn new(prefs: &Preferences) -> Self {
        let InteractionPreferences {
            view_rotation_quarter_turns,
            show_help,
            ..
        } = prefs.interaction;
        Self {
            state: RubikState::new(),
            animator: CubeAnimator::new(&prefs.animation),
            view_rotation_quarter_turns,

            scramble: None,
            undo_stack: vec![],
            redo_stack: vec![],
            solved: true,
            solved_state_handled: true,
            show_help,

            last_frame_time: None,
        }
    }

    /// Returns the latest cube state, after all animations have completed.
    pub fn state(&self) -> &RubikState {
        &self.state
    }
    /// Returns the animator.
    pub fn animator(&self) -> &CubeAnimator {
        &self.animator
    }
    /// Returns the animator, for resizing or other presentation changes.
    pub fn animator_mut(&mut self) -> &mut CubeAnimator {
        &mut self.animator
    }
    /// Returns whether an animation is running, which blocks new twists and
    /// view rotations.
    pub fn is_locked(&self) -> bool {
        self.animator.is_locked()
    }

    /// Twists the face that currently points toward `visible`. Returns
    /// whether the twist was accepted.
    pub fn turn_face(&mut self, visible: VisibleFace) -> bool {
        if self.reject_if_locked("face turn") {
            return false;
        }
        let Some(face) = self.animator.face_in_view(visible) else {
            log::error!("No face points toward {visible:?}; view is not axis-aligned");
            return false;
        };
        self.do_twist(Twist::quarter(face))
    }

    /// Applies a twist with animation and adds it to the undo history.
    /// Returns whether the twist was accepted.
    pub fn do_twist(&mut self, twist: Twist) -> bool {
        if self.reject_if_locked("twist") {
            return false;
        }
        self.apply_twist_animated(twist);
        self.undo_stack.push(Action::Twist(twist));
        self.redo_stack.clear();
        true
    }

    fn apply_twist_animated(&mut self, twist: Twist) {
        log::debug!("Twisting {twist}");
        let pieces = self.state.pieces_on_face(twist.face, false);
        let angle = twist.direction.quarter_turns() as Float * QUARTER_TURN;
        self.animator
            .launch_face_rotation(twist.face, &pieces, angle);
        self.state.apply_twist(twist);
        self.solved = self.state.is_solved();
    }

    /// Starts rotating the whole cube. Returns whether the rotation was
    /// accepted.
    pub fn rotate_view(&mut self, direction: ViewDirection) -> bool {
        if self.reject_if_locked("view rotation") {
            return false;
        }
        log::debug!("Rotating view {direction:?}");
        self.animator
            .launch_view_rotation(direction.axis(), self.view_rotation_quarter_turns);
        true
    }
    /// Returns the view to its starting orientation. Returns whether the
    /// reset was accepted.
    pub fn reset_view(&mut self) -> bool {
        if self.reject_if_locked("view reset") {
            return false;
        }
        self.animator.reset_view();
        true
    }

    fn reject_if_locked(&self, what: &str) -> bool {
        let locked = self.is_locked();
        if locked {
            log::debug!("Ignoring {what} while animation is in progress");
        }
        locked
    }

    /// Returns whether there is a twist to undo.
    pub fn has_undo(&self) -> bool {
        self.undo_stack
            .last()
            .is_some_and(|a| matches!(a.undo_behavior(), UndoBehavior::Action))
    }
    /// Returns whether there is a twist to redo.
    pub fn has_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
    /// Undoes one twist, with animation. Returns whether anything was undone.
    pub fn undo(&mut self) -> bool {
        if !self.has_undo() || self.reject_if_locked("undo") {
            return false;
        }
        let Some(action) = self.undo_stack.pop() else {
            return false;
        };
        if let Action::Twist(twist) = &action {
            self.apply_twist_animated(twist.rev());
        }
        self.redo_stack.push(action);
        true
    }
    /// Redoes one twist, with animation. Returns whether anything was redone.
    pub fn redo(&mut self) -> bool {
        if !self.has_redo() || self.reject_if_locked("redo") {
            return false;
        }
        let Some(action) = self.redo_stack.pop() else {
            return false;
        };
        if let Action::Twist(twist) = &action {
            self.apply_twist_animated(*twist);
        }
        self.undo_stack.push(action);
        true
    }
    /// Returns the twists that have been done since the scramble, not
    /// including undone ones.
    pub fn twists(&self) -> Vec<Twist> {
        self.undo_stack
            .iter()
            .filter_map(|action| match action {
                Action::Twist(twist) => Some(*twist),
                Action::Scramble { .. } => None,
            })
            .collect()
    }

    /// Resets the cube and applies a scramble instantly. The scramble cannot
    /// be undone. Returns whether the scramble was accepted.
    pub fn scramble(&mut self, params: ScrambleParams) -> bool {
        if self.reject_if_locked("scramble") {
            return false;
        }
        let twists = generate_scramble(&params);
        log::info!("Scrambling with {} twists", twists.len());

        self.state = RubikState::new();
        self.animator.reset_pieces();
        for &twist in &twists {
            let pieces = self.state.pieces_on_face(twist.face, false);
            self.animator.apply_face_rotation_instantly(
                twist.face,
                &pieces,
                twist.direction.quarter_turns(),
            );
            self.state.apply_twist(twist);
        }

        self.undo_stack = vec![Action::Scramble {
            params: params.clone(),
        }];
        self.redo_stack.clear();
        self.scramble = Some(params);
        self.solved = self.state.is_solved();
        self.solved_state_handled = self.solved;
        true
    }
    /// Returns the scramble, or `None` if the cube has not been scrambled.
    pub fn get_scramble(&self) -> Option<&ScrambleParams> {
        self.scramble.as_ref()
    }

    /// Returns whether the cube is solved.
    pub fn is_solved(&self) -> bool {
        self.solved
    }
    /// Returns `true` if the cube was scrambled and has become solved since
    /// the last call. Returns `false` on every later call until it is solved
    /// again.
    pub fn handle_newly_solved_state(&mut self) -> bool {
        if !self.solved {
            self.solved_state_handled = false;
            return false;
        }
        let newly_solved = self.scramble.is_some() && !self.solved_state_handled;
        self.solved_state_handled = true;
        newly_solved
    }

    /// Shows or hides the help text.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
    /// Returns the help text to display, which is empty if help is hidden.
    pub fn help_lines(&self) -> &'static [&'static str] {
        match self.show_help {
            true => HELP_LINES,
            false => &[],
        }
    }

    /// Steps the simulation forward by one frame, measuring the time since
    /// the last frame. Returns whether the cube should be redrawn next frame.
    pub fn step(&mut self) -> bool {
        let now = Instant::now();
        let delta = match self.last_frame_time {
            Some(then) => now - then,
            None => Duration::from_secs_f32(1.0 / ASSUMED_FPS),
        };
        let needs_redraw = self.step_by(delta);
        self.last_frame_time = needs_redraw.then_some(now);
        needs_redraw
    }
    /// Steps the simulation forward by `delta`. Returns whether the cube
    /// should be redrawn next frame.
    pub fn step_by(&mut self, delta: Duration) -> bool {
        self.animator.update(delta)
    }
}
