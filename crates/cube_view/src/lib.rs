//! Cube user interface state manager: animations, input handling, undo
//! history, and game stages, independent of any windowing or graphics
//! backend.

mod action;
mod animations;
mod animator;
mod game;
mod simulation;

pub use action::Action;
pub use animations::{DEFAULT_ROTATION_SPEED, RotateAnimation, TransformId, TransformStore};
pub use animator::{CubeAnimator, ViewDirection, VisibleFace};
pub use game::{Game, GameStage, StageKind};
pub use simulation::{CubeSimulation, HELP_LINES};
