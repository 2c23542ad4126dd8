//! Game stages and keyboard dispatch.

use cube_core::ScrambleParams;
use cubeprefs::{Command, Key, Preferences};
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::animator::{ViewDirection, VisibleFace};
use crate::simulation::CubeSimulation;

/// Kind of game stage, without any associated state.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
pub enum StageKind {
    /// Title screen.
    StartMenu,
    /// Cube is being played with.
    Playing,
    /// Scrambled cube was solved.
    GameOver,
}

/// Current stage of the game.
#[derive(Debug)]
pub enum GameStage {
    /// Title screen.
    StartMenu,
    /// Cube is being played with.
    Playing(Box<CubeSimulation>),
    /// Scrambled cube was solved. Keeps the final simulation so it can still
    /// be displayed.
    GameOver(Box<CubeSimulation>),
}
impl GameStage {
    /// Returns the kind of stage.
    pub fn kind(&self) -> StageKind {
        match self {
            GameStage::StartMenu => StageKind::StartMenu,
            GameStage::Playing(_) => StageKind::Playing,
            GameStage::GameOver(_) => StageKind::GameOver,
        }
    }
}

/// Game state machine: start menu, playing, and game over.
#[derive(Debug)]
pub struct Game {
    prefs: Preferences,
    stage: GameStage,
}
impl Game {
    /// Constructs a game at the start menu.
    pub fn new(prefs: Preferences) -> Self {
        Self {
            prefs,
            stage: GameStage::StartMenu,
        }
    }

    /// Returns the current stage.
    pub fn stage(&self) -> &GameStage {
        &self.stage
    }
    /// Returns the kind of the current stage.
    pub fn stage_kind(&self) -> StageKind {
        self.stage.kind()
    }
    /// Returns the simulation being played or just finished, if any.
    pub fn simulation(&self) -> Option<&CubeSimulation> {
        match &self.stage {
            GameStage::StartMenu => None,
            GameStage::Playing(sim) | GameStage::GameOver(sim) => Some(&**sim),
        }
    }
    /// Returns the preferences.
    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }

    /// Advances to the next stage.
    pub fn next_stage(&mut self) {
        self.stage = match std::mem::replace(&mut self.stage, GameStage::StartMenu) {
            GameStage::StartMenu => GameStage::Playing(Box::new(self.new_simulation())),
            GameStage::Playing(sim) => GameStage::GameOver(sim),
            GameStage::GameOver(_) => GameStage::StartMenu,
        };
        log::info!("Entering stage {}", self.stage.kind());
    }

    fn new_simulation(&self) -> CubeSimulation {
        let mut sim = CubeSimulation::new(&self.prefs);
        let interaction = &self.prefs.interaction;
        if interaction.scramble_length > 0 {
            let length = interaction.scramble_length;
            sim.scramble(match &interaction.scramble_seed {
                Some(seed) => ScrambleParams {
                    length,
                    seed: seed.clone(),
                },
                None => ScrambleParams::random(length),
            });
        }
        sim
    }

    /// Handles a key press. Returns whether the key did anything.
    pub fn key_press(&mut self, key: Key) -> bool {
        match self.prefs.command_for_key(key) {
            Some(command) => self.do_command(command),
            None => {
                log::trace!("Key {key} is not bound");
                false
            }
        }
    }

    /// Executes a command. Returns whether the command did anything.
    pub fn do_command(&mut self, command: Command) -> bool {
        if command == Command::NextStage {
            self.next_stage();
            return true;
        }

        let GameStage::Playing(sim) = &mut self.stage else {
            log::trace!("Ignoring {command:?} outside of play");
            return false;
        };
        match command {
            Command::NextStage => false,
            Command::ResetView => sim.reset_view(),
            Command::ToggleHelp => {
                sim.toggle_help();
                true
            }
            Command::RotateUp => sim.rotate_view(ViewDirection::Up),
            Command::RotateDown => sim.rotate_view(ViewDirection::Down),
            Command::RotateLeft => sim.rotate_view(ViewDirection::Left),
            Command::RotateRight => sim.rotate_view(ViewDirection::Right),
            Command::TurnFront => sim.turn_face(VisibleFace::Front),
            Command::TurnRight => sim.turn_face(VisibleFace::Right),
            Command::TurnTop => sim.turn_face(VisibleFace::Top),
            Command::Undo => sim.undo(),
            Command::Redo => sim.redo(),
        }
    }

    /// Steps animations forward by `delta` and ends the game if a scrambled
    /// cube was just solved. Returns whether anything is still animating.
    pub fn update(&mut self, delta: Duration) -> bool {
        let GameStage::Playing(sim) = &mut self.stage else {
            return false;
        };
        let running = sim.step_by(delta);
        if !running && sim.handle_newly_solved_state() {
            log::info!("Cube solved!");
            self.next_stage();
        }
        running
    }
}

#[cfg(test)]
mod tests {
    use cube_core::{Face, RubikState, generate_scramble};
    use pretty_assertions::assert_eq;

    use super::*;

    const FRAME: Duration = Duration::from_millis(10);

    fn settle(game: &mut Game) {
        for _ in 0..1000 {
            if !game.update(FRAME) {
                return;
            }
        }
        panic!("animations did not finish");
    }

    #[test]
    fn test_stage_cycle() {
        let mut game = Game::new(Preferences::default());
        assert_eq!(game.stage_kind(), StageKind::StartMenu);
        assert!(game.simulation().is_none());

        // Commands other than advancing do nothing at the start menu.
        assert!(!game.key_press(cubeprefs::Key::Digit1));
        assert!(game.key_press(Key::Enter));
        assert_eq!(game.stage_kind(), StageKind::Playing);
        assert!(game.simulation().is_some_and(|sim| sim.state().is_solved()));

        assert!(game.key_press(Key::Enter));
        assert_eq!(game.stage_kind(), StageKind::GameOver);
        assert!(game.key_press(Key::Enter));
        assert_eq!(game.stage_kind(), StageKind::StartMenu);
    }

    #[test]
    fn test_key_dispatch_and_lock() {
        let mut game = Game::new(Preferences::default());
        game.next_stage();

        assert!(game.key_press(Key::Digit1));
        assert!(!game.key_press(Key::Digit2));
        assert!(!game.key_press(Key::Up));
        assert!(!game.key_press(Key::Space));
        settle(&mut game);

        assert!(game.key_press(Key::Digit2));
        settle(&mut game);

        let mut expected = RubikState::new();
        expected.apply_face_rotation(Face::Front);
        expected.apply_face_rotation(Face::Right);
        let sim = game.simulation().expect("playing");
        assert_eq!(*sim.state(), expected);

        assert!(game.key_press(Key::H));
        let sim = game.simulation().expect("playing");
        assert_eq!(sim.help_lines().len(), 3);
    }

    #[test]
    fn test_solving_scramble_ends_game() {
        let mut prefs = Preferences::default();
        prefs.interaction.scramble_length = 6;
        prefs.interaction.scramble_seed = Some("game".to_owned());
        let scramble = generate_scramble(&ScrambleParams {
            length: 6,
            seed: "game".to_owned(),
        });

        let mut game = Game::new(prefs);
        game.next_stage();
        assert_eq!(game.stage_kind(), StageKind::Playing);
        assert!(!game.simulation().expect("playing").is_solved());

        for twist in scramble.iter().rev() {
            let GameStage::Playing(sim) = &mut game.stage else {
                panic!("game ended early");
            };
            assert!(sim.do_twist(twist.rev()));
            settle(&mut game);
        }
        assert_eq!(game.stage_kind(), StageKind::GameOver);
        assert!(game.simulation().expect("finished").is_solved());
    }
}
