use cube_core::{RubikState, Twist, format_twists};
use cube_view::{Game, StageKind};
use cubemath::permutations::{self, Parity};
use serde::Serialize;

/// JSON-friendly description of a cube state.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub(crate) struct StateSummary {
    pub solved: bool,
    pub facet_mapping: Vec<usize>,
    pub piece_mapping: Vec<usize>,
    pub facet_parity: &'static str,
    pub piece_parity: &'static str,
    /// Number of times the state must be repeated to return to solved.
    pub order: usize,
    /// Nontrivial cycles of the facet permutation.
    pub facet_cycles: Vec<Vec<usize>>,
    /// Nontrivial cycles of the piece permutation.
    pub piece_cycles: Vec<Vec<usize>>,
}
impl From<&RubikState> for StateSummary {
    fn from(state: &RubikState) -> Self {
        let parity_name = |p| match p {
            Parity::Even => "even",
            Parity::Odd => "odd",
        };
        Self {
            solved: state.is_solved(),
            facet_mapping: state.facet_mapping().to_vec(),
            piece_mapping: state.piece_mapping().to_vec(),
            facet_parity: parity_name(permutations::parity(state.facet_mapping())),
            piece_parity: parity_name(permutations::parity(state.piece_mapping())),
            order: permutations::order(state.facet_mapping()),
            facet_cycles: permutations::cycles(state.facet_mapping()),
            piece_cycles: permutations::cycles(state.piece_mapping()),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub(crate) struct ScrambleSummary {
    pub seed: String,
    pub scramble: String,
    pub state: StateSummary,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub(crate) struct GameSummary {
    pub stage: StageKind,
    pub keys_pressed: usize,
    pub keys_accepted: usize,
    pub frames: usize,
    /// Twists done since the scramble, in notation.
    pub twists: String,
    pub state: Option<StateSummary>,
}
impl GameSummary {
    pub fn new(game: &Game, keys_pressed: usize, keys_accepted: usize, frames: usize) -> Self {
        let sim = game.simulation();
        let twists: Vec<Twist> = sim.map(|sim| sim.twists()).unwrap_or_default();
        Self {
            stage: game.stage_kind(),
            keys_pressed,
            keys_accepted,
            frames,
            twists: format_twists(&twists),
            state: sim.map(|sim| StateSummary::from(sim.state())),
        }
    }
}
