use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use strum::VariantArray;

use crate::{Face, Twist, TwistDirection};

/// Parameters for generating a scramble.
///
/// The same parameters always produce the same scramble.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScrambleParams {
    /// Number of twists.
    pub length: usize,
    /// Arbitrary seed string.
    pub seed: String,
}
impl ScrambleParams {
    /// Constructs scramble parameters with a random seed.
    pub fn random(length: usize) -> Self {
        Self {
            length,
            seed: format!("{:016x}", rand::random::<u64>()),
        }
    }
}

/// Generates a random sequence of twists.
///
/// No two consecutive twists turn the same face.
pub fn generate_scramble(params: &ScrambleParams) -> Vec<Twist> {
    let ScrambleParams { length, seed } = params;

    let mut sha256 = Sha256::new();
    sha256.update(seed.len().to_le_bytes());
    sha256.update(seed.as_bytes());
    let mut rng_seed = [0_u8; 32];
    rng_seed.copy_from_slice(&sha256.finalize());
    let mut rng = rand_chacha::ChaCha12Rng::from_seed(rng_seed);

    const DIRECTIONS: [TwistDirection; 3] = [
        TwistDirection::Clockwise,
        TwistDirection::Double,
        TwistDirection::CounterClockwise,
    ];

    let mut last_face = None;
    let twists: Vec<Twist> = std::iter::from_fn(|| {
        let candidates: Vec<Face> = Face::VARIANTS
            .iter()
            .copied()
            .filter(|&face| Some(face) != last_face)
            .collect();
        let face = *candidates.choose(&mut rng)?;
        last_face = Some(face);
        let direction = DIRECTIONS[rng.random_range(0..DIRECTIONS.len())];
        Some(Twist { face, direction })
    })
    .take(*length)
    .collect();

    log::debug!("generated scramble of length {length} from seed {seed:?}");
    twists
}
