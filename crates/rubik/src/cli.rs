use std::io::Read;
use std::path::PathBuf;

use cube_core::{RubikState, ScrambleParams, format_twists, generate_scramble, parse_twists};
use cube_view::Game;
use cubeprefs::{Key, Preferences};
use eyre::{Context, Result, ensure};
use serde::Serialize;
use web_time::Duration;

use crate::summary::{GameSummary, ScrambleSummary, StateSummary};

/// Maximum number of frames to wait for animations after a key press.
const MAX_FRAMES_PER_KEY: usize = 100_000;

/// Rubik's cube simulator command-line interface
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Apply twists to a solved cube and print the resulting state as JSON.
    Twist {
        /// Twists in notation, such as `R T R' T'`.
        #[arg(required = true)]
        moves: Vec<String>,
    },
    /// Generate a scramble and print it along with the scrambled state as
    /// JSON.
    Scramble {
        /// Number of twists.
        #[arg(short, long, default_value_t = 25)]
        length: usize,
        /// Seed for reproducible scrambles. Random if omitted.
        #[arg(short, long)]
        seed: Option<String>,
    },
    /// Play a game without a window, pressing keys from a script, and print
    /// the final game state as JSON.
    ///
    /// The script is a whitespace-separated list of key names, such as
    /// `Enter 1 Up 2`. After each key, frames are simulated until all
    /// animations finish.
    Play {
        /// Script of key names, use '-' for stdin.
        #[arg(value_parser, default_value = "-")]
        script: clio::Input,
        /// Preferences file to load.
        #[arg(short, long)]
        prefs: Option<PathBuf>,
        /// Simulated frames per second.
        #[arg(long, default_value_t = 60.0)]
        fps: f32,
    },
    /// Print preferences as YAML.
    Prefs {
        /// Preferences file to load. Defaults are printed if omitted.
        #[arg(short, long)]
        prefs: Option<PathBuf>,
    },
}

pub(crate) fn exec(subcommand: Subcommand) -> Result<()> {
    match subcommand {
        Subcommand::Twist { moves } => {
            let twists = parse_twists(&moves.join(" ")).wrap_err("invalid twist notation")?;
            let mut state = RubikState::new();
            state.apply_twists(twists);
            log::debug!("{state}");
            write_json_output(&StateSummary::from(&state))
        }

        Subcommand::Scramble { length, seed } => {
            let params = match seed {
                Some(seed) => ScrambleParams { length, seed },
                None => ScrambleParams::random(length),
            };
            let twists = generate_scramble(&params);
            let mut state = RubikState::new();
            state.apply_twists(twists.iter().copied());
            write_json_output(&ScrambleSummary {
                seed: params.seed,
                scramble: format_twists(&twists),
                state: StateSummary::from(&state),
            })
        }

        Subcommand::Play {
            mut script,
            prefs,
            fps,
        } => {
            let frame = frame_duration(fps)?;

            let mut script_text = String::new();
            script
                .read_to_string(&mut script_text)
                .wrap_err("error reading script")?;
            let keys = script_text
                .split_whitespace()
                .map(|s| s.parse::<Key>().wrap_err_with(|| format!("unknown key {s:?}")))
                .collect::<Result<Vec<Key>>>()?;

            let mut game = Game::new(Preferences::load(prefs.as_deref()));
            let mut keys_accepted = 0;
            let mut frames = 0;
            for &key in &keys {
                if game.key_press(key) {
                    keys_accepted += 1;
                }
                frames += run_until_idle(&mut game, frame)?;
            }

            write_json_output(&GameSummary::new(&game, keys.len(), keys_accepted, frames))
        }

        Subcommand::Prefs { prefs } => {
            print!("{}", Preferences::load(prefs.as_deref()).to_yaml_string()?);
            Ok(())
        }
    }
}

/// Returns the duration of one frame at `fps` frames per second.
fn frame_duration(fps: f32) -> Result<Duration> {
    ensure!(fps.is_finite() && fps > 0.0, "fps must be positive");
    Duration::try_from_secs_f32(1.0 / fps).wrap_err_with(|| format!("fps {fps} is too low"))
}

/// Steps the game until no animation is running. Returns the number of
/// frames simulated.
fn run_until_idle(game: &mut Game, frame: Duration) -> Result<usize> {
    for frames in 1..=MAX_FRAMES_PER_KEY {
        if !game.update(frame) {
            return Ok(frames);
        }
    }
    eyre::bail!("animation did not finish after {MAX_FRAMES_PER_KEY} frames")
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}
