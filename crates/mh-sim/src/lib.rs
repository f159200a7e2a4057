//! # mh-sim
//!
//! Monte Carlo simulator for the three-door Monty Hall game.
//!
//! ## Features
//!
//! - **Seedable Trials**: every random draw goes through an explicitly passed RNG
//! - **Game Rules**: goat door reveal and guess switching over whole batches
//! - **Strategy Comparison**: stay vs. switch win rates against the analytic values
//! - **Reports**: plain text, JSON and Markdown output
//!
//! ## Example
//!
//! ```rust
//! use mh_sim::{SimConfig, Simulator, Strategy};
//!
//! let config = SimConfig::default().with_trials(1_000).with_seed(7);
//! let mut sim = Simulator::new(config);
//!
//! let outcome = sim.play_game(1_000, Strategy::Switch).unwrap();
//! println!("{outcome}");
//! ```

pub mod config;
pub mod door;
pub mod game;
pub mod generators;
pub mod report;
pub mod simulator;

pub use config::{GuessPolicy, HostPolicy, SimConfig, StrategySet};
pub use door::Door;
pub use game::{reveal_goat_door, reveal_goat_door_with, switch_guess, win_percentage};
pub use generators::{DoorGenerator, generate_guesses, generate_prize_doors};
pub use report::{ReportFormat, SimReport};
pub use simulator::{GameOutcome, Simulator, Strategy, expected_win_rate};

use thiserror::Error;

/// Errors that can occur while simulating
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Sequence length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Cannot compute a win percentage over zero trials")]
    EmptyBatch,

    #[error("Invalid door: {0} (expected 0, 1 or 2)")]
    InvalidDoor(u8),

    #[error("Trial {trial}: guess and goat door coincide, no unique door to switch to")]
    AmbiguousSwitch { trial: usize },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;

/// Run both strategies once with default settings and return the report
pub fn quick_compare(trials: usize, seed: u64) -> Result<SimReport> {
    let config = SimConfig::default().with_trials(trials).with_seed(seed);
    Simulator::new(config).run()
}
