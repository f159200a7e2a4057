//! Batch runner: plays whole games of N trials

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

use crate::config::SimConfig;
use crate::game::{count_wins, reveal_goat_door_with, switch_guess, win_percentage};
use crate::generators::DoorGenerator;
use crate::report::SimReport;
use crate::Result;

/// Contestant strategy after the goat door is opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Keep the original guess
    Stay,
    /// Move to the remaining unopened door
    Switch,
}

impl Strategy {
    pub fn is_switch(self) -> bool {
        matches!(self, Strategy::Switch)
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Stay => "stay",
            Strategy::Switch => "switch",
        }
    }
}

/// Analytic win probability of a strategy, as a fraction
pub fn expected_win_rate(strategy: Strategy) -> f64 {
    match strategy {
        Strategy::Stay => 1.0 / 3.0,
        Strategy::Switch => 2.0 / 3.0,
    }
}

/// Aggregate result of one game of N trials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub strategy: Strategy,

    pub trials: usize,

    pub wins: usize,

    /// Win percentage (0-100)
    pub win_percentage: f64,

    pub duration_ms: u64,
}

impl GameOutcome {
    /// Binomial standard error of the win percentage, in percentage points
    pub fn standard_error(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        let p = self.wins as f64 / self.trials as f64;
        (p * (1.0 - p) / self.trials as f64).sqrt() * 100.0
    }

    /// Signed distance from the analytic win percentage
    pub fn deviation(&self) -> f64 {
        self.win_percentage - expected_win_rate(self.strategy) * 100.0
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Won {} % of the time with{} switch strategy.",
            self.win_percentage,
            if self.strategy.is_switch() { "" } else { "out" }
        )
    }
}

/// Monte Carlo simulator
pub struct Simulator {
    config: SimConfig,
    generator: DoorGenerator,
}

impl Simulator {
    /// Create a simulator; seeds from config or OS entropy
    pub fn new(config: SimConfig) -> Self {
        let generator = DoorGenerator::new(config.seed);
        Self { config, generator }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Play `n` trials with `strategy`
    pub fn play_game(&mut self, n: usize, strategy: Strategy) -> Result<GameOutcome> {
        let start = Instant::now();

        let prize_doors = self.generator.prize_doors(n);
        let mut guesses = self.generator.guesses(n, self.config.guess_policy);

        if strategy.is_switch() {
            let goat_doors = reveal_goat_door_with(
                self.generator.rng_mut(),
                &prize_doors,
                &guesses,
                self.config.host_policy,
            )?;
            guesses = switch_guess(&guesses, &goat_doors)?;
        }

        let percentage = win_percentage(&guesses, &prize_doors)?;
        let outcome = GameOutcome {
            strategy,
            trials: n,
            wins: count_wins(&guesses, &prize_doors),
            win_percentage: percentage,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        log::debug!(
            "{} strategy: {}/{} wins in {}ms",
            strategy.name(),
            outcome.wins,
            outcome.trials,
            outcome.duration_ms
        );

        Ok(outcome)
    }

    /// Play every configured strategy and collect a report
    pub fn run(&mut self) -> Result<SimReport> {
        self.config.validate()?;

        log::info!(
            "Running {} trials per strategy (seed: {:?}, guesses: {:?}, host: {:?})",
            self.config.trials,
            self.generator.seed(),
            self.config.guess_policy,
            self.config.host_policy
        );

        let mut report = SimReport::new(self.config.title.clone(), self.generator.seed());
        for &strategy in self.config.strategies.strategies() {
            let outcome = self.play_game(self.config.trials, strategy)?;
            log::info!("{outcome}");
            report.add_outcome(outcome);
        }
        Ok(report)
    }
}
