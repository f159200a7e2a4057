//! Monty Hall simulator
//!
//! Usage:
//!   monty-hall                          - 10 000 trials, stay then switch
//!   monty-hall --trials 100000 --seed 7 - larger seeded run
//!   monty-hall --format markdown        - table with expected rates
//!   monty-hall --config sim.json        - settings from a JSON file

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use mh_sim::{GuessPolicy, HostPolicy, ReportFormat, SimConfig, Simulator, StrategySet};

#[derive(Parser, Debug)]
#[command(name = "monty-hall", about = "Monte Carlo estimate of Monty Hall win rates")]
struct Cli {
    /// Trials per strategy
    #[arg(short = 'n', long)]
    trials: Option<usize>,

    /// Seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Strategies to play (stay, switch, both)
    #[arg(long)]
    strategy: Option<StrategySet>,

    /// Initial guesses (walk, uniform, fixed:<door>)
    #[arg(long)]
    guess: Option<GuessPolicy>,

    /// Goat door pick when the guess is the prize (highest, random)
    #[arg(long)]
    host: Option<HostPolicy>,

    /// Report format (text, json, markdown)
    #[arg(short, long, default_value = "text")]
    format: ReportFormat,

    /// JSON config file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> Result<(SimConfig, ReportFormat, Option<PathBuf>)> {
        let mut config = match &self.config {
            Some(path) => SimConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => SimConfig::default(),
        };

        if let Some(trials) = self.trials {
            config.trials = trials;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(strategies) = self.strategy {
            config.strategies = strategies;
        }
        if let Some(guess) = self.guess {
            config.guess_policy = guess;
        }
        if let Some(host) = self.host {
            config.host_policy = host;
        }

        Ok((config, self.format, self.output))
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let (config, format, output) = Cli::parse().into_config()?;
    let report = Simulator::new(config).run().context("Simulation failed")?;

    match output {
        Some(path) => {
            report
                .save(&path, format)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            log::info!("Report written to {}", path.display());
        }
        None => print!("{}", report.render(format)),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["monty-hall"]).unwrap();
        let (config, format, output) = cli.into_config().unwrap();
        assert_eq!(config, SimConfig::default());
        assert_eq!(format, ReportFormat::Text);
        assert!(output.is_none());
    }

    #[test]
    fn test_flags_override() {
        let cli = Cli::try_parse_from([
            "monty-hall",
            "--trials",
            "500",
            "--seed",
            "3",
            "--strategy",
            "switch",
            "--guess",
            "fixed:1",
            "--host",
            "random",
            "--format",
            "json",
        ])
        .unwrap();
        let (config, format, _) = cli.into_config().unwrap();
        assert_eq!(config.trials, 500);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.strategies, StrategySet::Switch);
        assert_eq!(config.host_policy, HostPolicy::Random);
        assert_eq!(format, ReportFormat::Json);
    }

    #[test]
    fn test_bad_values_rejected() {
        assert!(Cli::try_parse_from(["monty-hall", "--guess", "fixed:7"]).is_err());
        assert!(Cli::try_parse_from(["monty-hall", "--format", "xml"]).is_err());
    }
}
