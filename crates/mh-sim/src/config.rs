//! Simulation configuration

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::door::Door;
use crate::simulator::Strategy;
use crate::{Result, SimError};

/// How the contestant's initial guesses are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessPolicy {
    /// Uniform draws that never repeat the previous guess
    #[default]
    NoRepeatWalk,
    /// Independent uniform draws
    Uniform,
    /// Always the same door
    Fixed(Door),
}

impl FromStr for GuessPolicy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "walk" | "no-repeat" => Ok(GuessPolicy::NoRepeatWalk),
            "uniform" => Ok(GuessPolicy::Uniform),
            other => {
                let index = other
                    .strip_prefix("fixed:")
                    .and_then(|d| d.parse::<u8>().ok())
                    .ok_or_else(|| SimError::Config(format!("unknown guess policy '{other}'")))?;
                Ok(GuessPolicy::Fixed(Door::new(index)?))
            }
        }
    }
}

/// Which goat door the host opens when the guess is the prize door
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostPolicy {
    /// Highest-numbered of the two goat doors
    #[default]
    Highest,
    /// Uniform pick between the two goat doors
    Random,
}

impl FromStr for HostPolicy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "highest" => Ok(HostPolicy::Highest),
            "random" => Ok(HostPolicy::Random),
            other => Err(SimError::Config(format!("unknown host policy '{other}'"))),
        }
    }
}

/// Strategies to play in one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategySet {
    Stay,
    Switch,
    /// Stay first, then switch
    #[default]
    Both,
}

impl StrategySet {
    pub fn strategies(self) -> &'static [Strategy] {
        match self {
            StrategySet::Stay => &[Strategy::Stay],
            StrategySet::Switch => &[Strategy::Switch],
            StrategySet::Both => &[Strategy::Stay, Strategy::Switch],
        }
    }
}

impl FromStr for StrategySet {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "stay" => Ok(StrategySet::Stay),
            "switch" => Ok(StrategySet::Switch),
            "both" => Ok(StrategySet::Both),
            other => Err(SimError::Config(format!("unknown strategy '{other}'"))),
        }
    }
}

/// Configuration for simulation runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of trials per strategy
    pub trials: usize,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Strategies to play
    pub strategies: StrategySet,

    /// Initial guess generation
    pub guess_policy: GuessPolicy,

    /// Goat door tie-break
    pub host_policy: HostPolicy,

    /// Report title
    pub title: String,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            trials: 10_000,
            seed: None,
            strategies: StrategySet::Both,
            guess_policy: GuessPolicy::NoRepeatWalk,
            host_policy: HostPolicy::Highest,
            title: "Monty Hall Simulation".into(),
        }
    }
}

impl SimConfig {
    /// Small seeded run for smoke checks
    pub fn quick() -> Self {
        Self {
            trials: 1_000,
            seed: Some(0),
            ..Default::default()
        }
    }

    /// Large run for tight estimates
    pub fn exhaustive() -> Self {
        Self {
            trials: 1_000_000,
            ..Default::default()
        }
    }

    /// Load from a JSON file; missing fields fall back to defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SimConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Write as pretty JSON
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(SimError::Config("trials must be greater than zero".into()));
        }
        Ok(())
    }

    /// Builder: set trials
    pub fn with_trials(mut self, n: usize) -> Self {
        self.trials = n;
        self
    }

    /// Builder: set seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_strategies(mut self, strategies: StrategySet) -> Self {
        self.strategies = strategies;
        self
    }

    pub fn with_guess_policy(mut self, policy: GuessPolicy) -> Self {
        self.guess_policy = policy;
        self
    }

    pub fn with_host_policy(mut self, policy: HostPolicy) -> Self {
        self.host_policy = policy;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.trials, 10_000);
        assert_eq!(config.seed, None);
        assert_eq!(config.strategies.strategies(), &[Strategy::Stay, Strategy::Switch]);
    }

    #[test]
    fn test_builder() {
        let config = SimConfig::default()
            .with_trials(500)
            .with_seed(42)
            .with_host_policy(HostPolicy::Random);

        assert_eq!(config.trials, 500);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.host_policy, HostPolicy::Random);
    }

    #[test]
    fn test_parse_policies() {
        assert_eq!("walk".parse::<GuessPolicy>().unwrap(), GuessPolicy::NoRepeatWalk);
        assert_eq!(
            "fixed:2".parse::<GuessPolicy>().unwrap(),
            GuessPolicy::Fixed(Door::new(2).unwrap())
        );
        assert!("fixed:3".parse::<GuessPolicy>().is_err());
        assert!("sideways".parse::<GuessPolicy>().is_err());
        assert_eq!("random".parse::<HostPolicy>().unwrap(), HostPolicy::Random);
        assert_eq!("switch".parse::<StrategySet>().unwrap(), StrategySet::Switch);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SimConfig =
            serde_json::from_str(r#"{"trials": 250, "guess_policy": {"fixed": 1}}"#).unwrap();
        assert_eq!(config.trials, 250);
        assert_eq!(config.guess_policy, GuessPolicy::Fixed(Door::new(1).unwrap()));
        assert_eq!(config.host_policy, HostPolicy::Highest);
    }

    #[test]
    fn test_zero_trials_rejected() {
        assert!(SimConfig::default().with_trials(0).validate().is_err());
    }
}
