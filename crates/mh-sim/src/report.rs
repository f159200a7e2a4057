//! Report generation for simulation results

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::simulator::{GameOutcome, expected_win_rate};
use crate::{Result, SimError};

/// Outcomes of one simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimReport {
    /// Report title
    pub title: String,

    /// RFC 3339 creation time
    pub timestamp: String,

    /// Seed used (for reproducibility)
    pub seed: Option<u64>,

    /// One entry per strategy played
    pub outcomes: Vec<GameOutcome>,
}

impl SimReport {
    /// Create a new report
    pub fn new(title: impl Into<String>, seed: Option<u64>) -> Self {
        Self {
            title: title.into(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            seed,
            outcomes: Vec::new(),
        }
    }

    pub fn add_outcome(&mut self, outcome: GameOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn total_trials(&self) -> usize {
        self.outcomes.iter().map(|o| o.trials).sum()
    }

    /// One "Won ... % of the time ..." line per outcome
    pub fn to_text(&self) -> String {
        let mut output = String::new();
        for outcome in &self.outcomes {
            output.push_str(&outcome.to_string());
            output.push('\n');
        }
        output
    }

    /// Generate JSON report
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".into())
    }

    /// Generate markdown report
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("# {}\n\n", self.title));
        output.push_str(&format!("**Timestamp:** {}\n\n", self.timestamp));
        match self.seed {
            Some(seed) => output.push_str(&format!("**Seed:** {}\n\n", seed)),
            None => output.push_str("**Seed:** random\n\n"),
        }

        output.push_str("| Strategy | Trials | Wins | Win % | Expected % | Std. Error |\n");
        output.push_str("|----------|--------|------|-------|------------|------------|\n");
        for outcome in &self.outcomes {
            output.push_str(&format!(
                "| {} | {} | {} | {:.2} | {:.2} | {:.2} |\n",
                outcome.strategy.name(),
                outcome.trials,
                outcome.wins,
                outcome.win_percentage,
                expected_win_rate(outcome.strategy) * 100.0,
                outcome.standard_error()
            ));
        }
        output.push('\n');

        output
    }

    /// Render in the requested format
    pub fn render(&self, format: ReportFormat) -> String {
        match format {
            ReportFormat::Text => self.to_text(),
            ReportFormat::Json => self.to_json(),
            ReportFormat::Markdown => self.to_markdown(),
        }
    }

    /// Save report to file
    pub fn save<P: AsRef<Path>>(&self, path: P, format: ReportFormat) -> Result<()> {
        fs::write(path, self.render(format))?;
        Ok(())
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl FromStr for ReportFormat {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            other => Err(SimError::Config(format!("unknown report format '{other}'"))),
        }
    }
}
