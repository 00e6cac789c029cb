use tracing::debug;

use crate::error::{Result, RosterError};
use super::stats::{self, Statistics};

#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    name: String,
    scores: Vec<f64>,
}

impl StudentRecord {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            scores: vec![],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Case-insensitive comparison against a (possibly untrimmed) name.
    pub fn matches(&self, name: &str) -> bool {
        name_key(&self.name) == name_key(name)
    }

    pub fn add_grade(&mut self, value: f64) -> Result<()> {
        if value < 0.0 {
            return Err(RosterError::InvalidGrade(value));
        }
        debug!(student = %self.name, value, "grade added");
        self.scores.push(value);
        Ok(())
    }

    /// Replaces every score. Unlike `add_grade` no value is rejected.
    pub fn set_grades(&mut self, values: &[f64]) {
        self.scores = values.to_vec();
    }

    pub fn average(&self) -> Option<f64> {
        stats::average(self.scores.iter().copied())
    }

    pub fn highest(&self) -> Option<f64> {
        stats::highest(self.scores.iter().copied())
    }

    pub fn lowest(&self) -> Option<f64> {
        stats::lowest(self.scores.iter().copied())
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::from_scores(self.scores.iter().copied())
    }
}

pub(crate) fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}
