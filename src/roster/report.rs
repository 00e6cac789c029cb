use core::fmt;

use serde::Serialize;

use crate::error::Result;
use super::{Roster, Statistics};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentSummary {
    pub name: String,
    pub grades: Vec<f64>,
    #[serde(flatten)]
    pub statistics: Statistics,
}

/// Snapshot of every student, in listing order, plus the overall figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub students: Vec<StudentSummary>,
    pub overall: Statistics,
}

impl From<&Roster> for Report {
    fn from(roster: &Roster) -> Self {
        Self {
            students: roster
                .list_all()
                .map(|s| StudentSummary {
                    name: s.name().to_string(),
                    grades: s.scores().to_vec(),
                    statistics: s.statistics(),
                })
                .collect(),
            overall: roster.overall_statistics(),
        }
    }
}

impl Report {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn overall_lines(&self) -> [String; 3] {
        [
            format!("Overall Average: {}", or_na(self.overall.average)),
            format!("Overall Highest: {}", or_na(self.overall.highest)),
            format!("Overall Lowest : {}", or_na(self.overall.lowest)),
        ]
    }
}

fn or_na(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| format!("{v:.2}"))
}

impl fmt::Display for StudentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.statistics {
            Statistics { average: Some(avg), highest: Some(high), lowest: Some(low) } => {
                write!(f, "{} | Grades: {:?} | Avg: {:.2} | High: {:.2} | Low: {:.2}",
                    self.name,
                    self.grades,
                    avg,
                    high,
                    low)
            }
            _ => write!(f, "{}: No grades", self.name),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Student List ---")?;
        for student in &self.students {
            writeln!(f, "{student}")?;
        }
        writeln!(f)?;
        writeln!(f, "--- Overall Statistics ---")?;
        for line in self.overall_lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
