mod record;
mod report;
mod stats;

pub use record::StudentRecord;
pub use report::{Report, StudentSummary};
pub use stats::Statistics;

use tracing::{info, warn};

use crate::error::{Result, RosterError};
use record::name_key;

/// Students in insertion order, keyed case-insensitively by name.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Roster {
    students: Vec<StudentRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Self { students: vec![] }
    }

    pub fn add_student(&mut self, name: &str) -> Result<&mut StudentRecord> {
        if self.find_by_name(name).is_some() {
            warn!(name = name.trim(), "duplicate student ignored");
            return Err(RosterError::DuplicateStudent(name.trim().to_string()));
        }
        info!(name = name.trim(), "student added");
        self.students.push(StudentRecord::new(name));
        let last = self.students.len() - 1;
        Ok(&mut self.students[last])
    }

    pub fn remove_student(&mut self, name: &str) -> bool {
        match self.students.iter().position(|s| s.matches(name)) {
            Some(idx) => {
                let removed = self.students.remove(idx);
                info!(name = removed.name(), "student removed");
                true
            }
            None => false,
        }
    }

    pub fn find_by_name(&self, name: &str) -> Option<&StudentRecord> {
        self.students.iter().find(|s| s.matches(name))
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut StudentRecord> {
        self.students.iter_mut().find(|s| s.matches(name))
    }

    /// Looks the student up, creating an empty record on first reference.
    pub fn find_or_insert(&mut self, name: &str) -> &mut StudentRecord {
        match self.students.iter().position(|s| s.matches(name)) {
            Some(idx) => &mut self.students[idx],
            None => {
                self.students.push(StudentRecord::new(name));
                let last = self.students.len() - 1;
                &mut self.students[last]
            }
        }
    }

    pub fn add_grade(&mut self, name: &str, value: f64) -> Result<()> {
        self.find_by_name_mut(name)
            .ok_or_else(|| RosterError::NotFound(name.trim().to_string()))?
            .add_grade(value)
    }

    pub fn overall_average(&self) -> Option<f64> {
        stats::average(self.all_scores())
    }

    pub fn overall_highest(&self) -> Option<f64> {
        stats::highest(self.all_scores())
    }

    pub fn overall_lowest(&self) -> Option<f64> {
        stats::lowest(self.all_scores())
    }

    pub fn overall_statistics(&self) -> Statistics {
        Statistics::from_scores(self.all_scores())
    }

    fn all_scores(&self) -> impl Iterator<Item = f64> + Clone + '_ {
        self.students.iter().flat_map(|s| s.scores().iter().copied())
    }

    /// Students sorted by case-insensitive name. Storage order is untouched
    /// and equal keys keep their insertion order.
    pub fn list_all(&self) -> impl Iterator<Item = &StudentRecord> + Clone + '_ {
        let mut sorted: Vec<&StudentRecord> = self.students.iter().collect();
        sorted.sort_by_key(|s| name_key(s.name()));
        sorted.into_iter()
    }

    /// Students in storage (insertion) order.
    pub fn iter(&self) -> impl Iterator<Item = &StudentRecord> + '_ {
        self.students.iter()
    }

    pub fn has_students(&self) -> bool {
        !self.students.is_empty()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn report(&self) -> Report {
        Report::from(self)
    }
}
