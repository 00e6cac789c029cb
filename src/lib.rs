//! In-memory student roster with per-student and overall grade statistics,
//! a comma-delimited text format for import/export, and an interactive
//! shell driving both.

pub mod config;
pub mod error;
pub mod logging;
pub mod record_store;
pub mod roster;
pub mod shell;

pub use error::{Result, RosterError};
pub use roster::{Report, Roster, Statistics, StudentRecord};
