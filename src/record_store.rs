//! Line-oriented text format for a roster: `name,score1,score2,...`.
//!
//! Names are written verbatim. A name containing the delimiter does not
//! survive a round trip since the format has no quoting.

use std::fmt::Write as _;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::roster::Roster;

pub const DELIMITER: char = ',';

/// Renders every record in storage order, one line each.
pub fn export_all(roster: &Roster) -> String {
    let mut out = String::new();
    for student in roster.iter() {
        out.push_str(student.name());
        for score in student.scores() {
            let _ = write!(out, "{DELIMITER}{score:?}");
        }
        out.push('\n');
    }
    out
}

/// Applies every non-blank line to the roster and returns how many were
/// processed.
pub fn import_all(text: &str, roster: &mut Roster) -> usize {
    text.lines()
        .filter(|line| import_line(line, roster))
        .count()
}

pub fn import_reader<R: BufRead>(reader: R, roster: &mut Roster) -> Result<usize> {
    let mut count = 0;
    for line in reader.lines() {
        if import_line(&line?, roster) {
            count += 1;
        }
    }
    Ok(count)
}

pub fn import_file<P: AsRef<Path>>(path: P, roster: &mut Roster) -> Result<usize> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let count = import_reader(reader, roster)?;
    info!(path = %path.display(), lines = count, "imported");
    Ok(count)
}

pub fn export_file<P: AsRef<Path>>(path: P, roster: &Roster) -> Result<()> {
    let path = path.as_ref();
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(export_all(roster).as_bytes())?;
    file.flush()?;
    info!(path = %path.display(), students = roster.len(), "exported");
    Ok(())
}

/// Returns false for lines that were skipped.
fn import_line(line: &str, roster: &mut Roster) -> bool {
    if line.trim().is_empty() {
        return false;
    }
    let mut fields = line.split(DELIMITER);
    let name = fields.next().unwrap_or_default().trim();

    let grades: Vec<f64> = fields
        .filter_map(|field| match parse_score(field) {
            Some(score) => Some(score),
            None => {
                debug!(student = name, field, "malformed score skipped");
                None
            }
        })
        .collect();

    roster.find_or_insert(name).set_grades(&grades);
    true
}

fn parse_score(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_format() {
        let mut roster = Roster::new();
        roster.add_student("Ann").unwrap().set_grades(&[90.0, 87.5]);
        roster.add_student("Bo").unwrap();
        roster.add_student("alice").unwrap().set_grades(&[100.0]);
        assert_eq!(export_all(&roster), "Ann,90.0,87.5\nBo\nalice,100.0\n");
    }

    #[test]
    fn export_empty_roster() {
        assert_eq!(export_all(&Roster::new()), "");
    }

    #[test]
    fn round_trip() {
        let mut roster = Roster::new();
        roster.add_student("Zed").unwrap().set_grades(&[1.0, 0.1, 99.99, 1e-7]);
        roster.add_student("Ann").unwrap().set_grades(&[70.0, 70.0]);
        roster.add_student("Bo").unwrap();

        let mut restored = Roster::new();
        assert_eq!(import_all(&export_all(&roster), &mut restored), 3);
        assert_eq!(restored, roster);
    }

    #[test]
    fn malformed_fields_skipped() {
        let mut roster = Roster::new();
        assert_eq!(import_all("Ann,90,abc,85\n", &mut roster), 1);
        assert_eq!(roster.find_by_name("Ann").unwrap().scores(), &[90.0, 85.0]);
    }

    #[test]
    fn blank_lines_not_counted() {
        let mut roster = Roster::new();
        let count = import_all("\n   \nAnn,1\n\t\nBo\n\n", &mut roster);
        assert_eq!(count, 2);
        assert_eq!(roster.len(), 2);
        assert!(roster.find_by_name("Bo").unwrap().scores().is_empty());
    }

    #[test]
    fn import_replaces_existing_scores() {
        let mut roster = Roster::new();
        roster.add_student("Ann").unwrap().set_grades(&[10.0, 20.0]);
        assert_eq!(import_all(" ann , 50 , 60.5 ,,\n", &mut roster), 1);
        assert_eq!(roster.len(), 1);
        let ann = roster.find_by_name("Ann").unwrap();
        assert_eq!(ann.name(), "Ann");
        assert_eq!(ann.scores(), &[50.0, 60.5]);
    }

    #[test]
    fn import_does_not_reject_negative_scores() {
        let mut roster = Roster::new();
        import_all("Ann,-5,10", &mut roster);
        assert_eq!(roster.find_by_name("Ann").unwrap().scores(), &[-5.0, 10.0]);
    }

    #[test]
    fn non_finite_fields_kept() {
        let mut roster = Roster::new();
        import_all("Ann,NaN,inf,-inf,7", &mut roster);
        let scores = roster.find_by_name("Ann").unwrap().scores();
        assert_eq!(scores.len(), 4);
        assert!(scores[0].is_nan());
        assert_eq!(&scores[1..], &[f64::INFINITY, f64::NEG_INFINITY, 7.0]);
    }

    #[test]
    fn non_finite_scores_round_trip() {
        let mut roster = Roster::new();
        roster.add_student("Ann").unwrap().set_grades(&[f64::NAN, 90.0, f64::INFINITY]);
        let text = export_all(&roster);
        assert_eq!(text, "Ann,NaN,90.0,inf\n");

        let mut restored = Roster::new();
        assert_eq!(import_all(&text, &mut restored), 1);
        let scores = restored.find_by_name("Ann").unwrap().scores();
        assert_eq!(scores.len(), 3);
        assert!(scores[0].is_nan());
        assert_eq!(&scores[1..], &[90.0, f64::INFINITY]);
    }

    #[test]
    fn empty_name_field_is_still_a_record() {
        let mut roster = Roster::new();
        assert_eq!(import_all(",90,80\nAnn,1\n", &mut roster), 2);
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.find_by_name("").unwrap().scores(), &[90.0, 80.0]);
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.csv");

        let mut roster = Roster::new();
        roster.add_student("Ann").unwrap().set_grades(&[90.0, 80.0]);
        roster.add_student("Bo").unwrap().set_grades(&[70.0]);
        export_file(&path, &roster).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Ann,90.0,80.0\nBo,70.0\n");

        let mut restored = Roster::new();
        assert_eq!(import_file(&path, &mut restored).unwrap(), 2);
        assert_eq!(restored, roster);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut roster = Roster::new();
        let err = import_file(dir.path().join("missing.csv"), &mut roster).unwrap_err();
        assert!(matches!(err, crate::error::RosterError::Io(_)));
        assert!(roster.is_empty());
    }

    #[test]
    fn export_to_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let roster = Roster::new();
        assert!(export_file(dir.path(), &roster).is_err());
    }
}
