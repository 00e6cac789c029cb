mod command;
mod parser;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use color_print::cformat;
use tracing::{debug, info};

use crate::config::ShellConfig;
use crate::record_store;
use crate::roster::Roster;
use command::Command;
use parser::{ParseErr, Parser};

const NAME_EMPTY: &str = "Name cannot be empty.";

const MENU: &str = "
Menu:
1) add <name>            Add new student
2) grade <name> <grade>  Add grade to student
3) remove <name>         Remove student
4) summary               Show summary report
5) export <file>         Export to CSV
6) import <file>         Import from CSV
7) list                  List students
0) quit                  Exit";

/// Interactive loop over a roster owned by the caller.
pub struct Shell<'a, R, W> where R: BufRead, W: Write {
    roster: &'a mut Roster,
    input: R,
    output: W,
    prompt: String,
    load: Option<PathBuf>,
}

impl<'a, R, W> Shell<'a, R, W> where R: BufRead, W: Write {
    pub fn new(roster: &'a mut Roster, config: &ShellConfig, input: R, output: W) -> Self {
        Self {
            roster,
            input,
            output,
            prompt: config.prompt.clone(),
            load: config.load.clone(),
        }
    }

    pub fn start(&mut self) -> io::Result<()> {
        writeln!(self.output, "=== Student Grade Tracker ===")?;
        if let Some(path) = self.load.take() {
            self.import(&path)?;
        }
        writeln!(self.output, "{MENU}")?;
        self.main_loop()
    }

    fn print_prompt(&mut self) -> io::Result<()> {
        write!(self.output, "{}", self.prompt)?;
        self.output.flush()
    }

    /// Reads one trimmed line, replacing invalid UTF-8. `None` at end of
    /// input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut input = vec![];
        if self.input.read_until(b'\n', &mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&input).trim().to_string()))
    }

    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn fail(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", cformat!("<red>{}</red>", message))
    }

    fn succeed(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", cformat!("<green>{}</green>", message))
    }

    pub fn main_loop(&mut self) -> io::Result<()> {
        let mut parser = Parser {};
        loop {
            self.print_prompt()?;
            let Some(input) = self.read_line()? else { break };

            let command = match parser.parse(&input) {
                Ok(inner) => inner,
                Err(ParseErr::IncorrectNArguments(command, actual, expected)) => {
                    self.fail(format!("Incorrect number of args for command: {}, {}/{}", command, actual, expected))?;
                    continue;
                },
                Err(ParseErr::UnknownCommand(command)) => {
                    self.fail(format!("Unknown command: {}. Type help for the menu.", command))?;
                    continue;
                },
                Err(ParseErr::EmptyLine) => continue,
            };
            debug!(?command, "shell command");

            match command {
                Command::AddStudent { name } => self.add_student(name)?,
                Command::AddGrade { name, value } => self.add_grade(name, value)?,
                Command::RemoveStudent { name } => self.remove_student(name)?,
                Command::Summary => self.summary()?,
                Command::Export { file } => {
                    if let Some(file) = self.argument(file, "Enter filename to export (e.g., students.csv): ", "Filename empty.")? {
                        self.export(&file)?;
                    }
                },
                Command::Import { file } => {
                    if let Some(file) = self.argument(file, "Enter filename to import (e.g., students.csv): ", "Filename empty.")? {
                        self.import(&file)?;
                    }
                },
                Command::List => self.list()?,
                Command::Help => writeln!(self.output, "{MENU}")?,
                Command::Quit => break,
            }
        }
        writeln!(self.output, "Goodbye!")?;
        info!("shell closed");
        Ok(())
    }

    /// Uses the given argument or asks for it. `None` when the answer is
    /// empty (reported as `when_empty`) or input ended.
    fn argument(&mut self, given: Option<String>, question: &str, when_empty: &str) -> io::Result<Option<String>> {
        let value = match given {
            Some(value) => value,
            None => match self.ask(question)? {
                Some(answer) => answer,
                None => return Ok(None),
            },
        };
        if value.is_empty() {
            self.fail(when_empty)?;
            return Ok(None);
        }
        Ok(Some(value))
    }

    fn add_student(&mut self, name: Option<String>) -> io::Result<()> {
        let Some(name) = self.argument(name, "Enter student name: ", NAME_EMPTY)? else { return Ok(()) };
        match self.roster.add_student(&name) {
            Ok(record) => {
                let message = format!("Added student: {}", record.name());
                self.succeed(message)
            }
            Err(e) => self.fail(e),
        }
    }

    fn add_grade(&mut self, name: Option<String>, value: Option<f64>) -> io::Result<()> {
        let Some(name) = self.argument(name, "Enter student name: ", NAME_EMPTY)? else { return Ok(()) };
        if self.roster.find_by_name(&name).is_none() {
            let answer = self.ask("Student not found. Add them first? (y/n) ")?;
            if !matches!(answer.as_deref().map(str::to_lowercase).as_deref(), Some("y" | "yes")) {
                return Ok(());
            }
            if let Err(e) = self.roster.add_student(&name) {
                return self.fail(e);
            }
        }

        let value = match value {
            Some(value) => value,
            None => {
                let Some(answer) = self.ask("Enter grade (numeric): ")? else { return Ok(()) };
                match answer.parse::<f64>() {
                    Ok(value) => value,
                    Err(_) => return self.fail("Invalid number."),
                }
            }
        };
        // NaN and infinities parse as f64 but are not grades.
        if !value.is_finite() {
            return self.fail("Invalid number.");
        }

        match self.roster.add_grade(&name, value) {
            Ok(()) => {
                let stored = self.roster.find_by_name(&name).map(|s| s.name().to_string()).unwrap_or(name);
                self.succeed(format!("Added grade {:?} to {}", value, stored))
            }
            Err(e) => self.fail(e),
        }
    }

    fn remove_student(&mut self, name: Option<String>) -> io::Result<()> {
        let Some(name) = self.argument(name, "Enter student name to remove: ", NAME_EMPTY)? else { return Ok(()) };
        if self.roster.remove_student(&name) {
            self.succeed("Removed.")
        } else {
            self.fail("Student not found.")
        }
    }

    fn summary(&mut self) -> io::Result<()> {
        if !self.roster.has_students() {
            return writeln!(self.output, "No students.");
        }
        let report = self.roster.report();
        write!(self.output, "\n{report}")
    }

    fn list(&mut self) -> io::Result<()> {
        if !self.roster.has_students() {
            return writeln!(self.output, "No students in the tracker yet.");
        }
        for student in self.roster.report().students {
            writeln!(self.output, "{student}")?;
        }
        Ok(())
    }

    fn export(&mut self, file: impl AsRef<Path>) -> io::Result<()> {
        let file = file.as_ref();
        match record_store::export_file(file, &*self.roster) {
            Ok(()) => self.succeed(format!("Exported to {}", file.display())),
            Err(e) => self.fail(format!("Error exporting CSV: {}", e)),
        }
    }

    fn import(&mut self, file: impl AsRef<Path>) -> io::Result<()> {
        match record_store::import_file(file.as_ref(), &mut *self.roster) {
            Ok(count) => self.succeed(format!("Imported {} lines from CSV.", count)),
            Err(e) => self.fail(format!("Error importing CSV: {}", e)),
        }
    }
}
