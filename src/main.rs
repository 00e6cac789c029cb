use std::path::Path;

use anyhow::Context;
use clap::Parser;
use cli::{Command, CommandLine};
use gradetrack::config::ShellConfig;
use gradetrack::shell::Shell;
use gradetrack::{logging, record_store, Roster};

mod cli;

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let args = CommandLine::parse();
    match args.command.unwrap_or(Command::Shell { load: None, prompt: None }) {
        Command::Shell { load, prompt } => {
            let config = ShellConfig::default().prompt(prompt).load(load);
            let mut roster = Roster::new();
            let stdin = std::io::stdin();
            let mut shell = Shell::new(&mut roster, &config, stdin.lock(), std::io::stdout());
            shell.start()?;
        },
        Command::Summary { file, json } => {
            let roster = load_roster(&file)?;
            let report = roster.report();
            if json {
                println!("{}", report.to_json()?);
            } else if roster.has_students() {
                print!("{report}");
            } else {
                println!("No students.");
            }
        },
        Command::List { file } => {
            let roster = load_roster(&file)?;
            if !roster.has_students() {
                println!("No students in the tracker yet.");
            }
            for student in roster.report().students {
                println!("{student}");
            }
        },
    }
    Ok(())
}

fn load_roster(path: &Path) -> anyhow::Result<Roster> {
    let mut roster = Roster::new();
    record_store::import_file(path, &mut roster)
        .with_context(|| format!("Unable to import {}", path.display()))?;
    Ok(roster)
}
