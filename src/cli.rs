use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[clap(name = "gradetrack", about = "Track students and their grades")]
pub struct CommandLine {
    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the interactive shell (the default).
    Shell {
        #[clap(long)]
        load: Option<PathBuf>,
        #[clap(long)]
        prompt: Option<String>,
    },
    /// Print the summary report for a roster file.
    Summary {
        #[clap(required = true)]
        file: PathBuf,
        #[clap(long, action)]
        json: bool,
    },
    /// Print the students in a roster file, sorted by name.
    List {
        #[clap(required = true)]
        file: PathBuf,
    },
}
