use std::path::PathBuf;

const DEFAULT_PROMPT: &str = "(gradetrack)> ";

/// Settings for an interactive session, filled in from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    pub prompt: String,
    pub load: Option<PathBuf>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            load: None,
        }
    }
}

impl ShellConfig {
    pub fn prompt(mut self, prompt: Option<String>) -> Self {
        if let Some(prompt) = prompt {
            self.prompt = prompt;
        }
        self
    }

    pub fn load(mut self, load: Option<PathBuf>) -> Self {
        self.load = load;
        self
    }
}
