use super::command::*;

#[derive(Debug, PartialEq)]
pub enum ParseErr {
    EmptyLine,
    UnknownCommand(String),
    IncorrectNArguments(String, usize, usize),
}

pub struct Parser {
}

impl Parser {
    fn lex<'a>(&self, command: &'a str) -> (Option<Token>, Vec<&'a str>) {
        let mut words = command.split_whitespace();
        let head = words.next().map(|lexeme| match lexeme.to_lowercase().as_str() {
            "add" | "1" => Token::Add,
            "grade" | "2" => Token::Grade,
            "remove" | "3" => Token::Remove,
            "summary" | "4" => Token::Summary,
            "export" | "5" => Token::Export,
            "import" | "6" => Token::Import,
            "list" | "7" => Token::List,
            "help" | "menu" => Token::Help,
            "quit" | "exit" | "0" => Token::Quit,
            _ => Token::String(lexeme.to_string()),
        });
        (head, words.collect())
    }

    pub fn parse(&mut self, code: &str) -> Result<Command, ParseErr> {
        let (head, args) = self.lex(code);
        let Some(head) = head else { return Err(ParseErr::EmptyLine) };
        let command = head.as_string();

        match head {
            Token::Add => Ok(Command::AddStudent { name: joined(&args) }),
            Token::Remove => Ok(Command::RemoveStudent { name: joined(&args) }),
            Token::Export => Ok(Command::Export { file: joined(&args) }),
            Token::Import => Ok(Command::Import { file: joined(&args) }),
            Token::Grade => {
                // A trailing number is the grade, everything before it the name.
                match args.split_last() {
                    Some((last, rest)) if !rest.is_empty() => match last.parse::<f64>() {
                        Ok(value) => Ok(Command::AddGrade { name: joined(rest), value: Some(value) }),
                        Err(_) => Ok(Command::AddGrade { name: joined(&args), value: None }),
                    },
                    _ => Ok(Command::AddGrade { name: joined(&args), value: None }),
                }
            }
            Token::Summary => no_args(command, args, Command::Summary),
            Token::List => no_args(command, args, Command::List),
            Token::Help => no_args(command, args, Command::Help),
            Token::Quit => no_args(command, args, Command::Quit),
            Token::String(word) => Err(ParseErr::UnknownCommand(word)),
        }
    }
}

fn joined(words: &[&str]) -> Option<String> {
    if words.is_empty() {
        return None;
    }
    Some(words.join(" "))
}

fn no_args(name: String, args: Vec<&str>, command: Command) -> Result<Command, ParseErr> {
    if !args.is_empty() {
        return Err(ParseErr::IncorrectNArguments(name, args.len(), 0));
    }
    Ok(command)
}

#[derive(Debug)]
pub(crate) enum Token {
    String(String),

    Add,
    Grade,
    Remove,
    Summary,
    Export,
    Import,
    List,
    Help,
    Quit,
}

impl Token {
    pub fn as_string(&self) -> String {
        match self {
            Token::String(string) => string.to_string(),
            Token::Add => "add".to_string(),
            Token::Grade => "grade".to_string(),
            Token::Remove => "remove".to_string(),
            Token::Summary => "summary".to_string(),
            Token::Export => "export".to_string(),
            Token::Import => "import".to_string(),
            Token::List => "list".to_string(),
            Token::Help => "help".to_string(),
            Token::Quit => "quit".to_string(),
        }
    }
}
