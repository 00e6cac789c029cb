/// One shell instruction. Arguments left out on the command line are
/// asked for interactively.
#[derive(Debug, PartialEq)]
pub enum Command {
    AddStudent { name: Option<String> },
    AddGrade { name: Option<String>, value: Option<f64> },
    RemoveStudent { name: Option<String> },
    Summary,
    Export { file: Option<String> },
    Import { file: Option<String> },
    List,
    Help,
    Quit,
}
