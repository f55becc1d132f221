use crate::core::Student;
use crate::utils::error::{Result, RosterError};

pub const HELP_TEXT: &str = "\
Available Commands:
- add [name] [year] [email] [specialization]: Add a student
- remove [email]: Remove a student by email
- display: Show all students
- find [email]: Find a student by email
- filter-spec [specialization]: List students with a specialization, sorted by name
- filter-year [minYear]: List students at or above a year, sorted by name
- save [fileName]: Save the current roster to a file (default file if omitted)
- load [fileName]: Load a roster from a file
- clear: Clear the current roster
- help: Show this list
- q: Quit the terminal";

/// A parsed shell line. Arguments are already tokenized and typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Student),
    Remove(String),
    Display,
    Find(String),
    FilterSpecialization(String),
    FilterMinYear(i64),
    Save(Option<String>),
    Load(String),
    Clear,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    /// Parses one input line. Returns `Ok(None)` for blank input.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut tokens = line.split_whitespace();
        let Some(operation) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();

        let command = match operation {
            "add" => {
                let &[name, year, email, specialization] = args.as_slice() else {
                    return Err(usage("add [name] [year] [email] [specialization]"));
                };
                Self::Add(Student::new(name, parse_year(year)?, email, specialization))
            }
            "remove" => Self::Remove(single_arg(&args, "remove [email]")?),
            "display" => Self::Display,
            "find" => Self::Find(single_arg(&args, "find [email]")?),
            "filter-spec" => {
                Self::FilterSpecialization(single_arg(&args, "filter-spec [specialization]")?)
            }
            "filter-year" => {
                Self::FilterMinYear(parse_year(&single_arg(&args, "filter-year [minYear]")?)?)
            }
            "save" => Self::Save(args.first().map(|s| s.to_string())),
            "load" => Self::Load(single_arg(&args, "load [fileName]")?),
            "clear" => Self::Clear,
            "q" => Self::Quit,
            other if other.eq_ignore_ascii_case("help") && args.is_empty() => Self::Help,
            other => Self::Unknown(other.to_string()),
        };

        Ok(Some(command))
    }
}

fn single_arg(args: &[&str], usage_line: &str) -> Result<String> {
    args.first()
        .map(|s| s.to_string())
        .ok_or_else(|| usage(usage_line))
}

fn parse_year(raw: &str) -> Result<i64> {
    raw.parse()
        .map_err(|_| RosterError::validation(format!("Year must be an integer, got '{}'", raw)))
}

fn usage(line: &str) -> RosterError {
    RosterError::validation(format!("Usage: {}", line))
}
