use crate::core::command::{Command, HELP_TEXT};
use crate::core::{ConfigProvider, Roster, Storage};
use crate::utils::error::{Result, RosterError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const WELCOME: &str = "Welcome to the Student Management System!";
pub const UNKNOWN_COMMAND: &str = "Unknown command. Type \"help\" for a list of commands.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(Vec<String>),
    Quit(Vec<String>),
}

impl Outcome {
    pub fn lines(&self) -> &[String] {
        match self {
            Self::Continue(lines) | Self::Quit(lines) => lines,
        }
    }
}

/// Line-oriented front end over a [`Roster`].
///
/// Each line is handled to completion, including any file I/O, before the
/// next one is read.
pub struct Shell<S: Storage, C: ConfigProvider> {
    roster: Roster,
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> Shell<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self::with_roster(Roster::new(), storage, config)
    }

    pub fn with_roster(roster: Roster, storage: S, config: C) -> Self {
        Self {
            roster,
            storage,
            config,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub async fn execute(&mut self, line: &str) -> Result<Outcome> {
        match Command::parse(line)? {
            Some(command) => self.dispatch(command).await,
            None => Ok(Outcome::Continue(Vec::new())),
        }
    }

    pub async fn dispatch(&mut self, command: Command) -> Result<Outcome> {
        tracing::debug!("Dispatching {:?}", command);

        let lines = match command {
            Command::Add(student) => {
                self.roster.add(student);
                vec!["Adding student...".to_string(), self.roster.display_names()]
            }
            Command::Remove(email) => {
                if self.roster.remove(&email).is_none() {
                    tracing::debug!("No student with email {}", email);
                }
                vec!["Removing student...".to_string(), self.roster.display_names()]
            }
            Command::Display => {
                vec!["Displaying students...".to_string(), self.roster.display_names()]
            }
            Command::Find(email) => {
                let found = match self.roster.find(&email) {
                    Some(student) => student.to_string(),
                    None => "Student does not exist".to_string(),
                };
                vec!["Finding student...".to_string(), found]
            }
            Command::FilterSpecialization(specialization) => {
                let matches = self.roster.filter_by_specialization(&specialization);
                vec!["Filtering students...".to_string(), join_names(&matches)]
            }
            Command::FilterMinYear(min_year) => {
                let matches = self.roster.filter_by_min_year(min_year);
                vec!["Filtering students...".to_string(), join_names(&matches)]
            }
            Command::Save(file) => {
                let file = file.unwrap_or_else(|| self.config.default_file().to_string());
                self.roster.save(&self.storage, &file).await?;
                vec!["Saving data...".to_string()]
            }
            Command::Load(file) => {
                self.roster.load(&self.storage, &file).await?;
                vec!["Loading data...".to_string(), self.roster.display_names()]
            }
            Command::Clear => {
                self.roster.clear();
                vec!["Clearing data...".to_string(), self.roster.display_names()]
            }
            Command::Help => vec![HELP_TEXT.to_string()],
            Command::Quit => return Ok(Outcome::Quit(vec!["Exiting...".to_string()])),
            Command::Unknown(operation) => {
                tracing::debug!("Unknown operation {}", operation);
                vec![UNKNOWN_COMMAND.to_string()]
            }
        };

        Ok(Outcome::Continue(lines))
    }

    /// Reads commands until `q` or end of input. Command errors, including
    /// lines that are not valid UTF-8, are reported on `output` and the loop
    /// keeps going.
    pub async fn run<R, W>(&mut self, mut input: R, output: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        if self.config.show_banner() {
            write_lines(output, &[WELCOME, HELP_TEXT]).await?;
        }

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }

            let result = match std::str::from_utf8(&buf) {
                Ok(line) => self.execute(line.trim_end_matches(['\r', '\n'])).await,
                Err(_) => Err(RosterError::validation("Input line is not valid UTF-8")),
            };

            match result {
                Ok(Outcome::Continue(out)) => write_lines(output, out.as_slice()).await?,
                Ok(Outcome::Quit(out)) => {
                    write_lines(output, out.as_slice()).await?;
                    break;
                }
                Err(e) => {
                    tracing::error!(
                        "Command '{}' failed: {} (Category: {:?}, Severity: {:?})",
                        String::from_utf8_lossy(&buf).trim(),
                        e,
                        e.category(),
                        e.severity()
                    );
                    let message = format!("Error: {}", e.user_friendly_message());
                    write_lines(output, &[message]).await?;
                }
            }
        }

        write_lines(output, &["Goodbye!"]).await?;
        Ok(())
    }
}

fn join_names(students: &[&crate::core::Student]) -> String {
    students
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

async fn write_lines<W, L>(output: &mut W, lines: &[L]) -> Result<()>
where
    W: AsyncWrite + Unpin,
    L: AsRef<str>,
{
    for line in lines {
        output.write_all(line.as_ref().as_bytes()).await?;
        output.write_all(b"\n").await?;
    }
    output.flush().await?;
    Ok(())
}
