pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, Settings};

pub use crate::core::{command::Command, roster::Roster, shell::Shell};
pub use crate::domain::model::Student;
pub use crate::utils::error::{Result, RosterError};
