pub mod collation;
pub mod command;
pub mod roster;
pub mod shell;

pub use crate::domain::model::Student;
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
pub use roster::Roster;
