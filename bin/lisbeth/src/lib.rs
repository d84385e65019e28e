mod command;
mod output;

pub use command::{execute, HostCommand, ParseError, VacuumAction};
pub use output::Output;

pub type ErasedError = Box<dyn std::error::Error + Send + Sync>;
pub type Result<T> = std::result::Result<T, ErasedError>;
