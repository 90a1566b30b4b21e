use thiserror::Error;

/// Errors produced while parsing a command line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("{command} expects {expected} argument(s), got {got}")]
    WrongArity {
        command: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Invalid match id: {0}")]
    InvalidMatchId(String),

    #[error("Invalid score: {0}")]
    InvalidScore(String),
}

pub type CommandResult<T> = Result<T, CommandError>;
