// Line-oriented command driver used by the scoreboard binary

pub mod command;
pub mod errors;
pub mod render;
pub mod session;

pub use command::{parse_command, Command};
pub use errors::CommandError;
pub use session::run_session;
