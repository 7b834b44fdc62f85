//! Interactive and scriptable shell over the booking core.

pub mod commands;
pub mod core;
pub mod forms;
pub mod output;
pub mod shell;
pub mod ui;

pub use self::core::{CliError, CliMode, CommandError, ShellContext};
pub use shell::run_cli;
