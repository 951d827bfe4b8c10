//! Utilities

use std::{fmt::Display, process::exit};

use colored::Colorize;

/// Prints an info message
pub fn info(msg: &str) {
    eprintln!("{} {msg}", "i".yellow());
}

/// Prints a success message
pub fn success(msg: &str) {
    eprintln!("{} {msg}", "✔️".green());
}

/// Prints a warning message
pub fn warn(msg: &str) {
    eprintln!("{} {}", "!".yellow(), msg.yellow());
}

/// Prints an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", "x".red(), msg.red());
}

/// Result extension trait
pub trait ResultExt<T> {
    /// Unwraps a result or exits with an error
    fn unwrap_or_exit(self) -> T;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                error(&format!("{err:#}"));
                exit(1);
            }
        }
    }
}
