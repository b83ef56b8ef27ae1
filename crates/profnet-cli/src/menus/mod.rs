//! Numeric-menu REPL layer.
//!
//! Each menu loops until the user picks the return choice. Service errors
//! are printed in place and never terminate the session.

pub mod connections;
pub mod entry;
pub mod messaging;
pub mod profile;
pub mod view;

use colored::Colorize;
use profnet_core::ProfNetError;

/// Prints a recoverable error and lets the calling menu continue.
pub(crate) fn report(err: &ProfNetError) {
    println!("{}", err.to_string().red());
}

pub(crate) fn unrecognized() {
    println!("{}", "Unrecognized choice!".yellow());
}
