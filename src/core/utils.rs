//! Utilities module - Console output helpers
//!
//! Everything goes to stderr: stdout is reserved for transformed documents.

use colored::*;

fn emit(marker: ColoredString, message: &str) {
    eprintln!("   {} {}", marker, message);
}

/// Print a step message
pub fn print_step(message: &str) {
    emit("→".bright_blue(), message);
}

pub fn print_success(message: &str) {
    emit("✓".bright_green(), message);
}

pub fn print_error(message: &str) {
    emit("✗".bright_red(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    emit("⚠".bright_yellow(), message);
}

pub fn print_info(message: &str) {
    emit("ℹ".bright_cyan(), message);
}
