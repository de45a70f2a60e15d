use console::style;
use std::fmt::Display;

/// Centralized output formatting for consistent CLI presentation.
///
/// Progress and results go to stdout, interleaved with the echoed git
/// commands; errors and recovery guidance go to stderr.
pub struct Output;

impl Output {
    /// Print a success message with checkmark
    pub fn success<T: Display>(message: T) {
        println!("{} {}", style("✓").green(), message);
    }

    /// Print an info message
    pub fn info<T: Display>(message: T) {
        println!("{} {}", style("ℹ").cyan(), message);
    }

    /// Print a warning message
    pub fn warning<T: Display>(message: T) {
        println!("{} {}", style("⚠").yellow(), message);
    }

    /// Print a progress step
    pub fn progress<T: Display>(message: T) {
        println!("{} {}", style("→").cyan(), message);
    }

    /// Print a section header
    pub fn section<T: Display>(title: T) {
        println!("\n{}", style(title).bold());
    }

    /// Print a numbered list item
    pub fn numbered_item<T: Display>(number: usize, message: T) {
        println!("  {}. {}", style(number).cyan(), message);
    }

    /// Print an error message to stderr
    pub fn error<T: Display>(message: T) {
        eprintln!("{} {}", style("✗").red(), message);
    }

    /// Print a recovery instruction to stderr, under an error
    pub fn error_hint<T: Display>(message: T) {
        eprintln!("  {}", style(message).dim());
    }
}
