//! Terminal output utilities

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use newpro_projects::generate::Progress;

/// Print an info message
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Print a header
pub fn header(msg: &str) {
    println!("\n{}", style(msg).bold().underlined());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Spinner redrawn by the caller rather than by a background ticker
///
/// Generators report each step through [`Progress::step`]; the long-running
/// ones call [`Progress::tick`] from their wait loop.
pub struct SpinnerProgress {
    bar: ProgressBar,
}

impl SpinnerProgress {
    pub fn new(msg: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.blue} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("|/-\\ "),
        );
        bar.set_message(msg.to_string());
        Self { bar }
    }

    /// Remove the spinner line
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Progress for SpinnerProgress {
    fn step(&self, message: &str) {
        tracing::debug!("{}", message);
        self.bar.set_message(message.to_string());
        self.bar.tick();
    }

    fn tick(&self) {
        self.bar.tick();
    }
}
