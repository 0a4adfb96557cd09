//! Progress reporting for deliveries
//!
//! Outcome lines are written through the reporter so they never tear an active
//! progress bar.

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for a copy run
pub trait ProgressReporter: Send + Sync {
    /// Announce the platform about to receive deliveries
    fn start_platform(&mut self, platform: &str);

    /// Print one line of output above any progress display
    fn println(&self, line: &str);

    /// Count one finished delivery
    fn inc(&mut self);

    fn finish(&mut self);
}

/// Progress bar over all deliveries of a run
pub struct InteractiveProgressReporter {
    bar: ProgressBar,
}

impl InteractiveProgressReporter {
    pub fn new(total_deliveries: u64) -> Self {
        let bar = ProgressBar::new(total_deliveries);
        if let Ok(style) = ProgressStyle::default_bar().template("[{bar:40.cyan/blue}] {pos}/{len} {msg}") {
            bar.set_style(style.progress_chars("#>-"));
        }
        Self { bar }
    }

    /// Handle to the bar, for suspending it while a prompt is shown
    pub fn bar(&self) -> ProgressBar {
        self.bar.clone()
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn start_platform(&mut self, platform: &str) {
        self.bar.set_message(platform.to_string());
        self.bar.println(format!("\nCopying to {platform}..."));
    }

    fn println(&self, line: &str) {
        self.bar.println(line);
    }

    fn inc(&mut self) {
        self.bar.inc(1);
    }

    fn finish(&mut self) {
        self.bar.finish_and_clear();
    }
}

/// Reporter without a progress bar, for dry runs and non-terminal output
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn start_platform(&mut self, platform: &str) {
        println!("\nCopying to {platform}...");
    }

    fn println(&self, line: &str) {
        println!("{line}");
    }

    fn inc(&mut self) {}

    fn finish(&mut self) {}
}
