//! Progress reporting for AI requests

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use tourdesk_application::ProgressNotifier;

/// Reports AI request progress with a spinner
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap()
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_request_start(&self, label: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(label.to_string());
        pb.set_message("waiting for response...");
        pb.enable_steady_tick(Duration::from_millis(100));

        *self.spinner.lock().unwrap() = Some(pb);
    }

    fn on_request_complete(&self, label: &str, success: bool) {
        if let Some(pb) = self.spinner.lock().unwrap().take() {
            if success {
                pb.finish_with_message(format!("{} {}", "v".green(), label));
            } else {
                pb.finish_with_message(format!("{} {} (failed)", "x".red(), label));
            }
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_request_start(&self, label: &str) {
        println!("{} {}", "->".cyan(), label.bold());
    }

    fn on_request_complete(&self, label: &str, success: bool) {
        if success {
            println!("  {} {}", "v".green(), label);
        } else {
            println!("  {} {} (failed)", "x".red(), label);
        }
    }
}
