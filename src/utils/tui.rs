use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while a document fetch is in flight. The caller is
/// responsible for finishing it on every outcome, including errors.
pub fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["|", "/", "-", "\\"])
            .template("{spinner} {msg}")
            .unwrap(),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
