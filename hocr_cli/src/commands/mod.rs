//! CLI subcommand implementations.

pub mod events;
pub mod history;
pub mod qualifying;
pub mod times;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar over `len` (year, event) fetches.
pub(crate) fn fetch_progress(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>3}/{len:3} {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb
}
