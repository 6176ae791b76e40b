//! Terminal progress bar for matching runs.

use std::io::{self, IsTerminal};

use bpdup_match::Progress;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const TEMPLATE: &str =
    "{msg} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} rows ({eta} left)";

/// Progress bar over outer-loop rows; hidden when stderr is not a terminal.
///
/// The length is set by the first progress report.
pub fn comparison_bar() -> ProgressBar {
    let bar = ProgressBar::new(0);
    if io::stderr().is_terminal() {
        let style = ProgressStyle::with_template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        bar.set_style(style);
    } else {
        bar.set_draw_target(ProgressDrawTarget::hidden());
    }
    bar.set_message("Comparing");
    bar
}

/// Callback that moves `bar` to the reported row.
pub fn update_from(bar: ProgressBar) -> impl Fn(Progress) + Send + Sync + 'static {
    move |progress| {
        bar.set_length(progress.rows_total as u64);
        bar.set_position(progress.rows_done as u64);
    }
}
