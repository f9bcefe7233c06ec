//! Progress bars for download and extraction
//!
//! Display only - nothing in the pipeline depends on progress state. Bars
//! are hidden when stderr is not a terminal.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Bar tracking bytes written during a download.
///
/// Falls back to a byte-counting spinner when the server does not report
/// a content length.
pub fn download_bar(name: &str, total_bytes: Option<u64>) -> ProgressBar {
    let bar = match total_bytes {
        Some(total) => {
            let bar = ProgressBar::new(total);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{msg} [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} ({binary_bytes_per_sec})")
                    .unwrap()
                    .progress_chars("=>-"),
            );
            bar
        }
        None => {
            let bar = ProgressBar::new_spinner();
            bar.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg} {bytes} ({binary_bytes_per_sec})")
                    .unwrap(),
            );
            bar
        }
    };
    bar.set_message(format!("Download {name}"));
    hide_when_not_terminal(&bar);
    bar
}

/// Bar tracking archive entries processed during extraction
pub fn entries_bar(archive: &str, total_entries: u64) -> ProgressBar {
    let bar = ProgressBar::new(total_entries);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{wide_bar:.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );
    bar.set_message(format!("Extract {archive}"));
    hide_when_not_terminal(&bar);
    bar
}

fn hide_when_not_terminal(bar: &ProgressBar) {
    if !atty::is(atty::Stream::Stderr) {
        bar.set_draw_target(ProgressDrawTarget::hidden());
    }
}
