//! Spinner feedback while the search runs

use crate::algorithm::search::{SearchObserver, SearchStatistics};
use crate::io::configuration::{PROGRESS_REFRESH_STATES, PROGRESS_TICK_MS};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Reports search statistics on a terminal spinner
///
/// The message is refreshed every few states rather than on every commit so
/// that drawing never dominates the search.
pub struct SearchProgress {
    bar: ProgressBar,
    last_refresh: usize,
}

impl Default for SearchProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchProgress {
    /// Start a ticking spinner
    pub fn new() -> Self {
        let progress = Self::with_bar(ProgressBar::new_spinner());
        progress
            .bar
            .enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
        progress
    }

    /// Spinner that never draws, for quiet runs and tests
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(bar: ProgressBar) -> Self {
        bar.set_style(SPINNER_STYLE.clone());
        bar.set_message("propagating");
        Self {
            bar,
            last_refresh: 0,
        }
    }

    /// Text currently shown next to the spinner
    pub fn message(&self) -> String {
        self.bar.message()
    }

    /// Clear the spinner from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    fn refresh(&mut self, statistics: &SearchStatistics, force: bool) {
        if force || statistics.states >= self.last_refresh + PROGRESS_REFRESH_STATES {
            self.last_refresh = statistics.states;
            self.bar.set_message(describe(statistics));
        }
    }
}

impl SearchObserver for SearchProgress {
    fn on_commit(&mut self, statistics: &SearchStatistics) {
        self.refresh(statistics, false);
    }

    fn on_backtrack(&mut self, statistics: &SearchStatistics) {
        self.refresh(statistics, statistics.backtracks == 1);
    }
}

/// One-line summary of search statistics
pub fn describe(statistics: &SearchStatistics) -> String {
    format!(
        "{} states, {} backtracks, {} revisions, depth {}",
        statistics.states, statistics.backtracks, statistics.revisions, statistics.max_depth
    )
}
