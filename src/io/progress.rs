//! Multi-page progress tracking with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Per-page display state
#[derive(Debug, Clone, Default)]
struct PageState {
    name: String,
    done: usize,
    total: usize,
}

/// Coordinates progress display for batch extraction
///
/// Shows one bar per recent page, counting finished decompositions. Large page
/// sets get an extra batch bar counting finished pages.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    page_bars: Vec<ProgressBar>,
    page_states: Vec<PageState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Pages: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            page_bars: Vec::new(),
            page_states: Vec::new(),
        }
    }

    /// Create the bars for `page_count` pages
    pub fn initialize(&mut self, page_count: usize) {
        if page_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(page_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..page_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(PROGRESS_STYLE.clone());
            self.page_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Start tracking a page with `decompositions` runs to perform
    pub fn start_page(&mut self, index: usize, path: &Path, decompositions: usize) {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.page_states.len() {
            self.page_states.resize(index + 1, PageState::default());
        }
        if let Some(state) = self.page_states.get_mut(index) {
            *state = PageState {
                name,
                done: 0,
                total: decompositions,
            };
        }
        self.update_bars();
    }

    /// Record one more finished decomposition on a page
    pub fn advance(&mut self, index: usize) {
        if let Some(state) = self.page_states.get_mut(index) {
            state.done = (state.done + 1).min(state.total);
        }
        self.update_bars();
    }

    /// Mark a page as finished
    pub fn complete_page(&mut self, index: usize, converged: bool) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(state) = self.page_states.get_mut(index) {
            let mark = if converged { "✓" } else { "✗" };
            state.name = format!("{mark} {}", state.name);
            state.done = state.total;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All pages processed");
        }
        let _ = self.multi_progress.clear();
    }

    // Show the most recent pages, one per bar
    fn update_bars(&self) {
        let active: Vec<&PageState> = self
            .page_states
            .iter()
            .filter(|state| !state.name.is_empty())
            .collect();
        let start = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start..).unwrap_or(&[]);

        for (bar_index, state) in visible.iter().enumerate() {
            if let Some(bar) = self.page_bars.get(bar_index) {
                bar.set_length(state.total as u64);
                bar.set_position(state.done as u64);
                let width = state.total.to_string().len();
                bar.set_message(format!("{:>width$}/{}", state.done, state.total));
                bar.set_prefix(state.name.clone());
            }
        }

        for bar in self.page_bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}
