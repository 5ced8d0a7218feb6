use miniconf::Tree;
use serde::{Deserialize, Serialize};

use crate::{ApproxAverage, DEFAULT_WINDOW};

/// Run-time settings of an approximate average filter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Tree, Serialize, Deserialize)]
pub struct Config {
    /// Nominal number of samples to average over.
    ///
    /// # Path
    /// `window`
    ///
    /// # Value
    /// An unsigned 16-bit integer. Zero selects the default of 10.
    pub window: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
        }
    }
}

impl Config {
    /// Build a fresh filter from the settings.
    pub fn build(&self) -> ApproxAverage {
        ApproxAverage::new(self.window)
    }
}

impl ApproxAverage {
    /// Apply new settings.
    ///
    /// The filter is re-initialized, dropping its history, only if the
    /// (resolved) window differs from the current one.
    ///
    /// # Returns
    /// Whether the filter was re-initialized.
    pub fn configure(&mut self, config: &Config) -> bool {
        let window = if config.window == 0 {
            DEFAULT_WINDOW
        } else {
            config.window
        };
        if window == self.window() {
            return false;
        }
        log::info!("Window {} -> {}", self.window(), window);
        self.initialize(window);
        true
    }
}
