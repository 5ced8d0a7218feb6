use serde::Serialize;

use crate::Error;

/// Window used when a zero window is requested.
pub const DEFAULT_WINDOW: u16 = 10;

/// Constant memory approximate moving average for integer samples.
///
/// Instead of a history buffer of `window` samples the filter keeps a single
/// accumulator of the differences between each new sample and the running
/// average. Once `window` samples have been absorbed, every update also
/// subtracts the previous average from the accumulator, standing in for
/// the oldest sample that was never stored.
///
/// The output lags sharp input changes more than a true windowed mean would
/// and truncating division leaves rounding drift in the accumulator. For a
/// constant input `x` the output settles at (about) `x / 2`.
///
/// [`ApproxAverage::update`] wraps on overflow (two's complement) in all
/// build profiles. [`ApproxAverage::checked_update`] detects it instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ApproxAverage {
    window: u16,
    // Saturates at `window`
    count: u16,
    accumulated_error: i32,
    average: i32,
}

impl Default for ApproxAverage {
    fn default() -> Self {
        Self::new(0)
    }
}

impl ApproxAverage {
    /// Create a new filter.
    ///
    /// # Args
    /// * `window`: Nominal number of samples to average over.
    ///   Zero selects [`DEFAULT_WINDOW`].
    pub fn new(window: u16) -> Self {
        let mut filter = Self {
            window: DEFAULT_WINDOW,
            count: 0,
            accumulated_error: 0,
            average: 0,
        };
        filter.initialize(window);
        filter
    }

    /// Set a new window and clear the filter history.
    ///
    /// Zero selects [`DEFAULT_WINDOW`].
    pub fn initialize(&mut self, window: u16) {
        self.window = if window == 0 {
            log::debug!("Zero window, using default of {}", DEFAULT_WINDOW);
            DEFAULT_WINDOW
        } else {
            window
        };
        self.reset();
    }

    /// Clear the history while keeping the window.
    pub fn reset(&mut self) {
        self.count = 0;
        self.accumulated_error = 0;
        self.average = 0;
    }

    /// Update the filter with a new sample.
    ///
    /// # Args
    /// * `x`: New sample
    ///
    /// # Returns
    /// The new average
    pub fn update(&mut self, x: i32) -> i32 {
        let delta = x.wrapping_sub(self.average);
        self.accumulated_error = if self.count == 0 {
            // Priming: discard whatever was accumulated before
            delta
        } else {
            self.accumulated_error.wrapping_add(delta)
        };
        if self.count < self.window {
            self.count += 1;
        } else {
            // Window is full: forget one previous average worth of history.
            self.accumulated_error =
                self.accumulated_error.wrapping_sub(self.average);
        }
        // `count >= 1` here, so the division neither traps nor overflows.
        self.average = self.accumulated_error / self.count as i32;
        self.average
    }

    /// Update the filter with a new sample, detecting overflow.
    ///
    /// Same as [`ApproxAverage::update`] but the filter state is left
    /// untouched if any intermediate value leaves the `i32` range.
    pub fn checked_update(&mut self, x: i32) -> Result<i32, Error> {
        let delta = x.checked_sub(self.average).ok_or(Error::Overflow)?;
        let mut accumulated_error = if self.count == 0 {
            delta
        } else {
            self.accumulated_error
                .checked_add(delta)
                .ok_or(Error::Overflow)?
        };
        let count = if self.count < self.window {
            self.count + 1
        } else {
            accumulated_error = accumulated_error
                .checked_sub(self.average)
                .ok_or(Error::Overflow)?;
            self.count
        };
        let average = accumulated_error / count as i32;

        self.count = count;
        self.accumulated_error = accumulated_error;
        self.average = average;
        Ok(average)
    }

    /// Filter a batch of samples in place.
    ///
    /// Each sample is replaced by the average returned for it.
    pub fn process(&mut self, xy: &mut [i32]) {
        for x in xy.iter_mut() {
            *x = self.update(*x);
        }
    }

    pub fn window(&self) -> u16 {
        self.window
    }

    /// Number of samples absorbed since the last reset, at most `window`.
    pub fn count(&self) -> u16 {
        self.count
    }

    pub fn accumulated_error(&self) -> i32 {
        self.accumulated_error
    }

    /// The most recent output.
    pub fn average(&self) -> i32 {
        self.average
    }

    /// No sample absorbed since initialization or the last reset.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The window is full and every update forgets history.
    pub fn is_full(&self) -> bool {
        self.count == self.window
    }
}
