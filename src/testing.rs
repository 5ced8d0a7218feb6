use rand_core::{RngCore, SeedableRng};
use rand_xorshift::XorShiftRng;

use super::{ApproxAverage, DEFAULT_WINDOW};

/// Wide integer model of the approximate average.
///
/// Follows the step order literally (increment, then clamp and
/// forget) without any overflow handling.
#[derive(Clone, Debug, Default)]
pub struct Model {
    pub window: u32,
    pub count: u32,
    pub sum: i64,
    pub average: i64,
}

impl Model {
    pub fn new(window: u16) -> Self {
        let window = if window == 0 { DEFAULT_WINDOW } else { window };
        Self {
            window: window.into(),
            ..Default::default()
        }
    }

    pub fn update(&mut self, x: i64) -> i64 {
        let v = x - self.average;
        if self.count == 0 {
            self.sum = v;
        } else {
            self.sum += v;
        }
        self.count += 1;
        if self.count > self.window {
            self.count = self.window;
            self.sum -= self.average;
        }
        self.average = self.sum / self.count as i64;
        self.average
    }
}

/// Seeded pseudo-random samples in `[-2**20, 2**20)`.
pub fn samples(seed: u64) -> impl Iterator<Item = i32> {
    let mut rng = XorShiftRng::seed_from_u64(seed);
    core::iter::repeat_with(move || rng.next_u32() as i32 >> 11)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn matches_model() {
        for (seed, window) in [0, 1, 2, 3, 7, 10, 64].into_iter().enumerate() {
            let mut dut = ApproxAverage::new(window);
            let mut checked = dut;
            let mut model = Model::new(window);
            for (i, x) in samples(seed as u64).take(10_000).enumerate() {
                let y = model.update(x as i64);
                assert_eq!(
                    dut.update(x) as i64,
                    y,
                    "window {} sample {}",
                    window,
                    i
                );
                assert_eq!(checked.checked_update(x).map(|v| v as i64), Ok(y));
                assert_eq!(dut.count() as u32, model.count);
                assert_eq!(dut.accumulated_error() as i64, model.sum);
            }
        }
    }

    #[test]
    fn reset_restarts() {
        let mut dut = ApproxAverage::new(16);
        let mut a: Vec<i32> = samples(9).take(500).collect();
        let mut b = a.clone();
        dut.process(&mut a);
        dut.reset();
        dut.process(&mut b);
        assert_eq!(a, b);
    }
}
