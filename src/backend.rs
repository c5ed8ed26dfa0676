//! Accelerated transform backend adapter
//!
//! Thin wrapper around a `rustfft` execution plan with fixed input/output
//! buffers, mirroring the classic plan-based FFT interface: fill the input
//! buffer, `execute()`, read the output buffer. The plan computes the
//! unnormalized transform
//!
//! ```text
//! out[k] = sum[j] exp(direction * 2*pi*i/n * k * j) * in[j]
//! ```
//!
//! where `direction = -1` is the forward convention and `direction = +1` the
//! inverse. Each plan owns its buffers exclusively and is not reentrant;
//! converters hold at most one plan and never share it.

use num_complex::Complex64;
use rustfft::{Fft, FftDirection, FftPlanner};
use std::sync::Arc;

/// A reusable transform plan of fixed size and direction
pub struct FftPlan {
    fft: Arc<dyn Fft<f64>>,
    input: Vec<Complex64>,
    output: Vec<Complex64>,
    scratch: Vec<Complex64>,
    n: usize,
    direction: i32,
}

impl FftPlan {
    /// Plan a transform of `n` points with the given exponent sign
    ///
    /// # Panics
    /// Panics if `n == 0` or `direction` is not `+1` or `-1`.
    pub fn new(n: usize, direction: i32) -> Self {
        assert!(n > 0, "transform size must be positive");
        assert!(
            direction == 1 || direction == -1,
            "direction must be +1 or -1, got {}",
            direction
        );

        // rustfft's Forward is the exp(-2*pi*i/n) convention
        let fft_direction = if direction < 0 {
            FftDirection::Forward
        } else {
            FftDirection::Inverse
        };
        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft(n, fft_direction);
        let scratch_len = fft.get_outofplace_scratch_len();

        Self {
            fft,
            input: vec![Complex64::new(0.0, 0.0); n],
            output: vec![Complex64::new(0.0, 0.0); n],
            scratch: vec![Complex64::new(0.0, 0.0); scratch_len],
            n,
            direction,
        }
    }

    /// Transform size
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Sign of the exponent (`+1` or `-1`)
    pub fn direction(&self) -> i32 {
        self.direction
    }

    /// The plan's input buffer
    ///
    /// Contents are clobbered by `execute()`; refill it before every call.
    pub fn input_mut(&mut self) -> &mut [Complex64] {
        &mut self.input
    }

    /// The plan's output buffer, valid after the last `execute()`
    pub fn output(&self) -> &[Complex64] {
        &self.output
    }

    /// Compute the unnormalized transform of the input buffer into the
    /// output buffer
    pub fn execute(&mut self) {
        self.fft.process_outofplace_with_scratch(
            &mut self.input,
            &mut self.output,
            &mut self.scratch,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_sizes() {
        let mut plan = FftPlan::new(12, -1);
        assert_eq!(plan.len(), 12);
        assert_eq!(plan.direction(), -1);
        assert_eq!(plan.input_mut().len(), 12);
        assert_eq!(plan.output().len(), 12);
    }

    #[test]
    fn test_impulse_is_flat() {
        // delta input transforms to all-ones for either direction
        for direction in [-1, 1] {
            let mut plan = FftPlan::new(8, direction);
            plan.input_mut()[0] = Complex64::new(1.0, 0.0);
            plan.execute();
            for (k, out) in plan.output().iter().enumerate() {
                assert!(
                    (out - Complex64::new(1.0, 0.0)).norm() < 1e-12,
                    "direction {} bin {}: {}",
                    direction,
                    k,
                    out
                );
            }
        }
    }

    #[test]
    #[should_panic(expected = "direction must be +1 or -1")]
    fn test_invalid_direction() {
        let _ = FftPlan::new(8, 2);
    }
}
