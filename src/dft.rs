//! Generic discrete Fourier transform with pluggable accelerated backend
//!
//! [`Dft`] performs the unnormalized discrete Fourier transform
//!
//! ```text
//! out[k] += sum[j] exp(direction * 2*pi*i/n * k * j) * in[j]
//! ```
//!
//! delegating to an accelerated plan when one was built at construction, and
//! to a direct O(n^2) summation otherwise. The naive path is the correctness
//! reference: both paths must agree to floating-point tolerance.

use num_complex::Complex64;
use std::f64::consts::PI;

use crate::backend::FftPlan;
use crate::traits::Transform;

/// Discrete Fourier transform of fixed size and direction
pub struct Dft {
    n: usize,
    direction: i32,
    plan: Option<FftPlan>,
}

impl Dft {
    /// Create a transform of `n` points with exponent sign `direction`
    ///
    /// With `use_fft = false` the plan is left uninitialized and every call
    /// takes the naive path.
    ///
    /// # Panics
    /// Panics if `n == 0` or `direction` is not `+1` or `-1`.
    pub fn new(n: usize, direction: i32, use_fft: bool) -> Self {
        assert!(n > 0, "transform size must be positive");
        assert!(
            direction == 1 || direction == -1,
            "direction must be +1 or -1, got {}",
            direction
        );

        let plan = use_fft.then(|| FftPlan::new(n, direction));
        Self { n, direction, plan }
    }

    pub fn in_size(&self) -> usize {
        self.n
    }

    pub fn out_size(&self) -> usize {
        self.n
    }

    /// Sign of the exponent (`+1` or `-1`)
    pub fn direction(&self) -> i32 {
        self.direction
    }

    /// Whether calls run on the accelerated plan
    pub fn uses_fft(&self) -> bool {
        self.plan.is_some()
    }

    /// Accumulate the transform of `input` into `output`
    ///
    /// Both slices must have exactly `n` elements.
    pub fn apply(&mut self, input: &[Complex64], output: &mut [Complex64]) {
        debug_assert_eq!(input.len(), self.n);
        debug_assert_eq!(output.len(), self.n);

        let Some(plan) = self.plan.as_mut() else {
            self.naive(input, output);
            return;
        };

        plan.input_mut().copy_from_slice(input);
        plan.execute();
        for (out, val) in output.iter_mut().zip(plan.output()) {
            *out += val;
        }
    }

    /// Direct double-sum evaluation, always available
    pub fn naive(&self, input: &[Complex64], output: &mut [Complex64]) {
        let step = self.direction as f64 * 2.0 * PI / self.n as f64;
        for (k, out) in output.iter_mut().enumerate() {
            let mut acc = Complex64::new(0.0, 0.0);
            for (j, val) in input.iter().enumerate() {
                acc += Complex64::cis(step * (k * j) as f64) * val;
            }
            *out += acc;
        }
    }
}

impl Transform for Dft {
    type Input = Complex64;
    type Output = Complex64;

    fn in_size(&self) -> usize {
        self.in_size()
    }

    fn out_size(&self) -> usize {
        self.out_size()
    }

    fn apply_to(&mut self, input: &[Complex64], output: &mut [Complex64]) {
        self.apply(input, output);
    }
}

#[cfg(test)]
#[path = "dft_tests.rs"]
mod tests;
