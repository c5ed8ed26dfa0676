//! High-frequency tail models and model-subtracting conversion
//!
//! A truncated Matsubara sum converges slowly for functions with a
//! `1/(i w)`-like high-frequency tail. [`IwToTauModel`] removes an
//! analytically known tail in frequency space before transforming and adds
//! its closed-form imaginary-time image back afterwards, so the transform
//! only has to resolve the better-behaved residual.

use num_complex::Complex64;
use std::f64::consts::PI;

use crate::fourier::IwToTau;
use crate::traits::{Statistics, Transform};

/// An analytic model known in both the frequency and the time domain
///
/// Stateless with respect to the converter: queried per frequency index and
/// per time value.
pub trait TailModel {
    /// Model value at the `index`-th positive Matsubara frequency
    fn value_in_frequency(&self, index: usize) -> Complex64;

    /// Model value at imaginary time `tau`
    fn value_in_time(&self, tau: f64) -> f64;
}

/// Moment expansion of the high-frequency tail
///
/// Represents `f(i w_k) = c_1/(i w_k) + c_2/(i w_k)^2 + c_3/(i w_k)^3` on the
/// fermionic frequencies `w_k = pi * (2k + 1) / beta`, together with the
/// closed-form imaginary-time images of the individual powers on `(0, beta)`:
///
/// ```text
/// 1/(i w)   ->  -1/2
/// 1/(i w)^2 ->  (2 tau - beta) / 4
/// 1/(i w)^3 ->  tau (beta - tau) / 4
/// ```
///
/// The bosonic zero mode diverges, so only fermionic statistics are
/// supported.
#[derive(Debug, Clone)]
pub struct MomentModel {
    moments: Vec<f64>,
    beta: f64,
}

impl MomentModel {
    /// Create a model from the leading tail moments
    ///
    /// # Panics
    /// Panics if `stat` is not fermionic, more than three moments are given,
    /// or `beta` is not positive.
    pub fn new(moments: Vec<f64>, beta: f64, stat: Statistics) -> Self {
        assert!(
            stat == Statistics::Fermionic,
            "moment tail model requires fermionic statistics"
        );
        assert!(
            moments.len() <= 3,
            "closed-form time-domain images are available for the first three moments only"
        );
        assert!(
            beta > 0.0,
            "inverse temperature must be positive, got {}",
            beta
        );

        Self { moments, beta }
    }

    pub fn moments(&self) -> &[f64] {
        &self.moments
    }

    fn omega(&self, index: usize) -> f64 {
        PI * (2 * index + 1) as f64 / self.beta
    }
}

impl TailModel for MomentModel {
    fn value_in_frequency(&self, index: usize) -> Complex64 {
        let inv_iw = Complex64::new(0.0, self.omega(index)).inv();
        // Horner over 1/(i w), starting from the highest moment
        let mut acc = Complex64::new(0.0, 0.0);
        for &c in self.moments.iter().rev() {
            acc = (acc + c) * inv_iw;
        }
        acc
    }

    fn value_in_time(&self, tau: f64) -> f64 {
        let beta = self.beta;
        let mut val = 0.0;
        if let Some(&c1) = self.moments.first() {
            val -= 0.5 * c1;
        }
        if let Some(&c2) = self.moments.get(1) {
            val += c2 * (2.0 * tau - beta) / 4.0;
        }
        if let Some(&c3) = self.moments.get(2) {
            val += c3 * tau * (beta - tau) / 4.0;
        }
        val
    }
}

/// Frequency-to-time conversion with tail-model subtraction
///
/// Wraps an [`IwToTau`] converter by value; the converter's grids and
/// statistics are unchanged, only a pre/post processing stage is added around
/// it.
pub struct IwToTauModel<M: TailModel> {
    transform: IwToTau,
    model: M,
    in_buffer: Vec<Complex64>,
}

impl<M: TailModel> IwToTauModel<M> {
    /// Wrap `transform` with subtraction of `model`
    pub fn new(transform: IwToTau, model: M) -> Self {
        let niw = transform.in_size();
        Self {
            transform,
            model,
            in_buffer: vec![Complex64::new(0.0, 0.0); niw],
        }
    }

    pub fn in_size(&self) -> usize {
        self.transform.in_size()
    }

    pub fn out_size(&self) -> usize {
        self.transform.out_size()
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Accumulate the time-domain signal of `input` into `output`
    ///
    /// Same contract as [`IwToTau::apply`]; the model subtraction leaves the
    /// final result unchanged up to discretization error.
    pub fn apply(&mut self, input: &[Complex64], output: &mut [f64]) {
        debug_assert_eq!(input.len(), self.in_size());
        debug_assert_eq!(output.len(), self.out_size());

        // remove the model in frequency space
        self.in_buffer.copy_from_slice(input);
        for (k, val) in self.in_buffer.iter_mut().enumerate() {
            *val -= self.model.value_in_frequency(k);
        }

        self.transform.apply(&self.in_buffer, output);

        // add the model back in tau space
        for (n, out) in output.iter_mut().enumerate() {
            *out += self.model.value_in_time(self.transform.tau_value(n));
        }
    }
}

impl<M: TailModel> Transform for IwToTauModel<M> {
    type Input = Complex64;
    type Output = f64;

    fn in_size(&self) -> usize {
        self.in_size()
    }

    fn out_size(&self) -> usize {
        self.out_size()
    }

    fn apply_to(&mut self, input: &[Complex64], output: &mut [f64]) {
        self.apply(input, output);
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
