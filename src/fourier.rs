//! Conversion between Matsubara frequencies and imaginary time
//!
//! [`IwToTau`] maps `niw` samples on the positive Matsubara frequencies
//! `w_k = pi * (2k + zeta) / beta` to `ntau` samples on the uniform
//! imaginary-time grid `tau_n = beta * n / ntau`; [`TauToIw`] is the inverse
//! mapping. Both carry an accelerated fast path over a zero-padded plan and a
//! naive double-sum fallback that serves as the correctness reference.
//!
//! The fast transform runs on a grid of `ntau * oversampling` points, where
//! the oversampling factor is chosen so the padded grid always covers all
//! `niw` frequencies. Zero-padding in frequency space is equivalent to
//! oversampled interpolation in time, so the time grid is recovered by
//! reading the plan output at stride `oversampling`.

use num_complex::Complex64;
use std::f64::consts::PI;

use crate::backend::FftPlan;
use crate::traits::{Statistics, Transform};

/// Padding ratio of the fast-transform grid
///
/// Ceiling of the real quotient `niw / ntau`, at least 1, so that
/// `ntau * oversampling >= niw` and no frequency is lost to truncation.
fn oversampling_factor(niw: usize, ntau: usize) -> usize {
    niw.div_ceil(ntau).max(1)
}

/// Transformation from Matsubara frequencies to imaginary time
///
/// Computes, for each time grid point `tau_n = beta * n / ntau`,
///
/// ```text
/// out[n] += 2/beta * sum[k] Re[ exp(-i w_k tau_n) * in[k] ]
/// ```
///
/// with `w_k = pi * (2k + zeta) / beta`. The fast path cross-checks itself
/// against the reference formula at one grid point per call; a disagreement
/// signals a phase-convention bug and aborts the call.
pub struct IwToTau {
    niw: usize,
    ntau: usize,
    oversampling: usize,
    beta: f64,
    stat: Statistics,
    plan: Option<FftPlan>,
}

impl IwToTau {
    /// Create a converter for `niw` frequencies and `ntau` time points
    ///
    /// # Arguments
    /// * `niw` - Number of Matsubara frequency samples
    /// * `ntau` - Number of imaginary-time samples
    /// * `beta` - Inverse temperature
    /// * `stat` - Bosonic or fermionic statistics
    /// * `use_fft` - Build an accelerated plan; `false` selects the naive path
    ///
    /// # Panics
    /// Panics if either grid size is zero or `beta` is not positive.
    pub fn new(niw: usize, ntau: usize, beta: f64, stat: Statistics, use_fft: bool) -> Self {
        assert!(niw > 0 && ntau > 0, "grid sizes must be positive");
        assert!(
            beta > 0.0,
            "inverse temperature must be positive, got {}",
            beta
        );

        let oversampling = oversampling_factor(niw, ntau);
        let plan = use_fft.then(|| FftPlan::new(ntau * oversampling, -1));

        Self {
            niw,
            ntau,
            oversampling,
            beta,
            stat,
            plan,
        }
    }

    pub fn in_size(&self) -> usize {
        self.niw
    }

    pub fn out_size(&self) -> usize {
        self.ntau
    }

    pub fn oversampling(&self) -> usize {
        self.oversampling
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn statistics(&self) -> Statistics {
        self.stat
    }

    /// Whether calls run on the accelerated plan
    pub fn uses_fft(&self) -> bool {
        self.plan.is_some()
    }

    /// The `n`-th point of the imaginary-time grid, `beta * n / ntau`
    pub fn tau_value(&self, n: usize) -> f64 {
        self.beta * n as f64 / self.ntau as f64
    }

    /// Accumulate the time-domain signal of `input` into `output`
    ///
    /// `input` must hold `niw` frequency samples, `output` `ntau` time
    /// samples.
    pub fn apply(&mut self, input: &[Complex64], output: &mut [f64]) {
        debug_assert_eq!(input.len(), self.niw);
        debug_assert_eq!(output.len(), self.ntau);

        let Some(plan) = self.plan.as_mut() else {
            self.naive(input, output);
            return;
        };

        // pad the frequencies with zeros up to the oversampled grid
        let buf = plan.input_mut();
        buf[..self.niw].copy_from_slice(input);
        buf[self.niw..].fill(Complex64::new(0.0, 0.0));
        plan.execute();

        let norm = 2.0 / self.beta;
        let probe = self.ntau / 2;
        let mut probe_value = 0.0;

        for (n, out) in output.iter_mut().enumerate() {
            let mut ftau = plan.output()[n * self.oversampling];
            ftau *= norm;
            if self.stat == Statistics::Fermionic {
                ftau *= Complex64::cis(-PI * n as f64 / self.ntau as f64);
            }
            if n == probe {
                probe_value = ftau.re;
            }
            *out += ftau.re;
        }

        // cross-check one grid point against the reference formula; a phase
        // convention slip in either path shows up here immediately
        let reference = self.naive_point(input, probe);
        let scale = norm * input.iter().map(|giw| giw.norm()).sum::<f64>();
        assert!(
            (probe_value - reference).abs() <= 1e-10 * (1.0 + scale),
            "fast path disagrees with reference at tau index {}: {} vs {}",
            probe,
            probe_value,
            reference
        );
    }

    /// Direct double-sum evaluation, always available
    pub fn naive(&self, input: &[Complex64], output: &mut [f64]) {
        for (i, out) in output.iter_mut().enumerate() {
            *out += self.naive_point(input, i);
        }
    }

    /// The reference formula at a single time index
    fn naive_point(&self, input: &[Complex64], i: usize) -> f64 {
        let zeta = self.stat.zeta() as f64;
        let mut acc = 0.0;
        for (k, giw) in input.iter().enumerate() {
            let wt = PI * (2.0 * k as f64 + zeta) * i as f64 / self.ntau as f64;
            acc += wt.cos() * giw.re + wt.sin() * giw.im;
        }
        2.0 / self.beta * acc
    }
}

impl Transform for IwToTau {
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

/// Transformation from imaginary time to Matsubara frequencies
///
/// Computes, for each frequency index `k`,
///
/// ```text
/// out[k] += beta/ntau * sum[n] exp(+i w_k tau_n) * in[n]
/// ```
///
/// the inverse of [`IwToTau`] up to the truncation of the frequency axis.
pub struct TauToIw {
    niw: usize,
    ntau: usize,
    oversampling: usize,
    beta: f64,
    stat: Statistics,
    plan: Option<FftPlan>,
}

impl TauToIw {
    /// Create a converter for `ntau` time points and `niw` frequencies
    ///
    /// Same parameter set and oversampling derivation as [`IwToTau::new`],
    /// with the plan built in the forward (`+1`) direction.
    ///
    /// # Panics
    /// Panics if either grid size is zero or `beta` is not positive.
    pub fn new(ntau: usize, niw: usize, beta: f64, stat: Statistics, use_fft: bool) -> Self {
        assert!(niw > 0 && ntau > 0, "grid sizes must be positive");
        assert!(
            beta > 0.0,
            "inverse temperature must be positive, got {}",
            beta
        );

        let oversampling = oversampling_factor(niw, ntau);
        let plan = use_fft.then(|| FftPlan::new(ntau * oversampling, 1));

        Self {
            niw,
            ntau,
            oversampling,
            beta,
            stat,
            plan,
        }
    }

    pub fn in_size(&self) -> usize {
        self.ntau
    }

    pub fn out_size(&self) -> usize {
        self.niw
    }

    pub fn oversampling(&self) -> usize {
        self.oversampling
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn statistics(&self) -> Statistics {
        self.stat
    }

    /// Whether calls run on the accelerated plan
    pub fn uses_fft(&self) -> bool {
        self.plan.is_some()
    }

    /// Accumulate the frequency-domain signal of `input` into `output`
    ///
    /// `input` must hold `ntau` time samples, `output` `niw` frequency
    /// samples.
    pub fn apply(&mut self, input: &[f64], output: &mut [Complex64]) {
        debug_assert_eq!(input.len(), self.ntau);
        debug_assert_eq!(output.len(), self.niw);

        let Some(plan) = self.plan.as_mut() else {
            self.naive(input, output);
            return;
        };

        let norm = self.beta / self.ntau as f64;

        // time samples land at stride `oversampling`; everything in between
        // stays zero
        let buf = plan.input_mut();
        buf.fill(Complex64::new(0.0, 0.0));
        for (n, &val) in input.iter().enumerate() {
            let mut ftau = Complex64::new(val, 0.0);
            if self.stat == Statistics::Fermionic {
                ftau *= Complex64::cis(PI * n as f64 / self.ntau as f64);
            }
            buf[n * self.oversampling] = ftau * norm;
        }

        plan.execute();

        // the frequency axis is not oversampled; take the first niw bins
        for (out, val) in output.iter_mut().zip(&plan.output()[..self.niw]) {
            *out += val;
        }
    }

    /// Direct double-sum evaluation, always available
    pub fn naive(&self, input: &[f64], output: &mut [Complex64]) {
        let zeta = self.stat.zeta() as f64;
        let norm = self.beta / self.ntau as f64;
        for (k, out) in output.iter_mut().enumerate() {
            let mut acc = Complex64::new(0.0, 0.0);
            for (i, &val) in input.iter().enumerate() {
                let wt = PI * (2.0 * k as f64 + zeta) * i as f64 / self.ntau as f64;
                acc += Complex64::new(wt.cos() * val, wt.sin() * val);
            }
            *out += norm * acc;
        }
    }
}

impl Transform for TauToIw {
    type Input = f64;
    type Output = Complex64;

    fn in_size(&self) -> usize {
        self.in_size()
    }

    fn out_size(&self) -> usize {
        self.out_size()
    }

    fn apply_to(&mut self, input: &[f64], output: &mut [Complex64]) {
        self.apply(input, output);
    }
}

#[cfg(test)]
#[path = "fourier_tests.rs"]
mod tests;
