//! # matsubara-fourier: Matsubara-frequency / imaginary-time transforms
//!
//! Converts functions of finite-temperature quantum many-body theory between
//! their values on the positive Matsubara frequencies and their values on a
//! uniform imaginary-time grid over `[0, beta)`. The conversion is a
//! structured discrete Fourier transform with statistics-dependent phase
//! factors (bosonic vs. fermionic), oversampling to reconcile mismatched grid
//! sizes, and a verified naive fallback for when the accelerated path is
//! disabled.
//!
//! Every converter is constructed once with fixed grid sizes, statistics and
//! inverse temperature, then called repeatedly with different buffers. Output
//! buffers are accumulated into (`+=`), never overwritten.
//!
//! ```
//! use matsubara_fourier::{apply, Complex64, IwToTau, Statistics};
//!
//! let mut iw_to_tau = IwToTau::new(4, 8, 1.0, Statistics::Bosonic, true);
//! let giw = vec![Complex64::new(1.0, 0.0); 4];
//! let gtau = apply(&mut iw_to_tau, &giw).unwrap();
//! assert_eq!(gtau.len(), 8);
//! ```

pub mod backend;
pub mod dft;
pub mod fourier;
pub mod model;
pub mod traits;

// Re-export commonly used types and traits
pub use backend::FftPlan;
pub use dft::Dft;
pub use fourier::{IwToTau, TauToIw};
pub use model::{IwToTauModel, MomentModel, TailModel};
pub use traits::{apply, Statistics, Transform, TransformError};

// Re-export external dependencies for convenience
pub use num_complex::Complex64;
