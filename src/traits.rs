//! Statistics tags and the common transform interface
//!
//! Every converter in this crate exposes the same calling convention: fixed
//! input/output sizes chosen at construction, and an `apply_to` call that
//! accumulates into the caller's output buffer. The `Transform` trait captures
//! that convention so generic helpers like [`apply`] work for all of them.

use num_traits::Zero;

/// Periodicity of the signal on the imaginary-time axis
///
/// Selects the integer phase offset zeta entering the angular argument
/// `pi * (2k + zeta) * n / ntau` of every frequency/time formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistics {
    /// Periodic in imaginary time (zeta = 0)
    Bosonic = 0,
    /// Antiperiodic in imaginary time (zeta = 1)
    Fermionic = 1,
}

impl Statistics {
    /// Phase offset entering the `(2k + zeta)` angular argument
    pub fn zeta(self) -> u32 {
        match self {
            Statistics::Bosonic => 0,
            Statistics::Fermionic => 1,
        }
    }
}

/// Error type for the bulk transform convenience
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("size mismatch: transform expects {expected} input samples, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Common interface of all converters
///
/// Implementors accumulate into the output buffer (`+=` semantics): calling
/// twice into the same buffer doubles the result. Callers that need exact
/// values must zero-initialize the output first.
pub trait Transform {
    /// Element type of the input buffer
    type Input: Copy;
    /// Element type of the output buffer
    type Output: Copy + Zero;

    /// Number of input samples fixed at construction
    fn in_size(&self) -> usize;

    /// Number of output samples fixed at construction
    fn out_size(&self) -> usize;

    /// Accumulate the transform of `input` into `output`
    ///
    /// Both slices must have exactly `in_size()` / `out_size()` elements.
    fn apply_to(&mut self, input: &[Self::Input], output: &mut [Self::Output]);
}

/// Transform a vector, allocating a zeroed output
///
/// This is the one place a caller-side size mismatch is detectable; it fails
/// fast instead of reading out of bounds.
///
/// # Errors
/// Returns [`TransformError::SizeMismatch`] if `input.len() != tf.in_size()`.
pub fn apply<T: Transform>(
    tf: &mut T,
    input: &[T::Input],
) -> Result<Vec<T::Output>, TransformError> {
    if input.len() != tf.in_size() {
        return Err(TransformError::SizeMismatch {
            expected: tf.in_size(),
            actual: input.len(),
        });
    }

    let mut out = vec![T::Output::zero(); tf.out_size()];
    tf.apply_to(input, &mut out);
    Ok(out)
}
