use thiserror::Error;

/// An error returned when two sequences of different lengths are combined
/// element-wise.
///
/// This is the only failure a [`Dyadic`](crate::Dyadic) dispatch can signal.
/// Numeric degeneracies such as division by zero are left to the operator
/// and surface as the numeric type's own values (`NaN`, infinity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("length mismatch: left has {left} elements, right has {right}")]
pub struct LengthError {
    /// Length of the left-hand sequence.
    pub left: usize,

    /// Length of the right-hand sequence.
    pub right: usize,
}

impl LengthError {
    /// Checks that two sequence lengths agree.
    ///
    /// # Errors
    ///
    /// Returns a [`LengthError`] carrying both lengths if they differ.
    pub fn check(left: usize, right: usize) -> Result<(), Self> {
        if left == right {
            Ok(())
        } else {
            log::debug!("rejecting element-wise dispatch: {left} vs {right} elements");
            Err(Self { left, right })
        }
    }
}
