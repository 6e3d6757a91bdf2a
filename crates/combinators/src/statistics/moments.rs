use num_traits::Float;
use tacit_core::{Monadic, monad};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{mean, skewness, std_dev, variance};

/// A summary of a sequence's first three moments.
///
/// Produced by [`describe()`]. Each field holds exactly what the matching
/// statistics monad returns for the same input.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Moments<T> {
    pub count: usize,
    pub mean: T,
    pub variance: T,
    pub std_dev: T,
    pub skewness: T,
}

/// Summarizes a sequence as [`Moments`].
///
/// # Example
///
/// ```
/// use tacit_combinators::describe;
/// use tacit_core::Monadic;
///
/// let moments = describe().apply_one(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
///
/// assert_eq!(moments.count, 8);
/// assert_eq!(moments.mean, 5.0);
/// assert_eq!(moments.std_dev, 2.0);
/// ```
pub fn describe<T: Float>() -> impl Monadic<Input = [T], Output = Moments<T>> + Copy {
    monad(|xs: &[T]| Moments {
        count: xs.len(),
        mean: mean::<T>().apply_one(xs),
        variance: variance::<T>().apply_one(xs),
        std_dev: std_dev::<T>().apply_one(xs),
        skewness: skewness::<T>().apply_one(xs),
    })
}
