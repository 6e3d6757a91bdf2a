//! Statistical reductions over a sequence of numbers.
//!
//! All moments are population (biased) moments computed from raw-moment
//! formulas:
//!
//! - `mean(x)     = Σx / n`
//! - `variance(x) = mean(x²) - mean(x)²`
//! - `std_dev(x)  = √variance(x)`
//! - `skewness(x) = (E[x³] - 3·μ·σ² - μ³) / σ³`
//!
//! The single-pass variance loses precision to cancellation when the mean is
//! large relative to the spread. Degenerate inputs produce float values rather
//! than errors: an empty sequence has a `NaN` mean, and a constant sequence
//! has a zero standard deviation and therefore a non-finite skewness.

mod moments;

use num_traits::{Float, NumCast};
use tacit_core::{Monadic, monad};

use crate::numeric::{cube, sqrt, square, sum};

pub use moments::{Moments, describe};

/// The arithmetic mean, `Σx / n`.
pub fn mean<T: Float>() -> impl Monadic<Input = [T], Output = T> + Copy {
    monad(|xs: &[T]| sum::<T>().apply_one(xs) / count(xs))
}

/// The population variance, `mean(x²) - mean(x)²`.
pub fn variance<T: Float>() -> impl Monadic<Input = [T], Output = T> + Copy {
    monad(|xs: &[T]| {
        let mean_of_squares = mean::<T>().apply_one(&square::<T>().apply_each(xs));
        mean_of_squares - square::<T>().apply_one(&mean::<T>().apply_one(xs))
    })
}

/// The population standard deviation, `√variance(x)`.
pub fn std_dev<T: Float>() -> impl Monadic<Input = [T], Output = T> + Copy {
    variance::<T>().then(sqrt::<T>())
}

/// The population skewness, `(E[x³] - 3·μ·σ² - μ³) / σ³`.
pub fn skewness<T: Float>() -> impl Monadic<Input = [T], Output = T> + Copy {
    monad(|xs: &[T]| {
        let three = T::one() + T::one() + T::one();

        let mu = mean::<T>().apply_one(xs);
        let sigma = std_dev::<T>().apply_one(xs);

        let ex_cubed = sum::<T>().apply_one(&cube::<T>().apply_each(xs)) / count(xs);
        let three_mu_sigma_squared = three * mu * square::<T>().apply_one(&sigma);
        let mu_cubed = cube::<T>().apply_one(&mu);
        let sigma_cubed = cube::<T>().apply_one(&sigma);

        (ex_cubed - three_mu_sigma_squared - mu_cubed) / sigma_cubed
    })
}

/// The number of elements as a float.
fn count<T: Float>(xs: &[T]) -> T {
    <T as NumCast>::from(xs.len()).unwrap_or_else(T::nan)
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn mean_of_small_sequences() {
        assert_eq!(mean().apply_one(&[3.0, 4.0, 5.0]), 4.0);
        assert_eq!(mean().apply_one(&[7.5]), 7.5);
        assert_relative_eq!(mean().apply_one(&[1.0_f32, 2.0]), 1.5);
    }

    #[test]
    fn mean_of_empty_is_nan() {
        assert!(mean::<f64>().apply_one(&[]).is_nan());
    }

    #[test]
    fn constant_sequence_has_no_spread() {
        let constant = [2.0, 2.0, 2.0];
        assert_eq!(variance().apply_one(&constant), 0.0);
        assert_eq!(std_dev().apply_one(&constant), 0.0);
    }

    #[test]
    fn variance_is_the_population_variance() {
        // mean 5, squared deviations sum to 32 over 8 values
        let xs = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(variance().apply_one(&xs), 4.0);
        assert_relative_eq!(std_dev().apply_one(&xs), 2.0);
    }

    #[test]
    fn symmetric_data_has_zero_skewness() {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_abs_diff_eq!(skewness().apply_one(&xs), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn right_tail_is_positively_skewed() {
        // μ = 1, σ² = 3, E[x³] = 16 ⇒ (16 - 9 - 1) / 3^(3/2)
        let xs = [0.0, 0.0, 0.0, 4.0];
        let expected = 6.0 / 3.0_f64.powf(1.5);
        assert_relative_eq!(skewness().apply_one(&xs), expected, epsilon = 1e-12);
        assert!(skewness().apply_one(&[4.0, 0.0, 0.0, 0.0]) > 0.0);
        assert!(skewness().apply_one(&[-4.0, 0.0, 0.0, 0.0]) < 0.0);
    }

    #[test]
    fn constant_sequence_skewness_is_not_finite() {
        assert!(!skewness::<f64>().apply_one(&[2.0, 2.0, 2.0]).is_finite());
    }

    #[test]
    fn raw_moment_variance_cancels_for_large_offsets() {
        // The two-pass formula would give exactly 2/3 here.
        let xs = [1e9 + 1.0, 1e9 + 2.0, 1e9 + 3.0];
        let raw = variance().apply_one(&xs);
        assert!((raw - 2.0 / 3.0).abs() > 1e-6);
    }

    #[test]
    fn statistics_apply_to_each_sequence() {
        let samples = [vec![1.0, 3.0], vec![10.0, 20.0, 30.0]];
        let means: Vec<f64> = samples.iter().map(|s| mean().apply_one(s.as_slice())).collect();
        assert_eq!(means, vec![2.0, 20.0]);
    }
}
