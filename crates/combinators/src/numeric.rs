//! Scalar math wrapped as monads and dyads.
//!
//! Each constructor is generic over any [`Float`], so the same operator works
//! for `f32` and `f64`. Degenerate inputs are not intercepted: `sqrt(-1)` is
//! `NaN` and `reciprocal(0)` is infinite, exactly as the float type defines.

#![warn(missing_docs)]

use num_traits::Float;
use tacit_core::{Dyadic, Monadic, commutative, dyad, monad};

/// Negation, `-x`.
pub fn negate<T: Float>() -> impl Monadic<Input = T, Output = T> + Copy {
    monad(|x: &T| -*x)
}

/// Reciprocal, `1 / x`.
pub fn reciprocal<T: Float>() -> impl Monadic<Input = T, Output = T> + Copy {
    monad(|x: &T| x.recip())
}

/// Square root, `√x`. Negative inputs give `NaN`.
pub fn sqrt<T: Float>() -> impl Monadic<Input = T, Output = T> + Copy {
    monad(|x: &T| x.sqrt())
}

/// Rounds down to the nearest integer.
pub fn floor<T: Float>() -> impl Monadic<Input = T, Output = T> + Copy {
    monad(|x: &T| x.floor())
}

/// Rounds up to the nearest integer.
pub fn ceiling<T: Float>() -> impl Monadic<Input = T, Output = T> + Copy {
    monad(|x: &T| x.ceil())
}

/// Natural logarithm.
pub fn ln<T: Float>() -> impl Monadic<Input = T, Output = T> + Copy {
    monad(|x: &T| x.ln())
}

/// Exponential, `eˣ`.
pub fn exp<T: Float>() -> impl Monadic<Input = T, Output = T> + Copy {
    monad(|x: &T| x.exp())
}

/// Absolute value, `|x|`.
pub fn abs<T: Float>() -> impl Monadic<Input = T, Output = T> + Copy {
    monad(|x: &T| x.abs())
}

/// The sign of a value: `-1`, `0`, or `1`.
///
/// Zero maps to itself (keeping its sign bit) and `NaN` stays `NaN`.
/// This differs from [`Float::signum`], which maps `+0.0` to `1.0`.
pub fn signum<T: Float>() -> impl Monadic<Input = T, Output = T> + Copy {
    monad(|x: &T| if x.is_zero() { *x } else { x.signum() })
}

/// Square, `x²`.
pub fn square<T: Float>() -> impl Monadic<Input = T, Output = T> + Copy {
    monad(|x: &T| *x * *x)
}

/// Cube, `x³`.
pub fn cube<T: Float>() -> impl Monadic<Input = T, Output = T> + Copy {
    monad(|x: &T| *x * *x * *x)
}

/// Sums a sequence, starting from zero.
///
/// The sum of an empty sequence is zero.
pub fn sum<T: Float>() -> impl Monadic<Input = [T], Output = T> + Copy {
    monad(|xs: &[T]| xs.iter().fold(T::zero(), |total, &x| total + x))
}

/// Addition, `l + r`.
pub fn add<T: Float>() -> impl Dyadic<Left = T, Right = T, Output = T> + Copy {
    commutative(|l: &T, r: &T| *l + *r)
}

/// Multiplication, `l * r`.
pub fn multiply<T: Float>() -> impl Dyadic<Left = T, Right = T, Output = T> + Copy {
    commutative(|l: &T, r: &T| *l * *r)
}

/// Subtraction, `l - r`.
pub fn subtract<T: Float>() -> impl Dyadic<Left = T, Right = T, Output = T> + Copy {
    dyad(|l: &T, r: &T| *l - *r)
}

/// Division, `l / r`.
pub fn divide<T: Float>() -> impl Dyadic<Left = T, Right = T, Output = T> + Copy {
    dyad(|l: &T, r: &T| *l / *r)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn rounding_monads() {
        let xs = [-1.5, -0.25, 0.0, 2.75];
        assert_eq!(floor().apply_each(&xs), vec![-2.0, -1.0, 0.0, 2.0]);
        assert_eq!(ceiling().apply_each(&xs), vec![-1.0, -0.0, 0.0, 3.0]);
    }

    #[test]
    fn sign_and_magnitude() {
        let xs: [f64; 4] = [-3.0, -0.0, 0.0, 5.0];
        assert_eq!(abs().apply_each(&xs), vec![3.0, 0.0, 0.0, 5.0]);
        assert_eq!(negate().apply_each(&xs), vec![3.0, 0.0, -0.0, -5.0]);

        let signs = signum().apply_each(&xs);
        assert_eq!(signs, vec![-1.0, 0.0, 0.0, 1.0]);
        assert!(signs[1].is_sign_negative());
        assert!(signum::<f64>().apply_one(&f64::NAN).is_nan());
    }

    #[test]
    fn powers_and_roots() {
        assert_eq!(square().apply_each(&[3.0, -4.0]), vec![9.0, 16.0]);
        assert_eq!(cube().apply_each(&[2.0, -3.0]), vec![8.0, -27.0]);
        assert_eq!(sqrt().apply_each(&[9.0_f32, 16.0]), vec![3.0, 4.0]);
        assert!(sqrt::<f64>().apply_one(&-1.0).is_nan());
    }

    #[test]
    fn exponentials() {
        assert_relative_eq!(exp().apply_one(&1.0), std::f64::consts::E);
        assert_relative_eq!(ln().apply_one(&std::f64::consts::E), 1.0);
        assert_eq!(ln::<f64>().apply_one(&0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn documented_unary_behavior() {
        assert_eq!(sqrt().apply_one(&2.25), 1.5);
        assert_eq!(floor().apply_one(&-0.5), -1.0);
        assert_eq!(ceiling().apply_one(&-0.5), -0.0);
        assert_eq!(exp().apply_one(&0.0), 1.0);
        assert!(abs::<f64>().apply_one(&-0.0).is_sign_positive());
        assert_eq!(square().apply_one(&-1.5), 2.25);
        assert_eq!(cube().apply_one(&-1.5), -3.375);
    }

    #[test]
    fn reciprocal_of_zero_is_infinite() {
        assert_eq!(reciprocal().apply_each(&[4.0, 0.0]), vec![0.25, f64::INFINITY]);
    }

    #[test]
    fn sum_of_sequences() {
        assert_eq!(sum().apply_one(&[1.0, 2.0, 3.5]), 6.5);
        assert_eq!(sum::<f64>().apply_one(&[]), 0.0);
    }

    #[test]
    fn can_add_in_every_shape() {
        let add = add();
        assert_eq!(add.scalar_scalar(&4.0, &5.0), 9.0);
        assert_eq!(add.scalar_vector(&5.0, &[3.0, 4.0, 5.0]), vec![8.0, 9.0, 10.0]);
        assert_eq!(
            add.vector_scalar(&[0.0, 2.0, 6.0, 9.0, 4.0], &9.0),
            vec![9.0, 11.0, 15.0, 18.0, 13.0]
        );
        assert_eq!(
            add.vector_vector(&[1.0, 2.0], &[10.0, 20.0]),
            Ok(vec![11.0, 22.0])
        );
    }

    #[test]
    fn subtract_and_divide_keep_operand_order() {
        assert_eq!(
            subtract().vector_scalar(&[0.0, 2.0, 6.0, 9.0, 4.0], &3.0),
            vec![-3.0, -1.0, 3.0, 6.0, 1.0]
        );
        assert_eq!(divide().vector_scalar(&[1.0, 3.0], &2.0), vec![0.5, 1.5]);
        assert_eq!(divide().scalar_vector(&1.0, &[2.0, 4.0]), vec![0.5, 0.25]);
        assert_eq!(divide().scalar_scalar(&1.0, &0.0), f64::INFINITY);
    }

    #[test]
    fn multiply_vectors() {
        assert_eq!(
            multiply().vector_vector(&[0.0, 2.0, 6.0, 9.0, 4.0], &[1.0, 2.0, 3.0, 4.0, 5.0]),
            Ok(vec![0.0, 4.0, 18.0, 36.0, 20.0])
        );
        assert!(multiply::<f64>().vector_vector(&[0.0, 1.0, 2.0], &[10.0, 11.0]).is_err());
    }
}
