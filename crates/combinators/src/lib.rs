//! Ready-made combinators built on the `tacit-core` primitives.
//!
//! - [`numeric`] operators: scalar math as monads and dyads
//! - [`statistics`]: reductions over a sequence of numbers
//! - [`sequence`] manipulators: reverse, distinct, first/last, take/drop, join
//!
//! Every combinator is a constructor returning a `Copy` operator, so it can be
//! built once and reused or composed freely.
//!
//! ```
//! use tacit_combinators::{mean, take, variance};
//! use tacit_core::{Dyadic, Monadic};
//!
//! let xs = [3.0, 4.0, 5.0];
//! assert_eq!(mean().apply_one(&xs), 4.0);
//! assert_eq!(variance().apply_one(&[2.0, 2.0, 2.0]), 0.0);
//!
//! assert_eq!(take().scalar_scalar(&5, &[3, 4, 5]), Ok(vec![3, 4, 5, 3, 4]));
//! ```

mod error;
pub mod numeric;
pub mod sequence;
pub mod statistics;

pub use error::SequenceError;
pub use numeric::{
    abs, add, ceiling, cube, divide, exp, floor, ln, multiply, negate, reciprocal, signum,
    sqrt, square, subtract, sum,
};
pub use sequence::{behead, curtail, distinct, drop, enlist, first, join, last, reverse, take};
pub use statistics::{Moments, describe, mean, skewness, std_dev, variance};
