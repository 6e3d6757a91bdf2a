//! Core operator wrappers for tacit, array-style programming.
//!
//! This crate defines the two primitives everything else builds on:
//!
//! - [`Monadic`]: a unary scalar operator applied to one value or to every
//!   element of a sequence
//! - [`Dyadic`]: a binary scalar operator broadcast across the four
//!   scalar/sequence argument shapes
//!
//! Wrap a plain closure with [`monad()`] or [`dyad()`] to get an operator, or
//! derive new dyads with [`commutative()`] and [`from_inverse()`].
//!
//! # Example
//!
//! ```
//! use tacit_core::{Dyadic, dyad, from_inverse, monad};
//!
//! let add = dyad(|l: &i32, r: &i32| l + r);
//! let negate = monad(|x: &i32| -x);
//! let minus = from_inverse(add, negate);
//!
//! assert_eq!(add.vector_scalar(&[0, 2, 6, 9, 4], &9), vec![9, 11, 15, 18, 13]);
//! assert_eq!(minus.scalar_scalar(&4, &5), -1);
//! ```

mod dyad;
mod error;
mod monad;

pub use dyad::{Atop, Commutative, Dyad, Dyadic, FromInverse, commutative, dyad, from_inverse};
pub use error::LengthError;
pub use monad::{Monad, Monadic, Then, monad};
