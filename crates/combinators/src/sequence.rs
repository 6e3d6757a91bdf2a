//! Sequence manipulators, generic over the element type.
//!
//! Sequences are borrowed as slices and never modified; every manipulator
//! returns a new `Vec`. Manipulators that need at least one element return
//! [`SequenceError::Empty`] instead of panicking.

mod indexed;

use tacit_core::{Monadic, monad};

use crate::SequenceError;

pub use indexed::{drop, join, take};

/// Reverses a sequence.
pub fn reverse<T: Clone>() -> impl Monadic<Input = [T], Output = Vec<T>> + Copy {
    monad(|xs: &[T]| xs.iter().rev().cloned().collect::<Vec<T>>())
}

/// Keeps the first occurrence of each value, preserving order.
///
/// Values are compared with `PartialEq`, so for floats `NaN` is never
/// considered a repeat.
pub fn distinct<T: Clone + PartialEq>() -> impl Monadic<Input = [T], Output = Vec<T>> + Copy {
    monad(|xs: &[T]| {
        let mut seen: Vec<T> = Vec::with_capacity(xs.len());
        for x in xs {
            if !seen.contains(x) {
                seen.push(x.clone());
            }
        }
        seen
    })
}

/// The element at index `0`.
pub fn first<T: Clone>() -> impl Monadic<Input = [T], Output = Result<T, SequenceError>> + Copy {
    monad(|xs: &[T]| xs.first().cloned().ok_or(SequenceError::Empty))
}

/// The element at index `n - 1`.
pub fn last<T: Clone>() -> impl Monadic<Input = [T], Output = Result<T, SequenceError>> + Copy {
    monad(|xs: &[T]| xs.last().cloned().ok_or(SequenceError::Empty))
}

/// Everything except the first element.
pub fn behead<T: Clone>()
-> impl Monadic<Input = [T], Output = Result<Vec<T>, SequenceError>> + Copy {
    monad(|xs: &[T]| {
        xs.split_first()
            .map(|(_, rest)| rest.to_vec())
            .ok_or(SequenceError::Empty)
    })
}

/// Everything except the last element.
pub fn curtail<T: Clone>()
-> impl Monadic<Input = [T], Output = Result<Vec<T>, SequenceError>> + Copy {
    monad(|xs: &[T]| {
        xs.split_last()
            .map(|(_, rest)| rest.to_vec())
            .ok_or(SequenceError::Empty)
    })
}

/// Wraps a single value in a one-element sequence.
pub fn enlist<T: Clone>() -> impl Monadic<Input = T, Output = Vec<T>> + Copy {
    monad(|x: &T| vec![x.clone()])
}
