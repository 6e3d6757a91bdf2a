use tacit_core::{Dyadic, dyad};

use crate::SequenceError;

/// Takes `n` elements from a sequence, wrapping around cyclically.
///
/// - `n ≥ 0`: the first `n` elements; element `i` of the result is
///   `xs[i mod len]`, so asking for more than `len` repeats from the start.
/// - `n < 0`: the last `|n|` elements, filled from the end backward and
///   wrapping around to the end of `xs` when `|n| > len`.
///
/// Taking zero elements always succeeds. Taking any other count from an empty
/// sequence returns [`SequenceError::Empty`].
///
/// # Example
///
/// ```
/// use tacit_combinators::take;
/// use tacit_core::Dyadic;
///
/// let take = take();
/// assert_eq!(take.scalar_scalar(&5, &[3, 4, 5]), Ok(vec![3, 4, 5, 3, 4]));
/// assert_eq!(take.scalar_scalar(&-2, &[3, 4, 5]), Ok(vec![4, 5]));
/// ```
pub fn take<T: Clone>()
-> impl Dyadic<Left = isize, Right = [T], Output = Result<Vec<T>, SequenceError>> + Copy {
    dyad(|count: &isize, xs: &[T]| take_cyclic(*count, xs))
}

/// Drops `n` elements from a sequence.
///
/// - `n = 0`: the sequence unchanged.
/// - `n > 0`: drops the first `n` elements.
/// - `n < 0`: drops the last `|n|` elements.
///
/// Dropping more elements than the sequence holds returns
/// [`SequenceError::OutOfBounds`].
pub fn drop<T: Clone>()
-> impl Dyadic<Left = isize, Right = [T], Output = Result<Vec<T>, SequenceError>> + Copy {
    dyad(|count: &isize, xs: &[T]| drop_from(*count, xs))
}

/// Concatenates two sequences, `a` first.
pub fn join<T: Clone>() -> impl Dyadic<Left = [T], Right = [T], Output = Vec<T>> + Copy {
    dyad(|a: &[T], b: &[T]| a.iter().chain(b).cloned().collect::<Vec<T>>())
}

fn take_cyclic<T: Clone>(count: isize, xs: &[T]) -> Result<Vec<T>, SequenceError> {
    let wanted = count.unsigned_abs();
    if wanted == 0 {
        return Ok(Vec::new());
    }

    let len = xs.len();
    if len == 0 {
        log::debug!("cannot take {count} elements from an empty sequence");
        return Err(SequenceError::Empty);
    }
    if wanted > len {
        log::trace!("take of {count} wraps around a sequence of {len}");
    }

    // Index of the first element taken. A negative take ends on the last
    // element, so it starts `wanted` places before the end, modulo `len`.
    let start = if count > 0 {
        0
    } else {
        (len - wanted % len) % len
    };

    Ok((0..wanted).map(|i| xs[(start + i) % len].clone()).collect())
}

fn drop_from<T: Clone>(count: isize, xs: &[T]) -> Result<Vec<T>, SequenceError> {
    let len = xs.len();
    let dropped = count.unsigned_abs();
    if dropped > len {
        log::debug!("cannot drop {count} elements from a sequence of {len}");
        return Err(SequenceError::OutOfBounds { count, len });
    }

    let kept = if count >= 0 {
        &xs[dropped..]
    } else {
        &xs[..len - dropped]
    };
    Ok(kept.to_vec())
}
