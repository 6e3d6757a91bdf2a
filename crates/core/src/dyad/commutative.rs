use std::marker::PhantomData;

use super::Dyadic;

/// A dyad whose operator is assumed to satisfy `f(a, b) == f(b, a)`.
///
/// `vector_scalar(ls, r)` is answered by `scalar_vector(r, ls)`, which
/// evaluates `f(r, lᵢ)` rather than `f(lᵢ, r)`. The assumption is never
/// checked. Passing a non-commutative operator here silently swaps operand
/// order in that one shape; use [`Dyad`](super::Dyad) for such operators.
pub struct Commutative<F, T, O> {
    operator: F,
    _marker: PhantomData<fn(&T, &T) -> O>,
}

impl<F, T, O> Commutative<F, T, O>
where
    F: Fn(&T, &T) -> O,
{
    /// Wraps an operator the caller guarantees to be commutative.
    pub fn from_operator(operator: F) -> Self {
        Self {
            operator,
            _marker: PhantomData,
        }
    }
}

impl<F, T, O> Dyadic for Commutative<F, T, O>
where
    F: Fn(&T, &T) -> O,
{
    type Left = T;
    type Right = T;
    type Output = O;

    fn scalar_scalar(&self, left: &T, right: &T) -> O {
        (self.operator)(left, right)
    }

    fn vector_scalar(&self, left: &[T], right: &T) -> Vec<O> {
        self.scalar_vector(right, left)
    }
}

impl<F: Clone, T, O> Clone for Commutative<F, T, O> {
    fn clone(&self) -> Self {
        Self {
            operator: self.operator.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F: Copy, T, O> Copy for Commutative<F, T, O> {}

/// Wraps an operator the caller guarantees to be commutative.
///
/// Shorthand for [`Commutative::from_operator()`].
pub fn commutative<F, T, O>(operator: F) -> Commutative<F, T, O>
where
    F: Fn(&T, &T) -> O,
{
    Commutative::from_operator(operator)
}
