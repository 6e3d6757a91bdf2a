mod atop;
mod commutative;
mod inverse;


use std::marker::PhantomData;

use crate::{LengthError, Monadic};

pub use atop::Atop;
pub use commutative::{Commutative, commutative};
pub use inverse::{FromInverse, from_inverse};

/// A binary operator broadcast across scalar and sequence arguments.
///
/// Only [`scalar_scalar()`] is required. The three sequence shapes are
/// derived from it:
///
/// | Method             | Left       | Right      | Result                        |
/// |--------------------|------------|------------|-------------------------------|
/// | `scalar_scalar`    | `l`        | `r`        | `f(l, r)`                     |
/// | `scalar_vector`    | `l`        | `[r₀ ..]`  | `[f(l, r₀) ..]`               |
/// | `vector_scalar`    | `[l₀ ..]`  | `r`        | `[f(l₀, r) ..]`               |
/// | `vector_vector`    | `[l₀ ..]`  | `[r₀ ..]`  | `[f(l₀, r₀) ..]` or an error  |
///
/// Operand order is always preserved: the left argument is passed as the
/// operator's left operand in every shape. Implementors may override the
/// sequence shapes (see [`Commutative`] and [`FromInverse`]) but must keep
/// them consistent with `scalar_scalar`.
///
/// `Left` and `Right` may be unsized so that a whole sequence can be a single
/// operand, as in `take(n, xs)`. A shape that would need a sequence of an
/// unsized operand is simply unavailable for that dyad.
///
/// [`scalar_scalar()`]: Dyadic::scalar_scalar
pub trait Dyadic {
    type Left: ?Sized;
    type Right: ?Sized;
    type Output;

    /// Applies the operator to one left and one right value.
    fn scalar_scalar(&self, left: &Self::Left, right: &Self::Right) -> Self::Output;

    /// Broadcasts `left` against every element of `right`.
    fn scalar_vector(&self, left: &Self::Left, right: &[Self::Right]) -> Vec<Self::Output>
    where
        Self::Right: Sized,
    {
        right.iter().map(|r| self.scalar_scalar(left, r)).collect()
    }

    /// Broadcasts `right` against every element of `left`.
    fn vector_scalar(&self, left: &[Self::Left], right: &Self::Right) -> Vec<Self::Output>
    where
        Self::Left: Sized,
    {
        left.iter().map(|l| self.scalar_scalar(l, right)).collect()
    }

    /// Applies the operator pairwise to two sequences.
    ///
    /// # Errors
    ///
    /// Returns a [`LengthError`] if `left` and `right` differ in length.
    fn vector_vector(
        &self,
        left: &[Self::Left],
        right: &[Self::Right],
    ) -> Result<Vec<Self::Output>, LengthError>
    where
        Self::Left: Sized,
        Self::Right: Sized,
    {
        LengthError::check(left.len(), right.len())?;
        Ok(left
            .iter()
            .zip(right)
            .map(|(l, r)| self.scalar_scalar(l, r))
            .collect())
    }

    /// Applies a monad to every result this dyad produces.
    ///
    /// # Example
    ///
    /// ```
    /// use tacit_core::{Dyadic, Monadic, dyad, monad};
    ///
    /// let add = dyad(|l: &f64, r: &f64| l + r);
    /// let sqrt = monad(|x: &f64| x.sqrt());
    ///
    /// let root_of_sum = add.then(sqrt);
    /// assert_eq!(root_of_sum.scalar_vector(&7.0, &[2.0, 9.0]), vec![3.0, 4.0]);
    /// ```
    fn then<M>(self, monad: M) -> Atop<Self, M>
    where
        Self: Sized,
        M: Monadic<Input = Self::Output>,
    {
        Atop::new(self, monad)
    }
}

impl<D> Dyadic for &D
where
    D: Dyadic + ?Sized,
{
    type Left = D::Left;
    type Right = D::Right;
    type Output = D::Output;

    fn scalar_scalar(&self, left: &Self::Left, right: &Self::Right) -> Self::Output {
        (**self).scalar_scalar(left, right)
    }

    fn scalar_vector(&self, left: &Self::Left, right: &[Self::Right]) -> Vec<Self::Output>
    where
        Self::Right: Sized,
    {
        (**self).scalar_vector(left, right)
    }

    fn vector_scalar(&self, left: &[Self::Left], right: &Self::Right) -> Vec<Self::Output>
    where
        Self::Left: Sized,
    {
        (**self).vector_scalar(left, right)
    }

    fn vector_vector(
        &self,
        left: &[Self::Left],
        right: &[Self::Right],
    ) -> Result<Vec<Self::Output>, LengthError>
    where
        Self::Left: Sized,
        Self::Right: Sized,
    {
        (**self).vector_vector(left, right)
    }
}

/// A [`Dyadic`] operator backed by a plain function or closure.
///
/// All four shapes call the wrapped operator directly, so no assumption is
/// made about commutativity or any other algebraic property.
pub struct Dyad<F, L: ?Sized, R: ?Sized, O> {
    operator: F,
    _marker: PhantomData<fn(&L, &R) -> O>,
}

impl<F, L, R, O> Dyad<F, L, R, O>
where
    F: Fn(&L, &R) -> O,
    L: ?Sized,
    R: ?Sized,
{
    /// Wraps a binary operator without inspecting it.
    pub fn from_operator(operator: F) -> Self {
        Self {
            operator,
            _marker: PhantomData,
        }
    }
}

impl<F, L, R, O> Dyadic for Dyad<F, L, R, O>
where
    F: Fn(&L, &R) -> O,
    L: ?Sized,
    R: ?Sized,
{
    type Left = L;
    type Right = R;
    type Output = O;

    fn scalar_scalar(&self, left: &L, right: &R) -> O {
        (self.operator)(left, right)
    }
}

impl<F: Clone, L: ?Sized, R: ?Sized, O> Clone for Dyad<F, L, R, O> {
    fn clone(&self) -> Self {
        Self {
            operator: self.operator.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F: Copy, L: ?Sized, R: ?Sized, O> Copy for Dyad<F, L, R, O> {}

/// Wraps a binary operator as a [`Dyad`].
///
/// Shorthand for [`Dyad::from_operator()`].
pub fn dyad<F, L, R, O>(operator: F) -> Dyad<F, L, R, O>
where
    F: Fn(&L, &R) -> O,
    L: ?Sized,
    R: ?Sized,
{
    Dyad::from_operator(operator)
}
