mod then;

use std::marker::PhantomData;

pub use then::Then;

/// A unary operator that can be applied to one value or to a whole sequence.
///
/// Implementations must be pure: the same input always produces the same
/// output and no state is observed or modified. Only [`apply_one()`] is
/// required; element-wise application is derived from it.
///
/// `Input` may be unsized, so a monad can consume a whole sequence (`[T]`)
/// and reduce it to a single value, as the statistics combinators do.
///
/// [`apply_one()`]: Monadic::apply_one
pub trait Monadic {
    type Input: ?Sized;
    type Output;

    /// Applies the operator to a single value.
    fn apply_one(&self, input: &Self::Input) -> Self::Output;

    /// Applies the operator to every element of `inputs`.
    ///
    /// The result has the same length and order as `inputs`. The operator's
    /// own numeric behavior (`NaN`, infinity) is passed through unchanged.
    fn apply_each(&self, inputs: &[Self::Input]) -> Vec<Self::Output>
    where
        Self::Input: Sized,
    {
        inputs.iter().map(|input| self.apply_one(input)).collect()
    }

    /// Composes this monad with another, applying `self` first.
    ///
    /// # Example
    ///
    /// ```
    /// use tacit_core::{Monadic, monad};
    ///
    /// let square = monad(|x: &f64| x * x);
    /// let halve = monad(|x: &f64| x / 2.0);
    ///
    /// let half_square = square.then(halve);
    /// assert_eq!(half_square.apply_each(&[2.0, 4.0]), vec![2.0, 8.0]);
    /// ```
    fn then<Next>(self, next: Next) -> Then<Self, Next>
    where
        Self: Sized,
        Next: Monadic<Input = Self::Output>,
    {
        Then::new(self, next)
    }
}

impl<M> Monadic for &M
where
    M: Monadic + ?Sized,
{
    type Input = M::Input;
    type Output = M::Output;

    fn apply_one(&self, input: &Self::Input) -> Self::Output {
        (**self).apply_one(input)
    }

    fn apply_each(&self, inputs: &[Self::Input]) -> Vec<Self::Output>
    where
        Self::Input: Sized,
    {
        (**self).apply_each(inputs)
    }
}

/// A [`Monadic`] operator backed by a plain function or closure.
///
/// A `Monad` holds nothing but its operator. It is `Copy` whenever the
/// operator is, which includes every non-capturing closure.
pub struct Monad<F, I: ?Sized, O> {
    operator: F,
    _marker: PhantomData<fn(&I) -> O>,
}

impl<F, I, O> Monad<F, I, O>
where
    F: Fn(&I) -> O,
    I: ?Sized,
{
    /// Wraps a unary operator without inspecting it.
    pub fn from_operator(operator: F) -> Self {
        Self {
            operator,
            _marker: PhantomData,
        }
    }
}

impl<F, I, O> Monadic for Monad<F, I, O>
where
    F: Fn(&I) -> O,
    I: ?Sized,
{
    type Input = I;
    type Output = O;

    fn apply_one(&self, input: &I) -> O {
        (self.operator)(input)
    }
}

impl<F: Clone, I: ?Sized, O> Clone for Monad<F, I, O> {
    fn clone(&self) -> Self {
        Self {
            operator: self.operator.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F: Copy, I: ?Sized, O> Copy for Monad<F, I, O> {}

/// Wraps a unary operator as a [`Monad`].
///
/// Shorthand for [`Monad::from_operator()`].
pub fn monad<F, I, O>(operator: F) -> Monad<F, I, O>
where
    F: Fn(&I) -> O,
    I: ?Sized,
{
    Monad::from_operator(operator)
}
