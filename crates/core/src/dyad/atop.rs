use crate::{LengthError, Monadic};

use super::Dyadic;

/// A dyad followed by a monad applied to each of its results.
///
/// Created by [`Dyadic::then()`]. Every shape delegates to the same shape of
/// the inner dyad, so shape overrides are kept and length errors pass through
/// before the monad ever runs.
#[derive(Debug, Clone, Copy)]
pub struct Atop<D, M> {
    dyad: D,
    monad: M,
}

impl<D, M> Atop<D, M> {
    pub(crate) const fn new(dyad: D, monad: M) -> Self {
        Self { dyad, monad }
    }
}

impl<D, M> Dyadic for Atop<D, M>
where
    D: Dyadic,
    M: Monadic<Input = D::Output>,
{
    type Left = D::Left;
    type Right = D::Right;
    type Output = M::Output;

    fn scalar_scalar(&self, left: &Self::Left, right: &Self::Right) -> Self::Output {
        self.monad.apply_one(&self.dyad.scalar_scalar(left, right))
    }

    fn scalar_vector(&self, left: &Self::Left, right: &[Self::Right]) -> Vec<Self::Output>
    where
        Self::Right: Sized,
    {
        self.monad.apply_each(&self.dyad.scalar_vector(left, right))
    }

    fn vector_scalar(&self, left: &[Self::Left], right: &Self::Right) -> Vec<Self::Output>
    where
        Self::Left: Sized,
    {
        self.monad.apply_each(&self.dyad.vector_scalar(left, right))
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
        let results = self.dyad.vector_vector(left, right)?;
        Ok(self.monad.apply_each(&results))
    }
}
