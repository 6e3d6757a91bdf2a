use crate::{LengthError, Monadic};

use super::Dyadic;

/// A dyad derived from another by transforming its right operand.
///
/// `FromInverse { inverse, operator }` evaluates `inverse(l, operator(r))`
/// in every shape, so subtraction can be built from addition and negation,
/// or division from multiplication and reciprocal.
///
/// The left operand is passed through untouched. Sequence shapes map the
/// right-hand sequence through `operator` and then delegate to the same shape
/// of `inverse`, keeping any shape overrides `inverse` provides.
#[derive(Debug, Clone, Copy)]
pub struct FromInverse<D, G> {
    inverse: D,
    operator: G,
}

impl<D, G> FromInverse<D, G>
where
    D: Dyadic<Right: Sized>,
    G: Monadic<Output = D::Right>,
{
    /// Derives a dyad from `inverse` and a right-operand transform.
    pub fn new(inverse: D, operator: G) -> Self {
        Self { inverse, operator }
    }
}

impl<D, G> Dyadic for FromInverse<D, G>
where
    D: Dyadic<Right: Sized>,
    G: Monadic<Output = D::Right>,
{
    type Left = D::Left;
    type Right = G::Input;
    type Output = D::Output;

    fn scalar_scalar(&self, left: &Self::Left, right: &Self::Right) -> Self::Output {
        self.inverse
            .scalar_scalar(left, &self.operator.apply_one(right))
    }

    fn scalar_vector(&self, left: &Self::Left, right: &[Self::Right]) -> Vec<Self::Output>
    where
        Self::Right: Sized,
    {
        self.inverse
            .scalar_vector(left, &self.operator.apply_each(right))
    }

    fn vector_scalar(&self, left: &[Self::Left], right: &Self::Right) -> Vec<Self::Output>
    where
        Self::Left: Sized,
    {
        self.inverse
            .vector_scalar(left, &self.operator.apply_one(right))
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
        LengthError::check(left.len(), right.len())?;
        self.inverse
            .vector_vector(left, &self.operator.apply_each(right))
    }
}

/// Derives a dyad computing `inverse(l, operator(r))` in every shape.
///
/// Shorthand for [`FromInverse::new()`].
pub fn from_inverse<D, G>(inverse: D, operator: G) -> FromInverse<D, G>
where
    D: Dyadic<Right: Sized>,
    G: Monadic<Output = D::Right>,
{
    FromInverse::new(inverse, operator)
}
