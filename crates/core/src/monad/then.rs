use super::Monadic;

/// A monad that applies two monads in sequence.
///
/// Created by [`Monadic::then()`]. The output of `first` becomes the input of
/// `second`, so `first.then(second)` reads left to right in the order the
/// operators run.
#[derive(Debug, Clone, Copy)]
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<A, B> Then<A, B> {
    pub(crate) const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Monadic for Then<A, B>
where
    A: Monadic,
    B: Monadic<Input = A::Output>,
{
    type Input = A::Input;
    type Output = B::Output;

    fn apply_one(&self, input: &Self::Input) -> Self::Output {
        let intermediate = self.first.apply_one(input);
        self.second.apply_one(&intermediate)
    }
}

#[cfg(test)]
mod tests {
    use crate::monad;

    use super::*;

    #[test]
    fn runs_first_then_second() {
        let add_one = monad(|x: &i32| x + 1);
        let double = monad(|x: &i32| x * 2);

        assert_eq!(add_one.then(double).apply_one(&3), 8);
        assert_eq!(double.then(add_one).apply_one(&3), 7);
    }

    #[test]
    fn chains_change_types() {
        let to_float = monad(|x: &i32| f64::from(*x));
        let halve = monad(|x: &f64| x / 2.0);
        let is_whole = monad(|x: &f64| x.fract() == 0.0);

        let chain = to_float.then(halve).then(is_whole);
        assert_eq!(chain.apply_each(&[1, 2, 3, 4]), vec![false, true, false, true]);
    }

    #[test]
    fn reduction_then_scalar() {
        let total = monad(|xs: &[i32]| xs.iter().sum::<i32>());
        let negate = monad(|x: &i32| -x);

        assert_eq!(total.then(negate).apply_one(&[1, 2, 3]), -6);
    }
}
