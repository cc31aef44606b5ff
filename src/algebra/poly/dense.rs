use std::{
    fmt::{self, Display},
    ops::AddAssign,
};

use itertools::Itertools;
use rug::Integer;

use crate::{
    algebra::rat::Rat,
    traits::{Eval, One, Zero},
};

/// Univariate polynomial stored as a list of coefficients,
/// lowest power first
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DensePoly<T> {
    coeff: Vec<T>,
}

impl<T> DensePoly<T> {
    pub fn new() -> Self {
        Self { coeff: Vec::new() }
    }

    pub fn coeff(&self) -> &[T] {
        &self.coeff
    }

    pub fn into_coeff(self) -> Vec<T> {
        self.coeff
    }

    pub fn degree(&self) -> Option<usize> {
        if self.coeff.is_empty() {
            None
        } else {
            Some(self.coeff.len() - 1)
        }
    }
}

impl<T: Zero> DensePoly<T> {
    pub fn from_coeff(coeff: Vec<T>) -> Self {
        let mut res = Self { coeff };
        res.delete_trailing_zeroes();
        res
    }

    pub fn from_coeff_unchecked(coeff: Vec<T>) -> Self {
        debug_assert!(!matches!(coeff.last(), Some(c) if c.is_zero()));
        Self { coeff }
    }

    pub fn nterms(&self) -> usize {
        self.coeff.iter().filter(|c| !c.is_zero()).count()
    }

    fn delete_trailing_zeroes(&mut self) {
        let last_nonzero = self
            .coeff
            .iter()
            .rposition(|c| !c.is_zero())
            .map(|pos| pos + 1)
            .unwrap_or_default();
        self.coeff.truncate(last_nonzero);
    }
}

impl<T: Zero> Zero for DensePoly<T> {
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        self.coeff.is_empty()
    }
}

impl<T: Zero> AddAssign<&DensePoly<T>> for DensePoly<T>
where
    for<'a> T: AddAssign<&'a T>,
{
    fn add_assign(&mut self, rhs: &Self) {
        if self.coeff.len() < rhs.coeff.len() {
            self.coeff.resize_with(rhs.coeff.len(), || T::zero())
        }
        for (lhs, rhs) in self.coeff.iter_mut().zip(rhs.coeff.iter()) {
            *lhs += rhs;
        }
        self.delete_trailing_zeroes()
    }
}

impl Eval<Integer> for DensePoly<Rat> {
    type Output = Rat;

    fn eval(&self, x: &Integer) -> Rat {
        self.coeff
            .iter()
            .rev()
            .fold(Rat::zero(), |acc, c| acc * x + c)
    }
}

impl<T: Display + One + Zero> Display for DensePoly<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.coeff.is_empty() {
            return write!(f, "0");
        }
        let terms = self
            .coeff
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .map(|(pow, c)| match pow {
                0 => format!("{c}"),
                1 if c.is_one() => "x".to_owned(),
                1 => format!("{c}*x"),
                _ if c.is_one() => format!("x^{pow}"),
                _ => format!("{c}*x^{pow}"),
            });
        write!(f, "{}", terms.format(" + "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rat(num: i64, den: i64) -> Rat {
        Rat::try_new(num, den).unwrap()
    }

    #[test]
    fn trailing_zeroes() {
        let poly = DensePoly::from_coeff(vec![rat(1, 1), Rat::zero(), Rat::zero()]);
        assert_eq!(poly.degree(), Some(0));
        assert_eq!(poly.nterms(), 1);

        let zero = DensePoly::from_coeff(vec![Rat::zero()]);
        assert!(zero.is_zero());
        assert_eq!(zero.degree(), None);
        assert_eq!(zero.to_string(), "0");
    }

    #[test]
    fn eval_horner() {
        // 1/2 - 3x + x^2
        let poly = DensePoly::from_coeff(vec![rat(1, 2), rat(-3, 1), rat(1, 1)]);
        assert_eq!(poly.eval(&Integer::from(0)), rat(1, 2));
        assert_eq!(poly.eval(&Integer::from(2)), rat(-3, 2));
        assert_eq!(poly.eval(&Integer::from(-1)), rat(9, 2));
        assert_eq!(poly.to_string(), "1/2 + -3*x + x^2");
    }

    #[test]
    fn add_assign() {
        let mut lhs = DensePoly::from_coeff(vec![rat(1, 1), rat(2, 1)]);
        let rhs = DensePoly::from_coeff(vec![rat(1, 1), rat(-2, 1), rat(1, 3)]);
        lhs += &rhs;
        assert_eq!(lhs.coeff(), &[rat(2, 1), Rat::zero(), rat(1, 3)]);

        let mut lhs = DensePoly::from_coeff(vec![rat(1, 1), rat(2, 1)]);
        let rhs = DensePoly::from_coeff(vec![Rat::zero(), rat(-2, 1)]);
        lhs += &rhs;
        assert_eq!(lhs.degree(), Some(0));
    }
}
