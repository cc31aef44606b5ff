use std::{
    fmt::{self, Display},
    ops::{Add, AddAssign, Mul, Neg, Sub},
};

use rug::{Integer, Rational};
use thiserror::Error;

use crate::traits::{One, Zero};

/// Division by zero in exact rational arithmetic
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Error,
)]
#[error("Division by zero")]
pub struct DivisionByZero;

/// Exact rational number in canonical form
///
/// The denominator is always positive and coprime to the numerator,
/// so structural equality coincides with numerical equality.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Rat {
    num: Integer,
    den: Integer,
}

impl Rat {
    /// Construct `num / den` in canonical form
    pub fn try_new(
        num: impl Into<Integer>,
        den: impl Into<Integer>,
    ) -> Result<Self, DivisionByZero> {
        let den = den.into();
        if den == 0 {
            return Err(DivisionByZero);
        }
        Ok(Self::canonicalised(num.into(), den))
    }

    pub fn from_num_den_unchecked(num: Integer, den: Integer) -> Self {
        debug_assert!(den.is_positive());
        debug_assert_eq!(Integer::from(num.gcd_ref(&den)), 1);
        Self { num, den }
    }

    fn canonicalised(mut num: Integer, mut den: Integer) -> Self {
        debug_assert!(den != 0);
        if den.is_negative() {
            num = -num;
            den = -den;
        }
        let gcd = Integer::from(num.gcd_ref(&den));
        if gcd != 1 {
            num.div_exact_mut(&gcd);
            den.div_exact_mut(&gcd);
        }
        Self { num, den }
    }

    pub fn num(&self) -> &Integer {
        &self.num
    }

    pub fn den(&self) -> &Integer {
        &self.den
    }

    pub fn into_num_den(self) -> (Integer, Integer) {
        (self.num, self.den)
    }

    pub fn is_integer(&self) -> bool {
        self.den == 1
    }

    /// Check whether this number is exactly the integer `n`
    pub fn eq_int(&self, n: &Integer) -> bool {
        self.is_integer() && &self.num == n
    }

    /// The integer value, if the denominator is one
    pub fn to_integer(&self) -> Option<Integer> {
        self.is_integer().then(|| self.num.clone())
    }

    pub fn try_div(&self, rhs: &Rat) -> Result<Rat, DivisionByZero> {
        if rhs.is_zero() {
            return Err(DivisionByZero);
        }
        let num = Integer::from(&self.num * &rhs.den);
        let den = Integer::from(&self.den * &rhs.num);
        Ok(Self::canonicalised(num, den))
    }
}

impl Default for Rat {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Rat {
    fn zero() -> Self {
        Self {
            num: Integer::new(),
            den: Integer::from(1),
        }
    }

    fn is_zero(&self) -> bool {
        self.num == 0
    }
}

impl One for Rat {
    fn one() -> Self {
        Self {
            num: Integer::from(1),
            den: Integer::from(1),
        }
    }

    fn is_one(&self) -> bool {
        self.num == 1 && self.den == 1
    }
}

impl From<Integer> for Rat {
    fn from(num: Integer) -> Self {
        Self {
            num,
            den: Integer::from(1),
        }
    }
}

impl From<i64> for Rat {
    fn from(num: i64) -> Self {
        Integer::from(num).into()
    }
}

impl From<Rat> for Rational {
    fn from(rat: Rat) -> Self {
        Rational::from(rat.into_num_den())
    }
}

impl From<Rational> for Rat {
    fn from(source: Rational) -> Self {
        let (num, den) = source.into_numer_denom();
        Self::from_num_den_unchecked(num, den)
    }
}

impl<'a, 'b> Add<&'b Rat> for &'a Rat {
    type Output = Rat;

    fn add(self, rhs: &'b Rat) -> Self::Output {
        let mut num = Integer::from(&self.num * &rhs.den);
        num += Integer::from(&rhs.num * &self.den);
        Rat::canonicalised(num, Integer::from(&self.den * &rhs.den))
    }
}

impl<'a, 'b> Sub<&'b Rat> for &'a Rat {
    type Output = Rat;

    fn sub(self, rhs: &'b Rat) -> Self::Output {
        let mut num = Integer::from(&self.num * &rhs.den);
        num -= Integer::from(&rhs.num * &self.den);
        Rat::canonicalised(num, Integer::from(&self.den * &rhs.den))
    }
}

impl<'a, 'b> Mul<&'b Rat> for &'a Rat {
    type Output = Rat;

    fn mul(self, rhs: &'b Rat) -> Self::Output {
        let num = Integer::from(&self.num * &rhs.num);
        Rat::canonicalised(num, Integer::from(&self.den * &rhs.den))
    }
}

impl<'a, 'b> Mul<&'b Integer> for &'a Rat {
    type Output = Rat;

    fn mul(self, rhs: &'b Integer) -> Self::Output {
        let num = Integer::from(&self.num * rhs);
        Rat::canonicalised(num, self.den.clone())
    }
}

macro_rules! forward_owned_binop {
    ( $( $tr:ident, $op:ident, $rhs:ty ); * ) => {
        $(
            impl $tr<$rhs> for Rat {
                type Output = Rat;

                fn $op(self, rhs: $rhs) -> Self::Output {
                    (&self).$op(&rhs)
                }
            }

            impl<'b> $tr<&'b $rhs> for Rat {
                type Output = Rat;

                fn $op(self, rhs: &'b $rhs) -> Self::Output {
                    (&self).$op(rhs)
                }
            }
        )*
    };
}

forward_owned_binop!(Add, add, Rat; Sub, sub, Rat; Mul, mul, Rat; Mul, mul, Integer);

impl AddAssign<&Rat> for Rat {
    fn add_assign(&mut self, rhs: &Rat) {
        *self = &*self + rhs;
    }
}

impl AddAssign for Rat {
    fn add_assign(&mut self, rhs: Rat) {
        *self += &rhs;
    }
}

impl Neg for Rat {
    type Output = Rat;

    fn neg(self) -> Self::Output {
        Self {
            num: -self.num,
            den: self.den,
        }
    }
}

impl Display for Rat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}
