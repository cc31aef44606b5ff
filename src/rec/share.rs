use std::fmt::{self, Display};

use rug::{integer::ParseIntegerError, Integer};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseShareError {
    #[error("Unsupported radix {0}, has to be between 2 and 36")]
    Radix(i32),
    #[error(transparent)]
    Value(#[from] ParseIntegerError),
}

/// A share, i.e. a point that presumably lies on the secret polynomial
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Share {
    /// Evaluation point
    pub x: Integer,
    /// Polynomial value at `x`
    pub y: Integer,
}

impl Share {
    pub fn new(x: impl Into<Integer>, y: impl Into<Integer>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Construct a share whose value is written in base `radix`
    ///
    /// `radix` has to be between 2 and 36
    pub fn from_radix(
        x: impl Into<Integer>,
        digits: &str,
        radix: i32,
    ) -> Result<Self, ParseShareError> {
        if !(2..=36).contains(&radix) {
            return Err(ParseShareError::Radix(radix));
        }
        let y = Integer::from_str_radix(digits.trim(), radix)?;
        Ok(Self { x: x.into(), y })
    }
}

impl Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
