use rug::Integer;

use crate::{
    algebra::{
        poly::dense::DensePoly,
        rat::{DivisionByZero, Rat},
    },
    rec::share::Share,
    traits::{TryEval, Zero},
};

/// The unique polynomial of degree `k - 1` through a sample of `k` shares
///
/// The polynomial is never expanded for evaluation. Instead, each
/// evaluation sums the Lagrange basis terms in exact rational arithmetic.
/// Evaluation fails with [DivisionByZero] if two sample points share an
/// `x` coordinate.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Interpolant<'a> {
    sample: Vec<&'a Share>,
}

impl<'a> Interpolant<'a> {
    pub fn new(sample: Vec<&'a Share>) -> Self {
        Self { sample }
    }

    pub fn sample(&self) -> &[&'a Share] {
        &self.sample
    }

    pub fn len(&self) -> usize {
        self.sample.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sample.is_empty()
    }

    /// Expand the interpolating polynomial into its coefficients
    pub fn coefficients(&self) -> Result<DensePoly<Rat>, DivisionByZero> {
        let mut res = DensePoly::new();
        for (j, pt_j) in self.sample.iter().enumerate() {
            let mut basis = vec![Integer::from(1)];
            let mut den = Integer::from(1);
            for (m, pt_m) in self.sample.iter().enumerate() {
                if m == j {
                    continue;
                }
                basis = mul_linear(basis, &pt_m.x);
                den *= Integer::from(&pt_j.x - &pt_m.x);
            }
            let scale = Rat::from(pt_j.y.clone()).try_div(&Rat::from(den))?;
            let term: Vec<Rat> = basis.iter().map(|c| &scale * c).collect();
            res += &DensePoly::from_coeff(term);
        }
        Ok(res)
    }
}

impl<'a> TryEval<Integer> for Interpolant<'a> {
    type Output = Rat;
    type Error = DivisionByZero;

    fn try_eval(&self, x: &Integer) -> Result<Rat, DivisionByZero> {
        let mut res = Rat::zero();
        for (j, pt_j) in self.sample.iter().enumerate() {
            let mut num = Integer::from(1);
            let mut den = Integer::from(1);
            for (m, pt_m) in self.sample.iter().enumerate() {
                if m == j {
                    continue;
                }
                num *= Integer::from(x - &pt_m.x);
                den *= Integer::from(&pt_j.x - &pt_m.x);
            }
            let basis = Rat::from(num).try_div(&Rat::from(den))?;
            res += basis * &pt_j.y;
        }
        Ok(res)
    }
}

// multiply a polynomial given by its coefficients by (x - root)
fn mul_linear(coeff: Vec<Integer>, root: &Integer) -> Vec<Integer> {
    let mut res = vec![Integer::new(); coeff.len() + 1];
    for (pow, c) in coeff.into_iter().enumerate() {
        res[pow] -= Integer::from(&c * root);
        res[pow + 1] += c;
    }
    res
}
