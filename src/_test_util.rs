use rand::{seq::index, Rng};
use rug::Integer;

use crate::{
    algebra::{poly::dense::DensePoly, rat::Rat},
    rec::share::Share,
    traits::{Eval, Zero},
};

const MAX_COEFF: i64 = 1 << 20;
const MAX_X: usize = 1000;

// generate a random polynomial of the given degree with integer coefficients
pub fn gen_poly(degree: usize, mut rng: impl Rng) -> DensePoly<Rat> {
    let mut coeff: Vec<_> = (0..=degree)
        .map(|_| Rat::from(rng.gen_range(-MAX_COEFF..=MAX_COEFF)))
        .collect();
    if let Some(last) = coeff.last_mut() {
        while last.is_zero() {
            *last = Rat::from(rng.gen_range(-MAX_COEFF..=MAX_COEFF));
        }
    }
    DensePoly::from_coeff(coeff)
}

// generate shares with pairwise distinct nonzero x coordinates
pub fn gen_shares(
    poly: &DensePoly<Rat>,
    nshares: usize,
    mut rng: impl Rng,
) -> Vec<Share> {
    index::sample(&mut rng, MAX_X, nshares)
        .into_iter()
        .map(|x| {
            let x = Integer::from(x + 1);
            let y = poly.eval(&x).into_num_den().0;
            Share { x, y }
        })
        .collect()
}

// replace the value of the share at `idx` by a different one
pub fn corrupt(shares: &mut [Share], idx: usize, mut rng: impl Rng) {
    let shift = rng.gen_range(1..=MAX_COEFF);
    shares[idx].y += shift;
}
