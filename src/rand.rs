use std::collections::BTreeSet;

use rand::Rng;

/// Generator for distinct random indices below a fixed bound
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct UniqueRand {
    bound: usize,
    seen: BTreeSet<usize>,
}

impl UniqueRand {
    pub fn new(bound: usize) -> Self {
        Self {
            bound,
            seen: Default::default(),
        }
    }

    /// Draw an index that has not been drawn before
    ///
    /// Returns `None` once all indices below the bound are exhausted.
    pub fn try_gen(&mut self, mut rng: impl Rng) -> Option<usize> {
        if self.seen.len() >= self.bound {
            return None;
        }
        let mut res = rng.gen_range(0..self.bound);
        while !self.seen.insert(res) {
            res = rng.gen_range(0..self.bound);
        }
        Some(res)
    }

    /// All indices drawn so far, in ascending order
    pub fn into_sorted(self) -> Vec<usize> {
        self.seen.into_iter().collect()
    }
}

/// Draw `k` distinct indices below `n` by rejection sampling
///
/// The result is sorted in ascending order. Returns `None` if `k > n`.
pub fn draw_distinct(n: usize, k: usize, mut rng: impl Rng) -> Option<Vec<usize>> {
    if k > n {
        return None;
    }
    let mut uniq = UniqueRand::new(n);
    for _ in 0..k {
        uniq.try_gen(&mut rng)?;
    }
    Some(uniq.into_sorted())
}
