use std::{
    fmt::{self, Display},
    iter::successors,
};

use log::{debug, trace};
use rand_xoshiro::{rand_core::SeedableRng, Xoshiro256StarStar};

use crate::{
    rand::draw_distinct,
    rec::{
        consistency::{test_subset, InvalidCandidate},
        robust::RobustRec,
        share::Share,
        subsets::{count_subsets, first_subset, next_subset, SubsetCount},
    },
};

/// How candidate samples were chosen
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Strategy {
    /// All subsets in lexicographic order
    Exhaustive,
    /// A fixed number of random subsets
    Randomized,
}

impl Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strategy::Exhaustive => write!(f, "exhaustive"),
            Strategy::Randomized => write!(f, "randomized"),
        }
    }
}

/// Best candidate sample found so far
///
/// A new candidate only replaces the current best one if it has strictly
/// more inliers, so the first candidate reaching the maximum wins.
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Best {
    sample: Vec<usize>,
    inliers: Vec<usize>,
    trials: u64,
}

impl Best {
    /// Indices of the shares in the best sample
    ///
    /// Empty if no valid candidate has been found.
    pub fn sample(&self) -> &[usize] {
        &self.sample
    }

    pub fn inliers(&self) -> &[usize] {
        &self.inliers
    }

    /// Number of tested candidates, including invalid ones
    pub fn trials(&self) -> u64 {
        self.trials
    }

    pub fn is_empty(&self) -> bool {
        self.sample.is_empty()
    }

    /// Account for a tested candidate
    pub fn with_candidate(
        mut self,
        candidate: &[usize],
        res: Result<Vec<usize>, InvalidCandidate>,
    ) -> Self {
        self.trials += 1;
        match res {
            Ok(inliers) if inliers.len() > self.inliers.len() => {
                debug!(
                    "New best sample {candidate:?} with {} inliers",
                    inliers.len()
                );
                self.sample = candidate.to_vec();
                self.inliers = inliers;
            }
            Ok(_) => {}
            Err(err) => trace!("Discarding candidate {candidate:?}: {err}"),
        }
        self
    }
}

/// Test all `k`-subsets of the shares in lexicographic order
///
/// At most `max_enumerate + 1` subsets are tested.
pub fn exhaustive_search(shares: &[Share], k: usize, max_enumerate: u64) -> Best {
    let n = shares.len();
    if k > n {
        return Best::default();
    }
    let limit = usize::try_from(max_enumerate.saturating_add(1))
        .unwrap_or(usize::MAX);
    successors(Some(first_subset(k)), |subset| next_subset(subset, n))
        .take(limit)
        .fold(Best::default(), |best, subset| {
            let res = test_subset(shares, &subset);
            best.with_candidate(&subset, res)
        })
}

/// Test `trials` random `k`-subsets of the shares
///
/// The subsets are drawn from a generator seeded with `seed`,
/// so the outcome is reproducible.
pub fn random_search(shares: &[Share], k: usize, trials: usize, seed: u64) -> Best {
    let n = shares.len();
    let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
    (0..trials)
        .map_while(|_| draw_distinct(n, k, &mut rng))
        .fold(Best::default(), |best, subset| {
            let res = test_subset(shares, &subset);
            best.with_candidate(&subset, res)
        })
}

/// Find the `k`-subset with the most inliers
///
/// Enumerates all subsets if there are at most `max_enumerate()` of them,
/// otherwise falls back to random sampling.
pub fn search(shares: &[Share], k: usize, opts: &RobustRec) -> (Best, Strategy) {
    let n = shares.len();
    match count_subsets(n, k, opts.max_enumerate()) {
        SubsetCount::Exact(count) => {
            debug!("Enumerating all {count} subsets of size {k} of {n} shares");
            let best = exhaustive_search(shares, k, opts.max_enumerate());
            (best, Strategy::Exhaustive)
        }
        SubsetCount::Exceeds => {
            debug!(
                "More than {} subsets of size {k} of {n} shares, sampling {} random subsets",
                opts.max_enumerate(),
                opts.trials()
            );
            let best = random_search(shares, k, opts.trials(), opts.seed());
            (best, Strategy::Randomized)
        }
    }
}
