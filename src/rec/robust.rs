use std::collections::BTreeSet;

use log::{debug, warn};
use thiserror::Error;

use crate::rec::{
    report::{report, Reconstruction},
    search::search,
    share::Share,
};

/// Default maximum number of subsets for exhaustive search
pub const DEFAULT_MAX_ENUMERATE: u64 = 2000;
/// Default number of random samples if exhaustive search is too expensive
pub const DEFAULT_TRIALS: usize = 3000;
/// Default seed for random sampling
pub const DEFAULT_SEED: u64 = 12345;

/// Declared share count and threshold of a sharing
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Keys {
    /// Total number of shares
    pub n: usize,
    /// Minimum number of shares needed for reconstruction
    pub k: usize,
}

/// Secret reconstruction in the presence of corrupted shares
///
/// Searches for the sample of `k` shares whose interpolating polynomial
/// agrees with the largest number of shares. If there are at most
/// `max_enumerate()` possible samples, all of them are tried. Otherwise,
/// `trials()` random samples are drawn from a generator seeded with
/// `seed()`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct RobustRec {
    max_enumerate: u64,
    trials: usize,
    seed: u64,
}

impl Default for RobustRec {
    fn default() -> Self {
        Self {
            max_enumerate: DEFAULT_MAX_ENUMERATE,
            trials: DEFAULT_TRIALS,
            seed: DEFAULT_SEED,
        }
    }
}

impl RobustRec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_enumerate(self, max_enumerate: u64) -> Self {
        Self {
            max_enumerate,
            ..self
        }
    }

    pub fn with_trials(self, trials: usize) -> Self {
        Self { trials, ..self }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }

    /// Maximum number of samples for exhaustive search
    pub fn max_enumerate(&self) -> u64 {
        self.max_enumerate
    }

    /// Number of random samples drawn if exhaustive search is too expensive
    pub fn trials(&self) -> usize {
        self.trials
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Reconstruct the secret from `shares` with threshold `k`
    pub fn rec(
        &self,
        shares: &[Share],
        k: usize,
    ) -> Result<Reconstruction, FailedRec> {
        if k == 0 {
            return Err(FailedRec::ZeroThreshold);
        }
        let distinct = shares.iter().map(|s| &s.x).collect::<BTreeSet<_>>().len();
        if distinct < k {
            return Err(FailedRec::InsufficientShares {
                have: distinct,
                need: k,
            });
        }
        let (best, strategy) = search(shares, k, self);
        debug!(
            "Best sample {:?} after {} trials: {} of {} shares agree",
            best.sample(),
            best.trials(),
            best.inliers().len(),
            shares.len()
        );
        report(shares, best, strategy)
    }

    /// Reconstruct the secret from `shares` with declared count and threshold
    ///
    /// A mismatch between the declared count and the number of shares
    /// is not an error. All shares are used.
    pub fn rec_with_keys(
        &self,
        shares: &[Share],
        keys: Keys,
    ) -> Result<Reconstruction, FailedRec> {
        if keys.n != shares.len() {
            warn!(
                "Expected {} shares, got {}. Using all {} shares.",
                keys.n,
                shares.len(),
                shares.len()
            );
        }
        self.rec(shares, keys.k)
    }
}

/// Reconstruct the secret with default settings
pub fn rec_from_shares(
    shares: &[Share],
    k: usize,
) -> Result<Reconstruction, FailedRec> {
    RobustRec::new().rec(shares, k)
}

#[derive(Error, Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FailedRec {
    #[error("Threshold has to be at least one")]
    ZeroThreshold,
    #[error("Need shares with at least {need} distinct x coordinates, got {have}")]
    InsufficientShares { have: usize, need: usize },
    #[error("Failed to find a consistent sample")]
    NoValidSample,
}

#[cfg(test)]
mod tests {
    use rand_xoshiro::rand_core::SeedableRng;
    use rug::Integer;

    use super::*;
    use crate::{
        _test_util::{corrupt, gen_poly, gen_shares},
        algebra::rat::Rat,
        rec::search::Strategy,
        traits::Eval,
    };

    fn log_init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn one_bad_share() {
        log_init();
        let shares = vec![
            Share::new(1, 7),
            Share::new(2, 9),
            Share::new(3, 11),
            Share::new(4, 999),
        ];
        let rec = rec_from_shares(&shares, 2).unwrap();
        assert_eq!(rec.secret(), &Rat::from(5));
        assert_eq!(rec.inliers(), &[0, 1, 2]);
        assert_eq!(rec.outliers(), &[3]);
        assert_eq!(rec.strategy(), Strategy::Exhaustive);
        assert_eq!(rec.trials(), 6);
    }

    #[test]
    fn all_consistent() {
        log_init();

        let mut rng = rand_xoshiro::Xoshiro256StarStar::seed_from_u64(1);
        for (degree, nshares) in [(0, 3), (1, 5), (3, 10), (5, 40)] {
            let poly = gen_poly(degree, &mut rng);
            let shares = gen_shares(&poly, nshares, &mut rng);
            let rec = rec_from_shares(&shares, degree + 1).unwrap();
            assert_eq!(rec.inliers().len(), nshares);
            assert!(rec.outliers().is_empty());
            assert_eq!(rec.poly(), &poly);
            assert_eq!(rec.secret(), &poly.eval(&Integer::new()));
            assert!(rec.secret().is_integer());
        }
    }

    #[test]
    fn many_bad_shares() {
        log_init();

        let mut rng = rand_xoshiro::Xoshiro256StarStar::seed_from_u64(3);
        let poly = gen_poly(3, &mut rng);
        let mut shares = gen_shares(&poly, 25, &mut rng);
        let bad = [0, 4, 5, 13, 24];
        for idx in bad {
            corrupt(&mut shares, idx, &mut rng);
        }
        let rec = rec_from_shares(&shares, 4).unwrap();
        assert_eq!(rec.strategy(), Strategy::Randomized);
        assert_eq!(rec.trials(), DEFAULT_TRIALS as u64);
        assert_eq!(rec.outliers(), &bad);
        assert_eq!(rec.poly(), &poly);

        let again = rec_from_shares(&shares, 4).unwrap();
        assert_eq!(rec, again);
    }

    #[test]
    fn insufficient() {
        log_init();
        let shares = vec![Share::new(1, 7), Share::new(2, 9)];
        assert_eq!(
            rec_from_shares(&shares, 3),
            Err(FailedRec::InsufficientShares { have: 2, need: 3 })
        );
        let shares = vec![Share::new(1, 7), Share::new(1, 9), Share::new(1, 3)];
        assert_eq!(
            rec_from_shares(&shares, 2),
            Err(FailedRec::InsufficientShares { have: 1, need: 2 })
        );
        assert_eq!(rec_from_shares(&shares, 0), Err(FailedRec::ZeroThreshold));
        assert_eq!(rec_from_shares(&[], 1), Err(FailedRec::InsufficientShares { have: 0, need: 1 }));
    }

    #[test]
    fn fractional_secret() {
        log_init();
        let shares = vec![Share::new(1, 1), Share::new(3, 2)];
        let rec = rec_from_shares(&shares, 2).unwrap();
        assert_eq!(rec.secret().to_string(), "1/2");
        assert_eq!(rec.secret_as_integer(), None);
    }

    #[test]
    fn declared_count() {
        log_init();
        let shares = vec![Share::new(1, 7), Share::new(2, 9), Share::new(3, 11)];
        let rec = RobustRec::new()
            .rec_with_keys(&shares, Keys { n: 4, k: 2 })
            .unwrap();
        assert_eq!(rec.nshares(), 3);
        assert_eq!(rec.secret(), &Rat::from(5));
    }

    #[test]
    fn threshold_boundary() {
        log_init();
        let mut rng = rand_xoshiro::Xoshiro256StarStar::seed_from_u64(4);
        let poly = gen_poly(2, &mut rng);
        let shares = gen_shares(&poly, 7, &mut rng);
        // 6 choose 3 = 20, 7 choose 3 = 35
        let opts = RobustRec::new().with_max_enumerate(20).with_trials(100).with_seed(7);
        let rec = opts.rec(&shares[..6], 3).unwrap();
        assert_eq!(rec.strategy(), Strategy::Exhaustive);
        assert_eq!(rec.trials(), 20);
        let rec = opts.rec(&shares, 3).unwrap();
        assert_eq!(rec.strategy(), Strategy::Randomized);
        assert_eq!(rec.trials(), 100);
    }
}
