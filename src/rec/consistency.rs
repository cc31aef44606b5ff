use std::collections::BTreeSet;

use log::trace;
use thiserror::Error;

use crate::{
    algebra::rat::DivisionByZero,
    rec::{lagrange::Interpolant, share::Share},
    traits::TryEval,
};

/// Reasons for discarding a candidate sample
#[derive(Copy, Clone, Debug, Error, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum InvalidCandidate {
    #[error("Candidate contains duplicate x coordinates")]
    Degenerate,
    #[error("Candidate index {0} is out of range")]
    OutOfRange(usize),
    #[error("Division by zero in interpolation")]
    DivisionByZero,
}

impl From<DivisionByZero> for InvalidCandidate {
    fn from(_: DivisionByZero) -> Self {
        Self::DivisionByZero
    }
}

/// Collect the shares with the given indices into an interpolant
///
/// Fails if the selected shares do not have pairwise distinct
/// x coordinates.
pub fn sample_from_indices<'a>(
    shares: &'a [Share],
    indices: &[usize],
) -> Result<Interpolant<'a>, InvalidCandidate> {
    let mut seen = BTreeSet::new();
    let mut sample = Vec::with_capacity(indices.len());
    for &idx in indices {
        let share = shares.get(idx).ok_or(InvalidCandidate::OutOfRange(idx))?;
        if !seen.insert(&share.x) {
            return Err(InvalidCandidate::Degenerate);
        }
        sample.push(share);
    }
    Ok(Interpolant::new(sample))
}

/// Test how many shares agree with the interpolant through a candidate sample
///
/// Returns the ascending indices of all shares lying exactly on the
/// interpolant, including the shares in the sample itself.
pub fn test_subset(
    shares: &[Share],
    indices: &[usize],
) -> Result<Vec<usize>, InvalidCandidate> {
    let interpolant = sample_from_indices(shares, indices)?;
    let mut inliers = Vec::new();
    for (idx, share) in shares.iter().enumerate() {
        let val = interpolant.try_eval(&share.x)?;
        if val.eq_int(&share.y) {
            inliers.push(idx);
        }
    }
    trace!("Candidate {indices:?} has {} inliers", inliers.len());
    Ok(inliers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shares() -> Vec<Share> {
        vec![
            Share::new(1, 7),
            Share::new(2, 9),
            Share::new(3, 11),
            Share::new(4, 999),
        ]
    }

    #[test]
    fn one_outlier() {
        let shares = shares();
        assert_eq!(test_subset(&shares, &[0, 1]), Ok(vec![0, 1, 2]));
        assert_eq!(test_subset(&shares, &[1, 2]), Ok(vec![0, 1, 2]));
        assert_eq!(test_subset(&shares, &[0, 3]), Ok(vec![0, 3]));
    }

    #[test]
    fn degenerate() {
        let mut shares = shares();
        shares.push(Share::new(2, 10));
        assert_eq!(test_subset(&shares, &[1, 4]), Err(InvalidCandidate::Degenerate));
        assert_eq!(test_subset(&shares, &[0, 7]), Err(InvalidCandidate::OutOfRange(7)));
        // duplicates outside the sample are simply outliers
        assert_eq!(test_subset(&shares, &[0, 1]), Ok(vec![0, 1, 2]));
    }
}
