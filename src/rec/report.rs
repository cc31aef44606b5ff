use std::fmt::{self, Display};

use itertools::Itertools;
use log::warn;
use rug::Integer;

use crate::{
    algebra::{poly::dense::DensePoly, rat::Rat},
    rec::{
        consistency::sample_from_indices,
        robust::FailedRec,
        search::{Best, Strategy},
        share::Share,
    },
    traits::TryEval,
};

/// Comparison of a share with the reconstructed polynomial
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ShareDiagnosis {
    /// Position in the list of shares
    pub idx: usize,
    pub x: Integer,
    /// The supplied value
    pub y: Integer,
    /// The value of the reconstructed polynomial at `x`
    pub value: Rat,
    pub inlier: bool,
}

impl Display for ShareDiagnosis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let status = if self.inlier { "OK" } else { "BAD" };
        write!(
            f,
            "{:>3}: x = {}, y = {}, f(x) = {} -> {status}",
            self.idx, self.x, self.y, self.value
        )
    }
}

/// Result of a robust reconstruction
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Reconstruction {
    secret: Rat,
    poly: DensePoly<Rat>,
    sample: Vec<usize>,
    inliers: Vec<usize>,
    outliers: Vec<usize>,
    trials: u64,
    strategy: Strategy,
    table: Vec<ShareDiagnosis>,
}

impl Reconstruction {
    /// The reconstructed polynomial evaluated at zero
    pub fn secret(&self) -> &Rat {
        &self.secret
    }

    /// The secret, if it is an integer as it should be
    pub fn secret_as_integer(&self) -> Option<Integer> {
        self.secret.to_integer()
    }

    /// The reconstructed polynomial
    pub fn poly(&self) -> &DensePoly<Rat> {
        &self.poly
    }

    /// Indices of the shares the polynomial was interpolated from
    pub fn sample(&self) -> &[usize] {
        &self.sample
    }

    pub fn inliers(&self) -> &[usize] {
        &self.inliers
    }

    /// Indices of the shares that are inconsistent with the reconstruction
    pub fn outliers(&self) -> &[usize] {
        &self.outliers
    }

    /// Number of tested candidate samples
    pub fn trials(&self) -> u64 {
        self.trials
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn table(&self) -> &[ShareDiagnosis] {
        &self.table
    }

    pub fn nshares(&self) -> usize {
        self.table.len()
    }
}

impl Display for Reconstruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Reconstructed secret f(0) = {}", self.secret)?;
        writeln!(f, "Polynomial: {}", self.poly)?;
        writeln!(f, "Sample: [{}]", self.sample.iter().format(", "))?;
        writeln!(f, "Inliers: {} / {}", self.inliers.len(), self.nshares())?;
        writeln!(f, "Inlier indices: [{}]", self.inliers.iter().format(", "))?;
        writeln!(f, "Outliers: [{}]", self.outliers.iter().format(", "))?;
        writeln!(f, "Trials ({}): {}", self.strategy, self.trials)?;
        for row in &self.table {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Recompute the polynomial through the best sample and diagnose all shares
pub fn report(
    shares: &[Share],
    best: Best,
    strategy: Strategy,
) -> Result<Reconstruction, FailedRec> {
    if best.is_empty() {
        return Err(FailedRec::NoValidSample);
    }
    let interpolant = sample_from_indices(shares, best.sample())
        .map_err(|_| FailedRec::NoValidSample)?;
    let secret = interpolant
        .try_eval(&Integer::new())
        .map_err(|_| FailedRec::NoValidSample)?;
    if !secret.is_integer() {
        warn!("Reconstructed secret {secret} is not an integer");
    }
    let poly = interpolant
        .coefficients()
        .map_err(|_| FailedRec::NoValidSample)?;

    let mut table = Vec::with_capacity(shares.len());
    for (idx, share) in shares.iter().enumerate() {
        let value = interpolant
            .try_eval(&share.x)
            .map_err(|_| FailedRec::NoValidSample)?;
        let inlier = value.eq_int(&share.y);
        table.push(ShareDiagnosis {
            idx,
            x: share.x.clone(),
            y: share.y.clone(),
            value,
            inlier,
        });
    }
    let (inliers, outliers): (Vec<_>, Vec<_>) =
        table.iter().map(|row| row.idx).partition(|&idx| table[idx].inlier);
    Ok(Reconstruction {
        secret,
        poly,
        sample: best.sample().to_vec(),
        inliers,
        outliers,
        trials: best.trials(),
        strategy,
        table,
    })
}
