/// Number of `k`-subsets of `n` elements, as far as it is relevant
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum SubsetCount {
    Exact(u64),
    /// The count is larger than the threshold it was compared to
    Exceeds,
}

/// Compute the binomial coefficient `n` choose `k`
///
/// Gives up as soon as the count exceeds `threshold`.
pub fn count_subsets(n: usize, k: usize, threshold: u64) -> SubsetCount {
    if k > n {
        return SubsetCount::Exact(0);
    }
    let offset = (n - k) as u64;
    let mut res: u64 = 1;
    for i in 1..=k as u64 {
        // res is now (n - k + i - 1) choose (i - 1), the division is exact
        res = match res.checked_mul(offset + i) {
            Some(prod) => prod / i,
            None => return SubsetCount::Exceeds,
        };
        if res > threshold {
            return SubsetCount::Exceeds;
        }
    }
    SubsetCount::Exact(res)
}

/// The lexicographically first `k`-subset
pub fn first_subset(k: usize) -> Vec<usize> {
    (0..k).collect()
}

/// The lexicographic successor of a sorted `k`-subset of `0..n`
///
/// Returns `None` if `subset` is the last subset.
pub fn next_subset(subset: &[usize], n: usize) -> Option<Vec<usize>> {
    let k = subset.len();
    if k > n {
        return None;
    }
    let pos = (0..k).rev().find(|&i| subset[i] < n - k + i)?;
    let mut next = subset.to_vec();
    next[pos] += 1;
    for i in pos + 1..k {
        next[i] = next[i - 1] + 1;
    }
    Some(next)
}

#[cfg(test)]
mod tests {
    use std::iter::successors;

    use super::*;

    #[test]
    fn binomial() {
        const T: u64 = 2000;
        assert_eq!(count_subsets(4, 2, T), SubsetCount::Exact(6));
        assert_eq!(count_subsets(10, 0, T), SubsetCount::Exact(1));
        assert_eq!(count_subsets(10, 10, T), SubsetCount::Exact(1));
        assert_eq!(count_subsets(3, 4, T), SubsetCount::Exact(0));
        assert_eq!(count_subsets(20, 5, T), SubsetCount::Exceeds);
        assert_eq!(count_subsets(200, 199, T), SubsetCount::Exact(200));
        assert_eq!(count_subsets(usize::MAX, 3, T), SubsetCount::Exceeds);
    }

    #[test]
    fn binomial_threshold_inclusive() {
        // 6 choose 3 = 20, 7 choose 3 = 35
        assert_eq!(count_subsets(6, 3, 20), SubsetCount::Exact(20));
        assert_eq!(count_subsets(7, 3, 20), SubsetCount::Exceeds);
        assert_eq!(count_subsets(7, 3, 35), SubsetCount::Exact(35));
    }

    #[test]
    fn successor() {
        assert_eq!(next_subset(&[0, 1], 4), Some(vec![0, 2]));
        assert_eq!(next_subset(&[0, 3], 4), Some(vec![1, 2]));
        assert_eq!(next_subset(&[1, 2, 3], 4), None);
        assert_eq!(next_subset(&[], 4), None);
        assert_eq!(next_subset(&[0, 1, 2], 2), None);
    }

    #[test]
    fn enumerate_all() {
        for n in 0..8 {
            for k in 0..=n {
                let all: Vec<_> =
                    successors(Some(first_subset(k)), |s| next_subset(s, n))
                        .collect();
                assert_eq!(count_subsets(n, k, u64::MAX), SubsetCount::Exact(all.len() as u64));
                assert!(all.windows(2).all(|w| w[0] < w[1]));
                assert!(all.iter().all(|s| s.windows(2).all(|w| w[0] < w[1])));
            }
        }
    }
}
