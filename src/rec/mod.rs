/// Search for the sample with the most inliers
pub mod search;
/// Lagrange interpolation in exact rational arithmetic
pub mod lagrange;
/// Consistency test of candidate samples
pub mod consistency;
/// Reconstruction results
pub mod report;
/// Robust secret reconstruction
pub mod robust;
/// Shares, aka points on the secret polynomial
pub mod share;
/// Enumeration of index subsets
pub mod subsets;
