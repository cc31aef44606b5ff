/// Polynomials
pub mod poly;
/// Exact rational numbers
pub mod rat;
