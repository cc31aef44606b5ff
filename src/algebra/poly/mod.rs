/// Dense univariate polynomials
pub mod dense;
