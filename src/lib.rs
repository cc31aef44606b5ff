//! Secret reconstruction from threshold shares, some of which may be corrupted
//!
//! The shares are points that presumably lie on a polynomial of degree
//! `k - 1`. [RobustRec] finds a sample of `k` shares whose interpolating
//! polynomial agrees with as many shares as possible and reports the
//! polynomial's value at zero together with the shares it disagrees with.
//! All arithmetic is exact.
//!
//! ```
//! use shamir_rec::{rec_from_shares, Share};
//!
//! let shares = [
//!     Share::new(1, 7),
//!     Share::new(2, 9),
//!     Share::new(3, 11),
//!     Share::new(4, 999),
//! ];
//! let rec = rec_from_shares(&shares, 2).unwrap();
//! assert_eq!(rec.secret().to_string(), "5");
//! assert_eq!(rec.outliers(), &[3]);
//! ```

/// Utilities for tests and benchmarks
#[doc(hidden)]
pub mod _test_util;
pub mod rand;
pub mod traits;

/// Exact rational numbers and polynomials
pub mod algebra;

/// Reconstruction algorithms
pub mod rec;

pub use algebra::rat::{DivisionByZero, Rat};
pub use rec::{
    report::{Reconstruction, ShareDiagnosis},
    robust::{rec_from_shares, FailedRec, Keys, RobustRec},
    share::{ParseShareError, Share},
};
pub use rug::Integer;
