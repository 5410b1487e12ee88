//! Constant-time range checks for the NIST P-256 base and scalar fields.
//!
//! Integers are 256-bit, held as eight little-endian 32-bit limbs. [check_range_p]
//! accepts `0..=p-1` and [check_range_n] accepts `1..=n-1`. Both run the same
//! branch-free comparator, so their control flow does not depend on the input.
//!
//! The typed wrappers ([Scalar], [BaseFieldElement], [Coordinates],
//! [SignatureScalars]) decode untrusted bytes and can only be built from values
//! that passed the matching check.
//!
//! The `std` feature (on by default) adds `std::error::Error` for [RangeError] and
//! `tracing` output on rejection. Without it the crate is `no_std` and needs no
//! allocator.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

/// `tracing::trace!` with the `std` feature, nothing otherwise.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "std")]
        tracing::trace!($($arg)*);
    };
}

pub mod cmp;

pub mod constants;
pub mod convert;

mod base;
mod coordinates;
mod error;
mod limbs;
mod range;
mod scalar;
mod signature;

pub use base::BaseFieldElement;
pub use coordinates::Coordinates;
pub use error::{Field, RangeError, Result};
pub use limbs::{Limbs, LIMBS};
pub use range::{check_range_n, check_range_n_ct, check_range_p, check_range_p_ct};
pub use scalar::Scalar;
pub use signature::SignatureScalars;
