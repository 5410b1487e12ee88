//! Constant-time comparison against a modulus.
use subtle::Choice;

use crate::limbs::{is_zero_word, sbb, Limbs};

/// Outcome of comparing a 256-bit integer against a modulus.
///
/// Both flags are computed on every call, whether or not the caller reads them.
#[derive(Clone, Copy, Debug)]
pub struct Comparison {
    /// Set iff the integer is strictly below the modulus.
    pub is_less_than_modulus: Choice,
    /// Set iff every limb of the integer is zero.
    pub is_zero: Choice,
}

/// Compares `a` against `modulus` in constant time.
///
/// Runs the borrow chain of `a - modulus` through all limbs and keeps only the
/// final borrow, which is set exactly when `a < modulus`. The limbs are OR-folded
/// alongside for the zero test. There is no data dependent branch or early exit,
/// and both flags leave through [Choice], whose constructor is an optimization
/// barrier.
#[inline]
pub fn compare_to_modulus(a: &Limbs, modulus: &Limbs) -> Comparison {
    let mut borrow = 0u32;
    let mut acc = 0u32;
    for (&limb, &m) in a.iter().zip(modulus.iter()) {
        let (_, b) = sbb(limb, m, borrow);
        borrow = b;
        acc |= limb;
    }

    Comparison {
        is_less_than_modulus: Choice::from(borrow as u8),
        is_zero: Choice::from(is_zero_word(acc) as u8),
    }
}
