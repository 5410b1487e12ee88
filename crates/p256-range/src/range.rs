//! Range checks for the base and scalar fields.
//!
//! Both checks run the same comparator, only the modulus and the treatment of
//! zero differ.
use subtle::Choice;

use crate::cmp::compare_to_modulus;
use crate::constants::{N, P};
use crate::limbs::Limbs;

/// Checks that `a`, as little-endian integer, is a reduced element of the base field.
///
/// In other words, that it is in the range `0..=p-1`.
#[inline]
pub fn check_range_p_ct(a: &Limbs) -> Choice {
    compare_to_modulus(a, &P).is_less_than_modulus
}

/// Checks that `a`, as little-endian integer, is a reduced non-zero element of the
/// scalar field.
///
/// In other words, that it is in the range `1..=n-1`.
#[inline]
pub fn check_range_n_ct(a: &Limbs) -> Choice {
    let c = compare_to_modulus(a, &N);
    c.is_less_than_modulus & !c.is_zero
}

/// Boolean form of [check_range_p_ct].
pub fn check_range_p(a: &Limbs) -> bool {
    check_range_p_ct(a).into()
}

/// Boolean form of [check_range_n_ct].
pub fn check_range_n(a: &Limbs) -> bool {
    check_range_n_ct(a).into()
}
