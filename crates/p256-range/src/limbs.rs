/// Number of 32-bit limbs in a 256-bit integer.
pub const LIMBS: usize = 8;

/// A 256-bit unsigned integer as little-endian 32-bit limbs.
///
/// Limb 0 holds the least significant 32 bits.
pub type Limbs = [u32; LIMBS];

/// Computes `(lo,hi) = a - b - borrow` where `hi` is the borrow.
///
/// The difference is taken in 64 bits so the borrow is the top bit of the wide
/// result, read with a shift instead of a comparison. `borrow` must be 0 or 1.
#[inline(always)]
pub const fn sbb(a: u32, b: u32, borrow: u32) -> (u32, u32) {
    let d = (a as u64).wrapping_sub(b as u64).wrapping_sub(borrow as u64);
    (d as u32, (d >> 63) as u32)
}

/// Returns 1 if `x` is zero and 0 otherwise.
///
/// For non-zero `x` either `x` or `-x` has its top bit set.
#[inline(always)]
pub const fn is_zero_word(x: u32) -> u32 {
    ((x | x.wrapping_neg()) >> 31) ^ 1
}
