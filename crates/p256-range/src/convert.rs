//! Conversions between 32-byte strings and [Limbs].
//!
//! The `limbs_*` functions do not validate; pair them with the range checks.
use subtle::Choice;
use zeroize::Zeroizing;

use crate::error::{Field, RangeError, Result};
use crate::limbs::{Limbs, LIMBS};

/// Reads a big-endian 32-byte integer, the byte order used by SEC1 and ECDSA.
pub const fn limbs_from_be_bytes(bytes: &[u8; 32]) -> Limbs {
    let mut limbs = [0u32; LIMBS];
    let mut i = 0;
    while i < LIMBS {
        let j = 4 * (LIMBS - 1 - i);
        limbs[i] = u32::from_be_bytes([bytes[j], bytes[j + 1], bytes[j + 2], bytes[j + 3]]);
        i += 1;
    }
    limbs
}

pub const fn limbs_to_be_bytes(limbs: &Limbs) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    let mut i = 0;
    while i < LIMBS {
        let w = limbs[i].to_be_bytes();
        let j = 4 * (LIMBS - 1 - i);
        bytes[j] = w[0];
        bytes[j + 1] = w[1];
        bytes[j + 2] = w[2];
        bytes[j + 3] = w[3];
        i += 1;
    }
    bytes
}

/// Reads a little-endian 32-byte integer.
pub const fn limbs_from_le_bytes(bytes: &[u8; 32]) -> Limbs {
    let mut limbs = [0u32; LIMBS];
    let mut i = 0;
    while i < LIMBS {
        let j = 4 * i;
        limbs[i] = u32::from_le_bytes([bytes[j], bytes[j + 1], bytes[j + 2], bytes[j + 3]]);
        i += 1;
    }
    limbs
}

pub const fn limbs_to_le_bytes(limbs: &Limbs) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    let mut i = 0;
    while i < LIMBS {
        let w = limbs[i].to_le_bytes();
        let j = 4 * i;
        bytes[j] = w[0];
        bytes[j + 1] = w[1];
        bytes[j + 2] = w[2];
        bytes[j + 3] = w[3];
        i += 1;
    }
    bytes
}

/// Copies `bytes` into a fixed size array, rejecting any other length.
pub(crate) fn fixed_bytes<const L: usize>(bytes: &[u8]) -> Result<[u8; L]> {
    bytes.try_into().map_err(|_| {
        trace!(expected = L, actual = bytes.len(), "Rejected input of wrong length");
        RangeError::InvalidLength {
            expected: L,
            actual: bytes.len(),
        }
    })
}

/// Decodes two concatenated big-endian integers and range checks both.
///
/// Both halves are always checked and the outcomes are combined before the single
/// branch, so the time taken does not reveal which half was rejected. Scratch
/// copies are wiped before returning.
pub(crate) fn decode_be_pair(
    bytes: &[u8],
    check: fn(&Limbs) -> Choice,
    field: Field,
) -> Result<(Limbs, Limbs)> {
    let bytes: Zeroizing<[u8; 64]> = Zeroizing::new(fixed_bytes(bytes)?);

    let mut first = Zeroizing::new([0u8; 32]);
    let mut second = Zeroizing::new([0u8; 32]);
    first.copy_from_slice(&bytes[..32]);
    second.copy_from_slice(&bytes[32..]);

    let first = Zeroizing::new(limbs_from_be_bytes(&first));
    let second = Zeroizing::new(limbs_from_be_bytes(&second));

    let valid = check(&first) & check(&second);
    if bool::from(valid) {
        Ok((*first, *second))
    } else {
        trace!(%field, "Rejected pair outside the field");
        Err(RangeError::OutOfRange(field))
    }
}
