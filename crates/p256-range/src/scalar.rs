use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::convert::{fixed_bytes, limbs_from_be_bytes, limbs_from_le_bytes, limbs_to_be_bytes};
use crate::error::{Field, RangeError, Result};
use crate::limbs::Limbs;
use crate::range::check_range_n;

/// A reduced non-zero element of the scalar field, i.e. an integer in `1..=n-1`.
///
/// Private keys and ECDSA signature components live here, so the value is wiped
/// on drop, compared in constant time and left out of [Debug] output. Decoding
/// wipes its byte copies and any rejected input as well.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Scalar(Limbs);

impl Scalar {
    /// Accepts little-endian limbs in the range `1..=n-1`.
    pub fn from_limbs(limbs: Limbs) -> Result<Self> {
        // Wrapped before the check so a rejected value is wiped when dropped.
        let candidate = Scalar(limbs);
        if check_range_n(&candidate.0) {
            Ok(candidate)
        } else {
            trace!("Rejected scalar outside 1..=n-1");
            Err(RangeError::OutOfRange(Field::Scalar))
        }
    }

    /// Verifies that there are 32 bytes that correspond to a big-endian integer in
    /// the range `1..=n-1`.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes: Zeroizing<[u8; 32]> = Zeroizing::new(fixed_bytes(bytes)?);
        Self::from_limbs(limbs_from_be_bytes(&bytes))
    }

    /// Little-endian counterpart of [Scalar::from_be_bytes].
    pub fn from_le_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes: Zeroizing<[u8; 32]> = Zeroizing::new(fixed_bytes(bytes)?);
        Self::from_limbs(limbs_from_le_bytes(&bytes))
    }

    /// Callers must have range checked `limbs` already.
    pub(crate) fn from_checked_limbs(limbs: Limbs) -> Self {
        Scalar(limbs)
    }

    /// Big-endian representation. The caller is responsible for keeping it secret.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        limbs_to_be_bytes(&self.0)
    }

    pub fn as_limbs(&self) -> &Limbs {
        &self.0
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}

impl core::fmt::Debug for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Scalar(..)")
    }
}
