use crate::convert::{fixed_bytes, limbs_from_be_bytes, limbs_from_le_bytes, limbs_to_be_bytes};
use crate::error::{Field, RangeError, Result};
use crate::limbs::Limbs;
use crate::range::check_range_p;

/// A reduced element of the base field, i.e. an integer in `0..=p-1`.
///
/// Only the range is guaranteed. Whether a pair of these lies on the curve is a
/// question for point arithmetic.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BaseFieldElement(Limbs);

impl BaseFieldElement {
    pub const ZERO: BaseFieldElement = BaseFieldElement([0; 8]);

    /// Accepts little-endian limbs in the range `0..=p-1`.
    pub fn from_limbs(limbs: Limbs) -> Result<Self> {
        if check_range_p(&limbs) {
            Ok(BaseFieldElement(limbs))
        } else {
            trace!("Rejected base field element outside 0..=p-1");
            Err(RangeError::OutOfRange(Field::Base))
        }
    }

    /// Verifies that there are 32 bytes that correspond to a big-endian integer in
    /// the range `0..=p-1`.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; 32] = fixed_bytes(bytes)?;
        Self::from_limbs(limbs_from_be_bytes(&bytes))
    }

    pub fn from_le_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; 32] = fixed_bytes(bytes)?;
        Self::from_limbs(limbs_from_le_bytes(&bytes))
    }

    /// Callers must have range checked `limbs` already.
    pub(crate) const fn from_checked_limbs(limbs: Limbs) -> Self {
        BaseFieldElement(limbs)
    }

    pub const fn to_be_bytes(&self) -> [u8; 32] {
        limbs_to_be_bytes(&self.0)
    }

    pub const fn as_limbs(&self) -> &Limbs {
        &self.0
    }
}

impl core::fmt::Debug for BaseFieldElement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "BaseFieldElement({self})")
    }
}

impl core::fmt::Display for BaseFieldElement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("0x")?;
        self.to_be_bytes()
            .iter()
            .try_for_each(|&b| write!(f, "{b:02x}"))
    }
}
