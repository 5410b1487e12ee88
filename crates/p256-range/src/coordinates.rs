use crate::base::BaseFieldElement;
use crate::convert::decode_be_pair;
use crate::error::{Field, Result};
use crate::range::check_range_p_ct;

/// Affine coordinates of a peer supplied point, both reduced modulo p.
///
/// Decoding does not check that the point is on the curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Coordinates {
    x: BaseFieldElement,
    y: BaseFieldElement,
}

impl Coordinates {
    /// Decodes `x || y`, both big-endian 32 byte integers.
    ///
    /// This is the uncompressed SEC1 encoding without the leading `0x04` byte.
    pub fn from_untagged_bytes(bytes: &[u8]) -> Result<Self> {
        let (x, y) = decode_be_pair(bytes, check_range_p_ct, Field::Base)?;
        Ok(Coordinates {
            x: BaseFieldElement::from_checked_limbs(x),
            y: BaseFieldElement::from_checked_limbs(y),
        })
    }

    pub fn x(&self) -> &BaseFieldElement {
        &self.x
    }

    pub fn y(&self) -> &BaseFieldElement {
        &self.y
    }

    /// Encodes `x || y`, the inverse of [Coordinates::from_untagged_bytes].
    pub fn to_untagged_bytes(&self) -> [u8; 64] {
        let mut bytes = [0u8; 64];
        bytes[..32].copy_from_slice(&self.x.to_be_bytes());
        bytes[32..].copy_from_slice(&self.y.to_be_bytes());
        bytes
    }
}
