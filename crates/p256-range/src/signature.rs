use crate::convert::decode_be_pair;
use crate::error::{Field, Result};
use crate::range::check_range_n_ct;
use crate::scalar::Scalar;

/// The `(r, s)` components of an ECDSA signature, both in `1..=n-1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureScalars {
    r: Scalar,
    s: Scalar,
}

impl SignatureScalars {
    /// Decodes big-endian `r`, then big-endian `s`, without framing.
    ///
    /// The input must be 64 bytes long and both halves must lie in `1..=n-1`.
    pub fn try_from_bytes(bytes: &[u8]) -> Result<Self> {
        let (r, s) = decode_be_pair(bytes, check_range_n_ct, Field::Scalar)?;
        Ok(SignatureScalars {
            r: Scalar::from_checked_limbs(r),
            s: Scalar::from_checked_limbs(s),
        })
    }

    pub fn r(&self) -> &Scalar {
        &self.r
    }

    pub fn s(&self) -> &Scalar {
        &self.s
    }

    /// Encodes big-endian `r`, then big-endian `s`.
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut bytes = [0u8; 64];
        bytes[..32].copy_from_slice(&self.r.to_be_bytes());
        bytes[32..].copy_from_slice(&self.s.to_be_bytes());
        bytes
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use rstest::rstest;

    use super::*;
    use crate::constants::N;
    use crate::convert::limbs_to_be_bytes;
    use crate::error::RangeError;

    fn signature(r: [u8; 32], s: [u8; 32]) -> Vec<u8> {
        let mut bytes = r.to_vec();
        bytes.extend_from_slice(&s);
        bytes
    }

    fn one() -> [u8; 32] {
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        bytes
    }

    #[test]
    fn decodes_and_encodes() {
        let mut r = [0x11u8; 32];
        r[0] = 0x7f;
        let s = one();
        let bytes = signature(r, s);

        let sig = SignatureScalars::try_from_bytes(&bytes).unwrap();
        assert_eq!(sig.r().to_be_bytes(), r);
        assert_eq!(sig.s().to_be_bytes(), s);
        assert_eq!(sig.to_bytes().as_slice(), bytes.as_slice());
    }

    #[rstest]
    #[case::r_zero([0u8; 32], one())]
    #[case::s_zero(one(), [0u8; 32])]
    #[case::r_order(limbs_to_be_bytes(&N), one())]
    #[case::s_order(one(), limbs_to_be_bytes(&N))]
    #[case::s_max(one(), [0xff; 32])]
    fn out_of_range(#[case] r: [u8; 32], #[case] s: [u8; 32]) {
        assert_matches!(
            SignatureScalars::try_from_bytes(&signature(r, s)),
            Err(RangeError::OutOfRange(Field::Scalar))
        );
    }

    #[test]
    fn der_framing_is_rejected() {
        assert_matches!(
            SignatureScalars::try_from_bytes(&[0x30; 70]),
            Err(RangeError::InvalidLength {
                expected: 64,
                actual: 70
            })
        );
    }
}
