//! Moduli of the two P-256 fields, see <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.186-4.pdf>
use crate::limbs::Limbs;

/// Modulus of the base field
/// p = 2^256 - 2^224 + 2^192 + 2^96 - 1
/// = 0xffffffff00000001000000000000000000000000ffffffffffffffffffffffff
pub const P: Limbs = [
    0xffffffff, 0xffffffff, 0xffffffff, 0x00000000, 0x00000000, 0x00000000, 0x00000001, 0xffffffff,
];

/// Order of the curve, the modulus of the scalar field
/// n = 2^256 - 2^224 + 2^192 - 0x4319055258e8617b0c46353d039cdaaf
/// = 0xffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551
pub const N: Limbs = [
    0xfc632551, 0xf3b9cac2, 0xa7179e84, 0xbce6faad, 0xffffffff, 0xffffffff, 0x00000000, 0xffffffff,
];
