use crate::crypto::des_tables::{PC1, PC2};
use crate::crypto::utils::permute;

/// Per-round left-rotation amounts for the C and D halves (FIPS 46-3).
const SHIFT_BITS: [u32; 16] = [
    1, 1, 2, 2, 2, 2, 2, 2,
    1, 2, 2, 2, 2, 2, 2, 1,
];

/// Expands a 64-bit key into the 16 round subkeys, each 48 significant
/// bits packed in the low bits of a u64.
///
/// PC-1 drops the parity bits and splits the result into two 28-bit
/// halves; each round rotates both halves and selects the subkey bits
/// through PC-2.
pub fn generate_sub_keys(key: u64) -> [u64; 16] {
    let selected = permute(key, &PC1, 64);
    let mut c = (selected >> 28) as u32;
    let mut d = (selected & 0x0fff_ffff) as u32;

    let mut sub_keys = [0u64; 16];
    for (round, &shift) in SHIFT_BITS.iter().enumerate() {
        c = (c << shift | c >> (28 - shift)) & 0x0fff_ffff;
        d = (d << shift | d >> (28 - shift)) & 0x0fff_ffff;
        let cd = (c as u64) << 28 | d as u64;
        sub_keys[round] = permute(cd, &PC2, 56);
    }
    sub_keys
}
