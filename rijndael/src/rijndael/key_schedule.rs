use crate::gf::arithmetic::gf_mul;
use crate::rijndael::sbox::sub_word;

/// Round constants for the key expansion, rcon[i] = x^i in GF(2^8).
static RCON: [u8; 16] = [
    0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36, 0x6c, 0xd8, 0xab, 0x4d, 0x9a, 0x2f,
];

/// Expands a 16/24/32-byte key into the forward and inverse round-key
/// schedules, `key.len()/4 + 7` round keys of four column words each.
///
/// The forward schedule follows the FIPS-197 word recurrence: every Nk-th
/// word is rotated, substituted and mixed with a round constant, and
/// 256-bit keys substitute once more at `i mod nk == 4`. The inverse
/// schedule is the forward one reversed, with the InvMixColumns transform
/// applied to every round key except the first and last so decryption can
/// consume it front to back.
pub fn expand_key(key: &[u8]) -> (Vec<[u32; 4]>, Vec<[u32; 4]>) {
    let nk = key.len() / 4;
    let rounds = nk + 7;

    let mut enc = vec![[0u32; 4]; rounds];
    for i in 0..nk {
        enc[i / 4][i % 4] = u32::from_be_bytes(key[4 * i..4 * i + 4].try_into().unwrap());
    }
    for i in nk..rounds * 4 {
        let mut g = enc[(i - 1) / 4][(i - 1) % 4];
        if i % nk == 0 {
            g = g.rotate_left(8);
        }
        if i % nk == 0 || (nk > 6 && i % nk == 4) {
            g = sub_word(g);
        }
        if i % nk == 0 {
            g ^= (RCON[i / nk - 1] as u32) << 24;
        }
        enc[i / 4][i % 4] = enc[(i - nk) / 4][(i - nk) % 4] ^ g;
    }

    let mut dec = vec![[0u32; 4]; rounds];
    for i in 0..rounds {
        for j in 0..4 {
            let mut w = enc[rounds - 1 - i][j];
            if i > 0 && i < rounds - 1 {
                w = inv_mix_word(w);
            }
            dec[i][j] = w;
        }
    }

    (enc, dec)
}

/// InvMixColumns on a single column word (multipliers 14, 11, 13, 9).
/// Also used on the decryption path in `cipher`.
pub(crate) fn inv_mix_word(w: u32) -> u32 {
    let [a0, a1, a2, a3] = w.to_be_bytes();
    u32::from_be_bytes([
        gf_mul(14, a0) ^ gf_mul(11, a1) ^ gf_mul(13, a2) ^ gf_mul(9, a3),
        gf_mul(9, a0) ^ gf_mul(14, a1) ^ gf_mul(11, a2) ^ gf_mul(13, a3),
        gf_mul(13, a0) ^ gf_mul(9, a1) ^ gf_mul(14, a2) ^ gf_mul(11, a3),
        gf_mul(11, a0) ^ gf_mul(13, a1) ^ gf_mul(9, a2) ^ gf_mul(14, a3),
    ])
}
