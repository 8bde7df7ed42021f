use block_cipher::crypto::cipher_traits::BlockCipher;
use block_cipher::crypto::errors::CipherError;

use crate::gf::arithmetic::gf_mul;
use crate::rijndael::key_schedule::{expand_key, inv_mix_word};
use crate::rijndael::sbox::{inv_sub_word, sub_word};

pub const BLOCK_SIZE: usize = 16;

/// AES over 128-bit blocks, for 128/192/256-bit keys.
///
/// The state is four big-endian u32 words, one per column, so SubBytes,
/// ShiftRows and MixColumns all become word transforms. Both schedules are
/// derived at construction and immutable afterwards; decryption walks the
/// inverse schedule front to back, same as encryption walks the forward
/// one.
pub struct Rijndael {
    enc: Vec<[u32; 4]>,
    dec: Vec<[u32; 4]>,
}

impl Rijndael {
    pub fn new(key: &[u8]) -> Result<Rijndael, CipherError> {
        match key.len() {
            16 | 24 | 32 => {}
            n => return Err(CipherError::InvalidKeySize(n)),
        }
        let (enc, dec) = expand_key(key);
        Ok(Rijndael { enc, dec })
    }
}

fn load_state(src: &[u8]) -> [u32; 4] {
    let mut state = [0u32; 4];
    for (i, w) in state.iter_mut().enumerate() {
        *w = u32::from_be_bytes(src[4 * i..4 * i + 4].try_into().unwrap());
    }
    state
}

fn store_state(dst: &mut [u8], state: [u32; 4]) {
    for (i, w) in state.iter().enumerate() {
        dst[4 * i..4 * i + 4].copy_from_slice(&w.to_be_bytes());
    }
}

fn add_round_key(state: [u32; 4], round_key: &[u32; 4]) -> [u32; 4] {
    [
        state[0] ^ round_key[0],
        state[1] ^ round_key[1],
        state[2] ^ round_key[2],
        state[3] ^ round_key[3],
    ]
}

/// Row r of the state rotates left by r; with column words that is a
/// byte-lane reassembly across the four words.
fn shift_rows(s: [u32; 4]) -> [u32; 4] {
    [
        s[0] & 0xff00_0000 | s[1] & 0x00ff_0000 | s[2] & 0x0000_ff00 | s[3] & 0x0000_00ff,
        s[1] & 0xff00_0000 | s[2] & 0x00ff_0000 | s[3] & 0x0000_ff00 | s[0] & 0x0000_00ff,
        s[2] & 0xff00_0000 | s[3] & 0x00ff_0000 | s[0] & 0x0000_ff00 | s[1] & 0x0000_00ff,
        s[3] & 0xff00_0000 | s[0] & 0x00ff_0000 | s[1] & 0x0000_ff00 | s[2] & 0x0000_00ff,
    ]
}

fn inv_shift_rows(s: [u32; 4]) -> [u32; 4] {
    [
        s[0] & 0xff00_0000 | s[3] & 0x00ff_0000 | s[2] & 0x0000_ff00 | s[1] & 0x0000_00ff,
        s[1] & 0xff00_0000 | s[0] & 0x00ff_0000 | s[3] & 0x0000_ff00 | s[2] & 0x0000_00ff,
        s[2] & 0xff00_0000 | s[1] & 0x00ff_0000 | s[0] & 0x0000_ff00 | s[3] & 0x0000_00ff,
        s[3] & 0xff00_0000 | s[2] & 0x00ff_0000 | s[1] & 0x0000_ff00 | s[0] & 0x0000_00ff,
    ]
}

/// MixColumns on a single column word (multipliers 2 and 3).
fn mix_word(w: u32) -> u32 {
    let [a0, a1, a2, a3] = w.to_be_bytes();
    u32::from_be_bytes([
        gf_mul(2, a0) ^ gf_mul(3, a1) ^ a2 ^ a3,
        a0 ^ gf_mul(2, a1) ^ gf_mul(3, a2) ^ a3,
        a0 ^ a1 ^ gf_mul(2, a2) ^ gf_mul(3, a3),
        gf_mul(3, a0) ^ a1 ^ a2 ^ gf_mul(2, a3),
    ])
}

fn encrypt_rounds(round_keys: &[[u32; 4]], block: [u32; 4]) -> [u32; 4] {
    let last = round_keys.len() - 1;
    let mut state = add_round_key(block, &round_keys[0]);
    for round_key in &round_keys[1..last] {
        state = shift_rows(state.map(sub_word));
        state = add_round_key(state.map(mix_word), round_key);
    }
    // Final round omits MixColumns.
    state = shift_rows(state.map(sub_word));
    add_round_key(state, &round_keys[last])
}

fn decrypt_rounds(round_keys: &[[u32; 4]], block: [u32; 4]) -> [u32; 4] {
    let last = round_keys.len() - 1;
    let mut state = add_round_key(block, &round_keys[0]);
    for round_key in &round_keys[1..last] {
        state = inv_shift_rows(state.map(inv_sub_word));
        state = add_round_key(state.map(inv_mix_word), round_key);
    }
    state = inv_shift_rows(state.map(inv_sub_word));
    add_round_key(state, &round_keys[last])
}

impl BlockCipher for Rijndael {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn encrypt_block(&self, dst: &mut [u8], src: &[u8]) {
        assert!(src.len() >= BLOCK_SIZE, "input not full block");
        assert!(dst.len() >= BLOCK_SIZE, "output not full block");
        store_state(dst, encrypt_rounds(&self.enc, load_state(src)));
    }

    fn decrypt_block(&self, dst: &mut [u8], src: &[u8]) {
        assert!(src.len() >= BLOCK_SIZE, "input not full block");
        assert!(dst.len() >= BLOCK_SIZE, "output not full block");
        store_state(dst, decrypt_rounds(&self.dec, load_state(src)));
    }
}
