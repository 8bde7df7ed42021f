use crate::crypto::cipher_traits::BlockCipher;
use crate::crypto::des_key_schedule::generate_sub_keys;
use crate::crypto::des_tables::{E, FP, IP, P, S_BOXES};
use crate::crypto::errors::CipherError;
use crate::crypto::utils::permute;

pub const BLOCK_SIZE: usize = 8;

/// Single DES over 64-bit blocks.
///
/// The subkey schedule is derived once at construction and never mutated;
/// decryption runs the same Feistel network with the subkeys in reverse
/// order, so no inverse schedule exists.
pub struct DES {
    sub_keys: [u64; 16],
}

impl DES {
    pub fn new(key: &[u8]) -> Result<DES, CipherError> {
        let key: [u8; 8] = key
            .try_into()
            .map_err(|_| CipherError::InvalidKeySize(key.len()))?;
        Ok(DES {
            sub_keys: generate_sub_keys(u64::from_be_bytes(key)),
        })
    }

    pub(crate) fn encrypt_u64(&self, block: u64) -> u64 {
        crypt_block(self.sub_keys.iter(), block)
    }

    pub(crate) fn decrypt_u64(&self, block: u64) -> u64 {
        crypt_block(self.sub_keys.iter().rev(), block)
    }
}

fn crypt_block<'a>(sub_keys: impl Iterator<Item = &'a u64>, block: u64) -> u64 {
    let permuted = permute(block, &IP, 64);
    let mut l = (permuted >> 32) as u32;
    let mut r = permuted as u32;
    for &k in sub_keys {
        (l, r) = (r, l ^ feistel(r, k));
    }
    // The 16th swap is undone by recombining as R16 || L16.
    let preoutput = (r as u64) << 32 | l as u64;
    permute(preoutput, &FP, 64)
}

/// The DES round function: expand, mix with the subkey, substitute through
/// the eight S-boxes, permute.
fn feistel(r: u32, sub_key: u64) -> u32 {
    let mixed = sub_key ^ permute(r as u64, &E, 32);
    let mut s = 0u32;
    for (i, sbox) in S_BOXES.iter().enumerate() {
        let group = (mixed >> ((7 - i) * 6)) as usize & 0x3f;
        // Outer two bits select the row, inner four the column.
        let row = (group >> 4) & 0x2 | group & 0x1;
        let col = (group >> 1) & 0xf;
        s |= (sbox[row][col] as u32) << ((7 - i) * 4);
    }
    permute(s as u64, &P, 32) as u32
}

impl BlockCipher for DES {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn encrypt_block(&self, dst: &mut [u8], src: &[u8]) {
        assert!(src.len() >= BLOCK_SIZE, "input not full block");
        assert!(dst.len() >= BLOCK_SIZE, "output not full block");
        let block = u64::from_be_bytes(src[..8].try_into().unwrap());
        dst[..8].copy_from_slice(&self.encrypt_u64(block).to_be_bytes());
    }

    fn decrypt_block(&self, dst: &mut [u8], src: &[u8]) {
        assert!(src.len() >= BLOCK_SIZE, "input not full block");
        assert!(dst.len() >= BLOCK_SIZE, "output not full block");
        let block = u64::from_be_bytes(src[..8].try_into().unwrap());
        dst[..8].copy_from_slice(&self.decrypt_u64(block).to_be_bytes());
    }
}
