use crate::crypto::cipher_traits::BlockCipher;
use crate::crypto::des::{BLOCK_SIZE, DES};
use crate::crypto::errors::CipherError;

/// Triple-DES in EDE3 composition: three independent DES schedules from a
/// 24-byte key, applied encrypt-decrypt-encrypt.
pub struct TripleDES {
    des1: DES,
    des2: DES,
    des3: DES,
}

impl TripleDES {
    pub fn new(key: &[u8]) -> Result<TripleDES, CipherError> {
        if key.len() != 24 {
            return Err(CipherError::InvalidKeySize(key.len()));
        }
        Ok(TripleDES {
            des1: DES::new(&key[..8])?,
            des2: DES::new(&key[8..16])?,
            des3: DES::new(&key[16..])?,
        })
    }
}

impl BlockCipher for TripleDES {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn encrypt_block(&self, dst: &mut [u8], src: &[u8]) {
        assert!(src.len() >= BLOCK_SIZE, "input not full block");
        assert!(dst.len() >= BLOCK_SIZE, "output not full block");
        let mut b = u64::from_be_bytes(src[..8].try_into().unwrap());
        b = self.des1.encrypt_u64(b);
        b = self.des2.decrypt_u64(b);
        b = self.des3.encrypt_u64(b);
        dst[..8].copy_from_slice(&b.to_be_bytes());
    }

    fn decrypt_block(&self, dst: &mut [u8], src: &[u8]) {
        assert!(src.len() >= BLOCK_SIZE, "input not full block");
        assert!(dst.len() >= BLOCK_SIZE, "output not full block");
        let mut b = u64::from_be_bytes(src[..8].try_into().unwrap());
        b = self.des3.decrypt_u64(b);
        b = self.des2.encrypt_u64(b);
        b = self.des1.decrypt_u64(b);
        dst[..8].copy_from_slice(&b.to_be_bytes());
    }
}
