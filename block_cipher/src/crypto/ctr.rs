use crate::crypto::cipher_traits::BlockCipher;
use crate::crypto::errors::CipherError;
use crate::crypto::utils::xor_bytes;

/// Minimum keystream buffer size; rounded up to a whole number of blocks
/// at construction.
const STREAM_BUFFER_SIZE: usize = 512;

/// Counter-mode keystream over any [`BlockCipher`].
///
/// The stream owns its counter and keystream buffer and every call
/// advances them, so one `Ctr` belongs to exactly one consumer; encrypting
/// and decrypting the same data takes two streams built from the same IV.
/// The cipher itself may be borrowed (`Ctr::new(&cipher, iv)`) since
/// schedules are immutable.
pub struct Ctr<B: BlockCipher> {
    cipher: B,
    counter: Vec<u8>,
    out: Vec<u8>,
    out_valid: usize,
    out_used: usize,
}

impl<B: BlockCipher> Ctr<B> {
    /// Builds a stream from a block cipher and an initial counter value.
    /// The IV length must equal the cipher's block size.
    pub fn new(cipher: B, iv: &[u8]) -> Result<Ctr<B>, CipherError> {
        let block_size = cipher.block_size();
        if iv.len() != block_size {
            return Err(CipherError::InvalidIvLength {
                expected: block_size,
                actual: iv.len(),
            });
        }
        let buf_len = STREAM_BUFFER_SIZE.max(block_size).div_ceil(block_size) * block_size;
        Ok(Ctr {
            cipher,
            counter: iv.to_vec(),
            out: vec![0u8; buf_len],
            out_valid: 0,
            out_used: 0,
        })
    }

    /// XORs the keystream over `src` into `dst`, advancing the stream by
    /// `src.len()` bytes. `dst` must be at least as long as `src`.
    pub fn xor_key_stream(&mut self, dst: &mut [u8], src: &[u8]) {
        assert!(dst.len() >= src.len(), "output smaller than input");
        let mut pos = 0;
        while pos < src.len() {
            if self.out_valid - self.out_used < self.cipher.block_size() {
                self.refill();
            }
            let n = xor_bytes(
                &mut dst[pos..],
                &src[pos..],
                &self.out[self.out_used..self.out_valid],
            );
            pos += n;
            self.out_used += n;
        }
    }

    /// Moves the unconsumed keystream tail to the front of the buffer and
    /// encrypts successive counter values into the rest, one block at a
    /// time, until no whole block fits.
    fn refill(&mut self) {
        let block_size = self.cipher.block_size();
        let remain = self.out_valid - self.out_used;
        self.out.copy_within(self.out_used..self.out_valid, 0);

        let mut filled = remain;
        while filled + block_size <= self.out.len() {
            self.cipher
                .encrypt_block(&mut self.out[filled..filled + block_size], &self.counter);
            filled += block_size;
            increment(&mut self.counter);
        }
        self.out_valid = filled;
        self.out_used = 0;
    }
}

/// Big-endian increment with silent wraparound: carries propagate left and
/// an all-0xFF counter rolls over to all zeroes.
fn increment(counter: &mut [u8]) {
    for byte in counter.iter_mut().rev() {
        *byte = byte.wrapping_add(1);
        if *byte != 0 {
            break;
        }
    }
}
