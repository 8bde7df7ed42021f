/// Contract satisfied by every block cipher in this workspace.
///
/// A schedule is immutable once constructed, so all three methods take
/// `&self` and a schedule may be shared across threads against disjoint
/// buffers. `dst` and `src` must each hold at least one block; short
/// buffers are a caller bug and abort rather than corrupt output.
pub trait BlockCipher {
    fn block_size(&self) -> usize;

    /// Encrypts exactly one block from `src` into `dst`.
    fn encrypt_block(&self, dst: &mut [u8], src: &[u8]);

    /// Decrypts exactly one block from `src` into `dst`.
    fn decrypt_block(&self, dst: &mut [u8], src: &[u8]);
}

impl<B: BlockCipher + ?Sized> BlockCipher for &B {
    fn block_size(&self) -> usize {
        (**self).block_size()
    }

    fn encrypt_block(&self, dst: &mut [u8], src: &[u8]) {
        (**self).encrypt_block(dst, src)
    }

    fn decrypt_block(&self, dst: &mut [u8], src: &[u8]) {
        (**self).decrypt_block(dst, src)
    }
}
