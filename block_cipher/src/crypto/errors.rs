use thiserror::Error;

/// Recoverable construction-time failures.
///
/// Buffer-length violations on the per-block operations are deliberately
/// not represented here: those are caller bugs and abort via `assert!`
/// instead of being returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    #[error("invalid key size {0}")]
    InvalidKeySize(usize),

    #[error("invalid IV length {actual}, cipher block size is {expected}")]
    InvalidIvLength { expected: usize, actual: usize },
}
