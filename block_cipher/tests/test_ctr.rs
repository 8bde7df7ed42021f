use block_cipher::crypto::cipher_traits::BlockCipher;
use block_cipher::crypto::ctr::Ctr;
use block_cipher::crypto::des::DES;
use block_cipher::crypto::errors::CipherError;
use block_cipher::crypto::triple_des::TripleDES;
use hex_literal::hex;
use rand::RngCore;

/// Copies the counter straight through, so the keystream is the counter
/// sequence itself.
struct NoopBlock(usize);

impl BlockCipher for NoopBlock {
    fn block_size(&self) -> usize {
        self.0
    }

    fn encrypt_block(&self, dst: &mut [u8], src: &[u8]) {
        dst[..self.0].copy_from_slice(&src[..self.0]);
    }

    fn decrypt_block(&self, dst: &mut [u8], src: &[u8]) {
        dst[..self.0].copy_from_slice(&src[..self.0]);
    }
}

fn inc(counter: &mut [u8]) {
    for byte in counter.iter_mut().rev() {
        *byte = byte.wrapping_add(1);
        if *byte != 0 {
            break;
        }
    }
}

#[test]
fn test_ctr_counter_sequencing() {
    // With an identity block cipher the stream XORs successive counter
    // values over the input, which pins down the counter order and the
    // buffer refill logic for several block sizes.
    for size in [64usize, 128, 256, 512, 1024] {
        let iv = vec![0u8; size];
        let mut ctr = Ctr::new(NoopBlock(size), &iv).unwrap();

        let src = vec![0xffu8; 1024];
        let mut want = src.clone();
        let mut counter = vec![0u8; size];
        for block in 1..1024 / size {
            inc(&mut counter);
            for (w, c) in want[block * size..(block + 1) * size].iter_mut().zip(&counter) {
                *w ^= c;
            }
        }

        let mut dst = vec![0u8; 1024];
        ctr.xor_key_stream(&mut dst, &src);
        assert_eq!(dst, want, "block size {size}");
    }
}

#[test]
fn test_ctr_counter_wraparound() {
    // An all-0xFF counter must roll over to all zeroes and keep going.
    let des = DES::new(&hex!("01 23 45 67 89 AB CD EF")).unwrap();
    let mut ctr = Ctr::new(&des, &[0xff; 8]).unwrap();

    let mut keystream = [0u8; 16];
    ctr.xor_key_stream(&mut keystream, &[0u8; 16]);

    let mut expected = [0u8; 16];
    des.encrypt_block(&mut expected[..8], &[0xff; 8]);
    des.encrypt_block(&mut expected[8..], &[0x00; 8]);
    assert_eq!(keystream, expected);
}

#[test]
fn test_ctr_self_inverse() {
    let mut rng = rand::rng();
    let mut key = [0u8; 24];
    let mut iv = [0u8; 8];
    let mut data = vec![0u8; 1000];
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut iv);
    rng.fill_bytes(&mut data);

    let tdes = TripleDES::new(&key).unwrap();
    let mut encrypted = vec![0u8; data.len()];
    Ctr::new(&tdes, &iv)
        .unwrap()
        .xor_key_stream(&mut encrypted, &data);
    assert_ne!(encrypted, data);

    let mut decrypted = vec![0u8; data.len()];
    Ctr::new(&tdes, &iv)
        .unwrap()
        .xor_key_stream(&mut decrypted, &encrypted);
    assert_eq!(decrypted, data);
}

#[test]
fn test_ctr_chunked_calls_match_one_shot() {
    // The keystream position depends only on how many bytes have been
    // consumed, not on call boundaries.
    let des = DES::new(&hex!("13 34 57 79 9B BC DF F1")).unwrap();
    let iv = hex!("00 01 02 03 04 05 06 07");
    let mut rng = rand::rng();
    let mut data = vec![0u8; 257];
    rng.fill_bytes(&mut data);

    let mut one_shot = vec![0u8; data.len()];
    Ctr::new(&des, &iv)
        .unwrap()
        .xor_key_stream(&mut one_shot, &data);

    let mut chunked = vec![0u8; data.len()];
    let mut ctr = Ctr::new(&des, &iv).unwrap();
    let mut pos = 0;
    for chunk in [1usize, 7, 8, 63, 64, 114] {
        ctr.xor_key_stream(&mut chunked[pos..pos + chunk], &data[pos..pos + chunk]);
        pos += chunk;
    }
    assert_eq!(pos, data.len());
    assert_eq!(chunked, one_shot);
}

#[test]
fn test_ctr_invalid_iv_lengths() {
    let des = DES::new(&[0u8; 8]).unwrap();
    for len in [0usize, 7, 9, 16] {
        let iv = vec![0u8; len];
        assert!(matches!(
            Ctr::new(&des, &iv),
            Err(CipherError::InvalidIvLength { expected: 8, actual }) if actual == len
        ));
    }
}

#[test]
#[should_panic(expected = "output smaller than input")]
fn test_ctr_short_destination_panics() {
    let des = DES::new(&[0u8; 8]).unwrap();
    let mut ctr = Ctr::new(&des, &[0u8; 8]).unwrap();
    let mut dst = [0u8; 4];
    ctr.xor_key_stream(&mut dst, &[0u8; 5]);
}
