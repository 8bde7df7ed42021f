use block_cipher::crypto::cipher_traits::BlockCipher;
use block_cipher::crypto::des::DES;
use block_cipher::crypto::errors::CipherError;
use block_cipher::crypto::triple_des::TripleDES;
use hex_literal::hex;
use rand::RngCore;

#[test]
fn test_triple_des_sp800_67_example() {
    // NIST SP 800-67 Appendix B: "The quick brown fox jump" under three
    // distinct keys.
    let key = hex!(
        "01 23 45 67 89 AB CD EF"
        "23 45 67 89 AB CD EF 01"
        "45 67 89 AB CD EF 01 23"
    );
    let plaintext = hex!(
        "54 68 65 20 71 75 69 63"
        "6B 20 62 72 6F 77 6E 20"
        "66 6F 78 20 6A 75 6D 70"
    );
    let ciphertext = hex!(
        "A8 26 FD 8C E5 3B 85 5F"
        "CC E2 1C 81 12 25 6F E6"
        "68 D5 C0 5D D9 B6 B9 00"
    );

    let tdes = TripleDES::new(&key).unwrap();
    for (i, (plain, expected)) in plaintext.chunks(8).zip(ciphertext.chunks(8)).enumerate() {
        let mut got = [0u8; 8];
        tdes.encrypt_block(&mut got, plain);
        assert_eq!(got, expected, "block {i}: encrypt");

        tdes.decrypt_block(&mut got, expected);
        assert_eq!(got, plain, "block {i}: decrypt");
    }
}

#[test]
fn test_triple_des_degenerates_to_des_with_equal_keys() {
    // With K1 = K2 = K3 the middle decryption cancels the first
    // encryption, leaving single DES.
    let des_key = hex!("01 23 45 67 89 AB CD EF");
    let mut key = Vec::new();
    for _ in 0..3 {
        key.extend_from_slice(&des_key);
    }
    let plaintext = *b"Now is t";
    let expected = hex!("3F A4 0E 8A 98 4D 48 15");

    let tdes = TripleDES::new(&key).unwrap();
    let des = DES::new(&des_key).unwrap();

    let mut triple = [0u8; 8];
    let mut single = [0u8; 8];
    tdes.encrypt_block(&mut triple, &plaintext);
    des.encrypt_block(&mut single, &plaintext);
    assert_eq!(triple, expected);
    assert_eq!(single, expected);
}

#[test]
fn test_triple_des_block_size() {
    let tdes = TripleDES::new(&[0u8; 24]).unwrap();
    assert_eq!(tdes.block_size(), 8);
}

#[test]
fn test_triple_des_roundtrip_random() {
    let mut rng = rand::rng();
    for _ in 0..50 {
        let mut key = [0u8; 24];
        let mut block = [0u8; 8];
        rng.fill_bytes(&mut key);
        rng.fill_bytes(&mut block);

        let tdes = TripleDES::new(&key).unwrap();
        let mut ciphertext = [0u8; 8];
        let mut recovered = [0u8; 8];
        tdes.encrypt_block(&mut ciphertext, &block);
        tdes.decrypt_block(&mut recovered, &ciphertext);
        assert_eq!(recovered, block);
    }
}

#[test]
fn test_triple_des_invalid_key_sizes() {
    for len in [0, 8, 16, 23, 25, 32] {
        let key = vec![0u8; len];
        assert!(matches!(
            TripleDES::new(&key),
            Err(CipherError::InvalidKeySize(n)) if n == len
        ));
    }
}
