use block_cipher::crypto::cipher_traits::BlockCipher;
use block_cipher::crypto::ctr::Ctr;
use rand::RngCore;
use rijndael::rijndael::cipher::Rijndael;

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn main() {
    let mut rng = rand::rng();

    for key_len in [16usize, 24, 32] {
        let mut key = vec![0u8; key_len];
        rng.fill_bytes(&mut key);
        let cipher = Rijndael::new(&key).expect("valid key length");

        let block = *b"single AES block";
        let mut encrypted = [0u8; 16];
        let mut decrypted = [0u8; 16];
        cipher.encrypt_block(&mut encrypted, &block);
        cipher.decrypt_block(&mut decrypted, &encrypted);

        println!("AES-{}", key_len * 8);
        println!("  key      : {}", to_hex(&key));
        println!("  encrypted: {}", to_hex(&encrypted));
        println!("  decrypted: {}", String::from_utf8_lossy(&decrypted));
    }

    // AES-256 in counter mode over a message that is not block-aligned.
    let mut key = [0u8; 32];
    let mut iv = [0u8; 16];
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut iv);
    let cipher = Rijndael::new(&key).expect("32-byte key");

    let message = b"Rijndael behind a counter handles any length.";
    let mut ciphertext = vec![0u8; message.len()];
    Ctr::new(&cipher, &iv)
        .expect("IV matches block size")
        .xor_key_stream(&mut ciphertext, message);

    let mut recovered = vec![0u8; ciphertext.len()];
    Ctr::new(&cipher, &iv)
        .expect("IV matches block size")
        .xor_key_stream(&mut recovered, &ciphertext);

    println!("AES-256-CTR");
    println!("  iv       : {}", to_hex(&iv));
    println!("  cipher   : {}", to_hex(&ciphertext));
    println!("  plain    : {}", String::from_utf8_lossy(&recovered));
}
