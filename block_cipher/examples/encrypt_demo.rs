use block_cipher::crypto::cipher_traits::BlockCipher;
use block_cipher::crypto::ctr::Ctr;
use block_cipher::crypto::des::DES;
use block_cipher::crypto::triple_des::TripleDES;
use rand::RngCore;

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn main() {
    let mut rng = rand::rng();

    // One DES block.
    let mut des_key = [0u8; 8];
    rng.fill_bytes(&mut des_key);
    let des = DES::new(&des_key).expect("8-byte key");

    let block = *b"8 bytes!";
    let mut encrypted = [0u8; 8];
    let mut decrypted = [0u8; 8];
    des.encrypt_block(&mut encrypted, &block);
    des.decrypt_block(&mut decrypted, &encrypted);
    println!("DES key        : {}", to_hex(&des_key));
    println!("DES block      : {}", to_hex(&block));
    println!("DES encrypted  : {}", to_hex(&encrypted));
    println!("DES decrypted  : {}", to_hex(&decrypted));

    // Arbitrary-length data through TripleDES in counter mode.
    let mut tdes_key = [0u8; 24];
    let mut iv = [0u8; 8];
    rng.fill_bytes(&mut tdes_key);
    rng.fill_bytes(&mut iv);
    let tdes = TripleDES::new(&tdes_key).expect("24-byte key");

    let message = b"Counter mode turns a block cipher into a keystream.";
    let mut ciphertext = vec![0u8; message.len()];
    Ctr::new(&tdes, &iv)
        .expect("IV matches block size")
        .xor_key_stream(&mut ciphertext, message);

    let mut recovered = vec![0u8; ciphertext.len()];
    Ctr::new(&tdes, &iv)
        .expect("IV matches block size")
        .xor_key_stream(&mut recovered, &ciphertext);

    println!("3DES-CTR iv    : {}", to_hex(&iv));
    println!("3DES-CTR cipher: {}", to_hex(&ciphertext));
    println!("3DES-CTR plain : {}", String::from_utf8_lossy(&recovered));
}
