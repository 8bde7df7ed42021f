/// Multiplication in GF(2^8) modulo the AES polynomial
/// x^8 + x^4 + x^3 + x + 1 (0x11b).
///
/// Schoolbook shift-and-add: each set bit of `b` adds the current multiple
/// of `a`, and `a` is doubled per step with reduction whenever the degree
/// reaches 8.
pub fn gf_mul(a: u8, b: u8) -> u8 {
    let mut a = a;
    let mut b = b;
    let mut product = 0u8;
    for _ in 0..8 {
        if b & 1 != 0 {
            product ^= a;
        }
        let overflow = a & 0x80 != 0;
        a <<= 1;
        if overflow {
            a ^= 0x1b; // x^8 ≡ x^4 + x^3 + x + 1
        }
        b >>= 1;
    }
    product
}
