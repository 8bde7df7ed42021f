/// Permutes a `width`-bit big-endian value through a 1-based selection
/// table: output bit `i` (counting from the most significant of the
/// `table.len()` result bits) is input bit `table[i]`, where bit 1 is the
/// most significant of the `width` input bits. This is the layout FIPS 46-3
/// uses for every DES table.
pub fn permute(block: u64, table: &[u8], width: u32) -> u64 {
    let out_msb = 1u64 << (table.len() - 1);
    let in_msb = 1u64 << (width - 1);
    let mut out = 0u64;
    for (i, &pos) in table.iter().enumerate() {
        if block & (in_msb >> (pos as u32 - 1)) != 0 {
            out |= out_msb >> i;
        }
    }
    out
}

/// XORs `a[i] ^ b[i]` into `dst` for as many bytes as both inputs provide,
/// returning that count. `dst` must be at least that long.
pub fn xor_bytes(dst: &mut [u8], a: &[u8], b: &[u8]) -> usize {
    let n = a.len().min(b.len());
    for i in 0..n {
        dst[i] = a[i] ^ b[i];
    }
    n
}
