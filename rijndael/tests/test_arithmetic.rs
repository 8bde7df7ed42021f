use rijndael::gf::arithmetic::gf_mul;

#[test]
fn test_gf_mul_fips_197_examples() {
    // FIPS-197 §4.2
    assert_eq!(gf_mul(0x57, 0x83), 0xc1);
    assert_eq!(gf_mul(0x57, 0x13), 0xfe);
    // xtime chain from §4.2.1
    assert_eq!(gf_mul(0x57, 0x02), 0xae);
    assert_eq!(gf_mul(0x57, 0x04), 0x47);
    assert_eq!(gf_mul(0x57, 0x08), 0x8e);
    assert_eq!(gf_mul(0x57, 0x10), 0x07);
}

#[test]
fn test_gf_mul_identity_and_zero() {
    for a in 0..=255u8 {
        assert_eq!(gf_mul(a, 0x01), a);
        assert_eq!(gf_mul(0x01, a), a);
        assert_eq!(gf_mul(a, 0x00), 0);
    }
}

#[test]
fn test_gf_mul_commutative() {
    for a in (0..=255u8).step_by(7) {
        for b in (0..=255u8).step_by(11) {
            assert_eq!(gf_mul(a, b), gf_mul(b, a));
        }
    }
}

#[test]
fn test_gf_mul_distributes_over_xor() {
    for a in (0..=255u8).step_by(13) {
        for b in (0..=255u8).step_by(17) {
            for c in (0..=255u8).step_by(29) {
                assert_eq!(gf_mul(a, b ^ c), gf_mul(a, b) ^ gf_mul(a, c));
            }
        }
    }
}
