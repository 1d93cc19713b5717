use limbint::{BigInteger, Limb};

fn int(s: &str) -> BigInteger {
    s.parse().unwrap()
}

#[test]
fn test_shl_crosses_limb() {
    let x = BigInteger::one() << 32u32;
    assert_eq!(x.to_string(), "4294967296");
    assert_eq!(x.limbs(), &[0, 1]);

    let x = BigInteger::from(3) << 31u32;
    assert_eq!(x.limbs(), &[0x8000_0000, 1]);
}

#[test]
fn test_shifts_match_primitive() {
    let values = [0i64, 1, -1, 5, -5, 0x1234_5678_9abc, -0x1234_5678_9abc, i32::MIN as i64];
    for &v in &values {
        for n in 0..24u32 {
            let x = BigInteger::from(v);
            assert_eq!(&x << n, BigInteger::from((v as i128) << n), "{} << {}", v, n);
            assert_eq!(&x >> n, BigInteger::from(v >> n), "{} >> {}", v, n);
        }
    }
}

#[test]
fn test_shift_negative_amount() {
    let x = BigInteger::from(-1000);
    assert_eq!(&x << -3i32, &x >> 3u32);
    assert_eq!(&x >> -3i64, &x << 3usize);
    assert_eq!(&x >> -3isize, BigInteger::from(-8000));
}

#[test]
fn test_shr_rounds_toward_negative_infinity() {
    assert_eq!(BigInteger::from(-1) >> 1u32, BigInteger::from(-1));
    assert_eq!(BigInteger::from(-3) >> 1u32, BigInteger::from(-2));
    let x = -(BigInteger::one() << 200u32) - 1u32;
    assert_eq!(&x >> 200u32, BigInteger::from(-2));
    assert_eq!(&x >> 1000u32, BigInteger::from(-1));
    assert!(((BigInteger::one() << 200u32) >> 201u32).is_zero());
}

#[test]
fn test_shift_composition() {
    let x = int("-123456789012345678901234567890123456789");
    for &(a, b) in &[(1u32, 31u32), (32, 32), (7, 70), (0, 65)] {
        assert_eq!((&x << a) << b, &x << (a + b));
        assert_eq!(((&x << a) << b) >> (a + b), x);
        assert_eq!((&x >> a) >> b, &x >> (a + b));
    }
}

#[test]
fn test_and_or_xor_negative() {
    let a = BigInteger::from(-1);
    let b = BigInteger::from(0xFF);
    assert_eq!(&a & &b, BigInteger::from(0xFF));
    assert_eq!(&a | &b, BigInteger::from(-1));
    assert_eq!(&a ^ &b, BigInteger::from(-256));

    let c = int("-18446744073709551616");
    let d = int("18446744073709551615");
    assert!((&c & &d).is_zero());
    assert_eq!(&c | &d, BigInteger::from(-1));
    assert_eq!(&c ^ &d, BigInteger::from(-1));
}

#[test]
fn test_bitwise_match_primitive() {
    let values = [0i128, 1, -1, 7, -8, 1 << 70, -(1 << 70), i128::MAX, i128::MIN, 0x5555_5555_5555];
    for &a in &values {
        for &b in &values {
            let (x, y) = (BigInteger::from(a), BigInteger::from(b));
            assert_eq!(&x & &y, BigInteger::from(a & b), "{} & {}", a, b);
            assert_eq!(&x | &y, BigInteger::from(a | b), "{} | {}", a, b);
            assert_eq!(&x ^ &y, BigInteger::from(a ^ b), "{} ^ {}", a, b);
        }
    }
}

#[test]
fn test_de_morgan() {
    let a = int("-98765432109876543210987654321");
    let b = int("123456789012345678901234567890123");
    assert_eq!(!(&a & &b), !&a | !&b);
    assert_eq!(!(&a | &b), !&a & !&b);
}

#[test]
fn test_not() {
    assert_eq!(!BigInteger::zero(), BigInteger::from(-1));
    assert_eq!(!BigInteger::from(u64::MAX), int("-18446744073709551616"));
    let x = BigInteger::from(-2);
    assert_eq!((!&x).limbs(), &[1]);
    assert_eq!(x.limb(7), Limb::MAX);
}
