use limbint::{BigInteger, Limb};

fn int(s: &str) -> BigInteger {
    s.parse().unwrap()
}

#[test]
fn test_mul_primes() {
    let a = BigInteger::from(1000000007);
    let b = BigInteger::from(1000000009);
    assert_eq!((&a * &b).to_string(), "1000000016000000063");
    assert_eq!((-&a * &b).to_string(), "-1000000016000000063");
    assert_eq!((-a * -b).to_string(), "1000000016000000063");
}

#[test]
fn test_add_carry_chain() {
    let x = BigInteger::from(u128::MAX);
    let y = &x + 1u32;
    assert_eq!(y.limbs(), &[0, 0, 0, 0, 1]);
    assert_eq!(y.to_string(), "340282366920938463463374607431768211456");
    assert_eq!(&y - 1u32, x);
}

#[test]
fn test_add_mixed_signs() {
    let cases: &[(i128, i128)] = &[
        (0, 0),
        (-1, 1),
        (1, -1),
        (-1, -1),
        (i64::MIN as i128, i64::MIN as i128),
        (u64::MAX as i128, -(u64::MAX as i128)),
        (1 << 64, -1),
        (-(1 << 64), 1),
        (-(1 << 95), -(1 << 95)),
        (i128::MAX / 2, i128::MAX / 2),
        (i128::MIN / 2, i128::MIN / 2),
    ];
    for &(a, b) in cases {
        let sum = BigInteger::from(a) + BigInteger::from(b);
        assert_eq!(sum, BigInteger::from(a + b), "{} + {}", a, b);
        let difference = BigInteger::from(a) - BigInteger::from(b);
        assert_eq!(difference, BigInteger::from(a - b), "{} - {}", a, b);
    }
}

#[test]
fn test_add_beyond_i128() {
    let max = BigInteger::from(i128::MAX);
    let min = BigInteger::from(i128::MIN);
    assert_eq!(
        (&max + &max).to_string(),
        "340282366920938463463374607431768211454"
    );
    assert_eq!(
        (&min + &min).to_string(),
        "-340282366920938463463374607431768211456"
    );
    assert_eq!(&min - &max, &min + &min + 1u32);
}

#[test]
fn test_group_laws() {
    let a = int("-98765432109876543210987654321");
    let b = int("123456789012345678901234567890123");
    let c = int("-55555555555555555555");

    assert_eq!(&a + &b, &b + &a);
    assert_eq!((&a + &b) + &c, &a + (&b + &c));
    assert_eq!(&a + BigInteger::zero(), a);
    assert!((&a + -&a).is_zero());
    assert_eq!(&a - &b, -(&b - &a));

    assert_eq!(&a * &b, &b * &a);
    assert_eq!((&a * &b) * &c, &a * (&b * &c));
    assert_eq!(&a * (&b + &c), &a * &b + &a * &c);
    assert_eq!(&a * BigInteger::one(), a);
    assert!((&a * BigInteger::zero()).is_zero());
}

#[test]
fn test_mul_negative_operands() {
    let a = BigInteger::from(-(1i64 << 40));
    let b = BigInteger::from(1i64 << 40);
    assert_eq!((&a * &b).to_string(), "-1208925819614629174706176");
    assert_eq!((&a * &a).to_string(), "1208925819614629174706176");
    assert_eq!(BigInteger::from(-1) * BigInteger::from(-1), BigInteger::one());
}

#[test]
fn test_increment_decrement() {
    let mut x = BigInteger::from(Limb::MAX);
    assert_eq!(x.post_increment(), BigInteger::from(Limb::MAX));
    assert_eq!(x.limbs(), &[0, 1]);
    x.decrement();
    assert_eq!(x, BigInteger::from(Limb::MAX));

    let mut x = BigInteger::zero();
    assert_eq!(x.post_decrement(), BigInteger::zero());
    assert_eq!(x, BigInteger::from(-1));
    assert!(x.increment().increment().is_positive());
}

#[test]
fn test_compound_assignment() {
    let mut x = BigInteger::from(10);
    x += BigInteger::from(5);
    x -= &BigInteger::from(20);
    x *= BigInteger::from(-4);
    x /= &BigInteger::from(3);
    x %= BigInteger::from(4);
    // ((10 + 5 - 20) * -4 / 3) % 4 == (20 / 3) % 4 == 2
    assert_eq!(x, BigInteger::from(2));
}

#[test]
fn test_ordering() {
    let mut xs: Vec<BigInteger> = [
        "0",
        "-1",
        "1",
        "4294967296",
        "-4294967296",
        "-4294967297",
        "18446744073709551616",
        "-18446744073709551616",
        "4294967295",
        "-4294967295",
    ]
    .iter()
    .map(|s| int(s))
    .collect();
    xs.sort();
    let sorted: Vec<String> = xs.iter().map(ToString::to_string).collect();
    assert_eq!(
        sorted,
        [
            "-18446744073709551616",
            "-4294967297",
            "-4294967296",
            "-4294967295",
            "-1",
            "0",
            "1",
            "4294967295",
            "4294967296",
            "18446744073709551616",
        ]
    );
}

#[test]
fn test_trichotomy() {
    let values = [-300i64, -1, 0, 1, 2, 1 << 40, -(1 << 40)];
    for &a in &values {
        for &b in &values {
            let (x, y) = (BigInteger::from(a), BigInteger::from(b));
            let relations = [x < y, x == y, x > y];
            assert_eq!(relations.iter().filter(|&&r| r).count(), 1);
            assert_eq!(x.cmp(&y), a.cmp(&b));
        }
    }
}

#[test]
fn test_queries() {
    let x = BigInteger::from(-12);
    assert_eq!(x.signum(), -1);
    assert_eq!(x.abs(), BigInteger::from(12));
    assert_eq!(BigInteger::zero().signum(), 0);
    assert_eq!(BigInteger::default(), BigInteger::zero());
    assert_eq!(BigInteger::from(5u8).signum(), 1);
    assert_eq!(x.to_i64(), Some(-12));
    assert_eq!(x.to_u64(), None);
    assert!(int("18446744073709551616").to_u64().is_none());
    assert_eq!(int("18446744073709551615").to_u64(), Some(u64::MAX));
}

#[test]
fn test_hash_consistent_with_eq() {
    use std::collections::HashSet;

    let mut set = HashSet::new();
    set.insert(BigInteger::from(1u64 << 40));
    set.insert(int("1099511627776"));
    set.insert(BigInteger::from(1i64 << 40) - 0u32);
    assert_eq!(set.len(), 1);
    assert!(set.contains(&(BigInteger::from(1u32 << 20) * (1u32 << 20))));
}

#[test]
fn test_primitive_operands() {
    let x = BigInteger::from(u64::MAX);
    assert_eq!((&x + 1u32).to_string(), "18446744073709551616");
    assert_eq!((1u8 + &x).limbs(), &[0, 0, 1]);
    assert_eq!((&x - u64::MAX).signum(), 0);
    assert_eq!((BigInteger::from(-7) / 2i32).to_i64(), Some(-3));
    assert_eq!((-9i64 % BigInteger::from(4)).to_i64(), Some(-1));
    assert!((&x * 0usize).is_zero());
}
