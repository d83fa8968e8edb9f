//! Randomized round trips across the whole value range.

use num_bigint::BigUint;
use rand::Rng;
use shortening::prelude::*;

const SAMPLES: usize = 100_000;

#[test]
fn test_bounded_random_roundtrip() {
    let mut rng = rand::rng();
    for _ in 0..SAMPLES {
        let n: u64 = rng.random();
        let id = encode_bounded(n);
        assert_eq!(decode_bounded(id.as_bytes()), Ok(n), "id {:?}", id);

        let id = encode32(n);
        assert_eq!(decode32(id.as_bytes()), Ok(n), "id {:?}", id);
    }
}

#[test]
fn test_bounded_random_small_magnitudes() {
    // Uniform u64 values almost always need the maximal length; shift them
    // down so every length is exercised.
    let mut rng = rand::rng();
    for _ in 0..SAMPLES {
        let n: u64 = rng.random::<u64>() >> rng.random_range(0..64u32);
        let id = encode_bounded(n);
        assert!(id.len() >= 1 && id.len() <= BASE64.max_len());
        assert_eq!(decode_bounded(id.as_bytes()), Ok(n));
    }
}

#[test]
fn test_random_strings_decode_consistently() {
    // Any string of valid length and symbols either overflows or re-encodes to itself.
    let mut rng = rand::rng();
    let symbols = BASE64.alphabet().symbols();
    for _ in 0..SAMPLES {
        let len = rng.random_range(1..=BASE64.max_len());
        let id: Vec<u8> = (0..len)
            .map(|_| symbols[rng.random_range(0..symbols.len())])
            .collect();
        match decode_bounded(&id) {
            Ok(n) => assert_eq!(encode_bounded(n).as_bytes(), &id[..]),
            Err(CodecError::Overflow) => assert_eq!(len, BASE64.max_len()),
            Err(e) => panic!("unexpected error {:?} for {:?}", e, id),
        }
    }
}

#[test]
fn test_big_random_roundtrip() {
    let mut rng = rand::rng();
    for _ in 0..10_000 {
        let bytes: Vec<u8> = (0..rng.random_range(1..64usize)).map(|_| rng.random()).collect();
        let n = BigUint::from_bytes_le(&bytes);
        let id = encode_big(&n);
        assert_eq!(decode_big(id.as_bytes()), Ok(n.clone()));
        assert_eq!(BIG32.decode_str(&BIG32.encode(&n)), Ok(n));
    }
}

#[test]
fn test_big_random_matches_bounded() {
    let mut rng = rand::rng();
    for _ in 0..10_000 {
        let n: u64 = rng.random();
        assert_eq!(encode_big(&BigUint::from(n)), encode_bounded(n).as_str());
    }
}
