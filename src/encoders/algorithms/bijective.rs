//! Unbounded codec between arbitrary-precision integers and identifiers.
//!
//! Uses bijective base-B numeration: digits take the values `1..=B` (the
//! symbol at alphabet position `i` stands for `i + 1`), so there is no zero
//! digit and no padded representation of any value. Digits are written least
//! significant first, like the bounded codec, and for every value that fits in
//! a `u64` both codecs produce the same identifier.

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::core::alphabet::{self, Alphabet, INVALID};

use super::errors::CodecError;

#[derive(Debug)]
pub struct BijectiveCodec {
    alphabet: &'static Alphabet,
}

impl BijectiveCodec {
    pub const fn new(alphabet: &'static Alphabet) -> Self {
        BijectiveCodec { alphabet }
    }

    pub const fn alphabet(&self) -> &'static Alphabet {
        self.alphabet
    }

    /// Encodes `n`. Zero is the first symbol of the alphabet.
    pub fn encode(&self, n: &BigUint) -> String {
        if let Some(small) = n.to_u64() {
            return self.encode_u64(small);
        }

        let base = BigUint::from(self.alphabet.base());
        let one = BigUint::from(1u8);
        let mut out = Vec::with_capacity(estimate_len(n.bits(), self.alphabet.base()));
        let mut n = n.clone();

        loop {
            let (quotient, remainder) = n.div_rem(&base);
            let digit = remainder.iter_u64_digits().next().unwrap_or(0) as usize;
            out.push(self.alphabet.symbol(digit));
            if quotient.is_zero() {
                break;
            }
            n = quotient - &one;
        }

        into_string(out)
    }

    /// Word-sized variant of [`encode`](Self::encode).
    pub fn encode_u64(&self, mut n: u64) -> String {
        let base = self.alphabet.base() as u64;
        let mut out = Vec::with_capacity(estimate_len(u64::from(u64::BITS), self.alphabet.base()));

        loop {
            out.push(self.alphabet.symbol((n % base) as usize));
            n /= base;
            if n == 0 {
                break;
            }
            n -= 1;
        }

        into_string(out)
    }

    /// Encodes a signed integer, rejecting negative values.
    pub fn encode_signed(&self, n: &BigInt) -> Result<String, CodecError> {
        match n.sign() {
            Sign::Minus => Err(CodecError::Negative),
            _ => Ok(self.encode(n.magnitude())),
        }
    }

    /// Decodes an identifier of any length. Cannot overflow.
    pub fn decode(&self, input: &[u8]) -> Result<BigUint, CodecError> {
        if input.is_empty() {
            return Err(CodecError::InvalidDecodeLength {
                actual: 0,
                max: None,
            });
        }

        let base = self.alphabet.base() as u32;
        let mut n = BigUint::zero();
        for (position, &c) in input.iter().enumerate().rev() {
            let digit = self.alphabet.index_of(c);
            if digit == INVALID {
                return Err(CodecError::InvalidCharacter { byte: c, position });
            }
            n *= base;
            n += u32::from(digit) + 1;
        }

        Ok(n - 1u32)
    }

    pub fn decode_str(&self, input: &str) -> Result<BigUint, CodecError> {
        self.decode(input.as_bytes())
    }
}

fn estimate_len(bits: u64, base: usize) -> usize {
    let per_digit = (usize::BITS - 1 - base.leading_zeros()) as u64;
    (bits / per_digit.max(1)) as usize + 1
}

fn into_string(symbols: Vec<u8>) -> String {
    // SAFETY: alphabets are printable ASCII.
    unsafe { String::from_utf8_unchecked(symbols) }
}

/// Unbounded codec over the URL-safe 64-symbol alphabet.
pub static BIG64: BijectiveCodec = BijectiveCodec::new(&alphabet::BASE64_URL);

/// Unbounded codec over the 32-symbol alphabet.
pub static BIG32: BijectiveCodec = BijectiveCodec::new(&alphabet::BASE32);
