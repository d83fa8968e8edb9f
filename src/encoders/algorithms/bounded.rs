//! Fixed-width codec between `u64` and minimal-length identifiers.
//!
//! Every length `l` owns the value range `[min(l), min(l + 1))` of the
//! threshold table. A value is written as its offset into that range, using
//! exactly `l` digits, least significant digit first. Counting upwards
//! therefore only changes the leftmost symbol until it rolls over.

use std::fmt;
use std::ops::Deref;

use crate::core::alphabet::{self, Alphabet, INVALID_FLAG};
use crate::core::thresholds::ThresholdTable;

use super::errors::{CodecError, TableError};

/// Room for the longest encoding of any supported base (32 symbols, base 4).
pub const ENCODED_CAPACITY: usize = 32;

/// A canonical identifier produced by [`BoundedCodec::encode`].
///
/// Stored inline, so producing one never allocates.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Encoded {
    buf: [u8; ENCODED_CAPACITY],
    len: u8,
}

impl Encoded {
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }

    pub fn as_str(&self) -> &str {
        // SAFETY: every byte was taken from an alphabet, which is printable ASCII.
        unsafe { std::str::from_utf8_unchecked(self.as_bytes()) }
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Always false; kept for parity with `len`.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Deref for Encoded {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for Encoded {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<[u8]> for Encoded {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Display for Encoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Encoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl PartialEq<str> for Encoded {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Encoded {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl From<Encoded> for String {
    fn from(encoded: Encoded) -> String {
        encoded.as_str().to_owned()
    }
}

/// Bounded codec over a power-of-two alphabet.
///
/// # Example
///
/// ```
/// use shortening::BASE64;
///
/// let id = BASE64.encode(65);
/// assert_eq!(id, "BA");
/// assert_eq!(BASE64.decode(id.as_bytes()), Ok(65));
/// ```
#[derive(Debug)]
pub struct BoundedCodec {
    alphabet: &'static Alphabet,
    table: ThresholdTable,
    shift: u32,
    mask: u64,
}

impl BoundedCodec {
    pub const fn new(alphabet: &'static Alphabet) -> Result<Self, TableError> {
        let base = alphabet.base() as u64;
        if base < 4 {
            return Err(TableError::BaseTooSmall { base });
        }
        if !base.is_power_of_two() {
            return Err(TableError::NotPowerOfTwo { base });
        }

        let table = match ThresholdTable::new(base) {
            Ok(table) => table,
            Err(e) => return Err(e),
        };

        Ok(BoundedCodec {
            alphabet,
            table,
            shift: base.trailing_zeros(),
            mask: base - 1,
        })
    }

    pub const fn alphabet(&self) -> &'static Alphabet {
        self.alphabet
    }

    pub const fn table(&self) -> &ThresholdTable {
        &self.table
    }

    /// Longest identifier this codec produces or accepts.
    pub const fn max_len(&self) -> usize {
        self.table.max_len()
    }

    /// Encodes `n` as its canonical identifier. Never fails.
    pub fn encode(&self, n: u64) -> Encoded {
        let len = self.table.length_of(n);
        let mut offset = n - self.table.min_value(len);

        let mut buf = [0u8; ENCODED_CAPACITY];
        for slot in &mut buf[..len] {
            *slot = self.alphabet.symbol((offset & self.mask) as usize);
            offset >>= self.shift;
        }

        Encoded {
            buf,
            len: len as u8,
        }
    }

    /// Decodes an identifier back to the integer it encodes.
    ///
    /// Invalid symbols are detected once, after folding every position.
    pub fn decode(&self, input: &[u8]) -> Result<u64, CodecError> {
        let max = self.max_len();
        if input.is_empty() || input.len() > max {
            return Err(CodecError::InvalidDecodeLength {
                actual: input.len(),
                max: Some(max),
            });
        }

        let mut seen = 0u8;
        let mut raw = 0u128;
        for &c in input.iter().rev() {
            let digit = self.alphabet.index_of(c);
            seen |= digit;
            raw = (raw << self.shift) | u128::from(digit);
        }

        if seen & INVALID_FLAG != 0 {
            return Err(self.invalid_character(input));
        }

        // At most `max_len * 7` bits, so the fold above cannot wrap; only the
        // maximal length can exceed `u64`.
        let value = raw + u128::from(self.table.min_value(input.len()));
        u64::try_from(value).map_err(|_| CodecError::Overflow)
    }

    pub fn decode_str(&self, input: &str) -> Result<u64, CodecError> {
        self.decode(input.as_bytes())
    }

    #[cold]
    fn invalid_character(&self, input: &[u8]) -> CodecError {
        match self.alphabet.first_invalid(input) {
            Some((position, byte)) => CodecError::InvalidCharacter { byte, position },
            None => CodecError::InvalidCharacter {
                byte: 0,
                position: 0,
            },
        }
    }
}

const fn builtin(alphabet: &'static Alphabet) -> BoundedCodec {
    match BoundedCodec::new(alphabet) {
        Ok(codec) => codec,
        Err(_) => panic!("built-in alphabet must be a power of two"),
    }
}

/// 64-symbol URL-safe codec; identifiers are 1 to 11 characters.
pub static BASE64: BoundedCodec = builtin(&alphabet::BASE64_URL);

/// 32-symbol case-insensitive codec; identifiers are 1 to 13 characters.
pub static BASE32: BoundedCodec = builtin(&alphabet::BASE32);
