/// Reverse-index sentinel for bytes that are not part of an alphabet.
///
/// Alphabets hold at most 128 symbols, so every valid digit has bit 7 clear
/// and OR-ing any number of looked-up digits keeps that bit clear unless at
/// least one lookup hit the sentinel.
pub const INVALID: u8 = 0xFF;

/// Bit that is set in a digit accumulator iff some byte was not in the alphabet.
pub const INVALID_FLAG: u8 = 0x80;

/// Largest supported alphabet.
pub const MAX_SYMBOLS: usize = 128;

/// An ordered set of printable ASCII symbols with an O(1) reverse index.
///
/// Built at compile time and never mutated, so it can be shared freely
/// between threads.
///
/// # Example
///
/// ```
/// use shortening::Alphabet;
///
/// static HEX: Alphabet = Alphabet::new(b"0123456789abcdef");
///
/// assert_eq!(HEX.base(), 16);
/// assert_eq!(HEX.digit(b'c'), Some(12));
/// assert_eq!(HEX.digit(b'G'), None);
/// ```
#[derive(Debug)]
pub struct Alphabet {
    symbols: &'static [u8],
    index: [u8; 256],
}

impl Alphabet {
    /// Builds the alphabet and its reverse index.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a `const`/`static`) if the alphabet
    /// has fewer than 2 or more than 128 symbols, repeats a symbol, or contains
    /// a byte outside printable ASCII.
    pub const fn new(symbols: &'static [u8]) -> Self {
        assert!(symbols.len() >= 2, "alphabet needs at least two symbols");
        assert!(symbols.len() <= MAX_SYMBOLS, "alphabet holds at most 128 symbols");

        let mut index = [INVALID; 256];
        let mut i = 0;
        while i < symbols.len() {
            let c = symbols[i];
            assert!(c.is_ascii_graphic(), "alphabet symbols must be printable ASCII");
            assert!(index[c as usize] == INVALID, "duplicate symbol in alphabet");
            index[c as usize] = i as u8;
            i += 1;
        }

        Alphabet { symbols, index }
    }

    /// Number of symbols (the radix).
    pub const fn base(&self) -> usize {
        self.symbols.len()
    }

    pub const fn symbols(&self) -> &'static [u8] {
        self.symbols
    }

    /// The symbols as text, in digit order.
    pub fn as_str(&self) -> &'static str {
        // SAFETY: `new` only admits printable ASCII.
        unsafe { std::str::from_utf8_unchecked(self.symbols) }
    }

    /// Symbol for `digit`. Panics if `digit >= base()`.
    #[inline(always)]
    pub fn symbol(&self, digit: usize) -> u8 {
        self.symbols[digit]
    }

    /// Raw reverse lookup: the digit value of `c`, or [`INVALID`].
    #[inline(always)]
    pub const fn index_of(&self, c: u8) -> u8 {
        self.index[c as usize]
    }

    /// Digit value of `c`, or `None` if `c` is not in the alphabet.
    #[inline]
    pub fn digit(&self, c: u8) -> Option<u8> {
        match self.index_of(c) {
            INVALID => None,
            d => Some(d),
        }
    }

    pub fn contains(&self, c: u8) -> bool {
        self.index_of(c) != INVALID
    }

    /// Position and value of the first byte in `input` outside the alphabet.
    pub(crate) fn first_invalid(&self, input: &[u8]) -> Option<(usize, u8)> {
        input
            .iter()
            .position(|&c| !self.contains(c))
            .map(|pos| (pos, input[pos]))
    }
}

/// URL-safe 64-symbol alphabet: `A-Z a-z 0-9 - _`.
pub static BASE64_URL: Alphabet =
    Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_");

/// Case-insensitive-safe 32-symbol alphabet: `A-Z 2-7`.
pub static BASE32: Alphabet = Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_index_inverts_symbols() {
        for alphabet in [&BASE64_URL, &BASE32] {
            for (i, &c) in alphabet.symbols().iter().enumerate() {
                assert_eq!(alphabet.index_of(c) as usize, i);
                assert_eq!(alphabet.symbol(i), c);
            }
        }
    }

    #[test]
    fn test_non_members_map_to_sentinel() {
        for alphabet in [&BASE64_URL, &BASE32] {
            let members = (0..=255u8).filter(|&c| alphabet.contains(c)).count();
            assert_eq!(members, alphabet.base());
        }
        assert_eq!(BASE64_URL.index_of(b'*'), INVALID);
        assert_eq!(BASE64_URL.index_of(0xFF), INVALID);
        assert_eq!(BASE32.digit(b'a'), None);
        assert_eq!(BASE32.digit(b'1'), None);
        assert_eq!(BASE32.digit(b'7'), Some(31));
    }

    #[test]
    fn test_sentinel_never_collides_with_digits() {
        for alphabet in [&BASE64_URL, &BASE32] {
            let acc = alphabet.symbols().iter().fold(0u8, |acc, &c| acc | alphabet.index_of(c));
            assert_eq!(acc & INVALID_FLAG, 0);
        }
        assert_ne!(INVALID & INVALID_FLAG, 0);
    }

    #[test]
    fn test_first_invalid() {
        assert_eq!(BASE64_URL.first_invalid(b"AB*C"), Some((2, b'*')));
        assert_eq!(BASE64_URL.first_invalid(b"ABC"), None);
    }

    #[test]
    fn test_as_str() {
        assert_eq!(BASE32.as_str(), "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567");
        assert_eq!(BASE64_URL.as_str().len(), 64);
    }

    #[test]
    #[should_panic(expected = "duplicate symbol")]
    fn test_duplicate_symbol_rejected() {
        let _ = Alphabet::new(b"ABCA");
    }

    #[test]
    #[should_panic(expected = "printable ASCII")]
    fn test_whitespace_rejected() {
        let _ = Alphabet::new(b"AB C");
    }
}
