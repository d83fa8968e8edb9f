use std::fmt;

/// Errors that can occur while encoding or decoding an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// The input is empty, or longer than the longest encoding the codec
    /// produces. `max` is `None` for codecs without a length limit.
    InvalidDecodeLength { actual: usize, max: Option<usize> },
    /// A byte of the input is not a symbol of the alphabet in use.
    InvalidCharacter { byte: u8, position: usize },
    /// The input is a maximal-length string denoting a value above `u64::MAX`.
    Overflow,
    /// Negative values have no encoding.
    Negative,
}

impl CodecError {
    /// A one-line suggestion for a human reading the error.
    pub fn hint(&self) -> String {
        match self {
            CodecError::InvalidDecodeLength { actual: 0, .. } => {
                "identifiers contain at least one character".to_string()
            }
            CodecError::InvalidDecodeLength { max: Some(max), .. } => {
                format!("identifiers of this scheme are at most {} characters", max)
            }
            CodecError::InvalidDecodeLength { max: None, .. } => {
                "check the identifier for truncation".to_string()
            }
            CodecError::InvalidCharacter { .. } => {
                "check that the identifier was produced with the same scheme".to_string()
            }
            CodecError::Overflow => {
                "the value does not fit in 64 bits; use a big scheme for larger values".to_string()
            }
            CodecError::Negative => "only non-negative integers can be encoded".to_string(),
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::InvalidDecodeLength { actual, max: Some(max) } => write!(
                f,
                "invalid decode length: {} characters, expected 1 to {}",
                actual, max
            ),
            CodecError::InvalidDecodeLength { actual, max: None } => {
                write!(f, "invalid decode length: {} characters", actual)
            }
            CodecError::InvalidCharacter { byte, position } => {
                if byte.is_ascii_graphic() {
                    write!(
                        f,
                        "invalid character '{}' at position {}",
                        *byte as char, position
                    )
                } else {
                    write!(
                        f,
                        "invalid character 0x{:02X} at position {}",
                        byte, position
                    )
                }
            }
            CodecError::Overflow => write!(f, "decoded value overflows 64 bits"),
            CodecError::Negative => write!(f, "cannot encode a negative value"),
        }
    }
}

impl std::error::Error for CodecError {}

/// Errors building a threshold table or codec for an alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    BaseTooSmall { base: u64 },
    /// Bounded codecs extract digits with shifts and masks.
    NotPowerOfTwo { base: u64 },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::BaseTooSmall { base } => {
                write!(f, "base {} is too small for a numeral system", base)
            }
            TableError::NotPowerOfTwo { base } => {
                write!(f, "base {} is not a power of two", base)
            }
        }
    }
}

impl std::error::Error for TableError {}

/// Error when a scheme name is not known
#[derive(Debug)]
pub struct SchemeNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl SchemeNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for SchemeNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scheme '{}' not found", self.name)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemeNotFoundError {}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len2 = s2.chars().count();
    if s1.is_empty() {
        return len2;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = usize::from(c1 != c2);
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching scheme name, tolerating small typos.
pub fn find_closest_scheme<'a>(name: &str, available: &[&'a str]) -> Option<&'a str> {
    available
        .iter()
        .map(|&candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|&(distance, _)| distance <= 2)
        .min_by_key(|&(distance, _)| distance)
        .map(|(_, candidate)| candidate)
}
