//! Reversible short identifiers.
//!
//! Maps non-negative integers to the shortest possible string over a fixed
//! alphabet and back, the mechanism behind URL-shortener slugs.
//!
//! Two numeral systems share the same alphabets:
//!
//! - [`BoundedCodec`]: `u64` to 1..=Lmax symbols (Lmax = 11 for the 64-symbol
//!   alphabet, 13 for the 32-symbol one), allocation free.
//! - [`BijectiveCodec`]: arbitrary-precision integers, any length.
//!
//! Both write the least significant digit first and agree on every `u64`.
//!
//! ```
//! assert_eq!(shortening::encode_bounded(0), "A");
//! assert_eq!(shortening::encode_bounded(64), "AA");
//! assert_eq!(shortening::encode_bounded(65), "BA");
//! assert_eq!(shortening::decode_bounded(b"AA"), Ok(64));
//! ```

mod core;
mod encoders;
pub mod prelude;

pub use crate::core::alphabet::{self as alphabets, Alphabet, INVALID};
pub use crate::core::config::{Codec, Config, Scheme, Settings, user_config_path};
pub use crate::core::thresholds::ThresholdTable;
pub use crate::encoders::algorithms::{CodecError, SchemeNotFoundError, TableError, find_closest_scheme};
pub use crate::encoders::bijective::{BIG32, BIG64, BijectiveCodec};
pub use crate::encoders::bounded::{BASE32, BASE64, BoundedCodec, Encoded};

use num_bigint::{BigInt, BigUint};

/// Encodes `n` with the 64-symbol bounded codec. Never fails.
pub fn encode_bounded(n: u64) -> Encoded {
    BASE64.encode(n)
}

/// Decodes an identifier produced by [`encode_bounded`].
pub fn decode_bounded(input: &[u8]) -> Result<u64, CodecError> {
    BASE64.decode(input)
}

/// Encodes `n` with the 32-symbol bounded codec.
pub fn encode32(n: u64) -> Encoded {
    BASE32.encode(n)
}

/// Decodes an identifier produced by [`encode32`].
pub fn decode32(input: &[u8]) -> Result<u64, CodecError> {
    BASE32.decode(input)
}

/// Encodes an arbitrary-precision value with the 64-symbol unbounded codec.
pub fn encode_big(n: &BigUint) -> String {
    BIG64.encode(n)
}

/// Like [`encode_big`], but accepts signed input and rejects negatives.
pub fn encode_bigint(n: &BigInt) -> Result<String, CodecError> {
    BIG64.encode_signed(n)
}

/// Decodes an identifier produced by [`encode_big`].
pub fn decode_big(input: &[u8]) -> Result<BigUint, CodecError> {
    BIG64.decode(input)
}
