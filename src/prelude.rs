//! Convenient re-exports for common usage.
//!
//! ```
//! use shortening::prelude::*;
//!
//! let id = encode_bounded(1_000_000);
//! assert_eq!(decode_bounded(id.as_bytes()), Ok(1_000_000));
//! ```

pub use crate::{
    BASE32, BASE64, BIG32, BIG64, BijectiveCodec, BoundedCodec, CodecError, Config, Encoded,
    Scheme, decode_big, decode_bounded, decode32, encode_big, encode_bigint, encode_bounded,
    encode32,
};
