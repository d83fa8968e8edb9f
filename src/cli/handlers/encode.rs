use crate::cli::{args::EncodeArgs, config::inputs_or_stdin};
use num_bigint::BigInt;
use shortening::{Codec, CodecError, Scheme};
use std::io::{self, Write};

pub fn handle(args: EncodeArgs, scheme: Scheme) -> Result<(), Box<dyn std::error::Error>> {
    let values = inputs_or_stdin(&args.values)?;
    tracing::debug!(%scheme, count = values.len(), "encoding");

    let mut out = io::stdout().lock();
    for value in &values {
        writeln!(out, "{}", encode_one(scheme, value)?)?;
    }
    Ok(())
}

/// Encodes one decimal integer with `scheme`.
pub fn encode_one(scheme: Scheme, text: &str) -> Result<String, Box<dyn std::error::Error>> {
    match scheme.codec() {
        Codec::Bounded(codec) => {
            if text.starts_with('-') {
                return Err(CodecError::Negative.into());
            }
            let n: u64 = text.parse().map_err(|_| {
                format!(
                    "'{}' is not an integer between 0 and {}; scheme '{}' is limited to 64 bits",
                    text,
                    u64::MAX,
                    scheme
                )
            })?;
            Ok(codec.encode(n).into())
        }
        Codec::Bijective(codec) => {
            let n: BigInt = text
                .parse()
                .map_err(|_| format!("'{}' is not an integer", text))?;
            Ok(codec.encode_signed(&n)?)
        }
    }
}
