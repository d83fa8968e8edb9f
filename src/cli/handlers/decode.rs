use crate::cli::{args::DecodeArgs, config::inputs_or_stdin};
use shortening::{Codec, CodecError, Scheme};
use std::io::{self, Write};

pub fn handle(args: DecodeArgs, scheme: Scheme) -> Result<(), Box<dyn std::error::Error>> {
    let ids = inputs_or_stdin(&args.ids)?;
    tracing::debug!(%scheme, count = ids.len(), "decoding");

    let mut out = io::stdout().lock();
    for id in &ids {
        writeln!(out, "{}", decode_one(scheme, id)?)?;
    }
    Ok(())
}

/// Decodes one identifier with `scheme` into decimal text.
pub fn decode_one(scheme: Scheme, id: &str) -> Result<String, CodecError> {
    match scheme.codec() {
        Codec::Bounded(codec) => codec.decode_str(id).map(|n| n.to_string()),
        Codec::Bijective(codec) => codec.decode_str(id).map(|n| n.to_string()),
    }
}
