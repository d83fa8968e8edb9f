use clap::{Args, Subcommand};

/// Arguments for encoding integers
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Decimal integers to encode (reads one per line from stdin if omitted)
    pub values: Vec<String>,
}

/// Arguments for decoding identifiers
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Identifiers to decode (reads one per line from stdin if omitted)
    pub ids: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode decimal integers into identifiers
    Encode(EncodeArgs),
    /// Decode identifiers back into decimal integers
    Decode(DecodeArgs),
    /// List available schemes
    List,
    /// Print the length threshold table of a bounded scheme
    Table,
}
