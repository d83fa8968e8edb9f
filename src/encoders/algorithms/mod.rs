pub mod bijective;
pub mod bounded;
pub mod errors;

// Re-export error types for public API
pub use errors::{CodecError, SchemeNotFoundError, TableError, find_closest_scheme};
