pub mod algorithms;

pub use algorithms::{bijective, bounded};
