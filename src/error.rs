//! Error types for codec operations

use thiserror::Error;

/// Error type for codec operations
#[derive(Error, Debug)]
pub enum Error {
    /// Decoding encountered malformed input. The message is the first
    /// diagnostic collected during the walk, plus a count of any others.
    #[error("{0}")]
    Malformed(String),
    /// Encoding would exceed the scratch buffer limit, or a payload is too
    /// large for its u32 length field.
    #[error("capacity exceeded: {required} > {limit} bytes")]
    CapacityExceeded { required: usize, limit: usize },
}
