//! Serialize dynamically-typed values into a self-describing binary format.
//!
//! # Overview
//!
//! A compact binary codec for value trees whose shape is only known at
//! runtime: null, booleans, 64-bit floats, UTF-8 strings, ordered arrays,
//! and string-keyed ordered objects. Every value on the wire starts with a
//! single tag byte, and variable-size values carry a 4-byte little-endian
//! length prefix so a reader knows where each payload ends without scanning
//! ahead.
//!
//! The encoder and decoder are symmetric but independent. They share only the
//! tag vocabulary in [`Tag`] and the framing rules:
//!
//! - Boolean and null values are a tag byte alone (`true` and `false` have
//!   distinct tags).
//! - Numbers are a tag followed by an IEEE-754 double, little-endian.
//! - Strings are a tag, a u32 byte length, and the UTF-8 bytes.
//! - Arrays and objects are a tag, a u32 *byte* length of the concatenated
//!   encoded children, and the children themselves. Object entries are an
//!   encoded string key followed by an encoded value, in insertion order.
//!
//! Decoding is best-effort: malformed tags are recorded as diagnostics while
//! the walk continues with type-appropriate defaults, and a single aggregated
//! [`Error::Malformed`] is raised once the walk completes. This trades
//! immediate failure for reporting as many problems as one pass can find.
//!
//! # Example
//!
//! ```
//! use tagwire::{decode, encode, Value};
//!
//! let value = Value::Array(vec![
//!     Value::Number(3.14),
//!     Value::String("hi".into()),
//!     Value::Bool(true),
//!     Value::Null,
//! ]);
//!
//! let bytes = encode(&value).unwrap();
//! let decoded = decode(&bytes).unwrap();
//! assert_eq!(value, decoded);
//! ```
//!
//! # Reusing an encoder
//!
//! [`encode`] allocates a fresh scratch buffer per call. Callers encoding many
//! values can hold an [`Encoder`] and reuse its scratch allocation:
//!
//! ```
//! use tagwire::{Encoder, Value};
//!
//! let mut encoder = Encoder::new();
//! let a = encoder.encode(&Value::Bool(true)).unwrap();
//! let b = encoder.encode(&Value::Null).unwrap();
//! assert_eq!(a.as_ref(), &[0x01]);
//! assert_eq!(b.as_ref(), &[0x06]);
//! ```

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod tag;
pub mod value;

// Re-export main types and operations
pub use decoder::decode;
pub use encoder::{encode, Encoder};
pub use error::Error;
pub use tag::Tag;
pub use value::{Map, Value};
