//! Recursive encoder with length-prefixed framing.
//!
//! The encoder walks a [`Value`] tree depth-first, appending tag bytes and
//! payloads to a scratch buffer. Strings, arrays, and objects are framed with
//! a 4-byte little-endian length that is only known after their payload has
//! been written, so the writer follows an explicit two-pass protocol:
//! reserve a placeholder length slot, write children forward, then patch the
//! slot with the exact byte count. Every encode step reports the number of
//! bytes it wrote (tag and length field included) so parents can account for
//! their children without re-measuring the buffer.

use crate::{
    error::Error,
    tag::Tag,
    value::{Map, Value},
};
use bytes::{BufMut, Bytes, BytesMut};

/// Width of a length field on the wire.
const LEN_FIELD: usize = 4;

/// Initial scratch capacity for a new encoder.
const DEFAULT_CAPACITY: usize = 4096;

/// Default ceiling on a single encoded message. Length fields are u32, so a
/// larger payload could not be framed anyway.
const DEFAULT_LIMIT: usize = u32::MAX as usize;

/// Encodes [`Value`] trees into self-describing binary messages.
///
/// Each instance owns its scratch buffer, so concurrent encoders never
/// interfere with each other; `encode` takes `&mut self`, which limits every
/// instance to one in-flight call. The scratch allocation is reused across
/// calls where possible.
pub struct Encoder {
    buf: BytesMut,
    limit: usize,
}

impl Encoder {
    /// Creates an encoder with the default scratch capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an encoder whose scratch buffer starts at `capacity` bytes.
    ///
    /// The buffer still grows on demand; `capacity` only sizes the initial
    /// allocation.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
            limit: DEFAULT_LIMIT,
        }
    }

    /// Caps the encoded size of a single message at `limit` bytes.
    ///
    /// Exceeding the cap fails the encode with [`Error::CapacityExceeded`]
    /// before any out-of-bounds write happens. Values above [`u32::MAX`] are
    /// clamped, since the wire's length fields cannot frame more.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.min(DEFAULT_LIMIT);
        self
    }

    /// Encodes a value, returning the exact written byte range.
    ///
    /// On failure the scratch buffer is reset and nothing is returned; a
    /// partially-written message never escapes.
    pub fn encode(&mut self, value: &Value) -> Result<Bytes, Error> {
        debug_assert!(self.buf.is_empty());
        match self.encode_value(value) {
            Ok(_) => Ok(self.buf.split().freeze()),
            Err(err) => {
                self.buf.clear();
                Err(err)
            }
        }
    }

    /// Ensures `additional` more bytes fit under the limit, growing the
    /// scratch buffer as needed.
    #[inline]
    fn grow(&mut self, additional: usize) -> Result<(), Error> {
        let required = self.buf.len().saturating_add(additional);
        if required > self.limit {
            return Err(Error::CapacityExceeded {
                required,
                limit: self.limit,
            });
        }
        self.buf.reserve(additional);
        Ok(())
    }

    /// Appends a 4-byte placeholder length and returns its position for a
    /// later [`Self::patch_len`].
    #[inline]
    fn reserve_len(&mut self) -> Result<usize, Error> {
        self.grow(LEN_FIELD)?;
        let slot = self.buf.len();
        self.buf.put_u32_le(0);
        Ok(slot)
    }

    /// Patches the length slot at `slot` with the number of bytes written
    /// since the reservation, returning that count.
    #[inline]
    fn patch_len(&mut self, slot: usize) -> Result<usize, Error> {
        let written = self.buf.len() - slot - LEN_FIELD;
        let len = u32::try_from(written).map_err(|_| Error::CapacityExceeded {
            required: written,
            limit: DEFAULT_LIMIT,
        })?;
        self.buf[slot..slot + LEN_FIELD].copy_from_slice(&len.to_le_bytes());
        Ok(written)
    }

    /// Dispatches on the value's kind. The match is exhaustive over the
    /// closed [`Value`] enum, so every child a parent counts is a child that
    /// actually reached the wire.
    fn encode_value(&mut self, value: &Value) -> Result<usize, Error> {
        match value {
            Value::Null | Value::Bool(_) => self.encode_tag(value.tag()),
            Value::Number(number) => self.encode_number(*number),
            Value::String(text) => self.encode_string(text),
            Value::Array(items) => self.encode_array(items),
            Value::Object(entries) => self.encode_object(entries),
        }
    }

    #[inline]
    fn encode_tag(&mut self, tag: Tag) -> Result<usize, Error> {
        self.grow(1)?;
        self.buf.put_u8(tag.byte());
        Ok(1)
    }

    fn encode_number(&mut self, number: f64) -> Result<usize, Error> {
        let tag = self.encode_tag(Tag::Number)?;
        self.grow(8)?;
        self.buf.put_f64_le(number);
        Ok(tag + 8)
    }

    fn encode_string(&mut self, text: &str) -> Result<usize, Error> {
        let tag = self.encode_tag(Tag::String)?;
        let slot = self.reserve_len()?;
        self.grow(text.len())?;
        self.buf.put_slice(text.as_bytes());
        // Length is the UTF-8 byte count, not the character count.
        let written = self.patch_len(slot)?;
        Ok(tag + LEN_FIELD + written)
    }

    fn encode_array(&mut self, items: &[Value]) -> Result<usize, Error> {
        let tag = self.encode_tag(Tag::Array)?;
        let slot = self.reserve_len()?;
        let mut total = 0;
        for item in items {
            total += self.encode_value(item)?;
        }
        let written = self.patch_len(slot)?;
        debug_assert_eq!(total, written);
        Ok(tag + LEN_FIELD + written)
    }

    fn encode_object(&mut self, entries: &Map) -> Result<usize, Error> {
        let tag = self.encode_tag(Tag::Object)?;
        let slot = self.reserve_len()?;
        let mut total = 0;
        for (key, value) in entries {
            total += self.encode_string(key)?;
            total += self.encode_value(value)?;
        }
        let written = self.patch_len(slot)?;
        debug_assert_eq!(total, written);
        Ok(tag + LEN_FIELD + written)
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Encodes a value with a fresh [`Encoder`].
pub fn encode(value: &Value) -> Result<Bytes, Error> {
    Encoder::new().encode(value)
}
