//! Sequential decoder with tag-driven dispatch and error accumulation.
//!
//! The decoder walks a byte buffer front to back, reading a tag byte to pick
//! the variant-specific routine for each node. Malformed input never aborts
//! the walk: a bad tag is recorded as a diagnostic, the cursor skips past the
//! offending byte, and the surrounding structure continues with a
//! type-appropriate default in place of the broken node. Only once the
//! top-level value has been walked does a non-empty diagnostic list turn into
//! a single aggregated [`Error::Malformed`], so one pass reports as many
//! problems as it can find.
//!
//! Cursor and diagnostics are constructed fresh per call; nothing is shared
//! between decodes.

use crate::{error::Error, tag::Tag, value::Map, value::Value};

/// Width of a length field on the wire.
const LEN_FIELD: usize = 4;

/// Decodes a self-describing binary message into a [`Value`].
///
/// Returns [`Error::Malformed`] if any diagnostics were collected during the
/// walk. Bytes after the top-level value are ignored.
pub fn decode(data: &[u8]) -> Result<Value, Error> {
    Decoder::new(data).run()
}

struct Decoder<'a> {
    data: &'a [u8],
    offset: usize,
    diagnostics: Vec<String>,
}

impl<'a> Decoder<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            offset: 0,
            diagnostics: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Value, Error> {
        let value = self.decode_value();
        if let Some(first) = self.diagnostics.first() {
            let mut message = first.clone();
            if self.diagnostics.len() > 1 {
                message.push_str(&format!(
                    " and {} more errors",
                    self.diagnostics.len() - 1
                ));
            }
            return Err(Error::Malformed(message));
        }
        Ok(value)
    }

    /// Dispatches on the tag byte under the cursor.
    ///
    /// Unknown tags and a cursor at the end of the buffer record a diagnostic
    /// and yield [`Value::Null`]; the unknown byte is skipped so enclosing
    /// array and object loops always make forward progress.
    fn decode_value(&mut self) -> Value {
        let Some(byte) = self.peek() else {
            self.diagnostics
                .push(format!("unexpected end of buffer at offset {}", self.offset));
            return Value::Null;
        };
        match Tag::from_byte(byte) {
            Some(Tag::String) => Value::String(self.decode_string()),
            Some(Tag::True | Tag::False) => Value::Bool(self.decode_bool()),
            Some(Tag::Null) => self.decode_null(),
            Some(Tag::Number) => Value::Number(self.decode_number()),
            Some(Tag::Array) => Value::Array(self.decode_array()),
            Some(Tag::Object) => Value::Object(self.decode_object()),
            None => {
                self.diagnostics.push(format!(
                    "unknown tag 0x{byte:02x} at offset {}",
                    self.offset
                ));
                self.offset += 1;
                Value::Null
            }
        }
    }

    fn decode_string(&mut self) -> String {
        if !self.expect(&[Tag::String]) {
            return String::new();
        }
        self.offset += 1;
        let length = self.decode_len();
        // Invalid UTF-8 decodes lossily rather than failing the node.
        String::from_utf8_lossy(self.take(length)).into_owned()
    }

    fn decode_bool(&mut self) -> bool {
        if !self.expect(&[Tag::True, Tag::False]) {
            return false;
        }
        let value = self.data[self.offset] == Tag::True.byte();
        self.offset += 1;
        value
    }

    fn decode_null(&mut self) -> Value {
        if self.expect(&[Tag::Null]) {
            self.offset += 1;
        }
        Value::Null
    }

    fn decode_number(&mut self) -> f64 {
        if !self.expect(&[Tag::Number]) {
            return 0.0;
        }
        self.offset += 1;
        match <[u8; 8]>::try_from(self.take(8)) {
            Ok(bytes) => f64::from_le_bytes(bytes),
            Err(_) => 0.0,
        }
    }

    fn decode_array(&mut self) -> Vec<Value> {
        if !self.expect(&[Tag::Array]) {
            return Vec::new();
        }
        self.offset += 1;
        let len = self.decode_len();
        let end = self.payload_end(len);

        let mut result = Vec::new();
        while self.offset < end {
            result.push(self.decode_value());
        }
        result
    }

    fn decode_object(&mut self) -> Map {
        if !self.expect(&[Tag::Object]) {
            return Map::new();
        }
        self.offset += 1;
        let len = self.decode_len();
        let end = self.payload_end(len);

        let mut result = Map::new();
        while self.offset < end {
            let key = self.decode_string();
            let value = self.decode_value();
            // Last write wins on duplicate keys.
            result.insert(key, value);
        }
        result
    }

    /// Reads a little-endian u32 length field, or 0 when the buffer ends
    /// before the field does.
    fn decode_len(&mut self) -> usize {
        match <[u8; LEN_FIELD]>::try_from(self.take(LEN_FIELD)) {
            Ok(bytes) => u32::from_le_bytes(bytes) as usize,
            Err(_) => 0,
        }
    }

    /// Resolves where a declared payload region ends, clamping regions that
    /// claim more bytes than the buffer holds.
    fn payload_end(&mut self, length: usize) -> usize {
        let end = self.offset.saturating_add(length);
        if end > self.data.len() {
            self.diagnostics.push(format!(
                "declared length {length} overruns buffer at offset {}",
                self.offset
            ));
            return self.data.len();
        }
        end
    }

    /// Checks the byte under the cursor against the accepted tags.
    ///
    /// On mismatch, records a diagnostic naming the expected and found tags,
    /// skips the rejected byte so loops depending on cursor progress always
    /// terminate, and returns false so the caller substitutes a default.
    fn expect(&mut self, accepted: &[Tag]) -> bool {
        let found = self.peek();
        if let Some(byte) = found {
            if accepted.iter().any(|tag| tag.byte() == byte) {
                return true;
            }
        }
        let expected = accepted
            .iter()
            .map(|tag| tag.name())
            .collect::<Vec<_>>()
            .join(" or ");
        let got = match found {
            Some(byte) => match Tag::from_byte(byte) {
                Some(tag) => tag.name().to_string(),
                None => format!("0x{byte:02x}"),
            },
            None => "end of buffer".to_string(),
        };
        self.diagnostics.push(format!(
            "malformed tag, expected {expected} but got {got} at offset {}",
            self.offset
        ));
        if found.is_some() {
            self.offset += 1;
        }
        false
    }

    /// Consumes up to `length` bytes, recording a diagnostic if the buffer
    /// ends early.
    fn take(&mut self, length: usize) -> &'a [u8] {
        let start = self.offset.min(self.data.len());
        let end = start.saturating_add(length).min(self.data.len());
        if end - start < length {
            self.diagnostics
                .push(format!("unexpected end of buffer at offset {start}"));
        }
        self.offset = end;
        &self.data[start..end]
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.data.get(self.offset).copied()
    }
}
