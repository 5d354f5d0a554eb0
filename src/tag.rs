//! The wire tag vocabulary shared by the encoder and decoder.

/// A single-byte marker identifying the kind of the value that follows it on
/// the wire.
///
/// The discriminants are part of the wire format and must never be reassigned:
/// every implementation of this codec agrees on these exact bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Tag {
    False = 0,
    True = 1,
    String = 2,
    Number = 3,
    Array = 4,
    Object = 5,
    Null = 6,
}

impl Tag {
    /// Maps a wire byte back to its tag, or `None` for bytes outside the
    /// vocabulary.
    #[inline]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Self::False),
            1 => Some(Self::True),
            2 => Some(Self::String),
            3 => Some(Self::Number),
            4 => Some(Self::Array),
            5 => Some(Self::Object),
            6 => Some(Self::Null),
            _ => None,
        }
    }

    /// The byte this tag occupies on the wire.
    #[inline]
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Human-readable tag name, used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::False => "False",
            Self::True => "True",
            Self::String => "String",
            Self::Number => "Number",
            Self::Array => "Array",
            Self::Object => "Object",
            Self::Null => "Null",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_bytes_fixed() {
        // These constants are load-bearing for interoperability.
        assert_eq!(Tag::False.byte(), 0);
        assert_eq!(Tag::True.byte(), 1);
        assert_eq!(Tag::String.byte(), 2);
        assert_eq!(Tag::Number.byte(), 3);
        assert_eq!(Tag::Array.byte(), 4);
        assert_eq!(Tag::Object.byte(), 5);
        assert_eq!(Tag::Null.byte(), 6);
    }

    #[test]
    fn test_from_byte_roundtrip() {
        for byte in 0u8..=6 {
            let tag = Tag::from_byte(byte).unwrap();
            assert_eq!(tag.byte(), byte);
        }
    }

    #[test]
    fn test_from_byte_unknown() {
        for byte in 7u8..=u8::MAX {
            assert_eq!(Tag::from_byte(byte), None);
        }
    }
}
