//! The dynamically-typed value tree the codec operates on.

use crate::tag::Tag;
use indexmap::IndexMap;

/// Object representation: a string-keyed mapping that preserves insertion
/// order. Inserting an existing key replaces the value but keeps the key's
/// original position (last write wins).
pub type Map = IndexMap<String, Value>;

/// A value representable on the wire.
///
/// The enum is closed: there is no catch-all variant, so the encoder can
/// match exhaustively and an unsupported kind cannot silently contribute zero
/// bytes to an enclosing array or object. Object keys are strings by
/// construction for the same reason.
///
/// Numbers are always 64-bit IEEE-754 floats; there is no integer subtype.
/// NaN and the infinities survive a round-trip bit-for-bit, though note that
/// derived equality follows IEEE semantics (`NaN != NaN`).
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Map),
}

impl Value {
    /// The wire tag this value encodes under. Booleans are encoded entirely
    /// by tag choice, so `true` and `false` map to distinct tags.
    #[inline]
    pub const fn tag(&self) -> Tag {
        match self {
            Self::Null => Tag::Null,
            Self::Bool(true) => Tag::True,
            Self::Bool(false) => Tag::False,
            Self::Number(_) => Tag::Number,
            Self::String(_) => Tag::String,
            Self::Array(_) => Tag::Array,
            Self::Object(_) => Tag::Object,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::Array(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Self::Object(value)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
