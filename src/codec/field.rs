//! Field and record types produced by decoding.
//!
//! A [`Field`] is a tagged variant rather than an in-band `"NULL"` string, so
//! the null sentinel never collides with a genuine text value inside the data
//! model. Only the wire format uses the reserved literal.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// One decoded column value: either text or the null sentinel.
///
/// `Null` only arises from decoding when null-mapping is enabled and the raw
/// unquoted token exactly equals the reserved `NULL` literal; a quoted token
/// with the same content is always [`Field::Text`].
///
/// Serializes to a JSON string or JSON null, and deserializes from the same
/// shapes, so records pass through `serde_json` as plain arrays.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    /// A textual value, possibly empty.
    Text(String),
    /// The null sentinel.
    Null,
}

/// The ordered sequence of fields decoded from one line.
///
/// Never empty: an empty input line decodes to a single empty text field.
pub type Record = Vec<Field>;

impl Field {
    /// Convenience constructor for a text field.
    pub fn text(s: impl Into<String>) -> Self {
        Field::Text(s.into())
    }

    /// The text content, or `None` for the null sentinel.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Field::Text(s) => Some(s),
            Field::Null => None,
        }
    }

    /// Whether this field is the null sentinel.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }
}

impl From<String> for Field {
    fn from(s: String) -> Self {
        Field::Text(s)
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Field::Text(s.to_string())
    }
}

impl From<Option<String>> for Field {
    fn from(opt: Option<String>) -> Self {
        match opt {
            Some(s) => Field::Text(s),
            None => Field::Null,
        }
    }
}

impl From<Field> for Option<String> {
    fn from(field: Field) -> Self {
        match field {
            Field::Text(s) => Some(s),
            Field::Null => None,
        }
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Text(s) => serializer.serialize_str(s),
            Field::Null => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<String>::deserialize(deserializer)?.into())
    }
}
