//! Tri-state patch values for update requests.
//!
//! Distinguishes "leave the field untouched" from "clear the field on the
//! server" — a plain `Option` cannot express both.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field value in a patch document.
///
/// Serializes as: nothing at all for [`Patch::Keep`] (the field must also
/// carry `skip_serializing_if = "Patch::is_keep"`), JSON `null` for
/// [`Patch::Null`], and the inner value for [`Patch::Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Patch<T> {
    /// Leave the field untouched; it is omitted from the document.
    Keep,
    /// Clear the field on the server by sending an explicit `null`.
    Null,
    /// Set the field to the given value.
    Value(T),
}

impl<T> Patch<T> {
    /// Returns true if the field should be omitted from the document.
    #[must_use]
    pub const fn is_keep(&self) -> bool {
        matches!(self, Self::Keep)
    }

    /// Returns true if the field clears the server-side value.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the contained value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self::Keep
    }
}

impl<T> From<T> for Patch<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Keep is normally skipped before serialization; null is the
            // safe rendering if it reaches the wire anyway.
            Self::Keep | Self::Null => serializer.serialize_none(),
            Self::Value(value) => serializer.serialize_some(value),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // An absent field never reaches this point; `#[serde(default)]`
        // yields Keep for it.
        Option::<T>::deserialize(deserializer).map(|opt| match opt {
            Some(value) => Self::Value(value),
            None => Self::Null,
        })
    }
}
