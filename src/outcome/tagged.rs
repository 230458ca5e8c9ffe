//! Structurally tagged encoding of an outcome.
//!
//! [`Tagged`] is the only encoding path for an [`Outcome`]: it is the record
//! `{ "ok": true, "value": .. }` or `{ "ok": false, "error": .. }`. With the
//! `serde` feature, serializing an `Outcome` goes through `Tagged`, so both
//! produce the same document.

use super::Outcome;

/// A record that names its variant with an explicit `ok` discriminant.
///
/// # Examples
///
/// ```rust
/// use railway::outcome::{Outcome, Tagged};
///
/// let outcome: Outcome<i32, String> = Outcome::Ok(42);
/// let tagged = outcome.to_serializable();
///
/// assert!(tagged.ok());
/// assert_eq!(tagged, Tagged::Success { value: 42 });
/// assert_eq!(Outcome::from(tagged), Outcome::Ok(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tagged<T, E> {
    /// Encodes as `{ "ok": true, "value": value }`.
    Success {
        /// The success payload.
        value: T,
    },
    /// Encodes as `{ "ok": false, "error": error }`.
    Failure {
        /// The failure payload.
        error: E,
    },
}

impl<T, E> Tagged<T, E> {
    /// The value of the `ok` discriminant.
    #[inline]
    pub const fn ok(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Converts back into an [`Outcome`].
    #[inline]
    pub fn into_outcome(self) -> Outcome<T, E> {
        match self {
            Self::Success { value } => Outcome::Ok(value),
            Self::Failure { error } => Outcome::Err(error),
        }
    }
}

impl<T, E> Outcome<T, E> {
    /// Converts into the tagged record used for encoding.
    ///
    /// The payload is moved as is; no transformation is applied.
    #[inline]
    pub fn to_serializable(self) -> Tagged<T, E> {
        match self {
            Self::Ok(value) => Tagged::Success { value },
            Self::Err(error) => Tagged::Failure { error },
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Tagged<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.to_serializable()
    }
}

impl<T, E> From<Tagged<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(tagged: Tagged<T, E>) -> Self {
        tagged.into_outcome()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
const OK_FIELD: &str = "ok";
#[cfg(feature = "serde")]
const VALUE_FIELD: &str = "value";
#[cfg(feature = "serde")]
const ERROR_FIELD: &str = "error";
#[cfg(feature = "serde")]
const FIELDS: &[&str] = &[OK_FIELD, VALUE_FIELD, ERROR_FIELD];

#[cfg(feature = "serde")]
impl<T, E> serde::Serialize for Tagged<T, E>
where
    T: serde::Serialize,
    E: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut record = serializer.serialize_struct("Tagged", 2)?;
        match self {
            Self::Success { value } => {
                record.serialize_field(OK_FIELD, &true)?;
                record.serialize_field(VALUE_FIELD, value)?;
            }
            Self::Failure { error } => {
                record.serialize_field(OK_FIELD, &false)?;
                record.serialize_field(ERROR_FIELD, error)?;
            }
        }
        record.end()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(field_identifier)]
enum Field {
    #[serde(rename = "ok")]
    Flag,
    #[serde(rename = "value")]
    Value,
    #[serde(rename = "error")]
    Error,
    #[serde(other)]
    Ignored,
}

#[cfg(feature = "serde")]
struct TaggedVisitor<T, E> {
    marker: std::marker::PhantomData<fn() -> Tagged<T, E>>,
}

#[cfg(feature = "serde")]
impl<'de, T, E> serde::de::Visitor<'de> for TaggedVisitor<T, E>
where
    T: serde::Deserialize<'de>,
    E: serde::Deserialize<'de>,
{
    type Value = Tagged<T, E>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a record with an `ok` flag and a `value` or `error` field")
    }

    fn visit_seq<A>(self, mut sequence: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        use serde::de::Error;

        let ok: bool = sequence
            .next_element()?
            .ok_or_else(|| A::Error::invalid_length(0, &self))?;
        if ok {
            let value = sequence
                .next_element()?
                .ok_or_else(|| A::Error::invalid_length(1, &self))?;
            Ok(Tagged::Success { value })
        } else {
            let error = sequence
                .next_element()?
                .ok_or_else(|| A::Error::invalid_length(1, &self))?;
            Ok(Tagged::Failure { error })
        }
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        use serde::de::Error;

        let mut ok: Option<bool> = None;
        let mut value: Option<T> = None;
        let mut error: Option<E> = None;

        while let Some(key) = map.next_key::<Field>()? {
            match key {
                Field::Flag => {
                    if ok.is_some() {
                        return Err(Error::duplicate_field(OK_FIELD));
                    }
                    ok = Some(map.next_value()?);
                }
                Field::Value => {
                    if value.is_some() {
                        return Err(Error::duplicate_field(VALUE_FIELD));
                    }
                    value = Some(map.next_value()?);
                }
                Field::Error => {
                    if error.is_some() {
                        return Err(Error::duplicate_field(ERROR_FIELD));
                    }
                    error = Some(map.next_value()?);
                }
                Field::Ignored => {
                    map.next_value::<serde::de::IgnoredAny>()?;
                }
            }
        }

        match (ok, value, error) {
            (None, _, _) => Err(Error::missing_field(OK_FIELD)),
            (Some(true), Some(value), None) => Ok(Tagged::Success { value }),
            (Some(true), None, _) => Err(Error::missing_field(VALUE_FIELD)),
            (Some(true), Some(_), Some(_)) => {
                Err(Error::unknown_field(ERROR_FIELD, &[OK_FIELD, VALUE_FIELD]))
            }
            (Some(false), None, Some(error)) => Ok(Tagged::Failure { error }),
            (Some(false), _, None) => Err(Error::missing_field(ERROR_FIELD)),
            (Some(false), Some(_), Some(_)) => {
                Err(Error::unknown_field(VALUE_FIELD, &[OK_FIELD, ERROR_FIELD]))
            }
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T, E> serde::Deserialize<'de> for Tagged<T, E>
where
    T: serde::Deserialize<'de>,
    E: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_struct(
            "Tagged",
            FIELDS,
            TaggedVisitor {
                marker: std::marker::PhantomData,
            },
        )
    }
}

#[cfg(feature = "serde")]
impl<T, E> serde::Serialize for Outcome<T, E>
where
    T: serde::Serialize,
    E: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_ref().to_serializable().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, E> serde::Deserialize<'de> for Outcome<T, E>
where
    T: serde::Deserialize<'de>,
    E: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Tagged::deserialize(deserializer).map(Tagged::into_outcome)
    }
}
