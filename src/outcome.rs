use std::fmt;

use serde::{
    de::{self, IgnoredAny, SeqAccess, Visitor},
    ser::SerializeTuple,
    Deserialize, Deserializer, Serialize, Serializer,
};

pub(crate) const SUCCESS_TAG: &str = "ok";
pub(crate) const FAILURE_TAG: &str = "error";

/// Result of an operation: either a successful value or an error payload.
///
/// There is no third state. Transformations never touch an existing
/// outcome in place, they consume it and produce a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    pub const fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub const fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Returns success payload, dropping a failure.
    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Returns failure payload, dropping a success.
    pub fn failure(self) -> Option<E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Tag used in the serialized tuple form.
    pub const fn tag(&self) -> &'static str {
        match self {
            Outcome::Success(_) => SUCCESS_TAG,
            Outcome::Failure(_) => FAILURE_TAG,
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

/// Serializes as a two element tagged tuple: `["ok", value]` or `["error", error]`.
impl<T, E> Serialize for Outcome<T, E>
where
    T: Serialize,
    E: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(self.tag())?;
        match self {
            Outcome::Success(value) => tuple.serialize_element(value)?,
            Outcome::Failure(error) => tuple.serialize_element(error)?,
        }
        tuple.end()
    }
}

struct OutcomeVisitor<T, E>(std::marker::PhantomData<fn() -> (T, E)>);

impl<'de, T, E> Visitor<'de> for OutcomeVisitor<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    type Value = Outcome<T, E>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "an [\"{}\", value] or [\"{}\", error] tuple",
            SUCCESS_TAG, FAILURE_TAG
        )
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let tag: String = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;

        let outcome = match tag.as_str() {
            SUCCESS_TAG => Outcome::Success(
                seq.next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?,
            ),
            FAILURE_TAG => Outcome::Failure(
                seq.next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?,
            ),
            other => {
                return Err(de::Error::unknown_variant(
                    other,
                    &[SUCCESS_TAG, FAILURE_TAG],
                ))
            }
        };

        if seq.next_element::<IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(3, &self));
        }

        Ok(outcome)
    }
}

impl<'de, T, E> Deserialize<'de> for Outcome<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_tuple(2, OutcomeVisitor(std::marker::PhantomData))
    }
}
