//! Decimal amounts on the wire.
//!
//! Amounts are written as JSON numbers. On read, numbers and numeric strings
//! are accepted, and a blank string stands for "no value" (form inputs submit
//! empty text for untouched optional fields).

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serializer, de::Error};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Amount(#[serde(with = "rust_decimal::serde::float")] Decimal),
    Text(String),
}

impl RawAmount {
    fn into_decimal<E: Error>(self) -> Result<Option<Decimal>, E> {
        match self {
            Self::Amount(amount) => Ok(Some(amount)),
            Self::Text(text) if text.trim().is_empty() => Ok(None),
            Self::Text(text) => Err(E::custom(format!("`{text}` is not a decimal amount"))),
        }
    }
}

pub(super) mod required {
    use super::{Decimal, Deserialize, Deserializer, Error, RawAmount, Serializer};

    pub(crate) fn serialize<S: Serializer>(
        value: &Decimal,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(value, serializer)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Decimal, D::Error> {
        RawAmount::deserialize(deserializer)?
            .into_decimal()?
            .ok_or_else(|| D::Error::custom("amount is required"))
    }
}

pub(super) mod optional {
    use super::{Decimal, Deserialize, Deserializer, RawAmount, Serializer};

    #[expect(clippy::ref_option, reason = "signature is dictated by serde(with)")]
    pub(crate) fn serialize<S: Serializer>(
        value: &Option<Decimal>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float_option::serialize(value, serializer)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Decimal>, D::Error> {
        Option::<RawAmount>::deserialize(deserializer)?.map_or(Ok(None), RawAmount::into_decimal)
    }
}
