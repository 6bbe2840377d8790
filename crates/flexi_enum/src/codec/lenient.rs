//! Lenient decoding: unknown or empty names become `None`.
//!
//! Use [`Lenient<T>`] as a value type (including inside collections), or this
//! module as a field adapter:
//!
//! ```ignore
//! #[derive(Serialize, Deserialize)]
//! struct Entity {
//!     #[serde(with = "flexi_enum::codec::lenient", default)]
//!     scope: Option<EntityName>,
//! }
//! ```
//!
//! Numbers and booleans are resolved by their textual form. Arrays and
//! objects are skipped and yield `None`.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{DecodePolicy, decode, encode};
use crate::member::FlexiEnum;
use crate::registry::FlexiEnumRegistry;

/// A member of `T` decoded against the global registry without failing on
/// unknown names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Lenient<T>(pub Option<T>);

impl<T> Lenient<T> {
	pub fn into_inner(self) -> Option<T> {
		self.0
	}
}

impl<T> From<Option<T>> for Lenient<T> {
	fn from(value: Option<T>) -> Self {
		Self(value)
	}
}

impl<T: FlexiEnum> Serialize for Lenient<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serialize(&self.0, serializer)
	}
}

impl<'de, T: FlexiEnum> Deserialize<'de> for Lenient<T> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserialize(deserializer).map(Self)
	}
}

/// Writes the member name, or `null` for `None`.
pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
	T: FlexiEnum,
	S: Serializer,
{
	match value {
		Some(member) => serializer.serialize_str(encode(member)),
		None => serializer.serialize_none(),
	}
}

/// Reads any token and resolves its text leniently; `null` is `None`.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
	T: FlexiEnum,
	D: Deserializer<'de>,
{
	deserializer.deserialize_option(LenientVisitor(PhantomData))
}

struct LenientVisitor<T>(PhantomData<fn() -> T>);

impl<T: FlexiEnum> LenientVisitor<T> {
	fn resolve<E: de::Error>(text: &str) -> Result<Option<T>, E> {
		decode(FlexiEnumRegistry::global(), text, DecodePolicy::Lenient).map_err(E::custom)
	}

	fn skipped(what: &str) -> Option<T> {
		tracing::warn!(kind = %T::KIND, token = what, "Error deserializing flexi enum; using no value");
		None
	}
}

impl<'de, T: FlexiEnum> Visitor<'de> for LenientVisitor<T> {
	type Value = Option<T>;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "a member name of enum {} or null", T::KIND)
	}

	fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
		Ok(None)
	}

	fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
		Ok(None)
	}

	fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
		deserializer.deserialize_any(self)
	}

	fn visit_str<E: de::Error>(self, text: &str) -> Result<Self::Value, E> {
		Self::resolve(text)
	}

	fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
		Self::resolve(if v { "true" } else { "false" })
	}

	fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
		Self::resolve(&v.to_string())
	}

	fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
		Self::resolve(&v.to_string())
	}

	fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
		Self::resolve(&v.to_string())
	}

	fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
		while seq.next_element::<IgnoredAny>()?.is_some() {}
		Ok(Self::skipped("array"))
	}

	fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
		while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
		Ok(Self::skipped("object"))
	}
}
