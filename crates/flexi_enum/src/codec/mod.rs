//! Name-based serde integration.
//!
//! Members encode as their name. Decoding resolves the name against a
//! registry for the statically known target kind; serde's typing supplies the
//! element kind for `Vec<T>`, arrays and `Option<T>`.
//!
//! Declared kinds implement `Deserialize` strictly against the global
//! registry: unknown and empty names are errors. [`Lenient`] and the
//! [`lenient`] field adapter map them to `None` instead, and [`Decoder`] /
//! [`SeqDecoder`] decode against an explicit registry with a chosen
//! [`DecodePolicy`].

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, DeserializeSeed, SeqAccess, Visitor};
use serde::{Deserializer, Serializer};

pub mod lenient;

pub use lenient::Lenient;

use crate::error::Result;
use crate::member::FlexiEnum;
use crate::registry::FlexiEnumRegistry;

/// What decoding does with a name the registry does not know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodePolicy {
	/// Report the lookup error.
	#[default]
	Strict,
	/// Log the lookup error and yield no value.
	Lenient,
}

/// Textual form of a member.
pub fn encode<T: FlexiEnum>(member: &T) -> &str {
	member.name()
}

/// Resolves `text` to a member of `T`.
///
/// Empty text yields `Ok(None)` under both policies.
pub fn decode<T: FlexiEnum>(registry: &FlexiEnumRegistry, text: &str, policy: DecodePolicy) -> Result<Option<T>> {
	match registry.value_of::<T>(text) {
		Ok(member) => Ok(member),
		Err(e) if policy == DecodePolicy::Lenient => {
			tracing::warn!(kind = %T::KIND, value = text, error = %e, "Error deserializing flexi enum; using no value");
			Ok(None)
		}
		Err(e) => Err(e),
	}
}

/// `Serialize` body shared by every declared kind.
pub fn serialize<T, S>(member: &T, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
	T: FlexiEnum,
	S: Serializer,
{
	serializer.serialize_str(encode(member))
}

/// `Deserialize` body shared by every declared kind.
pub fn deserialize<'de, T, D>(deserializer: D) -> std::result::Result<T, D::Error>
where
	T: FlexiEnum,
	D: Deserializer<'de>,
{
	Decoder::<T>::new(FlexiEnumRegistry::global(), DecodePolicy::Strict)
		.deserialize(deserializer)?
		.ok_or_else(|| de::Error::custom(format_args!("empty name for enum {}", T::KIND)))
}

/// Seed decoding one member of `T` against an explicit registry.
pub struct Decoder<'r, T> {
	registry: &'r FlexiEnumRegistry,
	policy: DecodePolicy,
	marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Decoder<'_, T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for Decoder<'_, T> {}

impl<'r, T: FlexiEnum> Decoder<'r, T> {
	pub fn new(registry: &'r FlexiEnumRegistry, policy: DecodePolicy) -> Self {
		Self {
			registry,
			policy,
			marker: PhantomData,
		}
	}

	/// Seed for a sequence of members with the same registry and policy.
	pub fn seq(self) -> SeqDecoder<'r, T> {
		SeqDecoder { element: self }
	}
}

impl<'de, T: FlexiEnum> DeserializeSeed<'de> for Decoder<'_, T> {
	type Value = Option<T>;

	fn deserialize<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_str(self)
	}
}

impl<T: FlexiEnum> Visitor<'_> for Decoder<'_, T> {
	type Value = Option<T>;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "a member name of enum {}", T::KIND)
	}

	fn visit_str<E: de::Error>(self, text: &str) -> std::result::Result<Self::Value, E> {
		decode::<T>(self.registry, text, self.policy).map_err(E::custom)
	}
}

/// Seed decoding a sequence of members of `T`.
///
/// Elements decode with the policy of the originating [`Decoder`]; the result
/// keeps one slot per input element.
pub struct SeqDecoder<'r, T> {
	element: Decoder<'r, T>,
}

impl<'de, T: FlexiEnum> DeserializeSeed<'de> for SeqDecoder<'_, T> {
	type Value = Vec<Option<T>>;

	fn deserialize<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_seq(self)
	}
}

impl<'de, T: FlexiEnum> Visitor<'de> for SeqDecoder<'_, T> {
	type Value = Vec<Option<T>>;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "a sequence of member names of enum {}", T::KIND)
	}

	fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
	where
		A: SeqAccess<'de>,
	{
		let mut out = Vec::with_capacity(seq.size_hint().unwrap_or(0));
		while let Some(member) = seq.next_element_seed(self.element)? {
			out.push(member);
		}
		Ok(out)
	}
}
