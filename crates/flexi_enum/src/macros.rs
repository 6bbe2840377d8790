/// Declares an open-enum kind.
///
/// Generates a newtype over [`Member`](crate::Member) with one associated
/// constant per default member, implements [`FlexiEnum`](crate::FlexiEnum),
/// `Display`, `Serialize` and `Deserialize`, and submits the kind's
/// [`KindDef`](crate::KindDef) so it can be resolved by identifier.
///
/// ```ignore
/// flexi_enum! {
///     /// Scope an entity belongs to.
///     pub struct EntityName {
///         GLOBAL = "GLOBAL",
///     }
/// }
/// ```
///
/// Default names must be non-empty; a blank one fails to compile:
///
/// ```compile_fail
/// flexi_enum::flexi_enum! {
///     pub struct Blank {
///         EMPTY = "",
///     }
/// }
///
/// fn main() {}
/// ```
#[macro_export]
macro_rules! flexi_enum {
	(
		$(#[$attr:meta])*
		$vis:vis struct $name:ident {
			$(
				$(#[$default_attr:meta])*
				$default:ident = $value:literal
			),* $(,)?
		}
	) => {
		$(#[$attr])*
		#[derive(Clone, Debug, PartialEq, Eq, Hash)]
		$vis struct $name($crate::Member);

		#[allow(non_upper_case_globals)]
		impl $name {
			$(
				$(#[$default_attr])*
				pub const $default: $name =
					$name($crate::Member::from_static(<$name as $crate::FlexiEnum>::KIND, $value));
			)*

			/// Returns the member name.
			pub fn name(&self) -> &str {
				self.0.name()
			}
		}

		impl $crate::FlexiEnum for $name {
			const KIND: $crate::Kind = $crate::Kind::new(concat!(module_path!(), "::", stringify!($name)));
			const DEFAULTS: &'static [Self] = &[$($name::$default),*];

			fn from_member(member: $crate::Member) -> Self {
				Self(member)
			}

			fn as_member(&self) -> &$crate::Member {
				&self.0
			}
		}

		impl ::core::fmt::Display for $name {
			fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
				f.write_str(self.0.name())
			}
		}

		impl $crate::__private::serde::Serialize for $name {
			fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
			where
				S: $crate::__private::serde::Serializer,
			{
				$crate::codec::serialize(self, serializer)
			}
		}

		impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
			fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
			where
				D: $crate::__private::serde::Deserializer<'de>,
			{
				$crate::codec::deserialize(deserializer)
			}
		}

		// Evaluates every default at compile time, even unused ones.
		const _: &[$name] = <$name as $crate::FlexiEnum>::DEFAULTS;

		$crate::__private::inventory::submit! {
			$crate::KindDef::of::<$name>()
		}
	};
}
