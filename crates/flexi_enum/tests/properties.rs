//! Registry and codec properties over generated names.

use std::collections::BTreeSet;

use flexi_enum::codec::{self, DecodePolicy};
use flexi_enum::{FlexiEnum, FlexiEnumRegistry, flexi_enum};
use proptest::prelude::*;

flexi_enum! {
	pub struct Color {
		RED = "RED",
		GREEN = "GREEN",
	}
}

fn name() -> impl Strategy<Value = String> {
	"[A-Za-z][A-Za-z0-9_]{0,11}"
}

fn sorted_names(registry: &FlexiEnumRegistry) -> BTreeSet<String> {
	registry.values::<Color>().iter().map(|c| c.name().to_owned()).collect()
}

fn defaults() -> BTreeSet<String> {
	Color::DEFAULTS.iter().map(|c| c.name().to_owned()).collect()
}

proptest! {
	#[test]
	fn adding_twice_keeps_one_member(n in name()) {
		let registry = FlexiEnumRegistry::new();
		registry.add_enum::<Color>(&n).unwrap();
		registry.add_enum::<Color>(&n).unwrap();
		let matching = registry.values::<Color>().iter().filter(|c| c.name() == n).count();
		prop_assert_eq!(matching, 1);
	}

	#[test]
	fn decode_inverts_encode(names in prop::collection::vec(name(), 0..8)) {
		let registry = FlexiEnumRegistry::new();
		registry.add_enums::<Color, _, _>(&names).unwrap();
		for member in registry.values::<Color>() {
			let decoded = codec::decode::<Color>(&registry, codec::encode(&member), DecodePolicy::Strict).unwrap();
			prop_assert_eq!(decoded, Some(member));
		}
	}

	#[test]
	fn clear_restores_exactly_the_defaults(names in prop::collection::vec(name(), 0..8)) {
		let registry = FlexiEnumRegistry::new();
		registry.add_enums::<Color, _, _>(&names).unwrap();
		registry.clear_enums::<Color>();
		prop_assert_eq!(sorted_names(&registry), defaults());
	}

	#[test]
	fn replace_is_defaults_plus_listed(
		before in prop::collection::vec(name(), 0..6),
		listed in prop::collection::vec(name(), 0..6),
	) {
		let registry = FlexiEnumRegistry::new();
		registry.add_enums::<Color, _, _>(&before).unwrap();
		registry.replace_enums::<Color, _, _>(&listed).unwrap();

		let mut expected = defaults();
		expected.extend(listed.iter().cloned());
		prop_assert_eq!(sorted_names(&registry), expected);
	}

	#[test]
	fn unknown_names_decode_to_none_only_when_lenient(n in name()) {
		let registry = FlexiEnumRegistry::new();
		registry.load_default_enums::<Color>();
		prop_assume!(!registry.contains::<Color>(&n));

		prop_assert!(codec::decode::<Color>(&registry, &n, DecodePolicy::Strict).is_err());
		prop_assert_eq!(codec::decode::<Color>(&registry, &n, DecodePolicy::Lenient).unwrap(), None);
		prop_assert_eq!(codec::decode::<Color>(&registry, "", DecodePolicy::Strict).unwrap(), None);
	}
}
