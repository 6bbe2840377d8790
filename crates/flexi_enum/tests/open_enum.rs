//! End-to-end behavior of declared kinds against the global registry.

use flexi_enum::{ErrorKind, FlexiEnum, FlexiEnumRegistry, Lenient, flexi_enum};
use pretty_assertions::assert_eq;
use serial_test::serial;

flexi_enum! {
	/// Scope an entity belongs to.
	pub struct EntityName {
		GLOBAL = "GLOBAL",
	}
}

mod different_module {
	flexi_enum::flexi_enum! {
		pub struct EntityName {
			GLOBAL = "GLOBAL",
		}
	}
}

fn registry() -> &'static FlexiEnumRegistry {
	FlexiEnumRegistry::global()
}

#[test]
#[serial]
fn decodes_defaults_runtime_members_and_unknown_names() {
	let local = registry().add_enum::<EntityName>("LOCAL").unwrap();

	let global: EntityName = serde_json::from_str("\"GLOBAL\"").unwrap();
	assert_eq!(global, EntityName::GLOBAL);

	let invalid: Lenient<EntityName> = serde_json::from_str("\"INVALID\"").unwrap();
	assert_eq!(invalid.into_inner(), None);

	let list: Vec<EntityName> = serde_json::from_str(r#"["GLOBAL","LOCAL"]"#).unwrap();
	assert_eq!(list, [EntityName::GLOBAL, local]);
}

#[test]
#[serial]
fn concurrent_adds_from_two_threads() {
	let handles = ["THREAD1", "THREAD2"].map(|name| std::thread::spawn(move || registry().add_enum::<EntityName>(name).map(|_| ())));
	for handle in handles {
		handle.join().unwrap().unwrap();
	}
	assert!(registry().contains::<EntityName>("THREAD1"));
	assert!(registry().contains::<EntityName>("THREAD2"));
}

#[test]
#[serial]
fn unknown_lookup_names_value_and_kind() {
	registry().load_default_enums::<EntityName>();
	let err = registry().value_of::<EntityName>("INVALID").unwrap_err();
	assert_eq!(err.kind_tag(), ErrorKind::UnknownName);
	let message = err.to_string();
	assert!(message.contains("INVALID"));
	assert!(message.contains(EntityName::KIND.id()));
	assert_eq!(EntityName::KIND.id(), "open_enum::EntityName");
}

#[test]
#[serial]
fn same_default_name_in_two_kinds() {
	registry().load_default_enums::<EntityName>();
	registry().load_default_enums::<different_module::EntityName>();

	let a = registry().value_of::<EntityName>("GLOBAL").unwrap().unwrap();
	let b = registry().value_of::<different_module::EntityName>("GLOBAL").unwrap().unwrap();
	assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
	assert_ne!(a.into_member(), b.into_member());
}

#[test]
#[serial]
fn clear_after_runtime_adds_restores_defaults() {
	registry().add_enums::<EntityName, _, _>(["INDIA", "EUROPE"]).unwrap();
	registry().clear_enums::<EntityName>();
	assert_eq!(registry().values::<EntityName>(), [EntityName::GLOBAL]);
}

#[test]
#[serial]
fn empty_names_are_lenient_on_lookup_and_strict_on_add() {
	assert_eq!(registry().value_of::<EntityName>("").unwrap(), None);
	let lenient: Lenient<EntityName> = serde_json::from_str("\"\"").unwrap();
	assert_eq!(lenient.into_inner(), None);
	assert_eq!(registry().add_enum::<EntityName>("").unwrap_err().kind_tag(), ErrorKind::InvalidName);
}
