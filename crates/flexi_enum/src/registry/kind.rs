//! Factory table for open-enum kinds.
//!
//! Every kind declared with [`flexi_enum!`](crate::flexi_enum) submits a
//! [`KindDef`] through `inventory`. The table lets the registry build members
//! of a kind it only knows by identifier (configuration documents), without
//! reflection.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::error::BoxError;
use crate::member::{FlexiEnum, Kind, Member};

/// Construction capability of one kind.
#[derive(Debug, Clone, Copy)]
pub struct KindDef {
	/// Identity of the kind.
	pub kind: Kind,
	/// Returns the compile-time default members.
	pub defaults: fn() -> Vec<Member>,
	/// Builds a member from a runtime name.
	pub construct: fn(&str) -> Result<Member, BoxError>,
}

inventory::collect!(KindDef);

impl KindDef {
	/// Builds the definition of a typed kind.
	pub const fn of<T: FlexiEnum>() -> Self {
		Self {
			kind: T::KIND,
			defaults: defaults_of::<T>,
			construct: construct_of::<T>,
		}
	}
}

fn defaults_of<T: FlexiEnum>() -> Vec<Member> {
	T::DEFAULTS.iter().map(|d| d.as_member().clone()).collect()
}

fn construct_of<T: FlexiEnum>(name: &str) -> Result<Member, BoxError> {
	T::construct(name).map(T::into_member)
}

static KIND_INDEX: LazyLock<FxHashMap<&'static str, &'static KindDef>> = LazyLock::new(|| {
	let mut map = FxHashMap::default();
	for def in inventory::iter::<KindDef> {
		if let Some(prev) = map.insert(def.kind.id(), def) {
			tracing::warn!(kind = %prev.kind, "kind submitted more than once; keeping the last submission");
		}
	}
	map
});

/// Finds a submitted kind by identifier.
pub fn find_kind(id: &str) -> Option<&'static KindDef> {
	KIND_INDEX.get(id).copied()
}

/// Returns every submitted kind, sorted by identifier.
pub fn all_kinds() -> Vec<&'static KindDef> {
	let mut kinds: Vec<_> = KIND_INDEX.values().copied().collect();
	kinds.sort_by_key(|d| d.kind);
	kinds
}
