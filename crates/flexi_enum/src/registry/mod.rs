//! Process-wide store of open-enum members, partitioned by kind.
//!
//! # Role
//!
//! [`FlexiEnumRegistry`] owns one [`MemberSet`] per [`Kind`]. Typed
//! operations take the kind as a type parameter; the `*_for` and `*_of_kind`
//! operations take a [`KindDef`] or [`Kind`] and back the typed ones.
//!
//! # Invariants
//!
//! - Names are unique within a kind.
//! - Defaults load at most once implicitly (first add), and once per explicit
//!   [`FlexiEnumRegistry::load_default_enums`] or
//!   [`FlexiEnumRegistry::clear_enums`] call.
//! - [`FlexiEnumRegistry::replace_enums`] publishes its set only after every
//!   name was constructed.

use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

mod kind;
mod set;

pub use kind::{KindDef, all_kinds, find_kind};
use set::KindSlot;
pub use set::MemberSet;

use crate::error::{FlexiEnumError, Result};
use crate::member::{FlexiEnum, Kind, Member};

static GLOBAL: OnceLock<FlexiEnumRegistry> = OnceLock::new();

/// Thread-safe store mapping each kind to its known members.
#[derive(Default)]
pub struct FlexiEnumRegistry {
	slots: RwLock<FxHashMap<Kind, Arc<KindSlot>>>,
}

impl std::fmt::Debug for FlexiEnumRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FlexiEnumRegistry").field("kinds", &self.kinds()).finish()
	}
}

impl FlexiEnumRegistry {
	/// Creates an empty, independent registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the process-wide registry, creating it on first use.
	///
	/// Serde integration of declared kinds resolves names against this
	/// instance.
	pub fn global() -> &'static Self {
		GLOBAL.get_or_init(|| {
			tracing::debug!("initializing global flexi-enum registry");
			Self::new()
		})
	}

	/// Kinds that have a member set in this registry.
	pub fn kinds(&self) -> Vec<Kind> {
		let mut kinds: Vec<Kind> = self.slots.read().keys().copied().collect();
		kinds.sort();
		kinds
	}

	fn existing_slot(&self, kind: Kind) -> Option<Arc<KindSlot>> {
		self.slots.read().get(&kind).cloned()
	}

	fn slot(&self, kind: Kind) -> Arc<KindSlot> {
		if let Some(slot) = self.existing_slot(kind) {
			return slot;
		}

		// Double-check under the write lock; another thread may have created it.
		let mut slots = self.slots.write();
		Arc::clone(slots.entry(kind).or_insert_with(|| Arc::new(KindSlot::new())))
	}

	fn load_into_slot(def: &KindDef, slot: &KindSlot) {
		let mut defaults = MemberSet::new();
		collect_defaults(def, &mut defaults);
		let added = slot.merge(&defaults);
		slot.set_defaults_loaded(true);
		tracing::trace!(kind = %def.kind, added, "loaded default members");
	}

	fn build(def: &KindDef, name: &str) -> Result<Member> {
		let member = (def.construct)(name).map_err(|e| {
			tracing::error!(kind = %def.kind, name, error = %e, "member construction failed");
			FlexiEnumError::construction(def.kind.id(), e)
		})?;
		if member.kind() != def.kind {
			return Err(FlexiEnumError::construction(
				def.kind.id(),
				format!("factory produced a member of kind {}", member.kind()),
			));
		}
		Ok(member)
	}

	/// Ensures the defaults of `def` are present.
	pub fn load_defaults_for(&self, def: &KindDef) {
		let slot = self.slot(def.kind);
		Self::load_into_slot(def, &slot);
	}

	/// Registers `name` under `def`, loading its defaults first if needed.
	pub fn add_for(&self, def: &KindDef, name: &str) -> Result<Member> {
		if name.is_empty() {
			tracing::error!(kind = %def.kind, "Name cannot be null or empty");
			return Err(FlexiEnumError::InvalidName);
		}

		let slot = self.slot(def.kind);
		if !slot.defaults_loaded() {
			Self::load_into_slot(def, &slot);
		}

		let member = Self::build(def, name)?;
		Ok(slot.insert(member))
	}

	/// Registers each name in order, stopping at the first failure.
	///
	/// Names registered before the failure stay registered.
	pub fn add_all_for<I, S>(&self, def: &KindDef, names: I) -> Result<()>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		for name in names {
			self.add_for(def, name.as_ref())?;
		}
		Ok(())
	}

	/// Swaps the members of `def` for its defaults plus `names`.
	///
	/// On error the previous members are kept.
	pub fn replace_for<I, S>(&self, def: &KindDef, names: I) -> Result<()>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut fresh = MemberSet::new();
		collect_defaults(def, &mut fresh);
		for name in names {
			fresh.insert(Self::build(def, name.as_ref())?);
		}

		let slot = self.slot(def.kind);
		let len = fresh.len();
		slot.replace(fresh);
		slot.set_defaults_loaded(true);
		tracing::debug!(kind = %def.kind, len, "replaced members");
		Ok(())
	}

	/// Drops every runtime member of `def`, leaving only its defaults.
	pub fn clear_for(&self, def: &KindDef) {
		let slot = self.slot(def.kind);
		slot.set_defaults_loaded(false);

		let mut defaults = MemberSet::new();
		collect_defaults(def, &mut defaults);
		slot.replace(defaults);
		slot.set_defaults_loaded(true);
		tracing::debug!(kind = %def.kind, "cleared members");
	}

	/// Looks up a member of `kind` by name.
	///
	/// An empty name yields `Ok(None)`; an unregistered name is an error.
	pub fn value_of_kind(&self, kind: Kind, name: &str) -> Result<Option<Member>> {
		if name.is_empty() {
			return Ok(None);
		}
		self.existing_slot(kind)
			.and_then(|slot| slot.snapshot().get(name).cloned())
			.map(Some)
			.ok_or_else(|| FlexiEnumError::unknown_name(kind, name))
	}

	/// Returns the members currently registered for `kind`.
	///
	/// Does not load defaults.
	pub fn values_of_kind(&self, kind: Kind) -> Vec<Member> {
		self.existing_slot(kind)
			.map(|slot| slot.snapshot().iter().cloned().collect())
			.unwrap_or_default()
	}

	/// Ensures the compile-time defaults of `T` are registered.
	pub fn load_default_enums<T: FlexiEnum>(&self) {
		self.load_defaults_for(&KindDef::of::<T>());
	}

	/// Merges the compile-time defaults of `T` into `set`.
	pub fn load_default_enums_into<T: FlexiEnum>(&self, set: &mut MemberSet) {
		collect_defaults(&KindDef::of::<T>(), set);
	}

	/// Registers a runtime member of `T` and returns the stored instance.
	pub fn add_enum<T: FlexiEnum>(&self, name: &str) -> Result<T> {
		self.add_for(&KindDef::of::<T>(), name).map(T::from_member)
	}

	/// Registers several runtime members of `T`; see [`Self::add_all_for`].
	pub fn add_enums<T, I, S>(&self, names: I) -> Result<()>
	where
		T: FlexiEnum,
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.add_all_for(&KindDef::of::<T>(), names)
	}

	/// Resets `T` to its defaults plus `names`; see [`Self::replace_for`].
	pub fn replace_enums<T, I, S>(&self, names: I) -> Result<()>
	where
		T: FlexiEnum,
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.replace_for(&KindDef::of::<T>(), names)
	}

	/// Resets `T` to its defaults.
	pub fn clear_enums<T: FlexiEnum>(&self) {
		self.clear_for(&KindDef::of::<T>());
	}

	/// Looks up a member of `T`; see [`Self::value_of_kind`].
	pub fn value_of<T: FlexiEnum>(&self, name: &str) -> Result<Option<T>> {
		Ok(self.value_of_kind(T::KIND, name)?.map(T::from_member))
	}

	/// Returns every registered member of `T`.
	pub fn values<T: FlexiEnum>(&self) -> Vec<T> {
		self.values_of_kind(T::KIND).into_iter().map(T::from_member).collect()
	}

	/// Whether `name` is registered for `T`.
	pub fn contains<T: FlexiEnum>(&self, name: &str) -> bool {
		self.existing_slot(T::KIND).is_some_and(|slot| slot.snapshot().contains(name))
	}

	/// Number of registered members of `T`.
	pub fn count<T: FlexiEnum>(&self) -> usize {
		self.existing_slot(T::KIND).map_or(0, |slot| slot.snapshot().len())
	}
}

/// Copies the defaults of `def` into `into`, skipping members of another kind.
///
/// Empty names cannot reach this point: [`Member::from_static`] rejects them
/// during const evaluation.
fn collect_defaults(def: &KindDef, into: &mut MemberSet) {
	for member in (def.defaults)() {
		if member.kind() != def.kind {
			tracing::error!(kind = %def.kind, found = %member.kind(), name = member.name(), "Failed to load default enum value: foreign kind");
			continue;
		}
		into.insert(member);
	}
}
