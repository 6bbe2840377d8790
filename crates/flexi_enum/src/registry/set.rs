//! Per-kind member storage with atomic publication.
//!
//! # Invariants
//!
//! - A [`MemberSet`] holds at most one member per name.
//! - Readers of a [`KindSlot`] always observe a complete set; writers publish
//!   whole sets with compare-and-swap, so concurrent inserts are never lost.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use arc_swap::ArcSwap;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::member::Member;

/// Name-indexed set of members of one kind, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemberSet {
	by_name: IndexMap<String, Member, FxBuildHasher>,
}

impl MemberSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts `member` unless a member with the same name is present.
	///
	/// Returns the member now stored under that name.
	pub fn insert(&mut self, member: Member) -> &Member {
		self.by_name.entry(member.name().to_owned()).or_insert(member)
	}

	pub fn get(&self, name: &str) -> Option<&Member> {
		self.by_name.get(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.by_name.contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.by_name.len()
	}

	pub fn is_empty(&self) -> bool {
		self.by_name.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Member> {
		self.by_name.values()
	}
}

impl Extend<Member> for MemberSet {
	fn extend<I: IntoIterator<Item = Member>>(&mut self, iter: I) {
		for member in iter {
			self.insert(member);
		}
	}
}

/// Registry state of one kind.
pub(crate) struct KindSlot {
	members: ArcSwap<MemberSet>,
	defaults_loaded: AtomicBool,
}

impl KindSlot {
	pub(crate) fn new() -> Self {
		Self {
			members: ArcSwap::from_pointee(MemberSet::new()),
			defaults_loaded: AtomicBool::new(false),
		}
	}

	pub(crate) fn snapshot(&self) -> Arc<MemberSet> {
		self.members.load_full()
	}

	pub(crate) fn defaults_loaded(&self) -> bool {
		self.defaults_loaded.load(Ordering::Acquire)
	}

	pub(crate) fn set_defaults_loaded(&self, loaded: bool) {
		self.defaults_loaded.store(loaded, Ordering::Release);
	}

	/// Inserts one member, returning the stored member for its name.
	pub(crate) fn insert(&self, member: Member) -> Member {
		loop {
			let old = self.members.load_full();
			if let Some(existing) = old.get(member.name()) {
				return existing.clone();
			}

			let mut next = MemberSet::clone(&old);
			next.insert(member.clone());

			let prev = self.members.compare_and_swap(&old, Arc::new(next));
			if Arc::ptr_eq(&prev, &old) {
				return member;
			}
			// Lost the race; retry against the newer set.
		}
	}

	/// Merges `incoming` into the current set. Returns how many names were new.
	pub(crate) fn merge(&self, incoming: &MemberSet) -> usize {
		loop {
			let old = self.members.load_full();
			let fresh: Vec<&Member> = incoming.iter().filter(|m| !old.contains(m.name())).collect();
			if fresh.is_empty() {
				return 0;
			}

			let mut next = MemberSet::clone(&old);
			next.extend(fresh.iter().map(|m| (*m).clone()));

			let prev = self.members.compare_and_swap(&old, Arc::new(next));
			if Arc::ptr_eq(&prev, &old) {
				return fresh.len();
			}
		}
	}

	/// Publishes `set` in place of the current members.
	pub(crate) fn replace(&self, set: MemberSet) {
		self.members.store(Arc::new(set));
	}
}
