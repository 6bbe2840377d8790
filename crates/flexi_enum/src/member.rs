//! Open-enum members and the trait implemented by every kind.
//!
//! A [`Member`] is the erased value: a [`Kind`] plus a name. Concrete kinds are
//! newtypes around `Member` implementing [`FlexiEnum`], normally generated by
//! [`flexi_enum!`](crate::flexi_enum).

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{BoxError, FlexiEnumError, Result};

/// Stable identifier of an open-enum kind.
///
/// Holds the fully qualified path of the declaring type, so two types with the
/// same name in different modules are distinct kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Kind(&'static str);

impl Kind {
	/// Creates a kind from its identifier.
	pub const fn new(id: &'static str) -> Self {
		Self(id)
	}

	/// Returns the identifier string.
	pub const fn id(self) -> &'static str {
		self.0
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.0)
	}
}

/// A named value of one kind.
///
/// Equality compares kind and name; hashing uses the name only.
#[derive(Debug, Clone)]
pub struct Member {
	kind: Kind,
	name: Cow<'static, str>,
}

impl Member {
	/// Creates a member, rejecting empty names.
	pub fn new(kind: Kind, name: impl Into<Cow<'static, str>>) -> Result<Self> {
		let name = name.into();
		if name.is_empty() {
			return Err(FlexiEnumError::InvalidName);
		}
		Ok(Self { kind, name })
	}

	/// Creates a member in a `const` context.
	///
	/// Panics on an empty name, which turns a blank default into a compile
	/// error:
	///
	/// ```compile_fail
	/// use flexi_enum::{Kind, Member};
	///
	/// const BLANK: Member = Member::from_static(Kind::new("blank"), "");
	/// ```
	pub const fn from_static(kind: Kind, name: &'static str) -> Self {
		if name.is_empty() {
			panic!("Name cannot be null or empty");
		}
		Self {
			kind,
			name: Cow::Borrowed(name),
		}
	}

	/// Kind this member belongs to.
	pub fn kind(&self) -> Kind {
		self.kind
	}

	/// Registered name.
	pub fn name(&self) -> &str {
		&self.name
	}
}

impl PartialEq for Member {
	fn eq(&self, other: &Self) -> bool {
		self.kind == other.kind && self.name == other.name
	}
}

impl Eq for Member {}

impl Hash for Member {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.name.hash(state);
	}
}

impl fmt::Display for Member {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.name)
	}
}

/// A concrete open-enum kind.
///
/// Implementors are thin wrappers over [`Member`]. The registry stores erased
/// members and rebuilds typed values with [`FlexiEnum::from_member`].
pub trait FlexiEnum: Clone + fmt::Debug + Send + Sync + 'static {
	/// Identity of this kind.
	const KIND: Kind;

	/// Members declared at compile time.
	const DEFAULTS: &'static [Self];

	/// Wraps an erased member of this kind.
	fn from_member(member: Member) -> Self;

	/// Borrows the erased member.
	fn as_member(&self) -> &Member;

	/// Builds a new member from a runtime name.
	///
	/// Override to restrict the accepted names. Errors surface from the
	/// registry as [`FlexiEnumError::Construction`].
	fn construct(name: &str) -> Result<Self, BoxError> {
		Ok(Self::from_member(Member::new(Self::KIND, name.to_owned())?))
	}

	fn name(&self) -> &str {
		self.as_member().name()
	}

	fn kind(&self) -> Kind {
		Self::KIND
	}

	fn into_member(self) -> Member {
		self.as_member().clone()
	}
}
