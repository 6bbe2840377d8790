use crate::member::Kind;

/// Boxed cause carried by construction failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Coarse classification of a [`FlexiEnumError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// A member name was empty.
	InvalidName,
	/// A kind's factory failed or no factory was registered.
	Construction,
	/// A lookup found no member with the requested name.
	UnknownName,
	/// A configuration document could not be parsed.
	Config,
}

/// Failure signal for every registry, construction and lookup operation.
#[derive(Debug, thiserror::Error)]
pub enum FlexiEnumError {
	/// Member names must be non-empty.
	#[error("Name cannot be null or empty")]
	InvalidName,

	/// The factory for `kind` rejected the name, or no factory exists for it.
	#[error("Failed to create instance of {kind}")]
	Construction {
		kind: String,
		#[source]
		source: BoxError,
	},

	/// No member named `name` is registered for `kind`.
	#[error("Invalid value \"{name}\" for enum {kind}")]
	UnknownName { kind: Kind, name: String },

	/// Malformed configuration document.
	#[error("invalid flexi-enum config: {0}")]
	Config(String),
}

impl FlexiEnumError {
	pub(crate) fn construction(kind: impl Into<String>, source: impl Into<BoxError>) -> Self {
		Self::Construction {
			kind: kind.into(),
			source: source.into(),
		}
	}

	pub(crate) fn unknown_name(kind: Kind, name: &str) -> Self {
		Self::UnknownName { kind, name: name.to_owned() }
	}

	/// Returns the classification tag of this error.
	pub fn kind_tag(&self) -> ErrorKind {
		match self {
			Self::InvalidName => ErrorKind::InvalidName,
			Self::Construction { .. } => ErrorKind::Construction,
			Self::UnknownName { .. } => ErrorKind::UnknownName,
			Self::Config(_) => ErrorKind::Config,
		}
	}
}

pub type Result<T, E = FlexiEnumError> = std::result::Result<T, E>;
