//! Open enumerations.
//!
//! A kind declares default members at compile time, like enum constants, and
//! accepts further members at runtime. Members are compared by kind and name,
//! stored per kind in a [`FlexiEnumRegistry`], and serialized by name.
//!
//! ```ignore
//! use flexi_enum::{FlexiEnumRegistry, flexi_enum};
//!
//! flexi_enum! {
//!     pub struct EntityName {
//!         GLOBAL = "GLOBAL",
//!     }
//! }
//!
//! let registry = FlexiEnumRegistry::global();
//! let local = registry.add_enum::<EntityName>("LOCAL")?;
//! assert_eq!(registry.value_of::<EntityName>("GLOBAL")?, Some(EntityName::GLOBAL));
//! assert_eq!(serde_json::to_string(&local)?, "\"LOCAL\"");
//! ```
//!
//! # Modules
//!
//! - [`member`] - [`Member`], [`Kind`] and the [`FlexiEnum`] trait
//! - [`registry`] - per-kind member storage and the kind factory table
//! - [`codec`] - serde hooks and decode policies
//! - [`config`] - member sets loaded from TOML or JSON

pub mod codec;
pub mod config;
pub mod error;
mod macros;
pub mod member;
pub mod registry;

pub use codec::{DecodePolicy, Decoder, Lenient, SeqDecoder};
pub use config::{ApplyMode, FlexiEnumConfig, KindConfig};
pub use error::{BoxError, ErrorKind, FlexiEnumError, Result};
pub use member::{FlexiEnum, Kind, Member};
pub use registry::{FlexiEnumRegistry, KindDef, MemberSet, all_kinds, find_kind};

#[doc(hidden)]
pub mod __private {
	pub use {inventory, serde};
}
