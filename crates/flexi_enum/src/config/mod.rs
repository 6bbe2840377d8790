//! Declarative member sets.
//!
//! A configuration document lists runtime members per kind identifier:
//!
//! ```toml
//! [kinds."my_app::EntityName"]
//! mode = "replace"
//! names = ["LOCAL", "REGIONAL"]
//! ```
//!
//! Kinds are resolved through the [`KindDef`](crate::KindDef) table, so only
//! kinds declared with [`flexi_enum!`](crate::flexi_enum) can be configured.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{FlexiEnumError, Result};
use crate::registry::{FlexiEnumRegistry, find_kind};

/// How a kind's names are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplyMode {
	/// Add the names to the current members.
	#[default]
	Add,
	/// Reset the kind to its defaults plus the names.
	Replace,
}

/// Names configured for one kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KindConfig {
	#[serde(default)]
	pub mode: ApplyMode,
	#[serde(default)]
	pub names: Vec<String>,
}

/// Member sets keyed by kind identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlexiEnumConfig {
	#[serde(default)]
	pub kinds: BTreeMap<String, KindConfig>,
}

impl FlexiEnumConfig {
	/// Parses a TOML document.
	#[cfg(feature = "toml")]
	pub fn from_toml_str(input: &str) -> Result<Self> {
		toml::from_str(input).map_err(|e| FlexiEnumError::Config(e.to_string()))
	}

	/// Parses a JSON document.
	pub fn from_json_str(input: &str) -> Result<Self> {
		serde_json::from_str(input).map_err(|e| FlexiEnumError::Config(e.to_string()))
	}
}

impl FlexiEnumRegistry {
	/// Applies every kind in `config`, in identifier order.
	///
	/// Stops at the first failure; kinds applied before it keep their changes.
	/// Unknown kind identifiers fail with [`FlexiEnumError::Construction`].
	pub fn apply_config(&self, config: &FlexiEnumConfig) -> Result<()> {
		for (id, kind_config) in &config.kinds {
			let def = find_kind(id).ok_or_else(|| FlexiEnumError::construction(id.as_str(), "no kind registered under this identifier"))?;
			match kind_config.mode {
				ApplyMode::Add => self.add_all_for(def, &kind_config.names)?,
				ApplyMode::Replace => self.replace_for(def, &kind_config.names)?,
			}
			tracing::debug!(kind = %def.kind, mode = ?kind_config.mode, names = kind_config.names.len(), "applied flexi-enum config");
		}
		Ok(())
	}
}
