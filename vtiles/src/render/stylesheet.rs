//! The stylesheet: which layers a tile contains and where their features come from.
//!
//! ```yaml
//! extent: 4096        # optional, tile coordinate space
//! layers:
//!   - name: boundary
//!     datasource: outline
//!   - name: label
//!     datasource: center
//! ```

use anyhow::{Result, ensure};
use serde::Deserialize;
use std::{collections::HashSet, fs, path::Path};
use vtiles_core::PyramidError;
use vtiles_derive::context;

/// Extent used when the stylesheet does not set one.
pub const DEFAULT_EXTENT: u32 = 4096;
/// Largest accepted extent.
pub const MAX_EXTENT: u32 = 1 << 16;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Stylesheet {
	#[serde(default = "default_extent")]
	pub extent: u32,
	pub layers: Vec<StyleLayer>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StyleLayer {
	pub name: String,
	pub datasource: String,
}

fn default_extent() -> u32 {
	DEFAULT_EXTENT
}

impl Stylesheet {
	#[context("Failed to load stylesheet {path:?}")]
	pub fn from_path(path: &Path) -> Result<Stylesheet> {
		log::trace!("load stylesheet {path:?}");
		let text = fs::read_to_string(path).map_err(|err| PyramidError::render(format!("cannot read stylesheet: {err}")))?;
		Stylesheet::parse(&text)
	}

	/// Parses and checks a YAML stylesheet.
	pub fn parse(text: &str) -> Result<Stylesheet> {
		let stylesheet: Stylesheet =
			serde_yaml_ng::from_str(text).map_err(|err| PyramidError::render(format!("malformed stylesheet: {err}")))?;

		ensure!(
			!stylesheet.layers.is_empty(),
			PyramidError::render("stylesheet does not define any layers")
		);
		ensure!(
			(1..=MAX_EXTENT).contains(&stylesheet.extent),
			PyramidError::render(format!(
				"stylesheet extent must be between 1 and {MAX_EXTENT} (got {})",
				stylesheet.extent
			))
		);

		let mut names = HashSet::new();
		for layer in &stylesheet.layers {
			ensure!(
				names.insert(layer.name.as_str()),
				PyramidError::render(format!("layer {:?} is defined more than once", layer.name))
			);
		}

		Ok(stylesheet)
	}
}
