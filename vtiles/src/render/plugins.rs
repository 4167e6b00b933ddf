//! Datasource plugins available to a stylesheet.

use anyhow::{Result, bail};
use enumset::{EnumSet, EnumSetType};
use std::{
	collections::BTreeMap,
	fmt::Display,
	path::{Path, PathBuf},
};
use vtiles_core::PyramidError;

/// The datasources a stylesheet layer can draw from.
#[derive(Debug, EnumSetType, PartialOrd, Ord)]
pub enum DatasourceKind {
	/// One polygon covering the whole tile.
	Outline,
	/// One point in the middle of the tile.
	Center,
}

impl DatasourceKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			DatasourceKind::Outline => "outline",
			DatasourceKind::Center => "center",
		}
	}

	pub fn parse_str(value: &str) -> Option<DatasourceKind> {
		EnumSet::<DatasourceKind>::all().iter().find(|kind| kind.as_str() == value)
	}

	fn list_all() -> String {
		EnumSet::<DatasourceKind>::all()
			.iter()
			.map(|kind| kind.as_str())
			.collect::<Vec<_>>()
			.join(", ")
	}
}

impl Display for DatasourceKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The datasources registered for a run, keyed by kind.
///
/// A plugin is a file whose stem names the datasource it provides, e.g.
/// `plugins/outline.input`. The registry is built once before rendering starts and passed
/// by reference to the renderer.
#[derive(Debug, Default)]
pub struct PluginRegistry {
	plugins: BTreeMap<DatasourceKind, PathBuf>,
}

impl PluginRegistry {
	pub fn new() -> PluginRegistry {
		PluginRegistry::default()
	}

	/// Registers the plugin file at `path` and returns the datasource it provides.
	///
	/// Registering a second file for the same datasource replaces the first one.
	pub fn register(&mut self, path: &Path) -> Result<DatasourceKind> {
		log::trace!("register plugin {path:?}");

		if !path.is_file() {
			bail!(PyramidError::render(format!("plugin {path:?} does not exist")));
		}

		let stem = path.file_stem().and_then(|stem| stem.to_str()).unwrap_or_default();
		let Some(kind) = DatasourceKind::parse_str(stem) else {
			bail!(PyramidError::render(format!(
				"plugin {path:?} provides an unknown datasource {stem:?}, expected one of: {}",
				DatasourceKind::list_all()
			)));
		};

		if let Some(previous) = self.plugins.insert(kind, path.to_path_buf()) {
			log::warn!("datasource {kind} from {previous:?} is replaced by {path:?}");
		}
		Ok(kind)
	}

	/// Looks up a registered datasource by name.
	pub fn get(&self, name: &str) -> Option<DatasourceKind> {
		DatasourceKind::parse_str(name).filter(|kind| self.plugins.contains_key(kind))
	}

	/// Names of all registered datasources, sorted.
	pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.plugins.keys().map(|kind| kind.as_str())
	}

	pub fn len(&self) -> usize {
		self.plugins.len()
	}

	pub fn is_empty(&self) -> bool {
		self.plugins.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use assert_fs::{TempDir, prelude::*};
	use vtiles_core::ErrorKind;

	#[test]
	fn register_and_lookup() -> Result<()> {
		let dir = TempDir::new()?;
		let outline = dir.child("outline.input");
		outline.touch()?;
		let center = dir.child("center.so");
		center.touch()?;

		let mut registry = PluginRegistry::new();
		assert!(registry.is_empty());
		assert_eq!(registry.register(center.path())?, DatasourceKind::Center);
		assert_eq!(registry.register(outline.path())?, DatasourceKind::Outline);

		assert_eq!(registry.len(), 2);
		assert_eq!(registry.get("outline"), Some(DatasourceKind::Outline));
		assert_eq!(registry.get("center"), Some(DatasourceKind::Center));
		assert_eq!(registry.get("shapefile"), None);
		assert_eq!(registry.names().collect::<Vec<_>>(), vec!["outline", "center"]);
		Ok(())
	}

	#[test]
	fn unregistered_kind_is_not_found() -> Result<()> {
		let dir = TempDir::new()?;
		let outline = dir.child("outline.input");
		outline.touch()?;

		let mut registry = PluginRegistry::new();
		registry.register(outline.path())?;
		assert_eq!(registry.get("center"), None);
		Ok(())
	}

	#[test]
	fn missing_file() {
		let mut registry = PluginRegistry::new();
		let error = registry.register(Path::new("/does/not/exist/outline.input")).unwrap_err();
		assert_eq!(PyramidError::kind_of(&error), Some(ErrorKind::Render));
		assert!(error.to_string().contains("does not exist"));
	}

	#[test]
	fn unknown_datasource() -> Result<()> {
		let dir = TempDir::new()?;
		let plugin = dir.child("postgis.input");
		plugin.touch()?;

		let error = PluginRegistry::new().register(plugin.path()).unwrap_err();
		assert_eq!(PyramidError::kind_of(&error), Some(ErrorKind::Render));
		assert!(
			error
				.to_string()
				.ends_with("provides an unknown datasource \"postgis\", expected one of: outline, center")
		);
		Ok(())
	}

	#[test]
	fn parse_kind() {
		assert_eq!(DatasourceKind::parse_str("outline"), Some(DatasourceKind::Outline));
		assert_eq!(DatasourceKind::parse_str("Center"), None);
		assert_eq!(DatasourceKind::Center.to_string(), "center");
	}
}
