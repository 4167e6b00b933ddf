//! Creation of the `<root>/<z>/<x>/` directories that hold the tile files.

use anyhow::Result;
use std::{
	fs,
	path::{Path, PathBuf},
};
use vtiles_core::PyramidError;

/// Ensures that `root/level/x/` exists, creating missing parents.
///
/// Returns the directory path and whether this call created it. Calling it again for the
/// same column succeeds and reports `false`; a directory created concurrently by someone
/// else is accepted as well. Failures carry the path as [`PyramidError::Io`].
pub fn ensure_tile_directory(root: &Path, level: u8, x: u32) -> Result<(PathBuf, bool)> {
	let path = root.join(level.to_string()).join(x.to_string());
	if path.is_dir() {
		return Ok((path, false));
	}

	fs::create_dir_all(&path).map_err(|source| PyramidError::io(path.clone(), source))?;
	log::debug!("created directory {path:?}");
	Ok((path, true))
}
