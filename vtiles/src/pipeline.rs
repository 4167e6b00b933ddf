//! The generation loop: render, compress and write every tile of a pyramid.
//!
//! Tiles are visited by zoom level, then column, then row, all ascending. The first error
//! ends the run; tiles after the failing one are never written.

use crate::{directory::ensure_tile_directory, render::TileRenderer};
use anyhow::Result;
use std::{
	fs,
	path::{Path, PathBuf},
};
use vtiles_core::{Blob, CompressionConfig, PyramidError, TileCoord, TileRange, compression::compress};
use vtiles_derive::context;

/// File extension of every tile, independent of the compression.
pub const TILE_EXTENSION: &str = "mvt";

/// Progress notifications of a run, in the order the files appear on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PipelineEvent {
	/// A `<z>/<x>` directory did not exist and was created.
	DirectoryCreated(PathBuf),
	/// A tile file was written.
	TileWritten(PathBuf),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationSummary {
	pub tiles_written: u64,
	pub directories_created: u64,
}

/// Writes tile pyramids below `output_root` using one renderer and one scratch buffer.
pub struct PyramidGenerator<R: TileRenderer> {
	output_root: PathBuf,
	compression: CompressionConfig,
	renderer: R,
	scratch: Vec<u8>,
}

impl<R: TileRenderer> PyramidGenerator<R> {
	pub fn new(output_root: impl Into<PathBuf>, compression: CompressionConfig, renderer: R) -> PyramidGenerator<R> {
		PyramidGenerator {
			output_root: output_root.into(),
			compression,
			renderer,
			scratch: Vec::new(),
		}
	}

	pub fn renderer(&self) -> &R {
		&self.renderer
	}

	pub fn into_renderer(self) -> R {
		self.renderer
	}

	/// Generates all tiles of `range` and its descendants.
	///
	/// `on_event` is called for every created directory and every written tile.
	pub fn generate(&mut self, range: &TileRange, mut on_event: impl FnMut(&PipelineEvent)) -> Result<GenerationSummary> {
		log::trace!("generate {range:?} into {:?} using {}", self.output_root, self.compression);

		let mut summary = GenerationSummary::default();
		for level_range in range.pyramid() {
			log::info!("generate zoom level {level_range:?}");

			for x in level_range.x_min..=level_range.x_max {
				let (directory, created) = ensure_tile_directory(&self.output_root, level_range.level, x)?;
				if created {
					summary.directories_created += 1;
					on_event(&PipelineEvent::DirectoryCreated(directory.clone()));
				}

				for y in level_range.y_min..=level_range.y_max {
					let coord = TileCoord::new(level_range.level, x, y);
					let path = self.write_tile(&coord, &directory)?;
					summary.tiles_written += 1;
					on_event(&PipelineEvent::TileWritten(path));
				}
			}
		}

		log::debug!(
			"wrote {} tiles, created {} directories",
			summary.tiles_written,
			summary.directories_created
		);
		Ok(summary)
	}

	#[context("Failed to generate tile {coord}")]
	fn write_tile(&mut self, coord: &TileCoord, directory: &Path) -> Result<PathBuf> {
		self.scratch.clear();
		self.renderer.render_tile(coord, &mut self.scratch)?;
		let blob = compress(Blob::from(self.scratch.as_slice()), &self.compression)?;
		self.scratch.clear();

		let path = directory.join(format!("{}.{TILE_EXTENSION}", coord.y));
		fs::write(&path, blob.as_slice()).map_err(|source| PyramidError::io(path.clone(), source))?;
		log::debug!("wrote tile {coord} ({} bytes)", blob.len());
		Ok(path)
	}
}
