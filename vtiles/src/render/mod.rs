//! Rendering of single tiles.
//!
//! The pipeline only depends on [`TileRenderer`]. [`VectorTileRenderer`] is the built-in
//! implementation: it draws the datasources named by a [`Stylesheet`] and resolved through a
//! [`PluginRegistry`] into Mapbox Vector Tiles.

mod plugins;
mod renderer;
mod stylesheet;
mod vector_tile;

pub use plugins::*;
pub use renderer::*;
pub use stylesheet::*;
pub use vector_tile::*;

use anyhow::Result;
use vtiles_core::TileCoord;

/// Produces the raw bytes of a tile.
pub trait TileRenderer {
	/// Appends the uncompressed content of the tile at `coord` to `buffer`.
	///
	/// The caller owns `buffer`, hands it over empty and clears it again after the tile is
	/// written, so nothing of a previous tile is visible here.
	fn render_tile(&mut self, coord: &TileCoord, buffer: &mut Vec<u8>) -> Result<()>;
}
