//! Three-dimensional tile coordinates in a tile pyramid.
//!
//! ```
//! use vtiles_core::TileCoord;
//!
//! let coord = TileCoord::new(5, 6, 7);
//! assert_eq!(coord.level, 5);
//! assert_eq!(coord.to_string(), "5/6/7");
//! assert_eq!(coord.children().unwrap()[3], TileCoord::new(6, 13, 15));
//! ```

use std::fmt::{self, Debug, Display};

/// One tile in the pyramid: zoom level plus x (column) and y (row) index.
///
/// The derived ordering compares `level`, then `x`, then `y`, which is the order in which a
/// pyramid run visits tiles.
#[derive(Eq, PartialEq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct TileCoord {
	/// The zoom level of the tile.
	pub level: u8,
	/// The x index of the tile.
	pub x: u32,
	/// The y index of the tile.
	pub y: u32,
}

impl TileCoord {
	#[must_use]
	pub fn new(level: u8, x: u32, y: u32) -> TileCoord {
		TileCoord { level, x, y }
	}

	/// The four tiles at `level + 1` covering this tile, ordered by x, then y.
	///
	/// Returns `None` if the doubled coordinates do not fit into `u32`.
	#[must_use]
	pub fn children(&self) -> Option<[TileCoord; 4]> {
		let level = self.level.checked_add(1)?;
		let x = self.x.checked_mul(2)?;
		let y = self.y.checked_mul(2)?;
		Some([
			TileCoord::new(level, x, y),
			TileCoord::new(level, x, y + 1),
			TileCoord::new(level, x + 1, y),
			TileCoord::new(level, x + 1, y + 1),
		])
	}
}

impl Display for TileCoord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}/{}", self.level, self.x, self.y)
	}
}

impl Debug for TileCoord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_fmt(format_args!("TileCoord({}, [{}, {}])", &self.level, &self.x, &self.y))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_and_debug() {
		let coord = TileCoord::new(3, 1, 2);
		assert_eq!(format!("{coord}"), "3/1/2");
		assert_eq!(format!("{coord:?}"), "TileCoord(3, [1, 2])");
	}

	#[test]
	fn ordering_follows_level_then_x_then_y() {
		let mut coords = vec![
			TileCoord::new(1, 1, 0),
			TileCoord::new(1, 0, 1),
			TileCoord::new(0, 0, 0),
			TileCoord::new(1, 0, 0),
		];
		coords.sort();
		assert_eq!(
			coords,
			vec![
				TileCoord::new(0, 0, 0),
				TileCoord::new(1, 0, 0),
				TileCoord::new(1, 0, 1),
				TileCoord::new(1, 1, 0),
			]
		);
	}

	#[test]
	fn children_form_a_two_by_two_block() {
		let children = TileCoord::new(2, 1, 3).children();
		assert_eq!(
			children,
			Some([
				TileCoord::new(3, 2, 6),
				TileCoord::new(3, 2, 7),
				TileCoord::new(3, 3, 6),
				TileCoord::new(3, 3, 7),
			])
		);
		assert_eq!(TileCoord::new(31, u32::MAX, 0).children(), None);
	}
}
