//! The quadtree expansion of a [`TileRange`] into one [`LevelRange`] per zoom level.
//!
//! The first element is the range at the minimum zoom level as given; every following element
//! is derived from its predecessor by [`LevelRange::leveled_up`]. The sequence is lazy,
//! finite and forward-only. Restarting means calling [`TileRange::pyramid`] again.
//!
//! ```
//! use vtiles_core::TileRange;
//!
//! let range = TileRange::new(0, 1, 0, 0, 0, 0).unwrap();
//! let levels: Vec<String> = range.pyramid().map(|l| format!("{l:?}")).collect();
//! assert_eq!(levels, vec!["0: [0,0,0,0] (1x1)", "1: [0,0,1,1] (2x2)"]);
//! ```

use super::{LevelRange, TileRange};
use std::iter::FusedIterator;

/// Iterator over the per-level ranges of a pyramid run.
#[derive(Clone, Debug)]
pub struct TilePyramid {
	next: Option<LevelRange>,
	level_max: u8,
}

impl TilePyramid {
	#[must_use]
	pub fn new(range: &TileRange) -> TilePyramid {
		TilePyramid {
			next: Some(range.base_level()),
			level_max: range.level_max(),
		}
	}

	/// Number of tiles in the levels not yet yielded, saturating at `u64::MAX`.
	#[must_use]
	pub fn count_tiles(&self) -> u64 {
		self.clone().map(|level| level.count_tiles()).fold(0, u64::saturating_add)
	}
}

impl Iterator for TilePyramid {
	type Item = LevelRange;

	fn next(&mut self) -> Option<LevelRange> {
		let current = self.next.take()?;
		if current.level < self.level_max {
			// representable by construction of `TileRange`
			self.next = current.leveled_up();
		}
		Some(current)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self
			.next
			.map_or(0, |level| usize::from(self.level_max - level.level) + 1);
		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for TilePyramid {}

impl FusedIterator for TilePyramid {}
