//! This module defines [`TileRange`], the validated rectangle of tiles at the minimum zoom
//! level together with the maximum zoom level a run descends to.

use super::{LevelRange, TilePyramid};
use crate::PyramidError;
use anyhow::{Result, bail};
use std::fmt;

/// The tiles selected for a pyramid run, given at the minimum zoom level.
///
/// Invariants, checked on construction:
/// - `level_min <= level_max`, `x_min <= x_max`, `y_min <= y_max`
/// - the range expanded down to `level_max` still fits into `u32` coordinates
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TileRange {
	level_min: u8,
	level_max: u8,
	x_min: u32,
	x_max: u32,
	y_min: u32,
	y_max: u32,
}

impl TileRange {
	/// Validates the bounds and creates a `TileRange`.
	///
	/// Fails with [`PyramidError::InvalidArgument`] naming the offending values.
	///
	/// ```
	/// use vtiles_core::TileRange;
	///
	/// let range = TileRange::new(0, 1, 0, 0, 0, 0).unwrap();
	/// assert_eq!(range.count_tiles(), 5);
	/// assert!(TileRange::new(2, 1, 0, 0, 0, 0).is_err());
	/// ```
	pub fn new(level_min: u8, level_max: u8, x_min: u32, x_max: u32, y_min: u32, y_max: u32) -> Result<TileRange> {
		fn check_order(name_min: &str, min: u64, name_max: &str, max: u64) -> Result<()> {
			if min > max {
				bail!(PyramidError::invalid_argument(format!(
					"{name_min} ({min}) must be lower or equal to {name_max} ({max})"
				)));
			}
			Ok(())
		}

		check_order("minz", level_min.into(), "maxz", level_max.into())?;
		check_order("minx", x_min.into(), "maxx", x_max.into())?;
		check_order("miny", y_min.into(), "maxy", y_max.into())?;

		let range = TileRange {
			level_min,
			level_max,
			x_min,
			x_max,
			y_min,
			y_max,
		};

		let mut level_range = range.base_level();
		while level_range.level < level_max {
			level_range = match level_range.leveled_up() {
				Some(next) => next,
				None => bail!(PyramidError::invalid_argument(format!(
					"tile range {range:?} exceeds the representable coordinates at zoom level {}",
					u16::from(level_range.level) + 1
				))),
			};
		}

		Ok(range)
	}

	#[must_use]
	pub fn level_min(&self) -> u8 {
		self.level_min
	}

	#[must_use]
	pub fn level_max(&self) -> u8 {
		self.level_max
	}

	#[must_use]
	pub fn x_min(&self) -> u32 {
		self.x_min
	}

	#[must_use]
	pub fn x_max(&self) -> u32 {
		self.x_max
	}

	#[must_use]
	pub fn y_min(&self) -> u32 {
		self.y_min
	}

	#[must_use]
	pub fn y_max(&self) -> u32 {
		self.y_max
	}

	/// The range at the minimum zoom level, exactly as given.
	#[must_use]
	pub fn base_level(&self) -> LevelRange {
		LevelRange {
			level: self.level_min,
			x_min: self.x_min,
			x_max: self.x_max,
			y_min: self.y_min,
			y_max: self.y_max,
		}
	}

	/// Number of zoom levels from `level_min` to `level_max`, inclusive.
	#[must_use]
	pub fn level_count(&self) -> usize {
		usize::from(self.level_max - self.level_min) + 1
	}

	/// The per-level ranges from `level_min` down to `level_max`.
	#[must_use]
	pub fn pyramid(&self) -> TilePyramid {
		TilePyramid::new(self)
	}

	/// Total number of tiles over all levels of the pyramid.
	#[must_use]
	pub fn count_tiles(&self) -> u64 {
		self.pyramid().count_tiles()
	}
}

impl fmt::Debug for TileRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"TileRange(z {}..={}, x {}..={}, y {}..={})",
			self.level_min, self.level_max, self.x_min, self.x_max, self.y_min, self.y_max
		)
	}
}
