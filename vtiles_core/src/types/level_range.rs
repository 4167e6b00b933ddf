//! The rectangular block of tiles visited at a single zoom level.

use super::TileCoord;
use std::fmt;

/// An inclusive rectangle of tile columns and rows at one zoom level.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelRange {
	pub level: u8,
	pub x_min: u32,
	pub x_max: u32,
	pub y_min: u32,
	pub y_max: u32,
}

impl LevelRange {
	/// The range covering every descendant of this range at `level + 1`.
	///
	/// Each tile has exactly four children (the 2×2 block at doubled coordinates), so the
	/// covering rectangle has bounds `[2·min, 2·max + 1]` on both axes.
	/// Returns `None` if the level or a bound would overflow.
	#[must_use]
	pub fn leveled_up(&self) -> Option<LevelRange> {
		Some(LevelRange {
			level: self.level.checked_add(1)?,
			x_min: self.x_min.checked_mul(2)?,
			x_max: self.x_max.checked_mul(2)?.checked_add(1)?,
			y_min: self.y_min.checked_mul(2)?,
			y_max: self.y_max.checked_mul(2)?.checked_add(1)?,
		})
	}

	#[must_use]
	pub fn width(&self) -> u64 {
		u64::from(self.x_max) - u64::from(self.x_min) + 1
	}

	#[must_use]
	pub fn height(&self) -> u64 {
		u64::from(self.y_max) - u64::from(self.y_min) + 1
	}

	#[must_use]
	pub fn count_tiles(&self) -> u64 {
		self.width().saturating_mul(self.height())
	}

	#[must_use]
	pub fn contains(&self, coord: &TileCoord) -> bool {
		coord.level == self.level
			&& (self.x_min..=self.x_max).contains(&coord.x)
			&& (self.y_min..=self.y_max).contains(&coord.y)
	}

	/// Iterates over all coordinates in this range, x ascending, then y ascending.
	pub fn iter_coords(&self) -> impl Iterator<Item = TileCoord> + use<> {
		let LevelRange {
			level,
			x_min,
			x_max,
			y_min,
			y_max,
		} = *self;
		(x_min..=x_max).flat_map(move |x| (y_min..=y_max).map(move |y| TileCoord::new(level, x, y)))
	}
}

/// `z: [x_min,y_min,x_max,y_max] (widthxheight)`
impl fmt::Debug for LevelRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}: [{},{},{},{}] ({}x{})",
			self.level,
			self.x_min,
			self.y_min,
			self.x_max,
			self.y_max,
			self.width(),
			self.height()
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn range(level: u8, x_min: u32, x_max: u32, y_min: u32, y_max: u32) -> LevelRange {
		LevelRange {
			level,
			x_min,
			x_max,
			y_min,
			y_max,
		}
	}

	#[rstest]
	#[case(range(0, 0, 0, 0, 0), range(1, 0, 1, 0, 1))]
	#[case(range(3, 2, 5, 1, 1), range(4, 4, 11, 2, 3))]
	#[case(range(10, 7, 7, 300, 512), range(11, 14, 15, 600, 1025))]
	fn leveled_up_doubles_bounds(#[case] input: LevelRange, #[case] expected: LevelRange) {
		assert_eq!(input.leveled_up(), Some(expected));
	}

	#[rstest]
	#[case(range(0, 0, 0, 0, 0))]
	#[case(range(4, 3, 9, 2, 2))]
	#[case(range(12, 100, 101, 7, 30))]
	fn leveled_up_has_four_times_the_tiles(#[case] input: LevelRange) {
		let next = input.leveled_up().unwrap();
		assert_eq!(next.count_tiles(), input.count_tiles() * 4);
	}

	#[test]
	fn leveled_up_covers_all_children() {
		let parent = range(2, 1, 2, 0, 3);
		let next = parent.leveled_up().unwrap();
		for coord in parent.iter_coords() {
			for child in coord.children().unwrap() {
				assert!(next.contains(&child), "{child:?} should be inside {next:?}");
			}
		}
	}

	#[test]
	fn leveled_up_detects_overflow() {
		assert_eq!(range(5, 0, u32::MAX / 2 + 1, 0, 0).leveled_up(), None);
		assert_eq!(range(u8::MAX, 0, 0, 0, 0).leveled_up(), None);
		assert!(range(5, 0, u32::MAX / 2 - 1, 0, 0).leveled_up().is_some());
	}

	#[test]
	fn iter_coords_visits_x_then_y() {
		let coords: Vec<String> = range(1, 0, 1, 0, 1).iter_coords().map(|c| c.to_string()).collect();
		assert_eq!(coords, vec!["1/0/0", "1/0/1", "1/1/0", "1/1/1"]);
	}

	#[test]
	fn debug_format() {
		assert_eq!(format!("{:?}", range(4, 5, 7, 6, 7)), "4: [5,6,7,7] (3x2)");
	}

	#[test]
	fn count_tiles_does_not_overflow() {
		assert_eq!(range(32, 0, u32::MAX, 0, u32::MAX).count_tiles(), u64::MAX);
	}
}
