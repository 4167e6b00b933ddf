//! This module defines the compression settings applied to every tile of a run:
//! the container framing ([`TileCompression`]), the deflate tuning
//! ([`CompressionStrategy`]) and both combined with a level in [`CompressionConfig`].
//!
//! # Examples
//!
//! ```
//! use vtiles_core::{CompressionConfig, CompressionStrategy, TileCompression};
//!
//! assert_eq!(TileCompression::parse_str("gzip").unwrap(), TileCompression::Gzip);
//! assert_eq!(CompressionStrategy::parse_str("RLE").unwrap(), CompressionStrategy::Rle);
//!
//! let config = CompressionConfig::new(TileCompression::Zlib, 6, CompressionStrategy::Filtered).unwrap();
//! assert_eq!(config.to_string(), "zlib (level 6, FILTERED)");
//! assert!(CompressionConfig::new(TileCompression::Zlib, 10, CompressionStrategy::Default).is_err());
//! ```

use crate::PyramidError;
use anyhow::{Result, bail};
use enumset::EnumSetType;
use std::fmt::Display;

/// Framing of the compressed tile bytes. The tile file name does not change with it.
#[derive(Debug, EnumSetType, PartialOrd, Ord)]
pub enum TileCompression {
	Uncompressed,
	Zlib,
	Gzip,
}

impl TileCompression {
	pub fn as_str(&self) -> &'static str {
		match self {
			TileCompression::Uncompressed => "none",
			TileCompression::Zlib => "zlib",
			TileCompression::Gzip => "gzip",
		}
	}

	pub fn parse_str(value: &str) -> Result<Self> {
		Ok(match value {
			"none" => TileCompression::Uncompressed,
			"zlib" => TileCompression::Zlib,
			"gzip" => TileCompression::Gzip,
			_ => bail!(PyramidError::invalid_argument(format!(
				"compression must be one of the following strings: none, zlib, gzip (got {value:?})"
			))),
		})
	}
}

impl Display for TileCompression {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Deflate tuning parameter. Affects the compressed size, never the decompressed content.
#[derive(Debug, EnumSetType, PartialOrd, Ord)]
pub enum CompressionStrategy {
	Filtered,
	HuffmanOnly,
	Rle,
	Fixed,
	Default,
}

impl CompressionStrategy {
	pub fn as_str(&self) -> &'static str {
		match self {
			CompressionStrategy::Filtered => "FILTERED",
			CompressionStrategy::HuffmanOnly => "HUFFMAN_ONLY",
			CompressionStrategy::Rle => "RLE",
			CompressionStrategy::Fixed => "FIXED",
			CompressionStrategy::Default => "DEFAULT",
		}
	}

	pub fn parse_str(value: &str) -> Result<Self> {
		Ok(match value {
			"FILTERED" => CompressionStrategy::Filtered,
			"HUFFMAN_ONLY" => CompressionStrategy::HuffmanOnly,
			"RLE" => CompressionStrategy::Rle,
			"FIXED" => CompressionStrategy::Fixed,
			"DEFAULT" => CompressionStrategy::Default,
			_ => bail!(PyramidError::invalid_argument(format!(
				"compression strategy must be one of the following strings: FILTERED, HUFFMAN_ONLY, RLE, FIXED, DEFAULT (got {value:?})"
			))),
		})
	}
}

impl Display for CompressionStrategy {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Validated compression settings of a run. Defaults to `none`, level 0, `DEFAULT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompressionConfig {
	compression: TileCompression,
	level: u8,
	strategy: CompressionStrategy,
}

impl CompressionConfig {
	pub const MAX_LEVEL: u8 = 9;

	pub fn new(compression: TileCompression, level: u8, strategy: CompressionStrategy) -> Result<CompressionConfig> {
		if level > Self::MAX_LEVEL {
			bail!(PyramidError::invalid_argument(format!(
				"compression level must be between 0 and {} (got {level})",
				Self::MAX_LEVEL
			)));
		}
		Ok(CompressionConfig {
			compression,
			level,
			strategy,
		})
	}

	#[must_use]
	pub fn compression(&self) -> TileCompression {
		self.compression
	}

	#[must_use]
	pub fn level(&self) -> u8 {
		self.level
	}

	#[must_use]
	pub fn strategy(&self) -> CompressionStrategy {
		self.strategy
	}
}

impl Default for CompressionConfig {
	fn default() -> Self {
		CompressionConfig {
			compression: TileCompression::Uncompressed,
			level: 0,
			strategy: CompressionStrategy::Default,
		}
	}
}

impl Display for CompressionConfig {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if self.compression == TileCompression::Uncompressed {
			return f.write_str("none");
		}
		write!(f, "{} (level {}, {})", self.compression, self.level, self.strategy)
	}
}
