//! Validation of the raw command line tokens of a generator run.
//!
//! The tokens are positional, in this order:
//!
//! ```text
//! minz maxz minx maxx miny maxy output stylesheet plugins [compression [level [strategy]]]
//! ```
//!
//! Every check runs in token order and the first failure is returned as
//! [`PyramidError::InvalidArgument`]. Validation has no side effects.
//!
//! ```
//! use vtiles::GeneratorArguments;
//! # fn main() -> anyhow::Result<()> {
//! # let dir = tempfile::tempdir()?;
//! # let style = dir.path().join("style.yaml");
//! # std::fs::write(&style, "layers: []")?;
//! let tokens = ["0", "1", "0", "0", "0", "0", "tiles", style.to_str().unwrap(), "", "gzip", "9"];
//! let arguments = GeneratorArguments::from_tokens(&tokens)?;
//! assert_eq!(arguments.range().count_tiles(), 5);
//! assert_eq!(arguments.compression().to_string(), "gzip (level 9, DEFAULT)");
//! # Ok(())
//! # }
//! ```

use anyhow::{Result, bail, ensure};
use std::{
	path::{Path, PathBuf},
	str::FromStr,
};
use vtiles_core::{CompressionConfig, CompressionStrategy, PyramidError, TileCompression, TileRange};

/// Validated parameters of a generator run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorArguments {
	range: TileRange,
	output_dir: PathBuf,
	stylesheet: PathBuf,
	plugins: Vec<PathBuf>,
	compression: CompressionConfig,
}

impl GeneratorArguments {
	/// Parses and validates positional tokens. Tokens beyond the twelfth are ignored.
	pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<GeneratorArguments> {
		log::trace!("validate {} argument tokens", tokens.len());
		let mut tokens = Tokens::new(tokens);

		let level_min = tokens.number::<u8>("minimum zoom")?;
		let level_max = tokens.number::<u8>("maximum zoom")?;
		let x_min = tokens.number::<u32>("minimum x")?;
		let x_max = tokens.number::<u32>("maximum x")?;
		let y_min = tokens.number::<u32>("minimum y")?;
		let y_max = tokens.number::<u32>("maximum y")?;
		let range = TileRange::new(level_min, level_max, x_min, x_max, y_min, y_max)?;

		let output_dir = PathBuf::from(tokens.required("output directory")?);

		let stylesheet = PathBuf::from(tokens.required("stylesheet")?);
		if !stylesheet.is_file() {
			bail!(PyramidError::invalid_argument(format!(
				"stylesheet {stylesheet:?} does not exist"
			)));
		}

		let plugins = parse_plugin_list(tokens.present("plugins")?);

		let compression = match tokens.optional() {
			Some(token) => TileCompression::parse_str(token)?,
			None => TileCompression::Uncompressed,
		};
		let level = match tokens.optional() {
			Some(token) => parse_level(token)?,
			None => 0,
		};
		let strategy = match tokens.optional() {
			Some(token) => CompressionStrategy::parse_str(token)?,
			None => CompressionStrategy::Default,
		};

		Ok(GeneratorArguments {
			range,
			output_dir,
			stylesheet,
			plugins,
			compression: CompressionConfig::new(compression, level, strategy)?,
		})
	}

	pub fn range(&self) -> &TileRange {
		&self.range
	}

	pub fn output_dir(&self) -> &Path {
		&self.output_dir
	}

	pub fn stylesheet(&self) -> &Path {
		&self.stylesheet
	}

	pub fn plugins(&self) -> &[PathBuf] {
		&self.plugins
	}

	pub fn compression(&self) -> &CompressionConfig {
		&self.compression
	}
}

/// Splits a comma separated list of plugin paths.
///
/// Surrounding whitespace of each segment is removed, so `a.so, b.so` names two files.
/// Segments that are empty after trimming are dropped.
pub fn parse_plugin_list(list: &str) -> Vec<PathBuf> {
	list
		.split(',')
		.map(str::trim)
		.filter(|segment| !segment.is_empty())
		.map(PathBuf::from)
		.collect()
}

fn parse_level(token: &str) -> Result<u8> {
	let max = CompressionConfig::MAX_LEVEL;
	let Ok(level) = token.trim().parse::<u8>() else {
		bail!(PyramidError::invalid_argument(format!(
			"compression level must be between 0 and {max} (got {token:?})"
		)));
	};
	ensure!(
		level <= max,
		PyramidError::invalid_argument(format!("compression level must be between 0 and {max} (got {level})"))
	);
	Ok(level)
}

/// Cursor over the positional tokens.
struct Tokens<'a, S: AsRef<str>> {
	tokens: &'a [S],
	index: usize,
}

impl<'a, S: AsRef<str>> Tokens<'a, S> {
	fn new(tokens: &'a [S]) -> Self {
		Tokens { tokens, index: 0 }
	}

	fn optional(&mut self) -> Option<&'a str> {
		let token = self.tokens.get(self.index)?.as_ref();
		self.index += 1;
		Some(token)
	}

	/// The next token, which may be empty.
	fn present(&mut self, name: &str) -> Result<&'a str> {
		match self.optional() {
			Some(token) => Ok(token),
			None => bail!(PyramidError::invalid_argument(format!("missing {name} parameter"))),
		}
	}

	/// The next token, which must not be blank.
	fn required(&mut self, name: &str) -> Result<&'a str> {
		let token = self.present(name)?;
		ensure!(
			!token.trim().is_empty(),
			PyramidError::invalid_argument(format!("missing {name} parameter"))
		);
		Ok(token)
	}

	fn number<T: FromStr>(&mut self, name: &str) -> Result<T> {
		let token = self.required(name)?;
		let Ok(value) = token.trim().parse::<T>() else {
			bail!(PyramidError::invalid_argument(format!(
				"{name} must be a non-negative integer (got {token:?})"
			)));
		};
		Ok(value)
	}
}
