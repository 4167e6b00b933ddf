use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::{ErrorLevel, Verbosity};
use vtiles::{
	GenerationSummary, GeneratorArguments, PipelineEvent, PyramidGenerator,
	render::{PluginRegistry, Stylesheet, VectorTileRenderer},
};

/// Generates a pyramid of vector tiles: every tile in the given range at the minimum zoom
/// level and all of its descendants down to the maximum zoom level, written as
/// <OUTPUT_DIR>/<z>/<x>/<y>.mvt
#[derive(Parser, Debug)]
#[command(
	name = "vtiles-create",
	author,
	version,
	long_about = None,
	allow_negative_numbers = true,
)]
struct Cli {
	/// minimum zoom level
	min_zoom: String,

	/// maximum zoom level
	max_zoom: String,

	/// minimum x (column) at the minimum zoom level
	min_x: String,

	/// maximum x (column) at the minimum zoom level
	max_x: String,

	/// minimum y (row) at the minimum zoom level
	min_y: String,

	/// maximum y (row) at the minimum zoom level
	max_y: String,

	/// directory the tiles are written to
	output_dir: String,

	/// stylesheet (YAML) listing the layers and their datasources
	stylesheet: String,

	/// comma separated list of datasource plugin files, may be empty
	plugins: String,

	/// tile compression: none, zlib or gzip [default: none]
	compression: Option<String>,

	/// compression level between 0 and 9 [default: 0]
	level: Option<String>,

	/// deflate strategy: FILTERED, HUFFMAN_ONLY, RLE, FIXED or DEFAULT [default: DEFAULT]
	strategy: Option<String>,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

impl Cli {
	/// The positional arguments in order, ending at the first omitted optional one.
	fn tokens(&self) -> Vec<&str> {
		let mut tokens = vec![
			self.min_zoom.as_str(),
			self.max_zoom.as_str(),
			self.min_x.as_str(),
			self.max_x.as_str(),
			self.min_y.as_str(),
			self.max_y.as_str(),
			self.output_dir.as_str(),
			self.stylesheet.as_str(),
			self.plugins.as_str(),
		];
		tokens.extend(
			[&self.compression, &self.level, &self.strategy]
				.into_iter()
				.map_while(|token| token.as_deref()),
		);
		tokens
	}
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(&cli)?;
	Ok(())
}

fn run(cli: &Cli) -> Result<GenerationSummary> {
	let arguments = GeneratorArguments::from_tokens(&cli.tokens())?;

	let mut registry = PluginRegistry::new();
	for plugin in arguments.plugins() {
		println!("Registering {}", plugin.display());
		registry.register(plugin)?;
	}

	let stylesheet = Stylesheet::from_path(arguments.stylesheet())?;
	let renderer = VectorTileRenderer::new(&stylesheet, &registry)?;

	let mut generator = PyramidGenerator::new(arguments.output_dir(), *arguments.compression(), renderer);
	let summary = generator.generate(arguments.range(), |event| match event {
		PipelineEvent::DirectoryCreated(path) | PipelineEvent::TileWritten(path) => println!("{}", path.display()),
	})?;

	log::info!(
		"finished: {} tiles written, {} directories created",
		summary.tiles_written,
		summary.directories_created
	);
	Ok(summary)
}

#[cfg(test)]
mod tests {
	use super::*;
	use assert_fs::{TempDir, prelude::*};

	fn parse(args: &[&str]) -> Result<Cli> {
		let mut arg_vec = vec!["vtiles-create"];
		arg_vec.extend_from_slice(args);
		Ok(Cli::try_parse_from(arg_vec)?)
	}

	#[test]
	fn help() {
		let err = parse(&["--help"]).unwrap_err().to_string();
		assert!(err.starts_with("Generates a pyramid of vector tiles"));
		assert!(err.contains("Usage: vtiles-create [OPTIONS] <MIN_ZOOM> <MAX_ZOOM>"));
	}

	#[test]
	fn missing_arguments() {
		let err = parse(&["0", "1", "0"]).unwrap_err().to_string();
		assert!(err.contains("required arguments were not provided"));
		assert!(err.contains("Usage: vtiles-create <MIN_ZOOM> <MAX_ZOOM> <MIN_X>"));
	}

	#[test]
	fn tokens_stop_at_first_omitted_option() -> Result<()> {
		let cli = parse(&["0", "1", "2", "3", "4", "5", "out", "style.yaml", "", "gzip"])?;
		assert_eq!(
			cli.tokens(),
			vec!["0", "1", "2", "3", "4", "5", "out", "style.yaml", "", "gzip"]
		);
		Ok(())
	}

	#[test]
	fn negative_numbers_reach_validation() -> Result<()> {
		let cli = parse(&["0", "-1", "0", "0", "0", "0", "out", "style.yaml", ""])?;
		assert_eq!(cli.max_zoom, "-1");
		Ok(())
	}

	#[test]
	fn run_generates_tiles() -> Result<()> {
		let dir = TempDir::new()?;
		let style = dir.child("style.yaml");
		style.write_str("layers: [{name: boundary, datasource: outline}]")?;
		let plugin = dir.child("outline.input");
		plugin.touch()?;
		let output = dir.child("tiles");

		let cli = parse(&[
			"2",
			"3",
			"1",
			"1",
			"2",
			"2",
			output.path().to_str().unwrap(),
			style.path().to_str().unwrap(),
			plugin.path().to_str().unwrap(),
			"zlib",
			"6",
		])?;
		let summary = run(&cli)?;
		assert_eq!(summary.tiles_written, 5);
		assert_eq!(summary.directories_created, 3);
		output.child("3/3/5.mvt").assert(predicates::path::is_file());
		Ok(())
	}
}
