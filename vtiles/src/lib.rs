//! Batch generation of vector tile pyramids.
//!
//! A run takes a rectangular tile range at a minimum zoom level and writes every tile of
//! that range and of all its descendants down to a maximum zoom level as
//! `<output>/<z>/<x>/<y>.mvt`:
//!
//! - [`arguments`] validates the raw command line tokens into [`GeneratorArguments`],
//! - [`render`] turns a [`TileCoord`](vtiles_core::TileCoord) into tile bytes,
//! - [`pipeline`] walks the pyramid, compresses every tile and writes it below directories
//!   created by [`directory`].

pub mod arguments;
pub mod directory;
pub mod pipeline;
pub mod render;

pub use arguments::GeneratorArguments;
pub use pipeline::{GenerationSummary, PipelineEvent, PyramidGenerator};
pub use vtiles_core::*;
