use super::methods::{compress_gzip, compress_zlib, decompress_gzip, decompress_zlib};
use crate::{Blob, CompressionConfig, TileCompression};
use anyhow::Result;
use vtiles_derive::context;

/// Compresses a rendered tile according to `config`.
///
/// With [`TileCompression::Uncompressed`] the blob is returned unchanged. Output is
/// deterministic for a fixed version of the deflate backend.
#[context("Compressing tile using {config}")]
pub fn compress(blob: Blob, config: &CompressionConfig) -> Result<Blob> {
	log::trace!("compress {} bytes using {config}", blob.len());
	match config.compression() {
		TileCompression::Uncompressed => Ok(blob),
		TileCompression::Zlib => compress_zlib(&blob, config.level(), config.strategy()),
		TileCompression::Gzip => compress_gzip(&blob, config.level(), config.strategy()),
	}
}

/// Reverses [`compress`] for the given framing.
#[context("Decompressing tile using {compression}")]
pub fn decompress(blob: &Blob, compression: TileCompression) -> Result<Blob> {
	match compression {
		TileCompression::Uncompressed => Ok(blob.clone()),
		TileCompression::Zlib => decompress_zlib(blob),
		TileCompression::Gzip => decompress_gzip(blob),
	}
}
