use super::deflate::{DeflateFraming, deflate};
use crate::{Blob, CompressionStrategy, PyramidError};
use anyhow::Result;
use flate2::bufread::ZlibDecoder;
use std::io::Read;
use vtiles_derive::context;

/// Compresses data using deflate with zlib framing (RFC 1950).
///
/// # Errors
///
/// * If the deflate backend reports a failure.
#[context("Compressing blob ({} bytes) using zlib at level {level}, {strategy}", blob.len())]
pub fn compress_zlib(blob: &Blob, level: u8, strategy: CompressionStrategy) -> Result<Blob> {
	Ok(Blob::from(deflate(blob.as_slice(), level, strategy, DeflateFraming::Zlib)?))
}

/// Decompresses data that was compressed using zlib.
#[context("Decompressing blob ({} bytes) using zlib", blob.len())]
pub fn decompress_zlib(blob: &Blob) -> Result<Blob> {
	let mut decoder = ZlibDecoder::new(blob.as_slice());
	let mut decompressed_data = Vec::new();
	decoder
		.read_to_end(&mut decompressed_data)
		.map_err(|error| PyramidError::compression(format!("Failed to decompress data using zlib: {error}")))?;
	Ok(Blob::from(decompressed_data))
}
