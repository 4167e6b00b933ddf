//! Gzip framing (RFC 1952) around the deflate core.
//!
//! The header carries no file name and a zero modification time, so equal inputs
//! produce equal bytes.

use super::deflate::{DeflateFraming, deflate};
use crate::{Blob, CompressionStrategy, PyramidError};
use anyhow::Result;
use flate2::{Crc, bufread::GzDecoder};
use std::io::Read;
use vtiles_derive::context;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
const CM_DEFLATE: u8 = 8;
const OS_UNKNOWN: u8 = 255;

/// Compresses data using deflate with gzip framing.
///
/// # Errors
///
/// * If the deflate backend reports a failure.
#[context("Compressing blob ({} bytes) using gzip at level {level}, {strategy}", blob.len())]
pub fn compress_gzip(blob: &Blob, level: u8, strategy: CompressionStrategy) -> Result<Blob> {
	let compressed = deflate(blob.as_slice(), level, strategy, DeflateFraming::Raw)?;

	let xfl = match level {
		9 => 2,
		1 => 4,
		_ => 0,
	};

	let mut crc = Crc::new();
	crc.update(blob.as_slice());

	let mut output = Vec::with_capacity(10 + compressed.len() + 8);
	output.extend_from_slice(&GZIP_MAGIC);
	output.push(CM_DEFLATE);
	// flags
	output.push(0);
	// modification time
	output.extend_from_slice(&[0, 0, 0, 0]);
	output.push(xfl);
	output.push(OS_UNKNOWN);
	output.extend_from_slice(&compressed);
	output.extend_from_slice(&crc.sum().to_le_bytes());
	output.extend_from_slice(&crc.amount().to_le_bytes());

	Ok(Blob::from(output))
}

/// Decompresses data that was compressed using gzip.
#[context("Decompressing blob ({} bytes) using gzip", blob.len())]
pub fn decompress_gzip(blob: &Blob) -> Result<Blob> {
	let mut decoder = GzDecoder::new(blob.as_slice());
	let mut decompressed_data = Vec::new();
	decoder
		.read_to_end(&mut decompressed_data)
		.map_err(|error| PyramidError::compression(format!("Failed to decompress data using gzip: {error}")))?;
	Ok(Blob::from(decompressed_data))
}
