//! The deflate core shared by the zlib and gzip framings.
//!
//! `flate2` does not expose the deflate strategy, so compression drives its backend,
//! `miniz_oxide`, directly.

use crate::{CompressionStrategy, PyramidError};
use anyhow::{Result, bail};
use miniz_oxide::deflate::core::{
	CompressionStrategy as MinizStrategy, CompressorOxide, TDEFLFlush, TDEFLStatus, compress,
	create_comp_flags_from_zip_params,
};

const WINDOW_BITS: i32 = 15;

/// Output of the deflate core: a bare deflate stream or one framed as zlib (RFC 1950).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeflateFraming {
	Raw,
	Zlib,
}

fn miniz_strategy(strategy: CompressionStrategy) -> MinizStrategy {
	match strategy {
		CompressionStrategy::Filtered => MinizStrategy::Filtered,
		CompressionStrategy::HuffmanOnly => MinizStrategy::HuffmanOnly,
		CompressionStrategy::Rle => MinizStrategy::RLE,
		CompressionStrategy::Fixed => MinizStrategy::Fixed,
		CompressionStrategy::Default => MinizStrategy::Default,
	}
}

/// Deflates `data` at `level` (0 = stored blocks, 9 = best) using `strategy`.
pub fn deflate(data: &[u8], level: u8, strategy: CompressionStrategy, framing: DeflateFraming) -> Result<Vec<u8>> {
	let window_bits = match framing {
		DeflateFraming::Raw => -WINDOW_BITS,
		DeflateFraming::Zlib => WINDOW_BITS,
	};
	let flags = create_comp_flags_from_zip_params(i32::from(level), window_bits, miniz_strategy(strategy) as i32);
	let mut compressor = CompressorOxide::new(flags);

	let mut output = vec![0u8; (data.len() / 2).max(64)];
	let mut out_pos = 0;
	let mut input = data;

	loop {
		let (status, bytes_in, bytes_out) = compress(&mut compressor, input, &mut output[out_pos..], TDEFLFlush::Finish);
		out_pos += bytes_out;
		input = &input[bytes_in..];

		match status {
			TDEFLStatus::Done => {
				output.truncate(out_pos);
				return Ok(output);
			}
			TDEFLStatus::Okay => {
				if output.len() - out_pos < 64 {
					output.resize(output.len() * 2, 0);
				}
			}
			status => bail!(PyramidError::compression(format!("deflate stopped with status {status:?}"))),
		}
	}
}
