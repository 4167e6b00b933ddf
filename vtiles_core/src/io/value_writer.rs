//! The `ValueWriter` trait: primitive and protobuf encodings on top of any [`std::io::Write`].
//!
//! # Examples
//!
//! ```rust
//! use vtiles_core::io::{ValueWriter, ValueWriterBlob};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut writer = ValueWriterBlob::new_le();
//!     writer.write_pbf_key(1, 2)?;
//!     writer.write_pbf_string("outline")?;
//!     assert_eq!(writer.into_blob().as_slice(), b"\x0a\x07outline");
//!     Ok(())
//! }
//! ```

use super::ValueWriterBlob;
use crate::Blob;
use anyhow::{Context, Result};
use byteorder::{ByteOrder, WriteBytesExt};
use std::io::Write;

/// Protobuf wire type of varint fields.
pub const PBF_VARINT: u8 = 0;
/// Protobuf wire type of 64-bit fixed-width fields.
pub const PBF_FIXED64: u8 = 1;
/// Protobuf wire type of length-delimited fields.
pub const PBF_LENGTH_DELIMITED: u8 = 2;

/// Writes values in a fixed byte order `E` to an underlying writer.
pub trait ValueWriter<E: ByteOrder> {
	/// Returns the underlying writer.
	fn get_writer(&mut self) -> &mut dyn Write;

	/// Number of bytes written so far.
	fn position(&mut self) -> Result<u64>;

	fn is_empty(&mut self) -> Result<bool> {
		Ok(self.position()? == 0)
	}

	/// Writes an unsigned LEB128 varint.
	fn write_varint(&mut self, mut value: u64) -> Result<()> {
		while value >= 0x80 {
			self.get_writer().write_all(&[((value & 0x7F) as u8) | 0x80])?;
			value >>= 7;
		}
		self.get_writer().write_all(&[value as u8])?;
		Ok(())
	}

	/// Writes an `f64` in the byte order `E`.
	fn write_f64(&mut self, value: f64) -> Result<()> {
		Ok(self.get_writer().write_f64::<E>(value)?)
	}

	fn write_slice(&mut self, buf: &[u8]) -> Result<()> {
		self.get_writer().write_all(buf)?;
		Ok(())
	}

	fn write_blob(&mut self, blob: &Blob) -> Result<()> {
		self.write_slice(blob.as_slice())
	}

	/// Writes a protobuf field key: `field_number << 3 | wire_type`.
	fn write_pbf_key(&mut self, field_number: u32, wire_type: u8) -> Result<()> {
		self
			.write_varint((u64::from(field_number) << 3) | u64::from(wire_type))
			.context("Failed to write PBF key")
	}

	/// Writes a packed repeated `uint32` field body, prefixed with its byte length.
	fn write_pbf_packed_uint32(&mut self, data: &[u32]) -> Result<()> {
		let mut packed = ValueWriterBlob::new_le();
		for &value in data {
			packed.write_varint(u64::from(value))?;
		}
		self
			.write_pbf_blob(&packed.into_blob())
			.context("Failed to write packed uint32 values")
	}

	/// Writes a length-delimited blob.
	fn write_pbf_blob(&mut self, blob: &Blob) -> Result<()> {
		self.write_varint(blob.len())?;
		self.write_blob(blob).context("Failed to write PBF blob")
	}

	/// Writes a length-delimited UTF-8 string.
	fn write_pbf_string(&mut self, text: &str) -> Result<()> {
		self.write_varint(text.len() as u64)?;
		self.write_slice(text.as_bytes()).context("Failed to write PBF string")
	}
}
