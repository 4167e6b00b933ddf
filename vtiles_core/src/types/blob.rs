//! This module provides the [`Blob`] struct, an owned byte buffer used for rendered tiles and
//! for the output of the compression adapter.
//!
//! ```rust
//! use vtiles_core::Blob;
//!
//! let blob = Blob::from("Xylofön");
//! assert_eq!(blob.len(), 8);
//! assert_eq!(blob.as_str().unwrap(), "Xylofön");
//! assert_eq!(blob.into_vec().len(), 8);
//! ```

use anyhow::{Context, Result};
use std::fmt::Debug;

/// A simple wrapper around [`Vec<u8>`] holding encoded tile bytes.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Blob(Vec<u8>);

impl Blob {
	/// Creates an empty `Blob`.
	#[must_use]
	pub fn new_empty() -> Blob {
		Blob(Vec::new())
	}

	/// Returns a reference to the underlying byte slice.
	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		self.0.as_ref()
	}

	/// Consumes this [`Blob`] and returns the underlying `Vec<u8>`.
	#[must_use]
	pub fn into_vec(self) -> Vec<u8> {
		self.0
	}

	/// Returns the underlying bytes as a string slice, failing on invalid UTF-8.
	pub fn as_str(&self) -> Result<&str> {
		std::str::from_utf8(&self.0).context("Blob content is not valid UTF-8")
	}

	/// Returns a hexadecimal string representation, each byte separated by a space.
	///
	/// ```rust
	/// use vtiles_core::Blob;
	///
	/// let blob = Blob::from(&[0x1f, 0x8b, 0x08][..]);
	/// assert_eq!(blob.as_hex(), "1f 8b 08");
	/// ```
	#[must_use]
	pub fn as_hex(&self) -> String {
		self
			.0
			.iter()
			.map(|byte| format!("{byte:02x}"))
			.collect::<Vec<_>>()
			.join(" ")
	}

	#[must_use]
	pub fn len(&self) -> u64 {
		self.0.len() as u64
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<Vec<u8>> for Blob {
	fn from(item: Vec<u8>) -> Self {
		Blob(item)
	}
}

impl From<&[u8]> for Blob {
	fn from(item: &[u8]) -> Self {
		Blob(item.to_vec())
	}
}

impl From<&str> for Blob {
	fn from(item: &str) -> Self {
		Blob(item.as_bytes().to_vec())
	}
}

impl From<String> for Blob {
	fn from(item: String) -> Self {
		Blob(item.into_bytes())
	}
}

impl AsRef<[u8]> for Blob {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl Debug for Blob {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if self.0.len() <= 16 {
			write!(f, "Blob({}: {})", self.0.len(), self.as_hex())
		} else {
			write!(f, "Blob({}: {} ...)", self.0.len(), Blob::from(&self.0[..16]).as_hex())
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn conversions_keep_bytes() {
		let blob = Blob::from(vec![0, 1, 2, 3]);
		assert_eq!(blob.as_slice(), &[0, 1, 2, 3]);
		assert_eq!(Blob::from(&[0u8, 1, 2, 3][..]), blob);
		assert_eq!(Blob::from(String::from("mvt")).as_str().unwrap(), "mvt");
		assert!(Blob::from(vec![0xff, 0xfe]).as_str().is_err());
		assert_eq!(blob.into_vec(), vec![0, 1, 2, 3]);
	}

	#[test]
	fn empty_blob() {
		let blob = Blob::new_empty();
		assert!(blob.is_empty());
		assert_eq!(blob.len(), 0);
		assert_eq!(blob, Blob::default());
	}

	#[test]
	fn debug_truncates_long_content() {
		assert_eq!(format!("{:?}", Blob::from("ab")), "Blob(2: 61 62)");
		let long = Blob::from(vec![0u8; 20]);
		assert_eq!(
			format!("{long:?}"),
			"Blob(20: 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 ...)"
		);
	}
}
