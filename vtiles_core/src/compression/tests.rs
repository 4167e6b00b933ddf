use crate::Blob;

/// Generates deterministic pseudo-random binary data of a specified size.
#[must_use]
pub fn generate_test_data(size: usize) -> Blob {
	let mut data = Vec::with_capacity(size);
	for i in 0..size {
		let v = (i as f64 + 1.0).sin() * 1_000_000.0 + i as f64;
		data.push((v % 256.0) as u8);
	}
	Blob::from(data)
}

/// Generates repetitive data, similar to the layer and key tables of vector tiles.
#[must_use]
pub fn generate_repetitive_data(size: usize) -> Blob {
	let pattern = b"\x1a\x0dlayer-outline\x12\x0b\x18\x03\x22\x07\x09\x00\x00";
	Blob::from(pattern.iter().copied().cycle().take(size).collect::<Vec<u8>>())
}
