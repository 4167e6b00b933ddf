//! Encoding of Mapbox Vector Tiles (MVT 2.1).
//!
//! Only the write direction is implemented. A [`VectorTile`] holds [`VectorLayer`]s, each
//! holding [`VectorFeature`]s with already encoded geometry commands.
//! <https://github.com/mapbox/vector-tile-spec/blob/master/2.1/README.md>

use anyhow::{Context, Result};
use byteorder::LE;
use vtiles_core::{
	Blob,
	io::{PBF_FIXED64, PBF_LENGTH_DELIMITED, PBF_VARINT, ValueWriter, ValueWriterBlob},
};

const COMMAND_MOVE_TO: u32 = 1;
const COMMAND_LINE_TO: u32 = 2;
const COMMAND_CLOSE_PATH: u32 = 7;

fn command(id: u32, count: u32) -> u32 {
	(id & 0x7) | (count << 3)
}

fn zigzag(value: i32) -> u32 {
	((value << 1) ^ (value >> 31)) as u32
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeomType {
	Point = 1,
	Polygon = 3,
}

/// A property value as stored in the layer's value table.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
	String(String),
	Double(f64),
	UInt(u64),
}

impl PropertyValue {
	fn to_blob(&self) -> Result<Blob> {
		let mut writer = ValueWriterBlob::new_le();
		match self {
			PropertyValue::String(text) => {
				writer.write_pbf_key(1, PBF_LENGTH_DELIMITED)?;
				writer.write_pbf_string(text)?;
			}
			PropertyValue::Double(value) => {
				writer.write_pbf_key(3, PBF_FIXED64)?;
				writer.write_f64(*value)?;
			}
			PropertyValue::UInt(value) => {
				writer.write_pbf_key(5, PBF_VARINT)?;
				writer.write_varint(*value)?;
			}
		}
		Ok(writer.into_blob())
	}
}

/// One feature: geometry commands plus key/value properties.
#[derive(Clone, Debug, PartialEq)]
pub struct VectorFeature {
	geom_type: GeomType,
	geometry: Vec<u32>,
	properties: Vec<(String, PropertyValue)>,
}

impl VectorFeature {
	pub fn point(x: i32, y: i32) -> VectorFeature {
		VectorFeature {
			geom_type: GeomType::Point,
			geometry: vec![command(COMMAND_MOVE_TO, 1), zigzag(x), zigzag(y)],
			properties: Vec::new(),
		}
	}

	/// A polygon with a single ring. The ring must not repeat its first point at the end.
	///
	/// Exterior rings are clockwise in tile coordinates (y pointing down).
	pub fn polygon(ring: &[(i32, i32)]) -> VectorFeature {
		let mut geometry = Vec::with_capacity(ring.len() * 2 + 3);
		if let Some((&(x0, y0), rest)) = ring.split_first() {
			geometry.extend([command(COMMAND_MOVE_TO, 1), zigzag(x0), zigzag(y0)]);
			geometry.push(command(COMMAND_LINE_TO, rest.len() as u32));
			let mut cursor = (x0, y0);
			for &(x, y) in rest {
				geometry.extend([zigzag(x - cursor.0), zigzag(y - cursor.1)]);
				cursor = (x, y);
			}
			geometry.push(command(COMMAND_CLOSE_PATH, 1));
		}
		VectorFeature {
			geom_type: GeomType::Polygon,
			geometry,
			properties: Vec::new(),
		}
	}

	pub fn with_property(mut self, key: &str, value: PropertyValue) -> VectorFeature {
		self.properties.push((key.to_string(), value));
		self
	}

	pub fn geom_type(&self) -> GeomType {
		self.geom_type
	}

	pub fn geometry(&self) -> &[u32] {
		&self.geometry
	}

	fn to_blob(&self, tags: &[u32]) -> Result<Blob> {
		let mut writer = ValueWriterBlob::new_le();

		if !tags.is_empty() {
			writer.write_pbf_key(2, PBF_LENGTH_DELIMITED)?;
			writer.write_pbf_packed_uint32(tags).context("Failed to write feature tags")?;
		}

		writer.write_pbf_key(3, PBF_VARINT)?;
		writer.write_varint(self.geom_type as u64)?;

		writer.write_pbf_key(4, PBF_LENGTH_DELIMITED)?;
		writer
			.write_pbf_packed_uint32(&self.geometry)
			.context("Failed to write feature geometry")?;

		Ok(writer.into_blob())
	}
}

/// A named layer. Keys and values of all features are collected into shared tables.
#[derive(Clone, Debug, PartialEq)]
pub struct VectorLayer {
	name: String,
	extent: u32,
	features: Vec<VectorFeature>,
}

impl VectorLayer {
	pub fn new(name: &str, extent: u32) -> VectorLayer {
		VectorLayer {
			name: name.to_string(),
			extent,
			features: Vec::new(),
		}
	}

	pub fn push(&mut self, feature: VectorFeature) {
		self.features.push(feature);
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn features(&self) -> &[VectorFeature] {
		&self.features
	}

	pub fn to_blob(&self) -> Result<Blob> {
		let mut keys: Vec<&str> = Vec::new();
		let mut values: Vec<&PropertyValue> = Vec::new();
		let mut feature_tags: Vec<Vec<u32>> = Vec::with_capacity(self.features.len());

		for feature in &self.features {
			let mut tags = Vec::with_capacity(feature.properties.len() * 2);
			for (key, value) in &feature.properties {
				tags.push(index_of(&mut keys, key.as_str()));
				tags.push(index_of(&mut values, value));
			}
			feature_tags.push(tags);
		}

		let mut writer = ValueWriterBlob::new_le();

		writer.write_pbf_key(1, PBF_LENGTH_DELIMITED)?;
		writer.write_pbf_string(&self.name).context("Failed to write layer name")?;

		for (feature, tags) in self.features.iter().zip(&feature_tags) {
			writer.write_pbf_key(2, PBF_LENGTH_DELIMITED)?;
			writer.write_pbf_blob(&feature.to_blob(tags)?)?;
		}

		for key in keys {
			writer.write_pbf_key(3, PBF_LENGTH_DELIMITED)?;
			writer.write_pbf_string(key)?;
		}

		for value in values {
			writer.write_pbf_key(4, PBF_LENGTH_DELIMITED)?;
			writer.write_pbf_blob(&value.to_blob()?)?;
		}

		writer.write_pbf_key(5, PBF_VARINT)?;
		writer.write_varint(u64::from(self.extent))?;

		writer.write_pbf_key(15, PBF_VARINT)?;
		writer.write_varint(2)?;

		Ok(writer.into_blob())
	}
}

/// Position of `entry` in `table`, appending it first if necessary.
fn index_of<T: PartialEq>(table: &mut Vec<T>, entry: T) -> u32 {
	match table.iter().position(|existing| *existing == entry) {
		Some(index) => index as u32,
		None => {
			table.push(entry);
			(table.len() - 1) as u32
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VectorTile {
	pub layers: Vec<VectorLayer>,
}

impl VectorTile {
	pub fn new(layers: Vec<VectorLayer>) -> VectorTile {
		VectorTile { layers }
	}

	/// Appends the encoded tile to `writer`.
	pub fn write_to(&self, writer: &mut dyn ValueWriter<LE>) -> Result<()> {
		for layer in &self.layers {
			writer.write_pbf_key(3, PBF_LENGTH_DELIMITED)?;
			writer
				.write_pbf_blob(&layer.to_blob()?)
				.with_context(|| format!("Failed to write layer {:?}", layer.name))?;
		}
		Ok(())
	}

	pub fn to_blob(&self) -> Result<Blob> {
		let mut writer = ValueWriterBlob::new_le();
		self.write_to(&mut writer)?;
		Ok(writer.into_blob())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn zigzag_values() {
		assert_eq!(zigzag(0), 0);
		assert_eq!(zigzag(-1), 1);
		assert_eq!(zigzag(1), 2);
		assert_eq!(zigzag(-2), 3);
		assert_eq!(zigzag(2048), 4096);
	}

	#[test]
	fn point_geometry() {
		let feature = VectorFeature::point(25, 17);
		assert_eq!(feature.geom_type(), GeomType::Point);
		assert_eq!(feature.geometry(), &[9, 50, 34]);
	}

	#[test]
	fn polygon_geometry() {
		let feature = VectorFeature::polygon(&[(3, 6), (8, 12), (20, 34)]);
		assert_eq!(feature.geom_type(), GeomType::Polygon);
		assert_eq!(feature.geometry(), &[9, 6, 12, 18, 10, 12, 24, 44, 15]);
	}

	#[test]
	fn empty_polygon_has_no_commands() {
		assert!(VectorFeature::polygon(&[]).geometry().is_empty());
	}

	#[test]
	fn feature_bytes() -> Result<()> {
		let blob = VectorFeature::point(1, 2).to_blob(&[])?;
		assert_eq!(blob.into_vec(), vec![0x18, 0x01, 0x22, 0x03, 0x09, 0x02, 0x04]);
		Ok(())
	}

	#[test]
	fn layer_bytes() -> Result<()> {
		let mut layer = VectorLayer::new("a", 4096);
		layer.push(VectorFeature::point(1, 2).with_property("z", PropertyValue::UInt(3)));
		assert_eq!(
			layer.to_blob()?.into_vec(),
			vec![
				0x0A, 0x01, b'a', // name
				0x12, 0x0B, 0x12, 0x02, 0x00, 0x00, 0x18, 0x01, 0x22, 0x03, 0x09, 0x02, 0x04, // feature
				0x1A, 0x01, b'z', // key
				0x22, 0x02, 0x28, 0x03, // value
				0x28, 0x80, 0x20, // extent
				0x78, 0x02, // version
			]
		);
		Ok(())
	}

	#[test]
	fn shared_property_tables() -> Result<()> {
		let mut layer = VectorLayer::new("l", 256);
		layer.push(
			VectorFeature::point(0, 0)
				.with_property("kind", PropertyValue::String("a".to_string()))
				.with_property("z", PropertyValue::UInt(1)),
		);
		layer.push(
			VectorFeature::point(1, 1)
				.with_property("z", PropertyValue::UInt(1))
				.with_property("lat", PropertyValue::Double(1.0)),
		);

		let bytes = layer.to_blob()?.into_vec();
		// second feature references key 1 ("z") and value 1 (uint 1), then key 2 and value 2
		let second_tags = [0x12, 0x04, 0x01, 0x01, 0x02, 0x02];
		assert!(bytes.windows(second_tags.len()).any(|w| w == second_tags));
		// double value: key 3 with wire type 1, little endian
		let double = [0x22, 0x09, 0x19, 0, 0, 0, 0, 0, 0, 0xF0, 0x3F];
		assert!(bytes.windows(double.len()).any(|w| w == double));
		Ok(())
	}

	#[test]
	fn tile_wraps_layers() -> Result<()> {
		let layer = VectorLayer::new("a", 4096);
		let layer_bytes = layer.to_blob()?.into_vec();
		let tile = VectorTile::new(vec![layer.clone(), layer]).to_blob()?.into_vec();

		let mut expected = Vec::new();
		for _ in 0..2 {
			expected.push(0x1A);
			expected.push(layer_bytes.len() as u8);
			expected.extend_from_slice(&layer_bytes);
		}
		assert_eq!(tile, expected);
		Ok(())
	}
}
