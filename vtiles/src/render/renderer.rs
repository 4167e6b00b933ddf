use super::{DatasourceKind, PluginRegistry, PropertyValue, Stylesheet, TileRenderer, VectorFeature, VectorLayer, VectorTile};
use anyhow::{Result, bail};
use std::f64::consts::PI;
use vtiles_core::{PyramidError, TileCoord, io::ValueWriterBuffer};
use vtiles_derive::context;

/// Renders every tile as a Mapbox Vector Tile with one layer per stylesheet layer.
///
/// Features carry the tile coordinate as `z`, `x` and `y` properties. `center` features
/// additionally carry `lon` and `lat` of the tile center in degrees.
#[derive(Clone, Debug)]
pub struct VectorTileRenderer {
	extent: u32,
	layers: Vec<(String, DatasourceKind)>,
}

impl VectorTileRenderer {
	/// Resolves the datasources of all stylesheet layers.
	#[context("Failed to load map")]
	pub fn new(stylesheet: &Stylesheet, registry: &PluginRegistry) -> Result<VectorTileRenderer> {
		let mut layers = Vec::with_capacity(stylesheet.layers.len());
		for layer in &stylesheet.layers {
			let Some(kind) = registry.get(&layer.datasource) else {
				let registered = registry.names().collect::<Vec<_>>();
				bail!(PyramidError::render(format!(
					"layer {:?} uses datasource {:?}, which is not registered (registered: {})",
					layer.name,
					layer.datasource,
					if registered.is_empty() {
						"none".to_string()
					} else {
						registered.join(", ")
					}
				)));
			};
			layers.push((layer.name.clone(), kind));
		}

		log::debug!("map loaded with {} layers, extent {}", layers.len(), stylesheet.extent);
		Ok(VectorTileRenderer {
			extent: stylesheet.extent,
			layers,
		})
	}

	pub fn build_tile(&self, coord: &TileCoord) -> VectorTile {
		let extent = self.extent as i32;
		VectorTile::new(
			self
				.layers
				.iter()
				.map(|(name, kind)| {
					let feature = match kind {
						DatasourceKind::Outline => VectorFeature::polygon(&[(0, 0), (extent, 0), (extent, extent), (0, extent)]),
						DatasourceKind::Center => {
							let (lon, lat) = tile_center(coord);
							VectorFeature::point(extent / 2, extent / 2)
								.with_property("lon", PropertyValue::Double(lon))
								.with_property("lat", PropertyValue::Double(lat))
						}
					};
					let mut layer = VectorLayer::new(name, self.extent);
					layer.push(
						feature
							.with_property("z", PropertyValue::UInt(u64::from(coord.level)))
							.with_property("x", PropertyValue::UInt(u64::from(coord.x)))
							.with_property("y", PropertyValue::UInt(u64::from(coord.y))),
					);
					layer
				})
				.collect(),
		)
	}
}

impl TileRenderer for VectorTileRenderer {
	fn render_tile(&mut self, coord: &TileCoord, buffer: &mut Vec<u8>) -> Result<()> {
		log::trace!("render tile {coord}");
		self.build_tile(coord).write_to(&mut ValueWriterBuffer::new_le(buffer))
	}
}

/// Longitude and latitude in degrees of the center of a web mercator tile.
fn tile_center(coord: &TileCoord) -> (f64, f64) {
	let size = 2f64.powi(i32::from(coord.level));
	let lon = (f64::from(coord.x) + 0.5) / size * 360.0 - 180.0;
	let lat = (PI * (1.0 - 2.0 * (f64::from(coord.y) + 0.5) / size)).sinh().atan().to_degrees();
	(lon, lat)
}

#[cfg(test)]
mod tests {
	use super::*;
	use assert_fs::{TempDir, prelude::*};
	use pretty_assertions::assert_eq;
	use vtiles_core::ErrorKind;

	fn registry(kinds: &[&str]) -> Result<(TempDir, PluginRegistry)> {
		let dir = TempDir::new()?;
		let mut registry = PluginRegistry::new();
		for kind in kinds {
			let plugin = dir.child(format!("{kind}.input"));
			plugin.touch()?;
			registry.register(plugin.path())?;
		}
		Ok((dir, registry))
	}

	#[test]
	fn missing_datasource() -> Result<()> {
		let (_dir, registry) = registry(&["outline"])?;
		let stylesheet = Stylesheet::parse("layers: [{name: label, datasource: center}]")?;
		let error = VectorTileRenderer::new(&stylesheet, &registry).unwrap_err();
		assert_eq!(PyramidError::kind_of(&error), Some(ErrorKind::Render));
		assert_eq!(
			format!("{error:#}"),
			"Failed to load map: layer \"label\" uses datasource \"center\", which is not registered (registered: outline)"
		);
		Ok(())
	}

	#[test]
	fn layers_follow_stylesheet() -> Result<()> {
		let (_dir, registry) = registry(&["outline", "center"])?;
		let stylesheet = Stylesheet::parse(
			"extent: 4\nlayers: [{name: label, datasource: center}, {name: boundary, datasource: outline}]",
		)?;
		let renderer = VectorTileRenderer::new(&stylesheet, &registry)?;
		let tile = renderer.build_tile(&TileCoord::new(0, 0, 0));

		let names: Vec<&str> = tile.layers.iter().map(|layer| layer.name()).collect();
		assert_eq!(names, vec!["label", "boundary"]);

		let center = &tile.layers[0].features()[0];
		assert_eq!(center.geometry(), &[9, 4, 4]);

		let outline = &tile.layers[1].features()[0];
		assert_eq!(outline.geometry(), &[9, 0, 0, 26, 8, 0, 0, 8, 7, 0, 15]);
		Ok(())
	}

	#[test]
	fn render_appends_encoded_tile() -> Result<()> {
		let (_dir, registry) = registry(&["outline"])?;
		let stylesheet = Stylesheet::parse("layers: [{name: boundary, datasource: outline}]")?;
		let mut renderer = VectorTileRenderer::new(&stylesheet, &registry)?;
		let coord = TileCoord::new(3, 2, 5);

		let mut buffer = Vec::new();
		renderer.render_tile(&coord, &mut buffer)?;
		assert_eq!(buffer, renderer.build_tile(&coord).to_blob()?.into_vec());
		assert_eq!(buffer[0], 0x1A);

		let first = buffer.clone();
		renderer.render_tile(&coord, &mut buffer)?;
		assert_eq!(buffer.len(), first.len() * 2);
		Ok(())
	}

	#[test]
	fn tiles_differ_by_coordinate() -> Result<()> {
		let (_dir, registry) = registry(&["outline"])?;
		let stylesheet = Stylesheet::parse("layers: [{name: boundary, datasource: outline}]")?;
		let renderer = VectorTileRenderer::new(&stylesheet, &registry)?;
		let a = renderer.build_tile(&TileCoord::new(1, 0, 1)).to_blob()?;
		let b = renderer.build_tile(&TileCoord::new(1, 1, 0)).to_blob()?;
		assert_ne!(a, b);
		Ok(())
	}

	#[test]
	fn tile_center_degrees() {
		assert_eq!(tile_center(&TileCoord::new(0, 0, 0)), (0.0, 0.0));

		let (lon, lat) = tile_center(&TileCoord::new(1, 1, 0));
		assert_eq!(lon, 90.0);
		assert!((lat - 66.513_260_443_111_84).abs() < 1e-9, "{lat}");
	}
}
