//! Contains coordinates, level ranges, the pyramid expansion and compression settings.

mod blob;
pub use blob::*;

mod level_range;
pub use level_range::*;

mod tile_compression;
pub use tile_compression::*;

mod tile_coord;
pub use tile_coord::*;

mod tile_pyramid;
pub use tile_pyramid::*;

mod tile_range;
pub use tile_range::*;
