//! Contains the building blocks of a tile pyramid run: coordinates, level ranges, the
//! quadtree expansion, compression of tile payloads and the typed error kinds.

pub mod compression;

mod error;
pub use error::*;

pub mod io;

pub mod types;
pub use types::*;
