//! Compression of rendered tiles.
//!
//! [`compress`] is the adapter used by a pyramid run: identity for `none`, deflate with
//! zlib framing for `zlib`, and the same deflate core with gzip framing for `gzip`. The
//! deflate level and strategy come from the [`CompressionConfig`](crate::CompressionConfig).
//!
//! ```rust
//! use vtiles_core::{Blob, CompressionConfig, CompressionStrategy, TileCompression, compression::*};
//!
//! let data = Blob::from("tile data tile data tile data");
//! let config = CompressionConfig::new(TileCompression::Gzip, 9, CompressionStrategy::Rle)?;
//! let compressed = compress(data.clone(), &config)?;
//! assert_eq!(decompress(&compressed, TileCompression::Gzip)?, data);
//! # Ok::<(), anyhow::Error>(())
//! ```

mod functions;
mod methods;
#[cfg(test)]
pub mod tests;

pub use functions::*;
pub use methods::*;
