//! Writers for the binary values used when encoding vector tiles.
//!
//! [`ValueWriter`] carries the encoding logic (varints, zigzag integers, protobuf keys and
//! length-delimited fields). [`ValueWriterBlob`] collects the output in an owned [`Blob`](crate::Blob),
//! [`ValueWriterBuffer`] appends it to a borrowed `Vec<u8>`.

mod value_writer;
mod value_writer_blob;
mod value_writer_buffer;

pub use value_writer::*;
pub use value_writer_blob::*;
pub use value_writer_buffer::*;
