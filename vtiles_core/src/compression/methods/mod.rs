mod deflate;
mod gzip;
mod zlib;

pub use gzip::*;
pub use zlib::*;
