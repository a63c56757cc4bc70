//! Raster image loading and saving
//!
//! Decode and encode are external collaborators of the extraction core:
//! format support is delegated to the image crate, and failures surface as
//! typed errors instead of panics.

mod reader;
mod writer;

// Public exports
pub use self::reader::RasterReader;
pub use self::writer::RasterWriter;
