pub mod compression;
pub mod error;

pub use compression::{case_shift, frequency, huffman, lz77, pipeline, stats};
pub use error::{Error, Result};
