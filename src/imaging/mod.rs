//! Image decoding and tensor preparation.

mod decode;
mod prepare;

pub use decode::load_image;
pub use prepare::prepare;
