//! Spectrum

mod color;
mod rgb2spec;
mod upsampling;
mod wavelength;

// Re-export
pub use color::*;
pub use rgb2spec::*;
pub use upsampling::*;
pub use wavelength::*;
