//! Interactions

use crate::pbrt::*;
use crate::spectrum::*;

/// SurfaceInteraction represents the shading point at which textures are
/// evaluated.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SurfaceInteraction {
    /// Point of interaction.
    pub p: [Float; 3],

    /// The uv coordinates from surface parametrization.
    pub uv: [Float; 2],

    /// Wavelengths sampled for the path. Only meaningful in spectral variants.
    pub wavelengths: Wavelength,
}

impl SurfaceInteraction {
    /// Create a new surface interaction.
    ///
    /// * `p`           - Point of interaction.
    /// * `uv`          - The uv coordinates from surface parametrization.
    /// * `wavelengths` - Wavelengths sampled for the path.
    pub fn new(p: [Float; 3], uv: [Float; 2], wavelengths: Wavelength) -> Self {
        Self { p, uv, wavelengths }
    }

    /// Create a surface interaction at the origin that only carries
    /// wavelengths.
    ///
    /// * `wavelengths` - Wavelengths sampled for the path.
    pub fn from_wavelengths(wavelengths: Wavelength) -> Self {
        Self::new([0.0; 3], [0.0; 2], wavelengths)
    }
}
