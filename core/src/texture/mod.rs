//! Textures

use crate::interaction::SurfaceInteraction;
use crate::pbrt::Float;
use crate::spectrum::*;
use crate::variant::Variant;
use std::sync::Arc;

mod traversal;

// Re-export
pub use traversal::*;

/// The value of a texture evaluated at a shading point. The representation
/// depends on the active variant.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SpectrumValue {
    /// One value per sampled wavelength.
    Spectral(SampledValues),

    /// Linear RGB reflectance.
    Rgb(Color3f),

    /// Monochromatic reflectance.
    Monochrome(Color1f),
}

impl SpectrumValue {
    /// Returns a black value for the given variant.
    ///
    /// * `variant` - The active variant.
    pub fn zero(variant: Variant) -> Self {
        match variant {
            Variant::Spectral => Self::Spectral([0.0; WAVELENGTH_SAMPLES]),
            Variant::Rgb => Self::Rgb(Color3f::default()),
            Variant::Monochrome => Self::Monochrome(Color1f::default()),
        }
    }

    /// Returns the values as a slice.
    pub fn as_slice(&self) -> &[Float] {
        match self {
            Self::Spectral(v) => v,
            Self::Rgb(c) => c.as_slice(),
            Self::Monochrome(c) => c.as_slice(),
        }
    }
}

/// Texture interface.
///
/// `eval` and `mean` only read the texture and may be called concurrently
/// from any number of render threads.
pub trait Texture: TraversableObject + Send + Sync {
    /// Returns the variant the texture was built for.
    fn variant(&self) -> Variant;

    /// Evaluate the texture at surface interaction. Inactive lanes return a
    /// black value.
    ///
    /// * `si`     - Surface interaction.
    /// * `active` - Whether the lane is live.
    fn eval(&self, si: &SurfaceInteraction, active: bool) -> SpectrumValue;

    /// Returns the mean value of the texture, used by sampling heuristics.
    fn mean(&self) -> Float;

    /// Evaluate the texture for a batch of surface interactions. Results are
    /// written only for active lanes; inactive lanes of `out` are left as is.
    ///
    /// * `si`     - Surface interactions.
    /// * `active` - Per-lane activity mask.
    /// * `out`    - Results.
    fn eval_batch(&self, si: &[SurfaceInteraction], active: &[bool], out: &mut [SpectrumValue]) {
        debug_assert!(si.len() == active.len() && si.len() == out.len());
        for ((si, active), out) in si.iter().zip(active.iter()).zip(out.iter_mut()) {
            if *active {
                *out = self.eval(si, true);
            }
        }
    }
}

/// Atomic reference counted `Texture`.
pub type ArcTexture = Arc<dyn Texture>;
