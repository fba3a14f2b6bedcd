//! Rendering Variants

use crate::error::*;
use crate::spectrum::ArcUpsamplingModel;
use std::fmt;
use std::str::FromStr;

/// The color representation used by the renderer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Full spectral rendering with sampled wavelengths.
    Spectral,

    /// Three channel RGB rendering.
    Rgb,

    /// Single channel monochromatic rendering.
    Monochrome,
}

impl Variant {
    /// Returns the number of channels stored by color textures.
    pub fn channel_count(&self) -> usize {
        match self {
            Self::Spectral | Self::Rgb => 3,
            Self::Monochrome => 1,
        }
    }

    /// Returns true for spectral rendering.
    pub fn is_spectral(&self) -> bool {
        matches!(self, Self::Spectral)
    }

    /// Returns the canonical variant name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Spectral => "scalar_spectral",
            Self::Rgb => "scalar_rgb",
            Self::Monochrome => "scalar_mono",
        }
    }
}

impl FromStr for Variant {
    type Err = Error;

    /// Parses a variant name.
    ///
    /// * `s` - The name.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "scalar_spectral" | "spectral" => Ok(Self::Spectral),
            "scalar_rgb" | "rgb" => Ok(Self::Rgb),
            "scalar_mono" | "mono" => Ok(Self::Monochrome),
            _ => Err(Error::UnknownVariant(s.to_string())),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Rendering configuration handed to plugins when they are constructed.
#[derive(Clone)]
pub struct RenderConfig {
    /// The active variant.
    pub variant: Variant,

    /// Spectral upsampling model. Required by spectral variants.
    upsampling: Option<ArcUpsamplingModel>,
}

impl RenderConfig {
    /// Create a new `RenderConfig` without an upsampling model.
    ///
    /// * `variant` - The active variant.
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            upsampling: None,
        }
    }

    /// Sets the spectral upsampling model.
    ///
    /// * `model` - The model.
    pub fn with_upsampling(mut self, model: ArcUpsamplingModel) -> Self {
        self.upsampling = Some(model);
        self
    }

    /// Returns the spectral upsampling model or an error if none is loaded.
    pub fn upsampling(&self) -> Result<&ArcUpsamplingModel> {
        self.upsampling.as_ref().ok_or(Error::MissingUpsamplingModel)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
