//! Errors

use crate::pbrt::Float;
use crate::spectrum::Color3f;
use thiserror::Error;

/// Errors raised while setting up spectral data and textures.
#[derive(Debug, Error)]
pub enum Error {
    /// A color parameter lies outside its valid range.
    #[error(
        "Invalid RGB reflectance value {value}, must be in the range {}!",
        format_range(.range)
    )]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// The offending value.
        value: Color3f,
        /// The valid range (low, high).
        range: (Float, Float),
    },

    /// A required parameter was not supplied.
    #[error("Property '{0}' has not been specified!")]
    MissingParameter(String),

    /// The rendering variant name is not recognized.
    #[error("Unknown variant '{0}'. Expected one of 'scalar_spectral', 'scalar_rgb' or 'scalar_mono'.")]
    UnknownVariant(String),

    /// The texture plugin name is not recognized.
    #[error("Spectrum texture '{0}' unknown.")]
    UnknownTexture(String),

    /// A spectral variant was requested without loading an upsampling model.
    #[error("No spectral upsampling model loaded!")]
    MissingUpsamplingModel,

    /// The spectral upsampling table is malformed.
    #[error("Invalid spectral upsampling table: {0}")]
    InvalidTable(String),

    /// I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Formats a range as `[low, high]`.
///
/// * `range` - The range.
fn format_range(range: &(Float, Float)) -> String {
    format!("[{}, {}]", range.0, range.1)
}

/// Result type using `Error`.
pub type Result<T> = std::result::Result<T, Error>;

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
