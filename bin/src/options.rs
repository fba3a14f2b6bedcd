//! Command line options

use clap::Parser;
use spectral_core::pbrt::Float;

/// Command line options.
#[derive(Parser, Clone, Debug)]
#[clap(author, version, about = "Evaluate an sRGB reflectance texture.", long_about = None)]
pub struct Options {
    /// Rendering variant.
    #[clap(
        long,
        short = 'm',
        value_name = "VARIANT",
        default_value = "scalar_rgb",
        help = "Rendering variant: scalar_spectral, scalar_rgb or scalar_mono."
    )]
    pub variant: String,

    /// The reflectance color.
    #[clap(
        long,
        short = 'c',
        value_name = "FLOAT",
        num_args = 3,
        required = true,
        allow_negative_numbers = true,
        help = "Linear sRGB reflectance (r g b)."
    )]
    pub color: Vec<Float>,

    /// Accept colors outside [0, 1].
    #[clap(long, help = "Accept color channels outside [0, 1].")]
    pub unbounded: bool,

    /// Path to the spectral upsampling table.
    #[clap(
        long = "table",
        short = 't',
        value_name = "FILE",
        help = "Spectral upsampling table used by the spectral variant."
    )]
    pub table: Option<String>,

    /// Wavelength samples.
    #[clap(
        long = "sample",
        short = 's',
        value_name = "FLOAT",
        default_values_t = vec![0.5],
        help = "Random numbers in [0, 1) used to sample wavelengths, one evaluation per value."
    )]
    pub samples: Vec<Float>,
}
