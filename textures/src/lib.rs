//! Textures

use spectral_core::error::*;
use spectral_core::paramset::ParamSet;
use spectral_core::texture::*;
use spectral_core::variant::RenderConfig;
use std::sync::Arc;

#[macro_use]
extern crate log;

mod srgb;

// Re-export
pub use srgb::*;

/// Creates a spectrum texture.
///
/// * `name`   - Plugin name.
/// * `tp`     - Parameter set.
/// * `config` - Rendering configuration.
pub fn make_spectrum_texture(
    name: &str,
    tp: &ParamSet,
    config: &RenderConfig,
) -> Result<ArcTexture> {
    let tex: ArcTexture = match name {
        "srgb" => Arc::new(SRGBReflectanceTexture::try_from((tp, config))?),
        _ => return Err(Error::UnknownTexture(name.to_string())),
    };
    tp.report_unused(name);
    Ok(tex)
}
