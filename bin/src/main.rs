#[macro_use]
extern crate log;

use clap::Parser;
use spectral_core::error::*;
use spectral_core::interaction::SurfaceInteraction;
use spectral_core::paramset::ParamSet;
use spectral_core::spectrum::*;
use spectral_core::texture::*;
use spectral_core::variant::*;
use std::process::ExitCode;
use std::sync::Arc;
use textures::make_spectrum_texture;

mod options;

use options::Options;

fn main() -> ExitCode {
    // Initialize `env_logger`.
    env_logger::init();

    let options = Options::parse();
    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(options: &Options) -> Result<()> {
    let variant: Variant = options.variant.parse()?;

    let mut config = RenderConfig::new(variant);
    if let Some(path) = options.table.as_ref() {
        config = config.with_upsampling(Arc::new(Rgb2SpecTable::load(path)?));
    } else if variant.is_spectral() {
        return Err(Error::MissingUpsamplingModel);
    }

    let mut ps = ParamSet::new();
    ps.add_rgb("color", &options.color);
    ps.add_bool("unbounded", &[options.unbounded]);
    debug!("Texture parameters: {}", ps);

    let mut texture = make_spectrum_texture("srgb", &ps, &config)?;

    let mut snapshot = ParameterSnapshot::new();
    if let Some(tex) = Arc::get_mut(&mut texture) {
        tex.traverse(&mut snapshot);
    }
    for name in snapshot.names() {
        println!("{} = {:?}", name, snapshot.get(name).unwrap_or_default());
    }

    for u in options.samples.iter() {
        let (wavelengths, _) = sample_wavelengths(*u);
        let si = SurfaceInteraction::from_wavelengths(wavelengths);
        match texture.eval(&si, true) {
            SpectrumValue::Spectral(values) => {
                println!("eval {:?} nm = {:?}", wavelengths, values)
            }
            value => println!("eval = {:?}", value.as_slice()),
        }
    }
    println!("mean = {}", texture.mean());

    Ok(())
}
