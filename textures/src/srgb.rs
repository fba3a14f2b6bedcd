//! sRGB Reflectance Texture

use spectral_core::error::*;
use spectral_core::interaction::*;
use spectral_core::paramset::*;
use spectral_core::pbrt::*;
use spectral_core::spectrum::*;
use spectral_core::texture::*;
use spectral_core::variant::*;
use std::fmt;

/// Name under which the reflectance value is exposed during traversal.
pub const VALUE_PARAMETER: &str = "value";

/// Stored value of the texture for each variant.
#[derive(Clone)]
enum Reflectance {
    /// Coefficients of the spectral upsampling model and the model itself.
    Spectral {
        coeffs: Color3f,
        model: ArcUpsamplingModel,
    },

    /// Linear RGB reflectance.
    Rgb(Color3f),

    /// Luminance of the color.
    Monochrome(Color1f),
}

/// Implements a texture that returns a constant reflectance given as an sRGB
/// color, converted once to the representation of the active variant.
#[derive(Clone)]
pub struct SRGBReflectanceTexture {
    /// The converted reflectance.
    value: Reflectance,
}

impl SRGBReflectanceTexture {
    /// Create a new `SRGBReflectanceTexture`.
    ///
    /// * `color`     - Linear sRGB reflectance.
    /// * `unbounded` - Accept channels outside [0, 1].
    /// * `config`    - Rendering configuration selecting the variant.
    pub fn new(color: Color3f, unbounded: bool, config: &RenderConfig) -> Result<Self> {
        if color.any_outside(0.0, 1.0) {
            if !unbounded {
                return Err(Error::InvalidParameter {
                    name: String::from("color"),
                    value: color,
                    range: (0.0, 1.0),
                });
            }
            debug!("Accepting unbounded RGB reflectance value {}.", color);
        }

        let value = match config.variant {
            Variant::Spectral => {
                let model = config.upsampling()?;
                Reflectance::Spectral {
                    coeffs: model.fetch(&color),
                    model: model.clone(),
                }
            }
            Variant::Rgb => Reflectance::Rgb(color),
            Variant::Monochrome => Reflectance::Monochrome(Color1f::new([luminance(&color)])),
        };

        let texture = Self { value };
        debug!("Created {}.", texture);
        Ok(texture)
    }

    /// Returns the stored values: model coefficients in spectral variants,
    /// the reflectance itself otherwise.
    pub fn value(&self) -> &[Float] {
        match &self.value {
            Reflectance::Spectral { coeffs, .. } => coeffs.as_slice(),
            Reflectance::Rgb(c) => c.as_slice(),
            Reflectance::Monochrome(c) => c.as_slice(),
        }
    }
}

impl Texture for SRGBReflectanceTexture {
    fn variant(&self) -> Variant {
        match self.value {
            Reflectance::Spectral { .. } => Variant::Spectral,
            Reflectance::Rgb(_) => Variant::Rgb,
            Reflectance::Monochrome(_) => Variant::Monochrome,
        }
    }

    /// Evaluate the texture at surface interaction.
    ///
    /// * `si`     - Surface interaction.
    /// * `active` - Whether the lane is live.
    fn eval(&self, si: &SurfaceInteraction, active: bool) -> SpectrumValue {
        if !active {
            return SpectrumValue::zero(self.variant());
        }

        match &self.value {
            Reflectance::Spectral { coeffs, model } => {
                SpectrumValue::Spectral(model.eval(coeffs, &si.wavelengths))
            }
            Reflectance::Rgb(c) => SpectrumValue::Rgb(*c),
            Reflectance::Monochrome(c) => SpectrumValue::Monochrome(*c),
        }
    }

    fn mean(&self) -> Float {
        match &self.value {
            Reflectance::Spectral { coeffs, model } => model.mean(coeffs).hmean(),
            Reflectance::Rgb(c) => c.hmean(),
            Reflectance::Monochrome(c) => c.hmean(),
        }
    }
}

impl TraversableObject for SRGBReflectanceTexture {
    /// Exposes the stored value as `"value"`. Written values are not
    /// validated.
    ///
    /// * `callback` - The callback.
    fn traverse(&mut self, callback: &mut dyn TraversalCallback) {
        let value = match &mut self.value {
            Reflectance::Spectral { coeffs, .. } => coeffs.as_mut_slice(),
            Reflectance::Rgb(c) => c.as_mut_slice(),
            Reflectance::Monochrome(c) => c.as_mut_slice(),
        };
        callback.put_parameter(VALUE_PARAMETER, value);
    }
}

impl TryFrom<(&ParamSet, &RenderConfig)> for SRGBReflectanceTexture {
    type Error = Error;

    /// Create a `SRGBReflectanceTexture` from the `color` and `unbounded`
    /// properties.
    ///
    /// * `p` - Tuple containing the properties and the rendering
    ///         configuration.
    fn try_from(p: (&ParamSet, &RenderConfig)) -> Result<Self> {
        let (ps, config) = p;
        let color = ps.get_color("color")?;
        let unbounded = ps.find_one_bool("unbounded", false);
        Self::new(color, unbounded, config)
    }
}

impl fmt::Display for SRGBReflectanceTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SRGBReflectanceTexture[variant = {}, value = [", self.variant())?;
        for (i, v) in self.value().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]]")
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;
    use proptest::prelude::*;
    use std::sync::Arc;

    /// Upsampling model storing `luminance(rgb) - 0.5` as the constant term so
    /// the spectrum is flat at a value derived from the color.
    struct Flat;

    impl SpectralUpsamplingModel for Flat {
        fn fetch(&self, rgb: &Color3f) -> Color3f {
            if rgb.as_slice().iter().all(|v| *v == 1.0) {
                return Color3f::rgb(0.0, 0.0, INFINITY);
            }
            Color3f::rgb(0.0, 0.0, luminance(rgb) - 0.5)
        }
    }

    fn config(variant: Variant) -> RenderConfig {
        RenderConfig::new(variant).with_upsampling(Arc::new(Flat))
    }

    fn si() -> SurfaceInteraction {
        SurfaceInteraction::from_wavelengths(sample_wavelengths(0.3).0)
    }

    #[test]
    fn rgb_scenario() {
        let tex = SRGBReflectanceTexture::new(
            Color3f::rgb(0.8, 0.2, 0.2),
            false,
            &config(Variant::Rgb),
        )
        .unwrap();

        assert_eq!(
            tex.eval(&si(), true),
            SpectrumValue::Rgb(Color3f::rgb(0.8, 0.2, 0.2))
        );
        assert!(approx_eq!(f32, tex.mean(), 0.4, epsilon = 1e-6));
    }

    #[test]
    fn out_of_range_scenario() {
        let err = SRGBReflectanceTexture::new(
            Color3f::rgb(1.5, 0.0, 0.0),
            false,
            &config(Variant::Rgb),
        )
        .err()
        .unwrap();

        match err {
            Error::InvalidParameter { value, range, .. } => {
                assert_eq!(value, Color3f::rgb(1.5, 0.0, 0.0));
                assert_eq!(range, (0.0, 1.0));
            }
            e => panic!("unexpected error {}", e),
        }
    }

    #[test]
    fn unbounded_accepts_out_of_range() {
        for variant in [Variant::Spectral, Variant::Rgb, Variant::Monochrome] {
            let c = Color3f::rgb(1.5, -0.25, 0.0);
            assert!(SRGBReflectanceTexture::new(c, false, &config(variant)).is_err());
            assert!(SRGBReflectanceTexture::new(c, true, &config(variant)).is_ok());
        }
    }

    #[test]
    fn nan_is_rejected_unless_unbounded() {
        let c = Color3f::rgb(Float::NAN, 0.5, 0.5);
        assert!(SRGBReflectanceTexture::new(c, false, &config(Variant::Rgb)).is_err());
        assert!(SRGBReflectanceTexture::new(c, true, &config(Variant::Rgb)).is_ok());
    }

    #[test]
    fn boundaries_accepted() {
        for variant in [Variant::Spectral, Variant::Rgb, Variant::Monochrome] {
            for v in [0.0, 1.0] {
                for unbounded in [false, true] {
                    let c = Color3f::splat(v);
                    assert!(SRGBReflectanceTexture::new(c, unbounded, &config(variant)).is_ok());
                }
            }
        }
    }

    #[test]
    fn channel_count_follows_variant() {
        for variant in [Variant::Spectral, Variant::Rgb, Variant::Monochrome] {
            let mut tex =
                SRGBReflectanceTexture::new(Color3f::rgb(0.8, 0.2, 0.2), false, &config(variant))
                    .unwrap();
            assert_eq!(tex.variant(), variant);
            assert_eq!(tex.value().len(), variant.channel_count());

            let mut snapshot = ParameterSnapshot::new();
            tex.traverse(&mut snapshot);
            assert_eq!(
                snapshot.get(VALUE_PARAMETER).map(|v| v.len()),
                Some(variant.channel_count())
            );
        }
    }

    #[test]
    fn spectral_white_mean_is_one() {
        let tex = SRGBReflectanceTexture::new(
            Color3f::splat(1.0),
            false,
            &config(Variant::Spectral),
        )
        .unwrap();
        assert_eq!(tex.mean(), 1.0);
        assert_eq!(
            tex.eval(&si(), true),
            SpectrumValue::Spectral([1.0; WAVELENGTH_SAMPLES])
        );
    }

    #[test]
    fn spectral_uses_model() {
        let c = Color3f::rgb(0.8, 0.2, 0.2);
        let tex = SRGBReflectanceTexture::new(c, false, &config(Variant::Spectral)).unwrap();

        let coeffs = Flat.fetch(&c);
        assert_eq!(tex.value(), coeffs.as_slice());

        let si = si();
        assert_eq!(
            tex.eval(&si, true),
            SpectrumValue::Spectral(Flat.eval(&coeffs, &si.wavelengths))
        );
        assert_eq!(tex.mean(), Flat.mean(&coeffs).hmean());
    }

    #[test]
    fn spectral_requires_model() {
        let result = SRGBReflectanceTexture::new(
            Color3f::splat(0.5),
            false,
            &RenderConfig::new(Variant::Spectral),
        );
        assert!(matches!(result, Err(Error::MissingUpsamplingModel)));
    }

    #[test]
    fn inactive_lane_is_black() {
        let tex = SRGBReflectanceTexture::new(
            Color3f::splat(0.5),
            false,
            &config(Variant::Monochrome),
        )
        .unwrap();
        assert_eq!(
            tex.eval(&si(), false),
            SpectrumValue::Monochrome(Color1f::new([0.0]))
        );
    }

    #[test]
    fn batch_leaves_inactive_lanes_untouched() {
        let tex = SRGBReflectanceTexture::new(
            Color3f::rgb(0.1, 0.2, 0.3),
            false,
            &config(Variant::Rgb),
        )
        .unwrap();

        let sentinel = SpectrumValue::Rgb(Color3f::splat(-1.0));
        let points = [si(); 4];
        let active = [true, false, true, false];
        let mut out = [sentinel; 4];
        tex.eval_batch(&points, &active, &mut out);

        let expected = SpectrumValue::Rgb(Color3f::rgb(0.1, 0.2, 0.3));
        assert_eq!(out, [expected, sentinel, expected, sentinel]);
    }

    #[test]
    fn traverse_exposes_value() {
        let mut tex = SRGBReflectanceTexture::new(
            Color3f::rgb(0.8, 0.2, 0.2),
            false,
            &config(Variant::Rgb),
        )
        .unwrap();

        let mut snapshot = ParameterSnapshot::new();
        tex.traverse(&mut snapshot);
        assert_eq!(snapshot.names(), vec![VALUE_PARAMETER]);
        assert_eq!(snapshot.get(VALUE_PARAMETER), Some(&[0.8, 0.2, 0.2][..]));
    }

    #[test]
    fn traverse_overwrites_without_validation() {
        let mut tex = SRGBReflectanceTexture::new(
            Color3f::splat(0.5),
            false,
            &config(Variant::Monochrome),
        )
        .unwrap();

        let mut update = ParameterUpdate::new(VALUE_PARAMETER, &[2.0]);
        tex.traverse(&mut update);
        assert!(update.applied());
        assert_eq!(
            tex.eval(&si(), true),
            SpectrumValue::Monochrome(Color1f::new([2.0]))
        );
        assert_eq!(tex.mean(), 2.0);
    }

    #[test]
    fn from_params() {
        let mut ps = ParamSet::new();
        ps.add_rgb("color", &[1.5, 0.0, 0.0]);
        assert!(SRGBReflectanceTexture::try_from((&ps, &config(Variant::Rgb))).is_err());

        ps.add_bool("unbounded", &[true]);
        let tex = SRGBReflectanceTexture::try_from((&ps, &config(Variant::Rgb))).unwrap();
        assert_eq!(tex.value(), &[1.5, 0.0, 0.0]);
    }

    #[test]
    fn display() {
        let tex = SRGBReflectanceTexture::new(
            Color3f::splat(1.0),
            false,
            &config(Variant::Monochrome),
        )
        .unwrap();
        assert_eq!(
            tex.to_string(),
            format!(
                "SRGBReflectanceTexture[variant = scalar_mono, value = [{}]]",
                luminance(&Color3f::splat(1.0))
            )
        );
    }

    proptest! {
        #[test]
        fn rgb_round_trip(r in 0.0..=1.0f32, g in 0.0..=1.0f32, b in 0.0..=1.0f32) {
            let c = Color3f::rgb(r, g, b);
            let tex = SRGBReflectanceTexture::new(c, false, &config(Variant::Rgb)).unwrap();
            prop_assert_eq!(tex.eval(&si(), true), SpectrumValue::Rgb(c));
        }

        #[test]
        fn monochrome_mean_is_luminance(r in 0.0..=1.0f32, g in 0.0..=1.0f32, b in 0.0..=1.0f32) {
            let c = Color3f::rgb(r, g, b);
            let tex = SRGBReflectanceTexture::new(c, false, &config(Variant::Monochrome)).unwrap();
            prop_assert_eq!(tex.mean(), luminance(&c));
        }

        #[test]
        fn eval_is_deterministic(r in 0.0..=1.0f32, g in 0.0..=1.0f32, b in 0.0..=1.0f32, u in 0.0..1.0f32) {
            let si = SurfaceInteraction::from_wavelengths(sample_wavelengths(u).0);
            for variant in [Variant::Spectral, Variant::Rgb, Variant::Monochrome] {
                let tex = SRGBReflectanceTexture::new(Color3f::rgb(r, g, b), false, &config(variant)).unwrap();
                prop_assert_eq!(tex.eval(&si, true), tex.eval(&si, true));
            }
        }

        #[test]
        fn out_of_range_rejected(v in 1.0001..10.0f32, channel in 0..3usize) {
            let mut c = Color3f::splat(0.5);
            c[channel] = v;
            prop_assert!(SRGBReflectanceTexture::new(c, false, &config(Variant::Rgb)).is_err());
            prop_assert!(SRGBReflectanceTexture::new(c, true, &config(Variant::Rgb)).is_ok());
        }
    }
}
