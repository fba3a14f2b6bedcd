//! Spectral Upsampling

use super::*;
use crate::pbrt::*;
use std::sync::Arc;

/// Number of wavelengths used to estimate the mean of an upsampled spectrum.
pub const MEAN_SAMPLES: usize = 16;

/// A model that turns an RGB color into a compact set of coefficients from
/// which a smooth reflectance spectrum can be reconstructed at arbitrary
/// wavelengths.
///
/// `eval` and `mean` default to the sigmoid-polynomial parameterization where
/// the coefficients `c` describe `s(λ) = sigmoid(c0 λ² + c1 λ + c2)`.
pub trait SpectralUpsamplingModel: Send + Sync {
    /// Returns the model coefficients for an RGB color.
    ///
    /// * `rgb` - Linear sRGB color.
    fn fetch(&self, rgb: &Color3f) -> Color3f;

    /// Evaluates the spectrum described by `coeffs` at the given wavelengths.
    ///
    /// * `coeffs`      - Model coefficients returned by `fetch()`.
    /// * `wavelengths` - Wavelengths in nm.
    fn eval(&self, coeffs: &Color3f, wavelengths: &Wavelength) -> SampledValues {
        let mut values = [0.0; WAVELENGTH_SAMPLES];
        for (v, lambda) in values.iter_mut().zip(wavelengths.iter()) {
            *v = sigmoid_polynomial(coeffs, *lambda);
        }
        values
    }

    /// Returns an approximate RGB mean of the spectrum described by `coeffs`.
    /// The sigmoid model is grey so every channel holds the same value.
    ///
    /// * `coeffs` - Model coefficients returned by `fetch()`.
    fn mean(&self, coeffs: &Color3f) -> Color3f {
        let step = (WAVELENGTH_MAX - WAVELENGTH_MIN) / (MEAN_SAMPLES - 1) as Float;
        let sum: Float = (0..MEAN_SAMPLES)
            .map(|i| sigmoid_polynomial(coeffs, WAVELENGTH_MIN + i as Float * step))
            .sum();
        Color3f::splat(sum / MEAN_SAMPLES as Float)
    }
}

/// Atomic reference counted `SpectralUpsamplingModel`.
pub type ArcUpsamplingModel = Arc<dyn SpectralUpsamplingModel>;

/// Evaluates the sigmoid of the quadratic polynomial described by `coeffs` at
/// a wavelength. An infinite constant term encodes an ideal black (-∞) or
/// white (+∞) spectrum.
///
/// * `coeffs` - Polynomial coefficients (c0 λ² + c1 λ + c2).
/// * `lambda` - Wavelength in nm.
#[inline]
pub fn sigmoid_polynomial(coeffs: &Color3f, lambda: Float) -> Float {
    if coeffs[2].is_infinite() {
        return if coeffs[2] > 0.0 { 1.0 } else { 0.0 };
    }

    let v = (coeffs[0] * lambda + coeffs[1]) * lambda + coeffs[2];
    if v.is_infinite() {
        return if v > 0.0 { 1.0 } else { 0.0 };
    }
    0.5 + 0.5 * v / (1.0 + v * v).sqrt()
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
