//! Wavelengths

use crate::pbrt::*;

/// Shortest wavelength in nm considered for spectral rendering.
pub const WAVELENGTH_MIN: Float = 360.0;

/// Longest wavelength in nm considered for spectral rendering.
pub const WAVELENGTH_MAX: Float = 830.0;

/// Number of wavelengths carried by each shading point in spectral mode.
pub const WAVELENGTH_SAMPLES: usize = 4;

/// The wavelengths sampled for a shading point.
pub type Wavelength = [Float; WAVELENGTH_SAMPLES];

/// Values sampled at each of the wavelengths of a shading point.
pub type SampledValues = [Float; WAVELENGTH_SAMPLES];

/// Samples `WAVELENGTH_SAMPLES` wavelengths uniformly over the visible range
/// using a single random number. The wavelengths are stratified: each one is
/// offset from the previous by an equal fraction of the range, wrapping around
/// at the end.
///
/// Returns the wavelengths and their sampling weights (inverse pdf).
///
/// * `sample` - Uniform random number in [0, 1).
pub fn sample_wavelengths(sample: Float) -> (Wavelength, SampledValues) {
    let range = WAVELENGTH_MAX - WAVELENGTH_MIN;
    let mut wavelengths = [0.0; WAVELENGTH_SAMPLES];

    for (i, lambda) in wavelengths.iter_mut().enumerate() {
        let mut u = sample + i as Float / WAVELENGTH_SAMPLES as Float;
        if u >= 1.0 {
            u -= 1.0;
        }
        *lambda = lerp(u, WAVELENGTH_MIN, WAVELENGTH_MAX);
    }

    (wavelengths, [range; WAVELENGTH_SAMPLES])
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn stratified_from_zero() {
        let (lambda, weight) = sample_wavelengths(0.0);
        assert_eq!(lambda[0], WAVELENGTH_MIN);
        assert!(lambda.windows(2).all(|w| w[0] < w[1]));
        assert!(weight.iter().all(|w| *w == WAVELENGTH_MAX - WAVELENGTH_MIN));
    }

    proptest! {
        #[test]
        fn wavelengths_in_range(u in 0.0..1.0f32) {
            let (lambda, _) = sample_wavelengths(u);
            for l in lambda.iter() {
                prop_assert!(*l >= WAVELENGTH_MIN && *l <= WAVELENGTH_MAX);
            }
        }
    }
}
