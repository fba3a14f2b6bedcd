//! Colors

use crate::pbrt::*;
use std::fmt;
use std::ops::{Index, IndexMut};

/// A fixed-size vector of color channels.
///
/// Depending on where it is used the channels hold linear RGB values, a
/// single monochromatic value or the coefficients of a spectral upsampling
/// model.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color<const N: usize> {
    /// The channel values.
    c: [Float; N],
}

/// 3-channel color.
pub type Color3f = Color<3>;

/// Single channel color.
pub type Color1f = Color<1>;

impl<const N: usize> Color<N> {
    /// Create a new `Color` from channel values.
    ///
    /// * `c` - The channel values.
    pub const fn new(c: [Float; N]) -> Self {
        Self { c }
    }

    /// Create a new `Color` with the same value in every channel.
    ///
    /// * `v` - The value.
    pub const fn splat(v: Float) -> Self {
        Self { c: [v; N] }
    }

    /// Returns the number of channels.
    pub const fn channel_count(&self) -> usize {
        N
    }

    /// Returns the horizontal mean of the channels.
    pub fn hmean(&self) -> Float {
        self.c.iter().sum::<Float>() / N as Float
    }

    /// Returns true if any channel lies outside the closed interval
    /// `[low, high]`. NaN channels are considered outside.
    ///
    /// * `low`  - Lower bound.
    /// * `high` - Upper bound.
    pub fn any_outside(&self, low: Float, high: Float) -> bool {
        self.c.iter().any(|v| !(low..=high).contains(v))
    }

    /// Returns true if any channel is NaN.
    pub fn has_nans(&self) -> bool {
        self.c.iter().any(|v| v.is_nan())
    }

    /// Returns the channels as a slice.
    pub fn as_slice(&self) -> &[Float] {
        &self.c
    }

    /// Returns the channels as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [Float] {
        &mut self.c
    }
}

impl Color3f {
    /// Create a new RGB color.
    ///
    /// * `r` - Red channel.
    /// * `g` - Green channel.
    /// * `b` - Blue channel.
    pub const fn rgb(r: Float, g: Float, b: Float) -> Self {
        Self { c: [r, g, b] }
    }
}

impl<const N: usize> Default for Color<N> {
    /// Returns a black `Color`.
    fn default() -> Self {
        Self::splat(0.0)
    }
}

impl<const N: usize> From<[Float; N]> for Color<N> {
    fn from(c: [Float; N]) -> Self {
        Self::new(c)
    }
}

impl<const N: usize> Index<usize> for Color<N> {
    type Output = Float;

    /// Index the channels.
    ///
    /// * `i` - The channel index.
    fn index(&self, i: usize) -> &Self::Output {
        &self.c[i]
    }
}

impl<const N: usize> IndexMut<usize> for Color<N> {
    /// Index the channels for mutation.
    ///
    /// * `i` - The channel index.
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.c[i]
    }
}

impl<const N: usize> fmt::Display for Color<N> {
    /// Formats the channels as `[c0, c1, ...]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.c.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}

/// Returns the luminance of a linear sRGB color using the Y row of the
/// sRGB to XYZ matrix.
///
/// * `c` - Linear sRGB color.
#[inline]
pub fn luminance(c: &Color3f) -> Float {
    c[0] * 0.212671 + c[1] * 0.715160 + c[2] * 0.072169
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
