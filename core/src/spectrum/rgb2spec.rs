//! RGB to Spectrum Table

use super::*;
use crate::error::*;
use crate::pbrt::*;
use byteorder::{LittleEndian, ReadBytesExt};
use std::cmp::Ordering;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};

/// The first 4 bytes of a table file.
const EXPECTED_HEADER: [u8; 4] = *b"SPEC";

/// Number of coefficients stored per table entry.
pub const RGB2SPEC_N_COEFFS: usize = 3;

/// Precomputed sigmoid-polynomial coefficients over the RGB cube.
///
/// The cube is split into three sub-tables selected by the largest RGB
/// component `z`. Each sub-table is a `res³` grid indexed by `z` (through the
/// non-uniform `scale` array) and by the two remaining components divided by
/// `z`.
#[derive(Clone, Debug)]
pub struct Rgb2SpecTable {
    /// Grid resolution along each axis.
    res: usize,

    /// Grid positions along the `z` axis.
    scale: Vec<Float>,

    /// Coefficients laid out as `[3][res][res][res][RGB2SPEC_N_COEFFS]`.
    data: Vec<Float>,
}

impl Rgb2SpecTable {
    /// Create a new `Rgb2SpecTable`.
    ///
    /// * `res`   - Grid resolution (at least 2).
    /// * `scale` - Strictly increasing grid positions along `z` (`res` values).
    /// * `data`  - Coefficients (`3 * res³ * RGB2SPEC_N_COEFFS` values).
    pub fn new(res: usize, scale: Vec<Float>, data: Vec<Float>) -> Result<Self> {
        if res < 2 {
            return Err(Error::InvalidTable(format!(
                "resolution {} is smaller than 2",
                res
            )));
        }
        if scale.len() != res {
            return Err(Error::InvalidTable(format!(
                "expected {} scale values but found {}",
                res,
                scale.len()
            )));
        }
        if scale.windows(2).any(|w| w[0].partial_cmp(&w[1]) != Some(Ordering::Less)) {
            return Err(Error::InvalidTable(String::from(
                "scale values are not strictly increasing",
            )));
        }
        let expected = Self::data_len(res);
        if data.len() != expected {
            return Err(Error::InvalidTable(format!(
                "expected {} coefficients but found {}",
                expected,
                data.len()
            )));
        }

        Ok(Self { res, scale, data })
    }

    /// Loads a table from a file.
    ///
    /// * `path` - The file path.
    pub fn load(path: &str) -> Result<Self> {
        let file = File::open(path)?;
        let table = Self::from_reader(&mut BufReader::new(file))?;
        info!(
            "Loaded spectral upsampling model '{}' (resolution {}).",
            path, table.res
        );
        Ok(table)
    }

    /// Reads a table: the header `SPEC`, the resolution as a little-endian
    /// `u32`, the `z` scale and finally the coefficients as little-endian `f32`.
    ///
    /// * `reader` - The source.
    pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self> {
        let mut header = [0_u8; 4];
        reader.read_exact(&mut header).map_err(truncated)?;
        if header != EXPECTED_HEADER {
            return Err(Error::InvalidTable(format!(
                "invalid header '{}'",
                String::from_utf8_lossy(&header)
            )));
        }

        let res = reader.read_u32::<LittleEndian>().map_err(truncated)? as usize;
        if res < 2 {
            return Err(Error::InvalidTable(format!(
                "resolution {} is smaller than 2",
                res
            )));
        }

        let mut scale = vec![0.0; res];
        reader
            .read_f32_into::<LittleEndian>(&mut scale)
            .map_err(truncated)?;

        let mut data = vec![0.0; Self::data_len(res)];
        reader
            .read_f32_into::<LittleEndian>(&mut data)
            .map_err(truncated)?;

        Self::new(res, scale, data)
    }

    /// Returns the grid resolution.
    pub fn resolution(&self) -> usize {
        self.res
    }

    /// Returns the number of coefficients for a given resolution.
    ///
    /// * `res` - Grid resolution.
    fn data_len(res: usize) -> usize {
        3 * res * res * res * RGB2SPEC_N_COEFFS
    }
}

impl SpectralUpsamplingModel for Rgb2SpecTable {
    /// Returns the sigmoid-polynomial coefficients for an RGB color.
    ///
    /// * `rgb` - Linear sRGB color.
    fn fetch(&self, rgb: &Color3f) -> Color3f {
        // Ideal black and white are represented exactly. NaN channels have
        // no meaningful position in the table and map to black.
        if rgb.has_nans() || rgb.as_slice().iter().all(|v| *v == 0.0) {
            return Color3f::rgb(0.0, 0.0, -INFINITY);
        } else if rgb.as_slice().iter().all(|v| *v == 1.0) {
            return Color3f::rgb(0.0, 0.0, INFINITY);
        }

        let rgb = [
            clamp(rgb[0], 0.0, 1.0),
            clamp(rgb[1], 0.0, 1.0),
            clamp(rgb[2], 0.0, 1.0),
        ];

        // Largest component selects the sub-table.
        let mut i = 0;
        for j in 1..3 {
            if rgb[j] >= rgb[i] {
                i = j;
            }
        }

        let z = rgb[i];
        if z <= 0.0 {
            return Color3f::rgb(0.0, 0.0, -INFINITY);
        }

        let res = self.res;
        let scale = (res - 1) as Float / z;
        let x = rgb[(i + 1) % 3] * scale;
        let y = rgb[(i + 2) % 3] * scale;

        let xi = (x as usize).min(res - 2);
        let yi = (y as usize).min(res - 2);
        let zi = find_interval(res, |k| self.scale[k] <= z);

        let mut offset = (((i * res + zi) * res + yi) * res + xi) * RGB2SPEC_N_COEFFS;
        let dx = RGB2SPEC_N_COEFFS;
        let dy = RGB2SPEC_N_COEFFS * res;
        let dz = RGB2SPEC_N_COEFFS * res * res;

        let x1 = x - xi as Float;
        let x0 = 1.0 - x1;
        let y1 = y - yi as Float;
        let y0 = 1.0 - y1;
        let z1 = (z - self.scale[zi]) / (self.scale[zi + 1] - self.scale[zi]);
        let z0 = 1.0 - z1;

        let d = &self.data;
        let mut out = Color3f::default();
        for j in 0..RGB2SPEC_N_COEFFS {
            out[j] = ((d[offset] * x0 + d[offset + dx] * x1) * y0
                + (d[offset + dy] * x0 + d[offset + dy + dx] * x1) * y1)
                * z0
                + ((d[offset + dz] * x0 + d[offset + dz + dx] * x1) * y0
                    + (d[offset + dz + dy] * x0 + d[offset + dz + dy + dx] * x1) * y1)
                    * z1;
            offset += 1;
        }
        out
    }
}

/// Maps an unexpected end of file to `Error::InvalidTable`.
///
/// * `err` - The I/O error.
fn truncated(err: std::io::Error) -> Error {
    if err.kind() == ErrorKind::UnexpectedEof {
        Error::InvalidTable(String::from("unexpected end of data"))
    } else {
        Error::Io(err)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
