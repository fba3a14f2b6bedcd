//! Core types shared by textures: colors, spectral upsampling, rendering
//! variants, shading points, property sets and the texture interface.

#[macro_use]
extern crate log;

// Re-export.
pub mod error;
pub mod interaction;
pub mod paramset;
pub mod pbrt;
pub mod spectrum;
pub mod texture;
pub mod variant;
