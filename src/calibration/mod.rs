//! Illuminant handling
//!
//! Adapts XYZ colors between D65, the white of the public API, and
//! illuminant C, the white of the Munsell chromaticity table.

pub mod illuminant;

pub use illuminant::{c_to_d65, d65_to_c};
