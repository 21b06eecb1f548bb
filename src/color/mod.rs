//! Color conversion module
//!
//! This module exposes the Munsell converter that ties illuminant
//! adaptation, xyY and sRGB together with the conversion engine.

pub mod conversion;

pub use conversion::MunsellConverter;
