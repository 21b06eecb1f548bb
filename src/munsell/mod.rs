//! Munsell conversion engine
//!
//! The chromaticity table, its spatial index and the interpolation that
//! maps between Munsell HVC and xyY under illuminant C.

mod data;
pub(crate) mod bridge;
pub mod geometry;
pub mod kdtree;
pub mod notation;
pub(crate) mod scan;
pub mod table;
pub mod value;

pub use notation::{hue_name_to_hue_value, hue_value_to_hue_name, Munsell};
pub use table::{GridPoint, MunsellTable};
pub use value::{value_to_y, y_to_value, y_to_value_with};
