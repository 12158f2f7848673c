//! Core domain types for flamegen.
//!
//! - `Colour` - RGBA colour values with linear interpolation
//! - `palette` - the named brand colours

mod colour;
pub mod palette;

pub use colour::Colour;
