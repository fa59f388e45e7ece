#![deny(unsafe_code)]
//! RGB <=> HSV color conversion.
//!
//! Provides the `Color` value type (alpha plus synchronized RGB and HSV
//! components), the pure `rgb_to_hsv` / `hsv_to_rgb` conversions over the
//! plain `Rgb` / `Hsv` structs, `RangePolicy` for out-of-range HSV input,
//! and `#RRGGBB` formatting.

pub mod color;
pub mod convert;
pub mod error;
pub mod policy;

pub use color::Color;
pub use convert::{hsv_to_rgb, rgb_to_hsv, Hsv, Rgb};
pub use error::ColorError;
pub use policy::RangePolicy;
