//! The `Color` value type: one color held in both RGB and HSV form.
//!
//! A `Color` is immutable. Every constructor runs the conversion for the
//! representation it was not given, and the `with_*` methods return a new,
//! re-synchronized value, so the two forms cannot drift apart.
//!
//! Serializes as an object with every component plus a `"hex"` field.
//! Deserializes from either an RGB object (`{"r", "g", "b"}`) or an HSV object
//! (`{"h", "s", "v"}`), each with an optional `"a"`, and recomputes the other
//! form under the default policy.

use crate::convert::{resolved_hsv_to_rgb, rgb_to_hsv, Hsv, Rgb};
use crate::error::ColorError;
use crate::policy::{clamp_hsv, RangePolicy};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Alpha used by the constructors that take no alpha argument.
pub const OPAQUE: u8 = 255;

/// A color with alpha, 8-bit RGB channels, and HSV components kept in sync.
///
/// Alpha is carried through unchanged and never enters the conversion math.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    a: u8,
    rgb: Rgb,
    hsv: Hsv,
}

impl Color {
    /// Opaque color from red, green, blue.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(OPAQUE, r, g, b)
    }

    /// Color from alpha, red, green, blue. HSV is derived from the channels.
    pub fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        let rgb = Rgb { r, g, b };
        Self {
            a,
            rgb,
            hsv: rgb_to_hsv(rgb),
        }
    }

    /// Opaque color from hue (degrees), saturation, value.
    pub fn from_hsv(h: i32, s: f64, v: f64) -> Self {
        Self::from_ahsv(OPAQUE, h, s, v)
    }

    /// Color from alpha, hue (degrees), saturation, value, under
    /// [`RangePolicy::Clamp`].
    ///
    /// Any integer hue is accepted and wrapped into [0, 360), so `-30` and
    /// `330` give the same color. Saturation and value are saturated to
    /// [0, 1] (NaN becomes 0) and the stored `s`/`v` reflect that.
    pub fn from_ahsv(a: u8, h: i32, s: f64, v: f64) -> Self {
        Self::from_resolved(a, clamp_hsv(Hsv { h, s, v }), RangePolicy::Clamp)
    }

    /// Opaque color from HSV under an explicit range policy.
    pub fn from_hsv_with(
        h: i32,
        s: f64,
        v: f64,
        policy: RangePolicy,
    ) -> Result<Self, ColorError> {
        Self::from_ahsv_with(OPAQUE, h, s, v, policy)
    }

    /// Color from alpha and HSV under an explicit range policy.
    ///
    /// Only [`RangePolicy::Strict`] can fail, with `ColorError::OutOfRange`.
    pub fn from_ahsv_with(
        a: u8,
        h: i32,
        s: f64,
        v: f64,
        policy: RangePolicy,
    ) -> Result<Self, ColorError> {
        let hsv = policy.resolve(Hsv { h, s, v })?;
        Ok(Self::from_resolved(a, hsv, policy))
    }

    fn from_resolved(a: u8, hsv: Hsv, policy: RangePolicy) -> Self {
        Self {
            a,
            rgb: resolved_hsv_to_rgb(hsv, policy),
            hsv,
        }
    }

    pub fn a(&self) -> u8 {
        self.a
    }

    pub fn r(&self) -> u8 {
        self.rgb.r
    }

    pub fn g(&self) -> u8 {
        self.rgb.g
    }

    pub fn b(&self) -> u8 {
        self.rgb.b
    }

    /// Hue in whole degrees, always in [0, 360).
    pub fn h(&self) -> i32 {
        self.hsv.h
    }

    pub fn s(&self) -> f64 {
        self.hsv.s
    }

    pub fn v(&self) -> f64 {
        self.hsv.v
    }

    /// The RGB channels as a plain struct.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// The HSV components as a plain struct.
    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    /// Same color with a different alpha. No conversion runs.
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// New color from `rgb`, keeping this color's alpha.
    pub fn with_rgb(self, rgb: Rgb) -> Self {
        Self::from_argb(self.a, rgb.r, rgb.g, rgb.b)
    }

    /// New color from `hsv` under the clamp policy, keeping this color's alpha.
    pub fn with_hsv(self, hsv: Hsv) -> Self {
        Self::from_ahsv(self.a, hsv.h, hsv.s, hsv.v)
    }

    /// Formats the RGB channels as `"#RRGGBB"`: uppercase, two digits per channel.
    ///
    /// Alpha and HSV are not included.
    pub fn to_hex_string(&self) -> String {
        let Rgb { r, g, b } = self.rgb;
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb.r, rgb.g, rgb.b)
    }
}

impl From<Hsv> for Color {
    fn from(hsv: Hsv) -> Self {
        Self::from_hsv(hsv.h, hsv.s, hsv.v)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Color", 8)?;
        state.serialize_field("a", &self.a)?;
        state.serialize_field("r", &self.rgb.r)?;
        state.serialize_field("g", &self.rgb.g)?;
        state.serialize_field("b", &self.rgb.b)?;
        state.serialize_field("h", &self.hsv.h)?;
        state.serialize_field("s", &self.hsv.s)?;
        state.serialize_field("v", &self.hsv.v)?;
        state.serialize_field("hex", &self.to_hex_string())?;
        state.end()
    }
}

/// Accepted input shapes. RGB is tried first, so an object carrying both
/// sets of components is read as RGB.
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorInput {
    Rgb {
        #[serde(default = "opaque")]
        a: u8,
        r: u8,
        g: u8,
        b: u8,
    },
    Hsv {
        #[serde(default = "opaque")]
        a: u8,
        h: i32,
        s: f64,
        v: f64,
    },
}

fn opaque() -> u8 {
    OPAQUE
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match ColorInput::deserialize(deserializer)? {
            ColorInput::Rgb { a, r, g, b } => Color::from_argb(a, r, g, b),
            ColorInput::Hsv { a, h, s, v } => Color::from_ahsv(a, h, s, v),
        })
    }
}
