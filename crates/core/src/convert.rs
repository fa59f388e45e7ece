//! RGB <=> HSV conversion functions and the numeric helpers they share.
//!
//! Provides two plain component types (`Rgb`, `Hsv`) and pure conversion
//! functions between them. Intermediate math is done in `f64`; channels are
//! quantized to 8 bits and hue to whole degrees, so a round trip through HSV
//! can drift by up to 2 per channel.

use crate::error::ColorError;
use crate::policy::RangePolicy;
use serde::{Deserialize, Serialize};

/// 8-bit red, green, blue channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in whole degrees, saturation and value as fractions in [0, 1].
///
/// `h` may hold any integer on input; [`RangePolicy::resolve`] wraps or
/// rejects it. Values produced by [`rgb_to_hsv`] always have `h` in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsv {
    pub h: i32,
    pub s: f64,
    pub v: f64,
}

/// Converts RGB to HSV.
///
/// Black short-circuits to `h = 0, s = 0`. Any other gray has a zero
/// channel spread, which makes the hue formula `0 / 0`; [`normalize_angle`]
/// turns that NaN into 0, so every achromatic input reports hue 0.
pub fn rgb_to_hsv(c: Rgb) -> Hsv {
    let channels = [c.r, c.g, c.b];
    let max = max_channel(&channels);
    let min = min_channel(&channels);
    let (r, g, b) = (f64::from(c.r), f64::from(c.g), f64::from(c.b));

    let v = max / 255.0;
    if v == 0.0 {
        return Hsv { h: 0, s: 0.0, v };
    }

    let spread = max - min;
    let s = spread / max;

    let hue = if max == r {
        60.0 * ((g - b) / spread)
    } else if max == g {
        60.0 * (2.0 + (b - r) / spread)
    } else {
        60.0 * (4.0 + (r - g) / spread)
    };

    let h = (round_half_away(normalize_angle(hue)) % 360) as i32;
    Hsv { h, s, v }
}

/// Converts HSV to RGB after applying `policy` to the input.
///
/// Hue is wrapped into [0, 360) before sector dispatch (or rejected under
/// `Strict`), so every input lands in one of the six sectors.
pub fn hsv_to_rgb(hsv: Hsv, policy: RangePolicy) -> Result<Rgb, ColorError> {
    let resolved = policy.resolve(hsv)?;
    Ok(resolved_hsv_to_rgb(resolved, policy))
}

/// Sector decomposition over HSV that has already been through
/// [`RangePolicy::resolve`]. `hsv.h` must be in [0, 360).
pub(crate) fn resolved_hsv_to_rgb(hsv: Hsv, policy: RangePolicy) -> Rgb {
    let Hsv { h, s, v } = hsv;

    if s == 0.0 {
        let level = policy.narrow(v * 255.0);
        return Rgb {
            r: level,
            g: level,
            b: level,
        };
    }

    let h = f64::from(h) / 60.0;
    let sector = h.floor();
    let f = h - sector;

    let m = policy.narrow(v * (1.0 - s) * 255.0);
    let n = policy.narrow(v * (1.0 - s * f) * 255.0);
    let k = policy.narrow(v * (1.0 - s * (1.0 - f)) * 255.0);
    let top = policy.narrow(v * 255.0);

    let (r, g, b) = match sector as u8 {
        0 => (top, k, m),
        1 => (n, top, m),
        2 => (m, top, k),
        3 => (m, n, top),
        4 => (k, m, top),
        // 5: hue was wrapped into [0, 360)
        _ => (top, m, n),
    };
    Rgb { r, g, b }
}

/// Largest of `channels` as `f64`, or 0 for an empty slice.
pub fn max_channel(channels: &[u8]) -> f64 {
    f64::from(channels.iter().copied().max().unwrap_or(0))
}

/// Smallest of `channels` as `f64`, or 0 for an empty slice.
pub fn min_channel(channels: &[u8]) -> f64 {
    f64::from(channels.iter().copied().min().unwrap_or(0))
}

/// Maps a hue angle to a non-negative one.
///
/// NaN (and any non-finite angle) becomes 0. Negative angles are shifted by
/// whole turns until non-negative; non-negative angles are returned as is.
pub fn normalize_angle(hue: f64) -> f64 {
    if !hue.is_finite() {
        return 0.0;
    }
    if hue < 0.0 {
        hue.rem_euclid(360.0)
    } else {
        hue
    }
}

/// Rounds to the nearest integer, ties away from zero.
///
/// NaN maps to 0 and infinities saturate at the `i64` bounds.
pub fn round_half_away(n: f64) -> i64 {
    n.round() as i64
}
