//! Out-of-range handling for HSV input.
//!
//! Saturation and value are nominally fractions in [0, 1] and hue is an
//! integer angle, but callers can pass anything. A [`RangePolicy`] decides
//! what happens to values outside those ranges: reject them, saturate them,
//! or let them flow through the formulas and wrap at the 8-bit boundary.

use crate::convert::{round_half_away, Hsv};
use crate::error::ColorError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// All recognized policy names, in declaration order.
const POLICY_NAMES: &[&str] = &["strict", "clamp", "passthrough"];

/// How HSV components outside their nominal ranges are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangePolicy {
    /// Reject hue outside [0, 360) and saturation/value outside [0, 1].
    Strict,
    /// Saturate S and V to [0, 1], wrap hue into [0, 360), saturate channels to [0, 255].
    #[default]
    Clamp,
    /// Use S and V as given, wrap hue into [0, 360), and wrap channel levels modulo 256.
    Passthrough,
}

impl RangePolicy {
    /// Looks up a policy by its lowercase name.
    ///
    /// Returns `ColorError::UnknownPolicy` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        match name {
            "strict" => Ok(RangePolicy::Strict),
            "clamp" => Ok(RangePolicy::Clamp),
            "passthrough" => Ok(RangePolicy::Passthrough),
            _ => Err(ColorError::UnknownPolicy(name.to_string())),
        }
    }

    /// Returns a slice of all recognized policy names.
    pub fn list_names() -> &'static [&'static str] {
        POLICY_NAMES
    }

    /// The lowercase name of this policy.
    pub fn name(self) -> &'static str {
        match self {
            RangePolicy::Strict => "strict",
            RangePolicy::Clamp => "clamp",
            RangePolicy::Passthrough => "passthrough",
        }
    }

    /// Applies the policy to raw HSV input, producing the components the
    /// conversion will actually use.
    ///
    /// The returned hue is always in [0, 360).
    pub fn resolve(self, hsv: Hsv) -> Result<Hsv, ColorError> {
        match self {
            RangePolicy::Strict => {
                if !(0..360).contains(&hsv.h) {
                    return Err(ColorError::OutOfRange {
                        component: "hue",
                        value: f64::from(hsv.h),
                        expected: "0..360",
                    });
                }
                check_unit("saturation", hsv.s)?;
                check_unit("value", hsv.v)?;
                Ok(hsv)
            }
            RangePolicy::Clamp => Ok(clamp_hsv(hsv)),
            RangePolicy::Passthrough => Ok(Hsv {
                h: wrap_hue(hsv.h),
                ..hsv
            }),
        }
    }

    /// Narrows a channel level in 0..=255 space to a byte.
    ///
    /// The level is rounded half away from zero first. Out-of-range results
    /// saturate, except under `Passthrough` where they wrap modulo 256.
    pub fn narrow(self, level: f64) -> u8 {
        let rounded = round_half_away(level);
        match self {
            RangePolicy::Passthrough => {
                if !(0..=255).contains(&rounded) {
                    debug!("channel level {rounded} wraps to {}", rounded as u8);
                }
                rounded as u8
            }
            RangePolicy::Strict | RangePolicy::Clamp => rounded.clamp(0, 255) as u8,
        }
    }
}

impl fmt::Display for RangePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RangePolicy {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RangePolicy::from_name(s)
    }
}

/// The `Clamp` resolution, split out because it cannot fail.
pub(crate) fn clamp_hsv(hsv: Hsv) -> Hsv {
    Hsv {
        h: wrap_hue(hsv.h),
        s: clamp_unit("saturation", hsv.s),
        v: clamp_unit("value", hsv.v),
    }
}

/// Wraps an integer hue into [0, 360).
pub(crate) fn wrap_hue(h: i32) -> i32 {
    let wrapped = h.rem_euclid(360);
    if wrapped != h {
        debug!("hue {h} normalized to {wrapped}");
    }
    wrapped
}

/// Saturates a fraction to [0, 1]. NaN becomes 0.
fn clamp_unit(component: &'static str, value: f64) -> f64 {
    let clamped = if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    };
    if clamped != value {
        debug!("{component} {value} clamped to {clamped}");
    }
    clamped
}

fn check_unit(component: &'static str, value: f64) -> Result<(), ColorError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ColorError::OutOfRange {
            component,
            value,
            expected: "0..=1",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsv(h: i32, s: f64, v: f64) -> Hsv {
        Hsv { h, s, v }
    }

    // -- Name lookup --

    #[test]
    fn from_name_recognizes_every_listed_name() {
        for &name in RangePolicy::list_names() {
            let policy = RangePolicy::from_name(name).unwrap();
            assert_eq!(policy.name(), name);
        }
    }

    #[test]
    fn from_name_unknown_returns_error() {
        let err = RangePolicy::from_name("lenient").unwrap_err();
        assert_eq!(err, ColorError::UnknownPolicy("lenient".into()));
    }

    #[test]
    fn from_str_matches_from_name() {
        assert_eq!("strict".parse::<RangePolicy>().unwrap(), RangePolicy::Strict);
        assert!("Clamp".parse::<RangePolicy>().is_err());
    }

    #[test]
    fn default_policy_is_clamp() {
        assert_eq!(RangePolicy::default(), RangePolicy::Clamp);
    }

    #[test]
    fn display_prints_lowercase_name() {
        assert_eq!(RangePolicy::Passthrough.to_string(), "passthrough");
    }

    // -- Strict --

    #[test]
    fn strict_accepts_in_range_values_unchanged() {
        let input = hsv(359, 1.0, 0.0);
        assert_eq!(RangePolicy::Strict.resolve(input).unwrap(), input);
    }

    #[test]
    fn strict_rejects_hue_outside_circle() {
        for h in [-1, 360, 720] {
            let err = RangePolicy::Strict.resolve(hsv(h, 0.5, 0.5)).unwrap_err();
            assert!(
                matches!(err, ColorError::OutOfRange { component: "hue", .. }),
                "h={h}: {err:?}"
            );
        }
    }

    #[test]
    fn strict_rejects_saturation_above_one() {
        let err = RangePolicy::Strict.resolve(hsv(0, 1.5, 0.5)).unwrap_err();
        assert!(matches!(
            err,
            ColorError::OutOfRange {
                component: "saturation",
                ..
            }
        ));
    }

    #[test]
    fn strict_rejects_negative_value() {
        let err = RangePolicy::Strict.resolve(hsv(0, 0.5, -0.1)).unwrap_err();
        assert!(matches!(
            err,
            ColorError::OutOfRange {
                component: "value",
                ..
            }
        ));
    }

    #[test]
    fn strict_rejects_nan() {
        assert!(RangePolicy::Strict.resolve(hsv(0, f64::NAN, 0.5)).is_err());
        assert!(RangePolicy::Strict.resolve(hsv(0, 0.5, f64::NAN)).is_err());
    }

    // -- Clamp --

    #[test]
    fn clamp_saturates_fractions_and_wraps_hue() {
        let resolved = RangePolicy::Clamp.resolve(hsv(-30, 2.0, -0.5)).unwrap();
        assert_eq!(resolved, hsv(330, 1.0, 0.0));
    }

    #[test]
    fn clamp_maps_nan_to_zero() {
        let resolved = RangePolicy::Clamp.resolve(hsv(0, f64::NAN, 0.5)).unwrap();
        assert_eq!(resolved.s, 0.0);
    }

    // -- Passthrough --

    #[test]
    fn passthrough_keeps_fractions_but_wraps_hue() {
        let resolved = RangePolicy::Passthrough
            .resolve(hsv(725, 1.5, 2.0))
            .unwrap();
        assert_eq!(resolved, hsv(5, 1.5, 2.0));
    }

    // -- Narrowing --

    #[test]
    fn narrow_rounds_half_away_from_zero() {
        assert_eq!(RangePolicy::Clamp.narrow(127.5), 128);
        assert_eq!(RangePolicy::Clamp.narrow(127.49), 127);
    }

    #[test]
    fn narrow_saturates_under_clamp_and_strict() {
        for policy in [RangePolicy::Clamp, RangePolicy::Strict] {
            assert_eq!(policy.narrow(510.0), 255);
            assert_eq!(policy.narrow(-3.0), 0);
        }
    }

    #[test]
    fn narrow_wraps_under_passthrough() {
        assert_eq!(RangePolicy::Passthrough.narrow(510.0), 254);
        assert_eq!(RangePolicy::Passthrough.narrow(-1.0), 255);
        assert_eq!(RangePolicy::Passthrough.narrow(256.0), 0);
    }

    #[test]
    fn policy_serializes_as_lowercase_name() {
        let json = serde_json::to_string(&RangePolicy::Passthrough).unwrap();
        assert_eq!(json, "\"passthrough\"");
        let back: RangePolicy = serde_json::from_str("\"strict\"").unwrap();
        assert_eq!(back, RangePolicy::Strict);
    }
}
