//! Parsed CSS pixel lengths for computed-style comparisons
//!
//! `computed_style` hands back raw strings like `"10.9px"`. Callers that
//! compare declared style against resolved coordinates parse the string
//! here. Resolution math itself never consumes computed styles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geometry::px;
use crate::result::{UbicarError, UbicarResult};

/// A CSS length in pixels, as `getComputedStyle` serializes it (`"10.9px"`)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct PixelLength(f64);

impl PixelLength {
    /// Wrap a raw pixel value
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Parse a computed-style value.
    ///
    /// Accepts `"<number>px"` and the bare zero serialization `"0"`.
    /// Keyword values (`"auto"`) and other units are not pixel lengths.
    pub fn parse(value: &str) -> UbicarResult<Self> {
        let invalid = || UbicarError::InvalidCssLength {
            value: value.to_string(),
        };

        let trimmed = value.trim();
        let number = match trimmed.strip_suffix("px") {
            Some(number) => number,
            None if trimmed == "0" => trimmed,
            None => return Err(invalid()),
        };
        let parsed: f64 = number.parse().map_err(|_| invalid())?;
        if !parsed.is_finite() {
            return Err(invalid());
        }
        Ok(Self(parsed))
    }

    /// The sub-pixel value
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Rounded to whole pixels, under the same law coordinates use
    #[must_use]
    pub fn rounded(self) -> i32 {
        px(self.0)
    }
}

impl FromStr for PixelLength {
    type Err = UbicarError;

    fn from_str(s: &str) -> UbicarResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for PixelLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod parse_tests {
        use super::*;

        #[test]
        fn test_parse_subpixel_value() {
            let length = PixelLength::parse("10.9px").unwrap();
            assert!((length.value() - 10.9).abs() < f64::EPSILON);
            assert_eq!(length.rounded(), 11);
        }

        #[test]
        fn test_parse_rounds_down_below_half() {
            assert_eq!(PixelLength::parse("10.1px").unwrap().rounded(), 10);
        }

        #[test]
        fn test_parse_bare_zero() {
            assert_eq!(PixelLength::parse("0").unwrap().rounded(), 0);
        }

        #[test]
        fn test_parse_negative_rounds_away_from_zero() {
            assert_eq!(PixelLength::parse("-4.5px").unwrap().rounded(), -5);
        }

        #[test]
        fn test_parse_trims_whitespace() {
            assert_eq!(PixelLength::parse(" 48.7px ").unwrap().rounded(), 49);
        }

        #[test]
        fn test_parse_rejects_keywords_and_units() {
            for bad in ["auto", "12em", "50%", "", "px", "nanpx"] {
                let err = PixelLength::parse(bad).unwrap_err();
                assert!(
                    matches!(err, UbicarError::InvalidCssLength { .. }),
                    "{bad:?} should be rejected"
                );
            }
        }

        #[test]
        fn test_from_str_round_trips_display() {
            let length: PixelLength = "10.9px".parse().unwrap();
            assert_eq!(length.to_string(), "10.9px");
        }

        #[test]
        fn test_new_wraps_a_raw_value() {
            let length = PixelLength::new(10.9);
            assert_eq!(length, PixelLength::parse("10.9px").unwrap());
            assert_eq!(length.rounded(), 11);
        }
    }
}
