//! Point spread representation.
//!
//! Every spread in the crate uses one sign convention: positive means the
//! home team is favored by that many points. Model spreads, consensus
//! spreads and individual bookmaker quotes all follow it.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Point spread represented as a Decimal for precision.
pub type Spread = Decimal;

/// One side of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::Away => write!(f, "away"),
        }
    }
}

/// Format a spread with one decimal place, e.g. `4.5` or `-3.0`.
pub fn format_points(value: Spread) -> String {
    format!("{:.1}", value.round_dp(1))
}

/// Format a spread with one decimal place and an explicit sign, e.g. `+4.5`.
pub fn format_signed(value: Spread) -> String {
    let rounded = value.round_dp(1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("{rounded:.1}")
    } else {
        format!("+{:.1}", rounded.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn format_points_pads_and_rounds() {
        assert_eq!(format_points(dec!(4)), "4.0");
        assert_eq!(format_points(dec!(4.75)), "4.8");
        assert_eq!(format_points(dec!(-3)), "-3.0");
    }

    #[test]
    fn format_signed_marks_positive_values() {
        assert_eq!(format_signed(dec!(4.5)), "+4.5");
        assert_eq!(format_signed(dec!(-3)), "-3.0");
        assert_eq!(format_signed(dec!(0)), "+0.0");
    }

    #[test]
    fn side_display() {
        assert_eq!(Side::Home.to_string(), "home");
        assert_eq!(Side::Away.to_string(), "away");
    }
}
