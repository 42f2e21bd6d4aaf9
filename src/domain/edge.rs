//! Model-vs-market edge.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::spread::Spread;

/// Which side of the market line the model leans toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// The model is less confident in the favorite than the market.
    Underdog,
    /// The model is at least as confident in the favorite as the market.
    Favorite,
}

impl Direction {
    /// Positive edge leans underdog; zero and negative lean favorite.
    pub fn from_edge(edge: Spread) -> Self {
        if edge > Decimal::ZERO {
            Self::Underdog
        } else {
            Self::Favorite
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Underdog => write!(f, "UNDERDOG"),
            Self::Favorite => write!(f, "FAVORITE"),
        }
    }
}

/// `consensus - predicted`, or `None` if either spread is missing.
pub fn edge(predicted: Option<Spread>, consensus: Option<Spread>) -> Option<Spread> {
    Some(consensus? - predicted?)
}

/// Signed edge with its magnitude and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdgeResult {
    pub edge: Spread,
    pub magnitude: Spread,
    pub direction: Direction,
}

impl EdgeResult {
    pub fn compute(predicted: Option<Spread>, consensus: Option<Spread>) -> Option<Self> {
        let edge = edge(predicted, consensus)?;
        Some(Self {
            edge,
            magnitude: edge.abs(),
            direction: Direction::from_edge(edge),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn edge_is_consensus_minus_predicted() {
        assert_eq!(edge(Some(dec!(15.0)), Some(dec!(18.0))), Some(dec!(3.0)));
        assert_eq!(edge(Some(dec!(2.0)), Some(dec!(-3.0))), Some(dec!(-5.0)));
        assert_eq!(edge(Some(dec!(-4.5)), Some(dec!(-1.5))), Some(dec!(3.0)));
    }

    #[test]
    fn edge_is_none_when_either_side_missing() {
        assert_eq!(edge(None, Some(dec!(3))), None);
        assert_eq!(edge(Some(dec!(3)), None), None);
        assert_eq!(edge(None, None), None);
        assert!(EdgeResult::compute(None, Some(dec!(1))).is_none());
    }

    #[test]
    fn direction_from_sign() {
        assert_eq!(Direction::from_edge(dec!(0.5)), Direction::Underdog);
        assert_eq!(Direction::from_edge(dec!(-0.5)), Direction::Favorite);
        assert_eq!(Direction::from_edge(Decimal::ZERO), Direction::Favorite);
    }

    #[test]
    fn compute_reports_magnitude() {
        let result = EdgeResult::compute(Some(dec!(2.0)), Some(dec!(-3.0))).unwrap();
        assert_eq!(result.edge, dec!(-5.0));
        assert_eq!(result.magnitude, dec!(5.0));
        assert_eq!(result.direction, Direction::Favorite);
    }

    #[test]
    fn direction_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&Direction::Underdog).unwrap(),
            "\"UNDERDOG\""
        );
    }
}
