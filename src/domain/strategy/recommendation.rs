//! Recommendation records and bet text.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::conference::ConferenceTier;
use crate::domain::edge::{Direction, EdgeResult};
use crate::domain::game::{BestLine, MatchedGame};
use crate::domain::spread::{format_points, Side, Spread};

/// A game that satisfied one strategy rule.
///
/// Carries everything a reporting layer needs to render a row without
/// re-deriving any betting logic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub game: MatchedGame,
    pub rule_name: String,
    pub rule_description: String,
    pub edge: Spread,
    pub magnitude: Spread,
    pub direction: Direction,
    pub home_conference: ConferenceTier,
    pub away_conference: ConferenceTier,
    /// Side the bet text names, `None` for a pick'em line.
    pub bet_side: Option<Side>,
    pub bet_text: String,
    /// Most favorable line for `bet_side`, signed as the bettor reads it
    /// (negative when laying points).
    pub best_line: Option<BestLine>,
}

/// Human-readable bet for a game.
///
/// Favorite and underdog come from the sign of the consensus spread alone;
/// the edge direction only picks which of the two to back. A consensus of
/// exactly zero is a pick'em and names no side.
pub fn bet_text(game: &MatchedGame, consensus: Spread, edge: &EdgeResult) -> (Option<Side>, String) {
    let (favorite, underdog) = if consensus > Decimal::ZERO {
        (Side::Home, Side::Away)
    } else if consensus < Decimal::ZERO {
        (Side::Away, Side::Home)
    } else {
        return (
            None,
            format!("Pick'em: {} @ {}", game.away_team, game.home_team),
        );
    };

    let line = format_points(consensus.abs());
    let margin = format_points(edge.magnitude);
    let team = |side: Side| match side {
        Side::Home => game.home_team.as_str(),
        Side::Away => game.away_team.as_str(),
    };

    match edge.direction {
        Direction::Underdog => (
            Some(underdog),
            format!(
                "Bet {} +{line} (model favors underdog with {margin} pt edge)",
                team(underdog)
            ),
        ),
        Direction::Favorite => (
            Some(favorite),
            format!(
                "Bet {} -{line} (model favors favorite with {margin} pt edge)",
                team(favorite)
            ),
        ),
    }
}
