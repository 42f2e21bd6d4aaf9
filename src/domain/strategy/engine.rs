//! Evaluation of a month's rules against a matched game.

use tracing::trace;

use super::recommendation::{bet_text, Recommendation};
use super::RuleBook;
use crate::domain::conference::ConferenceTable;
use crate::domain::edge::EdgeResult;
use crate::domain::game::MatchedGame;
use crate::domain::odds::bettor_line;

/// Turns matched games into recommendations using an injected [`RuleBook`].
#[derive(Debug, Clone, Default)]
pub struct StrategyRuleEngine {
    rule_book: RuleBook,
}

impl StrategyRuleEngine {
    pub fn new(rule_book: RuleBook) -> Self {
        Self { rule_book }
    }

    pub fn rule_book(&self) -> &RuleBook {
        &self.rule_book
    }

    /// Recommendations for one game, one per matching rule, in rule order.
    ///
    /// Returns an empty vec when the month has no rules or the game is
    /// missing either spread.
    pub fn evaluate(
        &self,
        game: &MatchedGame,
        table: &ConferenceTable,
        month: u32,
    ) -> Vec<Recommendation> {
        let rules = self.rule_book.rules_for(month);
        if rules.is_empty() {
            return Vec::new();
        }

        let (Some(consensus), Some(edge)) = (
            game.consensus_spread,
            EdgeResult::compute(game.predicted_spread, game.consensus_spread),
        ) else {
            return Vec::new();
        };

        let home_conference = table.tier(&game.home_team);
        let away_conference = table.tier(&game.away_team);

        rules
            .iter()
            .filter(|rule| rule.matches(&edge, home_conference, away_conference))
            .map(|rule| {
                trace!(rule = %rule.name, game = %game.label(), edge = %edge.edge, "Rule matched");
                let (bet_side, text) = bet_text(game, consensus, &edge);
                Recommendation {
                    game: game.clone(),
                    rule_name: rule.name.clone(),
                    rule_description: rule.description.clone(),
                    edge: edge.edge,
                    magnitude: edge.magnitude,
                    direction: edge.direction,
                    home_conference,
                    away_conference,
                    bet_side,
                    bet_text: text,
                    best_line: bet_side.and_then(|side| bettor_line(&game.quotes, side)),
                }
            })
            .collect()
    }

    /// Evaluate every game and flatten the results, preserving game order.
    pub fn evaluate_all(
        &self,
        games: &[MatchedGame],
        table: &ConferenceTable,
        month: u32,
    ) -> Vec<Recommendation> {
        games
            .iter()
            .flat_map(|game| self.evaluate(game, table, month))
            .collect()
    }
}
