//! Consensus and best-line aggregation over bookmaker quotes.

use rust_decimal::Decimal;

use super::game::{BestLine, BookQuote, OddsRecord};
use super::spread::{Side, Spread};

/// Mean of every non-null home spread quote.
///
/// Returns `None` when no bookmaker quoted a home spread. A missing quote is
/// excluded from the mean rather than counted as zero.
pub fn consensus(record: &OddsRecord) -> Option<Spread> {
    let quoted: Vec<Spread> = record.quotes.iter().filter_map(|q| q.home_spread).collect();
    if quoted.is_empty() {
        return None;
    }

    let total: Decimal = quoted.iter().sum();
    Some(total / Decimal::from(quoted.len()))
}

/// The highest quoted spread for `side` and the bookmaker offering it.
///
/// The same "largest value wins" comparison is used for both sides. Ties
/// keep the earliest bookmaker in quote order.
pub fn best_line(record: &OddsRecord, side: Side) -> Option<BestLine> {
    let mut best: Option<BestLine> = None;
    for quote in &record.quotes {
        let Some(spread) = quote.spread(side) else {
            continue;
        };
        let better = match &best {
            Some(current) => spread > current.spread,
            None => true,
        };
        if better {
            best = Some(BestLine {
                bookmaker: quote.bookmaker.clone(),
                spread,
            });
        }
    }
    best
}

/// The most favorable line for someone betting `side`, as that bettor reads it.
///
/// Quotes store "home favored by" for both sides, so a home bettor's line is
/// `-home_spread` and an away bettor's line is `away_spread`. The largest
/// bettor line wins; ties keep the earliest bookmaker.
pub fn bettor_line(quotes: &[BookQuote], side: Side) -> Option<BestLine> {
    let mut best: Option<BestLine> = None;
    for quote in quotes {
        let Some(spread) = quote.spread(side) else {
            continue;
        };
        let line = match side {
            Side::Home => -spread,
            Side::Away => spread,
        };
        if best.as_ref().map_or(true, |current| line > current.spread) {
            best = Some(BestLine {
                bookmaker: quote.bookmaker.clone(),
                spread: line,
            });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn record(quotes: Vec<BookQuote>) -> OddsRecord {
        OddsRecord::new("g1", Utc::now(), "Duke", "Vermont", quotes)
    }

    #[test]
    fn consensus_averages_non_null_home_spreads() {
        let odds = record(vec![
            BookQuote::new("A", Some(dec!(4.5)), Some(dec!(4.5))),
            BookQuote::new("B", Some(dec!(5.0)), Some(dec!(5.0))),
            BookQuote::new("C", None, None),
        ]);

        assert_eq!(consensus(&odds), Some(dec!(4.75)));
    }

    #[test]
    fn consensus_is_none_without_home_quotes() {
        assert_eq!(consensus(&record(vec![])), None);

        let away_only = record(vec![BookQuote::new("A", None, Some(dec!(3.5)))]);
        assert_eq!(consensus(&away_only), None);
    }

    #[test]
    fn consensus_of_mixed_signs() {
        let odds = record(vec![
            BookQuote::new("A", Some(dec!(-1.5)), None),
            BookQuote::new("B", Some(dec!(0.5)), None),
        ]);
        assert_eq!(consensus(&odds), Some(dec!(-0.5)));
    }

    #[test]
    fn best_home_line_picks_maximum() {
        let odds = record(vec![
            BookQuote::new("A", Some(dec!(4.5)), None),
            BookQuote::new("B", Some(dec!(5.0)), None),
            BookQuote::new("C", None, None),
        ]);

        let best = best_line(&odds, Side::Home).unwrap();
        assert_eq!(best.bookmaker.as_str(), "B");
        assert_eq!(best.spread, dec!(5.0));
    }

    #[test]
    fn best_away_line_picks_maximum() {
        let odds = record(vec![
            BookQuote::new("A", Some(dec!(-6.5)), Some(dec!(-6.5))),
            BookQuote::new("B", Some(dec!(-7.0)), Some(dec!(-7.0))),
            BookQuote::new("C", Some(dec!(-6.0)), None),
        ]);

        let best = best_line(&odds, Side::Away).unwrap();
        assert_eq!(best.bookmaker.as_str(), "A");
        assert_eq!(best.spread, dec!(-6.5));
    }

    #[test]
    fn best_line_ties_keep_first_bookmaker() {
        let odds = record(vec![
            BookQuote::new("A", Some(dec!(3)), None),
            BookQuote::new("B", Some(dec!(3)), None),
        ]);

        assert_eq!(best_line(&odds, Side::Home).unwrap().bookmaker.as_str(), "A");
    }

    #[test]
    fn best_line_is_none_without_quotes_for_side() {
        let odds = record(vec![BookQuote::new("A", Some(dec!(3)), None)]);
        assert!(best_line(&odds, Side::Away).is_none());
    }

    #[test]
    fn home_bettor_line_prefers_fewest_points_to_cover() {
        // Home favored by 4.5 at A and 5.0 at B: A asks the bettor to cover less.
        let quotes = vec![
            BookQuote::new("A", Some(dec!(4.5)), Some(dec!(4.5))),
            BookQuote::new("B", Some(dec!(5.0)), Some(dec!(5.0))),
        ];

        let line = bettor_line(&quotes, Side::Home).unwrap();
        assert_eq!(line.bookmaker.as_str(), "A");
        assert_eq!(line.spread, dec!(-4.5));
    }

    #[test]
    fn home_underdog_bettor_line_takes_most_points() {
        let quotes = vec![
            BookQuote::new("A", Some(dec!(-3.0)), Some(dec!(-3.0))),
            BookQuote::new("B", Some(dec!(-3.5)), Some(dec!(-3.5))),
        ];

        let line = bettor_line(&quotes, Side::Home).unwrap();
        assert_eq!(line.bookmaker.as_str(), "B");
        assert_eq!(line.spread, dec!(3.5));
    }

    #[test]
    fn away_bettor_line_matches_quoted_value() {
        let quotes = vec![
            BookQuote::new("A", Some(dec!(18.5)), Some(dec!(18.5))),
            BookQuote::new("B", Some(dec!(17.5)), Some(dec!(17.5))),
            BookQuote::new("C", Some(dec!(18.0)), None),
        ];

        let line = bettor_line(&quotes, Side::Away).unwrap();
        assert_eq!(line.bookmaker.as_str(), "A");
        assert_eq!(line.spread, dec!(18.5));
        assert!(bettor_line(&[], Side::Away).is_none());
    }
}
