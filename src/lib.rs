//! Hoopedge - model-vs-market spread edges for college basketball.
//!
//! Reconciles a model's predicted point spreads with bookmaker lines,
//! measures the disagreement ("edge") per game and applies a month-keyed
//! rule book to decide which games are worth a bet.
//!
//! # Architecture
//!
//! - **`domain`** - Pure, synchronous decision logic
//!   - `TeamNameNormalizer` / `GameMatcher` - pair predictions with odds
//!   - `consensus` / `best_line` - aggregate bookmaker quotes
//!   - `EdgeResult` - signed edge, magnitude and direction
//!   - `ConferenceTable` - team to conference tier
//!   - `strategy::StrategyRuleEngine` - monthly rules to recommendations
//!
//! - **`adapter`** - Prediction and odds sources, conference snapshots and
//!   report rendering
//! - **`app`** - One pick run: fetch, match, evaluate
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Source-agnostic records and decision logic
//! - [`error`] - Error types for the crate
//! - [`cli`] - Command-line interface
//!
//! # Example
//!
//! ```
//! use hoopedge::domain::strategy::{RuleBook, StrategyRuleEngine};
//! use hoopedge::domain::{GameMatcher, MatchPolicy, TeamNameNormalizer};
//!
//! let normalizer = TeamNameNormalizer::builtin().expect("built-in tables are acyclic");
//! assert_eq!(normalizer.normalize("Michigan St."), "Michigan State");
//!
//! let matcher = GameMatcher::new(normalizer, MatchPolicy::FirstMatch);
//! let engine = StrategyRuleEngine::new(RuleBook::default_playbook());
//! assert!(engine.rule_book().rules_for(1).is_empty());
//! # let _ = matcher;
//! ```

pub mod adapter;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
