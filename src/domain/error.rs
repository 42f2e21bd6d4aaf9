//! Domain validation errors.
//!
//! These are raised only while building the lookup structures the core
//! runs against (alias graphs, rule books). Evaluating games never fails:
//! missing data degrades to `None` or an empty result instead.
//!
//! # Examples
//!
//! ```
//! use hoopedge::domain::{DomainError, TeamNameNormalizer};
//!
//! let result = TeamNameNormalizer::try_new(
//!     [("State", "St."), ("St.", "State")],
//!     Vec::<(&str, &str)>::new(),
//! );
//!
//! assert!(matches!(result, Err(DomainError::AliasCycle { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Following alias edges from some name leads back to itself.
    #[error("alias cycle detected: {}", chain.join(" -> "))]
    AliasCycle {
        /// The names visited, ending with the repeated one.
        chain: Vec<String>,
    },

    /// An alias or its target is blank after whitespace collapse.
    #[error("alias entries cannot be empty")]
    EmptyAlias,

    /// The same alias points at two different targets.
    #[error("alias '{alias}' maps to both '{first}' and '{second}'")]
    ConflictingAlias {
        alias: String,
        first: String,
        second: String,
    },

    /// A suffix rule must rewrite exactly one word into one word.
    #[error("suffix rule '{suffix}' -> '{target}' must map a single word to a single word")]
    MultiWordSuffix { suffix: String, target: String },

    /// Rule books are keyed by calendar month.
    #[error("month must be between 1 and 12, got {month}")]
    InvalidMonth { month: u32 },

    /// A month appears twice in a rule book.
    #[error("month {month} is defined more than once")]
    DuplicateMonth { month: u32 },
}
