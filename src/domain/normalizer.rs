//! Team name canonicalization.
//!
//! Prediction and odds feeds spell teams differently ("Michigan St." vs
//! "Michigan State Spartans"). The normalizer resolves both spellings to a
//! canonical form so the matcher can compare them by equality or
//! containment.
//!
//! Two directed graphs drive it:
//!
//! - **suffix rules** rewrite any word after the first (`St.` -> `State`),
//!   so `Michigan St Spartans` and `Michigan St.` agree while a leading
//!   `St. John's` is left alone
//! - **aliases** rewrite a whole name (`Miami (FL)` -> `Miami FL`)
//!
//! Each graph is resolved to one root per node when the normalizer is built,
//! and construction fails if either graph contains a cycle. Normalizing is
//! then a single lookup per step, so `normalize(normalize(x)) ==
//! normalize(x)` for every input.

use std::collections::HashMap;

use super::error::DomainError;

/// Word rewrites applied to every word of a team name but the first.
pub const DEFAULT_SUFFIX_RULES: &[(&str, &str)] = &[("St.", "State"), ("St", "State")];

/// Whole-name aliases bridging known spelling differences between feeds.
pub const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("Miami (FL)", "Miami FL"),
    ("Miami-Florida", "Miami FL"),
    ("Central Florida", "UCF"),
    ("CS Sacramento", "Sacramento St."),
    ("CS Bakersfield", "Cal St. Bakersfield"),
    ("Middle Tenn St.", "Middle Tennessee St."),
    ("UT Rio Grande Valley", "UTRGV"),
    ("SE Louisiana", "Southeastern Louisiana"),
    ("FGCU", "Florida Gulf Coast"),
];

/// Canonicalizes team names using validated, acyclic rewrite graphs.
#[derive(Debug, Clone, Default)]
pub struct TeamNameNormalizer {
    /// Suffix word -> root word.
    suffixes: HashMap<String, String>,
    /// Suffix-normalized name -> root name.
    aliases: HashMap<String, String>,
}

impl TeamNameNormalizer {
    /// A normalizer that only collapses whitespace.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the normalizer from the default rule tables.
    ///
    /// # Errors
    ///
    /// Never fails for the shipped tables; the signature matches
    /// [`Self::try_new`].
    pub fn builtin() -> Result<Self, DomainError> {
        Self::try_new(
            DEFAULT_SUFFIX_RULES.iter().copied(),
            DEFAULT_ALIASES.iter().copied(),
        )
    }

    /// Build a normalizer from suffix rules and whole-name aliases.
    ///
    /// Alias keys and targets are suffix-normalized first, so an alias
    /// written as `Sacramento St.` and one written as `Sacramento State`
    /// name the same node.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::AliasCycle`] if either graph loops,
    /// [`DomainError::ConflictingAlias`] if a key has two targets,
    /// [`DomainError::EmptyAlias`] for blank entries, and
    /// [`DomainError::MultiWordSuffix`] for a suffix rule spanning words.
    pub fn try_new<K, V>(
        suffix_rules: impl IntoIterator<Item = (K, V)>,
        aliases: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self, DomainError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let suffix_edges = collect_edges(
            suffix_rules
                .into_iter()
                .map(|(k, v)| (collapse(k.as_ref()), collapse(v.as_ref()))),
        )?;
        // Word for word only, or a rewrite could re-expose a suffix.
        if let Some((suffix, target)) = suffix_edges
            .iter()
            .filter(|(k, v)| k.contains(' ') || v.contains(' '))
            .min()
        {
            return Err(DomainError::MultiWordSuffix {
                suffix: suffix.clone(),
                target: target.clone(),
            });
        }
        let suffixes = resolve_roots(&suffix_edges)?;

        let partial = Self {
            suffixes,
            aliases: HashMap::new(),
        };

        let alias_edges = collect_edges(
            aliases
                .into_iter()
                .map(|(k, v)| (partial.rewrite_suffix(k.as_ref()), partial.rewrite_suffix(v.as_ref())))
                // Entries made redundant by a suffix rule are not edges.
                .filter(|(k, v)| k != v),
        )?;
        let aliases = resolve_roots(&alias_edges)?;

        Ok(Self {
            suffixes: partial.suffixes,
            aliases,
        })
    }

    /// Canonicalize a raw team name.
    ///
    /// Names with no applicable rule come back with whitespace collapsed and
    /// otherwise unchanged.
    pub fn normalize(&self, raw: &str) -> String {
        let name = self.rewrite_suffix(raw);
        match self.aliases.get(&name) {
            Some(root) => root.clone(),
            None => name,
        }
    }

    /// Number of alias entries after resolution.
    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    /// Number of suffix rules after resolution.
    pub fn suffix_count(&self) -> usize {
        self.suffixes.len()
    }

    fn rewrite_suffix(&self, raw: &str) -> String {
        raw.split_whitespace()
            .enumerate()
            .map(|(position, word)| match self.suffixes.get(word) {
                Some(root) if position > 0 => root.as_str(),
                _ => word,
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn collapse(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_edges(
    entries: impl Iterator<Item = (String, String)>,
) -> Result<HashMap<String, String>, DomainError> {
    let mut edges: HashMap<String, String> = HashMap::new();
    for (from, to) in entries {
        if from.is_empty() || to.is_empty() {
            return Err(DomainError::EmptyAlias);
        }
        if let Some(existing) = edges.get(&from) {
            if *existing != to {
                return Err(DomainError::ConflictingAlias {
                    alias: from,
                    first: existing.clone(),
                    second: to,
                });
            }
            continue;
        }
        edges.insert(from, to);
    }
    Ok(edges)
}

/// Map every node with an outgoing edge to the end of its chain.
fn resolve_roots(edges: &HashMap<String, String>) -> Result<HashMap<String, String>, DomainError> {
    // Walk keys in sorted order so a cycle is always reported the same way.
    let mut keys: Vec<&String> = edges.keys().collect();
    keys.sort();

    let mut roots = HashMap::with_capacity(edges.len());
    for start in keys {
        let mut chain = vec![start.clone()];
        let mut current = start;
        while let Some(next) = edges.get(current) {
            if chain.contains(next) {
                chain.push(next.clone());
                return Err(DomainError::AliasCycle { chain });
            }
            chain.push(next.clone());
            current = next;
        }
        roots.insert(start.clone(), current.clone());
    }
    Ok(roots)
}
