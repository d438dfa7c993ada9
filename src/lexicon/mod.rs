//! Marker lexicon registry.
//!
//! The registry is immutable after construction and holds every marker group
//! the scorer consults. Built-in groups come from [`defs`]; a configuration
//! file may append extra phrases to any dimension and tier (a content change
//! only — the scoring algorithm never consults anything but the group list).

pub mod defs;

use std::collections::BTreeMap;

use crate::core::RiskDimension;

pub use defs::{MarkerGroupDef, MarkerTier};

/// A marker group held by the registry at runtime.
///
/// Phrases are stored lowercase; matching is substring containment against a
/// lowercased sentence, each phrase counting at most once per sentence.
#[derive(Debug, Clone)]
pub struct MarkerGroup {
    pub id: String,
    pub dimension: RiskDimension,
    pub tier: MarkerTier,
    pub weight: f64,
    phrases: Vec<String>,
}

impl MarkerGroup {
    fn from_def(def: &MarkerGroupDef) -> Self {
        Self {
            id: def.id.to_string(),
            dimension: def.dimension,
            tier: def.tier,
            weight: def.weight,
            phrases: def.phrases.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }
}

/// Extra phrases to merge over the built-in tables, keyed by dimension and
/// tier. Produced by the configuration layer.
#[derive(Debug, Clone, Default)]
pub struct MarkerExtensions {
    entries: BTreeMap<(RiskDimension, &'static str), Vec<String>>,
}

impl MarkerExtensions {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, dimension: RiskDimension, tier: MarkerTier, phrase: &str) {
        let key = (dimension, tier_key(tier));
        self.entries
            .entry(key)
            .or_default()
            .push(phrase.trim().to_lowercase());
    }
}

fn tier_key(tier: MarkerTier) -> &'static str {
    match tier {
        MarkerTier::Base => "base",
        MarkerTier::HighSeverity => "high_severity",
    }
}

fn tier_from_key(key: &str) -> MarkerTier {
    match key {
        "high_severity" => MarkerTier::HighSeverity,
        _ => MarkerTier::Base,
    }
}

/// Read-only lexicon shared by every scoring call.
///
/// Safe to share across threads: nothing is mutated after construction.
#[derive(Debug, Clone)]
pub struct LexiconRegistry {
    groups: Vec<MarkerGroup>,
}

impl LexiconRegistry {
    /// Registry with the built-in marker tables only.
    pub fn builtin() -> Self {
        let groups = defs::builtin_groups()
            .iter()
            .map(MarkerGroup::from_def)
            .collect();
        Self { groups }
    }

    /// Registry with the built-in tables plus configured extensions. Each
    /// non-empty extension list becomes one additional weight-1.0 group for
    /// its dimension and tier, appended after the built-ins.
    pub fn with_extensions(extensions: &MarkerExtensions) -> Self {
        let mut registry = Self::builtin();
        for ((dimension, tier_key), phrases) in &extensions.entries {
            let phrases: Vec<String> =
                phrases.iter().filter(|p| !p.is_empty()).cloned().collect();
            if phrases.is_empty() {
                continue;
            }
            registry.groups.push(MarkerGroup {
                id: format!("{}_{}_extension", dimension.as_str(), tier_key),
                dimension: *dimension,
                tier: tier_from_key(tier_key),
                weight: 1.0,
                phrases,
            });
        }
        registry
    }

    pub fn groups(&self) -> &[MarkerGroup] {
        &self.groups
    }

    pub fn groups_for(
        &self,
        dimension: RiskDimension,
    ) -> impl Iterator<Item = &MarkerGroup> {
        self.groups.iter().filter(move |g| g.dimension == dimension)
    }
}

impl Default for LexiconRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
