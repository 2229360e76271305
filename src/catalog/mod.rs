//! Feature catalog - the static registry of known assistant capabilities.
//!
//! Each [`Feature`] declares its identity, category, detection hints, and an
//! author-assigned impact/difficulty rating. The registry itself lives in
//! `registry.rs`; this module holds the types and the derived views over them.

mod registry;

use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Grouping of assistant features, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Modes,
    Chat,
    Completion,
    Customization,
    Context,
}

/// Every category in display order.
pub const ALL_CATEGORIES: &[Category] = &[
    Category::Modes,
    Category::Chat,
    Category::Completion,
    Category::Customization,
    Category::Context,
];

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Modes => "Modes",
            Category::Chat => "Chat",
            Category::Completion => "Completion",
            Category::Customization => "Customization",
            Category::Context => "Context",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "modes" => Some(Category::Modes),
            "chat" => Some(Category::Chat),
            "completion" => Some(Category::Completion),
            "customization" => Some(Category::Customization),
            "context" => Some(Category::Context),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Author-assigned impact/difficulty rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A signal whose presence implies usage of a feature.
///
/// Most hints are plain keywords matched against the aggregated hint map.
/// The `InFile` form instead searches the contents of a workspace file for
/// the keyword, for configuration that never surfaces in logs or settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DetectHint {
    Keyword(&'static str),
    InFile {
        keyword: &'static str,
        path: &'static str,
    },
}

impl DetectHint {
    /// The keyword this hint matches on, regardless of form.
    pub fn keyword(&self) -> &'static str {
        match self {
            DetectHint::Keyword(k) => k,
            DetectHint::InFile { keyword, .. } => keyword,
        }
    }
}

/// A single assistant capability known to the catalog.
///
/// A feature with an empty `detect_hints` slice is un-detectable by
/// convention: it is excluded from all scoring but still listed by the
/// catalog browsing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub docs_url: &'static str,
    pub detect_hints: &'static [DetectHint],
    pub impact: Level,
    pub difficulty: Level,
    pub setup_steps: &'static [&'static str],
}

impl Feature {
    /// Whether this feature can ever be detected.
    pub fn is_detectable(&self) -> bool {
        !self.detect_hints.is_empty()
    }
}

/// The full registry of known features, in stable catalog order.
pub fn catalog() -> &'static [Feature] {
    registry::FEATURES
}

/// The catalog minus any feature whose ID is in the hidden set.
///
/// The hidden set comes from user configuration and is passed explicitly;
/// duplicates and ordering in the set are irrelevant.
pub fn visible_catalog(hidden: &HashSet<String>) -> Vec<Feature> {
    catalog()
        .iter()
        .filter(|f| !hidden.contains(f.id))
        .copied()
        .collect()
}

/// Group features by category, preserving catalog order within each group.
pub fn features_by_category(features: &[Feature]) -> HashMap<Category, Vec<Feature>> {
    let mut out: HashMap<Category, Vec<Feature>> = HashMap::new();
    for f in features {
        out.entry(f.category).or_default().push(*f);
    }
    out
}

/// Just the IDs from a list of features.
pub fn feature_ids(features: &[Feature]) -> Vec<&'static str> {
    features.iter().map(|f| f.id).collect()
}
