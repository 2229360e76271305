//! Shared helpers for the scoring agents.
//!
//! Everything here is a total function over in-memory data, with one
//! exception: file-content hint verification reads from the workspace, and
//! any I/O error there is swallowed as "not detected".

use std::path::Path;

use crate::catalog::{DetectHint, Feature, Level};
use crate::scanner::HintMap;

use super::{AnalysisContext, Recommendation};

/// Merge multiple hint maps into one.
///
/// Only `true` entries are copied, so merging is commutative and idempotent
/// and a `false` from one source can never mask a `true` from another.
pub fn merge_hints(maps: &[&HintMap]) -> HintMap {
    let mut out = HintMap::new();
    for m in maps {
        for (k, v) in m.iter() {
            if *v {
                out.insert(k.clone(), true);
            }
        }
    }
    out
}

/// Merge the four collector hint maps from an analysis context.
pub fn context_hints(ctx: &AnalysisContext) -> HintMap {
    merge_hints(&[
        &ctx.log_summary.detected_hints,
        &ctx.settings.detected_hints,
        &ctx.workspace.detected_hints,
        &ctx.extensions.detected_hints,
    ])
}

/// Whether a feature is detected given the aggregated hints.
///
/// Returns true iff at least one declared hint, lowercased, is present in
/// the map. `InFile` hints additionally search the referenced workspace
/// file's contents for the keyword, case-insensitively. A feature with no
/// hints can never be detected.
pub fn feature_detected(f: &Feature, hints: &HintMap, root: &Path) -> bool {
    for hint in f.detect_hints {
        let keyword = hint.keyword().to_lowercase();
        if keyword.is_empty() {
            continue;
        }
        if hints.get(&keyword).copied().unwrap_or(false) {
            return true;
        }

        if let DetectHint::InFile { path, .. } = hint {
            // Unreadable or missing files mean "not found", never an error.
            if let Ok(content) = std::fs::read_to_string(root.join(path)) {
                if content.to_lowercase().contains(&keyword) {
                    return true;
                }
            }
        }
    }
    false
}

/// Display names from a list of features.
pub fn feature_names(features: &[Feature]) -> Vec<&'static str> {
    features.iter().map(|f| f.name).collect()
}

/// Ranking score from impact x difficulty. Higher means recommend first:
/// high impact plus low difficulty is a quick win.
///
/// ```text
///              Difficulty
///           Low   Medium  High
/// High    |  9   |  6   |  3   |  Impact
/// Medium  |  6   |  4   |  2   |
/// Low     |  3   |  2   |  1   |
/// ```
pub fn matrix_score(impact: Level, difficulty: Level) -> u32 {
    let impact_weight = match impact {
        Level::High => 3,
        Level::Medium => 2,
        Level::Low => 1,
    };
    let difficulty_weight = match difficulty {
        Level::Low => 3,
        Level::Medium => 2,
        Level::High => 1,
    };
    impact_weight * difficulty_weight
}

/// Star rating string for a matrix score.
pub fn stars_from_score(score: u32) -> &'static str {
    if score >= 9 {
        "★★★"
    } else if score >= 6 {
        "★★☆"
    } else if score >= 3 {
        "★☆☆"
    } else {
        "☆☆☆"
    }
}

/// Build a recommendation from an unused feature.
pub fn build_recommendation(f: &Feature, verb: &str) -> Recommendation {
    let score = matrix_score(f.impact, f.difficulty);
    Recommendation {
        feature_id: f.id,
        matrix_score: score,
        title: format!("{} {}", verb, f.name),
        description: f.description,
        category: f.category,
        action_items: f.setup_steps,
        docs_url: f.docs_url,
        impact: f.impact,
        difficulty: f.difficulty,
        stars: stars_from_score(score),
    }
}

/// Partition of a feature subset into detected and undetected.
pub struct Partition {
    pub used: Vec<Feature>,
    pub unused: Vec<Feature>,
}

impl Partition {
    pub fn total(&self) -> usize {
        self.used.len() + self.unused.len()
    }

    /// Percentage of the subset in use: integer floor, 0 for an empty subset.
    pub fn score(&self) -> u32 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        (self.used.len() * 100 / total) as u32
    }
}

/// Partition detectable features by the detection predicate, preserving
/// catalog order within each side.
pub fn partition_features(features: &[Feature], hints: &HintMap, root: &Path) -> Partition {
    let mut partition = Partition {
        used: Vec::new(),
        unused: Vec::new(),
    };
    for f in features {
        if !f.is_detectable() {
            continue;
        }
        if feature_detected(f, hints, root) {
            partition.used.push(*f);
        } else {
            partition.unused.push(*f);
        }
    }
    partition
}

/// Rank unused features best-first and build up to five recommendations.
///
/// The sort is stable and descending by matrix score, so ties keep catalog
/// order.
pub fn recommend(unused: &mut [Feature], verb: &str) -> Vec<Recommendation> {
    unused.sort_by(|a, b| {
        matrix_score(b.impact, b.difficulty).cmp(&matrix_score(a.impact, a.difficulty))
    });
    unused
        .iter()
        .take(5)
        .map(|f| build_recommendation(f, verb))
        .collect()
}
