//! Catalog-wide adoption agent.

use std::path::Path;

use crate::catalog::{features_by_category, ALL_CATEGORIES};

use super::helpers::{context_hints, feature_detected, partition_features, recommend};
use super::{Agent, AgentReport, AnalysisContext};

/// Compares the entire feature catalog against detected usage.
pub struct AdoptionAgent;

impl Agent for AdoptionAgent {
    fn name(&self) -> &'static str {
        "Adoption"
    }

    fn description(&self) -> &'static str {
        "Overall feature adoption & gap analysis"
    }

    fn analyze(&self, ctx: &AnalysisContext) -> AgentReport {
        let hints = context_hints(ctx);
        let root = Path::new(&ctx.workspace.root);

        let mut partition = partition_features(&ctx.catalog, &hints, root);
        let score = partition.score();
        let total = partition.total();
        let recommendations = recommend(&mut partition.unused, "Discover");

        // Per-category breakdown over detectable features. Every category is
        // listed, including ones with nothing detectable (0/0), so the
        // summary shape is stable.
        let detectable: Vec<_> = ctx
            .catalog
            .iter()
            .filter(|f| f.is_detectable())
            .copied()
            .collect();
        let by_cat = features_by_category(&detectable);
        let mut cat_summaries = Vec::with_capacity(ALL_CATEGORIES.len());
        for cat in ALL_CATEGORIES {
            let cat_features = by_cat.get(cat).map(|v| v.as_slice()).unwrap_or(&[]);
            let used = cat_features
                .iter()
                .filter(|f| feature_detected(f, &hints, root))
                .count();
            cat_summaries.push(format!("{} {}/{}", cat, used, cat_features.len()));
        }

        let summary = format!(
            "Overall adoption: {}/{} features ({}%). Breakdown: {}",
            partition.used.len(),
            total,
            score,
            cat_summaries.join(" | ")
        );

        AgentReport {
            agent_name: self.name(),
            summary,
            features_used: partition.used,
            features_unused: partition.unused,
            recommendations,
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::tests_support::{context_with_log_hints, hints_from};
    use crate::catalog::catalog;

    #[test]
    fn test_adoption_agent_zero_usage() {
        let ctx = context_with_log_hints(hints_from(&[]));
        let report = AdoptionAgent.analyze(&ctx);

        let detectable = catalog().iter().filter(|f| f.is_detectable()).count();
        assert_eq!(report.score, 0);
        assert!(report.features_used.is_empty());
        assert_eq!(report.features_unused.len(), detectable);
        assert_eq!(report.recommendations.len(), 5);
        assert!(report.summary.contains(&format!("0/{}", detectable)));
    }

    #[test]
    fn test_adoption_agent_full_usage() {
        // One hint per detectable feature.
        let keys: Vec<String> = catalog()
            .iter()
            .filter(|f| f.is_detectable())
            .map(|f| f.detect_hints[0].keyword().to_lowercase())
            .collect();
        let key_refs: Vec<&str> = keys.iter().map(|s| s.as_str()).collect();
        let ctx = context_with_log_hints(hints_from(&key_refs));

        let report = AdoptionAgent.analyze(&ctx);
        assert_eq!(report.score, 100);
        assert!(report.features_unused.is_empty());
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_adoption_agent_breakdown_lists_every_category() {
        let ctx = context_with_log_hints(hints_from(&["ask mode", "edit mode", "agent mode"]));
        let report = AdoptionAgent.analyze(&ctx);

        assert!(report.summary.contains("Breakdown:"));
        for cat in ALL_CATEGORIES {
            assert!(
                report.summary.contains(cat.as_str()),
                "missing {} in summary",
                cat
            );
        }
        assert!(report.summary.contains("Modes 3/3"));
    }

    #[test]
    fn test_adoption_agent_recommendations_sorted_descending() {
        let ctx = context_with_log_hints(hints_from(&["completion"]));
        let report = AdoptionAgent.analyze(&ctx);

        assert!(!report.recommendations.is_empty());
        assert!(report.recommendations.len() <= 5);
        for pair in report.recommendations.windows(2) {
            assert!(pair[0].matrix_score >= pair[1].matrix_score);
        }
        for rec in &report.recommendations {
            assert!(rec.title.starts_with("Discover "));
        }
    }

    #[test]
    fn test_adoption_agent_respects_visible_catalog_subset() {
        let visible: Vec<_> = catalog()
            .iter()
            .filter(|f| f.id != "mode-ask")
            .copied()
            .collect();
        let visible_detectable = visible.iter().filter(|f| f.is_detectable()).count();

        let mut ctx = context_with_log_hints(hints_from(&["ask mode"]));
        ctx.catalog = visible;

        let report = AdoptionAgent.analyze(&ctx);
        assert_eq!(
            report.features_used.len() + report.features_unused.len(),
            visible_detectable
        );
        assert!(report.features_used.is_empty());
    }
}
