//! Agent scoring the interaction-mode features.

use std::path::Path;

use crate::catalog::Category;

use super::helpers::{context_hints, feature_names, partition_features, recommend};
use super::{Agent, AgentReport, AnalysisContext};

/// Evaluates which assistant modes the user is engaging with.
pub struct ModesAgent;

impl Agent for ModesAgent {
    fn name(&self) -> &'static str {
        "Modes"
    }

    fn description(&self) -> &'static str {
        "Analyzes assistant mode usage (Ask / Edit / Agent)"
    }

    fn analyze(&self, ctx: &AnalysisContext) -> AgentReport {
        let hints = context_hints(ctx);
        let root = Path::new(&ctx.workspace.root);

        let subset: Vec<_> = ctx
            .catalog
            .iter()
            .filter(|f| f.category == Category::Modes)
            .copied()
            .collect();
        let mut partition = partition_features(&subset, &hints, root);

        let score = partition.score();
        let total = partition.total();
        let recommendations = recommend(&mut partition.unused, "Try");

        let used_names = feature_names(&partition.used);
        let summary = if used_names.is_empty() {
            "No assistant mode usage detected yet. Explore the chat mode picker!".to_string()
        } else {
            format!(
                "Using {} of {} mode features: {}.",
                partition.used.len(),
                total,
                used_names.join(", ")
            )
        };

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
