//! Agent scoring the customization features.

use std::path::Path;

use crate::catalog::Category;

use super::helpers::{context_hints, feature_names, partition_features, recommend};
use super::{Agent, AgentReport, AnalysisContext};

/// Evaluates how much the user has tailored the assistant.
pub struct CustomizationsAgent;

impl Agent for CustomizationsAgent {
    fn name(&self) -> &'static str {
        "Customizations"
    }

    fn description(&self) -> &'static str {
        "Analyzes assistant customizations (instructions, MCP, settings)"
    }

    fn analyze(&self, ctx: &AnalysisContext) -> AgentReport {
        let hints = context_hints(ctx);
        let root = Path::new(&ctx.workspace.root);

        let subset: Vec<_> = ctx
            .catalog
            .iter()
            .filter(|f| f.category == Category::Customization)
            .copied()
            .collect();
        let mut partition = partition_features(&subset, &hints, root);

        let score = partition.score();
        let total = partition.total();
        let recommendations = recommend(&mut partition.unused, "Set up");

        let used_names = feature_names(&partition.used);
        let summary = if used_names.is_empty() {
            "No customizations detected. Personalizing the assistant can significantly \
             improve suggestion quality!"
                .to_string()
        } else {
            format!(
                "Customization level: {}/{} - using {}.",
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
