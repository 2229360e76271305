//! Scoring agents.
//!
//! Each agent analyzes one slice of the feature catalog against the
//! collected signals: partition into used/unused, compute a percentage
//! score, and rank the unused features into recommendations. Agents share
//! one algorithm and differ only in their catalog subset, recommendation
//! verb, and summary wording.

mod adoption;
mod customizations;
mod helpers;
mod modes;

use serde::Serialize;

use crate::catalog::{Category, Feature, Level};
use crate::scanner::{ExtensionsResult, LogEntry, LogSummary, SettingsResult, WorkspaceResult};

pub use adoption::AdoptionAgent;
pub use customizations::CustomizationsAgent;
pub use helpers::{
    build_recommendation, context_hints, feature_detected, feature_names, matrix_score,
    merge_hints, partition_features, recommend, stars_from_score, Partition,
};
pub use modes::ModesAgent;

/// Read-only bundle of everything the collectors produced, shared by all
/// agents in one analysis run.
#[derive(Debug)]
pub struct AnalysisContext {
    pub log_entries: Vec<LogEntry>,
    pub log_summary: LogSummary,
    pub settings: SettingsResult,
    pub workspace: WorkspaceResult,
    pub extensions: ExtensionsResult,
    pub catalog: Vec<Feature>,
}

/// A single actionable suggestion for the user.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub feature_id: &'static str,
    pub matrix_score: u32,
    pub title: String,
    pub description: &'static str,
    pub category: Category,
    pub action_items: &'static [&'static str],
    pub docs_url: &'static str,
    pub impact: Level,
    pub difficulty: Level,
    pub stars: &'static str,
}

/// The output of one agent's analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AgentReport {
    pub agent_name: &'static str,
    pub summary: String,
    pub features_used: Vec<Feature>,
    pub features_unused: Vec<Feature>,
    pub recommendations: Vec<Recommendation>,
    pub score: u32,
}

/// Interface every analysis agent implements.
pub trait Agent {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn analyze(&self, ctx: &AnalysisContext) -> AgentReport;
}

/// The full set of registered agents, in report order.
pub fn all_agents() -> Vec<Box<dyn Agent>> {
    vec![
        Box::new(ModesAgent),
        Box::new(CustomizationsAgent),
        Box::new(AdoptionAgent),
    ]
}

#[cfg(test)]
pub(crate) mod tests_support {
    use super::*;
    use crate::catalog::catalog;
    use crate::scanner::HintMap;

    pub fn hints_from(keys: &[&str]) -> HintMap {
        keys.iter().map(|k| (k.to_lowercase(), true)).collect()
    }

    /// A minimal context: the given hints on the log side, everything else
    /// empty, the full catalog visible.
    pub fn context_with_log_hints(log_hints: HintMap) -> AnalysisContext {
        AnalysisContext {
            log_entries: Vec::new(),
            log_summary: LogSummary {
                detected_hints: log_hints,
                ..Default::default()
            },
            settings: SettingsResult::default(),
            workspace: WorkspaceResult::default(),
            extensions: ExtensionsResult::default(),
            catalog: catalog().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_agents_registration() {
        let agents = all_agents();
        let names: Vec<&str> = agents.iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["Modes", "Customizations", "Adoption"]);
        for agent in &agents {
            assert!(!agent.description().is_empty());
        }
    }
}
