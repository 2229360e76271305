//! Analysis orchestration.
//!
//! Runs every registered agent against one shared context and folds the
//! per-agent reports into a single [`AnalysisResult`]. Pure aggregation over
//! already-collected data; this layer cannot fail.

use serde::Serialize;
use std::collections::HashSet;

use crate::agents::{all_agents, Agent, AgentReport, AnalysisContext, Recommendation};
use crate::catalog::Feature;
use crate::scanner::{
    analyze_logs, ExtensionsResult, LogEntry, LogSummary, SettingsResult, WorkspaceResult,
};

/// The unified output of the full analysis pipeline, and the sole input to
/// report rendering.
#[derive(Debug, Serialize)]
pub struct AnalysisResult {
    pub agent_reports: Vec<AgentReport>,
    pub overall_score: u32,
    pub total_features: usize,
    pub used_features: usize,
    pub top_recommendations: Vec<Recommendation>,
    pub log_summary: LogSummary,
    /// Snapshot of the visible catalog the run was scored against, so the
    /// renderer can reproduce the full adoption matrix.
    pub catalog: Vec<Feature>,
}

/// Execute all agents against the collected data and return a unified result.
///
/// The visible catalog is passed explicitly; see `catalog::visible_catalog`
/// for deriving it from a hidden-ID set.
pub fn run_analysis(
    log_entries: Vec<LogEntry>,
    settings: SettingsResult,
    workspace: WorkspaceResult,
    extensions: ExtensionsResult,
    visible: Vec<Feature>,
) -> AnalysisResult {
    let log_summary = analyze_logs(&log_entries);
    let total_features = visible.len();

    let ctx = AnalysisContext {
        log_entries,
        log_summary,
        settings,
        workspace,
        extensions,
        catalog: visible,
    };

    let reports: Vec<AgentReport> = all_agents().iter().map(|a| a.analyze(&ctx)).collect();

    // Overall score: floored mean of agent scores.
    let overall_score = if reports.is_empty() {
        0
    } else {
        reports.iter().map(|r| r.score).sum::<u32>() / reports.len() as u32
    };

    // A feature used by several agents counts once.
    let used_ids: HashSet<&str> = reports
        .iter()
        .flat_map(|r| r.features_used.iter().map(|f| f.id))
        .collect();

    // Deduplicate recommendations across agents by feature ID; the first
    // occurrence (agent order, then rank within the agent) wins.
    let mut seen = HashSet::new();
    let mut all_recs: Vec<Recommendation> = Vec::new();
    for report in &reports {
        for rec in &report.recommendations {
            if seen.insert(rec.feature_id) {
                all_recs.push(rec.clone());
            }
        }
    }
    all_recs.sort_by(|a, b| b.matrix_score.cmp(&a.matrix_score));
    all_recs.truncate(5);

    AnalysisResult {
        overall_score,
        total_features,
        used_features: used_ids.len(),
        top_recommendations: all_recs,
        log_summary: ctx.log_summary.clone(),
        catalog: ctx.catalog.clone(),
        agent_reports: reports,
    }
}
