//! Output formatting for analysis results.
//!
//! Supports three output formats:
//! - Pretty: colored terminal output for human readability
//! - Markdown: shareable report document
//! - JSON: structured output for programmatic consumption
//!
//! Rendering is pure formatting over an [`AnalysisResult`]; no detection or
//! scoring decisions happen here.

use colored::*;
use std::collections::HashSet;

use crate::analyzer::AnalysisResult;
use crate::catalog::{features_by_category, Feature, ALL_CATEGORIES};

/// Feature IDs marked used by at least one agent.
fn used_ids(result: &AnalysisResult) -> HashSet<&'static str> {
    result
        .agent_reports
        .iter()
        .flat_map(|r| r.features_used.iter().map(|f| f.id))
        .collect()
}

// =============================================================================
// Markdown
// =============================================================================

/// Generate a markdown report from an analysis result.
pub fn generate_markdown_report(result: &AnalysisResult) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("# Assistant Adoption Report\n".to_string());
    lines.push(format!(
        "*Generated: {}*\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    ));

    lines.push("## Scorecard\n".to_string());
    lines.push("| Metric | Value |".to_string());
    lines.push("|---|---|".to_string());
    lines.push(format!(
        "| Overall Adoption Score | **{}/100** |",
        result.overall_score
    ));
    lines.push(format!(
        "| Features Detected | {} / {} |",
        result.used_features, result.total_features
    ));
    lines.push(format!(
        "| Log Entries Analyzed | {} |\n",
        result.log_summary.total_entries
    ));

    lines.push("## Top Recommendations\n".to_string());
    for (i, rec) in result.top_recommendations.iter().enumerate() {
        lines.push(format!("### {}. {} {}\n", i + 1, rec.stars, rec.title));
        lines.push(format!(
            "**Impact:** {} | **Difficulty:** {} | **Category:** {}\n",
            rec.impact, rec.difficulty, rec.category
        ));
        lines.push(format!("{}\n", rec.description));
        if !rec.action_items.is_empty() {
            lines.push("**Steps:**".to_string());
            for step in rec.action_items {
                lines.push(format!("1. {}", step));
            }
            lines.push(String::new());
        }
        if !rec.docs_url.is_empty() {
            lines.push(format!("[Documentation]({})\n", rec.docs_url));
        }
    }

    lines.push("## Feature Adoption Matrix\n".to_string());
    let used = used_ids(result);
    let by_cat = features_by_category(&result.catalog);
    for cat in ALL_CATEGORIES {
        let cat_features = match by_cat.get(cat) {
            Some(v) if !v.is_empty() => v,
            _ => continue,
        };
        lines.push(format!("#### {}\n", cat));
        lines.push("| Feature | Status |".to_string());
        lines.push("|---|---|".to_string());
        for f in cat_features {
            let status = if used.contains(f.id) {
                "✅ Using"
            } else {
                "⬜ Not detected"
            };
            lines.push(format!("| {} | {} |", f.name, status));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

// =============================================================================
// JSON
// =============================================================================

/// Write the result as pretty-printed JSON to stdout.
pub fn write_json(result: &AnalysisResult) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{}", json);
    Ok(())
}

// =============================================================================
// Pretty
// =============================================================================

/// Write a colored, human-readable report to stdout.
pub fn write_pretty(result: &AnalysisResult) {
    println!();
    print!("  ");
    print!("{}", "adoptcheck".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    // Scorecard
    print!("  Adoption score: ");
    write_colored_score(result.overall_score);
    print!("/100  Features: ");
    print!(
        "{}",
        format!("{}/{}", result.used_features, result.total_features).bold()
    );
    println!(
        "  {}",
        format!("({} log entries)", result.log_summary.total_entries).dimmed()
    );
    println!();

    // Per-agent summaries
    for report in &result.agent_reports {
        print!("  {:<16}", report.agent_name.bold());
        write_colored_score(report.score);
        println!("%");
        println!("    {}", report.summary.dimmed());
    }
    println!();

    // Recommendations
    if !result.top_recommendations.is_empty() {
        println!("  {}:", "Top recommendations".bold());
        println!();
        for (i, rec) in result.top_recommendations.iter().enumerate() {
            println!("  {}. {} {}", i + 1, rec.stars.yellow(), rec.title.bold());
            println!(
                "     {}",
                format!(
                    "impact: {}  difficulty: {}  [{}]",
                    rec.impact, rec.difficulty, rec.category
                )
                .dimmed()
            );
            for step in rec.action_items {
                println!("     - {}", step);
            }
            if !rec.docs_url.is_empty() {
                println!("     {}", rec.docs_url.blue());
            }
            println!();
        }
    }

    // Adoption matrix
    println!("  {}:", "Feature adoption".bold());
    let used = used_ids(result);
    let by_cat = features_by_category(&result.catalog);
    for cat in ALL_CATEGORIES {
        let cat_features = match by_cat.get(cat) {
            Some(v) if !v.is_empty() => v,
            _ => continue,
        };
        println!();
        println!("    {}", cat.to_string().bold());
        for f in cat_features {
            write_feature_row(f, used.contains(f.id));
        }
    }
    println!();
}

fn write_feature_row(f: &Feature, in_use: bool) {
    if in_use {
        print!("      {} ", "✓".green());
    } else {
        print!("      {} ", "·".dimmed());
    }
    print!("{:<32}", f.name);
    if !f.is_detectable() {
        print!("{}", " (not detectable)".dimmed());
    }
    println!();
}

fn write_colored_score(score: u32) {
    match score {
        s if s >= 75 => print!("{}", s.to_string().green().bold()),
        s if s >= 50 => print!("{}", s.to_string().green()),
        s if s >= 25 => print!("{}", s.to_string().yellow()),
        s => print!("{}", s.to_string().red()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::run_analysis;
    use crate::catalog::catalog;
    use crate::scanner::{ExtensionsResult, LogEntry, SettingsResult, WorkspaceResult};

    fn result_with_log(message: &str) -> AnalysisResult {
        let entries = vec![LogEntry {
            timestamp: "2026-01-23T12:00:00Z".to_string(),
            level: "info".to_string(),
            message: message.to_string(),
            source: None,
            data: None,
        }];
        run_analysis(
            entries,
            SettingsResult::default(),
            WorkspaceResult::default(),
            ExtensionsResult::default(),
            catalog().to_vec(),
        )
    }

    #[test]
    fn test_markdown_report_sections() {
        let result = result_with_log("user selected ask mode");
        let md = generate_markdown_report(&result);

        assert!(md.contains("# Assistant Adoption Report"));
        assert!(md.contains("## Scorecard"));
        assert!(md.contains("## Top Recommendations"));
        assert!(md.contains("## Feature Adoption Matrix"));
        assert!(md.contains("| Log Entries Analyzed | 1 |"));
        assert!(md.contains("✅ Using"));
        assert!(md.contains("⬜ Not detected"));
    }

    #[test]
    fn test_markdown_matrix_lists_every_visible_feature_once() {
        let result = result_with_log("noise");
        let md = generate_markdown_report(&result);

        for f in catalog() {
            let row_prefix = format!("| {} |", f.name);
            assert_eq!(
                md.matches(&row_prefix).count(),
                1,
                "feature {} should appear exactly once",
                f.id
            );
        }
    }

    #[test]
    fn test_markdown_groups_by_category_order() {
        let result = result_with_log("noise");
        let md = generate_markdown_report(&result);

        let mut last = 0;
        for cat in ALL_CATEGORIES {
            let header = format!("#### {}", cat);
            let pos = md.find(&header).expect("category header present");
            assert!(pos > last, "categories out of order at {}", cat);
            last = pos;
        }
    }

    #[test]
    fn test_markdown_recommendations_are_numbered() {
        let result = result_with_log("noise");
        let md = generate_markdown_report(&result);
        assert!(md.contains("### 1. "));
        assert!(md.contains("### 5. "));
        assert!(!md.contains("### 6. "));
    }
}
