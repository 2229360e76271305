//! Editor session log scanning and hint extraction.
//!
//! Log files are the richest usage signal: most assistant interactions leave
//! a trace line. Parsing is deliberately forgiving - a log line is either a
//! JSON object, a `timestamp [level] message` plain line, or free text.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{HintMap, ScanError};

/// Known feature-usage hints to scan for in log text.
///
/// This list is part of the contract surface: every entry must correspond to
/// a hint declared by some catalog feature (there is a test for it), and new
/// catalog hints that can surface in logs belong here.
pub static KNOWN_HINTS: &[&str] = &[
    // Modes
    "ask mode",
    "askmode",
    "mode:ask",
    "edit mode",
    "editmode",
    "mode:edit",
    "copilot-edits",
    "agent mode",
    "agentmode",
    "mode:agent",
    "agentic",
    // Chat
    "copilot chat",
    "ccreq",
    "chat request",
    "chat-panel",
    "inline chat",
    "inlinechat",
    "quick chat",
    "quickchat",
    "model selection",
    "modelselection",
    "languagemodel",
    "gpt-4o",
    "claude-sonnet",
    // Participants & context variables
    "@workspace",
    "@terminal",
    "@vscode",
    "#file",
    "#selection",
    "#codebase",
    "#problems",
    // Completion
    "completion",
    "completionaccepted",
    "completionsuggested",
    "inlinesuggest",
    "multi-line",
    "multiline",
    "next edit",
    "nextedit",
    // Customization
    "copilot-instructions.md",
    ".copilotignore",
    ".prompt.md",
    "copilot.enable",
    "modeinstructions",
    "mode instructions",
    "custom agent",
    "customagent",
    "agent-skill",
    "customtool",
    "copilot.tools",
    // MCP
    "mcp server",
    "mcp.json",
    "mcpservers",
    "mcp-server",
    "model context protocol",
];

/// A single parsed log entry.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: String,
    pub message: String,
    pub source: Option<String>,
    pub data: Option<serde_json::Value>,
}

/// Aggregated results from log analysis.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LogSummary {
    pub total_entries: usize,
    pub event_counts: HashMap<String, usize>,
    pub total_completions: usize,
    pub accepted_completions: usize,
    pub acceptance_rate: f64,
    pub detected_hints: HintMap,
}

/// Scan text for known feature-usage hints, setting matches in `hints`.
///
/// Matching is case-insensitive substring search; callers may pass raw text.
pub fn detect_hints_in_text(text: &str, hints: &mut HintMap) {
    let lower = text.to_lowercase();
    for h in KNOWN_HINTS {
        if lower.contains(h) {
            hints.insert((*h).to_string(), true);
        }
    }
}

/// The platform-specific editor log directory, if a home directory exists.
pub fn default_log_dir() -> Result<PathBuf, ScanError> {
    let dirs = directories::BaseDirs::new().ok_or(ScanError::NoHomeDir)?;
    // config_dir resolves to %APPDATA%, ~/Library/Application Support, or
    // ~/.config depending on platform - exactly where the editor keeps logs.
    Ok(dirs.config_dir().join("Code").join("logs"))
}

/// Whether a file path looks like an assistant log.
fn is_assistant_log(path: &Path) -> bool {
    let lower = path.to_string_lossy().to_lowercase();
    lower.contains("copilot") || lower.contains("chat")
}

lazy_static! {
    // "2026-01-23 12:53:45.657 [info] message"
    static ref PLAIN_LINE: Regex =
        Regex::new(r"^(\d{4}-\d{2}-\d{2}[ T]\d{2}:\d{2}:\d{2}[.,]\d+)\s+\[(\w+)\]\s+(.*)$")
            .unwrap();
}

/// Parse a single log file into entries. Unreadable files yield no entries.
pub fn parse_log_file(path: &Path) -> Vec<LogEntry> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return Vec::new(),
    };

    let source = path.to_string_lossy().to_string();
    let mut entries = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(trimmed) {
            if parsed.is_object() {
                let str_field = |key: &str| {
                    parsed
                        .get(key)
                        .and_then(|v| v.as_str())
                        .map(|s| s.to_string())
                };
                entries.push(LogEntry {
                    timestamp: str_field("timestamp").unwrap_or_default(),
                    level: str_field("level").unwrap_or_else(|| "info".to_string()),
                    message: str_field("message")
                        .or_else(|| str_field("msg"))
                        .unwrap_or_else(|| trimmed.to_string()),
                    source: Some(source.clone()),
                    data: parsed.get("data").cloned().or(Some(parsed.clone())),
                });
                continue;
            }
        }

        if let Some(caps) = PLAIN_LINE.captures(trimmed) {
            entries.push(LogEntry {
                timestamp: caps[1].to_string(),
                level: caps[2].to_string(),
                message: caps[3].to_string(),
                source: Some(source.clone()),
                data: None,
            });
            continue;
        }

        entries.push(LogEntry {
            timestamp: String::new(),
            level: "info".to_string(),
            message: trimmed.to_string(),
            source: Some(source.clone()),
            data: None,
        });
    }

    entries
}

/// Recursively collect assistant log entries under a directory.
///
/// A missing directory yields no entries; unreadable files are skipped.
pub fn scan_logs(log_dir: &Path) -> Vec<LogEntry> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(log_dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if entry.file_type().is_file() && is_assistant_log(entry.path()) {
            entries.extend(parse_log_file(entry.path()));
        }
    }

    entries
}

/// Scan the editor's default log location.
pub fn scan_editor_logs() -> Result<Vec<LogEntry>, ScanError> {
    let dir = default_log_dir()?;
    if !dir.exists() {
        return Ok(Vec::new());
    }
    // Surface permission problems on the root; unreadable files below are
    // skipped individually.
    std::fs::read_dir(&dir)?;
    Ok(scan_logs(&dir))
}

/// Produce an aggregated summary from raw log entries.
pub fn analyze_logs(entries: &[LogEntry]) -> LogSummary {
    let mut summary = LogSummary {
        total_entries: entries.len(),
        ..Default::default()
    };

    for e in entries {
        if e.message.is_empty() {
            continue;
        }

        if let Some(event) = e
            .data
            .as_ref()
            .and_then(|d| d.get("event"))
            .and_then(|v| v.as_str())
        {
            *summary.event_counts.entry(event.to_string()).or_insert(0) += 1;
            match event {
                "completion" => summary.total_completions += 1,
                "accepted" => summary.accepted_completions += 1,
                _ => {}
            }
        }

        detect_hints_in_text(&e.message, &mut summary.detected_hints);
    }

    if summary.total_completions > 0 {
        summary.acceptance_rate =
            summary.accepted_completions as f64 / summary.total_completions as f64 * 100.0;
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: "2026-01-23T12:53:45.657Z".to_string(),
            level: "info".to_string(),
            message: message.to_string(),
            source: Some("/logs/Copilot Chat.log".to_string()),
            data: None,
        }
    }

    #[test]
    fn test_detect_hints_mode_keywords() {
        let mut hints = HintMap::new();
        detect_hints_in_text("user selected ask mode from the mode picker", &mut hints);
        assert_eq!(hints.get("ask mode"), Some(&true));

        let mut hints = HintMap::new();
        detect_hints_in_text("request sent with mode:agent, agentic workflow", &mut hints);
        assert_eq!(hints.get("mode:agent"), Some(&true));
        assert_eq!(hints.get("agentic"), Some(&true));
    }

    #[test]
    fn test_detect_hints_is_case_insensitive() {
        let mut hints = HintMap::new();
        detect_hints_in_text("Switched to EDIT MODE for diff-based editing", &mut hints);
        assert_eq!(hints.get("edit mode"), Some(&true));
    }

    #[test]
    fn test_detect_hints_multiple_in_one_line() {
        let mut hints = HintMap::new();
        detect_hints_in_text(
            "used @workspace with #file and inline chat in agent mode to fix .copilotignore",
            &mut hints,
        );
        for key in ["@workspace", "#file", "inline chat", "agent mode", ".copilotignore"] {
            assert_eq!(hints.get(key), Some(&true), "missing {}", key);
        }
    }

    #[test]
    fn test_detect_hints_noise_only_input() {
        let mut hints = HintMap::new();
        detect_hints_in_text("", &mut hints);
        assert!(hints.is_empty());

        detect_hints_in_text("general startup log entry without features", &mut hints);
        assert!(hints.is_empty());
    }

    #[test]
    fn test_detect_hints_from_realistic_lines() {
        // Sanitized from real assistant logs.
        let mut hints = HintMap::new();
        detect_hints_in_text(
            "[fetchCompletions] Request aaaa1111 at <https://proxy.example.com/v1/engines/completions> finished with 200",
            &mut hints,
        );
        assert_eq!(hints.get("completion"), Some(&true));

        let mut hints = HintMap::new();
        detect_hints_in_text(
            "Overwriting mcp server 'github' from /Users/testuser/projects/my-app/.vscode/mcp.json",
            &mut hints,
        );
        assert_eq!(hints.get("mcp server"), Some(&true));
        assert_eq!(hints.get("mcp.json"), Some(&true));

        let mut hints = HintMap::new();
        detect_hints_in_text(
            "chat response from claude-sonnet-4 received via languageModel API",
            &mut hints,
        );
        assert_eq!(hints.get("claude-sonnet"), Some(&true));
        assert_eq!(hints.get("languagemodel"), Some(&true));
    }

    #[test]
    fn test_parse_log_file_plain_format() {
        let temp = TempDir::new().unwrap();
        let log = temp.path().join("Copilot Chat.log");
        std::fs::write(
            &log,
            "2026-01-23 12:53:45.657 [info] Copilot Chat: 0.36.2, VS Code: 1.108.2\n\
             2026-01-23 12:53:46.001 [warning] something odd\n\
             free-text line without structure\n",
        )
        .unwrap();

        let entries = parse_log_file(&log);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].timestamp, "2026-01-23 12:53:45.657");
        assert_eq!(entries[0].level, "info");
        assert!(entries[0].message.contains("Copilot Chat"));
        assert_eq!(entries[1].level, "warning");
        assert_eq!(entries[2].level, "info");
        assert_eq!(entries[2].message, "free-text line without structure");
    }

    #[test]
    fn test_parse_log_file_json_lines() {
        let temp = TempDir::new().unwrap();
        let log = temp.path().join("copilot.log");
        std::fs::write(
            &log,
            r#"{"timestamp":"2026-01-23T12:00:00Z","level":"info","message":"completion shown","data":{"event":"completion"}}
{"msg":"fallback message field"}
"#,
        )
        .unwrap();

        let entries = parse_log_file(&log);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "completion shown");
        assert_eq!(
            entries[0].data.as_ref().unwrap().get("event").unwrap(),
            "completion"
        );
        assert_eq!(entries[1].message, "fallback message field");
    }

    #[test]
    fn test_parse_log_file_unreadable_is_empty() {
        let entries = parse_log_file(Path::new("/no/such/file.log"));
        assert!(entries.is_empty());
    }

    #[test]
    fn test_scan_logs_filters_by_file_name() {
        let temp = TempDir::new().unwrap();
        let sub = temp.path().join("window1").join("exthost");
        std::fs::create_dir_all(&sub).unwrap();
        std::fs::write(sub.join("GitHub Copilot Chat.log"), "inline chat opened\n").unwrap();
        std::fs::write(sub.join("renderer.log"), "agent mode irrelevant here\n").unwrap();

        let entries = scan_logs(temp.path());
        assert_eq!(entries.len(), 1);
        assert!(entries[0].message.contains("inline chat"));
    }

    #[test]
    fn test_scan_logs_missing_dir_is_empty() {
        assert!(scan_logs(Path::new("/no/such/dir")).is_empty());
    }

    #[test]
    fn test_analyze_logs_detects_hints() {
        let entries = vec![
            entry("[fetchCompletions] request finished with 200 after 228.37ms"),
            entry("Overwriting mcp server 'github' from .vscode/mcp.json"),
            entry("noise line with no relevant hints"),
        ];
        let summary = analyze_logs(&entries);
        assert_eq!(summary.total_entries, 3);
        assert_eq!(summary.detected_hints.get("completion"), Some(&true));
        assert_eq!(summary.detected_hints.get("mcp server"), Some(&true));
        assert_eq!(summary.detected_hints.get("mcp.json"), Some(&true));
    }

    #[test]
    fn test_analyze_logs_event_counts_and_acceptance_rate() {
        let with_event = |msg: &str, event: &str| LogEntry {
            data: Some(serde_json::json!({ "event": event })),
            ..entry(msg)
        };
        let entries = vec![
            with_event("completion shown", "completion"),
            with_event("completion accepted", "accepted"),
            with_event("completion shown", "completion"),
        ];

        let summary = analyze_logs(&entries);
        assert_eq!(summary.total_completions, 2);
        assert_eq!(summary.accepted_completions, 1);
        assert_eq!(summary.acceptance_rate, 50.0);
        assert_eq!(summary.event_counts.get("completion"), Some(&2));
    }

    #[test]
    fn test_analyze_logs_empty_input() {
        let summary = analyze_logs(&[]);
        assert_eq!(summary.total_entries, 0);
        assert!(summary.detected_hints.is_empty());
        assert_eq!(summary.acceptance_rate, 0.0);
    }
}
