//! Editor settings scanning.
//!
//! Reads the user-level and workspace-level `settings.json`, flattens nested
//! objects into dotted keys, and injects every key verbatim (lowercased) into
//! the hint map. Free-text values are additionally scanned for known hints,
//! so a model name inside a setting value still counts as a usage signal.

use serde::Serialize;
use std::path::{Path, PathBuf};

use super::logs::detect_hints_in_text;
use super::{HintMap, ScanError};

/// Results of scanning editor settings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SettingsResult {
    pub found: bool,
    pub all_keys: usize,
    pub detected_hints: HintMap,
}

/// The platform-specific user settings file.
pub fn default_settings_path() -> Result<PathBuf, ScanError> {
    let dirs = directories::BaseDirs::new().ok_or(ScanError::NoHomeDir)?;
    Ok(dirs
        .config_dir()
        .join("Code")
        .join("User")
        .join("settings.json"))
}

/// Strip `//` and `/* */` comments from JSONC, preserving string contents.
fn strip_jsonc_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            if c == '\\' {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '/' => match chars.peek() {
                Some('/') => {
                    for next in chars.by_ref() {
                        if next == '\n' {
                            out.push('\n');
                            break;
                        }
                    }
                }
                Some('*') => {
                    chars.next();
                    let mut prev = ' ';
                    for next in chars.by_ref() {
                        if prev == '*' && next == '/' {
                            break;
                        }
                        prev = next;
                    }
                }
                _ => out.push(c),
            },
            _ => out.push(c),
        }
    }

    out
}

/// Flatten a settings object into dotted keys, injecting each key as a hint.
fn add_settings(value: &serde_json::Value, prefix: &str, result: &mut SettingsResult) {
    if let Some(obj) = value.as_object() {
        for (key, val) in obj {
            let full_key = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{}.{}", prefix, key)
            };
            result.all_keys += 1;
            result.detected_hints.insert(full_key.to_lowercase(), true);

            match val {
                serde_json::Value::String(s) => {
                    detect_hints_in_text(s, &mut result.detected_hints);
                }
                serde_json::Value::Object(_) => {
                    add_settings(val, &full_key, result);
                }
                _ => {}
            }
        }
    }
}

/// Scan a single settings file into an existing result. Missing or malformed
/// files leave the result untouched.
fn scan_settings_file(path: &Path, result: &mut SettingsResult) {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return,
    };

    let value: serde_json::Value = match serde_json::from_str(&strip_jsonc_comments(&content)) {
        Ok(v) => v,
        Err(_) => return,
    };

    result.found = true;
    add_settings(&value, "", result);
}

/// Scan the user settings file and the workspace `.vscode/settings.json`.
///
/// Either location may be absent; the result degrades gracefully.
pub fn scan_settings(user_settings: Option<&Path>, workspace_root: Option<&Path>) -> SettingsResult {
    let mut result = SettingsResult::default();

    if let Some(path) = user_settings {
        scan_settings_file(path, &mut result);
    }
    if let Some(root) = workspace_root {
        scan_settings_file(&root.join(".vscode").join("settings.json"), &mut result);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_scan_settings_flattens_and_injects_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{
                "editor.inlineSuggest": { "enabled": true },
                "github.copilot": { "enable": { "python": true } }
            }"#,
        )
        .unwrap();

        let result = scan_settings(Some(path.as_path()), None);
        assert!(result.found);
        assert_eq!(
            result.detected_hints.get("editor.inlinesuggest.enabled"),
            Some(&true)
        );
        assert_eq!(result.detected_hints.get("github.copilot.enable"), Some(&true));
        // Nested keys count individually: 2 roots + 2 nested + 1 leaf.
        assert_eq!(result.all_keys, 5);
    }

    #[test]
    fn test_scan_settings_string_values_are_hint_scanned() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{ "github.copilot-chat.models": "claude-sonnet-4" }"#,
        )
        .unwrap();

        let result = scan_settings(Some(path.as_path()), None);
        assert_eq!(result.detected_hints.get("claude-sonnet"), Some(&true));
        assert_eq!(
            result.detected_hints.get("github.copilot-chat.models"),
            Some(&true)
        );
    }

    #[test]
    fn test_scan_settings_tolerates_jsonc_comments() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.json");
        std::fs::write(
            &path,
            "{\n  // enable ghost text\n  \"editor.inlineSuggest\": true, /* block */\n  \"docs\": \"https://example.com/a\"\n}",
        )
        .unwrap();

        let result = scan_settings(Some(path.as_path()), None);
        assert!(result.found);
        assert_eq!(result.detected_hints.get("editor.inlinesuggest"), Some(&true));
    }

    #[test]
    fn test_scan_settings_reads_workspace_settings() {
        let temp = TempDir::new().unwrap();
        let vscode = temp.path().join(".vscode");
        std::fs::create_dir_all(&vscode).unwrap();
        std::fs::write(
            vscode.join("settings.json"),
            r#"{ "github.copilot.nexteditsuggestions": { "enabled": true } }"#,
        )
        .unwrap();

        let result = scan_settings(None, Some(temp.path()));
        assert!(result.found);
        assert_eq!(
            result
                .detected_hints
                .get("github.copilot.nexteditsuggestions"),
            Some(&true)
        );
    }

    #[test]
    fn test_scan_settings_missing_files_degrade() {
        let result = scan_settings(Some(Path::new("/no/such/settings.json")), None);
        assert!(!result.found);
        assert_eq!(result.all_keys, 0);
        assert!(result.detected_hints.is_empty());
    }

    #[test]
    fn test_strip_jsonc_preserves_slashes_in_strings() {
        let stripped = strip_jsonc_comments(r#"{"url": "https://example.com"} // tail"#);
        let value: serde_json::Value = serde_json::from_str(&stripped).unwrap();
        assert_eq!(value["url"], "https://example.com");
    }
}
