//! Installed-extension scanning.
//!
//! Enumerates the editor's extensions directory and maps known extension
//! names to hint keys. Directory names follow `publisher.name-version`.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::{HintMap, ScanError};

/// An installed editor extension.
#[derive(Debug, Clone, Serialize)]
pub struct ExtensionInfo {
    pub id: String,
    pub version: String,
}

/// Results of scanning for installed extensions.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtensionsResult {
    pub found: bool,
    pub extensions: Vec<ExtensionInfo>,
    pub detected_hints: HintMap,
}

lazy_static! {
    // "github.copilot-chat-0.36.2" -> id "github.copilot-chat", version "0.36.2"
    static ref EXTENSION_DIR: Regex = Regex::new(r"^(.+?)-(\d+\.\d+\.\d+.*)$").unwrap();
}

/// The default extensions directory under the user's home.
pub fn default_extensions_dir() -> Result<PathBuf, ScanError> {
    let dirs = directories::BaseDirs::new().ok_or(ScanError::NoHomeDir)?;
    Ok(dirs.home_dir().join(".vscode").join("extensions"))
}

/// Map a known extension ID to the hints its presence implies.
fn hints_for_extension(id: &str, hints: &mut HintMap) {
    let lower = id.to_lowercase();

    if lower == "github.copilot-chat" {
        hints.insert("copilot.chat".to_string(), true);
    }
    if lower.contains("mcp") {
        hints.insert("mcp-server".to_string(), true);
    }
    if lower.contains("chatparticipant") || lower.contains("chat-participant") {
        hints.insert("chat participant".to_string(), true);
    }
}

/// Enumerate installed extensions from a directory.
///
/// Entries that do not parse as `publisher.name-version` are skipped; a
/// missing directory yields an empty, not-found result.
pub fn scan_extensions(dir: &Path) -> ExtensionsResult {
    let mut result = ExtensionsResult::default();

    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return result,
    };
    result.found = true;

    for entry in entries.filter_map(|e| e.ok()) {
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        let Some(caps) = EXTENSION_DIR.captures(&name) else {
            continue;
        };
        // Extension IDs are publisher.name; skip stray version-suffixed dirs.
        if !caps[1].contains('.') {
            continue;
        }

        let info = ExtensionInfo {
            id: caps[1].to_string(),
            version: caps[2].to_string(),
        };
        hints_for_extension(&info.id, &mut result.detected_hints);
        result.extensions.push(info);
    }

    result
}

/// Scan the default extensions location.
pub fn scan_installed_extensions() -> Result<ExtensionsResult, ScanError> {
    Ok(scan_extensions(&default_extensions_dir()?))
}
