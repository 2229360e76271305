//! Workspace file scanning.
//!
//! Presence of known assistant configuration files is a strong adoption
//! signal: an instructions file or `mcp.json` in the tree means the feature
//! is set up even when no recent log mentions it.

use globset::{Glob, GlobSet, GlobSetBuilder};
use lazy_static::lazy_static;
use serde::Serialize;
use std::path::Path;
use walkdir::WalkDir;

use super::HintMap;

/// Results of scanning a workspace for assistant config files.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WorkspaceResult {
    pub root: String,
    pub files_found: Vec<String>,
    pub detected_hints: HintMap,
}

/// A known config file and the hints its presence implies.
struct ConfigFile {
    path: &'static str,
    hints: &'static [&'static str],
}

static CONFIG_FILES: &[ConfigFile] = &[
    ConfigFile {
        path: ".github/copilot-instructions.md",
        hints: &["copilot-instructions.md"],
    },
    ConfigFile {
        path: ".copilotignore",
        hints: &[".copilotignore"],
    },
    ConfigFile {
        path: ".vscode/mcp.json",
        hints: &["mcp.json", "mcpservers"],
    },
    ConfigFile {
        path: "mcp.json",
        hints: &["mcp.json", "mcpservers"],
    },
    ConfigFile {
        path: ".vscode/settings.json",
        hints: &[],
    },
    ConfigFile {
        path: ".devcontainer/devcontainer.json",
        hints: &[],
    },
];

lazy_static! {
    static ref PROMPT_GLOB: GlobSet = {
        let mut builder = GlobSetBuilder::new();
        builder.add(Glob::new(".github/prompts/**/*.prompt.md").unwrap());
        builder.build().unwrap()
    };
    static ref INSTRUCTIONS_GLOB: GlobSet = {
        let mut builder = GlobSetBuilder::new();
        builder.add(Glob::new(".github/instructions/**/*").unwrap());
        builder.build().unwrap()
    };
}

/// Check the workspace root for known assistant configuration files.
///
/// A missing or empty workspace yields an empty result; this scanner never
/// fails.
pub fn scan_workspace(root: &Path) -> WorkspaceResult {
    let mut result = WorkspaceResult {
        root: root.to_string_lossy().to_string(),
        ..Default::default()
    };

    for cf in CONFIG_FILES {
        if root.join(cf.path).is_file() {
            result.files_found.push(cf.path.to_string());
            for h in cf.hints {
                result.detected_hints.insert((*h).to_string(), true);
            }
        }
    }

    // Prompt and instruction trees can hold any number of files; glob-match
    // relative paths under .github/.
    let github_dir = root.join(".github");
    if github_dir.is_dir() {
        for entry in WalkDir::new(&github_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }
            let rel = match entry.path().strip_prefix(root) {
                Ok(r) => r,
                Err(_) => continue,
            };

            if PROMPT_GLOB.is_match(rel) {
                result.files_found.push(rel.to_string_lossy().to_string());
                result.detected_hints.insert(".prompt.md".to_string(), true);
            } else if INSTRUCTIONS_GLOB.is_match(rel) {
                result.files_found.push(rel.to_string_lossy().to_string());
                result
                    .detected_hints
                    .insert("copilot-instructions.md".to_string(), true);
                result
                    .detected_hints
                    .insert("modeinstructions".to_string(), true);
            }
        }
    }

    result
}
