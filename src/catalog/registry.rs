//! The feature registry: every capability adoptcheck knows how to look for.
//!
//! Hint keywords are matched case-insensitively against the aggregated hint
//! map, so mixed-case entries here ("inlineSuggest") match their lowercased
//! log/settings counterparts. Keep the plain keywords in lockstep with
//! `scanner::logs::KNOWN_HINTS` - there is a test for it.

use super::{Category, DetectHint, Feature, Level};
use DetectHint::{InFile, Keyword};

pub(super) static FEATURES: &[Feature] = &[
    // ── Modes ──────────────────────────────────────────────────────────
    Feature {
        id: "mode-ask",
        name: "Ask Mode",
        category: Category::Modes,
        description: "Conversational Q&A mode - ask the assistant questions about code, \
                      concepts, or your project without making edits.",
        docs_url: "https://code.visualstudio.com/docs/copilot/chat/chat-modes",
        detect_hints: &[Keyword("ask mode"), Keyword("askMode"), Keyword("mode:ask")],
        impact: Level::Low,
        difficulty: Level::Low,
        setup_steps: &["Open the chat panel and select 'Ask' from the mode picker."],
    },
    Feature {
        id: "mode-edit",
        name: "Edit Mode",
        category: Category::Modes,
        description: "Direct editing mode - the assistant applies changes to your files \
                      in-place with a diff review before accepting.",
        docs_url: "https://code.visualstudio.com/docs/copilot/chat/chat-modes",
        detect_hints: &[
            Keyword("edit mode"),
            Keyword("editMode"),
            Keyword("mode:edit"),
            Keyword("copilot-edits"),
        ],
        impact: Level::Medium,
        difficulty: Level::Low,
        setup_steps: &[
            "Select 'Edit' from the chat mode picker.",
            "Attach the files to change and describe the edit; review the diff before accepting.",
        ],
    },
    Feature {
        id: "mode-agent",
        name: "Agent Mode",
        category: Category::Modes,
        description: "Autonomous agent mode - the assistant plans multi-step tasks, runs \
                      terminal commands, and edits multiple files.",
        docs_url: "https://code.visualstudio.com/docs/copilot/chat/chat-modes",
        detect_hints: &[
            Keyword("agent mode"),
            Keyword("agentMode"),
            Keyword("mode:agent"),
            Keyword("agentic"),
        ],
        impact: Level::High,
        difficulty: Level::Low,
        setup_steps: &[
            "Select 'Agent' from the chat mode picker.",
            "Describe a multi-step task and the assistant will plan and execute it.",
        ],
    },
    // ── Chat ───────────────────────────────────────────────────────────
    Feature {
        id: "chat-panel",
        name: "Chat Panel",
        category: Category::Chat,
        description: "Dedicated sidebar panel for extended conversations with the assistant.",
        docs_url: "https://code.visualstudio.com/docs/copilot/chat/copilot-chat",
        detect_hints: &[
            Keyword("chat panel"),
            Keyword("copilot.chat"),
            Keyword("chat-panel"),
            Keyword("copilot chat"),
            Keyword("ccreq"),
            Keyword("chat request"),
        ],
        impact: Level::High,
        difficulty: Level::Low,
        setup_steps: &[
            "Press Ctrl+Shift+I (Cmd+Shift+I on Mac) or click the assistant icon in the sidebar.",
        ],
    },
    Feature {
        id: "chat-inline",
        name: "Inline Chat",
        category: Category::Chat,
        description: "Trigger chat directly in the editor at your cursor position for \
                      contextual help.",
        docs_url: "https://code.visualstudio.com/docs/copilot/chat/copilot-chat#_inline-chat",
        detect_hints: &[Keyword("inline chat"), Keyword("inlineChat")],
        impact: Level::Low,
        difficulty: Level::Low,
        setup_steps: &["Press Ctrl+I (Cmd+I on Mac) in any editor to open inline chat."],
    },
    Feature {
        id: "chat-quick",
        name: "Quick Chat",
        category: Category::Chat,
        description: "Lightweight floating chat window for fast one-off questions.",
        docs_url: "https://code.visualstudio.com/docs/copilot/chat/copilot-chat#_quick-chat",
        detect_hints: &[Keyword("quick chat"), Keyword("quickChat")],
        impact: Level::Low,
        difficulty: Level::Low,
        setup_steps: &["Press Ctrl+Shift+Alt+L (Cmd+Shift+Opt+L on Mac) to open quick chat."],
    },
    Feature {
        id: "chat-participant-workspace",
        name: "@workspace Participant",
        category: Category::Chat,
        description: "Chat participant that scopes the assistant's context to your entire \
                      workspace for project-wide questions.",
        docs_url: "https://code.visualstudio.com/docs/copilot/chat/copilot-chat#_chat-participants",
        detect_hints: &[Keyword("@workspace")],
        impact: Level::Medium,
        difficulty: Level::Low,
        setup_steps: &["Start a chat message with @workspace followed by your question."],
    },
    Feature {
        id: "chat-participant-terminal",
        name: "@terminal Participant",
        category: Category::Chat,
        description: "Chat participant specialized for terminal and shell command assistance.",
        docs_url: "https://code.visualstudio.com/docs/copilot/chat/copilot-chat#_chat-participants",
        detect_hints: &[Keyword("@terminal")],
        impact: Level::Medium,
        difficulty: Level::Low,
        setup_steps: &["Start a chat message with @terminal to ask about shell commands."],
    },
    Feature {
        id: "chat-participant-vscode",
        name: "@vscode Participant",
        category: Category::Chat,
        description: "Chat participant for editor settings, keybindings, and configuration \
                      questions.",
        docs_url: "https://code.visualstudio.com/docs/copilot/chat/copilot-chat#_chat-participants",
        detect_hints: &[Keyword("@vscode")],
        impact: Level::Low,
        difficulty: Level::Low,
        setup_steps: &["Start a chat message with @vscode to ask about editor configuration."],
    },
    Feature {
        id: "setting-model-selection",
        name: "Model Selection",
        category: Category::Chat,
        description: "Choose which AI model the assistant uses for suggestions and chat \
                      responses.",
        docs_url: "https://code.visualstudio.com/docs/copilot/copilot-settings",
        detect_hints: &[
            Keyword("github.copilot-chat.models"),
            Keyword("model selection"),
            Keyword("modelSelection"),
            Keyword("languageModel"),
            Keyword("gpt-4o"),
            Keyword("claude-sonnet"),
        ],
        impact: Level::High,
        difficulty: Level::Low,
        setup_steps: &[
            "Click the model name in the chat input to open the model picker.",
            "Pick a model suited to the task: fast models for completions, larger ones for reasoning.",
        ],
    },
    Feature {
        id: "smart-actions",
        name: "Smart Actions",
        category: Category::Chat,
        description: "Predefined AI-powered actions for common tasks: generating commit \
                      messages, renaming symbols, fixing errors.",
        docs_url: "https://code.visualstudio.com/docs/copilot/copilot-smart-actions",
        // No reliable signal surfaces in logs, settings, or workspace files,
        // so this entry is un-detectable and excluded from scoring.
        detect_hints: &[],
        impact: Level::Medium,
        difficulty: Level::Low,
        setup_steps: &[
            "Right-click on code in the editor and look for assistant actions in the context menu.",
            "In the Source Control view, click the sparkle icon to generate a commit message.",
        ],
    },
    // ── Completion ─────────────────────────────────────────────────────
    Feature {
        id: "completion-inline",
        name: "Inline Suggestions",
        category: Category::Completion,
        description: "Ghost-text code suggestions that appear as you type, accepted with Tab.",
        docs_url: "https://code.visualstudio.com/docs/copilot/ai-powered-suggestions",
        detect_hints: &[
            Keyword("inlineSuggest"),
            Keyword("completionAccepted"),
            Keyword("completionSuggested"),
            Keyword("completion"),
        ],
        impact: Level::Low,
        difficulty: Level::Low,
        setup_steps: &[
            "Enabled by default. Start typing and suggestions appear as ghost text.",
            "Press Tab to accept or Esc to dismiss.",
        ],
    },
    Feature {
        id: "completion-multiline",
        name: "Multi-line Completions",
        category: Category::Completion,
        description: "The assistant generates multi-line code blocks including entire \
                      functions or control structures.",
        docs_url: "https://code.visualstudio.com/docs/copilot/ai-powered-suggestions",
        detect_hints: &[
            Keyword("multi-line"),
            Keyword("multiline"),
            Keyword("completion"),
            Keyword("inlineSuggest"),
        ],
        impact: Level::Low,
        difficulty: Level::Low,
        setup_steps: &[
            "Pause after writing a function signature or comment to receive whole-block suggestions.",
        ],
    },
    Feature {
        id: "completion-nes",
        name: "Next Edit Suggestions",
        category: Category::Completion,
        description: "The assistant predicts your next likely edit location and suggests \
                      changes proactively.",
        docs_url:
            "https://code.visualstudio.com/docs/copilot/ai-powered-suggestions#_next-edit-suggestions",
        detect_hints: &[
            Keyword("next edit"),
            Keyword("nextEdit"),
            Keyword("github.copilot.nexteditsuggestions"),
        ],
        impact: Level::High,
        difficulty: Level::Low,
        setup_steps: &[
            "Enable next edit suggestions in settings.",
            "After an edit, press Tab to jump to the next suggested change.",
        ],
    },
    // ── Customization ──────────────────────────────────────────────────
    Feature {
        id: "custom-instructions-file",
        name: "Custom Instructions File",
        category: Category::Customization,
        description: "A .github/copilot-instructions.md file that gives the assistant \
                      project-specific context and coding guidelines.",
        docs_url:
            "https://code.visualstudio.com/docs/copilot/copilot-customization#_custom-instructions",
        detect_hints: &[Keyword("copilot-instructions.md")],
        impact: Level::High,
        difficulty: Level::Low,
        setup_steps: &[
            "Create .github/copilot-instructions.md in your repo root.",
            "Add project conventions, preferred patterns, and coding guidelines.",
            "The assistant automatically includes these instructions in every interaction.",
        ],
    },
    Feature {
        id: "custom-copilotignore",
        name: ".copilotignore File",
        category: Category::Customization,
        description: "Exclude specific files or directories from the assistant's context \
                      and suggestions.",
        docs_url: "https://code.visualstudio.com/docs/copilot/copilot-customization",
        detect_hints: &[Keyword(".copilotignore")],
        impact: Level::Medium,
        difficulty: Level::Low,
        setup_steps: &[
            "Create a .copilotignore file in your repo root.",
            "List paths to exclude, one glob per line, like a .gitignore.",
        ],
    },
    Feature {
        id: "custom-prompt-files",
        name: "Reusable Prompt Files",
        category: Category::Customization,
        description: "Create .prompt.md files to define reusable, shareable prompt templates \
                      for common tasks.",
        docs_url:
            "https://code.visualstudio.com/docs/copilot/copilot-customization#_reusable-prompts",
        detect_hints: &[Keyword(".prompt.md")],
        impact: Level::High,
        difficulty: Level::Medium,
        setup_steps: &[
            "Create a .github/prompts/ directory in your workspace.",
            "Add <task>.prompt.md files describing recurring prompts.",
            "Invoke them from chat by name.",
        ],
    },
    Feature {
        id: "custom-mode-instructions",
        name: "Per-Mode Custom Instructions",
        category: Category::Customization,
        description: "Provide separate custom instructions for Ask, Edit, and Agent modes \
                      to tailor behavior per workflow.",
        docs_url:
            "https://code.visualstudio.com/docs/copilot/copilot-customization#_custom-instructions",
        detect_hints: &[
            Keyword("modeinstructions"),
            Keyword("mode instructions"),
            Keyword("github.copilot.chat.modeinstructions"),
        ],
        impact: Level::Medium,
        difficulty: Level::Medium,
        setup_steps: &[
            "Add mode-scoped instruction entries to your settings.",
            "Keep edit-mode instructions focused on diff conventions and agent-mode ones on tooling.",
        ],
    },
    Feature {
        id: "custom-language-enable",
        name: "Language-Specific Enablement",
        category: Category::Customization,
        description: "Enable or disable the assistant for specific programming languages \
                      via settings.",
        docs_url: "https://code.visualstudio.com/docs/copilot/copilot-customization",
        detect_hints: &[Keyword("github.copilot.enable"), Keyword("copilot.enable")],
        impact: Level::Low,
        difficulty: Level::Low,
        setup_steps: &[
            "Add a copilot.enable map to your settings with per-language booleans.",
        ],
    },
    Feature {
        id: "skill-mcp-servers",
        name: "MCP Servers",
        category: Category::Customization,
        description: "Connect external tools and data sources to the assistant through the \
                      Model Context Protocol (MCP).",
        docs_url: "https://code.visualstudio.com/docs/copilot/chat/mcp-servers",
        detect_hints: &[
            Keyword("mcp.json"),
            Keyword("mcpServers"),
            Keyword("mcp-server"),
            Keyword("mcp server"),
            Keyword("model context protocol"),
        ],
        impact: Level::High,
        difficulty: Level::High,
        setup_steps: &[
            "Create .vscode/mcp.json in your workspace.",
            "Define MCP server connections with their transport and command.",
            "Agent mode will automatically discover and use configured MCP tools.",
        ],
    },
    Feature {
        id: "custom-agents",
        name: "Custom Agents",
        category: Category::Customization,
        description: "Create custom agent configurations with tailored instructions, tools, \
                      and behaviors for specialized workflows.",
        docs_url:
            "https://code.visualstudio.com/docs/copilot/copilot-customization#_reusable-prompts",
        detect_hints: &[
            Keyword("custom agent"),
            Keyword("customAgent"),
            Keyword(".prompt.md"),
        ],
        impact: Level::High,
        difficulty: Level::Medium,
        setup_steps: &[
            "Define an agent profile with its instructions and allowed tools.",
            "Select the custom agent from the chat mode picker.",
        ],
    },
    Feature {
        id: "custom-agent-skills",
        name: "Custom Agent Skills",
        category: Category::Customization,
        description: "Define custom skills that agent mode can invoke - extend what the \
                      agent can do with project-specific tools and actions.",
        docs_url: "https://code.visualstudio.com/docs/copilot/copilot-customization",
        detect_hints: &[
            Keyword("copilot.tools"),
            Keyword("agent-skill"),
            Keyword("customTool"),
        ],
        impact: Level::High,
        difficulty: Level::High,
        setup_steps: &[
            "Declare custom tools in your settings under the assistant's tools section.",
            "Describe each skill's inputs so the agent knows when to invoke it.",
        ],
    },
    Feature {
        id: "custom-hooks",
        name: "Lifecycle Hooks",
        category: Category::Customization,
        description: "Execute custom shell commands at key lifecycle points during agent \
                      sessions for automation, policy enforcement, and auditing.",
        docs_url: "https://code.visualstudio.com/docs/copilot/customization/hooks",
        detect_hints: &[
            Keyword("copilot.hooks"),
            Keyword("lifecycle hook"),
            InFile {
                keyword: "hooks",
                path: ".github/hooks/prerun.json",
            },
        ],
        impact: Level::High,
        difficulty: Level::High,
        setup_steps: &[
            "Configure hooks in your settings under the assistant's hooks section.",
            "Define commands to run at lifecycle events like before/after file edits.",
        ],
    },
    // ── Context ────────────────────────────────────────────────────────
    Feature {
        id: "context-file",
        name: "#file Variable",
        category: Category::Context,
        description: "Reference a specific file in chat to give the assistant targeted \
                      context.",
        docs_url: "https://code.visualstudio.com/docs/copilot/chat/copilot-chat#_chat-variables",
        detect_hints: &[Keyword("#file")],
        impact: Level::Medium,
        difficulty: Level::Low,
        setup_steps: &["Type #file in a chat message and pick the file to attach."],
    },
    Feature {
        id: "context-selection",
        name: "#selection Variable",
        category: Category::Context,
        description: "Reference the currently selected code in chat for focused assistance.",
        docs_url: "https://code.visualstudio.com/docs/copilot/chat/copilot-chat#_chat-variables",
        detect_hints: &[Keyword("#selection")],
        impact: Level::Low,
        difficulty: Level::Low,
        setup_steps: &["Select code in the editor, then reference #selection in your message."],
    },
    Feature {
        id: "context-codebase",
        name: "#codebase Variable",
        category: Category::Context,
        description: "Let the assistant search your entire codebase to find relevant \
                      context for your question.",
        docs_url: "https://code.visualstudio.com/docs/copilot/chat/copilot-chat#_chat-variables",
        detect_hints: &[Keyword("#codebase")],
        impact: Level::High,
        difficulty: Level::Low,
        setup_steps: &["Include #codebase in a chat message to search the whole project."],
    },
    Feature {
        id: "context-problems",
        name: "#problems Variable",
        category: Category::Context,
        description: "Reference current errors and warnings from the Problems panel in chat.",
        docs_url: "https://code.visualstudio.com/docs/copilot/chat/copilot-chat#_chat-variables",
        detect_hints: &[Keyword("#problems")],
        impact: Level::Medium,
        difficulty: Level::Low,
        setup_steps: &["Include #problems in a chat message to attach current diagnostics."],
    },
];
