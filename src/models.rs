use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, path::PathBuf};

/// The `[Desktop Entry]` group as this tool reads and writes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopEntry {
    pub version: String,
    pub name: String,
    pub encoding: String,
    pub comment: String,
    pub exec: String,
    pub icon: String,
    pub terminal: bool,
    #[serde(rename = "type")]
    pub type_: String,
    pub categories: String,
    pub startup_wm_class: String,
    pub startup_notify: bool,
    /// Keys of the main group we don't manage (`Name[fr]`, `Keywords`, ...).
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub extra: BTreeMap<String, String>,
    /// `#` lines from before or inside the main group.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub comments: Vec<String>,
    /// Any later groups (`[Desktop Action ...]`), kept verbatim.
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub trailing: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExecKind {
    #[default]
    App,
    Script,
    #[value(alias = "electron")]
    Chromium,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TerminalMode {
    #[default]
    Auto,
    True,
    False,
}

impl TerminalMode {
    /// `None` for `auto`, otherwise the explicit choice.
    pub fn explicit(self) -> Option<bool> {
        match self {
            TerminalMode::Auto => None,
            TerminalMode::True => Some(true),
            TerminalMode::False => Some(false),
        }
    }
}

/// Everything the user told us about the shortcut.
#[derive(Debug, Clone, Default)]
pub struct ShortcutOptions {
    pub exec_path: PathBuf,
    pub app_name: String,
    pub comment: Option<String>,
    pub icon: Option<PathBuf>,
    pub version: Option<String>,
    pub wm_class: Option<String>,
    pub kind: ExecKind,
    pub terminal: TerminalMode,
}

#[derive(Debug, Serialize)]
pub struct InstalledEntry {
    pub id: String,
    pub path: String,
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ShowResult {
    pub path: String,
    pub entry: DesktopEntry,
    pub program: Option<String>,
    pub program_executable: bool,
}
