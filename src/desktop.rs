use crate::error::{Error, Result};
use crate::exec::quote_exec_arg;
use crate::models::{DesktopEntry, ExecKind, ShortcutOptions};
use crate::version::parse_version_from_name;
use std::path::Path;

const ENCODING: &str = "UTF-8";
const ENTRY_TYPE: &str = "Application";

/// Turn user options into a full entry, filling in defaults.
///
/// `icon` is whatever the icon step settled on; `x11` decides whether
/// StartupWMClass may be left for the user to fill in later.
pub fn build_entry(opts: &ShortcutOptions, icon: Option<&Path>, x11: bool) -> DesktopEntry {
    let name = opts.app_name.clone();

    // Wayland compositors match windows by app id, which is usually the name.
    let startup_wm_class = match non_empty(opts.wm_class.as_deref()) {
        Some(class) => class.to_string(),
        None if !x11 => name.clone(),
        None => String::new(),
    };

    let version = match non_empty(opts.version.as_deref()) {
        Some(v) => v.to_string(),
        None => opts
            .exec_path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(parse_version_from_name)
            .unwrap_or_default(),
    };

    let comment = match non_empty(opts.comment.as_deref()) {
        Some(c) => c.to_string(),
        None if opts.kind == ExecKind::Script => format!("{name} script shortcut"),
        None => format!("{name} application shortcut"),
    };

    let program = quote_exec_arg(&opts.exec_path.to_string_lossy());
    let (exec, auto_terminal, categories) = match opts.kind {
        ExecKind::Script => (program, true, "Utility;"),
        ExecKind::Chromium => (format!("{program} --no-sandbox %U"), false, "Application;"),
        ExecKind::App => (format!("{program} %U"), false, "Application;"),
    };

    DesktopEntry {
        version,
        name,
        encoding: ENCODING.to_string(),
        comment,
        exec,
        icon: icon
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_default(),
        terminal: opts.terminal.explicit().unwrap_or(auto_terminal),
        type_: ENTRY_TYPE.to_string(),
        categories: categories.to_string(),
        startup_wm_class,
        startup_notify: false,
        ..Default::default()
    }
}

fn non_empty(v: Option<&str>) -> Option<&str> {
    v.filter(|s| !s.is_empty())
}

pub fn render(entry: &DesktopEntry) -> String {
    fn push(out: &mut String, key: &str, value: &str) {
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }

    fn push_if(out: &mut String, key: &str, value: &str) {
        if !value.is_empty() {
            push(out, key, value);
        }
    }

    fn bool_str(v: bool) -> &'static str {
        if v { "true" } else { "false" }
    }

    let mut out = String::new();
    for comment in &entry.comments {
        out.push_str(comment);
        out.push('\n');
    }

    out.push_str("[Desktop Entry]\n");
    push_if(&mut out, "Version", &entry.version);
    push(&mut out, "Name", &entry.name);
    push(&mut out, "Encoding", &entry.encoding);
    push_if(&mut out, "Comment", &entry.comment);
    push(&mut out, "Exec", &entry.exec);
    push_if(&mut out, "Icon", &entry.icon);
    push(&mut out, "Terminal", bool_str(entry.terminal));
    push(&mut out, "Type", &entry.type_);
    push(&mut out, "Categories", &entry.categories);
    push_if(&mut out, "StartupWMClass", &entry.startup_wm_class);
    push(&mut out, "StartupNotify", bool_str(entry.startup_notify));

    for (key, value) in &entry.extra {
        push(&mut out, key, value);
    }

    if !entry.trailing.is_empty() {
        out.push('\n');
        out.push_str(&entry.trailing);
        out.push('\n');
    }

    out
}

pub fn parse(content: &str) -> DesktopEntry {
    enum Section {
        Preamble,
        DesktopEntry,
        Other,
    }

    let mut entry = DesktopEntry::default();
    let mut section = Section::Preamble;
    let mut trailing: Vec<&str> = Vec::new();

    for raw_line in content.lines() {
        if matches!(section, Section::Other) {
            trailing.push(raw_line);
            continue;
        }

        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with('#') {
            entry.comments.push(line.to_string());
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            if line == "[Desktop Entry]" {
                section = Section::DesktopEntry;
            } else {
                section = Section::Other;
                trailing.push(raw_line);
            }
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();
        if key.is_empty() {
            continue;
        }

        match key {
            "Version" => entry.version = value.to_string(),
            "Name" => entry.name = value.to_string(),
            "Encoding" => entry.encoding = value.to_string(),
            "Comment" => entry.comment = value.to_string(),
            "Exec" => entry.exec = value.to_string(),
            "Icon" => entry.icon = value.to_string(),
            "Terminal" => entry.terminal = value == "true",
            "Type" => entry.type_ = value.to_string(),
            "Categories" => entry.categories = value.to_string(),
            "StartupWMClass" => entry.startup_wm_class = value.to_string(),
            "StartupNotify" => entry.startup_notify = value == "true",
            _ => {
                entry.extra.insert(key.to_string(), value.to_string());
            }
        }
    }

    entry.trailing = trailing.join("\n").trim_end().to_string();
    entry
}

/// Fold `updated` into `original`.
///
/// Non-empty strings that differ replace the old value, empty ones keep it.
/// A `true` flag wins, `false` keeps whatever was there. The name must not
/// change.
pub fn merge(original: &DesktopEntry, updated: &DesktopEntry) -> Result<DesktopEntry> {
    check_name(original, &updated.name)?;

    fn pick(old: &str, new: &str) -> String {
        if !new.is_empty() && new != old {
            new.to_string()
        } else {
            old.to_string()
        }
    }

    Ok(DesktopEntry {
        version: pick(&original.version, &updated.version),
        name: original.name.clone(),
        encoding: pick(&original.encoding, &updated.encoding),
        comment: pick(&original.comment, &updated.comment),
        exec: pick(&original.exec, &updated.exec),
        icon: pick(&original.icon, &updated.icon),
        terminal: updated.terminal || original.terminal,
        type_: pick(&original.type_, &updated.type_),
        categories: pick(&original.categories, &updated.categories),
        startup_wm_class: pick(&original.startup_wm_class, &updated.startup_wm_class),
        startup_notify: updated.startup_notify || original.startup_notify,
        extra: original.extra.clone(),
        comments: original.comments.clone(),
        trailing: original.trailing.clone(),
    })
}

/// An empty `requested` name matches anything.
pub fn check_name(original: &DesktopEntry, requested: &str) -> Result<()> {
    if !requested.is_empty() && requested != original.name {
        return Err(Error::NameMismatch {
            existing: original.name.clone(),
            requested: requested.to_string(),
        });
    }
    Ok(())
}

#[cfg_attr(not(test), allow(dead_code))]
pub fn update_content(original: &str, updated: &DesktopEntry) -> Result<String> {
    let merged = merge(&parse(original), updated)?;
    Ok(render(&merged))
}
