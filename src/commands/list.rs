use crate::desktop::parse;
use crate::models::InstalledEntry;
use crate::output::print_json;
use crate::xdg::Paths;
use std::{fs, path::Path};
use tracing::{debug, error};
use walkdir::WalkDir;

pub fn list(paths: &Paths, json: bool) -> i32 {
    let entries = installed_entries(&paths.applications_dir);

    if json {
        if let Err(e) = print_json(&entries) {
            error!("{e}");
            return 1;
        }
    } else {
        for e in &entries {
            println!("{}\t{}", e.id, e.name.as_deref().unwrap_or(""));
        }
    }

    0
}

pub fn installed_entries(applications_dir: &Path) -> Vec<InstalledEntry> {
    if !applications_dir.is_dir() {
        debug!("{} does not exist", applications_dir.display());
        return Vec::new();
    }

    let mut entries: Vec<InstalledEntry> = WalkDir::new(applications_dir)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        // Symlinked entries count, so check the target rather than the dir entry.
        .filter(|e| e.path().is_file() && is_desktop_file(e.path()))
        .map(|e| {
            let path = e.path();
            let name = fs::read_to_string(path)
                .ok()
                .map(|content| parse(&content).name)
                .filter(|n| !n.is_empty());
            InstalledEntry {
                id: desktop_id(applications_dir, path),
                path: path.to_string_lossy().to_string(),
                name,
            }
        })
        .collect();

    entries.sort_by(|a, b| a.id.cmp(&b.id));
    entries
}

fn is_desktop_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("desktop"))
        .unwrap_or(false)
}

fn desktop_id(applications_dir: &Path, desktop_path: &Path) -> String {
    // Relative path with '/' replaced by '-' and without ".desktop".
    let rel = desktop_path
        .strip_prefix(applications_dir)
        .unwrap_or(desktop_path);

    let mut s = rel.to_string_lossy().to_string();
    if let Some(stripped) = s.strip_suffix(".desktop") {
        s = stripped.to_string();
    }

    s.replace('/', "-")
}
