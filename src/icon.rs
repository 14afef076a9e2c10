//! Icon placement under `<data home>/icons`.

use crate::error::{Error, Result};
use crate::xdg::Paths;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

const ICON_EXTENSIONS: [&str; 2] = ["png", "svg"];

/// Lowercased extension of a supported icon, or an error.
pub fn icon_extension(path: &Path) -> Result<&'static str> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    ICON_EXTENSIONS
        .into_iter()
        .find(|known| *known == ext)
        .ok_or_else(|| Error::UnsupportedIcon {
            path: path.to_path_buf(),
        })
}

/// Decide what goes in `Icon=`.
///
/// With a source file the icon is (re)installed under the app name. Without
/// one, a previously installed png or svg is reused.
pub fn resolve_icon(
    paths: &Paths,
    app_name: &str,
    source: Option<&Path>,
) -> Result<Option<PathBuf>> {
    match source {
        Some(source) => install_icon(paths, app_name, source).map(Some),
        None => Ok(find_installed_icon(paths, app_name)),
    }
}

pub fn install_icon(paths: &Paths, app_name: &str, source: &Path) -> Result<PathBuf> {
    let ext = icon_extension(source)?;
    let target = paths.icon_file(app_name, ext);

    if is_same_file(source, &target) {
        debug!("icon {} already in place", target.display());
        return Ok(target);
    }

    fs::create_dir_all(&paths.icons_dir)
        .map_err(|e| Error::io("create directory", &paths.icons_dir, e))?;

    // Drop whatever was installed before, in either format, so the lookup
    // by name can't pick a stale file.
    for old_ext in ICON_EXTENSIONS {
        remove_icon(paths, app_name, old_ext)?;
    }

    fs::copy(source, &target).map_err(|e| Error::io("copy icon", source, e))?;
    info!("installed icon {}", target.display());

    Ok(target)
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

pub fn find_installed_icon(paths: &Paths, app_name: &str) -> Option<PathBuf> {
    ICON_EXTENSIONS
        .into_iter()
        .map(|ext| paths.icon_file(app_name, ext))
        .find(|p| p.is_file())
}

/// Remove `<icons>/<app_name>.<ext>`. Returns whether a file was deleted.
pub fn remove_icon(paths: &Paths, app_name: &str, ext: &str) -> Result<bool> {
    let path = paths.icon_file(app_name, ext);
    match fs::remove_file(&path) {
        Ok(()) => {
            debug!("removed icon {}", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::io("remove icon", path, e)),
    }
}

pub fn remove_installed_icons(paths: &Paths, app_name: &str) -> Result<usize> {
    let mut removed = 0;
    for ext in ICON_EXTENSIONS {
        if remove_icon(paths, app_name, ext)? {
            removed += 1;
        }
    }
    Ok(removed)
}
