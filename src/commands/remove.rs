use crate::error::{Error, Result};
use crate::icon::remove_installed_icons;
use crate::xdg::Paths;
use std::fs;
use tracing::{error, info};

pub fn remove(paths: &Paths, app_name: &str, keep_icon: bool) -> i32 {
    match remove_shortcut(paths, app_name, keep_icon) {
        Ok(()) => 0,
        Err(e) => {
            error!("{e}");
            1
        }
    }
}

pub fn remove_shortcut(paths: &Paths, app_name: &str, keep_icon: bool) -> Result<()> {
    let path = paths.desktop_file(app_name);
    match fs::remove_file(&path) {
        Ok(()) => info!("removed {}", path.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::EntryNotFound(app_name.to_string()));
        }
        Err(e) => return Err(Error::io("remove", &path, e)),
    }

    if !keep_icon {
        let removed = remove_installed_icons(paths, app_name)?;
        if removed > 0 {
            info!("removed {removed} icon(s) for {app_name}");
        }
    }

    Ok(())
}
