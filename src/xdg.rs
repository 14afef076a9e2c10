use crate::error::{Error, Result};
use std::{
    env,
    path::{Path, PathBuf},
};

/// Where shortcuts and their icons are installed.
#[derive(Debug, Clone)]
pub struct Paths {
    pub applications_dir: PathBuf,
    pub icons_dir: PathBuf,
}

impl Paths {
    pub fn from_data_home(data_home: &Path) -> Self {
        Self {
            applications_dir: data_home.join("applications"),
            icons_dir: data_home.join("icons"),
        }
    }

    /// `--data-home` wins, then XDG_DATA_HOME (default ~/.local/share).
    pub fn resolve(override_dir: Option<&Path>) -> Result<Self> {
        if let Some(dir) = override_dir {
            return Ok(Self::from_data_home(dir));
        }

        let data_home = env::var_os("XDG_DATA_HOME")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| {
                env::var_os("HOME")
                    .filter(|v| !v.is_empty())
                    .map(|home| PathBuf::from(home).join(".local/share"))
            })
            .ok_or(Error::NoDataHome)?;

        Ok(Self::from_data_home(&data_home))
    }

    pub fn desktop_file(&self, app_name: &str) -> PathBuf {
        self.applications_dir.join(format!("{app_name}.desktop"))
    }

    pub fn icon_file(&self, app_name: &str, ext: &str) -> PathBuf {
        self.icons_dir.join(format!("{app_name}.{ext}"))
    }
}

pub fn is_x11() -> bool {
    session_is_x11(
        env::var("XDG_SESSION_TYPE").ok().as_deref(),
        env::var("DISPLAY").ok().as_deref(),
    )
}

fn session_is_x11(session_type: Option<&str>, display: Option<&str>) -> bool {
    let session_type = session_type.unwrap_or("");
    if session_type.eq_ignore_ascii_case("x11") {
        return true;
    }

    // Xwayland sets DISPLAY too, so only trust it when the session type is unknown.
    session_type.is_empty() && display.is_some_and(|d| !d.is_empty())
}
