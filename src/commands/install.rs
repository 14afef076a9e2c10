use crate::desktop::{build_entry, check_name, merge, parse, render};
use crate::error::{Error, Result};
use crate::exec::set_executable;
use crate::icon::resolve_icon;
use crate::models::{DesktopEntry, ShortcutOptions};
use crate::xdg::{self, Paths};
use std::{fs, path::PathBuf};
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created,
    Updated,
}

pub fn install(paths: &Paths, opts: ShortcutOptions) -> i32 {
    let x11 = xdg::is_x11();
    match install_shortcut(paths, &opts, x11) {
        Ok(Outcome::Created) => {
            if x11 && opts.wm_class.as_deref().unwrap_or("").is_empty() {
                print_wm_class_hint(&opts);
            }
            0
        }
        Ok(Outcome::Updated) => 0,
        Err(e) => {
            error!("{e}");
            1
        }
    }
}

pub fn install_shortcut(paths: &Paths, opts: &ShortcutOptions, x11: bool) -> Result<Outcome> {
    let desktop_file = paths.desktop_file(&opts.app_name);
    if desktop_file.exists() {
        warn!("{} already exists, updating it", desktop_file.display());
        update_shortcut(paths, opts, x11)?;
        Ok(Outcome::Updated)
    } else {
        info!("{} does not exist, creating it", desktop_file.display());
        create_shortcut(paths, opts, x11)?;
        Ok(Outcome::Created)
    }
}

pub fn create_shortcut(paths: &Paths, opts: &ShortcutOptions, x11: bool) -> Result<PathBuf> {
    let entry = prepare_entry(paths, opts, x11)?;
    let path = write_desktop_file(paths, &opts.app_name, &render(&entry))?;
    info!("shortcut created: {}", path.display());
    Ok(path)
}

pub fn update_shortcut(paths: &Paths, opts: &ShortcutOptions, x11: bool) -> Result<PathBuf> {
    let path = paths.desktop_file(&opts.app_name);
    info!("reading existing entry {}", path.display());
    let existing = fs::read_to_string(&path).map_err(|e| Error::io("read", &path, e))?;
    let original = parse(&existing);

    // Refuse before chmod or icon changes touch anything.
    check_name(&original, &opts.app_name)?;

    let entry = prepare_entry(paths, opts, x11)?;
    let mut merged = merge(&original, &entry)?;

    // Merging never turns a flag off, so an explicit choice is applied on top.
    if let Some(terminal) = opts.terminal.explicit() {
        merged.terminal = terminal;
    }

    let path = write_desktop_file(paths, &opts.app_name, &render(&merged))?;
    info!("shortcut updated: {}", path.display());
    Ok(path)
}

/// Shared first half of both workflows: chmod, icon, defaults.
fn prepare_entry(paths: &Paths, opts: &ShortcutOptions, x11: bool) -> Result<DesktopEntry> {
    info!("setting executable permission on {}", opts.exec_path.display());
    set_executable(&opts.exec_path)?;

    let icon = resolve_icon(paths, &opts.app_name, opts.icon.as_deref())?;
    Ok(build_entry(opts, icon.as_deref(), x11))
}

fn write_desktop_file(paths: &Paths, app_name: &str, content: &str) -> Result<PathBuf> {
    fs::create_dir_all(&paths.applications_dir)
        .map_err(|e| Error::io("create directory", &paths.applications_dir, e))?;

    let path = paths.desktop_file(app_name);
    fs::write(&path, content).map_err(|e| Error::io("write", &path, e))?;
    Ok(path)
}

fn print_wm_class_hint(opts: &ShortcutOptions) {
    info!("to tie the shortcut to the application window, set its WM_CLASS:");
    info!("  1. start the application");
    info!("  2. run `xprop WM_CLASS` in a terminal and click the application window");
    info!("  3. the output looks like: WM_CLASS(STRING) = \"<wm-class>\", \"<AppName>\"");
    info!("  4. take the first value and update the shortcut:");
    info!(
        "     desktop-shortcut install --exec {} --wm-class <wm-class> {}",
        opts.exec_path.display(),
        opts.app_name
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExecKind, TerminalMode};
    use tempfile::TempDir;

    struct Fixture {
        temp_dir: TempDir,
        paths: Paths,
        exec: PathBuf,
    }

    fn fixture() -> Fixture {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::from_data_home(&temp_dir.path().join("share"));
        let exec = temp_dir.path().join("Editor-v1.0.AppImage");
        fs::write(&exec, b"binary").unwrap();
        Fixture {
            temp_dir,
            paths,
            exec,
        }
    }

    fn options(f: &Fixture) -> ShortcutOptions {
        ShortcutOptions {
            exec_path: f.exec.clone(),
            app_name: "Editor".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_then_update() {
        let f = fixture();
        let mut opts = options(&f);
        opts.comment = Some("Code editor".to_string());

        assert_eq!(
            install_shortcut(&f.paths, &opts, false).unwrap(),
            Outcome::Created
        );
        let path = f.paths.desktop_file("Editor");
        let created = parse(&fs::read_to_string(&path).unwrap());
        assert_eq!(created.version, "1.0");
        assert_eq!(created.comment, "Code editor");
        assert!(crate::exec::is_executable_file(&f.exec));

        let new_exec = f.temp_dir.path().join("Editor-v1.1.AppImage");
        fs::write(&new_exec, b"binary").unwrap();
        let opts = ShortcutOptions {
            exec_path: new_exec.clone(),
            ..options(&f)
        };

        assert_eq!(
            install_shortcut(&f.paths, &opts, false).unwrap(),
            Outcome::Updated
        );
        let updated = parse(&fs::read_to_string(&path).unwrap());
        assert_eq!(updated.version, "1.1");
        assert_eq!(updated.exec, format!("{} %U", new_exec.display()));
        // The default comment differs from the stored one, so it replaces it.
        assert_eq!(updated.comment, "Editor application shortcut");
    }

    #[test]
    fn test_update_keeps_hand_edits() {
        let f = fixture();
        fs::create_dir_all(&f.paths.applications_dir).unwrap();
        fs::write(
            f.paths.desktop_file("Editor"),
            "[Desktop Entry]\nName=Editor\nExec=old %U\nIcon=/old/icon.png\nTerminal=true\nKeywords=code;\n",
        )
        .unwrap();

        update_shortcut(&f.paths, &options(&f), false).unwrap();

        let entry = parse(&fs::read_to_string(f.paths.desktop_file("Editor")).unwrap());
        assert_eq!(entry.icon, "/old/icon.png");
        assert!(entry.terminal);
        assert_eq!(entry.extra.get("Keywords").map(String::as_str), Some("code;"));
    }

    #[test]
    fn test_update_explicit_terminal_false() {
        let f = fixture();
        let mut opts = options(&f);
        opts.kind = ExecKind::Script;
        create_shortcut(&f.paths, &opts, false).unwrap();

        opts.terminal = TerminalMode::False;
        update_shortcut(&f.paths, &opts, false).unwrap();

        let entry = parse(&fs::read_to_string(f.paths.desktop_file("Editor")).unwrap());
        assert!(!entry.terminal);
    }

    #[test]
    fn test_update_rejects_renamed_entry() {
        let f = fixture();
        fs::create_dir_all(&f.paths.applications_dir).unwrap();
        fs::create_dir_all(&f.paths.icons_dir).unwrap();
        let original = "[Desktop Entry]\nName=Something Else\nExec=x\n";
        fs::write(f.paths.desktop_file("Editor"), original).unwrap();
        fs::write(f.paths.icon_file("Editor", "svg"), b"<svg/>").unwrap();

        let new_icon = f.temp_dir.path().join("new.png");
        fs::write(&new_icon, b"png").unwrap();
        let mut opts = options(&f);
        opts.icon = Some(new_icon);

        let err = install_shortcut(&f.paths, &opts, false).unwrap_err();

        assert!(matches!(err, Error::NameMismatch { .. }));
        assert_eq!(
            fs::read_to_string(f.paths.desktop_file("Editor")).unwrap(),
            original
        );
        assert_eq!(
            fs::read(f.paths.icon_file("Editor", "svg")).unwrap(),
            b"<svg/>"
        );
        assert!(!f.paths.icon_file("Editor", "png").exists());
        assert!(!crate::exec::is_executable_file(&f.exec));
    }

    #[test]
    fn test_create_installs_icon() {
        let f = fixture();
        let icon = f.temp_dir.path().join("logo.svg");
        fs::write(&icon, b"<svg/>").unwrap();
        let mut opts = options(&f);
        opts.icon = Some(icon);

        create_shortcut(&f.paths, &opts, true).unwrap();

        let entry = parse(&fs::read_to_string(f.paths.desktop_file("Editor")).unwrap());
        let installed = f.paths.icon_file("Editor", "svg");
        assert!(installed.is_file());
        assert_eq!(entry.icon, installed.to_string_lossy());
        assert_eq!(entry.startup_wm_class, "");
    }

    #[test]
    fn test_missing_executable_writes_nothing() {
        let f = fixture();
        let opts = ShortcutOptions {
            exec_path: f.temp_dir.path().join("missing"),
            ..options(&f)
        };

        assert!(create_shortcut(&f.paths, &opts, false).is_err());
        assert!(!f.paths.desktop_file("Editor").exists());
    }

    #[test]
    fn test_bad_icon_format_writes_nothing() {
        let f = fixture();
        let icon = f.temp_dir.path().join("logo.bmp");
        fs::write(&icon, b"bmp").unwrap();
        let mut opts = options(&f);
        opts.icon = Some(icon);

        let err = create_shortcut(&f.paths, &opts, false).unwrap_err();

        assert!(matches!(err, Error::UnsupportedIcon { .. }));
        assert!(!f.paths.desktop_file("Editor").exists());
    }
}
