use crate::models::{ExecKind, ShortcutOptions, TerminalMode};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "desktop-shortcut")]
#[command(about = "Create and update .desktop shortcuts for any executable", long_about = None)]
pub struct Cli {
    /// Base data directory (defaults to $XDG_DATA_HOME or ~/.local/share)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_home: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Create a shortcut, or update it if one with this name exists
    Install(InstallArgs),

    /// Print an installed shortcut
    Show {
        app_name: String,

        #[arg(long)]
        json: bool,
    },

    /// List shortcuts in the applications directory
    List {
        #[arg(long)]
        json: bool,
    },

    /// Delete a shortcut and its installed icon
    Remove {
        app_name: String,

        /// Leave the icon in place
        #[arg(long)]
        keep_icon: bool,
    },
}

#[derive(clap::Args, Debug)]
pub struct InstallArgs {
    /// Application name, also the .desktop file name
    pub app_name: String,

    /// Path to the executable
    #[arg(long = "exec", value_name = "PATH")]
    pub exec_path: PathBuf,

    /// Description shown by the launcher
    #[arg(long)]
    pub comment: Option<String>,

    /// Icon file (.png or .svg)
    #[arg(long, value_name = "PATH")]
    pub icon: Option<PathBuf>,

    /// Application version (parsed from the file name when omitted)
    #[arg(long, value_name = "VERSION")]
    pub app_version: Option<String>,

    /// Kind of executable
    #[arg(long, value_enum, default_value_t = ExecKind::App)]
    pub kind: ExecKind,

    /// Run in a terminal
    #[arg(long, value_enum, default_value_t = TerminalMode::Auto)]
    pub terminal: TerminalMode,

    /// Window class used to match windows to the shortcut
    #[arg(long)]
    pub wm_class: Option<String>,
}

impl From<InstallArgs> for ShortcutOptions {
    fn from(args: InstallArgs) -> Self {
        ShortcutOptions {
            exec_path: args.exec_path,
            app_name: args.app_name,
            comment: args.comment,
            icon: args.icon,
            version: args.app_version,
            wm_class: args.wm_class,
            kind: args.kind,
            terminal: args.terminal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_args() {
        let cli = Cli::parse_from([
            "desktop-shortcut",
            "install",
            "--exec",
            "/opt/chat/chat",
            "--kind",
            "electron",
            "--terminal",
            "false",
            "Chat",
        ]);

        let Cmd::Install(args) = cli.cmd else {
            panic!("expected install");
        };
        let opts = ShortcutOptions::from(args);
        assert_eq!(opts.app_name, "Chat");
        assert_eq!(opts.exec_path, PathBuf::from("/opt/chat/chat"));
        assert_eq!(opts.kind, ExecKind::Chromium);
        assert_eq!(opts.terminal, TerminalMode::False);
        assert_eq!(opts.icon, None);
    }

    #[test]
    fn test_exec_is_required() {
        assert!(Cli::try_parse_from(["desktop-shortcut", "install", "Chat"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["desktop-shortcut", "list", "--data-home", "/tmp/x", "-d"]);
        assert!(cli.debug);
        assert_eq!(cli.data_home, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
