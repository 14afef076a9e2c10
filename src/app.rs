use crate::cli::{Cli, Cmd};
use crate::commands;
use crate::xdg::Paths;
use tracing::error;

pub fn run(cli: Cli) -> i32 {
    let paths = match Paths::resolve(cli.data_home.as_deref()) {
        Ok(paths) => paths,
        Err(e) => {
            error!("{e}");
            return 1;
        }
    };

    match cli.cmd {
        Cmd::Install(args) => commands::install::install(&paths, args.into()),
        Cmd::Show { app_name, json } => commands::show::show(&paths, &app_name, json),
        Cmd::List { json } => commands::list::list(&paths, json),
        Cmd::Remove {
            app_name,
            keep_icon,
        } => commands::remove::remove(&paths, &app_name, keep_icon),
    }
}
