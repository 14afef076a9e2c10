use crate::desktop::{parse, render};
use crate::error::{Error, Result};
use crate::exec::{exec_program, is_executable_file};
use crate::models::ShowResult;
use crate::output::print_json;
use crate::xdg::Paths;
use std::{fs, path::Path};
use tracing::error;

pub fn show(paths: &Paths, app_name: &str, json: bool) -> i32 {
    let result = match load_entry(paths, app_name) {
        Ok(result) => result,
        Err(e) => {
            error!("{e}");
            return 1;
        }
    };

    if json {
        if let Err(e) = print_json(&result) {
            error!("{e}");
            return 1;
        }
    } else {
        println!("path={}", result.path);
        print!("{}", render(&result.entry));
        match &result.program {
            Some(p) if result.program_executable => println!("# program {p} is executable"),
            Some(p) => println!("# program {p} is missing or not executable"),
            None => println!("# no program in Exec"),
        }
    }

    0
}

pub fn load_entry(paths: &Paths, app_name: &str) -> Result<ShowResult> {
    let path = paths.desktop_file(app_name);
    if !path.is_file() {
        return Err(Error::EntryNotFound(app_name.to_string()));
    }

    let content = fs::read_to_string(&path).map_err(|e| Error::io("read", &path, e))?;
    let entry = parse(&content);
    let program = exec_program(&entry.exec);
    let program_executable = program
        .as_deref()
        .map(|p| is_executable_file(Path::new(p)))
        .unwrap_or(false);

    Ok(ShowResult {
        path: path.to_string_lossy().to_string(),
        entry,
        program,
        program_executable,
    })
}
