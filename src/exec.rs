use crate::error::{Error, Result};
use std::path::Path;
use tracing::debug;

/// chmod 0755 on the target executable.
pub fn set_executable(path: &Path) -> Result<()> {
    let meta = std::fs::metadata(path).map_err(|e| Error::io("stat", path, e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = meta.permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(path, perms).map_err(|e| Error::io("chmod", path, e))?;
        debug!("set executable permission on {}", path.display());
    }

    #[cfg(not(unix))]
    {
        let _ = meta;
        debug!("skipping executable bit on {}", path.display());
    }

    Ok(())
}

pub fn is_executable_file(path: &Path) -> bool {
    let Ok(meta) = std::fs::metadata(path) else {
        return false;
    };

    if !meta.is_file() {
        return false;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        meta.permissions().mode() & 0o111 != 0
    }

    #[cfg(not(unix))]
    {
        true
    }
}

/// First real argument of an `Exec=` line, with field codes dropped.
pub fn exec_program(exec_line: &str) -> Option<String> {
    let tokens = shlex::split(&unescape_string_value(exec_line))?;
    tokens
        .into_iter()
        .find(|t| !is_field_code_token(t))
        .map(|t| t.replace("%%", "%"))
}

/// Undo the string-level escapes (`\s`, `\n`, `\t`, `\r`, `\\`) that
/// apply to every value before any `Exec` quoting is looked at.
fn unescape_string_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('s') => out.push(' '),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

fn is_field_code_token(t: &str) -> bool {
    matches!(
        t,
        "%f" | "%F" | "%u" | "%U" | "%d" | "%D" | "%n" | "%N" | "%i" | "%c" | "%k" | "%v" | "%m"
    )
}

/// Quote an `Exec` argument per the Desktop Entry rules.
///
/// `%` always becomes `%%`. Arguments holding reserved characters are wrapped
/// in double quotes, and `"`, `` ` ``, `$` and `\` inside get a backslash,
/// itself written as `\\` because the string escapes are undone first.
pub fn quote_exec_arg(arg: &str) -> String {
    const RESERVED: &[char] = &[
        ' ', '\t', '\n', '"', '\'', '\\', '>', '<', '~', '|', '&', ';', '$', '*', '?', '#', '(',
        ')', '`',
    ];

    if !arg.is_empty() && !arg.contains(RESERVED) {
        return arg.replace('%', "%%");
    }

    let mut out = String::with_capacity(arg.len() + 2);
    out.push('"');
    for ch in arg.chars() {
        match ch {
            '"' | '`' | '$' => {
                out.push_str("\\\\");
                out.push(ch);
            }
            '\\' => out.push_str("\\\\\\\\"),
            '%' => out.push_str("%%"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}
