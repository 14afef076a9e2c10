use regex::Regex;
use std::sync::LazyLock;

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[vV]?(\d+\.\d+(\.\d+)?(-\w+)?)").expect("version regex must compile")
});

/// Pull something that looks like a version out of an executable's file name.
///
/// `MyApp-v1.2.3-beta.AppImage` gives `1.2.3-beta`.
pub fn parse_version_from_name(file_name: &str) -> Option<String> {
    VERSION_RE
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
