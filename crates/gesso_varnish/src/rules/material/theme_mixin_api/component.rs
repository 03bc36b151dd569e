//! Component name resolution from theme file paths.

use compact_str::{format_compact, CompactString};
use once_cell::sync::Lazy;
use regex::Regex;

/// `_button-theme.scss` -> `button`
static THEME_FILE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_?(.*)-theme\.scss$").expect("valid theme file pattern"));

/// Derive the component name used in the duplicate styles check.
///
/// Returns `None` for files that are not theme files; those are skipped.
pub fn component_name_from_path(path: &str) -> Option<CompactString> {
    let basename = path
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(path);
    let captures = THEME_FILE.captures(basename)?;
    let name = captures.get(1)?.as_str();

    let prefix = if path.contains("material-experimental") && path.contains("mdc-") {
        "mat-mdc-"
    } else if path.contains("material") {
        "mat-"
    } else {
        ""
    };

    Some(format_compact!("{prefix}{name}"))
}
