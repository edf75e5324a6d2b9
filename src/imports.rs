//! Theme import insertion.
//!
//! Files that reference the deprecated `AppColors` namespace need the theme
//! extension in scope for the rewritten `context.*Color` accessors to
//! resolve. Insertion is anchored textually: after the last import directly
//! preceding a declaration keyword, or failing that after the first Flutter
//! package import. When neither anchor exists the buffer is left untouched;
//! such files need a manual pass.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Substring marking a file as a rewrite candidate.
pub const MARKER: &str = "AppColors.";

/// The import line inserted when missing.
pub const THEME_IMPORT: &str = "import '../../core/app_theme.dart';";

/// Relative spellings whose presence suppresses insertion. Widget files sit
/// two or three levels below `lib/`, so both depths occur in the tree.
const KNOWN_SPELLINGS: [&str; 2] = [
    "import '../../core/app_theme.dart';",
    "import '../../../core/app_theme.dart';",
];

/// Last import statement directly followed by a declaration keyword. The
/// keyword (with its leading whitespace) is captured and re-emitted so the
/// import line lands between the two.
static DECLARATION_ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(import [^;]+;)(\s*\n\s*(?:class|abstract|mixin|enum|typedef|extension|void|Widget))",
    )
    .unwrap()
});

/// Fallback anchor: the first Flutter package import.
static FLUTTER_IMPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(import ['"]package:flutter[^;]+;)"#).unwrap());

/// Inserts the theme import if `content` references `AppColors.` and does
/// not already import the theme under either known spelling.
///
/// Returns `Some(buffer)` with exactly one inserted copy of [`THEME_IMPORT`],
/// or `None` when nothing was inserted (not a candidate, already imported,
/// or no anchor found).
pub fn ensure_theme_import(content: &str) -> Option<String> {
    if !content.contains(MARKER) {
        return None;
    }
    if KNOWN_SPELLINGS.iter().any(|s| content.contains(s)) {
        return None;
    }

    if DECLARATION_ANCHOR.is_match(content) {
        let inserted = DECLARATION_ANCHOR.replace(content, |caps: &Captures| {
            format!("{}\n{}{}", &caps[1], THEME_IMPORT, &caps[2])
        });
        return Some(inserted.into_owned());
    }

    if FLUTTER_IMPORT.is_match(content) {
        let inserted = FLUTTER_IMPORT.replace(content, |caps: &Captures| {
            format!("{}\n{}", &caps[1], THEME_IMPORT)
        });
        return Some(inserted.into_owned());
    }

    None
}
