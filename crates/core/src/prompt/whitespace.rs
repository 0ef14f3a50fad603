//! Output whitespace cleanup.

use std::sync::LazyLock;

use regex::Regex;

/// Runs of two-or-more spaces/tabs. Compiled once, reused forever.
static WS_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]{2,}").expect("valid regex"));

/// Any spacing around an ASCII comma. Compiled once, reused forever.
static COMMA_SPACING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*,[ \t]*").expect("valid regex"));

/// Clean up a joined prompt string.
///
/// Collapses space/tab runs to a single space, normalizes spacing around
/// every ASCII comma to exactly `", "`, then trims spaces/tabs from both
/// ends.
pub fn cleanup(text: &str) -> String {
    let collapsed = WS_RUN_RE.replace_all(text, " ");
    let spaced = COMMA_SPACING_RE.replace_all(&collapsed, ", ");
    spaced
        .trim_matches(|c| c == ' ' || c == '\t')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_space_runs() {
        assert_eq!(cleanup("a  b   c"), "a b c");
    }

    #[test]
    fn collapses_tab_runs() {
        assert_eq!(cleanup("a\t\tb"), "a b");
    }

    #[test]
    fn single_interior_tab_is_kept() {
        // Only runs of two or more are collapsed.
        assert_eq!(cleanup("a\tb"), "a\tb");
    }

    #[test]
    fn normalizes_comma_spacing() {
        assert_eq!(cleanup("a ,b,  c , d"), "a, b, c, d");
    }

    #[test]
    fn trims_ends() {
        assert_eq!(cleanup("  a, b \t"), "a, b");
    }

    #[test]
    fn fullwidth_comma_is_left_alone() {
        assert_eq!(cleanup("a，b"), "a，b");
    }

    #[test]
    fn empty_input() {
        assert_eq!(cleanup(""), "");
    }
}
