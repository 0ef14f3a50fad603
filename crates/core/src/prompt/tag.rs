//! Per-tag rewrite steps.
//!
//! A tag arrives here already trimmed and non-empty. Three rewrites run in
//! a fixed order: underscore substitution, weight-directive
//! canonicalization, then the bracket pass in [`super::brackets`]. The
//! order is load-bearing: weight detection sees spaces instead of
//! underscores, and the bracket pass sees weight directives already
//! wrapped in parentheses so it can pass them through unescaped.

use super::brackets;

/// Normalize one trimmed tag.
///
/// Underscores become spaces unconditionally, including inside
/// escaped-bracket literals such as `\(name_x\)`: the substitution runs
/// before any bracket classification.
pub fn normalize_tag(tag: &str) -> String {
    let spaced = tag.replace('_', " ");
    let weighted = canonicalize_weight(&spaced);
    brackets::escape_tag(&weighted)
}

/// Rewrite a whole-tag weight directive into its parenthesized form.
///
/// `name:1.2` becomes `(name:1.2)` and `name:` becomes `(name:)`. Exactly
/// one attempt is made; a tag that does not match the directive shape
/// passes through untouched.
fn canonicalize_weight(tag: &str) -> String {
    match split_weight_directive(tag) {
        Some((content, weight)) => format!("({content}:{weight})"),
        None => tag.to_string(),
    }
}

/// Match the entire tag against `content ':' weight`.
///
/// `content` is one or more identifier-like characters (ASCII letter or
/// digit, underscore, hyphen, space) and `weight` is zero or more of
/// digit or `.`. A second colon lands in the weight part and fails the
/// digit class, rejecting the match.
fn split_weight_directive(tag: &str) -> Option<(&str, &str)> {
    let (content, weight) = tag.split_once(':')?;
    if content.is_empty() || !content.chars().all(is_directive_content_char) {
        return None;
    }
    if !weight.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    Some((content, weight))
}

fn is_directive_content_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ' ')
}
