//! Bracket span classification, escaping, and repair.
//!
//! The escape pass walks one tag left to right, finds each balanced
//! `(...)` span, and decides from its surroundings whether the span is a
//! weight wrapper to keep, a parenthetical qualifier to escape, a missing
//! comma to recover, or a redundant wrap to strip. The repair utilities
//! below it handle unbalanced parentheses, which the escape pass
//! deliberately leaves alone.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Escape pass
// ---------------------------------------------------------------------------

/// Rewrite the balanced parenthesis spans of one tag.
///
/// Four cases, decided per span:
///
/// - non-whitespace before the `(` and the content holds `:` or `,`: two
///   tags accidentally joined; a `, ` separator is emitted and the span is
///   kept in literal parentheses.
/// - non-whitespace before the `(`, content holds neither: the
///   `name(series)` idiom; exactly one space is ensured before the span
///   and its parentheses are escaped to `\(`...`\)`.
/// - span opens the tag and the content holds `:`: an already-canonical
///   weight wrapper, emitted unchanged.
/// - span opens the tag, no `:`: a redundant wrap; the parentheses are
///   stripped and only the inner content is emitted. Stripping does not
///   recurse: for `(a(b))` the outer pair goes and `a(b)` is emitted
///   verbatim.
///
/// An unmatched `(` is emitted literally and the scan moves on by one
/// character. A backslash is copied together with the character it
/// escapes, so `\(`/`\)` never open or close a span. Every input produces
/// a string; there is no failure path.
pub fn escape_tag(tag: &str) -> String {
    let chars: Vec<char> = tag.chars().collect();
    let mut out = String::with_capacity(tag.len() + 8);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '\\' {
            out.push(c);
            if let Some(&escaped) = chars.get(i + 1) {
                out.push(escaped);
            }
            i += 2;
            continue;
        }

        if c == '(' {
            if let Some(close) = matching_close(&chars, i) {
                let content: String = chars[i + 1..close].iter().collect();
                let word_before = chars[..i].iter().any(|ch| !ch.is_whitespace());
                emit_span(&mut out, &content, word_before, i, &chars);
                i = close + 1;
                continue;
            }
            // Unbalanced: keep the literal `(` and move on.
            out.push('(');
            i += 1;
            continue;
        }

        out.push(c);
        i += 1;
    }

    out
}

/// Emit one balanced span according to its classification.
fn emit_span(out: &mut String, content: &str, word_before: bool, open: usize, chars: &[char]) {
    let has_colon = content.contains(':');
    let has_comma = content.contains(',');

    if word_before {
        if has_colon || has_comma {
            // Missing-comma recovery: split into two tags, keep literal
            // parentheses on the second.
            out.push_str(", (");
            out.push_str(content);
            out.push(')');
        } else {
            // name(series) idiom: one space, then escaped parentheses.
            if open > 0 && !chars[open - 1].is_whitespace() {
                out.push(' ');
            }
            out.push_str("\\(");
            out.push_str(content);
            out.push_str("\\)");
        }
    } else if has_colon {
        // Canonical weight wrapper, kept literal.
        out.push('(');
        out.push_str(content);
        out.push(')');
    } else {
        // Redundant wrap: strip.
        out.push_str(content);
    }
}

/// Find the index of the `)` matching the `(` at `open`.
///
/// Tracks nesting depth and skips the character after any backslash.
/// Returns `None` when the span never closes.
fn matching_close(chars: &[char], open: usize) -> Option<usize> {
    let mut depth: usize = 0;
    let mut i = open;
    while i < chars.len() {
        match chars[i] {
            '\\' => {
                i += 2;
                continue;
            }
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

// ---------------------------------------------------------------------------
// Parenthesis repair
// ---------------------------------------------------------------------------

/// Positions of unmatched parentheses, in char indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnmatchedParens {
    /// Indices of `(` characters that never close.
    pub opens: Vec<usize>,
    /// Indices of `)` characters with no matching opener.
    pub closes: Vec<usize>,
}

impl UnmatchedParens {
    pub fn is_balanced(&self) -> bool {
        self.opens.is_empty() && self.closes.is_empty()
    }
}

/// Locate every unmatched parenthesis in `text`.
///
/// Escaped parentheses (`\(`, `\)`) are literals and are never counted.
pub fn unmatched_parens(text: &str) -> UnmatchedParens {
    let chars: Vec<char> = text.chars().collect();
    let mut open_stack: Vec<usize> = Vec::new();
    let mut closes: Vec<usize> = Vec::new();

    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '\\' => {
                i += 2;
                continue;
            }
            '(' => open_stack.push(i),
            ')' => {
                if open_stack.pop().is_none() {
                    closes.push(i);
                }
            }
            _ => {}
        }
        i += 1;
    }

    UnmatchedParens {
        opens: open_stack,
        closes,
    }
}

/// Balance the parentheses of `text`.
///
/// Orphan `)` characters are dropped and one `)` is appended for every
/// `(` that never closes. Balanced input is returned unchanged.
pub fn repair_parens(text: &str) -> String {
    let unmatched = unmatched_parens(text);
    if unmatched.is_balanced() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + unmatched.opens.len());
    for (i, c) in text.chars().enumerate() {
        if unmatched.closes.contains(&i) {
            continue;
        }
        out.push(c);
    }
    for _ in &unmatched.opens {
        out.push(')');
    }
    out
}
