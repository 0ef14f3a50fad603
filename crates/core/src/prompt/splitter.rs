//! Top-level tag splitting.
//!
//! Splits a prompt string into comma-separated segments while treating
//! commas nested inside `()`, `[]`, or `{}` as segment content.

/// Split a prompt into its top-level tag segments.
///
/// Separators are the ASCII comma and the full-width comma `，`, but only
/// at bracket-nesting depth zero. The depth counter is floored at zero, so
/// a stray closer never makes a later comma nested. The final accumulated
/// segment is emitted only when non-empty; interior empty segments (from
/// consecutive separators) are emitted and left for the caller to filter.
///
/// An unbalanced opener never errors: depth stays positive for the rest of
/// the scan and comma-splitting is simply suppressed from that point on.
pub fn split_tags(prompt: &str) -> SplitTags<'_> {
    SplitTags {
        input: prompt,
        pos: 0,
        done: false,
    }
}

/// Lazy iterator over top-level tag segments, created by [`split_tags`].
#[derive(Debug, Clone)]
pub struct SplitTags<'a> {
    input: &'a str,
    pos: usize,
    done: bool,
}

impl<'a> Iterator for SplitTags<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.done {
            return None;
        }

        let rest = &self.input[self.pos..];
        let mut depth: usize = 0;
        for (i, c) in rest.char_indices() {
            match c {
                '(' | '[' | '{' => depth += 1,
                ')' | ']' | '}' => depth = depth.saturating_sub(1),
                ',' | '，' if depth == 0 => {
                    let segment = &rest[..i];
                    self.pos += i + c.len_utf8();
                    return Some(segment);
                }
                _ => {}
            }
        }

        self.done = true;
        if rest.is_empty() {
            None
        } else {
            Some(rest)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(prompt: &str) -> Vec<&str> {
        split_tags(prompt).collect()
    }

    #[test]
    fn splits_on_ascii_comma() {
        assert_eq!(collect("a, b,c"), vec!["a", " b", "c"]);
    }

    #[test]
    fn splits_on_fullwidth_comma() {
        assert_eq!(collect("a，b"), vec!["a", "b"]);
    }

    #[test]
    fn nested_comma_does_not_split() {
        assert_eq!(collect("a(b,c), d"), vec!["a(b,c)", " d"]);
    }

    #[test]
    fn square_and_curly_brackets_suppress_splitting() {
        assert_eq!(collect("[a,b], {c,d}, e"), vec!["[a,b]", " {c,d}", " e"]);
    }

    #[test]
    fn mixed_bracket_nesting() {
        assert_eq!(collect("a([b,{c,d}],e), f"), vec!["a([b,{c,d}],e)", " f"]);
    }

    #[test]
    fn empty_prompt_yields_nothing() {
        assert_eq!(collect(""), Vec::<&str>::new());
    }

    #[test]
    fn trailing_comma_drops_final_empty_segment() {
        assert_eq!(collect("a,"), vec!["a"]);
    }

    #[test]
    fn interior_empty_segments_are_emitted() {
        assert_eq!(collect("a,,b"), vec!["a", "", "b"]);
    }

    #[test]
    fn leading_comma_emits_empty_first_segment() {
        assert_eq!(collect(",a"), vec!["", "a"]);
    }

    #[test]
    fn unbalanced_open_suppresses_remaining_splits() {
        assert_eq!(collect("a(b, c, d"), vec!["a(b, c, d"]);
    }

    #[test]
    fn stray_closer_does_not_underflow_depth() {
        // Depth is floored at zero, so the comma after `)` still splits.
        assert_eq!(collect("a), b"), vec!["a)", " b"]);
    }

    #[test]
    fn every_non_separator_character_is_kept() {
        let input = "x(1,2), y[3,4], z";
        let rejoined: String = collect(input).join(",");
        assert_eq!(rejoined, "x(1,2), y[3,4], z");
    }
}
