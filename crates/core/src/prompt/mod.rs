//! Prompt normalization pipeline.
//!
//! Takes one free-form comma-separated prompt string and produces a
//! canonical, re-parseable version: tags split at top-level separators,
//! underscores spaced, weight directives parenthesized, brackets escaped
//! or stripped, and spacing normalized. The pipeline is total: any input,
//! including empty or malformed strings, yields a deterministic output
//! and nothing ever errors.

pub mod brackets;
pub mod splitter;
pub mod tag;
pub mod whitespace;

use serde::{Deserialize, Serialize};

/// Canonical separator between normalized tags.
pub const TAG_SEPARATOR: &str = ", ";

/// Options controlling the normalization pipeline.
///
/// Deserializable from host settings JSON; absent fields take their
/// defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    /// Run the whitespace cleanup post-pass on the joined output.
    pub cleanup_whitespace: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            cleanup_whitespace: true,
        }
    }
}

/// Normalize one prompt string with default options.
pub fn normalize_prompt(prompt: &str) -> String {
    normalize_prompt_with(prompt, &NormalizeOptions::default())
}

/// Normalize one prompt string.
///
/// Splits at top-level separators, trims each segment, drops empty
/// segments, rewrites each tag, and rejoins with [`TAG_SEPARATOR`].
pub fn normalize_prompt_with(prompt: &str, options: &NormalizeOptions) -> String {
    let tags: Vec<String> = splitter::split_tags(prompt)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(tag::normalize_tag)
        .collect();

    let joined = tags.join(TAG_SEPARATOR);
    let output = if options.cleanup_whitespace {
        whitespace::cleanup(&joined)
    } else {
        joined
    };

    tracing::trace!(
        tag_count = tags.len(),
        input_len = prompt.len(),
        output_len = output.len(),
        "normalized prompt",
    );
    output
}

/// Normalize a batch of prompts element-wise with default options.
pub fn normalize_prompts<I, S>(prompts: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    prompts
        .into_iter()
        .map(|p| normalize_prompt(p.as_ref()))
        .collect()
}
