//! Host-facing input limits.
//!
//! The normalization pipeline itself is total and never consults these;
//! they are the boundary checks a host runs on inbound payloads before
//! handing prompts to the pipeline.

use crate::error::CoreError;

/// Maximum length for a single prompt in characters.
pub const MAX_PROMPT_LENGTH: usize = 10_000;

/// Maximum number of prompts in a single batch request.
pub const MAX_BATCH_SIZE: usize = 100;

/// Validate a prompt: length check only (empty is allowed).
pub fn validate_prompt(text: &str) -> Result<(), CoreError> {
    if text.len() > MAX_PROMPT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Prompt exceeds maximum length of {MAX_PROMPT_LENGTH} characters (got {})",
            text.len()
        )));
    }
    Ok(())
}

/// Validate a batch: size cap plus per-element length caps.
pub fn validate_batch(prompts: &[String]) -> Result<(), CoreError> {
    if prompts.len() > MAX_BATCH_SIZE {
        return Err(CoreError::Validation(format!(
            "Batch size exceeds maximum of {MAX_BATCH_SIZE} prompts (got {})",
            prompts.len()
        )));
    }
    for prompt in prompts {
        validate_prompt(prompt)?;
    }
    Ok(())
}
