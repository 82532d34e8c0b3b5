use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;

use super::{select_prompt, Session};
use crate::core::document::{touch_last_used, Prompt};

/// Copies the chosen prompt's body to the clipboard and stamps `last_used`.
pub fn run(
    session: &mut Session<'_>,
    vault: Option<&str>,
    tags: &[String],
) -> Result<Option<PathBuf>> {
    let Some(path) = select_prompt(session, vault, tags)? else {
        return Ok(None);
    };

    let prompt = Prompt::load(&path)?;
    let body = prompt.body();
    session.clipboard.copy(&body)?;

    if body.is_empty() {
        session.output.warn(&format!("'{}' has an empty body.", prompt.title()));
    }
    session
        .output
        .success(&format!("Copied '{}' to clipboard.", prompt.title()));

    // Best effort: a failed timestamp write does not undo the copy.
    if let Some(updated) = touch_last_used(&prompt.content, Local::now().naive_local()) {
        if let Err(e) = fs::write(&path, updated) {
            tracing::warn!("could not update last_used in {}: {}", path.display(), e);
        }
    }

    Ok(Some(path))
}
