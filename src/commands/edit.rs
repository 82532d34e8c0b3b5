use std::path::PathBuf;

use anyhow::Result;

use super::{select_prompt, Session};
use crate::error::PromptKeepError;

/// Opens the chosen prompt in the editor. Metadata is left as the user saves it.
pub fn run(
    session: &mut Session<'_>,
    vault: Option<&str>,
    tags: &[String],
) -> Result<Option<PathBuf>> {
    let Some(path) = select_prompt(session, vault, tags)? else {
        return Ok(None);
    };

    if !session.editor.open(&path)? {
        return Err(PromptKeepError::EditorFailed {
            editor: session.editor.name().to_string(),
            path,
        }
        .into());
    }

    session
        .output
        .success(&format!("Prompt updated: {}", path.display()));
    Ok(Some(path))
}
