use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};

use super::Session;
use crate::core::document::{extract_body, render, EXTENSION};
use crate::core::sanitize::sanitize_filename;
use crate::error::PromptKeepError;

const FILENAME_TIME_FORMAT: &str = "%Y%m%d_%H%M%S";

#[derive(Debug, Clone, Default)]
pub struct AddRequest {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub vault: Option<String>,
}

/// `<sanitized-title>_<timestamp>.md`
pub fn prompt_filename(title: &str, created: NaiveDateTime) -> String {
    let stem = sanitize_filename(title);
    let stem = if stem.is_empty() { "untitled" } else { &stem };
    format!("{}_{}.{}", stem, created.format(FILENAME_TIME_FORMAT), EXTENSION)
}

pub fn run(session: &mut Session<'_>, request: &AddRequest) -> Result<PathBuf> {
    let vault = session.locator.resolve(request.vault.as_deref())?;

    let created = Local::now().naive_local();
    let path = vault.prompts.join(prompt_filename(&request.title, created));

    let document = render(&request.title, &request.description, &request.tags, Some(created));
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    file.write_all(document.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    drop(file);
    tracing::debug!("created {}", path.display());

    let edited = match session.editor.open(&path) {
        Ok(edited) => edited,
        Err(e) => {
            discard(&path);
            return Err(e);
        }
    };
    if !edited {
        discard(&path);
        return Err(PromptKeepError::EditorFailed {
            editor: session.editor.name().to_string(),
            path,
        }
        .into());
    }

    let saved = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {} after editing", path.display()))?;
    if extract_body(&saved).is_empty() {
        session
            .output
            .warn("The prompt was saved with an empty body. Use 'promptkeep edit' to fill it in.");
    }
    session
        .output
        .success(&format!("Prompt created: {}", path.display()));

    Ok(path)
}

fn discard(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        tracing::warn!("could not remove {}: {}", path.display(), e);
    }
}
