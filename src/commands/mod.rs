pub mod add;
pub mod edit;
pub mod init;
pub mod pick;
pub mod preview;

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::document::Prompt;
use crate::core::selection::{filter_by_tags, list_candidates};
use crate::core::vault::VaultLocator;
use crate::error::PromptKeepError;
use crate::output::Output;
use crate::tools::{Chooser, Clipboard, Editor};

/// Everything a command needs from the outside world for one invocation.
pub struct Session<'a> {
    pub locator: VaultLocator,
    pub output: &'a mut dyn Output,
    pub editor: &'a dyn Editor,
    pub chooser: &'a dyn Chooser,
    pub clipboard: &'a dyn Clipboard,
}

/// Resolves the vault, narrows its prompts by tag and asks the chooser for one.
/// `Ok(None)` means the user cancelled.
pub(crate) fn select_prompt(
    session: &mut Session<'_>,
    vault: Option<&str>,
    tags: &[String],
) -> Result<Option<PathBuf>> {
    let vault = session.locator.resolve(vault)?;

    let candidates = list_candidates(&vault)?;
    if candidates.is_empty() {
        return Err(PromptKeepError::NoCandidates {
            filtered_by: Vec::new(),
        }
        .into());
    }

    let candidates = filter_by_tags(candidates, tags);
    if candidates.is_empty() {
        return Err(PromptKeepError::NoCandidates {
            filtered_by: tags.to_vec(),
        }
        .into());
    }

    let options: Vec<String> = candidates
        .iter()
        .map(|p| p.to_string_lossy().to_string())
        .collect();
    let preview = |option: &str| match Prompt::load(Path::new(option)) {
        Ok(prompt) => prompt.preview(),
        Err(e) => format!("{:#}", e),
    };

    match session.chooser.choose(&options, &preview)? {
        Some(chosen) => {
            tracing::debug!("selected {}", chosen);
            Ok(Some(PathBuf::from(chosen)))
        }
        None => {
            session.output.info("Selection cancelled.");
            Ok(None)
        }
    }
}
