use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use super::document::EXTENSION;
use super::tags::{extract_tags, has_all_tags};
use super::vault::VaultPaths;

/// Every prompt file directly under the vault's `Prompts` directory, sorted by path.
pub fn list_candidates(vault: &VaultPaths) -> Result<Vec<PathBuf>> {
    // Only the file name is a pattern; the directory may contain glob metacharacters.
    let dir = glob::Pattern::escape(&vault.prompts.to_string_lossy());
    let pattern = format!("{}{}*.{}", dir, std::path::MAIN_SEPARATOR, EXTENSION);

    let mut paths: Vec<PathBuf> = glob::glob(&pattern)
        .with_context(|| format!("Invalid prompt pattern {}", pattern))?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!("skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|path| path.is_file())
        .collect();

    paths.sort();
    tracing::debug!("found {} prompts in {}", paths.len(), vault.prompts.display());
    Ok(paths)
}

/// Keeps documents carrying every required tag. An empty requirement keeps everything.
pub fn filter_by_tags(paths: Vec<PathBuf>, required: &[String]) -> Vec<PathBuf> {
    if required.is_empty() {
        return paths;
    }

    let kept: Vec<PathBuf> = paths
        .into_iter()
        .filter(|path| match fs::read_to_string(path) {
            Ok(content) => has_all_tags(&extract_tags(&content), required),
            Err(e) => {
                tracing::warn!("skipping {}: {}", path.display(), e);
                false
            }
        })
        .collect();

    tracing::debug!("{} prompts match tags {:?}", kept.len(), required);
    kept
}
