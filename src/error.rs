use std::path::PathBuf;

use colored::Colorize;
use thiserror::Error;

use crate::output::Output;

/// Failures that are reported to the user with guidance rather than as crashes.
#[derive(Debug, Error)]
pub enum PromptKeepError {
    #[error("Directory {0} already exists")]
    AlreadyExists(PathBuf),

    #[error("No vault found at {0}")]
    VaultNotFound(PathBuf),

    #[error("Prompts directory not found in {0}")]
    InvalidVault(PathBuf),

    #[error("{}", no_candidates_message(.filtered_by))]
    NoCandidates { filtered_by: Vec<String> },

    #[error("'{tool}' is not installed or not on PATH")]
    ToolMissing { tool: String, hint: String },

    #[error("Editor '{editor}' failed while editing {path}")]
    EditorFailed { editor: String, path: PathBuf },
}

fn no_candidates_message(filtered_by: &[String]) -> String {
    if filtered_by.is_empty() {
        "No prompts found in the vault".to_string()
    } else {
        format!("No prompts found with tags: {}", filtered_by.join(", "))
    }
}

impl PromptKeepError {
    /// Follow-up advice shown under the error message.
    pub fn hint(&self) -> String {
        match self {
            Self::AlreadyExists(_) => "Use --force to overwrite existing directory.".to_string(),
            Self::VaultNotFound(_) => {
                "Use 'promptkeep init' to create a vault or specify a vault path with --vault."
                    .to_string()
            }
            Self::InvalidVault(_) => "Make sure this is a valid prompt vault.".to_string(),
            Self::NoCandidates { filtered_by } if filtered_by.is_empty() => {
                "Use 'promptkeep add' to create your first prompt.".to_string()
            }
            Self::NoCandidates { .. } => "Try fewer or different --tag filters.".to_string(),
            Self::ToolMissing { hint, .. } => hint.clone(),
            Self::EditorFailed { .. } => {
                "Set the EDITOR environment variable to your preferred editor.".to_string()
            }
        }
    }

    /// Missing candidates are a warning condition rather than a failure.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::NoCandidates { .. })
    }
}

/// Prints a failed command's error with its hint and returns the process exit code.
pub fn report(output: &mut dyn Output, err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<PromptKeepError>() {
        Some(known) => {
            if known.is_warning() {
                output.warn(&known.to_string());
            } else {
                output.error(&format!("Error: {}", known));
            }
            output.info(&known.hint().dimmed().to_string());
        }
        None => output.error(&format!("Error: {:#}", err)),
    }
    1
}
