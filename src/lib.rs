//! promptkeep library
//!
//! Keeps a vault of AI prompts as Markdown files with front matter.
//!
//! # Modules
//!
//! - `core`: document format, tag extraction, vault layout and selection
//! - `tools`: editor, chooser and clipboard collaborators
//! - `commands`: `init`, `add`, `pick`, `edit` and the chooser preview

pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod tools;

// Re-exports for convenience
pub use crate::config::{Config, PickerKind};
pub use crate::core::document::{extract_body, render, Prompt, PromptMeta};
pub use crate::core::sanitize::sanitize_filename;
pub use crate::core::selection::{filter_by_tags, list_candidates};
pub use crate::core::tags::extract_tags;
pub use crate::core::vault::{init_vault, VaultLocator, VaultPaths};
pub use crate::error::PromptKeepError;
