use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::Config;
use crate::error::PromptKeepError;

pub const PROMPTS_DIR: &str = "Prompts";
pub const DEFAULT_VAULT: &str = "~/PromptVault";
pub const EXAMPLE_PROMPT_FILE: &str = "example_prompt.md";

pub const EXAMPLE_PROMPT: &str = r#"---
title: "Example Prompt"
description: "A template showing the prompt format"
tags: ["template", "example"]
---

This is an example prompt. The text above the first '---' is YAML front matter that
contains metadata about your prompt. The text below is the actual prompt content.

You can use this template to create your own prompts. Just copy this file and
modify the YAML front matter and prompt content as needed.
"#;

#[derive(Debug, Clone, PartialEq)]
pub struct VaultPaths {
    pub root: PathBuf,
    pub prompts: PathBuf,
}

impl VaultPaths {
    pub fn from_root(root: PathBuf) -> Self {
        Self {
            prompts: root.join(PROMPTS_DIR),
            root,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.root.is_dir() && self.prompts.is_dir()
    }

    fn validate(self) -> Result<Self, PromptKeepError> {
        if !self.root.exists() {
            return Err(PromptKeepError::VaultNotFound(self.root));
        }
        if !self.prompts.is_dir() {
            return Err(PromptKeepError::InvalidVault(self.root));
        }
        Ok(self)
    }
}

/// Expands a leading `~` or `~user` and makes the path absolute against the working directory.
pub fn expand_path(raw: &str) -> PathBuf {
    let expanded = match raw.strip_prefix('~') {
        Some(rest) => expand_home(rest).unwrap_or_else(|| PathBuf::from(raw)),
        None => PathBuf::from(raw),
    };

    if expanded.is_absolute() {
        return expanded;
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(expanded),
        Err(_) => expanded,
    }
}

/// `rest` is what follows `~`. Other users' homes are looked up next to the
/// current user's home directory, the layout of `/home` and `/Users`.
fn expand_home(rest: &str) -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    let split = rest.find(['/', '\\']).unwrap_or(rest.len());
    let (user, tail) = rest.split_at(split);
    let tail = tail.trim_start_matches(['/', '\\']);

    if user.is_empty() {
        return Some(home.join(tail));
    }

    let user_home = home.parent()?.join(user);
    if user_home.is_dir() {
        Some(user_home.join(tail))
    } else {
        tracing::debug!("no home directory found for ~{}", user);
        None
    }
}

/// Decides which directory is the vault: explicit flag, then environment, then default.
#[derive(Debug, Clone)]
pub struct VaultLocator {
    pub env_override: Option<String>,
    pub default_path: PathBuf,
}

impl VaultLocator {
    pub fn new(env_override: Option<String>, default_path: PathBuf) -> Self {
        Self {
            env_override,
            default_path,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.vault_override.clone(), expand_path(DEFAULT_VAULT))
    }

    pub fn resolve(&self, explicit: Option<&str>) -> Result<VaultPaths, PromptKeepError> {
        if let Some(raw) = explicit {
            let vault = VaultPaths::from_root(expand_path(raw));
            tracing::debug!("using vault from --vault: {}", vault.root.display());
            return vault.validate();
        }

        if let Some(raw) = self.env_override.as_deref().filter(|s| !s.trim().is_empty()) {
            let vault = VaultPaths::from_root(expand_path(raw));
            if vault.is_valid() {
                tracing::debug!("using vault from environment: {}", vault.root.display());
                return Ok(vault);
            }
            tracing::warn!(
                "ignoring environment vault {}: not a prompt vault",
                vault.root.display()
            );
        }

        let vault = VaultPaths::from_root(self.default_path.clone());
        if vault.is_valid() {
            tracing::debug!("using default vault: {}", vault.root.display());
            Ok(vault)
        } else {
            Err(PromptKeepError::VaultNotFound(vault.root))
        }
    }
}

/// Creates a vault with its `Prompts` directory and the example prompt.
/// With `force`, anything already at `target` is removed first.
pub fn init_vault(target: &Path, force: bool) -> Result<VaultPaths> {
    if target.exists() {
        if !force {
            return Err(PromptKeepError::AlreadyExists(target.to_path_buf()).into());
        }
        tracing::debug!("removing existing {}", target.display());
        if target.is_dir() {
            fs::remove_dir_all(target)
        } else {
            fs::remove_file(target)
        }
        .with_context(|| format!("Failed to remove {}", target.display()))?;
    }

    let vault = VaultPaths::from_root(target.to_path_buf());
    fs::create_dir_all(&vault.prompts)
        .with_context(|| format!("Failed to create {}", vault.prompts.display()))?;

    let example = vault.prompts.join(EXAMPLE_PROMPT_FILE);
    fs::write(&example, EXAMPLE_PROMPT)
        .with_context(|| format!("Failed to write {}", example.display()))?;

    Ok(vault)
}
