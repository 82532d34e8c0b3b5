use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};

use crate::error::PromptKeepError;

pub trait Editor {
    /// Blocks until the editor exits. `Ok(false)` means it exited unsuccessfully.
    fn open(&self, path: &Path) -> Result<bool>;

    /// Command shown in messages.
    fn name(&self) -> &str;
}

/// Runs the configured editor command (`$EDITOR`), which may carry arguments.
#[derive(Debug, Clone)]
pub struct CommandEditor {
    command: String,
}

impl CommandEditor {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Editor for CommandEditor {
    fn open(&self, path: &Path) -> Result<bool> {
        let mut parts = self.command.split_whitespace();
        let program = parts.next().ok_or_else(|| missing(&self.command))?;

        tracing::debug!("running editor {} on {}", self.command, path.display());
        let status = match Command::new(program).args(parts).arg(path).status() {
            Ok(status) => status,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(missing(program).into()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to start editor '{}'", program))
            }
        };

        if !status.success() {
            tracing::warn!("editor exited with {}", status);
        }
        Ok(status.success())
    }

    fn name(&self) -> &str {
        &self.command
    }
}

fn missing(tool: &str) -> PromptKeepError {
    PromptKeepError::ToolMissing {
        tool: tool.to_string(),
        hint: "Set the EDITOR environment variable to your preferred editor.".to_string(),
    }
}
