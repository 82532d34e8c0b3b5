use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

use crate::error::PromptKeepError;

pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<()>;
}

/// Pipes text into the platform clipboard command, trying each known tool in turn.
#[derive(Debug, Clone, Default)]
pub struct SystemClipboard;

type ClipboardTool = (&'static str, &'static [&'static str]);

fn candidates() -> Vec<ClipboardTool> {
    let mut tools: Vec<ClipboardTool> = Vec::new();
    if cfg!(target_os = "macos") {
        tools.push(("pbcopy", &[]));
    } else if cfg!(windows) {
        tools.push(("clip", &[]));
    } else {
        if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            tools.push(("wl-copy", &[]));
        }
        tools.push(("xclip", &["-selection", "clipboard"]));
        tools.push(("xsel", &["--clipboard", "--input"]));
    }
    tools
}

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        let mut last_failure = None;

        for (program, args) in candidates() {
            let mut child = match Command::new(program)
                .args(args)
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .spawn()
            {
                Ok(child) => child,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    tracing::debug!("clipboard tool {} not found", program);
                    continue;
                }
                Err(e) => return Err(e).with_context(|| format!("Failed to start {}", program)),
            };

            if let Some(mut stdin) = child.stdin.take() {
                stdin
                    .write_all(text.as_bytes())
                    .with_context(|| format!("Failed to write to {}", program))?;
            }

            let status = child
                .wait()
                .with_context(|| format!("Failed to wait for {}", program))?;
            if status.success() {
                tracing::debug!("copied {} bytes with {}", text.len(), program);
                return Ok(());
            }
            tracing::warn!("{} exited with {}", program, status);
            last_failure = Some(format!("{} exited with {}", program, status));
        }

        match last_failure {
            Some(failure) => anyhow::bail!("Could not copy to clipboard: {}", failure),
            None => Err(PromptKeepError::ToolMissing {
                tool: "clipboard".to_string(),
                hint: "Install pbcopy, wl-copy, xclip or xsel to enable clipboard copy."
                    .to_string(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_for_platform() {
        let tools = candidates();
        assert!(!tools.is_empty());
        if cfg!(target_os = "linux") {
            assert!(tools.iter().any(|(name, args)| *name == "xclip" && args.contains(&"clipboard")));
        }
    }
}
