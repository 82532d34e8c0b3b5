use std::io::{ErrorKind, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};
use dialoguer::{theme::ColorfulTheme, FuzzySelect};

use crate::error::PromptKeepError;

/// Picks one of the given options, or `None` when the user backs out.
pub trait Chooser {
    fn choose(&self, options: &[String], preview: &dyn Fn(&str) -> String)
        -> Result<Option<String>>;
}

const FZF: &str = "fzf";

/// Delegates to `fzf`. Previews are produced by a shell command (normally
/// `promptkeep preview {}`) because fzf renders them in its own process.
#[derive(Debug, Clone, Default)]
pub struct FzfChooser {
    preview_command: Option<String>,
}

impl FzfChooser {
    pub fn new(preview_command: Option<String>) -> Self {
        Self { preview_command }
    }

    /// Preview command that calls back into the given executable.
    pub fn preview_via(exe: &Path) -> String {
        format!("{} preview {{}}", shell_quote(&exe.to_string_lossy()))
    }
}

impl Chooser for FzfChooser {
    fn choose(
        &self,
        options: &[String],
        _preview: &dyn Fn(&str) -> String,
    ) -> Result<Option<String>> {
        let mut cmd = Command::new(FZF);
        cmd.arg("--prompt=Select a prompt> ")
            .arg("--height=80%")
            .arg("--layout=reverse");
        if let Some(preview) = &self.preview_command {
            cmd.arg("--preview").arg(preview);
            cmd.arg("--preview-window=right:60%:wrap");
        }

        let mut child = match cmd.stdin(Stdio::piped()).stdout(Stdio::piped()).spawn() {
            Ok(child) => child,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(PromptKeepError::ToolMissing {
                    tool: FZF.to_string(),
                    hint: "Install fzf (https://github.com/junegunn/fzf) or set PROMPTKEEP_PICKER=builtin."
                        .to_string(),
                }
                .into())
            }
            Err(e) => return Err(e).context("Failed to start fzf"),
        };

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(options.join("\n").as_bytes())
                .context("Failed to send options to fzf")?;
        }

        let output = child.wait_with_output().context("Failed to wait for fzf")?;
        match output.status.code() {
            Some(0) => {
                let selected = String::from_utf8_lossy(&output.stdout).trim().to_string();
                Ok(if selected.is_empty() { None } else { Some(selected) })
            }
            // 1: no match, 130: interrupted with Ctrl-C or Esc
            Some(1) | Some(130) => Ok(None),
            _ => bail!("fzf exited with {}", output.status),
        }
    }
}

/// In-terminal fuzzy list; labels are the first preview line of each option.
#[derive(Debug, Clone, Default)]
pub struct BuiltinChooser;

impl Chooser for BuiltinChooser {
    fn choose(
        &self,
        options: &[String],
        preview: &dyn Fn(&str) -> String,
    ) -> Result<Option<String>> {
        let labels: Vec<String> = options.iter().map(|o| label_for(o, preview)).collect();

        let picked = FuzzySelect::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a prompt")
            .items(&labels)
            .default(0)
            .interact_opt()?;

        Ok(picked.and_then(|i| options.get(i).cloned()))
    }
}

fn label_for(option: &str, preview: &dyn Fn(&str) -> String) -> String {
    let text = preview(option);
    let headline = text.lines().next().unwrap_or("").trim();
    let file = Path::new(option)
        .file_name()
        .map(|f| f.to_string_lossy().to_string())
        .unwrap_or_else(|| option.to_string());

    if headline.is_empty() {
        file
    } else {
        format!("{}  ({})", headline.trim_start_matches("Title: "), file)
    }
}

fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
