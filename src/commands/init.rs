use std::time::Duration;

use anyhow::Result;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::core::vault::{expand_path, init_vault, VaultPaths};
use crate::output::Output;

pub fn run(output: &mut dyn Output, path: &str, force: bool) -> Result<VaultPaths> {
    let target = expand_path(path);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.green} {msg}")?);
    spinner.set_message("Creating prompt vault...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let created = init_vault(&target, force);
    spinner.finish_and_clear();
    let vault = created?;

    output.success(&format!(
        "Prompt vault created successfully at: {}",
        vault.root.display().to_string().bold().blue()
    ));
    output.info("");
    output.info("Next steps:");
    output.info("  1. Add your prompts to the 'Prompts' directory");
    output.info("  2. Use 'promptkeep add' to create new prompts");
    output.info("  3. Use 'promptkeep pick' to select and copy prompts");

    Ok(vault)
}
