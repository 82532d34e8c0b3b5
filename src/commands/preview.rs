use std::path::Path;

use anyhow::Result;

use crate::core::document::Prompt;
use crate::output::Output;

/// Prints the chooser preview for one prompt file. Called back by `fzf`.
pub fn run(output: &mut dyn Output, path: &Path) -> Result<()> {
    let prompt = Prompt::load(path)?;
    output.info(prompt.preview().trim_end());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::MemoryOutput;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_preview_prints_title_and_body() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("p.md");
        fs::write(&path, "---\ntitle: \"Greeting\"\ntags: [\"hi\"]\n---\nSay hello.\n").unwrap();

        let mut out = MemoryOutput::new();
        run(&mut out, &path).unwrap();
        assert_eq!(out.messages.len(), 1);
        assert!(out.messages[0].1.starts_with("Title: Greeting\nTags: hi\n"));
        assert!(out.messages[0].1.ends_with("Say hello."));
    }

    #[test]
    fn test_preview_missing_file() {
        let mut out = MemoryOutput::new();
        assert!(run(&mut out, Path::new("/definitely/not/here.md")).is_err());
    }
}
