use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::Deserialize;

use super::tags::extract_tags;

pub const DELIMITER: &str = "---";
pub const EXTENSION: &str = "md";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Scalar metadata fields. Tags are read separately by [`extract_tags`] because
/// hand-written documents use list encodings YAML would not always accept.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct PromptMeta {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub last_used: Option<String>,
}

impl PromptMeta {
    /// Parses the metadata block. Malformed YAML yields empty metadata.
    pub fn parse(content: &str) -> Self {
        let Some(block) = split_document(content).0 else {
            return Self::default();
        };
        match serde_yaml::from_str::<Option<Self>>(block) {
            Ok(meta) => meta.unwrap_or_default(),
            Err(e) => {
                tracing::debug!("unreadable metadata block: {}", e);
                Self::default()
            }
        }
    }
}

/// Splits raw content into (metadata block, remainder) on the first two delimiters.
/// Without two delimiters there is no metadata and the whole content is the remainder.
pub fn split_document(content: &str) -> (Option<&str>, &str) {
    let mut parts = content.splitn(3, DELIMITER);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(meta), Some(body)) => (Some(meta), body),
        _ => (None, content),
    }
}

/// Returns the prompt text with the metadata block removed, trimmed.
pub fn extract_body(content: &str) -> String {
    split_document(content).1.trim().to_string()
}

/// Produces a new document with metadata and an empty body ready for editing.
pub fn render(
    title: &str,
    description: &str,
    tags: &[String],
    created: Option<NaiveDateTime>,
) -> String {
    let tag_list = tags
        .iter()
        .map(|t| quote(t))
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = String::new();
    out.push_str(DELIMITER);
    out.push('\n');
    out.push_str(&format!("title: {}\n", quote(title)));
    out.push_str(&format!("description: {}\n", quote(description)));
    out.push_str(&format!("tags: [{}]\n", tag_list));
    if let Some(created) = created {
        out.push_str(&format!(
            "created: {}\n",
            quote(&created.format(TIMESTAMP_FORMAT).to_string())
        ));
    }
    out.push_str(DELIMITER);
    out.push_str("\n\n");
    out
}

/// Double-quoted YAML scalar. Hyphen pairs become `-\x2d` so no `---` run,
/// which would end the metadata block, can appear inside a value.
fn quote(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace("--", "-\\x2d");
    format!("\"{}\"", escaped)
}

/// Sets `last_used` inside the metadata block, replacing an existing entry or
/// adding one just before the closing delimiter. Returns `None` when the
/// document has no metadata block.
pub fn touch_last_used(content: &str, when: NaiveDateTime) -> Option<String> {
    let mut lines: Vec<String> = content.split_inclusive('\n').map(str::to_string).collect();

    let mut delimiters = lines
        .iter()
        .enumerate()
        .filter(|(_, l)| l.trim() == DELIMITER)
        .map(|(i, _)| i);
    let open = delimiters.next()?;
    let close = delimiters.next()?;

    let entry = format!(
        "last_used: {}\n",
        quote(&when.format(TIMESTAMP_FORMAT).to_string())
    );

    match (open + 1..close).find(|&i| lines[i].trim_start().starts_with("last_used:")) {
        Some(i) => lines[i] = entry,
        None => lines.insert(close, entry),
    }

    Some(lines.concat())
}

/// A prompt file loaded from the vault.
#[derive(Debug, Clone)]
pub struct Prompt {
    pub path: PathBuf,
    pub name: String,
    pub content: String,
    pub meta: PromptMeta,
    pub tags: Vec<String>,
}

impl Prompt {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read prompt {}", path.display()))?;
        Ok(Self::from_content(path, content))
    }

    pub fn from_content(path: &Path, content: String) -> Self {
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_string();

        Self {
            path: path.to_path_buf(),
            name,
            meta: PromptMeta::parse(&content),
            tags: extract_tags(&content),
            content,
        }
    }

    pub fn body(&self) -> String {
        extract_body(&self.content)
    }

    /// Title from metadata, falling back to the file name.
    pub fn title(&self) -> &str {
        if self.meta.title.is_empty() {
            &self.name
        } else {
            &self.meta.title
        }
    }

    /// Human-readable summary shown next to the chooser.
    pub fn preview(&self) -> String {
        let mut out = format!("Title: {}\n", self.title());
        if self.tags.is_empty() {
            out.push_str("Tags: (none)\n");
        } else {
            out.push_str(&format!("Tags: {}\n", self.tags.join(", ")));
        }
        if !self.meta.description.is_empty() {
            out.push_str(&format!("Description: {}\n", self.meta.description));
        }
        if let Some(last_used) = &self.meta.last_used {
            out.push_str(&format!("Last used: {}\n", last_used));
        }
        out.push('\n');
        out.push_str(&self.body());
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_render_layout() {
        let doc = render("API Docs", "Docs helper", &tags(&["coding", "docs"]), None);
        assert_eq!(
            doc,
            "---\ntitle: \"API Docs\"\ndescription: \"Docs helper\"\ntags: [\"coding\", \"docs\"]\n---\n\n"
        );
    }

    #[test]
    fn test_render_has_empty_body() {
        let doc = render("T", "D", &tags(&["a"]), Some(at(9, 30, 0)));
        assert_eq!(extract_body(&doc), "");
        assert!(doc.contains("created: \"2026-10-19 09:30:00\"\n"));
    }

    #[test]
    fn test_appended_body_is_extracted() {
        let doc = render("T", "D", &tags(&["a", "b"]), None);
        let full = format!("{}  Summarise this text.\n\nThanks.\n", doc);
        assert_eq!(extract_body(&full), "Summarise this text.\n\nThanks.");
    }

    #[test]
    fn test_render_tags_roundtrip() {
        let list = tags(&["b", "a", "b", "with space"]);
        let doc = render("T", "D", &list, None);
        assert_eq!(extract_tags(&doc), list);
        assert!(extract_tags(&render("T", "D", &[], None)).is_empty());
    }

    #[test]
    fn test_render_values_with_delimiter_runs() {
        let list = tags(&["a---b", "--", "x----y"]);
        let doc = render("Pros --- cons", "----- rule", &list, Some(at(8, 0, 0)));

        assert_eq!(extract_body(&doc), "");
        assert_eq!(doc.matches(DELIMITER).count(), 2);

        let meta = PromptMeta::parse(&doc);
        assert_eq!(meta.title, "Pros --- cons");
        assert_eq!(meta.description, "----- rule");
        assert_eq!(extract_tags(&doc), list);

        let full = format!("{}Real body\n", doc);
        assert_eq!(extract_body(&full), "Real body");
    }

    #[test]
    fn test_render_escapes_quotes_in_tags() {
        let list = tags(&["say \"hi\"", r"c\q", "multi\nline"]);
        let doc = render("API Docs", "Docs helper", &list, None);

        let meta = PromptMeta::parse(&doc);
        assert_eq!(meta.title, "API Docs");
        assert_eq!(meta.description, "Docs helper");
        assert_eq!(extract_tags(&doc), list);
        assert_eq!(extract_body(&doc), "");
    }

    #[test]
    fn test_extract_body_without_metadata() {
        assert_eq!(extract_body("  plain prompt \n"), "plain prompt");
        assert_eq!(extract_body("--- only one\nbody"), "--- only one\nbody");
        assert_eq!(extract_body(""), "");
    }

    #[test]
    fn test_body_may_contain_delimiter() {
        let content = "---\ntitle: \"x\"\n---\nabove\n---\nbelow";
        assert_eq!(extract_body(content), "above\n---\nbelow");
    }

    #[test]
    fn test_meta_parse() {
        let doc = render("Quote \"me\"", "Back\\slash", &tags(&["a"]), Some(at(1, 2, 3)));
        let meta = PromptMeta::parse(&doc);
        assert_eq!(meta.title, "Quote \"me\"");
        assert_eq!(meta.description, "Back\\slash");
        assert_eq!(meta.created.as_deref(), Some("2026-10-19 01:02:03"));
        assert_eq!(meta.last_used, None);
    }

    #[test]
    fn test_meta_parse_is_total() {
        assert_eq!(PromptMeta::parse("no metadata"), PromptMeta::default());
        assert_eq!(PromptMeta::parse("---\n: : [\n---\nbody"), PromptMeta::default());
        assert_eq!(PromptMeta::parse("---\n---\nbody"), PromptMeta::default());
    }

    #[test]
    fn test_touch_last_used_inserts_then_replaces() {
        let doc = format!("{}Body text\n", render("T", "D", &tags(&["a"]), None));

        let first = touch_last_used(&doc, at(10, 0, 0)).unwrap();
        assert!(first.contains("last_used: \"2026-10-19 10:00:00\"\n---\n"));
        assert_eq!(extract_body(&first), "Body text");
        assert_eq!(extract_tags(&first), vec!["a"]);

        let second = touch_last_used(&first, at(11, 0, 0)).unwrap();
        assert!(second.contains("last_used: \"2026-10-19 11:00:00\""));
        assert!(!second.contains("10:00:00"));
        assert_eq!(second.matches("last_used:").count(), 1);
        assert_eq!(
            PromptMeta::parse(&second).last_used.as_deref(),
            Some("2026-10-19 11:00:00")
        );
    }

    #[test]
    fn test_touch_last_used_without_metadata() {
        assert!(touch_last_used("just a body", at(1, 0, 0)).is_none());
    }

    #[test]
    fn test_prompt_preview() {
        let content = format!(
            "{}Write a haiku.\n",
            render("Poem", "Short verse", &tags(&["fun", "writing"]), None)
        );
        let prompt = Prompt::from_content(Path::new("/v/Prompts/poem_1.md"), content);
        assert_eq!(prompt.name, "poem_1");
        assert_eq!(prompt.title(), "Poem");

        let preview = prompt.preview();
        assert!(preview.starts_with("Title: Poem\nTags: fun, writing\nDescription: Short verse\n"));
        assert!(preview.ends_with("Write a haiku.\n"));
    }

    #[test]
    fn test_prompt_title_falls_back_to_name() {
        let prompt = Prompt::from_content(Path::new("notes.md"), "loose text".to_string());
        assert_eq!(prompt.title(), "notes");
        assert!(prompt.preview().contains("Tags: (none)"));
        assert_eq!(prompt.body(), "loose text");
    }
}
