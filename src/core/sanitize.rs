use lazy_static::lazy_static;
use regex::Regex;

pub const MAX_FILENAME_CHARS: usize = 100;

lazy_static! {
    static ref INVALID_CHARS_RE: Regex = Regex::new(r#"[<>:"/\\|?* ]"#).unwrap();
    static ref HYPHEN_RUN_RE: Regex = Regex::new(r"-{2,}").unwrap();
}

/// Turns a prompt title into a filename fragment.
///
/// Lowercases, maps `< > : " / \ | ? *` and spaces to hyphens, collapses hyphen runs,
/// trims hyphens from both ends and keeps at most [`MAX_FILENAME_CHARS`] characters.
pub fn sanitize_filename(title: &str) -> String {
    let lowered = title.to_lowercase();
    let replaced = INVALID_CHARS_RE.replace_all(&lowered, "-");
    let collapsed = HYPHEN_RUN_RE.replace_all(&replaced, "-");
    let trimmed = collapsed.trim_matches('-');

    if trimmed.chars().count() <= MAX_FILENAME_CHARS {
        return trimmed.to_string();
    }

    // Cutting may expose a hyphen at the end; trim again so the result is stable.
    let cut: String = trimmed.chars().take(MAX_FILENAME_CHARS).collect();
    cut.trim_end_matches('-').to_string()
}
