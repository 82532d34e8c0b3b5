use super::document::DELIMITER;

/// Reads the declared tags from a document's metadata block.
///
/// Both inline (`tags: ["a", "b"]`) and block (`- "a"` per line) lists are
/// understood. Order follows the source; duplicates are kept.
pub fn extract_tags(content: &str) -> Vec<String> {
    let mut tags = Vec::new();
    let mut in_metadata = false;

    for line in content.lines() {
        let line = line.trim();

        if line == DELIMITER {
            in_metadata = !in_metadata;
            continue;
        }
        if !in_metadata {
            continue;
        }

        if let Some(value) = line.strip_prefix("tags:") {
            let value = value.trim();
            if value.starts_with('[') {
                let inner = value.trim_start_matches('[').trim_end_matches(']');
                tags.extend(
                    inner
                        .split(',')
                        .map(|t| unquote(t.trim()))
                        .filter(|t| !t.is_empty()),
                );
            }
        } else if let Some(entry) = line.strip_prefix("- ") {
            let tag = unquote(entry.trim());
            if !tag.is_empty() {
                tags.push(tag);
            }
        }
    }

    tags
}

/// Removes one matching pair of surrounding quotes. Double-quoted values also
/// have their backslash escapes decoded.
fn unquote(value: &str) -> String {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        return unescape(&value[1..value.len() - 1]);
    }
    if value.len() >= 2 && value.starts_with('\'') && value.ends_with('\'') {
        return value[1..value.len() - 1].to_string();
    }
    value.to_string()
}

/// Decodes the escapes written by `render`: `\\`, `\"`, `\n`, `\r`, `\t` and `\xHH`.
/// Anything else is kept as written.
fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('x') => {
                let hex: String = chars.clone().take(2).collect();
                let well_formed = hex.len() == 2 && hex.chars().all(|h| h.is_ascii_hexdigit());
                match u8::from_str_radix(&hex, 16) {
                    Ok(byte) if well_formed => {
                        out.push(char::from(byte));
                        chars.nth(1);
                    }
                    _ => out.push_str("\\x"),
                }
            }
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

/// True when every required tag appears verbatim among `tags`.
pub fn has_all_tags(tags: &[String], required: &[String]) -> bool {
    required.iter().all(|r| tags.iter().any(|t| t == r))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_tags() {
        let content = "---\ntitle: \"X\"\ntags: [\"a\", \"b\"]\n---\nbody";
        assert_eq!(extract_tags(content), vec!["a", "b"]);
    }

    #[test]
    fn test_block_tags() {
        let content = "---\ntitle: \"X\"\ntags:\n  - \"a\"\n  - 'b'\n  - c\n---\nbody";
        assert_eq!(extract_tags(content), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_mixed_quotes_and_spacing() {
        let content = "---\ntags: [ 'one',two , \"three\" ]\n---\n";
        assert_eq!(extract_tags(content), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_only_one_quote_layer_removed() {
        let content = "---\ntags: [\"'quoted'\"]\n---\n";
        assert_eq!(extract_tags(content), vec!["'quoted'"]);
    }

    #[test]
    fn test_duplicates_and_order_kept() {
        let content = "---\ntags: [\"z\", \"a\", \"z\"]\n---\n";
        assert_eq!(extract_tags(content), vec!["z", "a", "z"]);
    }

    #[test]
    fn test_lines_outside_metadata_ignored() {
        let content = "---\ntitle: \"X\"\n---\ntags: [\"body\"]\n- not a tag\n";
        assert!(extract_tags(content).is_empty());
    }

    #[test]
    fn test_no_metadata() {
        assert!(extract_tags("just some text\n- item").is_empty());
        assert!(extract_tags("").is_empty());
    }

    #[test]
    fn test_empty_inline_list() {
        assert!(extract_tags("---\ntags: []\n---\n").is_empty());
    }

    #[test]
    fn test_escapes_decoded_in_double_quotes() {
        let content = "---\ntags: [\"say \\\"hi\\\"\", \"c\\\\q\", \"a-\\x2d-b\"]\n---\n";
        assert_eq!(extract_tags(content), vec!["say \"hi\"", "c\\q", "a---b"]);

        let block = "---\ntags:\n  - \"x\\\"y\"\n  - 'raw\\n'\n---\n";
        assert_eq!(extract_tags(block), vec!["x\"y", "raw\\n"]);
    }

    #[test]
    fn test_unescape_keeps_unknown_sequences() {
        assert_eq!(unescape(r"a\qb"), r"a\qb");
        assert_eq!(unescape(r"end\"), r"end\");
        assert_eq!(unescape(r"\xZZ"), r"\xZZ");
        assert_eq!(unescape(r"\x+1"), r"\x+1");
        assert_eq!(unescape(r"\x41\x2d"), "A-");
    }

    #[test]
    fn test_has_all_tags() {
        let tags = vec!["coding".to_string(), "docs".to_string()];
        assert!(has_all_tags(&tags, &[]));
        assert!(has_all_tags(&tags, &["coding".to_string()]));
        assert!(!has_all_tags(&tags, &["coding".to_string(), "ops".to_string()]));
        assert!(!has_all_tags(&tags, &["Coding".to_string()]));
    }
}
