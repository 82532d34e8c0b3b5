use std::env;

pub const VAULT_ENV: &str = "PROMPTKEEP_VAULT";
pub const PICKER_ENV: &str = "PROMPTKEEP_PICKER";
pub const EDITOR_ENV: &str = "EDITOR";
pub const DEFAULT_EDITOR: &str = "vim";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerKind {
    /// External `fzf` process with a live preview pane.
    #[default]
    Fzf,
    /// In-terminal fuzzy list, no external binary needed.
    Builtin,
}

impl PickerKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "fzf" => Some(Self::Fzf),
            "builtin" | "internal" => Some(Self::Builtin),
            _ => None,
        }
    }
}

/// Per-invocation settings taken from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub vault_override: Option<String>,
    pub editor: String,
    pub picker: PickerKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vault_override: None,
            editor: DEFAULT_EDITOR.to_string(),
            picker: PickerKind::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let picker = match non_empty(PICKER_ENV) {
            Some(raw) => PickerKind::parse(&raw).unwrap_or_else(|| {
                tracing::warn!("unknown {} value '{}', using fzf", PICKER_ENV, raw);
                PickerKind::Fzf
            }),
            None => PickerKind::default(),
        };

        Self {
            vault_override: non_empty(VAULT_ENV),
            editor: non_empty(EDITOR_ENV).unwrap_or_else(|| DEFAULT_EDITOR.to_string()),
            picker,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.editor, "vim");
    }

    #[test]
    fn test_env_values() {
        let config = Config::from_lookup(lookup(&[
            (VAULT_ENV, "~/Vault"),
            (EDITOR_ENV, "code --wait"),
            (PICKER_ENV, "Builtin"),
        ]));
        assert_eq!(config.vault_override.as_deref(), Some("~/Vault"));
        assert_eq!(config.editor, "code --wait");
        assert_eq!(config.picker, PickerKind::Builtin);
    }

    #[test]
    fn test_blank_and_unknown_values() {
        let config = Config::from_lookup(lookup(&[
            (VAULT_ENV, "  "),
            (EDITOR_ENV, ""),
            (PICKER_ENV, "dmenu"),
        ]));
        assert_eq!(config.vault_override, None);
        assert_eq!(config.editor, DEFAULT_EDITOR);
        assert_eq!(config.picker, PickerKind::Fzf);
    }
}
