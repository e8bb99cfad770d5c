use std::{env, fmt, path::PathBuf};

use crate::utils::non_blank;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_LISTEN: &str = "0.0.0.0:5173";
pub const DEFAULT_PUBLIC_DIR: &str = "public";

const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

/// Connection settings for the chat-completion API.
///
/// Built once during startup and handed to consumers through `AppState`.
#[derive(Clone, PartialEq, Eq)]
pub struct OpenAiConfig {
    pub key: String,
    pub base_url: String,
    pub model: String,
}

impl OpenAiConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Resolves the configuration from `lookup`. Values are trimmed and blank
    /// values fall back to the defaults.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            key: non_blank(lookup("OPENAI_API_KEY")).unwrap_or_default(),
            base_url: non_blank(lookup("OPENAI_BASE_URL"))
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: non_blank(lookup("OPENAI_MODEL")).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }

    /// Chat-completion endpoint derived from `base_url`. Only a single trailing
    /// slash is removed.
    #[must_use]
    pub fn normalized_chat_url(&self) -> String {
        let base = self.base_url.strip_suffix('/').unwrap_or(&self.base_url);
        format!("{base}{CHAT_COMPLETIONS_PATH}")
    }

    #[must_use]
    pub fn has_key(&self) -> bool {
        !self.key.is_empty()
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("key", &if self.has_key() { "<redacted>" } else { "" })
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub listen: String,
    pub public_dir: PathBuf,
}

impl ServerConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            listen: non_blank(lookup("LISTEN")).unwrap_or_else(|| DEFAULT_LISTEN.to_string()),
            public_dir: non_blank(lookup("PUBLIC_DIR"))
                .map_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR), PathBuf::from),
        }
    }
}
