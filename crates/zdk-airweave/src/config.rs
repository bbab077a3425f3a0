//! Configuration for the collection search tool
//!
//! Values come from code (`with_*` builders) or a TOML document:
//!
//! ```toml
//! api_key = "${AIRWEAVE_API_KEY}"
//! default_collection = "engineering-docs"
//! default_limit = 5
//! generate_answer = true
//! ```
//!
//! `${VAR}` references are resolved from the environment when the document
//! is loaded. The credential itself is resolved once, when the tool is built.

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use zdk_search_core::{Error, Result};

/// Environment variable consulted when no API key is configured
pub const DEFAULT_API_KEY_ENV: &str = "AIRWEAVE_API_KEY";

/// Hosted search endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.airweave.ai";

pub const DEFAULT_TOOL_NAME: &str = "airweave_search";

pub const DEFAULT_DESCRIPTION: &str = "Search across all connected data sources (documents, tickets, chats, code, CRM records and more) with semantic search. Returns the most relevant entities for a natural language query, optionally with a generated answer.";

pub const DEFAULT_LIMIT: u32 = 10;

/// Bounds shared by the configured default and per-call limits
pub const MIN_LIMIT: u32 = 1;
pub const MAX_LIMIT: u32 = 100;

/// Search tool configuration
///
/// Immutable once handed to [`create_search_tool`](crate::create_search_tool).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchToolConfig {
    /// API key; falls back to the `api_key_env` environment variable
    pub api_key: Option<String>,

    /// Endpoint override for self-hosted deployments
    pub base_url: Option<String>,

    /// Collection searched when a call does not name one
    pub default_collection: Option<String>,

    pub default_limit: u32,

    /// Ask the service to synthesize an answer from the hits
    pub generate_answer: bool,

    /// Ask the service to broaden the query with variant phrasings
    pub expand_query: bool,

    /// Ask the service to rerank hits with its relevance model
    pub rerank: bool,

    pub name: String,
    pub description: String,

    /// Name of the environment variable holding the API key
    pub api_key_env: String,
}

impl Default for SearchToolConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            default_collection: None,
            default_limit: DEFAULT_LIMIT,
            generate_answer: false,
            expand_query: true,
            rerank: true,
            name: DEFAULT_TOOL_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
        }
    }
}

impl SearchToolConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_default_collection(mut self, collection: impl Into<String>) -> Self {
        self.default_collection = Some(collection.into());
        self
    }

    pub fn with_default_limit(mut self, limit: u32) -> Self {
        self.default_limit = limit;
        self
    }

    pub fn with_generate_answer(mut self, enabled: bool) -> Self {
        self.generate_answer = enabled;
        self
    }

    pub fn with_expand_query(mut self, enabled: bool) -> Self {
        self.expand_query = enabled;
        self
    }

    pub fn with_rerank(mut self, enabled: bool) -> Self {
        self.rerank = enabled;
        self
    }

    /// Override the tool name and description shown to the model
    pub fn with_tool_info(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.name = name.into();
        self.description = description.into();
        self
    }

    pub fn with_api_key_env(mut self, var: impl Into<String>) -> Self {
        self.api_key_env = var.into();
        self
    }

    /// Parse a TOML document, resolving `${VAR}` references
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let mut config: SearchToolConfig = toml::from_str(contents)
            .map_err(|e| Error::config_error(format!("Failed to parse search tool config: {}", e)))?;

        config.resolve_env_vars();
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load_from(path: &Path) -> Result<Self> {
        tracing::debug!("Loading search tool configuration from: {:?}", path);

        let contents = fs::read_to_string(path).map_err(|e| {
            Error::config_error(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        Self::from_toml_str(&contents)
    }

    fn resolve_env_vars(&mut self) {
        for field in [
            &mut self.api_key,
            &mut self.base_url,
            &mut self.default_collection,
        ] {
            let resolved = field
                .as_deref()
                .and_then(env_reference)
                .map(|var| env::var(var).ok());
            if let Some(value) = resolved {
                *field = value;
            }
        }
    }

    /// Pick the credential: explicit key first, then the environment value.
    ///
    /// Empty strings count as absent.
    pub fn resolve_api_key(&self, env_value: Option<String>) -> Result<String> {
        self.api_key
            .clone()
            .filter(|key| !key.is_empty())
            .or_else(|| env_value.filter(|key| !key.is_empty()))
            .ok_or_else(|| {
                Error::config_error(format!(
                    "Search API key is required. Pass it with `SearchToolConfig::with_api_key` or set the {} environment variable.",
                    self.api_key_env
                ))
            })
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !(MIN_LIMIT..=MAX_LIMIT).contains(&self.default_limit) {
            return Err(Error::config_error(format!(
                "default_limit must be between {} and {}, got {}",
                MIN_LIMIT, MAX_LIMIT, self.default_limit
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::config_error("Tool name must not be empty"));
        }
        Ok(())
    }
}

/// Returns `VAR` for a value of the form `${VAR}`
fn env_reference(value: &str) -> Option<&str> {
    value
        .strip_prefix("${")
        .and_then(|rest| rest.strip_suffix('}'))
        .filter(|var| !var.is_empty())
}
