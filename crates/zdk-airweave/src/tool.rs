//! The collection search tool and its factory.

use crate::client::{HttpSearchClient, SearchBackend};
use crate::config::SearchToolConfig;
use crate::input::SearchInput;
use crate::types::{SearchOutput, SearchRequest};
use async_trait::async_trait;
use serde_json::Value;
use std::env;
use std::sync::Arc;
use tracing::{Instrument, debug};
use zdk_search_core::{Error, Result, Tool, ToolContext, ToolResponse, tool_span};

/// Build a search tool from configuration.
///
/// The API key is resolved here, once: the explicit value wins, otherwise
/// the environment variable named by `api_key_env` is read. A missing key
/// fails immediately with [`Error::Config`]. No network call is made.
///
/// # Example
///
/// ```rust,no_run
/// use zdk_airweave::{SearchToolConfig, create_search_tool};
/// use std::sync::Arc;
///
/// let tool = create_search_tool(
///     SearchToolConfig::new()
///         .with_api_key("sk-...")
///         .with_default_collection("engineering-docs"),
/// )
/// .unwrap();
///
/// // Register with an agent as Arc<dyn Tool>
/// let tool = Arc::new(tool);
/// ```
pub fn create_search_tool(config: SearchToolConfig) -> Result<SearchTool> {
    let api_key = config.resolve_api_key(env::var(&config.api_key_env).ok())?;
    let client = HttpSearchClient::new(&api_key, config.base_url.as_deref())?;

    SearchTool::with_backend(config, Arc::new(client))
}

/// Semantic search over a collection, exposed as an agent tool.
///
/// Holds only read-only state, so one instance can serve concurrent calls.
pub struct SearchTool {
    config: SearchToolConfig,
    backend: Arc<dyn SearchBackend>,
    schema: Value,
}

impl SearchTool {
    /// Build a tool around an existing backend
    pub fn with_backend(config: SearchToolConfig, backend: Arc<dyn SearchBackend>) -> Result<Self> {
        config.validate()?;

        debug!(
            tool = %config.name,
            base_url = config.base_url.as_deref().unwrap_or(crate::config::DEFAULT_BASE_URL),
            default_collection = config.default_collection.is_some(),
            generate_answer = config.generate_answer,
            expand_query = config.expand_query,
            rerank = config.rerank,
            "Search tool created"
        );

        Ok(Self {
            config,
            backend,
            schema: SearchInput::schema(),
        })
    }

    pub fn config(&self) -> &SearchToolConfig {
        &self.config
    }

    /// Run one search with typed input
    pub async fn search(&self, input: SearchInput) -> Result<SearchOutput> {
        input.validate()?;

        let collection = self.resolve_collection(&input)?;
        let request = self.build_request(&input);

        debug!(
            collection = %collection,
            limit = request.limit,
            "Searching collection"
        );

        let response = self
            .backend
            .search(collection, &request)
            .await
            .map_err(|e| Error::tool_failed(&self.config.name, e))?;

        let output = SearchOutput::from(response);

        debug!(
            results = output.results.len(),
            answer = output.answer.is_some(),
            "Search completed"
        );

        Ok(output)
    }

    /// A blank collection counts as not given
    fn resolve_collection<'a>(&'a self, input: &'a SearchInput) -> Result<&'a str> {
        let given = |collection: &&'a str| !collection.trim().is_empty();

        input
            .collection
            .as_deref()
            .filter(given)
            .or(self.config.default_collection.as_deref().filter(given))
            .ok_or_else(|| {
                Error::config_error(
                    "No collection specified. Pass `collection` in the tool call or configure a default with `SearchToolConfig::with_default_collection`.",
                )
            })
    }

    /// Feature flags always come from the configuration
    fn build_request(&self, input: &SearchInput) -> SearchRequest {
        SearchRequest {
            query: input.query.clone(),
            limit: input.limit.unwrap_or(self.config.default_limit),
            generate_answer: self.config.generate_answer,
            expand_query: self.config.expand_query,
            rerank: self.config.rerank,
        }
    }
}

impl std::fmt::Debug for SearchTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchTool")
            .field("name", &self.config.name)
            .field("default_collection", &self.config.default_collection)
            .field("default_limit", &self.config.default_limit)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Tool for SearchTool {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn description(&self) -> &str {
        &self.config.description
    }

    fn schema(&self) -> Value {
        self.schema.clone()
    }

    async fn execute(&self, ctx: Arc<dyn ToolContext>, params: Value) -> Result<ToolResponse> {
        let span = tool_span(&self.config.name, ctx.as_ref());

        async move {
            let input = SearchInput::from_params(&params)?;
            let output = self.search(input).await?;
            ToolResponse::from_serializable(&output)
        }
        .instrument(span)
        .await
    }
}
