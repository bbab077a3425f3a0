//! Collection search tool for ZDK agents
//!
//! Wraps the hosted semantic search API as a [`Tool`](zdk_search_core::Tool).
//! Ranking, query expansion, reranking and answer generation all happen
//! remotely; this crate resolves configuration, validates the call arguments
//! and passes the results through.
//!
//! ## API Key
//!
//! Pass the key with [`SearchToolConfig::with_api_key`] or set the
//! `AIRWEAVE_API_KEY` environment variable. The tool fails to build without one.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zdk_airweave::{SearchToolConfig, create_search_tool};
//! use zdk_search_core::{DefaultToolContext, Tool};
//! use std::sync::Arc;
//!
//! # async fn run() -> zdk_search_core::Result<()> {
//! let tool = create_search_tool(
//!     SearchToolConfig::new().with_default_collection("engineering-docs"),
//! )?;
//!
//! let ctx = Arc::new(DefaultToolContext::new("call-1", "inv-1"));
//! let response = tool
//!     .execute(ctx, serde_json::json!({"query": "How do we rotate credentials?"}))
//!     .await?;
//! println!("{}", response.result["results"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Tool Arguments
//!
//! | argument | type | notes |
//! |---|---|---|
//! | `query` | string, 1-1000 chars | required |
//! | `collection` | string | overrides the configured default collection |
//! | `limit` | integer, 1-100 | overrides the configured default limit |
//!
//! The result is `{ "results": [...] }`, plus `"answer"` when answer
//! generation is enabled and the service produced one.

pub mod client;
pub mod config;
pub mod error;
pub mod input;
pub mod tool;
pub mod types;

pub use client::{HttpSearchClient, SearchBackend};
pub use config::SearchToolConfig;
pub use error::ClientError;
pub use input::SearchInput;
pub use tool::{SearchTool, create_search_tool};
pub use types::{
    Breadcrumb, ResultPayload, SearchOutput, SearchRequest, SearchResponse, SearchResultItem,
    SystemMetadata,
};
