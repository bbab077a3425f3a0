//! Semantic search tools for ZDK agents
//!
//! Facade over the workspace crates:
//! - [`search_core`]: tool trait, context, schema builder, errors and tracing
//! - [`airweave`]: collection search tool backed by the hosted search API

pub use zdk_airweave as airweave;
pub use zdk_search_core as search_core;

pub use zdk_airweave::{SearchTool, SearchToolConfig, create_search_tool};
pub use zdk_search_core::{DefaultToolContext, Error, Result, Tool, ToolContext, ToolResponse};
