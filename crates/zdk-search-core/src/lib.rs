//! Core tool abstractions for ZDK search tools
//!
//! This crate provides the agent-facing surface every search tool implements:
//! - `Tool` trait and `ToolResponse`
//! - Tool context passed in by the host agent framework
//! - JSON schema builder for tool parameters
//! - Shared error type and tracing setup

pub mod context;
pub mod error;
pub mod schema;
pub mod telemetry;
pub mod traits;

// Re-exports
pub use context::{DefaultToolContext, ToolContext};
pub use error::{Error, Result};
pub use schema::{Property, ToolSchema};
pub use telemetry::{TelemetryConfig, init_telemetry, tool_span};
pub use traits::{Tool, ToolResponse};
