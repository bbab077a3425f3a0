use crate::{Result, ToolContext};
use async_trait::async_trait;
use std::sync::Arc;

/// Tool trait - a capability an agent can call by name
///
/// Hosts register tools as `Arc<dyn Tool>`, hand `schema()` to the model,
/// and call `execute` with the model-supplied arguments. Implementations
/// must be safe to execute concurrently from several agent steps.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the name the model uses to call the tool
    fn name(&self) -> &str;

    /// Returns a description of what the tool does
    fn description(&self) -> &str;

    /// Returns the JSON schema for the tool's parameters
    fn schema(&self) -> serde_json::Value;

    /// Indicates whether this is a long-running tool
    fn is_long_running(&self) -> bool {
        false
    }

    /// Executes the tool with given parameters
    async fn execute(
        &self,
        ctx: Arc<dyn ToolContext>,
        params: serde_json::Value,
    ) -> Result<ToolResponse>;
}

/// Tool execution response
#[derive(Debug, Clone, PartialEq)]
pub struct ToolResponse {
    pub result: serde_json::Value,
}

impl ToolResponse {
    /// Serialize any output type into a response
    pub fn from_serializable<T: serde::Serialize>(output: &T) -> Result<Self> {
        Ok(Self {
            result: serde_json::to_value(output)?,
        })
    }
}
