/// Tool context provided by the host during tool execution
pub trait ToolContext: Send + Sync {
    fn function_call_id(&self) -> &str;
    fn invocation_id(&self) -> &str;
}

/// Plain value implementation of `ToolContext`
#[derive(Debug, Clone)]
pub struct DefaultToolContext {
    function_call_id: String,
    invocation_id: String,
}

impl DefaultToolContext {
    pub fn new(function_call_id: impl Into<String>, invocation_id: impl Into<String>) -> Self {
        Self {
            function_call_id: function_call_id.into(),
            invocation_id: invocation_id.into(),
        }
    }
}

impl ToolContext for DefaultToolContext {
    fn function_call_id(&self) -> &str {
        &self.function_call_id
    }

    fn invocation_id(&self) -> &str {
        &self.invocation_id
    }
}
