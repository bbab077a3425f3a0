//! Tracing setup and tool-call spans

use crate::{Error, Result, ToolContext};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Span name recorded for every tool execution
pub const EXECUTE_TOOL_SPAN: &str = "execute_tool";

/// Options for the global tracing subscriber
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub default_filter: String,
    /// Emit JSON lines instead of human readable output
    pub json: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            default_filter: "info".to_string(),
            json: false,
        }
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter`. Fails with a
/// configuration error if a global subscriber is already installed.
///
/// # Example
///
/// ```rust,no_run
/// use zdk_search_core::{TelemetryConfig, init_telemetry};
///
/// init_telemetry(TelemetryConfig::default()).unwrap();
/// ```
pub fn init_telemetry(config: TelemetryConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.default_filter))
        .map_err(|e| Error::config_error(format!("Invalid log filter: {}", e)))?;

    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_line_number(true),
            )
            .try_init()
    };

    installed.map_err(|e| Error::config_error(format!("Tracing already initialized: {}", e)))
}

/// Create the span a tool execution runs inside.
pub fn tool_span(tool_name: &str, ctx: &dyn ToolContext) -> tracing::Span {
    tracing::info_span!(
        "execute_tool",
        tool.name = %tool_name,
        tool.call_id = %ctx.function_call_id(),
        invocation_id = %ctx.invocation_id(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DefaultToolContext;
    use std::sync::{Arc, Mutex};
    use tracing::Subscriber;
    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id};
    use tracing_subscriber::layer::{Context, Layer};

    #[test]
    fn test_second_init_is_rejected() {
        // The first call may lose to another test in this binary.
        let _ = init_telemetry(TelemetryConfig::default());
        let err = init_telemetry(TelemetryConfig {
            default_filter: "debug".to_string(),
            json: true,
        })
        .unwrap_err();

        assert!(matches!(err, Error::Config(_)));
    }

    /// Records the name and fields of every span created
    #[derive(Clone, Default)]
    struct SpanCapture(Arc<Mutex<Vec<(String, Vec<(String, String)>)>>>);

    struct FieldVisitor<'a>(&'a mut Vec<(String, String)>);

    impl Visit for FieldVisitor<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
            self.0.push((field.name().to_string(), format!("{:?}", value)));
        }
    }

    impl<S: Subscriber> Layer<S> for SpanCapture {
        fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
            let mut fields = Vec::new();
            attrs.record(&mut FieldVisitor(&mut fields));
            self.0
                .lock()
                .unwrap()
                .push((attrs.metadata().name().to_string(), fields));
        }
    }

    #[test]
    fn test_tool_span_metadata() {
        let capture = SpanCapture::default();
        let subscriber = tracing_subscriber::registry().with(capture.clone());
        let ctx = DefaultToolContext::new("call-1", "inv-1");

        tracing::subscriber::with_default(subscriber, || {
            let span = tool_span("search", &ctx);
            let meta = span.metadata().expect("span should be enabled");
            assert_eq!(meta.name(), EXECUTE_TOOL_SPAN);
            assert_eq!(*meta.level(), tracing::Level::INFO);
        });

        let spans = capture.0.lock().unwrap();
        assert_eq!(spans.len(), 1);

        let (name, fields) = &spans[0];
        assert_eq!(name, EXECUTE_TOOL_SPAN);
        assert!(fields.contains(&("tool.name".to_string(), "search".to_string())));
        assert!(fields.contains(&("tool.call_id".to_string(), "call-1".to_string())));
        assert!(fields.contains(&("invocation_id".to_string(), "inv-1".to_string())));
    }
}
