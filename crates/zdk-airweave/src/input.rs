//! Validation of tool-call arguments.

use crate::config::{MAX_LIMIT, MIN_LIMIT};
use serde_json::{Map, Value};
use zdk_search_core::{Error, Property, Result, ToolSchema};

pub const MAX_QUERY_CHARS: usize = 1000;

/// Validated arguments of one search call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchInput {
    pub query: String,
    /// Overrides the configured default collection for this call
    pub collection: Option<String>,
    /// Overrides the configured default limit for this call
    pub limit: Option<u32>,
}

impl SearchInput {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            collection: None,
            limit: None,
        }
    }

    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Parse and validate model-supplied arguments
    pub fn from_params(params: &Value) -> Result<Self> {
        let args = params
            .as_object()
            .ok_or_else(|| Error::invalid_parameter("arguments", "expected a JSON object"))?;

        let query = match args.get("query") {
            Some(Value::String(query)) => query.clone(),
            Some(Value::Null) | None => {
                return Err(Error::invalid_parameter("query", "is required"));
            }
            Some(_) => return Err(Error::invalid_parameter("query", "must be a string")),
        };

        let input = Self {
            query,
            collection: optional_string(args, "collection")?,
            limit: optional_limit(args)?,
        };
        input.validate()?;
        Ok(input)
    }

    /// Check bounds; applied to typed input as well as parsed arguments
    pub fn validate(&self) -> Result<()> {
        let chars = self.query.chars().count();
        if chars == 0 {
            return Err(Error::invalid_parameter("query", "must not be empty"));
        }
        if chars > MAX_QUERY_CHARS {
            return Err(Error::invalid_parameter(
                "query",
                format!("must be at most {} characters, got {}", MAX_QUERY_CHARS, chars),
            ));
        }

        if let Some(limit) = self.limit {
            if !(MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
                return Err(limit_out_of_range());
            }
        }

        Ok(())
    }

    /// JSON schema advertised to the model
    pub fn schema() -> Value {
        ToolSchema::new()
            .property(
                Property::string("query", "The search query text")
                    .min_length(1)
                    .max_length(MAX_QUERY_CHARS as u64),
            )
            .property(Property::string(
                "collection",
                "Readable ID of the collection to search. Defaults to the configured collection.",
            ))
            .property(
                Property::integer("limit", "Maximum number of results to return")
                    .minimum(MIN_LIMIT.into())
                    .maximum(MAX_LIMIT.into()),
            )
            .required("query")
            .build()
    }
}

fn optional_string(args: &Map<String, Value>, name: &str) -> Result<Option<String>> {
    match args.get(name) {
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(Value::Null) | None => Ok(None),
        Some(_) => Err(Error::invalid_parameter(name, "must be a string")),
    }
}

fn optional_limit(args: &Map<String, Value>) -> Result<Option<u32>> {
    let number = match args.get("limit") {
        Some(Value::Number(number)) => number,
        Some(Value::Null) | None => return Ok(None),
        Some(_) => return Err(Error::invalid_parameter("limit", "must be an integer")),
    };

    if let Some(limit) = number.as_u64() {
        return u32::try_from(limit)
            .map(Some)
            .map_err(|_| limit_out_of_range());
    }
    if number.as_i64().is_some() {
        return Err(limit_out_of_range());
    }
    Err(Error::invalid_parameter("limit", "must be an integer"))
}

fn limit_out_of_range() -> Error {
    Error::invalid_parameter(
        "limit",
        format!("must be between {} and {}", MIN_LIMIT, MAX_LIMIT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn invalid(err: Error) -> (String, String) {
        match err {
            Error::InvalidParameter { name, reason } => (name, reason),
            other => panic!("expected invalid parameter, got {other:?}"),
        }
    }

    #[test]
    fn test_query_only() {
        let input = SearchInput::from_params(&json!({"query": "budget"})).unwrap();
        assert_eq!(input, SearchInput::new("budget"));
    }

    #[test]
    fn test_all_fields() {
        let input = SearchInput::from_params(&json!({
            "query": "roadmap",
            "collection": "kb2",
            "limit": 100
        }))
        .unwrap();

        assert_eq!(input.collection.as_deref(), Some("kb2"));
        assert_eq!(input.limit, Some(100));
    }

    #[test]
    fn test_null_optionals_are_absent() {
        let input =
            SearchInput::from_params(&json!({"query": "q", "collection": null, "limit": null}))
                .unwrap();
        assert_eq!(input, SearchInput::new("q"));
    }

    #[test]
    fn test_query_bounds() {
        let (name, _) = invalid(SearchInput::from_params(&json!({"query": ""})).unwrap_err());
        assert_eq!(name, "query");

        let at_limit = "a".repeat(MAX_QUERY_CHARS);
        assert!(SearchInput::from_params(&json!({ "query": at_limit })).is_ok());

        let too_long = "a".repeat(MAX_QUERY_CHARS + 1);
        let (name, reason) =
            invalid(SearchInput::from_params(&json!({ "query": too_long })).unwrap_err());
        assert_eq!(name, "query");
        assert!(reason.contains("1001"));
    }

    #[test]
    fn test_query_length_counts_characters() {
        let query = "é".repeat(MAX_QUERY_CHARS);
        assert!(SearchInput::from_params(&json!({ "query": query })).is_ok());
    }

    #[test]
    fn test_missing_or_mistyped_query() {
        let (name, reason) = invalid(SearchInput::from_params(&json!({})).unwrap_err());
        assert_eq!((name.as_str(), reason.as_str()), ("query", "is required"));

        let (name, _) = invalid(SearchInput::from_params(&json!({"query": 5})).unwrap_err());
        assert_eq!(name, "query");

        let (name, _) = invalid(SearchInput::from_params(&json!("budget")).unwrap_err());
        assert_eq!(name, "arguments");
    }

    #[test]
    fn test_limit_bounds() {
        for limit in [json!(0), json!(101), json!(-3), json!(u64::MAX)] {
            let (name, _) = invalid(
                SearchInput::from_params(&json!({"query": "q", "limit": limit})).unwrap_err(),
            );
            assert_eq!(name, "limit");
        }

        assert!(SearchInput::from_params(&json!({"query": "q", "limit": 1})).is_ok());
    }

    #[test]
    fn test_limit_must_be_integer() {
        let (_, reason) = invalid(
            SearchInput::from_params(&json!({"query": "q", "limit": 2.5})).unwrap_err(),
        );
        assert_eq!(reason, "must be an integer");

        let (_, reason) = invalid(
            SearchInput::from_params(&json!({"query": "q", "limit": "10"})).unwrap_err(),
        );
        assert_eq!(reason, "must be an integer");
    }

    #[test]
    fn test_blank_collection_is_accepted() {
        // Resolved against the default by the tool, not rejected here
        let input =
            SearchInput::from_params(&json!({"query": "q", "collection": "  "})).unwrap();
        assert_eq!(input.collection.as_deref(), Some("  "));
    }

    #[test]
    fn test_schema() {
        let schema = SearchInput::schema();

        assert_eq!(schema["required"], json!(["query"]));
        assert_eq!(schema["properties"]["query"]["maxLength"], 1000);
        assert_eq!(schema["properties"]["query"]["minLength"], 1);
        assert_eq!(schema["properties"]["collection"]["type"], "string");
        assert_eq!(schema["properties"]["limit"]["minimum"], 1);
        assert_eq!(schema["properties"]["limit"]["maximum"], 100);
    }
}
