use serde_json::{Map, Value};

/// A single parameter in a tool schema
#[derive(Debug, Clone)]
pub struct Property {
    name: String,
    fields: Map<String, Value>,
}

impl Property {
    fn typed(name: impl Into<String>, type_: &str, description: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("type".to_string(), Value::String(type_.to_string()));
        fields.insert("description".to_string(), Value::String(description.into()));
        Self {
            name: name.into(),
            fields,
        }
    }

    pub fn string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::typed(name, "string", description)
    }

    pub fn integer(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::typed(name, "integer", description)
    }

    pub fn min_length(self, len: u64) -> Self {
        self.constraint("minLength", len)
    }

    pub fn max_length(self, len: u64) -> Self {
        self.constraint("maxLength", len)
    }

    pub fn minimum(self, value: i64) -> Self {
        self.constraint("minimum", value)
    }

    pub fn maximum(self, value: i64) -> Self {
        self.constraint("maximum", value)
    }

    fn constraint(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Tool schema builder for manual schema creation
#[derive(Debug, Clone)]
pub struct ToolSchema {
    properties: Map<String, Value>,
    required: Vec<String>,
}

impl ToolSchema {
    pub fn new() -> Self {
        Self {
            properties: Map::new(),
            required: Vec::new(),
        }
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties
            .insert(property.name, Value::Object(property.fields));
        self
    }

    pub fn required(mut self, name: impl Into<String>) -> Self {
        self.required.push(name.into());
        self
    }

    pub fn build(self) -> Value {
        let mut schema = Map::new();
        schema.insert("type".to_string(), Value::String("object".to_string()));
        schema.insert("properties".to_string(), Value::Object(self.properties));
        schema.insert(
            "required".to_string(),
            Value::Array(self.required.into_iter().map(Value::String).collect()),
        );

        Value::Object(schema)
    }
}

impl Default for ToolSchema {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_schema_builder() {
        let schema = ToolSchema::new()
            .property(Property::string("query", "What to look for").min_length(1).max_length(50))
            .property(Property::integer("limit", "How many").minimum(1).maximum(5))
            .required("query")
            .build();

        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["query"]["type"], "string");
        assert_eq!(schema["properties"]["query"]["minLength"], 1);
        assert_eq!(schema["properties"]["query"]["maxLength"], 50);
        assert_eq!(schema["properties"]["limit"]["type"], "integer");
        assert_eq!(schema["properties"]["limit"]["maximum"], 5);
        assert_eq!(schema["required"], json!(["query"]));
    }

    #[test]
    fn test_empty_schema_has_no_required() {
        let schema = ToolSchema::default().build();
        assert_eq!(schema["required"], json!([]));
        assert!(schema["properties"].as_object().unwrap().is_empty());
    }
}
