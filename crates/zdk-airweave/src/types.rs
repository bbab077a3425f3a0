//! Wire and output types for collection search.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `POST /collections/{collection}/search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub limit: u32,
    pub generate_answer: bool,
    pub expand_query: bool,
    pub rerank: bool,
}

/// Response returned by the search service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Required: a success body without it is not a search response
    pub results: Vec<SearchResultItem>,

    /// Generated answer, only present when answer generation was requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion: Option<String>,
}

/// One ranked hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub id: Value,
    pub score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub payload: ResultPayload,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Entity data attached to a hit.
///
/// Fields the service always documents are typed; anything a source adds
/// on top lands in `extra` and is forwarded untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breadcrumbs: Option<Vec<Breadcrumb>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub textual_representation: Option<String>,

    #[serde(
        rename = "airweave_system_metadata",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub system_metadata: Option<SystemMetadata>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Navigation path element pointing at a parent entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Breadcrumb {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Where an entity came from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_id: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// What the search tool hands back to the agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutput {
    pub results: Vec<SearchResultItem>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl From<SearchResponse> for SearchOutput {
    fn from(response: SearchResponse) -> Self {
        Self {
            results: response.results,
            answer: response.completion.filter(|answer| !answer.is_empty()),
        }
    }
}
