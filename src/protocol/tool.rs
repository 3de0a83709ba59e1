//! Tool contract
//!
//! Every collaborator-facing operation is a tool: a named definition with a
//! JSON input schema and an `execute` taking and returning JSON.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::error::{SgError, SubmitError};

/// Result type for tool execution
pub type ToolResult<T> = Result<T, ToolError>;

/// Errors returned from tool execution
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    #[error("invalid params: {0}")]
    InvalidParams(String),
    #[error(transparent)]
    Submit(#[from] SubmitError),
    #[error(transparent)]
    StrokesGained(#[from] SgError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ToolError {
    /// Whether the caller sent something wrong, as opposed to stored data being bad
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ToolError::UnknownTool(_) | ToolError::InvalidParams(_) | ToolError::Submit(_) | ToolError::Json(_)
        )
    }
}

/// Tool definition
#[derive(Serialize, Debug, Clone)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>, input_schema: Value) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

/// Trait for tools
///
/// All tools must implement this trait to be registered with a
/// [`crate::tools::ToolRegistry`].
pub trait Tool: Send + Sync {
    /// Get the tool definition
    fn definition(&self) -> ToolDefinition;

    /// Execute the tool with the given parameters
    fn execute(&self, params: Value) -> ToolResult<Value>;

    /// Get the tool name (convenience method)
    fn name(&self) -> String {
        self.definition().name
    }
}

/// Required string parameter
pub fn required_str<'a>(params: &'a Value, field: &str) -> ToolResult<&'a str> {
    params
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| ToolError::InvalidParams(format!("missing string field '{}'", field)))
}
