//! Cache stats tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::protocol::{Tool, ToolDefinition, ToolResult};
use crate::service::RunSgService;

/// Tool exposing cache hit/miss counters for telemetry
pub struct CacheStatsTool {
    service: Arc<RunSgService>,
}

impl CacheStatsTool {
    pub fn new(service: Arc<RunSgService>) -> Self {
        Self { service }
    }
}

impl Tool for CacheStatsTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "cache_stats",
            "Run-SG cache hit and miss counters",
            json!({
                "type": "object",
                "properties": {}
            }),
        )
    }

    fn execute(&self, _params: Value) -> ToolResult<Value> {
        Ok(serde_json::to_value(self.service.cache_stats())?)
    }
}
