//! Collaborator-facing tools
//!
//! - `submit_score_event`: idempotent ingestion
//! - `get_run_sg`: strokes gained for a run
//! - `cache_stats`: cache counters

mod cache_stats;
mod get_run_sg;
mod submit_score_event;

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::protocol::{Tool, ToolDefinition, ToolError, ToolResult};
use crate::service::RunSgService;

pub use cache_stats::CacheStatsTool;
pub use get_run_sg::GetRunSgTool;
pub use submit_score_event::SubmitScoreEventTool;

/// Name-indexed set of tools
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool, replacing any tool with the same name
    pub fn register_tool(&mut self, tool: Box<dyn Tool>) -> &mut Self {
        let name = tool.definition().name;
        self.tools.insert(name, tool);
        self
    }

    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Definitions sorted by name
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        let mut defs: Vec<ToolDefinition> = self.tools.values().map(|t| t.definition()).collect();
        defs.sort_by(|a, b| a.name.cmp(&b.name));
        defs
    }

    /// Dispatch a call by tool name
    pub fn call(&self, name: &str, params: Value) -> ToolResult<Value> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        tool.execute(params)
    }
}

/// Register all tools against one service
pub fn register_all_tools(registry: &mut ToolRegistry, service: Arc<RunSgService>) {
    registry.register_tool(Box::new(SubmitScoreEventTool::new(service.clone())));
    registry.register_tool(Box::new(GetRunSgTool::new(service.clone())));
    registry.register_tool(Box::new(CacheStatsTool::new(service)));
}
