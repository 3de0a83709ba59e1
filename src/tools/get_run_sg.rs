//! Get run strokes-gained tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::protocol::{required_str, Tool, ToolDefinition, ToolResult};
use crate::service::RunSgService;

/// Tool returning per-shot, per-hole and per-run strokes gained
pub struct GetRunSgTool {
    service: Arc<RunSgService>,
}

impl GetRunSgTool {
    pub fn new(service: Arc<RunSgService>) -> Self {
        Self { service }
    }
}

impl Tool for GetRunSgTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "get_run_sg",
            "Strokes gained for a run, served from cache while the run's shots are unchanged",
            json!({
                "type": "object",
                "properties": {
                    "runId": { "type": "string", "description": "Run to score" }
                },
                "required": ["runId"]
            }),
        )
    }

    fn execute(&self, params: Value) -> ToolResult<Value> {
        let run_id = required_str(&params, "runId")?;
        let run_sg = self.service.get_run_sg(run_id)?;
        Ok(serde_json::to_value(run_sg.as_ref())?)
    }
}
