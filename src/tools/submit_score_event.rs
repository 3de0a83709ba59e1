//! Submit score event tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::protocol::{required_str, Tool, ToolDefinition, ToolResult};
use crate::service::RunSgService;
use crate::types::ScoreEventBody;

/// Tool for idempotent score-event ingestion
pub struct SubmitScoreEventTool {
    service: Arc<RunSgService>,
}

impl SubmitScoreEventTool {
    pub fn new(service: Arc<RunSgService>) -> Self {
        Self { service }
    }
}

impl Tool for SubmitScoreEventTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "submit_score_event",
            "Append a score event to a run. Resubmitting a dedupeKey is a no-op that returns the same response.",
            json!({
                "type": "object",
                "properties": {
                    "runId": { "type": "string", "description": "Run the event belongs to" },
                    "dedupeKey": { "type": "string", "description": "Caller-chosen idempotency key, unique per run" },
                    "ts": { "type": "number", "minimum": 0, "description": "Event timestamp" },
                    "kind": { "type": "string", "description": "Event kind; only 'shot' is scored" },
                    "payload": {
                        "type": "object",
                        "description": "Shot payload: hole, shot, distance_before_m, distance_after_m, lie_before, lie_after?, penalty?"
                    }
                },
                "required": ["runId", "dedupeKey", "ts", "kind"]
            }),
        )
    }

    fn execute(&self, params: Value) -> ToolResult<Value> {
        let run_id = required_str(&params, "runId")?.to_string();
        let body: ScoreEventBody = serde_json::from_value(params)?;
        let response = self.service.submit_score_event(&run_id, body)?;
        Ok(serde_json::to_value(response)?)
    }
}
