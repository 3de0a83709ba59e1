//! Score event ingestion

use serde::{Deserialize, Serialize};

use crate::error::SubmitError;
use crate::types::ScoreEventBody;

use super::RunSgService;

/// Response body for a submission. Duplicates get the same response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub status: String,
    pub dedupe: String,
}

impl SubmitResponse {
    fn ok(dedupe: String) -> Self {
        Self {
            status: "ok".to_string(),
            dedupe,
        }
    }
}

/// Submit one event; client errors leave the store unchanged
pub fn submit_score_event(
    service: &RunSgService,
    run_id: &str,
    body: ScoreEventBody,
) -> Result<SubmitResponse, SubmitError> {
    let outcome = service.store.submit(run_id, body)?;
    Ok(SubmitResponse::ok(outcome.dedupe_key))
}
