use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DispatchError;

/// Whether a dispatch succeeded or failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchStatus {
    /// The handler ran to completion.
    Success,
    /// Dispatch failed before or inside the handler.
    Error,
}

/// The uniform outcome of one dispatch, safe to feed into a transcript.
///
/// Exactly one report per dispatch, and producing it never fails — this is
/// what the tool-call bridge hands back to the decision-maker instead of a
/// propagated error.
///
/// Serializes as `{actionId, status, message, payload, timestamp}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchReport {
    /// The action the caller asked for.
    pub action_id: String,
    /// Success or error.
    pub status: DispatchStatus,
    /// Human-readable outcome line.
    pub message: String,
    /// Echo of the caller's payload (`null` when none was given).
    pub payload: serde_json::Value,
    /// When the dispatch settled.
    pub timestamp: DateTime<Utc>,
}

impl DispatchReport {
    /// Report a completed dispatch.
    pub fn success(action_id: impl Into<String>, payload: serde_json::Value) -> Self {
        let action_id = action_id.into();
        let message = format!("Action \"{action_id}\" completed successfully");
        Self {
            action_id,
            status: DispatchStatus::Success,
            message,
            payload,
            timestamp: Utc::now(),
        }
    }

    /// Report a failed dispatch, carrying the failure's display text.
    pub fn failure(error: &DispatchError, payload: serde_json::Value) -> Self {
        Self {
            action_id: error.action_id().to_owned(),
            status: DispatchStatus::Error,
            message: error.to_string(),
            payload,
            timestamp: Utc::now(),
        }
    }

    /// Returns `true` if the dispatch succeeded.
    pub fn is_success(&self) -> bool {
        self.status == DispatchStatus::Success
    }
}
