//! The [`Act`] facade: one registry, one dispatch path, two presentations.
//!
//! `run` is the primitive — it propagates a typed [`DispatchError`] so
//! direct callers get the same failure behavior as calling the raw
//! function. `run_to_report` is the thin adapter the AI bridge uses: same
//! core logic, failures converted to a structured [`DispatchReport`].

use std::sync::Arc;

use serde_json::Value;

use crate::definition::ActionDefinition;
use crate::error::DispatchError;
use crate::handler::ActionHandler;
use crate::manifest::ActionManifestEntry;
use crate::registry::ActionRegistry;
use crate::report::DispatchReport;

/// Owns one [`ActionRegistry`] and dispatches into it.
///
/// Every `Act::new()` is an independent instance with its own map — there
/// is no process-wide registry, so parallel instances (one per test, one
/// per embedding) never observe each other.
///
/// Registration takes `&mut self`; dispatch takes `&self` and may suspend
/// while a handler runs, so independent dispatches proceed concurrently
/// through shared borrows. The core adds no locking and no serialization
/// of same-id invocations; handlers that are not reentrant-safe do their
/// own.
///
/// # Example
///
/// ```rust
/// use actkit_core::{Act, ActionDefinition, InputSchema};
/// use serde_json::json;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> anyhow::Result<()> {
/// let mut act = Act::new();
/// act.action(
///     ActionDefinition::new("add_numbers", "Add two numbers").with_input(
///         InputSchema::new(json!({
///             "type": "object",
///             "properties": { "a": { "type": "number" }, "b": { "type": "number" } },
///             "required": ["a", "b"]
///         }))?,
///     ),
///     |payload: serde_json::Value| async move {
///         println!("sum: {}", payload["a"].as_f64().unwrap_or(0.0) + payload["b"].as_f64().unwrap_or(0.0));
///         anyhow::Ok(())
///     },
/// );
///
/// act.run("add_numbers", Some(json!({ "a": 2, "b": 3 }))).await?;
/// # Ok(()) }
/// ```
#[derive(Default)]
pub struct Act {
    registry: ActionRegistry,
}

impl Act {
    /// Create an instance with an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action: a definition paired with its handler.
    ///
    /// Accepts anything implementing [`ActionHandler`], including plain
    /// async closures over the raw payload. Never fails; a duplicate id is
    /// logged at warn level and the newer registration wins.
    pub fn action(&mut self, definition: ActionDefinition, handler: impl ActionHandler) {
        self.registry.register(definition, Arc::new(handler));
    }

    /// Dispatch an action by id, propagating failures to the caller.
    ///
    /// The contract, in order:
    ///
    /// 1. Unknown id — fails with [`DispatchError::UnknownAction`] before
    ///    anything runs.
    /// 2. Declared input contract — the payload is validated; a rejected
    ///    payload fails with [`DispatchError::InvalidInput`] carrying every
    ///    violated constraint, and the handler is never invoked. A `None`
    ///    payload is validated as JSON `null`.
    /// 3. The handler runs with the validated (possibly normalized)
    ///    payload, or with the raw payload when no contract is declared.
    ///    Dispatch completes when the handler's operation has settled; a
    ///    handler failure propagates as [`DispatchError::Handler`].
    ///
    /// There is no retry, no timeout, and no cancellation — callers that
    /// need them wrap this call.
    pub async fn run(&self, action_id: &str, payload: Option<Value>) -> Result<(), DispatchError> {
        let Some(entry) = self.registry.get(action_id) else {
            return Err(DispatchError::unknown_action(action_id));
        };

        tracing::debug!(id = %action_id, "dispatching action");

        let raw = payload.unwrap_or(Value::Null);
        let input = match &entry.definition().input {
            Some(schema) => schema
                .validate(raw)
                .map_err(|issues| DispatchError::invalid_input(action_id, issues))?,
            None => raw,
        };

        entry
            .handler()
            .call(input)
            .await
            .map_err(|cause| DispatchError::handler(action_id, cause))
    }

    /// Dispatch an action by id, converting the outcome into a report.
    ///
    /// Same core logic as [`run`](Self::run), presented for the tool-call
    /// bridge: never fails, echoes the caller's payload (`null` when none
    /// was given), and stamps the settle time. The decision-maker reads
    /// the report out of the transcript and reacts instead of crashing a
    /// request.
    pub async fn run_to_report(&self, action_id: &str, payload: Option<Value>) -> DispatchReport {
        let echo = payload.clone().unwrap_or(Value::Null);
        match self.run(action_id, payload).await {
            Ok(()) => DispatchReport::success(action_id, echo),
            Err(err) => {
                tracing::warn!(id = %action_id, error = %err, "dispatch failed");
                DispatchReport::failure(&err, echo)
            }
        }
    }

    /// The registry this instance dispatches into (read-only).
    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    /// Project the manifest: one caller-safe entry per registered action.
    pub fn manifest(&self) -> Vec<ActionManifestEntry> {
        self.registry.list()
    }

    /// Check whether an action with the given id is registered.
    pub fn has(&self, id: &str) -> bool {
        self.registry.has(id)
    }

    /// Number of registered actions.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Returns `true` if no actions are registered.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Remove all registered actions. A test-isolation affordance.
    pub fn clear(&mut self) {
        self.registry.clear();
    }
}

impl std::fmt::Debug for Act {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Act")
            .field("registry", &self.registry)
            .finish()
    }
}
