use std::sync::Arc;

use indexmap::IndexMap;

use crate::definition::ActionDefinition;
use crate::handler::ActionHandler;
use crate::manifest::ActionManifestEntry;

/// One registry record: a definition paired with its handler.
///
/// The pairing is an explicit struct keyed by id — the registry never
/// annotates the callable itself with side-channel metadata.
#[derive(Clone)]
pub struct RegisteredAction {
    definition: ActionDefinition,
    handler: Arc<dyn ActionHandler>,
}

impl RegisteredAction {
    /// The definition this record was registered with.
    pub fn definition(&self) -> &ActionDefinition {
        &self.definition
    }

    /// The handler executing this action's effect.
    pub fn handler(&self) -> &Arc<dyn ActionHandler> {
        &self.handler
    }

    /// Project the caller-safe manifest view of this record.
    pub fn manifest_entry(&self) -> ActionManifestEntry {
        ActionManifestEntry {
            id: self.definition.id.clone(),
            description: self.definition.description.clone(),
            has_input: self.definition.has_input(),
            input_schema: self
                .definition
                .input
                .as_ref()
                .map(|schema| schema.as_value().clone()),
        }
    }
}

impl std::fmt::Debug for RegisteredAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredAction")
            .field("id", &self.definition.id)
            .field("has_input", &self.definition.has_input())
            .finish_non_exhaustive()
    }
}

/// Registry mapping action ids to their registered records.
///
/// Each instance owns its own map; there is no process-wide registry.
/// Insertion order is kept so manifests are deterministic in tests —
/// ordering carries no meaning beyond that.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use actkit_core::{ActionDefinition, ActionRegistry};
///
/// let mut registry = ActionRegistry::new();
/// registry.register(
///     ActionDefinition::new("noop", "Does nothing"),
///     Arc::new(|_payload: serde_json::Value| async { anyhow::Ok(()) }),
/// );
///
/// assert!(registry.has("noop"));
/// assert!(registry.get("unknown").is_none());
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Default)]
pub struct ActionRegistry {
    actions: IndexMap<String, RegisteredAction>,
}

impl ActionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an action, keyed by its definition's id.
    ///
    /// Never fails. A duplicate id is logged at warn level and the newer
    /// registration wins — re-registration happens harmlessly during
    /// interactive development reloads.
    pub fn register(&mut self, definition: ActionDefinition, handler: Arc<dyn ActionHandler>) {
        if self.actions.contains_key(&definition.id) {
            tracing::warn!(id = %definition.id, "action already registered, overwriting");
        }
        tracing::debug!(id = %definition.id, has_input = definition.has_input(), "action registered");
        self.actions.insert(
            definition.id.clone(),
            RegisteredAction {
                definition,
                handler,
            },
        );
    }

    /// Look up an action by id.
    pub fn get(&self, id: &str) -> Option<&RegisteredAction> {
        self.actions.get(id)
    }

    /// Check whether an action with the given id is registered.
    pub fn has(&self, id: &str) -> bool {
        self.actions.contains_key(id)
    }

    /// Project the manifest: one caller-safe entry per registered action.
    pub fn list(&self) -> Vec<ActionManifestEntry> {
        self.actions
            .values()
            .map(RegisteredAction::manifest_entry)
            .collect()
    }

    /// Remove all entries. A test-isolation affordance, not a runtime path.
    pub fn clear(&mut self) {
        self.actions.clear();
    }

    /// Number of registered actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns `true` if no actions are registered.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Iterate over all registered `(id, action)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegisteredAction)> {
        self.actions.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("count", &self.actions.len())
            .field("ids", &self.actions.keys().collect::<Vec<_>>())
            .finish()
    }
}
