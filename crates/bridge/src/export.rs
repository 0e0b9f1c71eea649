//! Sync export: the JSON document a build step sends to the remote
//! service. Assembly only — the POST itself (endpoint, headers, HTTP
//! client) lives outside this crate.

use actkit_core::{Act, ActionManifestEntry};
use serde::{Deserialize, Serialize};

use crate::config::ActConfig;

/// The document describing a project's registered actions.
///
/// Serializes as `{projectId, actions, projectDescription}` with the
/// manifest entries in their registry order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncDocument {
    /// Project the actions belong to.
    pub project_id: String,
    /// The caller-safe manifest, one entry per registered action.
    pub actions: Vec<ActionManifestEntry>,
    /// Project-level description shown to the decision-maker.
    pub project_description: String,
}

impl SyncDocument {
    /// Assemble the document from a configuration and a live [`Act`].
    ///
    /// The manifest is projected at call time, so the document reflects
    /// exactly what is registered when the export runs.
    pub fn assemble(config: &ActConfig, act: &Act) -> Self {
        Self {
            project_id: config.project_id.clone(),
            actions: act.manifest(),
            project_description: config.description.clone().unwrap_or_default(),
        }
    }
}
