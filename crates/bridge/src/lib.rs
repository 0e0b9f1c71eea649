//! # Actkit Bridge
//!
//! The surfaces around the actkit core that face the outside world: the
//! tool-call bridge an AI agent drives, the project configuration a build
//! step reads, and the sync document it ships to the remote service.
//!
//! The bridge never adds dispatch semantics of its own. Tools resolve to
//! action ids and go through [`Act::run_to_report`](actkit_core::Act),
//! so the transcript always receives a structured outcome; the sync
//! export is a pure projection of the live manifest. What the remote
//! protocol does with the document — endpoint, headers, envelope — is out
//! of scope here.
//!
//! ## Core Types
//!
//! - [`ToolDescriptor`] — one tool per registered action, schema included
//! - [`ToolCall`] / [`ToolResponse`] — the inbound invocation and the
//!   report-carrying reply
//! - [`ActConfig`] — project credentials and endpoint, from TOML
//! - [`SyncDocument`] — `{projectId, actions, projectDescription}`
//!
//! ## Quick Start
//!
//! ```rust
//! use actkit_bridge::{ToolCall, dispatch_tool_call, tool_descriptors};
//! use actkit_core::{Act, ActionDefinition};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut act = Act::new();
//! act.action(
//!     ActionDefinition::new("refresh", "Refresh the dashboard"),
//!     |_: serde_json::Value| async { anyhow::Ok(()) },
//! );
//!
//! // Advertise the tools, then resolve an inbound call.
//! let tools = tool_descriptors(&act);
//! assert_eq!(tools[0].name, "refresh");
//!
//! let response = dispatch_tool_call(
//!     &act,
//!     ToolCall {
//!         id: "tc_1".into(),
//!         name: "refresh".into(),
//!         arguments: serde_json::Value::Null,
//!     },
//! )
//! .await;
//! assert!(response.output.is_success());
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Project configuration: TOML file discovery and parsing.
pub mod config;
/// Sync export document assembly.
pub mod export;
/// Tool descriptors, tool-calls, and report-producing dispatch.
pub mod tool;

// ── Public re-exports ────────────────────────────────────────────────────────

pub use config::{ActConfig, ConfigError, DEFAULT_ENDPOINT};
pub use export::SyncDocument;
pub use tool::{ToolCall, ToolDescriptor, ToolResponse, dispatch_tool_call, tool_descriptors};
