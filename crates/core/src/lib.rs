//! # Actkit Core
//!
//! Action registry and dispatch core: declare an ordinary function once —
//! an id, a description, an optional input contract — and invoke it from
//! two call sites with the same behavior: direct UI event handlers and an
//! AI agent's tool-calls.
//!
//! The core is deliberately thin. Storage is a key-unique map, validation
//! delegates to a JSON Schema engine, execution is one awaited call with
//! uniform error capture. There is no scheduling, no persistence, and no
//! cross-invocation coordination; what the crate owns is the contract:
//! ids are unique per instance, untrusted payloads are gated before the
//! handler runs, the manifest never leaks handler code, and every dispatch
//! settles as exactly one success or one typed error.
//!
//! ## Core Types
//!
//! - [`Act`] — facade owning one registry; registration plus both dispatch
//!   presentations (`run` propagates, `run_to_report` converts)
//! - [`ActionDefinition`] — id, description, optional input contract
//! - [`InputSchema`] — compile-once JSON Schema gate; every violation
//!   reported, not just the first
//! - [`ActionHandler`] — type-erased async handler; async closures qualify
//! - [`TypedHandler`] — adapter deserializing the payload into a concrete
//!   input type
//! - [`ActionRegistry`] — `id → RegisteredAction` map with warn-and-
//!   overwrite semantics and manifest projection
//! - [`ActionManifestEntry`] — caller-safe, serializable projection
//! - [`DispatchError`] — unknown action, invalid input, handler failure
//! - [`DispatchReport`] — uniform success/error outcome for transcripts
//!
//! ## Quick Start
//!
//! ```rust
//! use actkit_core::{Act, ActionDefinition, InputSchema, TypedHandler};
//! use serde::Deserialize;
//! use schemars::JsonSchema;
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct Operands { a: f64, b: f64 }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anyhow::Result<()> {
//! let mut act = Act::new();
//! act.action(
//!     ActionDefinition::new("add_numbers", "Add two numbers")
//!         .with_input(InputSchema::of::<Operands>()?),
//!     TypedHandler::new(|input: Operands| async move {
//!         println!("{}", input.a + input.b);
//!         anyhow::Ok(())
//!     }),
//! );
//!
//! // The UI path: direct dispatch, failures propagate.
//! act.run("add_numbers", Some(serde_json::json!({ "a": 2, "b": 3 }))).await?;
//!
//! // The AI path: same logic, outcome as a structured report.
//! let report = act.run_to_report("add_numbers", Some(serde_json::json!({ "a": 2 }))).await;
//! assert!(!report.is_success());
//! # Ok(()) }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Dispatcher facade owning one registry.
pub mod act;
/// Action definitions: id, description, input contract.
pub mod definition;
/// Dispatch error taxonomy.
pub mod error;
/// Type-erased action handlers and the typed adapter.
pub mod handler;
/// Caller-safe manifest projection.
pub mod manifest;
/// Registry mapping ids to registered actions.
pub mod registry;
/// Structured dispatch outcomes for transcripts.
pub mod report;
/// Input schema compilation and validation.
pub mod schema;

// ── Public re-exports ────────────────────────────────────────────────────────

pub use act::Act;
pub use definition::ActionDefinition;
pub use error::DispatchError;
pub use handler::{ActionHandler, TypedHandler};
pub use manifest::ActionManifestEntry;
pub use registry::{ActionRegistry, RegisteredAction};
pub use report::{DispatchReport, DispatchStatus};
pub use schema::{InputSchema, Issue, SchemaError};
