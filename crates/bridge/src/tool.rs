//! Tool-call surface: one tool per registered action.
//!
//! The manifest projects into [`ToolDescriptor`]s for the model's
//! available-tools block; inbound [`ToolCall`]s resolve the tool name as
//! the action id and come back as [`ToolResponse`]s carrying a
//! [`DispatchReport`] — never a propagated failure, because the transcript
//! needs an outcome it can show, not a crashed request.

use actkit_core::{Act, ActionManifestEntry, DispatchReport};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// One tool made available to the model, projected from one action.
///
/// Tool APIs require a schema document on every tool, so schemaless
/// actions advertise the permissive empty-object schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Tool name; equal to the action id it dispatches to.
    pub name: String,
    /// What the tool does, read by the model when choosing among tools.
    pub description: String,
    /// JSON Schema for the tool's input.
    ///
    /// Kept in snake_case on the wire — this is the tool-call APIs' own
    /// field name, unlike the camelCase manifest.
    pub input_schema: Value,
}

impl ToolDescriptor {
    /// Project one manifest entry into a tool descriptor.
    pub fn from_manifest_entry(entry: &ActionManifestEntry) -> Self {
        Self {
            name: entry.id.clone(),
            description: entry.description.clone(),
            input_schema: entry
                .input_schema
                .clone()
                .unwrap_or_else(|| json!({ "type": "object" })),
        }
    }
}

/// Project the full manifest of an [`Act`] into tool descriptors, one per
/// registered action, in manifest order.
pub fn tool_descriptors(act: &Act) -> Vec<ToolDescriptor> {
    act.manifest()
        .iter()
        .map(ToolDescriptor::from_manifest_entry)
        .collect()
}

/// An inbound tool invocation from the chat transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Transport-assigned id, echoed back so the transcript can pair the
    /// response with the request.
    pub id: String,
    /// The tool to invoke; matches an action id.
    pub name: String,
    /// Arguments as JSON; `null` when the transport sent none.
    #[serde(default)]
    pub arguments: Value,
}

/// The structured result handed back into the transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResponse {
    /// The id of the tool call this responds to.
    pub tool_call_id: String,
    /// The dispatch outcome, success or error.
    pub output: DispatchReport,
}

/// Resolve a tool call to its action and dispatch it.
///
/// Never fails: an unknown tool name, a rejected payload, and a handler
/// failure all come back as error reports. `null` arguments dispatch as a
/// missing payload, so schemaless actions keep their raw-passthrough
/// behavior and the report echo stays `null`.
pub async fn dispatch_tool_call(act: &Act, call: ToolCall) -> ToolResponse {
    tracing::debug!(tool = %call.name, call_id = %call.id, "tool call received");

    let payload = match call.arguments {
        Value::Null => None,
        arguments => Some(arguments),
    };
    let output = act.run_to_report(&call.name, payload).await;

    ToolResponse {
        tool_call_id: call.id,
        output,
    }
}

#[cfg(test)]
mod tests {
    use actkit_core::ActionDefinition;
    use pretty_assertions::assert_eq;

    use super::*;

    fn noop_act(ids: &[(&str, &str)]) -> Act {
        let mut act = Act::new();
        for (id, description) in ids {
            act.action(ActionDefinition::new(*id, *description), |_: Value| async {
                anyhow::Ok(())
            });
        }
        act
    }

    #[test]
    fn descriptor_defaults_the_schema_for_schemaless_actions() {
        let entry = ActionManifestEntry {
            id: "refresh".into(),
            description: "Refresh the view".into(),
            has_input: false,
            input_schema: None,
        };

        let descriptor = ToolDescriptor::from_manifest_entry(&entry);
        assert_eq!(descriptor.name, "refresh");
        assert_eq!(descriptor.input_schema, json!({ "type": "object" }));
    }

    #[test]
    fn descriptor_carries_the_declared_schema() {
        let entry = ActionManifestEntry {
            id: "add_numbers".into(),
            description: "Add two numbers".into(),
            has_input: true,
            input_schema: Some(json!({
                "type": "object",
                "required": ["a", "b"]
            })),
        };

        let descriptor = ToolDescriptor::from_manifest_entry(&entry);
        assert_eq!(descriptor.input_schema["required"], json!(["a", "b"]));
    }

    #[test]
    fn descriptor_serializes_with_the_tool_api_field_name() {
        let descriptor = ToolDescriptor {
            name: "add_numbers".into(),
            description: "Add two numbers".into(),
            input_schema: json!({ "type": "object" }),
        };

        let value = serde_json::to_value(&descriptor).unwrap();
        assert!(value.as_object().unwrap().contains_key("input_schema"));
    }

    #[test]
    fn one_descriptor_per_action_in_manifest_order() {
        let act = noop_act(&[("add_numbers", "Add"), ("subtract_numbers", "Subtract")]);

        let names: Vec<String> = tool_descriptors(&act).into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["add_numbers", "subtract_numbers"]);
    }

    #[test]
    fn tool_call_arguments_default_to_null() {
        let call: ToolCall =
            serde_json::from_value(json!({ "id": "tc_1", "name": "refresh" })).unwrap();
        assert_eq!(call.arguments, Value::Null);
    }

    #[tokio::test]
    async fn unknown_tool_names_produce_error_reports() {
        let act = noop_act(&[("refresh", "Refresh")]);

        let response = dispatch_tool_call(
            &act,
            ToolCall {
                id: "tc_1".into(),
                name: "not_a_tool".into(),
                arguments: Value::Null,
            },
        )
        .await;

        assert_eq!(response.tool_call_id, "tc_1");
        assert!(!response.output.is_success());
        assert_eq!(response.output.message, "unknown action: \"not_a_tool\"");
    }

    #[tokio::test]
    async fn null_arguments_dispatch_as_missing_payload() {
        let act = noop_act(&[("refresh", "Refresh")]);

        let response = dispatch_tool_call(
            &act,
            ToolCall {
                id: "tc_2".into(),
                name: "refresh".into(),
                arguments: Value::Null,
            },
        )
        .await;

        assert!(response.output.is_success());
        assert_eq!(response.output.payload, Value::Null);
    }
}
