use serde::{Deserialize, Serialize};

/// The caller-safe view of one registered action.
///
/// Recomputed on demand from the registry — never stored independently, so
/// it cannot drift from the source of truth. Holds nothing that cannot
/// serialize; the handler is excluded by construction.
///
/// Serializes as `{id, description, hasInput, inputSchema?}` with the
/// schema key omitted entirely for schemaless actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionManifestEntry {
    /// The action's stable identifier.
    pub id: String,
    /// Human-readable description for the decision-maker.
    pub description: String,
    /// Whether the action declares an input contract.
    pub has_input: bool,
    /// The declared schema in interchange form, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_schema: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn serializes_in_wire_shape() {
        let entry = ActionManifestEntry {
            id: "add_numbers".into(),
            description: "Add two numbers".into(),
            has_input: true,
            input_schema: Some(json!({ "type": "object" })),
        };

        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({
                "id": "add_numbers",
                "description": "Add two numbers",
                "hasInput": true,
                "inputSchema": { "type": "object" }
            })
        );
    }

    #[test]
    fn schema_key_is_omitted_when_absent() {
        let entry = ActionManifestEntry {
            id: "refresh".into(),
            description: "Refresh the view".into(),
            has_input: false,
            input_schema: None,
        };

        let value = serde_json::to_value(&entry).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert!(!object.contains_key("inputSchema"));
    }

    #[test]
    fn round_trips_through_json() {
        let entry = ActionManifestEntry {
            id: "add_numbers".into(),
            description: "Add two numbers".into(),
            has_input: true,
            input_schema: Some(json!({ "type": "object", "required": ["a", "b"] })),
        };

        let text = serde_json::to_string(&entry).unwrap();
        let parsed: ActionManifestEntry = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, entry);
    }
}
