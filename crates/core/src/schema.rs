use std::fmt;
use std::sync::Arc;

use jsonschema::Validator;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One violated constraint from input validation.
///
/// `path` is a JSON Pointer into the payload (empty for the root), so the
/// caller — human or model — can locate and fix every problem in a single
/// round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Location of the violation inside the payload.
    pub path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// An input schema document that failed to compile.
#[derive(Debug, Clone, thiserror::Error)]
#[error("schema did not compile: {reason}")]
pub struct SchemaError {
    reason: String,
}

/// A declared input contract, compiled once.
///
/// Holds both the interchange rendering (the raw JSON Schema document the
/// manifest exports) and the validator built from it. Compilation happens
/// here, at construction — registration stays infallible.
#[derive(Clone)]
pub struct InputSchema {
    source: serde_json::Value,
    validator: Arc<Validator>,
}

impl InputSchema {
    /// Compile a raw JSON Schema document (draft 2020-12).
    pub fn new(schema: serde_json::Value) -> Result<Self, SchemaError> {
        let validator = jsonschema::draft202012::options()
            .build(&schema)
            .map_err(|e| SchemaError {
                reason: e.to_string(),
            })?;
        Ok(Self {
            source: schema,
            validator: Arc::new(validator),
        })
    }

    /// Derive the schema from a Rust type and compile it.
    ///
    /// Pair with [`TypedHandler`](crate::handler::TypedHandler) over the
    /// same type so the validation gate and the handler's input stay in
    /// agreement.
    pub fn of<T: JsonSchema>() -> Result<Self, SchemaError> {
        Self::new(schemars::schema_for!(T).to_value())
    }

    /// The interchange rendering exported by the manifest.
    pub fn as_value(&self) -> &serde_json::Value {
        &self.source
    }

    /// Validate a payload, returning the value the handler should receive.
    ///
    /// On success the payload comes back unchanged (this engine validates
    /// without rewriting; a normalizing validator would hand back its
    /// normalized value here). On failure, every violated constraint is
    /// reported, not just the first.
    pub fn validate(&self, payload: serde_json::Value) -> Result<serde_json::Value, Vec<Issue>> {
        let issues: Vec<Issue> = self
            .validator
            .iter_errors(&payload)
            .map(|err| Issue {
                path: err.instance_path.to_string(),
                message: err.to_string(),
            })
            .collect();
        if issues.is_empty() {
            Ok(payload)
        } else {
            Err(issues)
        }
    }
}

impl fmt::Debug for InputSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputSchema")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn numbers_schema() -> InputSchema {
        InputSchema::new(json!({
            "type": "object",
            "properties": {
                "a": { "type": "number" },
                "b": { "type": "number" }
            },
            "required": ["a", "b"]
        }))
        .unwrap()
    }

    #[test]
    fn malformed_document_fails_to_compile() {
        let err = InputSchema::new(json!({ "type": "not-a-type" })).unwrap_err();
        assert!(err.to_string().starts_with("schema did not compile"));
    }

    #[test]
    fn valid_payload_passes_through_unchanged() {
        let schema = numbers_schema();
        let payload = json!({ "a": 2, "b": 3 });
        assert_eq!(schema.validate(payload.clone()).unwrap(), payload);
    }

    #[test]
    fn every_violation_is_reported() {
        let schema = numbers_schema();
        let issues = schema.validate(json!({ "a": "x" })).unwrap_err();

        // Wrong type for `a` and missing `b` — both must show up.
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().any(|i| i.path == "/a"));
        assert!(issues.iter().any(|i| i.path.is_empty() && i.message.contains("\"b\"")));
    }

    #[rstest]
    #[case::valid(json!({ "a": 1, "b": 2 }), 0)]
    #[case::one_wrong_type(json!({ "a": "x", "b": 2 }), 1)]
    #[case::wrong_type_and_missing(json!({ "a": "x" }), 2)]
    #[case::not_an_object(json!("text"), 1)]
    fn violations_are_counted_per_constraint(
        #[case] payload: serde_json::Value,
        #[case] expected: usize,
    ) {
        let schema = numbers_schema();
        match schema.validate(payload) {
            Ok(_) => assert_eq!(expected, 0),
            Err(issues) => assert_eq!(issues.len(), expected),
        }
    }

    #[test]
    fn derived_schema_validates_like_a_declared_one() {
        #[derive(schemars::JsonSchema)]
        #[allow(dead_code)]
        struct Operands {
            a: f64,
            b: f64,
        }

        let schema = InputSchema::of::<Operands>().unwrap();
        assert!(schema.validate(json!({ "a": 1, "b": 2 })).is_ok());
        assert!(schema.validate(json!({ "a": 1 })).is_err());
        assert_eq!(schema.as_value()["type"], json!("object"));
    }

    #[test]
    fn issue_display_includes_path_when_present() {
        let rooted = Issue {
            path: String::new(),
            message: "missing field".into(),
        };
        let nested = Issue {
            path: "/a".into(),
            message: "wrong type".into(),
        };
        assert_eq!(rooted.to_string(), "missing field");
        assert_eq!(nested.to_string(), "/a: wrong type");
    }

    #[test]
    fn debug_hides_the_compiled_validator() {
        let schema = numbers_schema();
        let debug = format!("{schema:?}");
        assert!(debug.contains("InputSchema"));
        assert!(debug.contains("source"));
    }
}
