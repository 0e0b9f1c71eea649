use crate::schema::InputSchema;

/// Declares one registrable capability.
///
/// The `id` is the stable identifier both UI code and AI tool-calls use to
/// invoke the action. The `description` is read by the external
/// decision-maker when choosing among actions — never by dispatch logic.
#[derive(Debug, Clone)]
pub struct ActionDefinition {
    /// Unique id within one registry instance (e.g. `"add_numbers"`).
    pub id: String,
    /// Human-readable description consumed by the decision-maker.
    pub description: String,
    /// Input contract; `None` means the raw payload is passed through.
    pub input: Option<InputSchema>,
}

impl ActionDefinition {
    /// Create a definition with no input schema.
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            input: None,
        }
    }

    /// Declare the input contract for this action.
    pub fn with_input(mut self, schema: InputSchema) -> Self {
        self.input = Some(schema);
        self
    }

    /// Whether this action declares an input contract.
    pub fn has_input(&self) -> bool {
        self.input.is_some()
    }
}
