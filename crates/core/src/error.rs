use crate::schema::Issue;

/// Error type for dispatch operations.
///
/// `UnknownAction` and `InvalidInput` are detected before the handler ever
/// runs — deterministic caller errors, pointless to retry. `Handler` wraps
/// whatever the application's own code failed with, untouched.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DispatchError {
    /// Dispatch referenced an id with no registered action.
    #[error("unknown action: \"{id}\"")]
    UnknownAction {
        /// The id the caller asked for.
        id: String,
    },

    /// The payload failed schema validation.
    ///
    /// Carries every violated constraint, not just the first, so the
    /// caller can self-correct in one round trip.
    #[error("invalid input for action \"{id}\": {}", format_issues(.issues))]
    InvalidInput {
        /// The action whose schema rejected the payload.
        id: String,
        /// One entry per violated constraint.
        issues: Vec<Issue>,
    },

    /// The registered handler itself failed.
    #[error("action \"{id}\" failed: {cause}")]
    Handler {
        /// The action whose handler failed.
        id: String,
        /// The application failure, preserved untouched.
        ///
        /// A plain field rather than `#[source]`: `anyhow::Error` does not
        /// implement `std::error::Error` itself.
        cause: anyhow::Error,
    },
}

fn format_issues(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl DispatchError {
    /// Create an unknown-action error.
    pub fn unknown_action(id: impl Into<String>) -> Self {
        Self::UnknownAction { id: id.into() }
    }

    /// Create an invalid-input error from validation issues.
    pub fn invalid_input(id: impl Into<String>, issues: Vec<Issue>) -> Self {
        Self::InvalidInput {
            id: id.into(),
            issues,
        }
    }

    /// Wrap a handler failure.
    pub fn handler(id: impl Into<String>, cause: anyhow::Error) -> Self {
        Self::Handler {
            id: id.into(),
            cause,
        }
    }

    /// The action id this error concerns.
    pub fn action_id(&self) -> &str {
        match self {
            Self::UnknownAction { id }
            | Self::InvalidInput { id, .. }
            | Self::Handler { id, .. } => id,
        }
    }

    /// The violated constraints, when this is an invalid-input error.
    pub fn issues(&self) -> &[Issue] {
        match self {
            Self::InvalidInput { issues, .. } => issues,
            _ => &[],
        }
    }

    /// Returns `true` if dispatch never reached the handler (unknown id or
    /// rejected payload).
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::UnknownAction { .. } | Self::InvalidInput { .. })
    }

    /// Returns `true` for an unknown-action error.
    pub fn is_unknown_action(&self) -> bool {
        matches!(self, Self::UnknownAction { .. })
    }

    /// Returns `true` for an invalid-input error.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Returns `true` for a handler failure.
    pub fn is_handler(&self) -> bool {
        matches!(self, Self::Handler { .. })
    }
}
