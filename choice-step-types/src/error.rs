use crate::AnswerEntry;

/// Error type for catalog construction and row/value lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate choice value: {0}")]
    DuplicateValue(String),

    #[error("No choice with value: {0}")]
    UnknownValue(String),

    #[error("No row at index {index} ({rows} rows shown)")]
    UnknownRow { index: usize, rows: usize },
}

/// Error type for loading a step definition.
#[derive(Debug, thiserror::Error)]
pub enum StepError {
    /// The definition is not valid JSON or does not match the step shape.
    /// Duplicate choice values are reported through this variant too.
    #[error("Invalid step definition: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Step has no identifier")]
    MissingIdentifier,
}

/// Advancing was refused because the other option still needs its text.
///
/// Recoverable: the screen shows the prompt, refocuses the other input and
/// stays on the question.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{title}: {message}")]
pub struct ValidationBlocked {
    /// Alert title.
    pub title: &'static str,

    /// Alert body.
    pub message: &'static str,

    /// The other-text input should take focus once the prompt is dismissed.
    pub refocus_other: bool,
}

impl ValidationBlocked {
    pub(crate) fn missing_other_text() -> Self {
        Self {
            title: "Answer required",
            message: "Please fill out the text field too.",
            refocus_other: true,
        }
    }
}

/// Skipping was refused because the question is not optional.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Question {identifier} is required and cannot be skipped")]
pub struct RequiredStep {
    pub identifier: String,
}

/// Why a stored answer entry could not be restored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// The value is not in the catalog (the catalog may have changed since).
    UnknownValue,

    /// The other marker does not match the question's other option.
    UnknownOtherMarker,

    /// The entry is an other answer but the question has no other option.
    OtherDisabled,
}

/// A stored answer entry that matched neither a catalog value nor the
/// other marker. Dropped from the restored selection and logged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Dropped stored answer {entry:?}: {reason:?}")]
pub struct MalformedHydrationEntry {
    pub entry: AnswerEntry,
    pub reason: MalformedReason,
}
