use serde::{Deserialize, Serialize};

use crate::{ChoiceCatalog, OtherChoice, QuestionStyle, SelectionRules, StepError};

/// The definition of one choice question, as supplied by the question service.
///
/// This is the only configuration a question screen takes. Missing optional
/// fields fall back to the service's defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceStep {
    /// Step identifier, echoed in the submitted result.
    pub identifier: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The question text shown above the options.
    pub question: String,

    #[serde(default)]
    pub style: QuestionStyle,

    pub choices: ChoiceCatalog,

    #[serde(default)]
    pub other: OtherChoice,

    /// Whether the participant may skip the question.
    #[serde(default)]
    pub optional: bool,
}

impl ChoiceStep {
    /// Create a step with no title, no other option, not optional.
    pub fn new(
        identifier: impl Into<String>,
        question: impl Into<String>,
        style: QuestionStyle,
        choices: ChoiceCatalog,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            title: None,
            question: question.into(),
            style,
            choices,
            other: OtherChoice::disabled(),
            optional: false,
        }
    }

    /// Parse a step definition from JSON.
    pub fn from_json(json: &str) -> Result<Self, StepError> {
        let step: Self = serde_json::from_str(json)?;
        if step.identifier.is_empty() {
            return Err(StepError::MissingIdentifier);
        }
        Ok(step)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_other(mut self, other: OtherChoice) -> Self {
        self.other = other;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// The selection rules for this step.
    pub fn rules(&self) -> SelectionRules {
        SelectionRules::new(self.style, &self.other)
    }
}
