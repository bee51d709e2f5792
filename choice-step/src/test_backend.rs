//! Test backend for driving questions without user interaction.
//!
//! `TestBackend` replays a scripted list of taps, text changes and
//! navigation attempts against a [`ChoiceQuestion`]. This is useful for
//! testing flows built on top of choice questions.
//!
//! # Example
//!
//! ```rust,ignore
//! use choice_step::{ChoiceBackend, ChoiceQuestion, TestBackend};
//!
//! let mut question = ChoiceQuestion::new(step);
//! let payload = TestBackend::new()
//!     .select("red")
//!     .select_other()
//!     .other_text("teal")
//!     .advance()
//!     .ask(&mut question)
//!     .unwrap();
//! ```

use tracing::debug;

use crate::{
    AnswerPayload, CatalogError, ChoiceBackend, ChoiceQuestion, RequiredStep, Transition,
    ValidationBlocked,
};

/// One scripted participant action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    /// Tap the choice with this value.
    Select(String),
    Deselect(String),
    SelectOther,
    DeselectOther,

    /// Finish editing the other text field.
    OtherText(String),

    /// Type into the search bar.
    Search(String),
    EndSearch,

    /// Tap the row at this index of what is currently shown.
    TapRow { index: usize, select: bool },

    Advance,

    /// Dismiss the "answer required" prompt.
    Acknowledge,
    Skip,
}

/// A test backend that replays pre-configured interactions.
#[derive(Debug, Clone, Default)]
pub struct TestBackend {
    script: Vec<Interaction>,
}

/// Error type for TestBackend.
#[derive(Debug, thiserror::Error)]
pub enum TestBackendError {
    #[error("Script ended without advancing")]
    NotAdvanced,

    #[error("Script ended on a blocked question: {0}")]
    Blocked(ValidationBlocked),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Required(#[from] RequiredStep),
}

impl TestBackend {
    /// Create a backend with an empty script.
    pub fn new() -> Self {
        Self { script: Vec::new() }
    }

    /// Append an interaction to the script.
    pub fn with(mut self, interaction: Interaction) -> Self {
        self.script.push(interaction);
        self
    }

    pub fn select(self, value: impl Into<String>) -> Self {
        self.with(Interaction::Select(value.into()))
    }

    pub fn deselect(self, value: impl Into<String>) -> Self {
        self.with(Interaction::Deselect(value.into()))
    }

    pub fn select_other(self) -> Self {
        self.with(Interaction::SelectOther)
    }

    pub fn deselect_other(self) -> Self {
        self.with(Interaction::DeselectOther)
    }

    pub fn other_text(self, text: impl Into<String>) -> Self {
        self.with(Interaction::OtherText(text.into()))
    }

    pub fn search(self, text: impl Into<String>) -> Self {
        self.with(Interaction::Search(text.into()))
    }

    pub fn end_search(self) -> Self {
        self.with(Interaction::EndSearch)
    }

    pub fn tap_row(self, index: usize, select: bool) -> Self {
        self.with(Interaction::TapRow { index, select })
    }

    pub fn advance(self) -> Self {
        self.with(Interaction::Advance)
    }

    pub fn acknowledge(self) -> Self {
        self.with(Interaction::Acknowledge)
    }

    pub fn skip(self) -> Self {
        self.with(Interaction::Skip)
    }
}

impl ChoiceBackend for TestBackend {
    type Error = TestBackendError;

    fn ask(&self, question: &mut ChoiceQuestion) -> Result<AnswerPayload, Self::Error> {
        let mut last_prompt = None;

        for interaction in &self.script {
            debug!(?interaction, "replaying");
            match interaction {
                Interaction::Select(value) => {
                    question.toggle_value(value, true)?;
                }
                Interaction::Deselect(value) => {
                    question.toggle_value(value, false)?;
                }
                Interaction::SelectOther => {
                    question.toggle_other(true);
                }
                Interaction::DeselectOther => {
                    question.toggle_other(false);
                }
                Interaction::OtherText(text) => question.set_other_text(text),
                Interaction::Search(text) => question.set_search_text(text.as_str()),
                Interaction::EndSearch => question.end_search(),
                Interaction::TapRow { index, select } => {
                    question.tap_row(*index, *select)?;
                }
                Interaction::Advance => match question.advance() {
                    Transition::Advancing(payload) => return Ok(payload),
                    Transition::Blocked(prompt) => last_prompt = Some(prompt),
                },
                Interaction::Acknowledge => {
                    question.acknowledge();
                    last_prompt = None;
                }
                Interaction::Skip => {
                    if let Transition::Advancing(payload) = question.skip()? {
                        return Ok(payload);
                    }
                }
            }
        }

        match last_prompt {
            Some(prompt) => Err(TestBackendError::Blocked(prompt)),
            None => Err(TestBackendError::NotAdvanced),
        }
    }
}
