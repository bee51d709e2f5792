use crate::{AnswerPayload, ChoiceCatalog, ChoiceQuestion};

/// Trait for enums whose variants are the options of a question.
///
/// This trait is typically derived using `#[derive(Choices)]`.
pub trait Choices: Sized {
    /// Returns the catalog, one choice per variant, in declaration order.
    fn catalog() -> ChoiceCatalog;

    /// The submitted value of this variant.
    fn value(&self) -> &'static str;

    /// The variant submitted as `value`, if any.
    fn from_value(value: &str) -> Option<Self>;

    /// The variants selected in a payload, in selection order.
    ///
    /// The other entry and unknown values are skipped.
    fn selected_in(payload: &AnswerPayload) -> Vec<Self> {
        payload.choice_values().filter_map(Self::from_value).collect()
    }
}

/// Trait for backend implementations that present a choice question.
///
/// Backends drive the question through its taps, text changes and forward
/// gate and return once it advances. A blocked advance is handled inside
/// the backend (show the prompt, let the participant fix it) and is never
/// returned as an error.
pub trait ChoiceBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Present the question until it advances.
    ///
    /// # Returns
    /// * `Ok(payload)` once the question advanced or was skipped
    /// * `Err` on cancellation or backend failure
    fn ask(&self, question: &mut ChoiceQuestion) -> Result<AnswerPayload, Self::Error>;
}
