//! # choice-step
//!
//! The selection state machine behind a survey choice question. Backend-agnostic.
//!
//! A [`ChoiceQuestion`] tracks what a participant picked across single-choice,
//! multiple-choice, exclusive-choice and free-text "other" answers, filters
//! its options by search text, and produces an [`AnswerPayload`] once the
//! forward gate lets it advance.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use choice_step::{Choices, ChoiceQuestion, ChoiceStep, OtherChoice, QuestionStyle};
//!
//! #[derive(Choices, Debug)]
//! enum Symptom {
//!     #[text("Cough")]
//!     Cough,
//!
//!     #[text("Fever")]
//!     Fever,
//!
//!     #[text("None of these")]
//!     #[exclusive]
//!     Nothing,
//! }
//!
//! let step = ChoiceStep::new("symptoms", "Which symptoms?", QuestionStyle::MultipleChoice, Symptom::catalog())
//!     .with_other(OtherChoice::enabled("OTHER"));
//!
//! let mut question = ChoiceQuestion::new(step);
//! let payload = backend.ask(&mut question)?;
//! let symptoms = Symptom::selected_in(&payload);
//! ```
//!
//! ## Attributes
//!
//! ### On variants
//! - `#[text("...")]` - The text shown to the participant
//! - `#[value("...")]` - The submitted value
//! - `#[detail("...")]` - Secondary text under the option
//! - `#[exclusive]` - Selecting this option deselects everything else
//!
//! ## Backends
//!
//! Backends are separate crates that implement `ChoiceBackend`:
//! - `choice-step-dialoguer` - CLI prompts via dialoguer

// Re-export all types from choice-step-types
pub use choice_step_types::*;

// Re-export the derive macro
pub use choice_step_macro::Choices;

// Test backend for driving questions without user interaction
mod test_backend;
pub use test_backend::{Interaction, TestBackend, TestBackendError};
