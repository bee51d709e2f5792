//! Core types for the choice-step crate.
//!
//! This crate provides the presentation-agnostic model of a choice question:
//! - `ChoiceStep`, `ChoiceCatalog` and `OtherChoice` - What the question offers
//! - `SelectionState` - What the participant picked, under single/multiple/exclusive rules
//! - `FilterView` - Search over the catalog
//! - `serialize` / `hydrate` - Conversion to and from `AnswerPayload`
//! - `ChoiceQuestion` - The screen model with its forward gate
//! - `Choices` and `ChoiceBackend` traits - For option enums and backends

mod choice;
pub use choice::{Choice, ChoiceCatalog};

mod other_choice;
pub use other_choice::OtherChoice;

mod selection;
pub use selection::{QuestionStyle, SelectionRules, SelectionState, Target};

mod filter;
pub use filter::{FilterView, apply_filter};

mod answer;
pub use answer::{AnswerEntry, AnswerPayload, ChoiceResult};

mod serializer;
pub use serializer::{Hydrated, hydrate, serialize};

mod step;
pub use step::ChoiceStep;

mod gate;
pub use gate::{GateState, Transition};

mod question;
pub use question::{ChoiceQuestion, Row};

mod error;
pub use error::{
    CatalogError, MalformedHydrationEntry, MalformedReason, RequiredStep, StepError,
    ValidationBlocked,
};

mod traits;
pub use traits::{ChoiceBackend, Choices};
