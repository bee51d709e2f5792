use crate::{AnswerPayload, ValidationBlocked};

/// Where a question is in its forward navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    /// Waiting for the participant.
    #[default]
    Idle,

    /// An advance was refused; the prompt must be acknowledged first.
    Blocked,

    /// The answer was handed on.
    Advancing,
}

/// The outcome of trying to leave a question forwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Stay on the question and show the prompt.
    Blocked(ValidationBlocked),

    /// Move on, submitting this payload.
    Advancing(AnswerPayload),
}

impl Transition {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked(_))
    }

    /// The payload, if advancing.
    pub fn payload(&self) -> Option<&AnswerPayload> {
        match self {
            Self::Advancing(payload) => Some(payload),
            Self::Blocked(_) => None,
        }
    }

    pub fn into_payload(self) -> Option<AnswerPayload> {
        match self {
            Self::Advancing(payload) => Some(payload),
            Self::Blocked(_) => None,
        }
    }
}
