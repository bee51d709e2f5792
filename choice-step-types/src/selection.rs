use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Choice, OtherChoice};

/// Whether a question accepts one answer or several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionStyle {
    #[default]
    SingleChoice,
    MultipleChoice,
}

impl QuestionStyle {
    pub fn is_multiple(self) -> bool {
        self == Self::MultipleChoice
    }
}

/// The rules a selection is mutated under, derived from the question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRules {
    pub style: QuestionStyle,

    /// Whether the other option is exclusive with listed choices.
    pub other_exclusive: bool,
}

impl SelectionRules {
    pub fn new(style: QuestionStyle, other: &OtherChoice) -> Self {
        Self {
            style,
            other_exclusive: other.exclusive,
        }
    }
}

/// What a tap refers to: a listed choice or the other option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    Choice(&'a Choice),
    Other,
}

/// The participant's current answer to one question.
///
/// Owned by the question screen and discarded with it. Only `toggle`
/// changes which options are selected, so the exclusivity invariants
/// hold after every call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    /// Selected choices in the order they were selected.
    selected: Vec<Choice>,

    other_selected: bool,

    /// Kept trimmed. Survives deselecting other so re-selecting restores it.
    other_text: String,
}

impl SelectionState {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the selected choices in selection order.
    pub fn selected(&self) -> &[Choice] {
        &self.selected
    }

    /// Check if the given choice is selected.
    pub fn is_selected(&self, choice: &Choice) -> bool {
        self.selected.iter().any(|c| c.value == choice.value)
    }

    /// Check if a target is selected.
    pub fn is_target_selected(&self, target: Target<'_>) -> bool {
        match target {
            Target::Choice(choice) => self.is_selected(choice),
            Target::Other => self.other_selected,
        }
    }

    pub fn is_other_selected(&self) -> bool {
        self.other_selected
    }

    pub fn other_text(&self) -> &str {
        &self.other_text
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty() && !self.other_selected
    }

    /// Select or deselect a target, applying the style's rules.
    ///
    /// Returns `false` when the target was already in the requested state
    /// and nothing changed.
    pub fn toggle(&mut self, rules: SelectionRules, target: Target<'_>, select: bool) -> bool {
        if self.is_target_selected(target) == select {
            return false;
        }

        match (target, select) {
            (Target::Choice(choice), false) => {
                self.selected.retain(|c| c.value != choice.value);
            }
            (Target::Other, false) => {
                self.other_selected = false;
            }
            (Target::Choice(choice), true)
                if !rules.style.is_multiple() || choice.exclusive =>
            {
                self.selected = vec![choice.clone()];
                self.other_selected = false;
            }
            (Target::Choice(choice), true) => {
                self.selected.retain(|c| !c.exclusive);
                if rules.other_exclusive {
                    self.other_selected = false;
                }
                self.selected.push(choice.clone());
            }
            (Target::Other, true) => {
                if !rules.style.is_multiple() || rules.other_exclusive {
                    self.selected.clear();
                } else {
                    self.selected.retain(|c| !c.exclusive);
                }
                self.other_selected = true;
            }
        }

        debug!(
            ?target,
            select,
            selected = self.selected.len(),
            other = self.other_selected,
            "selection changed"
        );
        true
    }

    /// Store the other text, trimmed.
    pub fn set_other_text(&mut self, raw: &str) {
        self.other_text = raw.trim().to_string();
    }

    /// Check if the other slot allows advancing.
    pub fn is_other_satisfied(&self, other: &OtherChoice) -> bool {
        !self.other_selected || !other.mandatory || !self.other_text.is_empty()
    }

    /// Empty all selection state, including the other text.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.other_selected = false;
        self.other_text.clear();
    }
}
