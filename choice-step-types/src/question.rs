use tracing::debug;

use crate::{
    AnswerPayload, CatalogError, Choice, ChoiceCatalog, ChoiceResult, ChoiceStep, FilterView,
    GateState, MalformedHydrationEntry, OtherChoice, QuestionStyle, RequiredStep, SelectionState,
    Target, Transition, ValidationBlocked, hydrate, serialize,
};

/// Catalogs longer than this get a search bar.
const SEARCH_THRESHOLD: usize = 10;

/// A row of the question screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row<'a> {
    Choice(&'a Choice),

    /// The trailing free-text row.
    Other,
}

/// The model behind one choice question screen.
///
/// Owns the step definition, the participant's selection, the search state
/// and the forward gate. Backends drive it through taps and text changes
/// and read back an [`AnswerPayload`] once it advances.
#[derive(Debug, Clone)]
pub struct ChoiceQuestion {
    step: ChoiceStep,
    state: SelectionState,
    filter: FilterView,
    gate: GateState,
    dropped: Vec<MalformedHydrationEntry>,
}

impl ChoiceQuestion {
    /// Create a question with nothing selected.
    pub fn new(step: ChoiceStep) -> Self {
        Self {
            step,
            state: SelectionState::new(),
            filter: FilterView::new(),
            gate: GateState::Idle,
            dropped: Vec::new(),
        }
    }

    /// Re-open a question with a previously stored answer.
    ///
    /// Entries that no longer match the step are dropped; see
    /// [`ChoiceQuestion::dropped_entries`].
    pub fn resume(step: ChoiceStep, answer: &AnswerPayload) -> Self {
        let hydrated = hydrate(answer, &step.choices, &step.other, step.rules());
        Self {
            state: hydrated.state,
            dropped: hydrated.dropped,
            ..Self::new(step)
        }
    }

    pub fn step(&self) -> &ChoiceStep {
        &self.step
    }

    pub fn catalog(&self) -> &ChoiceCatalog {
        &self.step.choices
    }

    pub fn other(&self) -> &OtherChoice {
        &self.step.other
    }

    pub fn style(&self) -> QuestionStyle {
        self.step.style
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn gate(&self) -> GateState {
        self.gate
    }

    /// Stored entries that could not be restored by [`ChoiceQuestion::resume`].
    pub fn dropped_entries(&self) -> &[MalformedHydrationEntry] {
        &self.dropped
    }

    // === Selection ===

    /// Select or deselect a choice or the other option.
    ///
    /// Choices are resolved by value against this step's catalog; a choice
    /// from anywhere else is rejected.
    pub fn toggle(&mut self, target: Target<'_>, select: bool) -> Result<bool, CatalogError> {
        match target {
            Target::Choice(choice) => self.toggle_value(&choice.value, select),
            Target::Other => Ok(self.toggle_other(select)),
        }
    }

    /// Select or deselect the choice with the given value.
    pub fn toggle_value(&mut self, value: &str, select: bool) -> Result<bool, CatalogError> {
        let choice = self
            .step
            .choices
            .find(value)
            .ok_or_else(|| CatalogError::UnknownValue(value.to_string()))?;
        Ok(self
            .state
            .toggle(self.step.rules(), Target::Choice(choice), select))
    }

    /// Select or deselect the other option.
    ///
    /// Does nothing and returns `false` when the step has no other option.
    pub fn toggle_other(&mut self, select: bool) -> bool {
        if select && !self.step.other.enabled {
            return false;
        }
        self.state.toggle(self.step.rules(), Target::Other, select)
    }

    pub fn is_selected(&self, choice: &Choice) -> bool {
        self.state.is_selected(choice)
    }

    pub fn is_other_selected(&self) -> bool {
        self.state.is_other_selected()
    }

    /// Update the other text (stored trimmed).
    pub fn set_other_text(&mut self, raw: &str) {
        self.state.set_other_text(raw);
    }

    /// Whether the other slot allows advancing.
    pub fn is_other_satisfied(&self) -> bool {
        self.state.is_other_satisfied(&self.step.other)
    }

    /// Drop every selection and the other text.
    pub fn clear(&mut self) {
        self.state.clear();
    }

    // === Search and rows ===

    /// Whether the screen offers a search bar.
    pub fn shows_search(&self) -> bool {
        let threshold = if self.step.other.enabled {
            SEARCH_THRESHOLD - 1
        } else {
            SEARCH_THRESHOLD
        };
        self.step.choices.len() > threshold
    }

    pub fn begin_search(&mut self) {
        self.filter.begin();
    }

    pub fn set_search_text(&mut self, search: impl Into<String>) {
        self.filter.set_text(search);
    }

    pub fn end_search(&mut self) {
        self.filter.end();
    }

    pub fn is_searching(&self) -> bool {
        self.filter.is_searching()
    }

    /// The rows currently shown: the visible choices, then the other row.
    pub fn rows(&self) -> Vec<Row<'_>> {
        let mut rows: Vec<Row<'_>> = self
            .filter
            .visible(&self.step.choices)
            .into_iter()
            .map(Row::Choice)
            .collect();
        if self.step.other.enabled {
            rows.push(Row::Other);
        }
        rows
    }

    /// Select or deselect whatever is shown at `index`.
    pub fn tap_row(&mut self, index: usize, select: bool) -> Result<bool, CatalogError> {
        let rows = self.rows();
        let target = match rows.get(index) {
            Some(Row::Choice(choice)) => Some((*choice).clone()),
            Some(Row::Other) => None,
            None => {
                return Err(CatalogError::UnknownRow {
                    index,
                    rows: rows.len(),
                });
            }
        };

        match target {
            Some(choice) => self.toggle_value(&choice.value, select),
            None => Ok(self.toggle_other(select)),
        }
    }

    // === Forward navigation ===

    /// Whether the continue control is enabled.
    pub fn can_advance(&self) -> bool {
        !self.state.is_empty()
    }

    /// The payload for the current selection.
    pub fn payload(&self) -> AnswerPayload {
        serialize(&self.state, &self.step.other)
    }

    /// The current payload addressed to this step.
    pub fn result(&self) -> ChoiceResult {
        ChoiceResult {
            identifier: self.step.identifier.clone(),
            question_type: self.step.style,
            answers: self.payload(),
        }
    }

    /// Try to move past the question.
    ///
    /// Blocked while a mandatory other option has no text. A blocked
    /// question stays blocked until [`ChoiceQuestion::acknowledge`] is called.
    ///
    /// Nothing selected is not a blocking condition: callers must check
    /// [`ChoiceQuestion::can_advance`] first, otherwise an empty payload is
    /// handed on even for a required question.
    pub fn advance(&mut self) -> Transition {
        if self.gate == GateState::Blocked || !self.is_other_satisfied() {
            self.gate = GateState::Blocked;
            debug!(step = %self.step.identifier, "advance blocked");
            return Transition::Blocked(ValidationBlocked::missing_other_text());
        }

        self.gate = GateState::Advancing;
        debug!(step = %self.step.identifier, "advancing");
        Transition::Advancing(self.payload())
    }

    /// Dismiss the blocking prompt.
    pub fn acknowledge(&mut self) {
        if self.gate == GateState::Blocked {
            self.gate = GateState::Idle;
        }
    }

    /// Skip an optional question, discarding any selection.
    ///
    /// A required question refuses and is left untouched.
    pub fn skip(&mut self) -> Result<Transition, RequiredStep> {
        if !self.step.optional {
            debug!(step = %self.step.identifier, "skip refused");
            return Err(RequiredStep {
                identifier: self.step.identifier.clone(),
            });
        }
        self.state.clear();
        self.gate = GateState::Advancing;
        debug!(step = %self.step.identifier, "skipped");
        Ok(Transition::Advancing(AnswerPayload::new()))
    }
}
