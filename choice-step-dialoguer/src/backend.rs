//! Dialoguer backend implementation for ChoiceBackend trait.

use choice_step::{
    AnswerPayload, CatalogError, ChoiceBackend, ChoiceQuestion, QuestionStyle, RequiredStep, Row,
    Transition,
};
use dialoguer::{
    Confirm, Input, MultiSelect, Select,
    theme::{ColorfulTheme, SimpleTheme, Theme},
};
use thiserror::Error;
use tracing::debug;

/// Error type for the Dialoguer backend.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled the question (e.g., pressed Ctrl+C or Escape).
    #[error("Question cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(dialoguer::Error),

    /// A selected row no longer exists.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Skipping was attempted on a required question.
    #[error(transparent)]
    Required(#[from] RequiredStep),
}

impl From<dialoguer::Error> for DialoguerError {
    fn from(err: dialoguer::Error) -> Self {
        if is_cancelled(&err) {
            Self::Cancelled
        } else {
            Self::Dialoguer(err)
        }
    }
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

/// Dialoguer backend for interactive CLI prompts.
///
/// Single-choice questions become a select list, multiple-choice questions
/// a checkbox list. The other option is the last row; selecting it asks for
/// its text. Long catalogs are narrowed with a search prompt first.
#[derive(Debug, Default, Clone)]
pub struct DialoguerBackend {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerBackend {
    /// Create a new Dialoguer backend with default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a backend with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    fn theme(&self) -> Box<dyn Theme> {
        if self.colorful {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        }
    }

    fn ask_search(&self, question: &mut ChoiceQuestion) -> Result<(), DialoguerError> {
        let theme = self.theme();
        let search: String = Input::with_theme(theme.as_ref())
            .with_prompt("Search (leave empty to list all)")
            .allow_empty(true)
            .interact_text()?;

        if search.trim().is_empty() {
            question.end_search();
        } else {
            question.set_search_text(search.trim());
        }
        Ok(())
    }

    fn ask_selection(&self, question: &mut ChoiceQuestion) -> Result<(), DialoguerError> {
        let theme = self.theme();
        let prompt = question.step().question.clone();

        let (labels, checked) = row_labels(question);
        if labels.is_empty() {
            println!("No options match the search.");
            return Ok(());
        }

        match question.style() {
            QuestionStyle::SingleChoice => {
                let mut select = Select::with_theme(theme.as_ref())
                    .with_prompt(prompt)
                    .items(&labels);
                if let Some(current) = checked.iter().position(|&c| c) {
                    select = select.default(current);
                }
                let index = select.interact()?;
                question.tap_row(index, true)?;
            }
            QuestionStyle::MultipleChoice => {
                let chosen = MultiSelect::with_theme(theme.as_ref())
                    .with_prompt(prompt)
                    .items(&labels)
                    .defaults(&checked)
                    .interact()?;

                for index in (0..labels.len()).filter(|i| !chosen.contains(i)) {
                    question.tap_row(index, false)?;
                }
                for &index in &chosen {
                    question.tap_row(index, true)?;
                }

                let (_, resolved) = row_labels(question);
                let kept = resolved.iter().filter(|&&c| c).count();
                if kept != chosen.len() {
                    println!("Some options exclude each other; kept the last one chosen.");
                }
            }
        }

        debug!(selected = question.state().selected().len(), "selection collected");
        Ok(())
    }

    fn ask_other_text(&self, question: &mut ChoiceQuestion) -> Result<(), DialoguerError> {
        let theme = self.theme();
        let other = question.other();
        let prompt = format!("{} ({})", other.title, other.placeholder);

        let text: String = Input::with_theme(theme.as_ref())
            .with_prompt(prompt)
            .with_initial_text(question.state().other_text())
            .allow_empty(true)
            .interact_text()?;

        question.set_other_text(&text);
        Ok(())
    }
}

/// Labels of the shown rows and whether each is currently selected.
fn row_labels(question: &ChoiceQuestion) -> (Vec<String>, Vec<bool>) {
    question
        .rows()
        .into_iter()
        .map(|row| match row {
            Row::Choice(choice) => (
                with_detail(&choice.text, &choice.detail),
                question.is_selected(choice),
            ),
            Row::Other => (
                with_detail(&question.other().title, &question.other().detail),
                question.is_other_selected(),
            ),
        })
        .unzip()
}

fn with_detail(text: &str, detail: &str) -> String {
    if detail.is_empty() {
        text.to_string()
    } else {
        format!("{text} ({detail})")
    }
}

impl ChoiceBackend for DialoguerBackend {
    type Error = DialoguerError;

    fn ask(&self, question: &mut ChoiceQuestion) -> Result<AnswerPayload, Self::Error> {
        if let Some(title) = &question.step().title {
            println!("{title}");
        }

        loop {
            if question.shows_search() {
                self.ask_search(question)?;
            }
            self.ask_selection(question)?;
            question.end_search();

            if question.is_other_selected() && question.other().allows_free_text {
                self.ask_other_text(question)?;
            }

            if !question.can_advance() {
                if question.step().optional {
                    let skip = Confirm::with_theme(self.theme().as_ref())
                        .with_prompt("Skip this question?")
                        .default(true)
                        .interact()?;
                    if skip {
                        return Ok(question.skip()?.into_payload().unwrap_or_default());
                    }
                } else {
                    println!("Please choose an answer.");
                }
                continue;
            }

            match question.advance() {
                Transition::Advancing(payload) => return Ok(payload),
                Transition::Blocked(prompt) => {
                    println!("{}: {}", prompt.title, prompt.message);
                    question.acknowledge();
                    if prompt.refocus_other {
                        self.ask_other_text(question)?;
                    }
                    if let Transition::Advancing(payload) = question.advance() {
                        return Ok(payload);
                    }
                    question.acknowledge();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use choice_step::{Choice, ChoiceCatalog, ChoiceStep, OtherChoice};

    use super::*;

    fn question() -> ChoiceQuestion {
        let catalog = ChoiceCatalog::new(vec![
            Choice::new("tea", "Tea"),
            Choice::new("coffee", "Coffee").with_detail("any kind"),
        ])
        .unwrap();
        let step = ChoiceStep::new("drink", "Drink?", QuestionStyle::MultipleChoice, catalog)
            .with_other(OtherChoice::enabled("OTHER").with_title("Something else"));
        ChoiceQuestion::new(step)
    }

    #[test]
    fn labels_include_detail_and_other_row() {
        let (labels, checked) = row_labels(&question());
        assert_eq!(labels, vec!["Tea", "Coffee (any kind)", "Something else"]);
        assert_eq!(checked, vec![false, false, false]);
    }

    #[test]
    fn checked_follows_selection() {
        let mut question = question();
        question.toggle_value("coffee", true).unwrap();
        question.toggle_other(true);

        let (_, checked) = row_labels(&question);
        assert_eq!(checked, vec![false, true, true]);
    }
}
