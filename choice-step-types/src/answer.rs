use serde::{Deserialize, Serialize};

use crate::QuestionStyle;

/// One entry of a submitted answer.
///
/// On the wire a choice is a bare string and the other answer is an
/// object `{"other": marker, "text": text}`, with `text` left out when
/// there is none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerEntry {
    Choice(String),
    Other {
        #[serde(rename = "other")]
        marker: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
}

impl AnswerEntry {
    pub fn choice(value: impl Into<String>) -> Self {
        Self::Choice(value.into())
    }

    pub fn other(marker: impl Into<String>, text: Option<String>) -> Self {
        Self::Other {
            marker: marker.into(),
            text,
        }
    }
}

/// The normalized answer to a choice question.
///
/// Choice entries come first in selection order; at most one other entry
/// follows them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerPayload {
    entries: Vec<AnswerEntry>,
}

impl AnswerPayload {
    /// Create an empty payload (skipped question).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a payload from raw entries, e.g. as loaded from storage.
    pub fn from_entries(entries: Vec<AnswerEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[AnswerEntry] {
        &self.entries
    }

    /// Values of the choice entries, in order.
    pub fn choice_values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|entry| match entry {
            AnswerEntry::Choice(value) => Some(value.as_str()),
            AnswerEntry::Other { .. } => None,
        })
    }

    /// The other entry's marker and text, if present.
    pub fn other_entry(&self) -> Option<(&str, Option<&str>)> {
        self.entries.iter().find_map(|entry| match entry {
            AnswerEntry::Other { marker, text } => Some((marker.as_str(), text.as_deref())),
            AnswerEntry::Choice(_) => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn push(&mut self, entry: AnswerEntry) {
        self.entries.push(entry);
    }
}

impl FromIterator<AnswerEntry> for AnswerPayload {
    fn from_iter<I: IntoIterator<Item = AnswerEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AnswerPayload {
    type Item = &'a AnswerEntry;
    type IntoIter = std::slice::Iter<'a, AnswerEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A payload addressed to its step, as handed to the submission layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceResult {
    pub identifier: String,
    pub question_type: QuestionStyle,
    pub answers: AnswerPayload,
}
