use serde::{Deserialize, Serialize};

use crate::CatalogError;

/// A single selectable answer option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// The value submitted when this choice is selected. Unique within a catalog.
    pub value: String,

    /// The text shown to the participant.
    pub text: String,

    /// Secondary text shown under the option.
    #[serde(default)]
    pub detail: String,

    /// Selecting this option deselects everything else, including "other".
    #[serde(default)]
    pub exclusive: bool,
}

impl Choice {
    /// Create a new non-exclusive choice without detail text.
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
            detail: String::new(),
            exclusive: false,
        }
    }

    /// Set the detail text.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    /// Mark this choice as exclusive.
    pub fn exclusive(mut self) -> Self {
        self.exclusive = true;
        self
    }
}

/// The ordered list of options for one question.
///
/// Order is display order. Values are unique; a catalog with duplicate
/// values cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Choice>", into = "Vec<Choice>")]
pub struct ChoiceCatalog {
    choices: Vec<Choice>,
}

impl ChoiceCatalog {
    /// Create a catalog, rejecting duplicate values.
    pub fn new(choices: Vec<Choice>) -> Result<Self, CatalogError> {
        for (idx, choice) in choices.iter().enumerate() {
            if choices[..idx].iter().any(|c| c.value == choice.value) {
                return Err(CatalogError::DuplicateValue(choice.value.clone()));
            }
        }
        Ok(Self { choices })
    }

    /// Create a catalog whose values were already checked for uniqueness.
    ///
    /// Used by `#[derive(Choices)]`, which rejects duplicates at compile time.
    #[doc(hidden)]
    pub fn from_checked(choices: Vec<Choice>) -> Self {
        Self { choices }
    }

    /// Get the choices in display order.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Get the choice at the given position.
    pub fn get(&self, index: usize) -> Option<&Choice> {
        self.choices.get(index)
    }

    /// Look up a choice by its value.
    pub fn find(&self, value: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.value == value)
    }

    /// Check if a choice with this value exists.
    pub fn contains(&self, value: &str) -> bool {
        self.find(value).is_some()
    }

    /// Get an iterator over the choices.
    pub fn iter(&self) -> std::slice::Iter<'_, Choice> {
        self.choices.iter()
    }

    /// Get the number of choices.
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// Check if the catalog has no choices.
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}

impl TryFrom<Vec<Choice>> for ChoiceCatalog {
    type Error = CatalogError;

    fn try_from(choices: Vec<Choice>) -> Result<Self, Self::Error> {
        Self::new(choices)
    }
}

impl From<ChoiceCatalog> for Vec<Choice> {
    fn from(catalog: ChoiceCatalog) -> Self {
        catalog.choices
    }
}

impl<'a> IntoIterator for &'a ChoiceCatalog {
    type Item = &'a Choice;
    type IntoIter = std::slice::Iter<'a, Choice>;

    fn into_iter(self) -> Self::IntoIter {
        self.choices.iter()
    }
}
