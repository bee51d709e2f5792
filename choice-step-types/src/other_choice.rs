use serde::{Deserialize, Serialize};

/// Configuration of the free-text "other" option of a question.
///
/// Immutable once the question is loaded. The defaults match what the
/// question service assumes when a field is left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OtherChoice {
    /// Whether the other row is shown at all.
    pub enabled: bool,

    /// Whether the other row has a text field.
    pub allows_free_text: bool,

    /// Row title.
    pub title: String,

    /// Placeholder of the text field.
    pub placeholder: String,

    /// Text must be entered before advancing when other is selected.
    pub mandatory: bool,

    /// Selecting other deselects every listed choice.
    pub exclusive: bool,

    /// Secondary text shown under the row.
    pub detail: String,

    /// Marker submitted in place of a choice value.
    pub value: String,
}

impl Default for OtherChoice {
    fn default() -> Self {
        Self {
            enabled: false,
            allows_free_text: true,
            title: "Other".to_string(),
            placeholder: "enter here".to_string(),
            mandatory: true,
            exclusive: false,
            detail: String::new(),
            value: String::new(),
        }
    }
}

impl OtherChoice {
    /// An enabled other option submitting the given marker.
    pub fn enabled(value: impl Into<String>) -> Self {
        Self {
            enabled: true,
            value: value.into(),
            ..Self::default()
        }
    }

    /// A disabled other option (no other row).
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Allow advancing without text.
    pub fn optional(mut self) -> Self {
        self.mandatory = false;
        self
    }

    /// Make other exclusive with all listed choices.
    pub fn exclusive(mut self) -> Self {
        self.exclusive = true;
        self
    }

    /// Hide the text field.
    pub fn without_free_text(mut self) -> Self {
        self.allows_free_text = false;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_mandatory_with_text() {
        let other = OtherChoice::enabled("OTHER");
        assert!(other.enabled);
        assert!(other.mandatory);
        assert!(other.allows_free_text);
        assert!(!other.exclusive);
        assert_eq!(other.title, "Other");
        assert_eq!(other.placeholder, "enter here");
    }

    #[test]
    fn deserializes_partial_config() {
        let other: OtherChoice =
            serde_json::from_str(r#"{"enabled":true,"value":"X","allowsFreeText":false,"mandatory":false}"#)
                .unwrap();
        assert!(other.enabled);
        assert!(!other.mandatory);
        assert!(!other.allows_free_text);
        assert_eq!(other.value, "X");
        assert_eq!(other.placeholder, "enter here");
    }
}
