use tracing::warn;

use crate::{
    AnswerEntry, AnswerPayload, ChoiceCatalog, MalformedHydrationEntry, MalformedReason,
    OtherChoice, SelectionRules, SelectionState, Target,
};

/// Convert a selection into the payload submitted for the question.
///
/// Other text kept while the other option is deselected is not written, so
/// it does not survive a [`hydrate`].
pub fn serialize(state: &SelectionState, other: &OtherChoice) -> AnswerPayload {
    let mut payload: AnswerPayload = state
        .selected()
        .iter()
        .map(|choice| AnswerEntry::Choice(choice.value.clone()))
        .collect();

    if state.is_other_selected() {
        let text = (other.allows_free_text && !state.other_text().is_empty())
            .then(|| state.other_text().to_string());
        payload.push(AnswerEntry::Other {
            marker: other.value.clone(),
            text,
        });
    }

    payload
}

/// A selection restored from a stored payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hydrated {
    pub state: SelectionState,

    /// Entries that matched neither a catalog value nor the other marker.
    pub dropped: Vec<MalformedHydrationEntry>,
}

/// Restore a selection from a previously stored payload.
///
/// Entries are replayed through the selection rules in order, so the
/// restored state is always consistent even if the stored payload is not.
/// Entries that cannot be matched are logged and reported in
/// [`Hydrated::dropped`].
pub fn hydrate(
    payload: &AnswerPayload,
    catalog: &ChoiceCatalog,
    other: &OtherChoice,
    rules: SelectionRules,
) -> Hydrated {
    let mut hydrated = Hydrated::default();

    for entry in payload {
        let reason = match entry {
            AnswerEntry::Choice(value) => match catalog.find(value) {
                Some(choice) => {
                    hydrated.state.toggle(rules, Target::Choice(choice), true);
                    continue;
                }
                None => MalformedReason::UnknownValue,
            },
            AnswerEntry::Other { .. } if !other.enabled => MalformedReason::OtherDisabled,
            AnswerEntry::Other { marker, text } if *marker == other.value => {
                hydrated.state.toggle(rules, Target::Other, true);
                if let Some(text) = text {
                    hydrated.state.set_other_text(text);
                }
                continue;
            }
            AnswerEntry::Other { .. } => MalformedReason::UnknownOtherMarker,
        };

        warn!(?entry, ?reason, "dropping stored answer entry");
        hydrated.dropped.push(MalformedHydrationEntry {
            entry: entry.clone(),
            reason,
        });
    }

    hydrated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Choice, QuestionStyle};

    fn catalog() -> ChoiceCatalog {
        ChoiceCatalog::new(vec![
            Choice::new("red", "Red"),
            Choice::new("blue", "Blue").exclusive(),
            Choice::new("green", "Green"),
        ])
        .unwrap()
    }

    fn rules(other: &OtherChoice) -> SelectionRules {
        SelectionRules::new(QuestionStyle::MultipleChoice, other)
    }

    #[test]
    fn serializes_choices_then_other() {
        let catalog = catalog();
        let other = OtherChoice::enabled("OTHER_X");
        let mut state = SelectionState::new();
        state.toggle(rules(&other), Target::Choice(catalog.find("green").unwrap()), true);
        state.toggle(rules(&other), Target::Choice(catalog.find("red").unwrap()), true);
        state.toggle(rules(&other), Target::Other, true);
        state.set_other_text("teal");

        let payload = serialize(&state, &other);
        assert_eq!(
            payload.entries(),
            &[
                AnswerEntry::choice("green"),
                AnswerEntry::choice("red"),
                AnswerEntry::other("OTHER_X", Some("teal".to_string())),
            ]
        );
    }

    #[test]
    fn omits_text_when_free_text_disabled() {
        let other = OtherChoice::enabled("OTHER_X").without_free_text();
        let mut state = SelectionState::new();
        state.toggle(rules(&other), Target::Other, true);
        state.set_other_text("ignored");

        let payload = serialize(&state, &other);
        assert_eq!(payload.other_entry(), Some(("OTHER_X", None)));
    }

    #[test]
    fn omits_empty_text() {
        let other = OtherChoice::enabled("OTHER_X");
        let mut state = SelectionState::new();
        state.toggle(rules(&other), Target::Other, true);

        let payload = serialize(&state, &other);
        assert_eq!(payload.other_entry(), Some(("OTHER_X", None)));
    }

    // Holds for states without leftover text on a deselected other option;
    // see `deselected_other_text_is_not_stored`.
    #[test]
    fn round_trip() {
        let catalog = catalog();
        let other = OtherChoice::enabled("OTHER_X");
        let mut state = SelectionState::new();
        state.toggle(rules(&other), Target::Choice(catalog.find("green").unwrap()), true);
        state.toggle(rules(&other), Target::Choice(catalog.find("red").unwrap()), true);
        state.toggle(rules(&other), Target::Other, true);
        state.set_other_text("teal");

        let hydrated = hydrate(&serialize(&state, &other), &catalog, &other, rules(&other));
        assert_eq!(hydrated.state, state);
        assert!(hydrated.dropped.is_empty());
    }

    #[test]
    fn deselected_other_text_is_not_stored() {
        let catalog = catalog();
        let other = OtherChoice::enabled("OTHER_X");
        let mut state = SelectionState::new();
        state.toggle(rules(&other), Target::Choice(catalog.find("red").unwrap()), true);
        state.toggle(rules(&other), Target::Other, true);
        state.set_other_text("teal");
        state.toggle(rules(&other), Target::Other, false);

        let payload = serialize(&state, &other);
        assert_eq!(payload.other_entry(), None);

        let hydrated = hydrate(&payload, &catalog, &other, rules(&other));
        assert_eq!(hydrated.state.other_text(), "");
        assert_ne!(hydrated.state, state);
    }

    #[test]
    fn drops_unknown_entries() {
        let catalog = catalog();
        let other = OtherChoice::enabled("OTHER_X");
        let payload = AnswerPayload::from_entries(vec![
            AnswerEntry::choice("purple"),
            AnswerEntry::choice("red"),
            AnswerEntry::other("OTHER_Y", None),
        ]);

        let hydrated = hydrate(&payload, &catalog, &other, rules(&other));

        assert_eq!(hydrated.state.selected(), &[Choice::new("red", "Red")]);
        assert!(!hydrated.state.is_other_selected());
        assert_eq!(
            hydrated
                .dropped
                .iter()
                .map(|d| d.reason.clone())
                .collect::<Vec<_>>(),
            vec![MalformedReason::UnknownValue, MalformedReason::UnknownOtherMarker]
        );
    }

    #[test]
    fn drops_other_when_disabled() {
        let catalog = catalog();
        let other = OtherChoice::disabled();
        let payload = AnswerPayload::from_entries(vec![AnswerEntry::other("", None)]);

        let hydrated = hydrate(&payload, &catalog, &other, rules(&other));

        assert!(hydrated.state.is_empty());
        assert_eq!(hydrated.dropped[0].reason, MalformedReason::OtherDisabled);
    }

    #[test]
    fn inconsistent_payload_is_normalised() {
        let catalog = catalog();
        let other = OtherChoice::enabled("OTHER_X");
        let payload = AnswerPayload::from_entries(vec![
            AnswerEntry::choice("red"),
            AnswerEntry::choice("blue"),
        ]);

        let hydrated = hydrate(&payload, &catalog, &other, rules(&other));
        assert_eq!(hydrated.state.selected().len(), 1);
        assert_eq!(hydrated.state.selected()[0].value, "blue");
    }
}
