//! Basic tests for the Choices derive macro

// We need to create a fake choice_step module for the macro to work
mod choice_step {
    pub use choice_step_types::*;
}

use choice_step::{AnswerEntry, AnswerPayload, Choices};
use choice_step_macro::Choices;

#[derive(Choices, Debug, PartialEq)]
enum Symptom {
    #[text("Cough")]
    #[value("cough")]
    Cough,

    #[text("Fever")]
    #[detail("Above 38°C")]
    Fever,

    #[text("None of these")]
    #[value("none")]
    #[exclusive]
    Nothing,
}

#[test]
fn test_catalog_follows_declaration_order() {
    let catalog = Symptom::catalog();

    let values: Vec<_> = catalog.iter().map(|c| c.value.as_str()).collect();
    assert_eq!(values, vec!["cough", "Fever", "none"]);

    assert_eq!(catalog.get(0).unwrap().text, "Cough");
    assert_eq!(catalog.get(1).unwrap().detail, "Above 38°C");
    assert!(catalog.get(2).unwrap().exclusive);
    assert!(!catalog.get(0).unwrap().exclusive);
}

#[test]
fn test_value_mapping() {
    assert_eq!(Symptom::Nothing.value(), "none");
    assert_eq!(Symptom::from_value("cough"), Some(Symptom::Cough));
    assert_eq!(Symptom::from_value("Fever"), Some(Symptom::Fever));
    assert_eq!(Symptom::from_value("sneeze"), None);
}

#[test]
fn test_selected_in_payload() {
    let payload = AnswerPayload::from_entries(vec![
        AnswerEntry::choice("Fever"),
        AnswerEntry::choice("retired"),
        AnswerEntry::choice("cough"),
        AnswerEntry::other("OTHER", Some("headache".to_string())),
    ]);

    assert_eq!(
        Symptom::selected_in(&payload),
        vec![Symptom::Fever, Symptom::Cough]
    );
}

#[derive(Choices, Debug)]
enum Plain {
    Yes,
    No,
}

#[test]
fn test_defaults_to_variant_name() {
    let catalog = Plain::catalog();
    assert_eq!(catalog.find("Yes").unwrap().text, "Yes");
    assert_eq!(Plain::No.value(), "No");
}
