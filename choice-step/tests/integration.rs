//! Integration tests for choice-step

use choice_step::{
    AnswerEntry, ChoiceBackend, ChoiceQuestion, ChoiceStep, Choices, GateState, OtherChoice,
    QuestionStyle, RequiredStep, TestBackend, TestBackendError,
};

#[derive(Choices, Debug, PartialEq)]
enum Colour {
    #[text("Red")]
    #[value("red")]
    Red,

    #[text("Blue")]
    #[value("blue")]
    #[exclusive]
    Blue,

    #[text("Green")]
    #[value("green")]
    Green,
}

fn colours(style: QuestionStyle) -> ChoiceStep {
    ChoiceStep::new("colours", "Which colours?", style, Colour::catalog())
}

#[test]
fn test_multiple_choice_with_test_backend() {
    let mut question = ChoiceQuestion::new(colours(QuestionStyle::MultipleChoice));

    let payload = TestBackend::new()
        .select("green")
        .select("red")
        .advance()
        .ask(&mut question)
        .unwrap();

    assert_eq!(
        Colour::selected_in(&payload),
        vec![Colour::Green, Colour::Red]
    );
}

#[test]
fn test_exclusive_choice_through_backend() {
    let mut question = ChoiceQuestion::new(colours(QuestionStyle::MultipleChoice));

    let payload = TestBackend::new()
        .select("blue")
        .select("red")
        .deselect("red")
        .select("blue")
        .advance()
        .ask(&mut question)
        .unwrap();

    assert_eq!(Colour::selected_in(&payload), vec![Colour::Blue]);
}

#[test]
fn test_mandatory_other_needs_acknowledge_and_text() {
    let step =
        colours(QuestionStyle::MultipleChoice).with_other(OtherChoice::enabled("OTHER_X"));

    let mut question = ChoiceQuestion::new(step.clone());
    let result = TestBackend::new()
        .select_other()
        .advance()
        .ask(&mut question);
    assert!(matches!(result, Err(TestBackendError::Blocked(_))));

    let mut question = ChoiceQuestion::new(step);
    let payload = TestBackend::new()
        .select_other()
        .advance()
        .acknowledge()
        .other_text("  my answer ")
        .advance()
        .ask(&mut question)
        .unwrap();

    assert_eq!(
        payload.entries(),
        &[AnswerEntry::other("OTHER_X", Some("my answer".to_string()))]
    );
}

#[test]
fn test_search_then_tap_row() {
    let mut question = ChoiceQuestion::new(colours(QuestionStyle::SingleChoice));

    let payload = TestBackend::new()
        .search("EE")
        .tap_row(0, true)
        .end_search()
        .advance()
        .ask(&mut question)
        .unwrap();

    assert_eq!(Colour::selected_in(&payload), vec![Colour::Green]);
}

#[test]
fn test_unknown_value_is_an_error() {
    let mut question = ChoiceQuestion::new(colours(QuestionStyle::SingleChoice));

    let result = TestBackend::new().select("purple").advance().ask(&mut question);
    assert!(matches!(result, Err(TestBackendError::Catalog(_))));
}

#[test]
fn test_skip_submits_empty_payload() {
    let mut question = ChoiceQuestion::new(colours(QuestionStyle::MultipleChoice).optional());

    let payload = TestBackend::new()
        .select("red")
        .skip()
        .ask(&mut question)
        .unwrap();

    assert!(payload.is_empty());
    assert!(question.state().is_empty());
}

#[test]
fn test_skip_on_required_question_is_refused() {
    let mut question = ChoiceQuestion::new(colours(QuestionStyle::MultipleChoice));

    let result = TestBackend::new().select("red").skip().ask(&mut question);
    assert!(matches!(
        result,
        Err(TestBackendError::Required(RequiredStep { ref identifier })) if identifier == "colours"
    ));
    assert_eq!(question.gate(), GateState::Idle);
    assert_eq!(Colour::selected_in(&question.payload()), vec![Colour::Red]);
}

#[test]
fn test_select_other_without_other_option() {
    let mut question = ChoiceQuestion::new(colours(QuestionStyle::MultipleChoice));

    let payload = TestBackend::new()
        .select("green")
        .select_other()
        .other_text("ignored")
        .advance()
        .ask(&mut question)
        .unwrap();

    assert_eq!(payload.len(), 1);
    assert_eq!(payload.other_entry(), None);
    assert!(!question.is_other_selected());
}

#[test]
fn test_script_without_advance() {
    let mut question = ChoiceQuestion::new(colours(QuestionStyle::SingleChoice));

    let result = TestBackend::new().select("red").ask(&mut question);
    assert!(matches!(result, Err(TestBackendError::NotAdvanced)));
}

#[test]
fn test_result_json_for_submission() {
    let step = colours(QuestionStyle::MultipleChoice)
        .with_other(OtherChoice::enabled("OTHER_X").optional());
    let mut question = ChoiceQuestion::new(step);

    TestBackend::new()
        .select("red")
        .select_other()
        .advance()
        .ask(&mut question)
        .unwrap();

    let json = serde_json::to_value(question.result()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "identifier": "colours",
            "questionType": "multipleChoice",
            "answers": ["red", {"other": "OTHER_X"}]
        })
    );
}
