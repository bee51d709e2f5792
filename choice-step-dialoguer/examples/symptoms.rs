//! Symptoms example
//!
//! Demonstrates:
//! - #[derive(Choices)] with an #[exclusive] "none of these" option
//! - A mandatory free-text other option
//! - Re-opening the question with the stored answer
//!
//! Run with: cargo run --example symptoms

use choice_step::{ChoiceBackend, ChoiceQuestion, ChoiceStep, Choices, OtherChoice, QuestionStyle};
use choice_step_dialoguer::DialoguerBackend;
use tracing_subscriber::EnvFilter;

#[derive(Choices, Debug)]
enum Symptom {
    #[text("Cough")]
    #[value("cough")]
    Cough,

    #[text("Fever")]
    #[value("fever")]
    #[detail("38°C or higher")]
    Fever,

    #[text("Headache")]
    #[value("headache")]
    Headache,

    #[text("None of these")]
    #[value("none")]
    #[exclusive]
    Nothing,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .compact()
        .init();

    let step = ChoiceStep::new(
        "symptoms",
        "Which symptoms did you have this week?",
        QuestionStyle::MultipleChoice,
        Symptom::catalog(),
    )
    .with_title("Weekly check-in")
    .with_other(OtherChoice::enabled("OTHER").with_placeholder("describe it"));

    let backend = DialoguerBackend::new();

    let mut question = ChoiceQuestion::new(step.clone());
    let payload = backend.ask(&mut question)?;
    println!("Symptoms: {:?}", Symptom::selected_in(&payload));
    println!("{}", serde_json::to_string_pretty(&question.result())?);

    println!("Edit your answer:");
    let mut question = ChoiceQuestion::resume(step, &payload);
    let payload = backend.ask(&mut question)?;
    println!("{}", serde_json::to_string(&payload)?);

    Ok(())
}
