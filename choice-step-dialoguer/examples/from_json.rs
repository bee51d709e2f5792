//! Step loaded from JSON
//!
//! Demonstrates:
//! - ChoiceStep::from_json with service defaults for the other option
//! - The search prompt shown for long catalogs
//!
//! Run with: cargo run --example from_json

use choice_step::{ChoiceBackend, ChoiceQuestion, ChoiceStep};
use choice_step_dialoguer::DialoguerBackend;

const STEP: &str = r#"{
    "identifier": "country",
    "question": "Which country do you live in?",
    "style": "singleChoice",
    "choices": [
        {"value": "at", "text": "Austria"},
        {"value": "be", "text": "Belgium"},
        {"value": "ca", "text": "Canada"},
        {"value": "de", "text": "Germany"},
        {"value": "dk", "text": "Denmark"},
        {"value": "es", "text": "Spain"},
        {"value": "fr", "text": "France"},
        {"value": "gb", "text": "United Kingdom"},
        {"value": "ie", "text": "Ireland"},
        {"value": "nl", "text": "Netherlands"},
        {"value": "us", "text": "United States"}
    ],
    "other": {"enabled": true, "value": "OTHER_COUNTRY", "exclusive": true},
    "optional": true
}"#;

fn main() -> anyhow::Result<()> {
    let step = ChoiceStep::from_json(STEP)?;
    let mut question = ChoiceQuestion::new(step);

    let payload = DialoguerBackend::plain().ask(&mut question)?;
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
