//! # choice-step-dialoguer
//!
//! Dialoguer backend for choice-step.
//!
//! This crate presents a choice question on the command line using the
//! `dialoguer` library: a select list or checkbox list for the options, a
//! text prompt for the other option, and a search prompt for long catalogs.
//!
//! ## Example
//!
//! ```rust,ignore
//! use choice_step::{ChoiceBackend, ChoiceQuestion, ChoiceStep};
//! use choice_step_dialoguer::DialoguerBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let step = ChoiceStep::from_json(include_str!("step.json"))?;
//!     let mut question = ChoiceQuestion::new(step);
//!     let payload = DialoguerBackend::new().ask(&mut question)?;
//!     println!("{}", serde_json::to_string(&payload)?);
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{DialoguerBackend, DialoguerError};
