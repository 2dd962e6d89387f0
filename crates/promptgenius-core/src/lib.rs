pub mod about;
pub mod catalog;
pub mod error;
pub mod form;
pub mod step;

pub use catalog::{Audience, Choice, Goal, OutputType, Tone};
pub use error::PromptGeniusError;
pub use form::{Field, FormState};
pub use step::WizardStep;
