pub mod context;
pub mod requirements;

pub use context::PromptContext;
use promptgenius_core::{Choice, FormState, PromptGeniusError};
use tracing::debug;

/// Assemble the final prompt from a completed form.
///
/// Fails with `IncompleteForm` naming the first missing field instead of
/// rendering a blank label.
pub fn assemble_prompt(form: &FormState) -> Result<String, PromptGeniusError> {
    let ctx = PromptContext::from_form(form)?;
    debug!(
        output_type = ctx.output_type.as_str(),
        goal = ctx.goal.as_str(),
        tone = ctx.tone.as_str(),
        audience = ctx.audience.as_str(),
        "assembling prompt"
    );

    let mut prompt = String::new();
    ctx.append_preamble(&mut prompt);
    requirements::append_requirements(&mut prompt, &ctx);
    requirements::append_closing(&mut prompt);
    Ok(prompt)
}
