use promptgenius_core::{Audience, Choice, Field, FormState, Goal, OutputType, PromptGeniusError, Tone};

/// A form with every selection resolved, ready to render.
#[derive(Debug, Clone)]
pub struct PromptContext {
    pub output_type: OutputType,
    pub goal: Goal,
    pub tone: Tone,
    pub audience: Audience,
    pub description: String,
}

impl PromptContext {
    pub fn from_form(form: &FormState) -> Result<Self, PromptGeniusError> {
        if let Some(field) = form.first_missing() {
            return Err(PromptGeniusError::IncompleteForm(field));
        }
        Ok(Self {
            output_type: form
                .output_type
                .ok_or(PromptGeniusError::IncompleteForm(Field::OutputType))?,
            goal: form.goal.ok_or(PromptGeniusError::IncompleteForm(Field::Goal))?,
            tone: form.tone.ok_or(PromptGeniusError::IncompleteForm(Field::Tone))?,
            audience: form
                .audience
                .ok_or(PromptGeniusError::IncompleteForm(Field::Audience))?,
            description: form.description.clone(),
        })
    }

    pub fn output_type_label(&self) -> String {
        self.output_type.label().to_lowercase()
    }

    pub fn goal_label(&self) -> String {
        self.goal.label().to_lowercase()
    }

    pub fn tone_label(&self) -> String {
        self.tone.label().to_lowercase()
    }

    pub fn audience_label(&self) -> String {
        self.audience.label().to_lowercase()
    }

    /// Render the role framing sentence and the user's context.
    pub fn append_preamble(&self, prompt: &mut String) {
        prompt.push_str(&format!(
            "Act as an expert {} specialist. Your task is to {} for {}. \n\n",
            self.output_type_label(),
            self.goal_label(),
            self.audience_label(),
        ));
        prompt.push_str(&format!("Context: {}\n\n", self.description));
    }
}
