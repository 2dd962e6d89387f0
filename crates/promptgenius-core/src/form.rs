use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{Audience, Choice, Goal, OutputType, Tone};
use crate::error::PromptGeniusError;
use crate::step::WizardStep;

/// One of the five inputs the wizard collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    OutputType,
    Goal,
    Tone,
    Audience,
    Description,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::OutputType => "output_type",
            Field::Goal => "goal",
            Field::Tone => "tone",
            Field::Audience => "audience",
            Field::Description => "description",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the user has entered so far. Selections start unset and the
/// description starts empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    pub output_type: Option<OutputType>,
    pub goal: Option<Goal>,
    pub tone: Option<Tone>,
    pub audience: Option<Audience>,
    pub description: String,
}

impl FormState {
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Set a field from its string id. The description accepts any text;
    /// the four selections reject ids missing from their table and leave
    /// the form unchanged.
    pub fn set_by_id(&mut self, field: Field, id: &str) -> Result<(), PromptGeniusError> {
        match field {
            Field::OutputType => self.output_type = Some(OutputType::from_id(id)?),
            Field::Goal => self.goal = Some(Goal::from_id(id)?),
            Field::Tone => self.tone = Some(Tone::from_id(id)?),
            Field::Audience => self.audience = Some(Audience::from_id(id)?),
            Field::Description => self.description = id.to_string(),
        }
        Ok(())
    }

    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }

    /// Whether the inputs gathered on `step` are complete enough to move on.
    /// The last step never advances.
    pub fn can_advance(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::OutputType => self.output_type.is_some(),
            WizardStep::Details => {
                self.goal.is_some() && self.tone.is_some() && self.audience.is_some()
            }
            WizardStep::Description => self.has_description(),
            WizardStep::Prompt => false,
        }
    }

    /// First field still missing, in wizard order.
    pub fn first_missing(&self) -> Option<Field> {
        if self.output_type.is_none() {
            Some(Field::OutputType)
        } else if self.goal.is_none() {
            Some(Field::Goal)
        } else if self.tone.is_none() {
            Some(Field::Tone)
        } else if self.audience.is_none() {
            Some(Field::Audience)
        } else if !self.has_description() {
            Some(Field::Description)
        } else {
            None
        }
    }

    pub fn is_complete(&self) -> bool {
        self.first_missing().is_none()
    }
}
