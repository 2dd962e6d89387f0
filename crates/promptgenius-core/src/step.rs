use std::fmt;

/// Position in the four-step wizard. Only these four values exist, so the
/// step number can never leave 1..=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum WizardStep {
    #[default]
    OutputType,
    Details,
    Description,
    Prompt,
}

impl WizardStep {
    pub const ALL: &[WizardStep] = &[
        WizardStep::OutputType,
        WizardStep::Details,
        WizardStep::Description,
        WizardStep::Prompt,
    ];

    pub const COUNT: u8 = 4;

    pub fn number(&self) -> u8 {
        match self {
            WizardStep::OutputType => 1,
            WizardStep::Details => 2,
            WizardStep::Description => 3,
            WizardStep::Prompt => 4,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(WizardStep::OutputType),
            2 => Some(WizardStep::Details),
            3 => Some(WizardStep::Description),
            4 => Some(WizardStep::Prompt),
            _ => None,
        }
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn prev(&self) -> Option<Self> {
        Self::from_number(self.number().saturating_sub(1))
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, WizardStep::Prompt)
    }

    pub fn heading(&self) -> &'static str {
        match self {
            WizardStep::OutputType => "What type of output do you need?",
            WizardStep::Details => "Tell us more about your needs",
            WizardStep::Description => "Describe your specific needs",
            WizardStep::Prompt => "Your Optimized Prompt",
        }
    }

    pub fn subheading(&self) -> &'static str {
        match self {
            WizardStep::OutputType => "Choose the category that best matches your goal",
            WizardStep::Details => "Help us customize the perfect prompt for you",
            WizardStep::Description => "Provide context to help us create the perfect prompt",
            WizardStep::Prompt => "Here's your custom-generated prompt ready to use",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} of {}", self.number(), Self::COUNT)
    }
}
