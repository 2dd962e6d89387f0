use promptgenius_core::{FormState, PromptGeniusError, WizardStep};
use promptgenius_prompts::assemble_prompt;
use tracing::info;

/// Outcome of an advance or retreat request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The step changed.
    Moved(WizardStep),
    /// Moved from the description step to the prompt step and assembled the prompt.
    Generated,
    /// The request was not allowed; nothing changed.
    Stayed,
}

/// Step pointer, form record and the generated prompt for one wizard run.
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    step: WizardStep,
    form: FormState,
    generated_prompt: Option<String>,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn generated_prompt(&self) -> Option<&str> {
        self.generated_prompt.as_deref()
    }

    pub fn can_advance(&self) -> bool {
        self.form.can_advance(self.step)
    }

    /// Move forward one step if the current step is complete. Leaving the
    /// description step assembles the prompt; if that fails the step does
    /// not change.
    pub fn advance(&mut self) -> Result<Transition, PromptGeniusError> {
        if !self.can_advance() {
            return Ok(Transition::Stayed);
        }
        let Some(next) = self.step.next() else {
            return Ok(Transition::Stayed);
        };

        if next == WizardStep::Prompt {
            let prompt = assemble_prompt(&self.form)?;
            info!("generated prompt ({} chars)", prompt.len());
            self.generated_prompt = Some(prompt);
            self.step = next;
            return Ok(Transition::Generated);
        }

        info!("wizard advanced to step {}", next.number());
        self.step = next;
        Ok(Transition::Moved(next))
    }

    /// Move back one step unless already on the first.
    pub fn retreat(&mut self) -> Transition {
        match self.step.prev() {
            Some(prev) => {
                info!("wizard back to step {}", prev.number());
                self.step = prev;
                Transition::Moved(prev)
            }
            None => Transition::Stayed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptgenius_core::{Audience, Goal, OutputType, Tone};

    fn fill(wizard: &mut Wizard) {
        let form = wizard.form_mut();
        form.output_type = Some(OutputType::Video);
        form.goal = Some(Goal::Educate);
        form.tone = Some(Tone::Creative);
        form.audience = Some(Audience::General);
        form.description = "explainer on tides".into();
    }

    #[test]
    fn starts_on_step_one_without_prompt() {
        let wizard = Wizard::new();
        assert_eq!(wizard.step().number(), 1);
        assert!(wizard.generated_prompt().is_none());
        assert!(!wizard.can_advance());
    }

    #[test]
    fn advance_is_gated() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.advance(), Ok(Transition::Stayed));
        wizard.form_mut().output_type = Some(OutputType::Chat);
        assert_eq!(wizard.advance(), Ok(Transition::Moved(WizardStep::Details)));
        assert_eq!(wizard.advance(), Ok(Transition::Stayed));
        assert_eq!(wizard.step(), WizardStep::Details);
    }

    #[test]
    fn full_run_generates_prompt() {
        let mut wizard = Wizard::new();
        fill(&mut wizard);
        assert!(matches!(wizard.advance(), Ok(Transition::Moved(_))));
        assert!(matches!(wizard.advance(), Ok(Transition::Moved(_))));
        assert_eq!(wizard.advance(), Ok(Transition::Generated));
        assert_eq!(wizard.step(), WizardStep::Prompt);
        let prompt = wizard.generated_prompt().unwrap();
        assert!(prompt.contains("video content specialist"));
        assert!(prompt.contains("explainer on tides"));
        assert_eq!(wizard.advance(), Ok(Transition::Stayed));
    }

    #[test]
    fn retreat_stops_at_first_step() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.retreat(), Transition::Stayed);
        wizard.form_mut().output_type = Some(OutputType::Image);
        wizard.advance().unwrap();
        assert_eq!(wizard.retreat(), Transition::Moved(WizardStep::OutputType));
        assert_eq!(wizard.retreat(), Transition::Stayed);
    }

    #[test]
    fn regenerates_after_going_back() {
        let mut wizard = Wizard::new();
        fill(&mut wizard);
        for _ in 0..3 {
            wizard.advance().unwrap();
        }
        wizard.retreat();
        wizard.form_mut().description = "second draft".into();
        assert_eq!(wizard.advance(), Ok(Transition::Generated));
        assert!(wizard.generated_prompt().unwrap().contains("second draft"));
    }

    #[test]
    fn step_stays_in_range_under_any_sequence() {
        let mut wizard = Wizard::new();
        fill(&mut wizard);
        // Deterministic pseudo-random walk over advance/retreat.
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            if seed % 3 == 0 {
                wizard.retreat();
            } else {
                wizard.advance().unwrap();
            }
            let n = wizard.step().number();
            assert!((1..=4).contains(&n));
        }
    }
}
