//! The four fixed lookup tables the wizard picks from.
//!
//! Each table is an enum whose variants are listed in display order by
//! `Choice::ALL`. The serde form of a variant is its id.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PromptGeniusError;

/// A selectable entry in one of the lookup tables.
pub trait Choice: Copy + Eq + fmt::Debug + 'static {
    /// Table name, used in error messages.
    const TABLE: &'static str;

    /// Every entry, in display order.
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn label(&self) -> &'static str;

    /// Resolve an id to its entry. Unknown ids are an error, never a blank label.
    fn from_id(id: &str) -> Result<Self, PromptGeniusError> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == id)
            .ok_or_else(|| PromptGeniusError::UnknownOption {
                table: Self::TABLE,
                id: id.to_string(),
            })
    }

    /// Position of this entry in `ALL`.
    fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputType {
    Image,
    Ui,
    Chat,
    Research,
    Video,
}

impl OutputType {
    /// One-line summary shown under the label on the first step.
    pub fn description(&self) -> &'static str {
        match self {
            OutputType::Image => "Create visual content, artwork, or graphics",
            OutputType::Ui => "Design interfaces, layouts, or components",
            OutputType::Chat => "Build chatbots or dialogue systems",
            OutputType::Research => "Gather information and insights",
            OutputType::Video => "Create video scripts or concepts",
        }
    }
}

impl Choice for OutputType {
    const TABLE: &'static str = "output type";

    const ALL: &'static [OutputType] = &[
        OutputType::Image,
        OutputType::Ui,
        OutputType::Chat,
        OutputType::Research,
        OutputType::Video,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            OutputType::Image => "image",
            OutputType::Ui => "ui",
            OutputType::Chat => "chat",
            OutputType::Research => "research",
            OutputType::Video => "video",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            OutputType::Image => "Image Generation",
            OutputType::Ui => "UI/UX Design",
            OutputType::Chat => "Conversational AI",
            OutputType::Research => "Research & Analysis",
            OutputType::Video => "Video Content",
        }
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Create,
    Improve,
    Analyze,
    Solve,
    Educate,
}

impl Choice for Goal {
    const TABLE: &'static str = "goal";

    const ALL: &'static [Goal] = &[
        Goal::Create,
        Goal::Improve,
        Goal::Analyze,
        Goal::Solve,
        Goal::Educate,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Goal::Create => "create",
            Goal::Improve => "improve",
            Goal::Analyze => "analyze",
            Goal::Solve => "solve",
            Goal::Educate => "educate",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Goal::Create => "Create something new",
            Goal::Improve => "Improve existing content",
            Goal::Analyze => "Analyze and understand",
            Goal::Solve => "Solve a problem",
            Goal::Educate => "Educate or teach",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Professional,
    Casual,
    Creative,
    Technical,
    Persuasive,
}

impl Choice for Tone {
    const TABLE: &'static str = "tone";

    const ALL: &'static [Tone] = &[
        Tone::Professional,
        Tone::Casual,
        Tone::Creative,
        Tone::Technical,
        Tone::Persuasive,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Creative => "creative",
            Tone::Technical => "technical",
            Tone::Persuasive => "persuasive",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Casual => "Casual & Friendly",
            Tone::Creative => "Creative & Artistic",
            Tone::Technical => "Technical & Detailed",
            Tone::Persuasive => "Persuasive & Compelling",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    General,
    Professionals,
    Students,
    Experts,
    Beginners,
}

impl Choice for Audience {
    const TABLE: &'static str = "audience";

    const ALL: &'static [Audience] = &[
        Audience::General,
        Audience::Professionals,
        Audience::Students,
        Audience::Experts,
        Audience::Beginners,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Audience::General => "general",
            Audience::Professionals => "professionals",
            Audience::Students => "students",
            Audience::Experts => "experts",
            Audience::Beginners => "beginners",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Audience::General => "General Public",
            Audience::Professionals => "Industry Professionals",
            Audience::Students => "Students & Learners",
            Audience::Experts => "Subject Matter Experts",
            Audience::Beginners => "Beginners & Newcomers",
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
