/// A titled block of about-page copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub body: &'static str,
}

/// Static content of the about page.
#[derive(Debug, Clone, Copy)]
pub struct AboutPage {
    pub title: &'static str,
    pub tagline: &'static str,
    pub mission: Section,
    pub features: &'static [Section],
    pub values_heading: &'static str,
    pub values: &'static [Section],
}

pub const PRODUCT_NAME: &str = "Prompt Genius Hub";

pub const ABOUT: AboutPage = AboutPage {
    title: "About Prompt Genius Hub",
    tagline: "Empowering creators with AI-powered prompt optimization and generation tools",
    mission: Section {
        title: "Our Mission",
        body: "At Prompt Genius Hub, we believe that the quality of your prompts directly impacts \
               the quality of AI-generated results. Our mission is to democratize access to \
               expert-level prompt engineering, helping creators, professionals, and enthusiasts \
               unlock the full potential of AI through better prompts.",
    },
    features: &[
        Section {
            title: "Smart Scoring",
            body: "AI-powered analysis that evaluates your prompts across multiple dimensions \
                   for optimal performance.",
        },
        Section {
            title: "Prompt Generation",
            body: "Create tailored prompts for any use case with our intelligent generation system.",
        },
        Section {
            title: "Community Driven",
            body: "Built by creators, for creators. Join our community of prompt engineers and \
                   AI enthusiasts.",
        },
    ],
    values_heading: "Our Values",
    values: &[
        Section {
            title: "Innovation",
            body: "We continuously push the boundaries of what's possible with AI prompt engineering.",
        },
        Section {
            title: "Quality",
            body: "Every feature is crafted with attention to detail and user experience in mind.",
        },
    ],
};

impl AboutPage {
    /// Plain-text rendering for the `about` subcommand.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n\n{}\n\n", self.title, self.tagline));
        out.push_str(&format!("{}\n\n{}\n\n", self.mission.title, self.mission.body));
        for feature in self.features {
            out.push_str(&format!("* {}: {}\n", feature.title, feature.body));
        }
        out.push_str(&format!("\n{}\n\n", self.values_heading));
        for value in self.values {
            out.push_str(&format!("* {}: {}\n", value.title, value.body));
        }
        out
    }
}
