use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use crate::config::SiteSettings;

const PORTFOLIO_FILE: &str = "portfolio.json";
pub const BUILD_YEAR: &str = env!("BUILD_YEAR");

static PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> = LazyLock::new(|| {
    let file = ContentAssets::get(PORTFOLIO_FILE).ok_or(ContentError::Missing(PORTFOLIO_FILE))?;
    let raw = std::str::from_utf8(&file.data).map_err(|e| ContentError::Parse(e.to_string()))?;
    Portfolio::from_json(raw)
});

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    Missing(&'static str),
    #[error("Couldn't parse content: {0}")]
    Parse(String),
    #[error("Skill level for {skill} is {level}, expected 0-100")]
    InvalidSkillLevel { skill: String, level: u8 },
    #[error("Content field is empty: {0}")]
    Empty(&'static str),
}

/// Everything the page renders. Sections never hard-code their copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub site: SiteSettings,
    pub profile: Profile,
    pub about: About,
    pub skills: Skills,
    pub experience: Experience,
    pub contact: Contact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub role: String,
    pub tagline: Vec<TaglineSpan>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaglineSpan {
    pub text: String,
    #[serde(default)]
    pub accent: Option<Accent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Primary,
    Secondary,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Primary => "text-primary font-semibold",
            Accent::Secondary => "text-secondary font-semibold",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: Icon,
    pub href: String,
    pub label: String,
}

impl SocialLink {
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Email,
    Phone,
    Location,
    Brain,
    Database,
    Code,
    Briefcase,
    GraduationCap,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Email => "✉️",
            Icon::Phone => "📞",
            Icon::Location => "📍",
            Icon::Brain => "🧠",
            Icon::Database => "🗄️",
            Icon::Code => "💻",
            Icon::Briefcase => "💼",
            Icon::GraduationCap => "🎓",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub quick_facts: Vec<QuickFact>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickFact {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highlight {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skills {
    pub categories: Vec<SkillCategory>,
    #[serde(default)]
    pub soft_skills: Vec<SoftSkill>,
    #[serde(default)]
    pub languages: Vec<SpokenLanguage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Percentage, 0-100.
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftSkill {
    pub name: String,
    #[serde(default)]
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Cyan,
    Purple,
    Green,
    Orange,
    Teal,
    Rose,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Cyan => "from-cyan-500/20 to-blue-500/20 border-cyan-500/40 text-cyan-300",
            Tone::Purple => "from-purple-500/20 to-pink-500/20 border-purple-500/40 text-purple-300",
            Tone::Green => "from-green-500/20 to-emerald-500/20 border-green-500/40 text-green-300",
            Tone::Orange => "from-orange-500/20 to-red-500/20 border-orange-500/40 text-orange-300",
            Tone::Teal => "from-teal-500/20 to-cyan-500/20 border-teal-500/40 text-teal-300",
            Tone::Rose => "from-rose-500/20 to-pink-500/20 border-rose-500/40 text-rose-300",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpokenLanguage {
    pub name: String,
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub education: Vec<Education>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub period: String,
    pub kind: String,
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub specialization: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub intro: String,
    pub methods: Vec<ContactMethod>,
    pub cta_email: String,
    pub owner: String,
    /// Copyright year for the footer; the build year when omitted.
    #[serde(default)]
    pub year: Option<u16>,
}

impl Contact {
    pub fn copyright_year(&self) -> String {
        self.year
            .map(|y| y.to_string())
            .unwrap_or_else(|| BUILD_YEAR.to_string())
    }

    pub fn cta_href(&self) -> String {
        format!("mailto:{}", self.cta_email)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMethod {
    pub kind: ContactKind,
    pub label: String,
    pub value: String,
    /// Overrides the value used in the link target, e.g. a dialable number.
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    Phone,
    Location,
}

impl ContactMethod {
    /// Link target for the card. Values are passed through untouched.
    pub fn href(&self) -> Option<String> {
        let target = self.link.as_deref().unwrap_or(&self.value);
        match self.kind {
            ContactKind::Email => Some(format!("mailto:{target}")),
            ContactKind::Phone => Some(format!("tel:{target}")),
            ContactKind::Location => None,
        }
    }

    pub fn icon(&self) -> Icon {
        match self.kind {
            ContactKind::Email => Icon::Email,
            ContactKind::Phone => Icon::Phone,
            ContactKind::Location => Icon::Location,
        }
    }
}

impl Portfolio {
    /// The portfolio compiled into the binary, parsed once per process.
    pub fn embedded() -> Result<&'static Portfolio, ContentError> {
        PORTFOLIO.as_ref().map_err(Clone::clone)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio =
            serde_json::from_str(raw).map_err(|e| ContentError::Parse(e.to_string()))?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.profile.name.trim().is_empty() {
            return Err(ContentError::Empty("profile.name"));
        }
        if self.skills.categories.is_empty() {
            return Err(ContentError::Empty("skills.categories"));
        }
        if self.experience.jobs.is_empty() && self.experience.education.is_empty() {
            return Err(ContentError::Empty("experience"));
        }
        if self.contact.methods.is_empty() {
            return Err(ContentError::Empty("contact.methods"));
        }
        for skill in self.skills.categories.iter().flat_map(|c| &c.skills) {
            if skill.level > 100 {
                return Err(ContentError::InvalidSkillLevel {
                    skill: skill.name.clone(),
                    level: skill.level,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(skills: &str, methods: &str) -> String {
        format!(
            r#"{{
                "profile": {{ "name": "Ada Example", "initials": "AE", "role": "Engineer",
                              "tagline": [{{ "text": "Builds " }}, {{ "text": "things", "accent": "primary" }}] }},
                "about": {{ "paragraphs": ["Hello"] }},
                "skills": {{ "categories": [{{ "category": "Lang", "skills": {skills} }}] }},
                "experience": {{ "jobs": [], "education": [{{ "degree": "BSc", "institution": "Uni",
                                  "period": "2020", "specialization": "CS" }}] }},
                "contact": {{ "intro": "Hi", "methods": {methods}, "cta_email": "ada@example.com",
                              "owner": "Ada Example", "year": 2030 }}
            }}"#
        )
    }

    #[test]
    fn test_embedded_content_is_valid() {
        let portfolio = Portfolio::embedded().expect("embedded content should parse");
        assert!(!portfolio.profile.name.is_empty());
        assert!(!portfolio.skills.categories.is_empty());
        assert!(portfolio
            .contact
            .methods
            .iter()
            .any(|m| m.kind == ContactKind::Email));
    }

    #[test]
    fn test_synthetic_fixture_parses_with_defaults() {
        let raw = fixture(
            r#"[{ "name": "Rust", "level": 90 }]"#,
            r#"[{ "kind": "email", "label": "Email", "value": "ada@example.com" }]"#,
        );
        let portfolio = Portfolio::from_json(&raw).unwrap();

        assert_eq!(portfolio.site, SiteSettings::default());
        assert!(portfolio.profile.socials.is_empty());
        assert_eq!(portfolio.profile.tagline[1].accent, Some(Accent::Primary));
        assert_eq!(portfolio.contact.copyright_year(), "2030");
    }

    #[test]
    fn test_skill_level_above_100_is_rejected() {
        let raw = fixture(
            r#"[{ "name": "Rust", "level": 120 }]"#,
            r#"[{ "kind": "email", "label": "Email", "value": "ada@example.com" }]"#,
        );
        assert_eq!(
            Portfolio::from_json(&raw).unwrap_err(),
            ContentError::InvalidSkillLevel {
                skill: "Rust".to_string(),
                level: 120
            }
        );
    }

    #[test]
    fn test_empty_contact_methods_are_rejected() {
        let raw = fixture(r#"[{ "name": "Rust", "level": 90 }]"#, "[]");
        assert_eq!(
            Portfolio::from_json(&raw).unwrap_err(),
            ContentError::Empty("contact.methods")
        );
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        assert!(matches!(
            Portfolio::from_json("{ not json"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_contact_hrefs() {
        let email = ContactMethod {
            kind: ContactKind::Email,
            label: "Email".to_string(),
            value: "ada@example.com".to_string(),
            link: None,
        };
        let phone = ContactMethod {
            kind: ContactKind::Phone,
            label: "Phone".to_string(),
            value: "+1 555 0100".to_string(),
            link: Some("5550100".to_string()),
        };
        let location = ContactMethod {
            kind: ContactKind::Location,
            label: "Location".to_string(),
            value: "Somewhere".to_string(),
            link: None,
        };

        assert_eq!(email.href().as_deref(), Some("mailto:ada@example.com"));
        assert_eq!(phone.href().as_deref(), Some("tel:5550100"));
        assert_eq!(location.href(), None);
        assert_eq!(location.icon(), Icon::Location);
    }

    #[test]
    fn test_copyright_year_falls_back_to_build_year() {
        let mut portfolio = Portfolio::embedded().unwrap().clone();
        portfolio.contact.year = None;
        assert_eq!(portfolio.contact.copyright_year(), BUILD_YEAR);
    }
}
