//! About page prose.
//!
//! The biography is fixed content: it is compiled in and only replaced when
//! the site configuration carries an `[about]` section.

use serde::{Deserialize, Serialize};

const DEFAULT_HEADING: &str = "About";

const DEFAULT_PARAGRAPHS: [&str; 3] = [
    "Hi, I'm a Software Engineering Graduate student at the University of Alberta. \
     I like to blog about projects I'm working on, and things I'm learning. \
     My interests include software development, AI/ML, and robotics.",
    "I am currently an incoming Master's student in Software Engineering & Intelligent Systems. \
     I would like to find a technical role where I can learn more about software development practices.",
    "I have completed prior internships in industry and have been previously employed as a \
     research assistant.",
];

const DEFAULT_PROFILE_URL: &str = "https://www.linkedin.com/in/jyotirsai/";

/// Content of the About page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutContent {
    /// Page heading.
    pub heading: String,

    /// Biography paragraphs, rendered in order.
    pub paragraphs: Vec<String>,

    /// Outbound link to an external profile.
    pub profile: ProfileLink,
}

/// A sentence wrapping a link to an external profile.
///
/// Rendered as `{lead} <a href="{url}">{label}</a> {trail}` at the end of the
/// last biography paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileLink {
    pub lead: String,
    pub label: String,
    pub url: String,
    pub trail: String,
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            heading: DEFAULT_HEADING.to_string(),
            paragraphs: DEFAULT_PARAGRAPHS.iter().map(|p| (*p).to_string()).collect(),
            profile: ProfileLink::default(),
        }
    }
}

impl Default for ProfileLink {
    fn default() -> Self {
        Self {
            lead: "Please visit my".to_string(),
            label: "linkedin".to_string(),
            url: DEFAULT_PROFILE_URL.to_string(),
            trail: "to learn more.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_biography() {
        let about = AboutContent::default();
        assert_eq!(about.heading, "About");
        assert_eq!(about.paragraphs.len(), 3);
        assert!(about.paragraphs[0].starts_with("Hi, I'm a Software Engineering"));
        assert!(about.paragraphs.iter().all(|p| !p.contains("  ")));
        assert_eq!(about.profile.url, "https://www.linkedin.com/in/jyotirsai/");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let about: AboutContent = toml::from_str(r#"heading = "Hello""#).unwrap();
        assert_eq!(about.heading, "Hello");
        assert_eq!(about.paragraphs, AboutContent::default().paragraphs);
        assert_eq!(about.profile, ProfileLink::default());
    }

    #[test]
    fn test_profile_override() {
        let about: AboutContent = toml::from_str(
            r#"
[profile]
url = "https://example.com/me"
"#,
        )
        .unwrap();
        assert_eq!(about.profile.url, "https://example.com/me");
        assert_eq!(about.profile.label, "linkedin");
    }
}
