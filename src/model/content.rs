//! Portfolio content: the static records the page is built from.
//!
//! Content is plain data loaded once at startup from TOML or JSON. The
//! builtin document ships inside the binary so the app always has
//! something to show.

use super::error::ContentError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

const BUILTIN: &str = include_str!("../../assets/portfolio.toml");

/// Page sections a highlight card can link to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Bento grid of highlight cards.
    Highlights,
    /// Tabbed about text.
    About,
    /// Project list; rows open the modal.
    Projects,
    /// Code snippet carousel.
    Snippets,
    /// Scrolling quote strip.
    Testimonials,
    /// Tech strip and certifications.
    Skills,
}

impl Section {
    /// Heading shown above the section.
    pub fn title(self) -> &'static str {
        match self {
            Section::Highlights => "Highlights",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Snippets => "Code",
            Section::Testimonials => "Testimonials",
            Section::Skills => "Skills",
        }
    }
}

/// Who the portfolio belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    /// Shown large in the hero.
    pub name: String,
    /// Job title under the name.
    pub role: String,
    /// One-line pitch under the typewriter.
    pub headline: String,
}

/// A bento card with a summary face and a detail face.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HighlightCard {
    /// Summary face heading.
    pub title: String,
    /// Summary face text.
    pub blurb: String,
    /// Detail face heading.
    pub detail_title: String,
    /// Detail face text.
    pub detail: String,
    /// Label of the call to action on the detail face.
    pub cta: String,
    /// Section the call to action navigates to.
    pub target: Section,
}

/// One tab of the about section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AboutTab {
    /// Stable key; must be unique.
    pub id: String,
    /// Text on the tab bar.
    pub label: String,
    /// Body heading.
    pub title: String,
    /// Body paragraph.
    pub description: String,
    /// Shown as `#tag` chips under the body.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A project row and the modal it opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    /// Row heading and modal title.
    pub title: String,
    /// One line under the title.
    pub summary: String,
    /// Shown as a badge in the modal.
    pub category: String,
    /// Technologies used.
    #[serde(default)]
    pub tech: Vec<String>,
    /// Markdown shown in the project modal.
    pub detail: String,
    /// Bullet list under the detail.
    #[serde(default)]
    pub achievements: Vec<String>,
    /// Marks client work that cannot be linked.
    #[serde(default)]
    pub confidential: bool,
}

/// An entry in the snippet carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodeSnippet {
    /// Shown in the carousel header.
    pub title: String,
    /// One line above the code.
    pub description: String,
    /// Syntax name or file extension used for highlighting.
    pub language: String,
    /// Shown next to the title.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Source text, highlighted by `language`.
    pub code: String,
}

/// A quote in the testimonial strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Testimonial {
    /// Quote text without quotation marks.
    pub quote: String,
    /// Who said it.
    pub author: String,
    /// Author's role and company.
    pub role: String,
}

/// A line in the skills section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Certification {
    /// Certificate name.
    pub name: String,
    /// Issuing organization.
    pub issuer: String,
    /// Date of issue, `YYYY-MM-DD` in the document.
    pub issued: NaiveDate,
}

/// The full content document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Portfolio {
    /// Hero block content.
    pub profile: Profile,
    /// Typewriter phrases, in order.
    #[serde(default)]
    pub phrases: Vec<String>,
    /// Cards in the highlights grid, in order.
    #[serde(default)]
    pub highlights: Vec<HighlightCard>,
    /// Tabs in the about section, in order.
    #[serde(default)]
    pub about: Vec<AboutTab>,
    /// Rows in the projects section.
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Carousel entries.
    #[serde(default)]
    pub snippets: Vec<CodeSnippet>,
    /// Quotes for the testimonial strip.
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    /// Names for the skills strip.
    #[serde(default)]
    pub tech_stack: Vec<String>,
    /// Certifications, newest first by convention.
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

/// Non-fatal content problems. The page still renders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentWarning {
    /// The phrase list is empty.
    #[error("no typewriter phrases; the headline animation stays empty")]
    NoPhrases,
    /// Two about tabs share an id.
    #[error("duplicate about tab id `{0}`; only the first is selectable")]
    DuplicateTabId(String),
    /// A section has no entries.
    #[error("section `{0}` is empty")]
    EmptySection(&'static str),
}

impl Portfolio {
    /// The document compiled into the binary.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_toml_str(BUILTIN, Path::new("<builtin>"))
    }

    /// Load a document, picking the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str, &Path) -> Result<Self, ContentError> = match ext.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => return Err(ContentError::UnsupportedFormat(path.to_path_buf())),
        };
        let text = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&text, path)
    }

    /// Parse a TOML document. `origin` is only used in errors.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self, ContentError> {
        toml::from_str(text).map_err(|e| ContentError::Parse {
            path: origin.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Parse a JSON document. `origin` is only used in errors.
    pub fn from_json_str(text: &str, origin: &Path) -> Result<Self, ContentError> {
        serde_json::from_str(text).map_err(|e| ContentError::Parse {
            path: origin.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Collect problems worth logging.
    pub fn validate(&self) -> Vec<ContentWarning> {
        let mut warnings = Vec::new();
        if self.phrases.is_empty() {
            warnings.push(ContentWarning::NoPhrases);
        }

        let mut seen = HashSet::new();
        for tab in &self.about {
            if !seen.insert(tab.id.as_str()) {
                warnings.push(ContentWarning::DuplicateTabId(tab.id.clone()));
            }
        }

        let sections: [(&'static str, bool); 5] = [
            ("highlights", self.highlights.is_empty()),
            ("about", self.about.is_empty()),
            ("projects", self.projects.is_empty()),
            ("snippets", self.snippets.is_empty()),
            ("testimonials", self.testimonials.is_empty()),
        ];
        warnings.extend(
            sections
                .into_iter()
                .filter(|(_, empty)| *empty)
                .map(|(name, _)| ContentWarning::EmptySection(name)),
        );
        warnings
    }

    /// About tab ids in display order, duplicates removed.
    pub fn tab_ids(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.about
            .iter()
            .filter(|t| seen.insert(t.id.as_str()))
            .map(|t| t.id.clone())
            .collect()
    }

    /// About tab with id `id`, if any.
    pub fn about_tab(&self, id: &str) -> Option<&AboutTab> {
        self.about.iter().find(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        phrases = ["Hi"]

        [profile]
        name = "Sam"
        role = "Engineer"
        headline = "Builds things"
    "#;

    #[test]
    fn builtin_document_parses_and_is_complete() {
        let portfolio = Portfolio::builtin().expect("builtin content must parse");

        assert!(!portfolio.phrases.is_empty());
        assert!(portfolio.validate().is_empty(), "{:?}", portfolio.validate());
    }

    #[test]
    fn minimal_document_defaults_missing_sections() {
        let p = Portfolio::from_toml_str(MINIMAL, Path::new("t.toml")).unwrap();

        assert_eq!(p.profile.name, "Sam");
        assert!(p.projects.is_empty());
        assert!(p
            .validate()
            .contains(&ContentWarning::EmptySection("projects")));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let text = format!("{MINIMAL}\nextra = 1\n");
        let err = Portfolio::from_toml_str(&text, Path::new("t.toml")).unwrap_err();
        assert!(matches!(err, ContentError::Parse { .. }));
    }

    #[test]
    fn json_documents_are_supported() {
        let json = r#"{
            "profile": {"name": "Sam", "role": "Engineer", "headline": "Hi"},
            "certifications": [
                {"name": "Cert", "issuer": "Org", "issued": "2024-03-01"}
            ]
        }"#;
        let p = Portfolio::from_json_str(json, Path::new("t.json")).unwrap();

        assert_eq!(
            p.certifications[0].issued,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert!(p.validate().contains(&ContentWarning::NoPhrases));
    }

    #[test]
    fn duplicate_tab_ids_warn_and_dedupe() {
        let text = format!(
            "{MINIMAL}\n{}",
            r#"
            [[about]]
            id = "a"
            label = "A"
            title = "A"
            description = "first"

            [[about]]
            id = "a"
            label = "A again"
            title = "A"
            description = "second"
            "#
        );
        let p = Portfolio::from_toml_str(&text, Path::new("t.toml")).unwrap();

        assert!(p
            .validate()
            .contains(&ContentWarning::DuplicateTabId("a".to_string())));
        assert_eq!(p.tab_ids(), vec!["a".to_string()]);
        assert_eq!(p.about_tab("a").map(|t| t.description.as_str()), Some("first"));
    }

    #[test]
    fn unsupported_extension_is_rejected_before_reading() {
        let err = Portfolio::from_path(Path::new("/nonexistent/site.yaml")).unwrap_err();
        assert!(matches!(err, ContentError::UnsupportedFormat(_)));
    }

    #[test]
    fn missing_file_reports_read_error() {
        let err = Portfolio::from_path(Path::new("/nonexistent/site.toml")).unwrap_err();
        assert!(matches!(err, ContentError::Read { .. }));
    }
}
