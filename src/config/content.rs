//! Page content configuration
//!
//! Everything the page says lives here so the binary stays a rendering
//! engine: the brand line, the headline that reveals on scroll, feature
//! cards, copyable snippets, and footer links all come from config with
//! marquee's own copy as the default.

use serde::Deserialize;

/// One feature card on the page
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FeatureCard {
    pub title: String,
    pub blurb: String,
}

/// One copyable code snippet
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Snippet {
    /// Optional filename shown in the snippet header; the language tag
    /// is shown when absent
    pub label: Option<String>,
    pub language: String,
    pub code: String,
}

impl Snippet {
    /// Header text: filename if present, language tag otherwise
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.language)
    }
}

/// One navigation/footer link
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NavLink {
    pub label: String,
    pub url: String,
}

/// All page copy
#[derive(Debug, Clone, PartialEq)]
pub struct SiteContent {
    /// Static prefix of the brand line
    pub brand: String,
    /// Separator typed between brand and command, typically ":"
    pub separator: String,
    /// Commands cycled through by the typing animation
    pub commands: Vec<String>,
    /// Headline revealed word by word on first scroll into view
    pub headline: String,
    /// One-line subtitle under the headline
    pub tagline: String,
    pub features: Vec<FeatureCard>,
    pub snippets: Vec<Snippet>,
    pub links: Vec<NavLink>,
}

impl SiteContent {
    /// Suffixes fed to the typing animator: separator + command, so the
    /// separator is typed and deleted along with each command.
    pub fn suffixes(&self) -> Vec<String> {
        self.commands
            .iter()
            .map(|command| format!("{}{}", self.separator, command))
            .collect()
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            brand: "marquee".to_string(),
            separator: ":".to_string(),
            commands: vec![
                "init".to_string(),
                "build".to_string(),
                "ship".to_string(),
            ],
            headline: "Your product page, in the terminal".to_string(),
            tagline: "A landing page that types, reveals, and copies without a browser in sight."
                .to_string(),
            features: vec![
                FeatureCard {
                    title: "Typed brand".to_string(),
                    blurb: "The header types and deletes its command suffix on a loop, and pauses while the pointer rests on it.".to_string(),
                },
                FeatureCard {
                    title: "Scroll reveals".to_string(),
                    blurb: "Headlines fade in word by word the first time they scroll into view, once per visit.".to_string(),
                },
                FeatureCard {
                    title: "Copy-ready snippets".to_string(),
                    blurb: "Focus a snippet and yank it straight to the system clipboard.".to_string(),
                },
            ],
            snippets: vec![
                Snippet {
                    label: None,
                    language: "sh".to_string(),
                    code: "cargo install marquee\nmarquee".to_string(),
                },
                Snippet {
                    label: Some("config.toml".to_string()),
                    language: "toml".to_string(),
                    code: "theme = \"midnight\"\n\n[motion]\ntyping_ms = 60\ncycle_pause_ms = 5000".to_string(),
                },
            ],
            links: vec![
                NavLink {
                    label: "Docs".to_string(),
                    url: "https://docs.rs/marquee".to_string(),
                },
                NavLink {
                    label: "Crate".to_string(),
                    url: "https://crates.io/crates/marquee".to_string(),
                },
                NavLink {
                    label: "Source".to_string(),
                    url: "https://github.com/marquee-tui/marquee".to_string(),
                },
            ],
        }
    }
}

/// Content settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileContent {
    pub brand: Option<String>,
    pub separator: Option<String>,
    pub commands: Option<Vec<String>>,
    pub headline: Option<String>,
    pub tagline: Option<String>,
    /// Optional [[content.features]] tables; replaces the default set
    pub features: Option<Vec<FeatureCard>>,
    /// Optional [[content.snippets]] tables; replaces the default set
    pub snippets: Option<Vec<Snippet>>,
    /// Optional [[content.links]] tables; replaces the default set
    pub links: Option<Vec<NavLink>>,
}

impl SiteContent {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileContent>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            brand: file.brand.unwrap_or(defaults.brand),
            separator: file.separator.unwrap_or(defaults.separator),
            commands: file.commands.unwrap_or(defaults.commands),
            headline: file.headline.unwrap_or(defaults.headline),
            tagline: file.tagline.unwrap_or(defaults.tagline),
            features: file.features.unwrap_or(defaults.features),
            snippets: file.snippets.unwrap_or(defaults.snippets),
            links: file.links.unwrap_or(defaults.links),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffixes_include_separator() {
        let content = SiteContent::default();
        let suffixes = content.suffixes();
        assert_eq!(suffixes.len(), content.commands.len());
        for (suffix, command) in suffixes.iter().zip(&content.commands) {
            assert_eq!(suffix, &format!(":{command}"));
        }
    }

    #[test]
    fn test_snippet_label_falls_back_to_language() {
        let snippet = Snippet {
            label: None,
            language: "sh".to_string(),
            code: "echo hi".to_string(),
        };
        assert_eq!(snippet.display_label(), "sh");

        let named = Snippet {
            label: Some("install.sh".to_string()),
            language: "sh".to_string(),
            code: "echo hi".to_string(),
        };
        assert_eq!(named.display_label(), "install.sh");
    }

    #[test]
    fn test_from_file_merges_partial_content() {
        let file = FileContent {
            brand: Some("acme".to_string()),
            commands: Some(vec!["deploy".to_string()]),
            ..FileContent::default()
        };
        let content = SiteContent::from_file(Some(file));
        assert_eq!(content.brand, "acme");
        assert_eq!(content.commands, vec!["deploy"]);
        // Untouched fields keep their defaults.
        assert_eq!(content.separator, ":");
        assert!(!content.features.is_empty());
    }
}
