//! Static home-page content
//!
//! Typed records for the hero, about, projects, skills and contact sections.
//! Loaded once at startup from embedded TOML (user-overridable the same way
//! as the catalog) and treated as read-only by everything downstream.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const DEFAULT_CONTENT: &str = include_str!("../defaults/content.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct Hero {
    pub name: String,
    pub tagline: String,
    pub intro: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct About {
    pub heading: String,
    pub paragraphs: Vec<String>,
}

/// One project card. `internal` projects route inside the app (the gallery)
/// instead of pointing at an external demo.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub link: String,
    #[serde(default)]
    pub internal: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Social {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Footer {
    pub text: String,
}

/// Everything the home view renders.
#[derive(Debug, Clone, Deserialize)]
pub struct HomeContent {
    pub hero: Hero,
    pub about: About,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub socials: Vec<Social>,
    pub footer: Footer,
}

impl HomeContent {
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse content TOML")
    }

    pub fn embedded() -> Result<Self> {
        Self::parse(DEFAULT_CONTENT).context("Embedded default content is invalid")
    }

    /// Load user content if present, embedded default otherwise. Unusable
    /// user files degrade to the default with a warning.
    pub fn load(user_path: &Path) -> Result<Self> {
        if user_path.exists() {
            match fs::read_to_string(user_path)
                .map_err(anyhow::Error::from)
                .and_then(|text| Self::parse(&text))
            {
                Ok(content) => return Ok(content),
                Err(e) => {
                    tracing::warn!(
                        path = ?user_path,
                        error = %e,
                        "User content unusable, falling back to embedded default"
                    );
                }
            }
        }
        Self::embedded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_parses() {
        let content = HomeContent::embedded().unwrap();
        assert!(!content.hero.name.is_empty());
        assert!(!content.about.paragraphs.is_empty());
        assert!(!content.skills.is_empty());
        assert!(!content.socials.is_empty());
    }

    #[test]
    fn test_embedded_content_has_internal_gallery_project() {
        let content = HomeContent::embedded().unwrap();
        let internal: Vec<_> = content.projects.iter().filter(|p| p.internal).collect();
        assert_eq!(internal.len(), 1);
        assert_eq!(internal[0].link, "gallery");
    }
}
