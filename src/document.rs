//! Documents and their named parts.
//!
//! A [`Document`] is an unordered collection of [`Part`]s. Part names are
//! expected to be unique within a document but nothing enforces it; see
//! [`Document::find_part`] for how duplicates are resolved.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A named, content-bearing subdivision of a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Part {
    pub name: String,
    #[serde(default)]
    pub content: String,
}

impl Part {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// An immutable set of parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Document {
    pub fn new(parts: impl IntoIterator<Item = Part>) -> Self {
        Self {
            parts: parts.into_iter().collect(),
        }
    }

    /// Locate the part called `name`.
    ///
    /// `None` means the document has no such part. When several parts share
    /// the name, which one is returned is unspecified; callers must not rely
    /// on it being the first.
    pub fn find_part(&self, name: &str) -> Option<&Part> {
        self.parts.iter().find(|part| part.name == name)
    }

    /// Names of all parts, in storage order.
    pub fn part_names(&self) -> Vec<&str> {
        self.parts.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Parse a document from its YAML data form:
    ///
    /// ```yaml
    /// parts:
    ///   - name: Introduction
    ///     content: Lorem ipsum dolor sit amet.
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let document: Document =
            serde_yaml::from_str(content).context("Failed to parse document")?;

        if let Some(part) = document.parts.iter().find(|p| p.name.trim().is_empty()) {
            anyhow::bail!(
                "Document contains a part with an empty name (content: {:?})",
                part.content
            );
        }

        Ok(document)
    }

    /// Load a document from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read document from {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid document {}", path.display()))
    }
}

impl FromIterator<Part> for Document {
    fn from_iter<I: IntoIterator<Item = Part>>(iter: I) -> Self {
        Self::new(iter)
    }
}
