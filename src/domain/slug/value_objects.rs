use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::rules::{is_slug_char, slugify};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Human-readable title a slug is derived from. Any text is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Title(String);

impl Title {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Title> for String {
    fn from(value: Title) -> Self {
        value.0
    }
}

impl From<&str> for Title {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// URL-safe slug: only `[a-z0-9_-]`, never starting or ending with `-`.
/// May be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Derive a slug from a title. Infallible.
    pub fn from_title(title: &Title) -> Self {
        Self(slugify(title.as_str()))
    }

    /// Validate a slug supplied from outside, e.g. a hand-written permalink.
    pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if let Some(ch) = value.chars().find(|c| !is_slug_char(*c)) {
            return Err(DomainError::Validation(format!(
                "slug contains invalid character {ch:?}"
            )));
        }
        if value.starts_with('-') || value.ends_with('-') {
            return Err(DomainError::Validation(
                "slug cannot start or end with '-'".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

impl<'de> Deserialize<'de> for Slug {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(raw).map_err(serde::de::Error::custom)
    }
}
