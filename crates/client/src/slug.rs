//! Dashboard slugs: validation and derivation from display names.
//!
//! A slug is lowercase ASCII letters, digits and single hyphens, never
//! starting or ending with a hyphen, at most [`MAX_SLUG_LEN`] characters.
//! Slugs are immutable once a dashboard exists; renaming means delete + create.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// Longest slug accepted.
pub const MAX_SLUG_LEN: usize = 128;

static SLUG_RE: OnceLock<Regex> = OnceLock::new();
static SEPARATOR_RE: OnceLock<Regex> = OnceLock::new();

fn slug_re() -> &'static Regex {
    SLUG_RE.get_or_init(|| {
        Regex::new(r"^[a-z0-9]([a-z0-9-]*[a-z0-9])?$")
            .expect("slug pattern is a compile-time constant with valid syntax")
    })
}

fn separator_re() -> &'static Regex {
    SEPARATOR_RE.get_or_init(|| {
        Regex::new(r"[^a-z0-9]+")
            .expect("separator pattern is a compile-time constant with valid syntax")
    })
}

/// A validated dashboard slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Validate an explicit slug.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidInput`] if the value is empty, too long or
    /// contains characters outside `[a-z0-9-]`.
    pub fn parse(value: &str) -> Result<Self> {
        if value.is_empty() {
            return Err(ClientError::InvalidInput(
                "dashboard slug must not be empty".to_string(),
            ));
        }
        if value.len() > MAX_SLUG_LEN {
            return Err(ClientError::InvalidInput(format!(
                "dashboard slug exceeds {MAX_SLUG_LEN} characters"
            )));
        }
        if !slug_re().is_match(value) {
            return Err(ClientError::InvalidInput(format!(
                "invalid dashboard slug '{value}': use lowercase letters, digits and hyphens"
            )));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Slug {
    type Error = ClientError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

/// Derive a slug from a display name.
///
/// Lowercases, collapses every run of non-alphanumeric characters into a
/// single `-` and trims hyphens from both ends. The result is truncated to
/// [`MAX_SLUG_LEN`].
///
/// # Errors
///
/// Returns [`ClientError::InvalidInput`] when nothing alphanumeric remains.
pub fn slugify(name: &str) -> Result<Slug> {
    let lowered = name.to_lowercase();
    let collapsed = separator_re().replace_all(&lowered, "-");
    let mut slug = collapsed.trim_matches('-').to_string();

    if slug.len() > MAX_SLUG_LEN {
        slug.truncate(MAX_SLUG_LEN);
        slug.truncate(slug.trim_end_matches('-').len());
    }

    if slug.is_empty() {
        return Err(ClientError::InvalidInput(format!(
            "cannot derive a dashboard slug from name '{name}'"
        )));
    }

    Slug::parse(&slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_slugify_examples() {
        assert_eq!(slugify("My Dashboard").unwrap().as_str(), "my-dashboard");
        assert_eq!(slugify("  Already-Slug  ").unwrap().as_str(), "already-slug");
        assert_eq!(slugify("CPU / Memory (p99)").unwrap().as_str(), "cpu-memory-p99");
        assert_eq!(slugify("snake_case_name").unwrap().as_str(), "snake-case-name");
        assert_eq!(slugify("Café Latency").unwrap().as_str(), "caf-latency");
    }

    #[test]
    fn test_slugify_empty_is_invalid_input() {
        for name in ["", "   ", "---", "!!!"] {
            assert!(
                matches!(slugify(name), Err(ClientError::InvalidInput(_))),
                "expected InvalidInput for {name:?}"
            );
        }
    }

    #[test]
    fn test_slugify_truncates_long_names() {
        let name = "a ".repeat(200);
        let slug = slugify(&name).unwrap();
        assert!(slug.as_str().len() <= MAX_SLUG_LEN);
        assert!(!slug.as_str().ends_with('-'));
    }

    #[test]
    fn valid_slugs() {
        for slug in ["cpu", "a", "my-dashboard-2", "x1"] {
            Slug::parse(slug).unwrap_or_else(|_| panic!("expected valid: {slug}"));
        }
    }

    #[test]
    fn invalid_slugs() {
        for slug in [
            "",
            "-leading",
            "trailing-",
            "has spaces",
            "UPPER",
            "a_b",
            "a/b",
            "../etc",
        ] {
            assert!(Slug::parse(slug).is_err(), "expected invalid: {slug}");
        }
    }

    #[test]
    fn test_slug_deserialize_validates() {
        assert!(serde_json::from_str::<Slug>("\"ok-slug\"").is_ok());
        assert!(serde_json::from_str::<Slug>("\"Not Ok\"").is_err());
    }

    proptest! {
        #[test]
        fn slugify_output_is_always_a_valid_slug(name in "\\PC{0,80}") {
            if let Ok(slug) = slugify(&name) {
                prop_assert!(Slug::parse(slug.as_str()).is_ok());
                prop_assert!(!slug.as_str().contains("--"));
            }
        }

        #[test]
        fn slugify_is_idempotent(name in "[A-Za-z0-9 _./-]{1,60}") {
            if let Ok(slug) = slugify(&name) {
                let again = slugify(slug.as_str()).unwrap();
                prop_assert_eq!(again, slug);
            }
        }
    }
}
