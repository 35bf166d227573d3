// src/domain/slug/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Maximum slug length used for blog post routes.
pub const BLOG_POST_MAX_LENGTH: usize = 60;

static SLUG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("slug grammar regex must compile")
});

/// Tuning knobs for slug generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugifyOptions {
    /// Upper bound on the slug length in characters. `0` disables truncation.
    pub max_length: usize,
    /// Re-applies the alphanumeric filter after trimming. The default pass
    /// already removes the same characters, so this changes nothing today.
    pub strict: bool,
}

impl SlugifyOptions {
    pub const fn blog_post() -> Self {
        Self {
            max_length: BLOG_POST_MAX_LENGTH,
            strict: false,
        }
    }

    #[must_use]
    pub const fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl Default for SlugifyOptions {
    fn default() -> Self {
        Self::blog_post()
    }
}

/// A non-empty, URL-safe identifier: lowercase ASCII letters and digits
/// separated by single hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if !SLUG_PATTERN.is_match(&value) {
            return Err(DomainError::Validation(format!(
                "slug `{value}` must contain only lowercase letters, digits and single hyphens"
            )));
        }
        Ok(Self(value))
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

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}
