// src/domain/slug/services.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::slug::value_objects::SlugifyOptions;

/// Return `base` if it is not already taken, otherwise the first `base-N`
/// (starting at 1) that is absent from `existing`.
pub fn create_unique_slug<S: AsRef<str>>(base: &str, existing: &[S]) -> String {
    let taken = |candidate: &str| existing.iter().any(|slug| slug.as_ref() == candidate);

    let mut candidate = base.to_string();
    let mut counter = 1u64;
    while taken(&candidate) {
        candidate = format!("{base}-{counter}");
        counter += 1;
    }
    candidate
}

/// Domain service producing slugs for blog post routes.
pub struct BlogSlugService {
    generator: Arc<dyn SlugGenerator>,
}

impl BlogSlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    pub fn slugify(&self, text: &str, options: &SlugifyOptions) -> String {
        self.generator.slugify(text, options)
    }

    /// Slugify `title` with the blog post length limit, de-duplicating
    /// against `existing` when it is non-empty. An empty base stays empty.
    pub fn slugify_blog_post<S: AsRef<str>>(&self, title: &str, existing: &[S]) -> String {
        let base = self.generator.slugify(title, &SlugifyOptions::blog_post());
        if base.is_empty() || existing.is_empty() {
            return base;
        }
        create_unique_slug(&base, existing)
    }
}
