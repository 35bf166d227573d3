// src/application/ports/util.rs
use crate::domain::slug::SlugifyOptions;

pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str, options: &SlugifyOptions) -> String;
}
