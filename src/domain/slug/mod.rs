// src/domain/slug/mod.rs
pub mod services;
pub mod value_objects;

pub use services::{BlogSlugService, create_unique_slug};
pub use value_objects::{BLOG_POST_MAX_LENGTH, Slug, SlugifyOptions};
