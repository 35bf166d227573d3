// src/application/dto/slugs.rs
use crate::domain::slug::Slug;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SlugDto {
    pub slug: String,
}

impl From<Slug> for SlugDto {
    fn from(value: Slug) -> Self {
        Self { slug: value.into() }
    }
}
