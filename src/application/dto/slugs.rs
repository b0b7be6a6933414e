// src/application/dto/slugs.rs
use crate::domain::slug::{Slug, Title};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlugDto {
    pub title: String,
    pub slug: String,
}

impl SlugDto {
    pub fn new(title: Title, slug: Slug) -> Self {
        Self {
            title: title.into(),
            slug: slug.into_inner(),
        }
    }
}
