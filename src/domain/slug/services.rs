// src/domain/slug/services.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::slug::value_objects::{Slug, Title};

/// Domain service turning titles into slugs through the injected generator.
pub struct SlugService {
    generator: Arc<dyn SlugGenerator>,
}

impl SlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    /// Produce the slug for `title`. Empty slugs are returned as-is; no
    /// fallback or uniqueness suffix is added.
    pub fn slug_for(&self, title: &Title) -> Slug {
        let raw = self.generator.slugify(title.as_str());
        // Foreign generators still have to honour the Slug invariant.
        let slug = Slug::parse(raw.clone()).unwrap_or_else(|err| {
            tracing::warn!(error = %err, raw = %raw, "generator produced an invalid slug; renormalising");
            Slug::from_title(&Title::new(raw))
        });

        if slug.is_empty() {
            tracing::warn!(title = %title, "title produced an empty slug");
        } else {
            tracing::debug!(title = %title, slug = %slug, "generated slug");
        }
        slug
    }
}
