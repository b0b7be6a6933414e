// src/application/commands/slugs/service.rs
use std::sync::Arc;

use crate::domain::slug::SlugService;

pub struct SlugCommandService {
    pub(super) slug_service: Arc<SlugService>,
}

impl SlugCommandService {
    pub fn new(slug_service: Arc<SlugService>) -> Self {
        Self { slug_service }
    }
}
