// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{commands::slugs::SlugCommandService, ports::util::SlugGenerator},
    domain::slug::SlugService,
};

pub struct ApplicationServices {
    pub slug_commands: Arc<SlugCommandService>,
    slug_service: Arc<SlugService>,
}

impl ApplicationServices {
    pub fn new(slugger: Arc<dyn SlugGenerator>) -> Self {
        let slug_service = Arc::new(SlugService::new(Arc::clone(&slugger)));
        let slug_commands = Arc::new(SlugCommandService::new(Arc::clone(&slug_service)));

        Self {
            slug_commands,
            slug_service,
        }
    }

    pub fn slug_service(&self) -> Arc<SlugService> {
        Arc::clone(&self.slug_service)
    }
}
