// src/application/commands/slugs/mod.rs
mod service;
mod slugify;

pub use service::SlugCommandService;
pub use slugify::{SlugifyTitlesCommand, SlugifyTitlesCommandBuilder};
