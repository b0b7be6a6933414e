//! Turn page titles into URL-safe slugs.
//!
//! The core is [`slugify`]; the remaining modules wrap it in value objects,
//! a small application layer and an environment-driven configuration used by
//! the `site-slug` binary.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use domain::slug::{Slug, Title, slugify};
