pub mod rules;
pub mod services;
pub mod value_objects;

pub use rules::slugify;
pub use services::SlugService;
pub use value_objects::{Slug, Title};
