use std::sync::Arc;

mod support;

use site_slug::application::commands::slugs::{SlugCommandService, SlugifyTitlesCommand};
use site_slug::application::error::ApplicationError;
use site_slug::application::services::ApplicationServices;
use site_slug::domain::slug::{SlugService, Title};
use site_slug::infrastructure::util::DefaultSlugGenerator;

fn default_services() -> ApplicationServices {
    ApplicationServices::new(Arc::new(DefaultSlugGenerator))
}

#[test]
fn slugifies_titles_in_order() {
    let services = default_services();
    let command = SlugifyTitlesCommand::builder()
        .titles(["Hello World", "  Leading and trailing  ", "Special!!Characters??"])
        .build()
        .unwrap();

    let slugs = services.slug_commands.slugify_titles(command).unwrap();

    let pairs: Vec<(&str, &str)> = slugs
        .iter()
        .map(|dto| (dto.title.as_str(), dto.slug.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("Hello World", "hello-world"),
            ("  Leading and trailing  ", "leading-and-trailing"),
            ("Special!!Characters??", "specialcharacters"),
        ]
    );
}

#[test]
fn keeps_empty_slugs_by_default() {
    let services = default_services();
    let command = SlugifyTitlesCommand::builder()
        .titles(["???", "ok"])
        .build()
        .unwrap();

    let slugs = services.slug_commands.slugify_titles(command).unwrap();
    assert_eq!(slugs.len(), 2);
    assert_eq!(slugs[0].slug, "");
    assert_eq!(slugs[1].slug, "ok");
}

#[test]
fn skip_empty_drops_titles_without_slug() {
    let services = default_services();
    let command = SlugifyTitlesCommand::builder()
        .titles(["   ", "日本語", "Kept Title"])
        .skip_empty(true)
        .build()
        .unwrap();

    let slugs = services.slug_commands.slugify_titles(command).unwrap();
    assert_eq!(slugs.len(), 1);
    assert_eq!(slugs[0].slug, "kept-title");
}

#[test]
fn rejects_command_without_titles() {
    let services = default_services();
    let command = SlugifyTitlesCommand {
        titles: Vec::new(),
        skip_empty: false,
    };

    let err = services.slug_commands.slugify_titles(command).unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[test]
fn generator_is_called_once_per_title() {
    let generator = Arc::new(support::CountingSlug::default());
    let slug_service = Arc::new(SlugService::new(generator.clone()));
    let commands = SlugCommandService::new(slug_service);

    let command = SlugifyTitlesCommand::builder()
        .titles(["a", "b", "c"])
        .build()
        .unwrap();
    commands.slugify_titles(command).unwrap();

    assert_eq!(generator.calls(), 3);
}

#[test]
fn injected_generator_output_is_used() {
    let services = ApplicationServices::new(Arc::new(support::DummySlug));
    let slug = services.slug_service().slug_for(&Title::new("custom-slug_1"));
    assert_eq!(slug.as_str(), "custom-slug_1");
}
