// src/application/commands/slugs/slugify.rs
use super::SlugCommandService;
use crate::{
    application::{
        dto::SlugDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::slug::Title,
};

pub struct SlugifyTitlesCommand {
    pub titles: Vec<String>,
    pub skip_empty: bool,
}

impl SlugifyTitlesCommand {
    pub fn builder() -> SlugifyTitlesCommandBuilder {
        SlugifyTitlesCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct SlugifyTitlesCommandBuilder {
    titles: Vec<String>,
    skip_empty: bool,
}

impl SlugifyTitlesCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.titles.push(title.into());
        self
    }

    pub fn titles<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.titles.extend(titles.into_iter().map(Into::into));
        self
    }

    pub fn skip_empty(mut self, skip_empty: bool) -> Self {
        self.skip_empty = skip_empty;
        self
    }

    pub fn build(self) -> Result<SlugifyTitlesCommand, &'static str> {
        if self.titles.is_empty() {
            return Err("at least one title is required");
        }
        Ok(SlugifyTitlesCommand {
            titles: self.titles,
            skip_empty: self.skip_empty,
        })
    }
}

impl SlugCommandService {
    /// Slugify every title, preserving input order.
    pub fn slugify_titles(&self, command: SlugifyTitlesCommand) -> ApplicationResult<Vec<SlugDto>> {
        if command.titles.is_empty() {
            return Err(ApplicationError::validation("no titles given"));
        }

        let total = command.titles.len();
        let slugs: Vec<SlugDto> = command
            .titles
            .into_iter()
            .map(Title::new)
            .filter_map(|title| {
                let slug = self.slug_service.slug_for(&title);
                if command.skip_empty && slug.is_empty() {
                    None
                } else {
                    Some(SlugDto::new(title, slug))
                }
            })
            .collect();

        tracing::debug!(total, emitted = slugs.len(), "slugified titles");
        Ok(slugs)
    }
}
