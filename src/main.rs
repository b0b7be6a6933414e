use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use site_slug::{
    Slug,
    application::{
        commands::slugs::SlugifyTitlesCommand, dto::SlugDto, ports::util::SlugGenerator,
        services::ApplicationServices,
    },
    config::{AppConfig, OutputFormat},
    infrastructure::util::DefaultSlugGenerator,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about = "Turn page titles into URL-safe slugs.")]
struct Cli {
    /// Titles to slugify. Read one per line from stdin when omitted.
    titles: Vec<String>,

    /// Validate an existing slug instead of generating one.
    #[arg(long, value_name = "SLUG", conflicts_with = "titles")]
    check: Option<String>,
}

fn main() {
    if let Err(err) = bootstrap() {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

fn bootstrap() -> Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();
    init_tracing(&AppConfig::log_filter_from_env());

    let config = AppConfig::from_env()?;

    if let Some(candidate) = cli.check {
        let slug = Slug::parse(candidate)?;
        tracing::info!(slug = %slug, "slug is valid");
        return Ok(());
    }

    let titles = if cli.titles.is_empty() {
        read_titles(io::stdin().lock())?
    } else {
        cli.titles
    };
    let stdout = io::stdout();
    if titles.is_empty() {
        tracing::warn!("no titles given");
        return write_slugs(&mut stdout.lock(), &[], config.output_format());
    }

    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let services = ApplicationServices::new(Arc::clone(&slugger));

    let command = SlugifyTitlesCommand::builder()
        .titles(titles)
        .skip_empty(config.skip_empty())
        .build()
        .map_err(anyhow::Error::msg)?;
    let slugs = services.slug_commands.slugify_titles(command)?;

    write_slugs(&mut stdout.lock(), &slugs, config.output_format())?;
    Ok(())
}

fn read_titles(input: impl BufRead) -> Result<Vec<String>> {
    input
        .lines()
        .map(|line| line.context("failed to read title from stdin"))
        .collect()
}

fn write_slugs(out: &mut impl Write, slugs: &[SlugDto], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            for dto in slugs {
                writeln!(out, "{}", dto.slug)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, slugs)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn init_tracing(default_filter: &str) {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| default_filter.to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
