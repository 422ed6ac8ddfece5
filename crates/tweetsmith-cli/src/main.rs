use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tweetsmith_client::{submit_form, GenerationClient};
use tweetsmith_core::{
    CategoryRegistry, DeploymentMode, FormState, NotificationLog, TweetsmithConfig,
};
use tweetsmith_tui::{App, SystemClipboard};

/// tweetsmith: generate tweet ideas from a short description.
///
/// Describe what you want to tweet about, narrow it down with filters
/// (tone, length, audience...), and pick from the generated suggestions.
#[derive(Parser, Debug)]
#[command(name = "tweetsmith", version, about)]
struct Cli {
    /// Pre-fill the tweet description.
    #[arg(short, long)]
    description: Option<String>,

    /// Pre-select a filter option, e.g. `--set tone=funny` (repeatable).
    #[arg(short, long = "set", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    set: Vec<(String, String)>,

    /// Load filter categories from a TOML file instead of the built-in set.
    #[arg(long, value_name = "PATH")]
    categories: Option<PathBuf>,

    /// Print the available filter categories and exit.
    #[arg(long)]
    list_categories: bool,

    /// Submit once without the TUI: notices go to stderr, ideas to stdout.
    #[arg(long)]
    once: bool,

    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Parse a single `KEY=VALUE` pair. The value may be empty.
fn parse_key_val(s: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid KEY=VALUE: no `=` found in `{s}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("invalid KEY=VALUE: empty key in `{s}`"));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Log to a file to avoid corrupting the TUI output. If the log file
    // can't be opened, discard logs rather than polluting the screen.
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tweetsmith");
    let _ = std::fs::create_dir_all(&log_dir);
    let log_path = log_dir.join("tweetsmith.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path);

    match log_file {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
                )
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        Err(_) => {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::new("off"))
                .with_writer(std::io::sink)
                .init();
        }
    }
}

fn load_registry(path: Option<&PathBuf>) -> Result<CategoryRegistry> {
    match path {
        Some(path) => CategoryRegistry::load(path)
            .with_context(|| format!("failed to load categories from {}", path.display())),
        None => Ok(CategoryRegistry::builtin()),
    }
}

fn print_categories(registry: &CategoryRegistry) {
    for category in registry {
        println!(
            "{} ({}): {}",
            category.key,
            category.name,
            category.options.join(", ")
        );
    }
}

/// Build the initial form from CLI pre-fills. Unknown keys and options are
/// rejected.
fn initial_form(
    registry: Arc<CategoryRegistry>,
    description: Option<&str>,
    presets: &[(String, String)],
) -> Result<FormState> {
    let mut form = FormState::new(registry);
    if let Some(description) = description {
        form.set_description(description);
    }
    for (key, value) in presets {
        form.selections_mut()
            .select(key, value)
            .with_context(|| format!("invalid --set {key}={value}"))?;
    }
    Ok(form)
}

/// One headless submission. Fails when no ideas came back.
async fn run_once(mut form: FormState, client: &GenerationClient) -> Result<()> {
    let mut notices = NotificationLog::new();
    submit_form(&mut form, client, &mut notices).await;

    for notice in notices.drain() {
        eprintln!("{notice}");
    }
    if form.results().is_empty() {
        bail!("no tweet ideas were generated");
    }
    for idea in form.results() {
        println!("{idea}");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let registry = Arc::new(load_registry(cli.categories.as_ref())?);
    if cli.list_categories {
        print_categories(&registry);
        return Ok(());
    }

    let config = TweetsmithConfig::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
        TweetsmithConfig::default()
    });

    let mode = DeploymentMode::detect();
    tracing::info!(
        mode = %mode,
        base_url = mode.base_url(),
        "Starting tweetsmith v{}",
        env!("CARGO_PKG_VERSION")
    );

    let form = initial_form(registry, cli.description.as_deref(), &cli.set)?;
    let client = GenerationClient::new(mode.base_url(), config.timeout())
        .context("failed to build HTTP client")?;

    if cli.once {
        return run_once(form, &client).await;
    }

    let clipboard = SystemClipboard::new(config.clipboard.backend);
    let mut app = App::new(form, Arc::new(client), Box::new(clipboard));
    app.run().await?;

    tracing::info!("tweetsmith exited cleanly");
    Ok(())
}
