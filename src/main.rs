use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use swatch_core::{blend, hex};
use swatchbook::api::ApiDoc;
use swatchbook::models::{AppConfig, SortBy};
use swatchbook::server;
use swatchbook::services::{presenter, ColorLibrary, LibraryLoader};

#[derive(Parser)]
#[command(name = "swatchbook")]
#[command(about = "Swatchbook - color library with segment-aware sorting")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the configured colors and start the HTTP server
    Serve,
    /// Load colors (and segments) and print them in sorted order
    Sort {
        /// Colors location: http(s) URL or JSON file
        #[arg(short, long)]
        colors: String,

        /// Segments location: http(s) URL or JSON file
        #[arg(short, long)]
        segments: Option<String>,

        /// Ordering: "segment", "hue" or "brightness"
        #[arg(short, long, default_value = "segment")]
        by: SortBy,

        /// Flip the ordering
        #[arg(short, long)]
        descending: bool,

        /// Print one group per segment instead of a flat list
        #[arg(short, long)]
        grouped: bool,
    },
    /// Blend hex colors
    Blend {
        /// Colors to blend (e.g. "#FF0000" "00F")
        #[arg(required = true)]
        colors: Vec<String>,

        /// Comma-separated weights summing to 1.0 (e.g. "0.25,0.75")
        #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
        weights: Vec<f64>,

        /// Blend factor for exactly two colors
        #[arg(short, long, conflicts_with = "weights", allow_negative_numbers = true)]
        t: Option<f64>,
    },
    /// Report whether a value is a complete or partial hex color
    Check {
        /// Value to check
        value: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Sort {
            colors,
            segments,
            by,
            descending,
            grouped,
        }) => run_sort_command(&colors, segments.as_deref(), by, descending, grouped).await,
        Some(Commands::Blend { colors, weights, t }) => run_blend_command(&colors, &weights, t),
        Some(Commands::Check { value }) => {
            run_check_command(&value);
            Ok(())
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for one-shot commands
fn init_cli_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swatchbook=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn config_file() -> Option<PathBuf> {
    std::env::var("CONFIG_FILE").ok().map(PathBuf::from)
}

/// Fetch colors and segments, then print them in the requested order
async fn run_sort_command(
    colors: &str,
    segments: Option<&str>,
    sort_by: SortBy,
    descending: bool,
    grouped: bool,
) -> anyhow::Result<()> {
    init_cli_logging();

    let config = AppConfig::load(config_file().as_deref());
    let library = ColorLibrary::with_sort(sort_by, !descending).into_shared();
    let loader = LibraryLoader::with_timeout(
        library.clone(),
        Duration::from_secs(config.fetch_timeout_secs),
    )?;

    let report = loader.download(Some(colors), segments).await;
    if let Some(e) = report.colors.error {
        return Err(e).with_context(|| format!("Failed to load colors from {colors}"));
    }
    if let (Some(location), Some(e)) = (segments, report.segments.error) {
        return Err(e).with_context(|| format!("Failed to load segments from {location}"));
    }

    let mut library = library.write().await;
    if grouped {
        let segments = library.raw_segments().to_vec();
        for (idx, group) in library.groups().iter().enumerate() {
            let label = segments.get(idx).map(String::as_str).unwrap_or("(all)");
            println!("{label}:");
            for hex in group {
                println!("  {hex}  {}", library.name_for(hex).unwrap_or(hex));
            }
        }
    } else {
        for entry in presenter::entries(&mut library, None) {
            println!("{}  {}", entry.hex, entry.name);
        }
    }

    Ok(())
}

fn run_blend_command(colors: &[String], weights: &[f64], t: Option<f64>) -> anyhow::Result<()> {
    init_cli_logging();

    let parsed = colors
        .iter()
        .map(|s| hex::parse(s).with_context(|| format!("Invalid color {s:?}")))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let blended = match (t, parsed.as_slice()) {
        (Some(t), [a, b]) => blend::blend(*a, *b, t),
        (Some(_), _) => anyhow::bail!("--t blends exactly two colors, got {}", parsed.len()),
        (None, _) => blend::blend_many(&parsed, weights).context("Invalid distribution")?,
    };

    println!("{blended}");
    Ok(())
}

fn run_check_command(value: &str) {
    let complete = hex::is_complete_hex(value);
    let partial = hex::is_partial_hex(value);

    println!("value:    {value:?}");
    println!("complete: {complete}");
    println!("partial:  {partial}");
    if let Ok(normalized) = hex::normalize(value) {
        println!("hex:      {normalized}");
    }
}

fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("Swatchbook v{VERSION}");
    println!("Color library with segment-aware sorting\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("(from config)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    let config = AppConfig::from_yaml(
        &config_file
            .as_deref()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .unwrap_or_default(),
    )
    .unwrap_or_default();

    println!("\nLibrary Sources:");
    println!(
        "  colors   = {}",
        config.colors_url.as_deref().unwrap_or("(none)")
    );
    println!(
        "  segments = {}",
        config.segments_url.as_deref().unwrap_or("(none)")
    );
    println!(
        "  order    = {} ({})",
        config.sort_by,
        if config.ascending { "ascending" } else { "descending" }
    );

    println!("\nCommands:");
    println!("  swatchbook serve           Start the HTTP server");
    println!("  swatchbook sort -c <loc>   Print colors in sorted order");
    println!("  swatchbook blend <hex>...  Blend colors");
    println!("  swatchbook check <value>   Validate hex input");
    println!("\nRun 'swatchbook --help' for more options.");
}

async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swatchbook=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load(config_file().as_deref());
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| config.bind_addr.clone());

    let state = server::create_app_state(config)?;
    let _events = server::spawn_event_logger(&*state.library.read().await);

    let report = state.loader.download_configured(&state.config).await;
    for (what, outcome) in [("colors", &report.colors), ("segments", &report.segments)] {
        if let Some(e) = &outcome.error {
            tracing::warn!(what, error = %e, "Initial load failed, retry with POST /api/reload");
        }
    }

    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Swatchbook server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
