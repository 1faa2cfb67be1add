use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crew_manifest::api::{self, AppState};
use crew_manifest::config::ManifestConfig;
use crew_manifest::manifest::{build_layout, CrewManifestView, ManifestSources};
use crew_manifest::models::StationRoster;
use crew_manifest::render;

#[derive(Parser)]
#[command(name = "crew-manifest")]
#[command(about = "Department-grouped crew manifest for a station roster")]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a roster file once and print it
    Render {
        /// Roster JSON file: { "station_name": ..., "entries": [...] }
        #[arg(short, long)]
        roster: PathBuf,

        /// Only show entries matching this text
        #[arg(short, long, default_value = "")]
        filter: String,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Serve the manifest view over HTTP
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value = "17020")]
        port: u16,

        /// Roster to load as the initial source entries
        #[arg(short, long)]
        roster: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Initialize tracing with output to stderr (for render) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "crew_manifest=info,tower_http=debug".into()),
    );

    if use_stderr {
        // Render mode prints the manifest on stdout
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn load_roster(path: &Path) -> anyhow::Result<StationRoster> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse roster {}", path.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(matches!(cli.command, Commands::Render { .. }));

    let config = ManifestConfig::load(cli.config.as_deref());
    let sources = ManifestSources::from_config(&config)?;

    match cli.command {
        Commands::Render {
            roster,
            filter,
            format,
        } => {
            let (name, entries) = load_roster(&roster)?.into_parts();
            let layout = build_layout(&sources.context(), &name, entries.as_ref(), &filter);

            let output = match format {
                Format::Text => render::render_text(&layout),
                Format::Json => render::render_json(&layout)?,
            };
            print!("{}", output);
        }
        Commands::Serve { port, roster } => {
            let mut view = CrewManifestView::new();
            if let Some(path) = roster {
                let (name, entries) = load_roster(&path)?.into_parts();
                view.populate(&sources.context(), &name, entries.as_ref());
                if let Some(entries) = entries {
                    view.set_source_entries(entries);
                }
            }

            let app = api::create_router(AppState::new(sources, view));

            let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
            tracing::info!("Crew manifest listening on http://127.0.0.1:{}", port);

            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
