//! PatternViz CLI entry point.
//!
//! Browses the design-pattern catalog and renders class diagrams through the
//! Mermaid CLI.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use pattern_viz::domain::{Category, PatternEntry};
use pattern_viz::infra::app_config::load_config;
use pattern_viz::infra::diagram::RenderState;
use pattern_viz::state::AppState;
use pattern_viz::view::{
    DiagramPanel, format_catalog_line, format_entry, format_role_table, format_state,
};

#[derive(Parser, Debug)]
#[command(name = "pattern-viz")]
#[command(version)]
#[command(about = "GoF design pattern reference with rendered class diagrams", long_about = None)]
struct Args {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List catalog entries
    List {
        /// Only show one category (creational, structural, behavioral)
        #[arg(short, long)]
        category: Option<Category>,
    },

    /// Show one pattern with its role table and diagram
    Show {
        /// Pattern id (see `list`)
        id: String,

        /// Write the rendered SVG to this file
        #[arg(long)]
        svg: Option<PathBuf>,

        /// Skip diagram rendering
        #[arg(long)]
        no_diagram: bool,
    },

    /// Render every diagram into a directory as `<id>.svg`
    Export {
        /// Output directory
        #[arg(short, long)]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let state = AppState::from_config(load_config());

    match args.command {
        Commands::List { category } => list(&state, category),
        Commands::Show {
            id,
            svg,
            no_diagram,
        } => show(&state, &id, svg.as_deref(), no_diagram).await,
        Commands::Export { out } => export(&state, &out).await,
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn list(state: &AppState, category: Option<Category>) -> Result<()> {
    let entries: Vec<&PatternEntry> = match category {
        Some(category) => state.catalog.by_category(category).collect(),
        None => state.catalog.get_all().iter().collect(),
    };
    for entry in entries {
        println!("{}", format_catalog_line(entry));
    }
    Ok(())
}

async fn show(state: &AppState, id: &str, svg: Option<&Path>, no_diagram: bool) -> Result<()> {
    if state.catalog.find(id).is_none() {
        log::warn!("Unknown pattern id {id:?}; showing the first entry instead");
    }
    state.select(id);
    let entry = state.selected();

    println!("{}", format_entry(entry));
    println!("Pattern Roles");
    println!("{}", format_role_table(entry.roles));

    if no_diagram {
        return Ok(());
    }

    let mut panel = state.diagram_panel();
    let rendered = render_entry(state, &mut panel, entry).await;
    println!("{}", format_state(&rendered));

    match (&rendered, svg) {
        (RenderState::Rendered(artifact), Some(path)) => {
            std::fs::write(path, artifact.svg())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Saved diagram to {}", path.display());
        }
        (RenderState::Rendered(_), None) => {}
        _ => anyhow::bail!("Diagram for {} was not rendered", entry.id),
    }
    Ok(())
}

async fn export(state: &AppState, out: &Path) -> Result<()> {
    std::fs::create_dir_all(out)
        .with_context(|| format!("Failed to create {}", out.display()))?;

    let mut panel = state.diagram_panel();
    let mut failures = 0usize;

    for entry in state.catalog.get_all() {
        state.select(entry.id);
        match render_entry(state, &mut panel, entry).await {
            RenderState::Rendered(artifact) => {
                let path = out.join(format!("{}.svg", entry.id));
                std::fs::write(&path, artifact.svg())
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("{:<24} {}", entry.id, path.display());
            }
            other => {
                failures += 1;
                println!("{:<24} {}", entry.id, format_state(&other));
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} diagram(s) failed to render");
    }
    Ok(())
}

async fn render_entry(
    state: &AppState,
    panel: &mut DiagramPanel,
    entry: &PatternEntry,
) -> RenderState {
    if !state.engine().readiness().is_ready() {
        eprintln!("Waiting for the Mermaid CLI (mmdc) to become available...");
    }
    panel.show(entry.diagram_source);
    panel.settled().await
}
