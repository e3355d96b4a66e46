use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use graph2mermaid::{
    formatters, DiagramBuilder, DiagramConfig, Graph, GraphView, NodeKey, NodeShape, Orientation,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Mermaid,
    Markdown,
    Html,
}

#[derive(Parser)]
#[command(
    name = "graph2mermaid",
    about = "Convert a JSON graph document into a Mermaid flowchart"
)]
struct Cli {
    /// Graph document (reads from stdin if not provided)
    file: Option<PathBuf>,

    /// JSON file with orientation, node_shape, layout, look and theme
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// LR, RL, TB or BT (or left-right, ...)
    #[arg(long, short = 'o')]
    orientation: Option<Orientation>,

    /// Node shape name, e.g. round-rectangle, hexagon
    #[arg(long, short = 's')]
    shape: Option<NodeShape>,

    #[arg(long)]
    layout: Option<String>,

    #[arg(long)]
    look: Option<String>,

    #[arg(long)]
    theme: Option<String>,

    /// Diagram title (defaults to the graph name)
    #[arg(long, short = 't', conflicts_with = "no_title")]
    title: Option<String>,

    /// Omit the title even if the graph has a name
    #[arg(long)]
    no_title: bool,

    /// Draw edges without their labels
    #[arg(long)]
    no_edge_labels: bool,

    #[arg(long, short = 'f', value_enum, default_value_t = Format::Mermaid)]
    format: Format,

    /// Write to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn diagram_config(&self) -> Result<DiagramConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                DiagramConfig::from_json(&text)
                    .with_context(|| format!("failed to load {}", path.display()))?
            }
            None => DiagramConfig::default(),
        };
        if let Some(orientation) = self.orientation {
            config.orientation = orientation;
        }
        if let Some(shape) = self.shape {
            config.node_shape = shape;
        }
        if let Some(layout) = &self.layout {
            config.layout = layout.clone();
        }
        if let Some(look) = &self.look {
            config.look = look.clone();
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        Ok(config)
    }

    fn read_input(&self) -> Result<String> {
        match &self.file {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display())),
            None => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read stdin")?;
                Ok(buf)
            }
        }
    }
}

/// `RUST_LOG` directives when set and valid, otherwise `warn`
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn main() -> Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(log_filter(directives.as_deref()))
        .init();

    let cli = Cli::parse();
    let config = cli.diagram_config()?;
    tracing::debug!(?config, "diagram configuration");

    let input = cli.read_input()?;
    let graph = Graph::<NodeKey>::from_json(&input)?;
    tracing::info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        directed = graph.is_directed(),
        "graph loaded"
    );

    let title = if cli.no_title { Some("") } else { cli.title.as_deref() };
    let builder = DiagramBuilder::new(config);
    let diagram = builder.build_with(&graph, title, !cli.no_edge_labels)?;

    let page_title = cli
        .title
        .as_deref()
        .or_else(|| graph.name())
        .filter(|t| !t.is_empty())
        .unwrap_or("Mermaid Diagram");
    let output = match cli.format {
        Format::Mermaid => diagram,
        Format::Markdown => formatters::markdown(&diagram),
        Format::Html => formatters::html(&diagram, page_title),
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), format = ?cli.format, "diagram written");
        }
        None => println!("{}", output),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_log_filter_defaults_to_warn() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(log_filter(Some("")).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_log_filter_raises_verbosity() {
        assert_eq!(log_filter(Some("info")).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(log_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_log_filter_keeps_target_directives() {
        let filter = log_filter(Some("graph2mermaid=trace"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }
}
