//! Mermaid flowchart builder
//!
//! Pure string building: front-matter, `graph <code>`, one line per node (plus
//! an optional `style` line), one line per edge.

pub mod contrast;
pub mod minifier;

use crate::error::Result;
use crate::graph::GraphView;
use crate::types::{DiagramConfig, MermaidDiagram, NodeShape, Orientation};

pub use contrast::contrast_color;
pub use minifier::Minifier;

/// Converts graphs into Mermaid flowcharts with a fixed configuration.
///
/// Each build uses its own [`Minifier`], so a builder can be shared between
/// threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagramBuilder {
    config: DiagramConfig,
}

impl DiagramBuilder {
    pub fn new(config: DiagramConfig) -> Self {
        Self { config }
    }

    /// Builder from textual orientation and shape names, with default
    /// layout, look and theme.
    ///
    /// # Example
    /// ```rust
    /// let builder = graph2mermaid::DiagramBuilder::from_names("LR", "round-rectangle").unwrap();
    /// assert!(graph2mermaid::DiagramBuilder::from_names("sideways", "circle").is_err());
    /// ```
    pub fn from_names(orientation: &str, node_shape: &str) -> Result<Self> {
        Ok(Self::new(DiagramConfig {
            orientation: orientation.parse::<Orientation>()?,
            node_shape: node_shape.parse::<NodeShape>()?,
            ..Default::default()
        }))
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    /// Build with the graph's own name as title and edge labels enabled.
    pub fn build<G: GraphView>(&self, graph: &G) -> Result<MermaidDiagram> {
        self.build_with(graph, None, true)
    }

    /// Materialize `graph` as a Mermaid flowchart.
    ///
    /// `title` of `None` falls back to the graph name; `Some("")` drops the
    /// title line. Fails with `InvalidColorFormat` if any node color is not a
    /// `#RRGGBB` string.
    pub fn build_with<G: GraphView>(
        &self,
        graph: &G,
        title: Option<&str>,
        with_edge_labels: bool,
    ) -> Result<MermaidDiagram> {
        let title = title.or_else(|| graph.name()).unwrap_or_default();
        let config = self.front_matter(title);

        let (bra, ket) = self.config.node_shape.brackets();
        let mut minifier = Minifier::new();

        let mut node_lines = Vec::new();
        for (key, attrs) in graph.nodes() {
            let id = minifier.get(key);
            let label = match &attrs.label {
                Some(label) => label.clone(),
                None => key.to_string(),
            };
            node_lines.push(format!("{id}{bra}{label}{ket}"));

            if let Some(color) = attrs.color.as_deref().filter(|c| !c.is_empty()) {
                let contrast = contrast_color(color)?;
                node_lines.push(format!("style {id} fill:{color}, color:{contrast}"));
            }
        }

        let mut edge_lines = Vec::new();
        for (source, target, attrs) in graph.edges() {
            let source_id = minifier.get(source).to_string();
            let target_id = minifier.get(target);
            let label = attrs
                .label
                .as_deref()
                .filter(|label| with_edge_labels && !label.is_empty());
            match label {
                Some(label) => edge_lines.push(format!("{source_id} -->|{label}| {target_id}")),
                None => edge_lines.push(format!("{source_id} --> {target_id}")),
            }
        }

        Ok(format!(
            "{}graph {}\n{}\n{}",
            config,
            self.config.orientation.code(),
            node_lines.join("\n"),
            edge_lines.join("\n")
        ))
    }

    fn front_matter(&self, title: &str) -> String {
        let mut out = String::from("---\n");
        if !title.is_empty() {
            out.push_str(&format!("title: {title}\n"));
        }
        out.push_str(&format!(
            "config:\n  layout: {}\n  look: {}\n  theme: {}\n---\n",
            self.config.layout, self.config.look, self.config.theme
        ));
        out
    }
}
