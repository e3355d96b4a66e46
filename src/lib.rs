//! graph2mermaid - Convert in-memory graphs to Mermaid flowcharts
//!
//! Nodes get short identifiers (`a`, `b`, ..., `aa`), are drawn with a
//! configurable shape, and may carry a fill color whose text color is picked
//! for contrast. The output is plain Mermaid text with a front-matter header.
//!
//! # Example
//!
//! ```rust
//! use graph2mermaid::{Attributes, DiagramBuilder, Graph};
//!
//! let mut graph = Graph::directed();
//! graph.add_node("A", Attributes::new());
//! graph.add_node("B", Attributes::labeled("Bee").with_color("#FFCCCC"));
//! graph.add_edge("A", "B", Attributes::labeled("go"));
//!
//! let diagram = DiagramBuilder::default().build(&graph).unwrap();
//! assert!(diagram.contains("a(A)\nb(Bee)\nstyle b fill:#FFCCCC, color:#000000\n"));
//! assert!(diagram.ends_with("a -->|go| b"));
//!
//! println!("{}", graph2mermaid::formatters::markdown(&diagram));
//! ```

pub mod builder;
pub mod error;
pub mod formatters;
pub mod graph;
pub mod types;

pub use builder::{contrast_color, DiagramBuilder, Minifier};
pub use error::{Error, Result};
pub use graph::{disjoint_union, Graph, GraphDocument, GraphView, NodeKey};
pub use types::*;

/// Render a JSON graph document with the given configuration.
///
/// # Example
/// ```rust
/// let text = r#"{"nodes": [{"id": 1}, {"id": 2}], "edges": [{"source": 1, "target": 2}]}"#;
/// let diagram = graph2mermaid::render_json(text, &Default::default()).unwrap();
/// assert!(diagram.ends_with("a(1)\nb(2)\na --> b"));
/// ```
pub fn render_json(input: &str, config: &DiagramConfig) -> Result<MermaidDiagram> {
    let graph = Graph::<NodeKey>::from_json(input)?;
    DiagramBuilder::new(config.clone()).build(&graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_json_reports_bad_documents() {
        let err = render_json("not json", &DiagramConfig::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidGraph(_)), "got: {err}");
    }

    #[test]
    fn render_json_reports_numeric_color() {
        let err = render_json(
            r#"{"nodes": [{"id": "n", "color": 123}]}"#,
            &DiagramConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err, Error::InvalidColorFormat("123".to_string()));
    }
}
