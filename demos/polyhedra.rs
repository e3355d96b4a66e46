//! Two platonic solids, each filled with its own pastel color, rendered as
//! Mermaid, Markdown and HTML.
//!
//! Run with: cargo run --example polyhedra

use graph2mermaid::{
    disjoint_union, formatters, Attributes, DiagramBuilder, DiagramConfig, Graph, GraphView,
    NodeShape, Orientation,
};

const PASTEL_COLORS: [&str; 6] = [
    "#FFCCCC", "#CCFFCC", "#CCCCFF", "#FFFFCC", "#CCFFFF", "#FFCCFF",
];

fn tetrahedral() -> Graph<usize> {
    let mut graph = Graph::undirected().named("Tetrahedral Graph");
    for u in 0..4 {
        for v in (u + 1)..4 {
            graph.add_edge(u, v, Attributes::new());
        }
    }
    graph
}

/// LCF notation `[10, 7, 4, -4, -7, 10, -4, 7, -7, 4]^2` on a 20-cycle
fn dodecahedral() -> Graph<usize> {
    const SHIFTS: [i64; 10] = [10, 7, 4, -4, -7, 10, -4, 7, -7, 4];
    const N: i64 = 20;

    let mut graph = Graph::undirected().named("Dodecahedral Graph");
    for i in 0..N {
        graph.add_edge(i as usize, ((i + 1) % N) as usize, Attributes::new());
    }
    for i in 0..(2 * SHIFTS.len() as i64) {
        let shift = SHIFTS[(i as usize) % SHIFTS.len()];
        let u = i % N;
        let v = (i + shift).rem_euclid(N);
        graph.add_edge(u as usize, v as usize, Attributes::new());
    }
    graph
}

fn main() -> graph2mermaid::Result<()> {
    let mut graphs = vec![tetrahedral(), dodecahedral()];

    for (graph, color) in graphs.iter_mut().zip(PASTEL_COLORS) {
        let keys: Vec<usize> = (0..graph.node_count()).collect();
        for key in keys {
            if let Some(attrs) = graph.node_attributes_mut(&key) {
                attrs.color = Some(color.to_string());
            }
        }
    }

    let graph = disjoint_union(&graphs)?;
    let title = graph.name().unwrap_or_default().to_string();

    let builder = DiagramBuilder::new(DiagramConfig {
        orientation: Orientation::LeftRight,
        node_shape: NodeShape::RoundRectangle,
        ..Default::default()
    });
    let diagram = builder.build(&graph)?;

    println!("Mermaid Diagram:");
    println!("{}", diagram);
    println!("{}", formatters::markdown(&diagram));
    println!("{}", formatters::html(&diagram, &title));
    Ok(())
}
