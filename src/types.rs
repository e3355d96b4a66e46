//! Type definitions for diagram configuration and graph attributes

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rendered Mermaid flowchart text
pub type MermaidDiagram = String;

pub const DEFAULT_LAYOUT: &str = "dagre";
pub const DEFAULT_LOOK: &str = "neo";
pub const DEFAULT_THEME: &str = "neutral";

/// The direction of the flowchart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Orientation {
    #[default]
    LeftRight, // LR
    RightLeft, // RL
    TopBottom, // TB
    BottomTop, // BT
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::LeftRight,
        Orientation::RightLeft,
        Orientation::TopBottom,
        Orientation::BottomTop,
    ];

    /// Two-letter token written after `graph`
    pub fn code(&self) -> &'static str {
        match self {
            Orientation::LeftRight => "LR",
            Orientation::RightLeft => "RL",
            Orientation::TopBottom => "TB",
            Orientation::BottomTop => "BT",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Orientation::LeftRight => "left-right",
            Orientation::RightLeft => "right-left",
            Orientation::TopBottom => "top-bottom",
            Orientation::BottomTop => "bottom-top",
        }
    }
}

impl FromStr for Orientation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.to_uppercase().as_str() {
            "LR" => return Ok(Orientation::LeftRight),
            "RL" => return Ok(Orientation::RightLeft),
            "TB" | "TD" => return Ok(Orientation::TopBottom),
            "BT" => return Ok(Orientation::BottomTop),
            _ => {}
        }
        let normalized = s.to_lowercase().replace('_', "-");
        Orientation::ALL
            .into_iter()
            .find(|o| o.name() == normalized)
            .ok_or_else(|| Error::InvalidConfiguration(format!("unknown orientation: {s:?}")))
    }
}

impl TryFrom<String> for Orientation {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Orientation> for String {
    fn from(o: Orientation) -> Self {
        o.name().to_string()
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Shape drawn around a node label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NodeShape {
    Rectangle,        // [text]
    #[default]
    RoundRectangle,   // (text)
    Stadium,          // ([text])
    Subroutine,       // [[text]]
    Cylinder,         // [(text)]
    Circle,           // ((text))
    DoubleCircle,     // (((text)))
    Asymmetric,       // >text]
    Rhombus,          // {text}
    Hexagon,          // {{text}}
    Parallelogram,    // [/text/]
    ParallelogramAlt, // [\text\]
    Trapezoid,        // [/text\]
    TrapezoidAlt,     // [\text/]
}

impl NodeShape {
    pub const ALL: [NodeShape; 14] = [
        NodeShape::Rectangle,
        NodeShape::RoundRectangle,
        NodeShape::Stadium,
        NodeShape::Subroutine,
        NodeShape::Cylinder,
        NodeShape::Circle,
        NodeShape::DoubleCircle,
        NodeShape::Asymmetric,
        NodeShape::Rhombus,
        NodeShape::Hexagon,
        NodeShape::Parallelogram,
        NodeShape::ParallelogramAlt,
        NodeShape::Trapezoid,
        NodeShape::TrapezoidAlt,
    ];

    /// Opening and closing brackets wrapped around the label
    pub fn brackets(&self) -> (&'static str, &'static str) {
        match self {
            NodeShape::Rectangle => ("[", "]"),
            NodeShape::RoundRectangle => ("(", ")"),
            NodeShape::Stadium => ("([", "])"),
            NodeShape::Subroutine => ("[[", "]]"),
            NodeShape::Cylinder => ("[(", ")]"),
            NodeShape::Circle => ("((", "))"),
            NodeShape::DoubleCircle => ("(((", ")))"),
            NodeShape::Asymmetric => (">", "]"),
            NodeShape::Rhombus => ("{", "}"),
            NodeShape::Hexagon => ("{{", "}}"),
            NodeShape::Parallelogram => ("[/", "/]"),
            NodeShape::ParallelogramAlt => ("[\\", "\\]"),
            NodeShape::Trapezoid => ("[/", "\\]"),
            NodeShape::TrapezoidAlt => ("[\\", "/]"),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            NodeShape::Rectangle => "rectangle",
            NodeShape::RoundRectangle => "round-rectangle",
            NodeShape::Stadium => "stadium",
            NodeShape::Subroutine => "subroutine",
            NodeShape::Cylinder => "cylinder",
            NodeShape::Circle => "circle",
            NodeShape::DoubleCircle => "double-circle",
            NodeShape::Asymmetric => "asymmetric",
            NodeShape::Rhombus => "rhombus",
            NodeShape::Hexagon => "hexagon",
            NodeShape::Parallelogram => "parallelogram",
            NodeShape::ParallelogramAlt => "parallelogram-alt",
            NodeShape::Trapezoid => "trapezoid",
            NodeShape::TrapezoidAlt => "trapezoid-alt",
        }
    }
}

impl FromStr for NodeShape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        NodeShape::ALL
            .into_iter()
            .find(|shape| shape.name() == normalized)
            .ok_or_else(|| Error::InvalidConfiguration(format!("unknown node shape: {s:?}")))
    }
}

impl TryFrom<String> for NodeShape {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<NodeShape> for String {
    fn from(shape: NodeShape) -> Self {
        shape.name().to_string()
    }
}

impl fmt::Display for NodeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Builder configuration. `layout`, `look` and `theme` are written into the
/// front-matter verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiagramConfig {
    pub orientation: Orientation,
    pub node_shape: NodeShape,
    pub layout: String,
    pub look: String,
    pub theme: String,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            node_shape: NodeShape::default(),
            layout: DEFAULT_LAYOUT.to_string(),
            look: DEFAULT_LOOK.to_string(),
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

impl DiagramConfig {
    /// Parse a JSON configuration document. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::InvalidConfiguration(e.to_string()))
    }
}

/// Node or edge attributes. Only `label` and `color` are recognized; any other
/// key in an attribute document is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(default, deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Hex fill color (`#RRGGBB`); meaningful on nodes only
    #[serde(default, deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            color: None,
        }
    }

    pub fn colored(color: impl Into<String>) -> Self {
        Self {
            label: None,
            color: Some(color.into()),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Overwrite fields that are set in `other`, keep the rest.
    pub fn merge(&mut self, other: Attributes) {
        if other.label.is_some() {
            self.label = other.label;
        }
        if other.color.is_some() {
            self.color = other.color;
        }
    }
}

/// Accept any JSON scalar and keep its text form, so `"color": 123` survives
/// loading and is rejected later by the color check.
fn scalar_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_codes() {
        let codes: Vec<&str> = Orientation::ALL.iter().map(|o| o.code()).collect();
        assert_eq!(codes, vec!["LR", "RL", "TB", "BT"]);
    }

    #[test]
    fn test_orientation_from_str() {
        assert_eq!("lr".parse::<Orientation>().unwrap(), Orientation::LeftRight);
        assert_eq!("TD".parse::<Orientation>().unwrap(), Orientation::TopBottom);
        assert_eq!(
            "bottom_top".parse::<Orientation>().unwrap(),
            Orientation::BottomTop
        );
        assert!(matches!(
            "diagonal".parse::<Orientation>(),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_node_shape_names_round_trip() {
        for shape in NodeShape::ALL {
            assert_eq!(shape.name().parse::<NodeShape>().unwrap(), shape);
        }
        assert!(matches!(
            "blob".parse::<NodeShape>(),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_round_rectangle_brackets() {
        assert_eq!(NodeShape::RoundRectangle.brackets(), ("(", ")"));
        assert_eq!(NodeShape::default(), NodeShape::RoundRectangle);
    }

    #[test]
    fn test_config_defaults() {
        let config = DiagramConfig::default();
        assert_eq!(config.orientation, Orientation::LeftRight);
        assert_eq!(config.layout, "dagre");
        assert_eq!(config.look, "neo");
        assert_eq!(config.theme, "neutral");
    }

    #[test]
    fn test_config_from_json() {
        let config = DiagramConfig::from_json(
            r#"{"orientation": "TB", "node_shape": "hexagon", "theme": "dark"}"#,
        )
        .unwrap();
        assert_eq!(config.orientation, Orientation::TopBottom);
        assert_eq!(config.node_shape, NodeShape::Hexagon);
        assert_eq!(config.theme, "dark");
        assert_eq!(config.layout, "dagre");
    }

    #[test]
    fn test_config_from_json_rejects_unknown_shape() {
        let err = DiagramConfig::from_json(r#"{"node_shape": "blob"}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)), "got: {err}");
    }

    #[test]
    fn test_attributes_ignore_unknown_keys() {
        let attrs: Attributes =
            serde_json::from_str(r#"{"label": "A", "shape": "rect", "weight": 3}"#).unwrap();
        assert_eq!(attrs, Attributes::labeled("A"));
    }

    #[test]
    fn test_attributes_keep_scalar_text() {
        let attrs: Attributes = serde_json::from_str(r#"{"label": 5, "color": 123}"#).unwrap();
        assert_eq!(attrs.label.as_deref(), Some("5"));
        assert_eq!(attrs.color.as_deref(), Some("123"));
    }

    #[test]
    fn test_attributes_merge() {
        let mut attrs = Attributes::labeled("old").with_color("#000000");
        attrs.merge(Attributes::labeled("new"));
        assert_eq!(attrs.label.as_deref(), Some("new"));
        assert_eq!(attrs.color.as_deref(), Some("#000000"));
    }
}
