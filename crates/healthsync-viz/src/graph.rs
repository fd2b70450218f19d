//! Graph structure for the architecture diagram.
//!
//! Components and their data-flow connections form a static directed graph.
//! Construction validates every connection endpoint against the component
//! set, so rendering never encounters a dangling reference.

use std::collections::HashMap;

use indexmap::IndexMap;
use log::trace;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::{color::Color, error::VizError, geometry::Point};

/// A named component rendered as a labeled marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    name: String,
    position: Point,
    category: String,
}

impl Node {
    /// Creates a new node at the given unit-square position.
    pub fn new(name: impl Into<String>, position: Point, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position,
            category: category.into(),
        }
    }

    /// Returns the node name, which is also its identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the node position in unit-square coordinates.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the grouping category of the node.
    pub fn category(&self) -> &str {
        &self.category
    }
}

/// A directed connection between two named components.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    source: String,
    target: String,
}

impl Connection {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

/// Ordered category → color lookup used for marker fill and the legend.
///
/// Rendering iterates categories in palette order, so the palette also
/// fixes legend ordering.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    colors: IndexMap<String, Color>,
}

impl Palette {
    /// Builds a palette from (category, CSS color string) pairs.
    ///
    /// # Errors
    ///
    /// Returns [`VizError::Dataset`] if any color string fails to parse.
    pub fn from_entries<'a, I>(entries: I) -> Result<Self, VizError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut colors = IndexMap::new();
        for (category, color_str) in entries {
            let color = Color::new(color_str).map_err(VizError::Dataset)?;
            colors.insert(category.to_string(), color);
        }
        Ok(Self { colors })
    }

    /// Returns the color for a category, if the palette defines one.
    pub fn get(&self, category: &str) -> Option<&Color> {
        self.colors.get(category)
    }

    /// Iterates (category, color) pairs in palette order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Color)> {
        self.colors.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// The fixed annotation overlay drawn on top of the architecture diagram:
/// a translucent region plus one labeled marker.
///
/// The overlay geometry is fixed by the renderer; the dataset supplies the
/// label text and colors.
#[derive(Debug, Clone)]
pub struct Overlay {
    label: String,
    sublabel: String,
    marker_color: Color,
    region_fill: Color,
    region_stroke: Color,
}

impl Overlay {
    /// Creates an overlay from label lines and CSS color strings.
    ///
    /// # Errors
    ///
    /// Returns [`VizError::Dataset`] if any color string fails to parse.
    pub fn new(
        label: impl Into<String>,
        sublabel: impl Into<String>,
        marker_color: &str,
        region_fill: &str,
        region_stroke: &str,
    ) -> Result<Self, VizError> {
        Ok(Self {
            label: label.into(),
            sublabel: sublabel.into(),
            marker_color: Color::new(marker_color).map_err(VizError::Dataset)?,
            region_fill: Color::new(region_fill).map_err(VizError::Dataset)?,
            region_stroke: Color::new(region_stroke).map_err(VizError::Dataset)?,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn sublabel(&self) -> &str {
        &self.sublabel
    }

    pub fn marker_color(&self) -> &Color {
        &self.marker_color
    }

    pub fn region_fill(&self) -> &Color {
        &self.region_fill
    }

    pub fn region_stroke(&self) -> &Color {
        &self.region_stroke
    }
}

/// The validated component graph behind the architecture diagram.
#[derive(Debug)]
pub struct ArchitectureGraph {
    graph: DiGraph<Node, Connection>,
    node_id_map: HashMap<String, NodeIndex>,
}

impl ArchitectureGraph {
    /// Builds a graph from nodes and connections.
    ///
    /// Node insertion order is preserved and determines rendering order
    /// within each category group.
    ///
    /// # Errors
    ///
    /// Returns [`VizError::Graph`] if a node name occurs twice or a
    /// connection refers to a node that does not exist; the error names
    /// the offending node or connection.
    pub fn from_parts(nodes: Vec<Node>, connections: Vec<Connection>) -> Result<Self, VizError> {
        let mut graph = DiGraph::new();
        let mut node_id_map = HashMap::new();

        for node in nodes {
            let name = node.name().to_string();
            let idx = graph.add_node(node);
            if node_id_map.insert(name.clone(), idx).is_some() {
                return Err(VizError::Graph(format!("Duplicate node name: {name}")));
            }
        }

        for connection in connections {
            match (
                node_id_map.get(connection.source()),
                node_id_map.get(connection.target()),
            ) {
                (Some(&source_idx), Some(&target_idx)) => {
                    graph.add_edge(source_idx, target_idx, connection);
                }
                _ => {
                    return Err(VizError::Graph(format!(
                        "Connection refers to undefined nodes: {} -> {}",
                        connection.source(),
                        connection.target()
                    )));
                }
            }
        }

        let built = Self { graph, node_id_map };
        trace!(nodes = built.node_count(), connections = built.connection_count(); "Graph built");
        Ok(built)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn connection_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Looks up a node by name.
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.node_id_map.get(name).map(|&idx| &self.graph[idx])
    }

    /// Iterates nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.node_indices().map(|idx| &self.graph[idx])
    }

    /// Iterates connections with their resolved endpoint nodes, in
    /// insertion order.
    pub fn connections_with_endpoints(&self) -> impl Iterator<Item = (&Node, &Node)> {
        self.graph.edge_indices().map(|idx| {
            let (source, target) = self
                .graph
                .edge_endpoints(idx)
                .expect("Edge index should exist");
            (&self.graph[source], &self.graph[target])
        })
    }

    /// Groups nodes by category, keyed in order of first appearance.
    ///
    /// Every node lands in exactly one group, so the groups partition the
    /// node set.
    pub fn nodes_by_category(&self) -> IndexMap<&str, Vec<&Node>> {
        let mut groups: IndexMap<&str, Vec<&Node>> = IndexMap::new();
        for node in self.nodes() {
            groups.entry(node.category()).or_default().push(node);
        }
        groups
    }
}
