//! Dataset definition and validation.
//!
//! All chart and report content is carried by a [`Dataset`] value built
//! once at startup. The built-in HealthSync data is embedded as literal
//! Rust ([`Dataset::builtin`]); because every type here implements
//! [`serde::Deserialize`], the same structures can be loaded from an
//! external TOML file instead, keeping the renderers and report logic
//! decoupled from the concrete data.
//!
//! Raw specs are unchecked; the `build_*` methods validate them into the
//! model types the renderers consume.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{
    error::VizError,
    geometry::Point,
    graph::{ArchitectureGraph, Connection, Node, Overlay, Palette},
    journey::{Journey, KindPalette, Step, StepKind},
    report::{FeatureRow, RoiRow, TechSpecRow},
};

mod builtin;

/// Everything needed to produce the diagrams and reports.
#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    pub architecture: ArchitectureData,
    pub journey: JourneyData,
    pub reports: ReportData,
}

/// Raw architecture diagram data: components, connections, palette, and
/// the annotation overlay.
#[derive(Debug, Clone, Deserialize)]
pub struct ArchitectureData {
    pub title: String,
    pub components: Vec<ComponentSpec>,
    pub connections: Vec<ConnectionSpec>,
    /// Category → CSS color string, in legend order.
    pub palette: IndexMap<String, String>,
    pub overlay: OverlaySpec,
}

/// A component entry: name, unit-square position, grouping category.
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentSpec {
    pub name: String,
    pub pos: [f32; 2],
    pub category: String,
}

/// A directed connection between two component names.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionSpec {
    pub source: String,
    pub target: String,
}

/// Label lines and colors for the annotation overlay.
#[derive(Debug, Clone, Deserialize)]
pub struct OverlaySpec {
    pub label: String,
    pub sublabel: String,
    pub marker_color: String,
    pub region_fill: String,
    pub region_stroke: String,
}

impl ArchitectureData {
    /// Validates components and connections into an [`ArchitectureGraph`].
    pub fn build_graph(&self) -> Result<ArchitectureGraph, VizError> {
        let nodes = self
            .components
            .iter()
            .map(|spec| {
                Node::new(
                    spec.name.clone(),
                    Point::new(spec.pos[0], spec.pos[1]),
                    spec.category.clone(),
                )
            })
            .collect();

        let connections = self
            .connections
            .iter()
            .map(|spec| Connection::new(spec.source.clone(), spec.target.clone()))
            .collect();

        ArchitectureGraph::from_parts(nodes, connections)
    }

    /// Parses the palette colors into a [`Palette`].
    pub fn build_palette(&self) -> Result<Palette, VizError> {
        Palette::from_entries(self.palette.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Parses the overlay colors into an [`Overlay`].
    pub fn build_overlay(&self) -> Result<Overlay, VizError> {
        Overlay::new(
            self.overlay.label.clone(),
            self.overlay.sublabel.clone(),
            &self.overlay.marker_color,
            &self.overlay.region_fill,
            &self.overlay.region_stroke,
        )
    }
}

/// Raw user-journey data: steps and the kind palette.
#[derive(Debug, Clone, Deserialize)]
pub struct JourneyData {
    pub title: String,
    pub steps: Vec<StepSpec>,
    /// Step kind name → CSS color string.
    pub palette: IndexMap<String, String>,
}

/// A journey step entry.
#[derive(Debug, Clone, Deserialize)]
pub struct StepSpec {
    pub id: u32,
    pub title: String,
    pub display_title: String,
    pub description: String,
    pub kind: StepKind,
    pub time: String,
}

impl JourneyData {
    /// Validates the step list into a [`Journey`].
    pub fn build_journey(&self) -> Result<Journey, VizError> {
        let steps = self
            .steps
            .iter()
            .map(|spec| {
                Step::new(
                    spec.id,
                    spec.title.clone(),
                    spec.display_title.clone(),
                    spec.description.clone(),
                    spec.kind,
                    spec.time.clone(),
                )
            })
            .collect();

        Journey::new(steps)
    }

    /// Parses the kind palette into a [`KindPalette`].
    pub fn build_palette(&self) -> Result<KindPalette, VizError> {
        let mut entries = Vec::with_capacity(self.palette.len());
        for (kind_name, color_str) in &self.palette {
            let kind = kind_name
                .parse::<StepKind>()
                .map_err(VizError::Dataset)?;
            entries.push((kind, color_str.as_str()));
        }
        KindPalette::from_entries(entries)
    }
}

/// The three report tables.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportData {
    pub features: Vec<FeatureRow>,
    pub roi: Vec<RoiRow>,
    pub tech_specs: Vec<TechSpecRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dataset_validates() {
        let dataset = Dataset::builtin();

        let graph = dataset.architecture.build_graph().unwrap();
        assert_eq!(graph.node_count(), 9);
        assert_eq!(graph.connection_count(), 10);

        let palette = dataset.architecture.build_palette().unwrap();
        assert_eq!(palette.len(), 6);

        dataset.architecture.build_overlay().unwrap();

        let journey = dataset.journey.build_journey().unwrap();
        assert_eq!(journey.len(), 12);
        dataset.journey.build_palette().unwrap();

        assert_eq!(dataset.reports.features.len(), 17);
        assert_eq!(dataset.reports.roi.len(), 10);
        assert_eq!(dataset.reports.tech_specs.len(), 10);
    }

    #[test]
    fn test_builtin_nodes_lie_in_unit_square() {
        let graph = Dataset::builtin().architecture.build_graph().unwrap();
        for node in graph.nodes() {
            let pos = node.position();
            assert!((0.0..=1.0).contains(&pos.x()), "{} x out of range", node.name());
            assert!((0.0..=1.0).contains(&pos.y()), "{} y out of range", node.name());
        }
    }

    #[test]
    fn test_builtin_categories_are_all_in_palette() {
        let dataset = Dataset::builtin();
        let graph = dataset.architecture.build_graph().unwrap();
        let palette = dataset.architecture.build_palette().unwrap();

        for node in graph.nodes() {
            assert!(
                palette.get(node.category()).is_some(),
                "category {} missing from palette",
                node.category()
            );
        }
    }

    #[test]
    fn test_unknown_connection_endpoint_fails_build() {
        let mut dataset = Dataset::builtin();
        dataset.architecture.connections.push(ConnectionSpec {
            source: "User Interface".to_string(),
            target: "Ghost Component".to_string(),
        });

        let err = dataset.architecture.build_graph().unwrap_err();
        assert!(err.to_string().contains("User Interface -> Ghost Component"));
    }

    #[test]
    fn test_unknown_kind_in_journey_palette_fails_build() {
        let mut dataset = Dataset::builtin();
        dataset
            .journey
            .palette
            .insert("teleport".to_string(), "#000000".to_string());

        assert!(dataset.journey.build_palette().is_err());
    }
}
