//! Architecture diagram rendering.
//!
//! Draw order is part of the contract: edges and their arrowheads first,
//! node markers second so they occlude edge endpoints, the annotation
//! overlay last.

use log::{debug, warn};
use svg::Document;
use svg::node::element::{Circle, Group, Path, Rectangle};

use indexmap::IndexMap;

use crate::{
    config::StyleConfig,
    error::VizError,
    geometry::{Point, Size},
    graph::{ArchitectureGraph, Node, Overlay, Palette},
    layout::{ARROWHEAD_OFFSET, Viewport, arrowhead_for_segment},
};

use super::{anchored_label, arrows, base_document, centered_label, chart_title, title_case};

const CANVAS: Size = Size::new(800.0, 880.0);
const PLOT_ORIGIN: Point = Point::new(40.0, 140.0);
// Square plot area keeps the x/y scales uniform so arrowhead angles
// survive projection.
const PLOT_SIDE: f32 = 720.0;

const EDGE_STROKE: &str = "#455A64";
const EDGE_WIDTH: f32 = 3.0;
const ARROW_SIZE: f32 = 12.0;
const NODE_RADIUS: f32 = 30.0;
const NODE_LABEL_SIZE: f32 = 11.0;
const LEGEND_Y: f32 = 90.0;

/// Renders the architecture diagram for a validated graph.
///
/// Nodes whose category has no palette entry are skipped with a logged
/// warning.
pub fn render(
    title: &str,
    graph: &ArchitectureGraph,
    palette: &Palette,
    overlay: &Overlay,
    style: &StyleConfig,
) -> Result<Document, VizError> {
    let viewport = Viewport::new(
        (0.0, 1.0),
        (0.0, 1.0),
        PLOT_ORIGIN,
        Size::new(PLOT_SIDE, PLOT_SIDE),
    );

    let background = style.background_color().map_err(VizError::Config)?;
    let mut doc = base_document(CANVAS, background.as_ref());
    doc = doc.add(chart_title(title, CANVAS.width() / 2.0));

    // Edges and arrowheads go behind the node markers.
    let mut edges = Group::new();
    for (source, target) in graph.connections_with_endpoints() {
        let start = viewport.project(source.position());
        let end = viewport.project(target.position());

        edges = edges.add(
            Path::new()
                .set("d", arrows::straight_path_data(start, end))
                .set("fill", "none")
                .set("stroke", EDGE_STROKE)
                .set("stroke-width", EDGE_WIDTH),
        );

        // Coincident endpoints produce no arrowhead.
        if let Some(arrowhead) =
            arrowhead_for_segment(start, end, ARROWHEAD_OFFSET * viewport.scale_x())
        {
            edges = edges.add(arrows::arrowhead_marker(arrowhead, ARROW_SIZE, EDGE_STROKE));
        }
    }
    doc = doc.add(edges);

    // One marker set per category, in palette order.
    let groups = graph.nodes_by_category();
    for (category, color) in palette.iter() {
        let Some(nodes) = groups.get(category) else {
            continue;
        };

        let mut group = Group::new();
        for node in nodes {
            let center = viewport.project(node.position());
            group = group
                .add(
                    Circle::new()
                        .set("cx", center.x())
                        .set("cy", center.y())
                        .set("r", NODE_RADIUS)
                        .set("fill", color)
                        .set("stroke", "white")
                        .set("stroke-width", 3),
                )
                .add(
                    centered_label(node.name(), center.x(), center.y(), NODE_LABEL_SIZE, "white")
                        .set("font-weight", "bold"),
                );
        }
        doc = doc.add(group);
    }

    for node in graph.nodes() {
        if palette.get(node.category()).is_none() {
            warn!(node = node.name(), category = node.category(); "Skipping node with unknown category");
        }
    }

    doc = doc.add(render_legend(palette, &groups));

    // The annotation overlay is drawn last, unconditionally.
    doc = doc.add(render_overlay(overlay, &viewport));

    debug!("Architecture document rendered");
    Ok(doc)
}

fn render_legend(palette: &Palette, groups: &IndexMap<&str, Vec<&Node>>) -> Group {
    let entries: Vec<_> = palette
        .iter()
        .filter(|(category, _)| groups.contains_key(category))
        .collect();

    let mut legend = Group::new();
    let spacing = CANVAS.width() / (entries.len() as f32 + 1.0);
    for (i, (category, color)) in entries.iter().enumerate() {
        let x = spacing * (i as f32 + 1.0);
        legend = legend
            .add(
                Circle::new()
                    .set("cx", x)
                    .set("cy", LEGEND_Y)
                    .set("r", 8)
                    .set("fill", *color)
                    .set("stroke", "white")
                    .set("stroke-width", 2),
            )
            .add(anchored_label(
                &title_case(category),
                x + 14.0,
                LEGEND_Y,
                12.0,
                "black",
            ));
    }
    legend
}

fn render_overlay(overlay: &Overlay, viewport: &Viewport) -> Group {
    let top_left = viewport.project(Point::new(0.05, 0.95));
    let bottom_right = viewport.project(Point::new(0.95, 0.05));

    let region = Rectangle::new()
        .set("x", top_left.x())
        .set("y", top_left.y())
        .set("width", bottom_right.x() - top_left.x())
        .set("height", bottom_right.y() - top_left.y())
        .set("fill", overlay.region_fill())
        .set("stroke", overlay.region_stroke())
        .set("stroke-width", 2)
        .set("stroke-dasharray", "3,5");

    let center = viewport.project(Point::new(0.5, 0.1));
    let marker = Circle::new()
        .set("cx", center.x())
        .set("cy", center.y())
        .set("r", 20)
        .set("fill", overlay.marker_color())
        .set("stroke", "white")
        .set("stroke-width", 2);

    Group::new()
        .add(region)
        .add(marker)
        .add(centered_label(
            overlay.label(),
            center.x(),
            center.y() - 5.5,
            10.0,
            "white",
        ))
        .add(centered_label(
            overlay.sublabel(),
            center.x(),
            center.y() + 5.5,
            10.0,
            "white",
        ))
}
