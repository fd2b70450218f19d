//! User-journey flowchart rendering.
//!
//! Steps run top to bottom in a single column. Decision steps branch:
//! the accepted path continues straight down while a dashed loop-back
//! path returns to the previous step.

use log::{debug, warn};
use svg::Document;
use svg::node::element::{Circle, Group, Path};

use crate::{
    color::Color,
    config::StyleConfig,
    error::VizError,
    geometry::{Point, Size},
    journey::{Journey, KindPalette, StepKind},
    layout::{Viewport, journey_positions},
};

use super::{anchored_label, arrows, base_document, chart_title, title_case};

const CANVAS_WIDTH: f32 = 700.0;
const PLOT_ORIGIN: Point = Point::new(40.0, 80.0);
const PLOT_WIDTH: f32 = 620.0;
const X_RANGE: (f32, f32) = (-0.5, 4.5);
/// Vertical pixels per chart unit; the canvas grows with the step count.
const UNIT_HEIGHT: f32 = 60.0;

const FLOW_STROKE: &str = "#5D878F";
const FLOW_WIDTH: f32 = 3.0;
const LOOP_WIDTH: f32 = 2.0;
/// How far the loop-back route swings right of the column, in chart units.
const LOOP_EXTENT: f32 = 0.8;
const DIAMOND_RADIUS: f32 = 14.0;
const CIRCLE_RADIUS: f32 = 12.0;
const LABEL_OFFSET: f32 = 20.0;
/// Chart-unit x offset of the time annotation column.
const TIME_OFFSET: f32 = 1.2;
const LEGEND_X: f32 = 0.2;

const ACCEPT_LABEL: &str = "Accept";
const MODIFY_LABEL: &str = "Modify";

/// Renders the journey flowchart.
///
/// Steps whose kind has no palette entry are skipped with a logged
/// warning.
pub fn render(
    title: &str,
    journey: &Journey,
    palette: &KindPalette,
    style: &StyleConfig,
) -> Result<Document, VizError> {
    let steps = journey.steps();
    let y_max = steps.len() as f32 + 2.0;
    let plot_height = y_max * UNIT_HEIGHT;
    let canvas = Size::new(CANVAS_WIDTH, PLOT_ORIGIN.y() + plot_height + 20.0);

    let viewport = Viewport::new(
        X_RANGE,
        (0.0, y_max),
        PLOT_ORIGIN,
        Size::new(PLOT_WIDTH, plot_height),
    );

    let background = style.background_color().map_err(VizError::Config)?;
    let mut doc = base_document(canvas, background.as_ref());
    doc = doc.add(chart_title(title, CANVAS_WIDTH / 2.0));

    let positions = journey_positions(steps.len());

    // Flow lines go behind the step markers.
    let mut lines = Group::new();
    for i in 0..steps.len().saturating_sub(1) {
        lines = lines.add(
            Path::new()
                .set(
                    "d",
                    arrows::straight_path_data(
                        viewport.project(positions[i]),
                        viewport.project(positions[i + 1]),
                    ),
                )
                .set("fill", "none")
                .set("stroke", FLOW_STROKE)
                .set("stroke-width", FLOW_WIDTH),
        );

        if steps[i].kind() == StepKind::Decision && i > 0 {
            lines = add_loop_back(lines, &viewport, positions[i], positions[i - 1]);
        }
    }
    doc = doc.add(lines);

    // Step markers, display titles, and time annotations.
    let mut markers = Group::new();
    for (step, position) in steps.iter().zip(&positions) {
        let Some(color) = palette.get(step.kind()) else {
            warn!(step = step.title(), kind = step.kind().as_str(); "Skipping step with unknown kind");
            continue;
        };

        let center = viewport.project(*position);
        markers = markers
            .add(marker_shape(step.kind(), center, 1.0, color))
            .add(anchored_label(
                step.display_title(),
                center.x() + LABEL_OFFSET,
                center.y(),
                14.0,
                "black",
            ));

        let time_at = viewport.project(Point::new(position.x() + TIME_OFFSET, position.y()));
        markers = markers.add(anchored_label(
            step.time(),
            time_at.x(),
            time_at.y(),
            11.0,
            "gray",
        ));
    }
    doc = doc.add(markers);

    doc = doc.add(render_legend(journey, palette, &viewport));

    debug!("Journey document rendered");
    Ok(doc)
}

/// Dashed orthogonal route from a decision step back to its predecessor,
/// with the branch labels.
fn add_loop_back(lines: Group, viewport: &Viewport, here: Point, back: Point) -> Group {
    let route = [
        here,
        Point::new(here.x() + LOOP_EXTENT, here.y()),
        Point::new(here.x() + LOOP_EXTENT, back.y()),
        back,
    ]
    .map(|p| viewport.project(p));

    let accept_at = viewport.project(Point::new(here.x() + 0.4, here.y()));
    let modify_at = viewport.project(Point::new(here.x() + 1.2, here.y() + 0.5));

    lines
        .add(
            Path::new()
                .set("d", arrows::polyline_path_data(&route))
                .set("fill", "none")
                .set("stroke", FLOW_STROKE)
                .set("stroke-width", LOOP_WIDTH)
                .set("stroke-dasharray", "2,5"),
        )
        .add(anchored_label(
            ACCEPT_LABEL,
            accept_at.x(),
            accept_at.y(),
            10.0,
            FLOW_STROKE,
        ))
        .add(anchored_label(
            MODIFY_LABEL,
            modify_at.x(),
            modify_at.y(),
            10.0,
            FLOW_STROKE,
        ))
}

/// A step marker: diamond for AI and decision kinds, circle otherwise.
fn marker_shape(kind: StepKind, center: Point, scale: f32, color: &Color) -> Group {
    let group = Group::new();
    if kind.is_diamond() {
        let r = DIAMOND_RADIUS * scale;
        let data = format!(
            "M {} {} L {} {} L {} {} L {} {} Z",
            center.x(),
            center.y() - r,
            center.x() + r,
            center.y(),
            center.x(),
            center.y() + r,
            center.x() - r,
            center.y()
        );
        group.add(
            Path::new()
                .set("d", data)
                .set("fill", color)
                .set("stroke", "white")
                .set("stroke-width", 3.0 * scale),
        )
    } else {
        group.add(
            Circle::new()
                .set("cx", center.x())
                .set("cy", center.y())
                .set("r", CIRCLE_RADIUS * scale)
                .set("fill", color)
                .set("stroke", "white")
                .set("stroke-width", 3.0 * scale),
        )
    }
}

/// Legend column of distinct kinds in order of first appearance.
fn render_legend(journey: &Journey, palette: &KindPalette, viewport: &Viewport) -> Group {
    let top = journey.len() as f32 + 1.0;

    let mut legend = Group::new();
    for (i, kind) in journey.kinds_in_first_appearance_order().iter().enumerate() {
        // Unknown kinds were already reported while drawing markers.
        let Some(color) = palette.get(*kind) else {
            continue;
        };

        let at = viewport.project(Point::new(LEGEND_X, top - i as f32 * 0.4));
        legend = legend.add(marker_shape(*kind, at, 0.6, color)).add(anchored_label(
            &title_case(kind.as_str()),
            at.x() + 14.0,
            at.y(),
            12.0,
            "black",
        ));
    }
    legend
}
