//! HealthSync collateral generation.
//!
//! Layout and rendering for the HealthSync AI MVP architecture diagram and
//! user-journey flowchart, plus the tabular analysis reports that accompany
//! them. Chart content is carried by a swappable [`dataset::Dataset`];
//! rendering goes through [`ChartBuilder`], report export and summaries
//! through the [`report`] module.

pub mod config;
pub mod dataset;
pub mod graph;
pub mod journey;
pub mod report;

mod color;
mod error;
mod export;
mod geometry;
mod layout;

pub use color::Color;
pub use error::VizError;
pub use geometry::{Point, Size};

use log::info;

use config::AppConfig;
use graph::{ArchitectureGraph, Overlay, Palette};
use journey::{Journey, KindPalette};

/// Renders validated chart models to SVG strings.
///
/// # Examples
///
/// ```rust
/// use healthsync_viz::{ChartBuilder, dataset::Dataset};
///
/// let data = Dataset::builtin().architecture;
/// let graph = data.build_graph().expect("builtin data is valid");
/// let palette = data.build_palette().expect("builtin palette is valid");
/// let overlay = data.build_overlay().expect("builtin overlay is valid");
///
/// let builder = ChartBuilder::default();
/// let svg = builder
///     .render_architecture(&data.title, &graph, &palette, &overlay)
///     .expect("rendering is infallible for valid input");
/// assert!(svg.starts_with("<svg"));
/// ```
#[derive(Default)]
pub struct ChartBuilder {
    config: AppConfig,
}

impl ChartBuilder {
    /// Create a new chart builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Render the architecture diagram to an SVG string.
    ///
    /// Edges and their arrowheads are drawn first, node markers grouped by
    /// category second, and the annotation overlay last.
    ///
    /// # Errors
    ///
    /// Returns [`VizError::Config`] if the configured style contains an
    /// invalid color.
    pub fn render_architecture(
        &self,
        title: &str,
        graph: &ArchitectureGraph,
        palette: &Palette,
        overlay: &Overlay,
    ) -> Result<String, VizError> {
        info!(title; "Rendering architecture diagram");
        let doc =
            export::svg::render_architecture(title, graph, palette, overlay, self.config.style())?;
        Ok(doc.to_string())
    }

    /// Render the user-journey flowchart to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`VizError::Config`] if the configured style contains an
    /// invalid color.
    pub fn render_journey(
        &self,
        title: &str,
        journey: &Journey,
        palette: &KindPalette,
    ) -> Result<String, VizError> {
        info!(title; "Rendering journey flowchart");
        let doc = export::svg::render_journey(title, journey, palette, self.config.style())?;
        Ok(doc.to_string())
    }
}
