//! Report tables, delimited export, and derived summaries.
//!
//! Three fixed tables (features, ROI metrics, technical specifications)
//! are written as comma-delimited files and summarized as human-readable
//! text. Aggregation is direct computation over small tables; the only
//! policy worth stating is the field-escaping rule in [`to_delimited`].

use std::{fs, path::Path};

use log::info;
use serde::Deserialize;

use crate::{dataset::ReportData, error::VizError};

/// A table row type with a fixed column layout.
pub trait Tabular {
    /// Column headers, in output order.
    fn headers() -> &'static [&'static str];

    /// The row's fields rendered as output strings, matching `headers`.
    fn fields(&self) -> Vec<String>;
}

/// One implemented feature with its category and estimated time saving.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeatureRow {
    pub category: String,
    pub feature: String,
    pub status: String,
    pub benefit: String,
    pub minutes_saved: u32,
}

impl Tabular for FeatureRow {
    fn headers() -> &'static [&'static str] {
        &[
            "Feature Category",
            "Specific Feature",
            "Implementation Status",
            "User Benefit",
            "Time Saved (minutes)",
        ]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.category.clone(),
            self.feature.clone(),
            self.status.clone(),
            self.benefit.clone(),
            self.minutes_saved.to_string(),
        ]
    }
}

/// One ROI metric compared with and without HealthSync AI.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoiRow {
    pub metric: String,
    pub baseline: f64,
    pub with_healthsync: f64,
    pub improvement: f64,
}

impl Tabular for RoiRow {
    fn headers() -> &'static [&'static str] {
        &[
            "Metric",
            "Baseline (Without AI)",
            "With HealthSync AI",
            "Improvement",
        ]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.metric.clone(),
            format_number(self.baseline),
            format_number(self.with_healthsync),
            format_number(self.improvement),
        ]
    }
}

/// One technical component with its technology and key capability.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TechSpecRow {
    pub component: String,
    pub technology: String,
    pub capability: String,
}

impl Tabular for TechSpecRow {
    fn headers() -> &'static [&'static str] {
        &["Component", "Technology", "Key Capability"]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.component.clone(),
            self.technology.clone(),
            self.capability.clone(),
        ]
    }
}

/// Formats a numeric field, dropping the fraction for whole values.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Quotes a field if it contains the delimiter, a double quote, or a line
/// break; embedded quotes are doubled (RFC 4180). Everything else is
/// written verbatim.
fn escape_field(field: &str, delimiter: char) -> String {
    if field.contains(delimiter) || field.contains('"') || field.contains('\n') || field.contains('\r')
    {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Renders rows as delimited text: a header line then one line per row,
/// preserving column order.
pub fn to_delimited<R: Tabular>(rows: &[R], delimiter: char) -> String {
    let mut out = String::new();

    let header = R::headers()
        .iter()
        .map(|h| escape_field(h, delimiter))
        .collect::<Vec<_>>()
        .join(&delimiter.to_string());
    out.push_str(&header);
    out.push('\n');

    for row in rows {
        let line = row
            .fields()
            .iter()
            .map(|f| escape_field(f, delimiter))
            .collect::<Vec<_>>()
            .join(&delimiter.to_string());
        out.push_str(&line);
        out.push('\n');
    }

    out
}

/// Writes rows as a comma-delimited file, overwriting any previous run.
pub fn write_csv<R: Tabular>(rows: &[R], path: impl AsRef<Path>) -> Result<(), VizError> {
    let path = path.as_ref();
    info!(path = path.display().to_string(), rows = rows.len(); "Writing report");
    fs::write(path, to_delimited(rows, ','))?;
    Ok(())
}

/// Derived aggregates over the features table.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSummary {
    pub total_features: usize,
    pub categories: usize,
    pub minutes_saved: u32,
}

impl FeatureSummary {
    pub fn from_rows(rows: &[FeatureRow]) -> Self {
        let mut categories: Vec<&str> = Vec::new();
        for row in rows {
            if !categories.contains(&row.category.as_str()) {
                categories.push(&row.category);
            }
        }

        Self {
            total_features: rows.len(),
            categories: categories.len(),
            minutes_saved: rows.iter().map(|row| row.minutes_saved).sum(),
        }
    }
}

impl std::fmt::Display for FeatureSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total Features Implemented: {}", self.total_features)?;
        writeln!(f, "Feature Categories: {}", self.categories)?;
        write!(
            f,
            "Total Time Saved per User: {} minutes per scheduling cycle",
            self.minutes_saved
        )
    }
}

/// Metrics with a positive improvement, in table order.
#[derive(Debug, Clone, PartialEq)]
pub struct RoiSummary {
    improvements: Vec<(String, f64)>,
}

impl RoiSummary {
    pub fn from_rows(rows: &[RoiRow]) -> Self {
        Self {
            improvements: rows
                .iter()
                .filter(|row| row.improvement > 0.0)
                .map(|row| (row.metric.clone(), row.improvement))
                .collect(),
        }
    }

    pub fn improvements(&self) -> &[(String, f64)] {
        &self.improvements
    }
}

impl std::fmt::Display for RoiSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (metric, improvement) in &self.improvements {
            if !first {
                writeln!(f)?;
            }
            write!(f, "- {metric}: +{improvement:.1}")?;
            first = false;
        }
        Ok(())
    }
}

/// Derived aggregates over the tech-specs table.
#[derive(Debug, Clone, PartialEq)]
pub struct TechSummary {
    pub components: usize,
    pub ai_components: usize,
}

impl TechSummary {
    pub fn from_rows(rows: &[TechSpecRow]) -> Self {
        Self {
            components: rows.len(),
            ai_components: rows
                .iter()
                .filter(|row| row.component.contains("AI"))
                .count(),
        }
    }
}

/// Assembles the full console summary: derived aggregates plus the static
/// product copy that accompanies the reports.
pub fn console_summary(data: &ReportData) -> String {
    let features = FeatureSummary::from_rows(&data.features);
    let roi = RoiSummary::from_rows(&data.roi);
    let tech = TechSummary::from_rows(&data.tech_specs);

    let mut out = String::new();
    out.push_str("HealthSync AI MVP - Comprehensive Analysis\n");
    out.push_str(&"=".repeat(50));
    out.push_str("\n\nFEATURE SUMMARY:\n");
    out.push_str(&features.to_string());

    out.push_str("\n\nROI ANALYSIS:\n");
    out.push_str(&roi.to_string());

    out.push_str("\n\nTECHNICAL CAPABILITIES:\n");
    out.push_str("Frontend: Modern React.js application\n");
    out.push_str(&format!(
        "AI Integration: {} AI-powered components\n",
        tech.ai_components
    ));
    out.push_str("Security: PIPEDA compliant with end-to-end encryption\n");
    out.push_str("Integration: Healthcare provider APIs and insurance systems\n");

    out.push_str("\nKEY INNOVATIONS:\n");
    out.push_str("1. Automated insurance document processing with 95% accuracy\n");
    out.push_str("2. AI-powered adaptive health preference questionnaire\n");
    out.push_str("3. Annual healthcare scheduling with proactive appointment optimization\n");
    out.push_str("4. Real-time provider communication and appointment confirmation\n");
    out.push_str("5. Privacy-first design meeting Canadian healthcare regulations\n");

    out.push_str("\nUSER EXPERIENCE HIGHLIGHTS:\n");
    out.push_str("- Complete workflow from insurance upload to appointment confirmation\n");
    out.push_str("- Intuitive annual calendar view with visual appointment management\n");
    out.push_str("- Mobile-responsive design for access anywhere, anytime\n");
    out.push_str("- Real-time status tracking and provider communication\n");
    out.push_str("- Transparent privacy controls and data management\n");

    out.push_str("\nFiles Created:\n");
    out.push_str("- healthsync_features_analysis.csv - Detailed feature breakdown\n");
    out.push_str("- healthsync_roi_metrics.csv - Expected return on investment\n");
    out.push_str("- healthsync_technical_specifications.csv - Technical implementation details\n");

    out
}
