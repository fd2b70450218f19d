//! SVG document construction shared by both chart renderers.

use svg::Document;
use svg::node::element::{Rectangle, Text};

use crate::{color::Color, geometry::Size};

mod architecture;
mod arrows;
mod journey;

pub use architecture::render as render_architecture;
pub use journey::render as render_journey;

const FONT_FAMILY: &str = "Arial";

/// Creates a document of the given pixel size with a solid background,
/// white unless the style configures otherwise.
fn base_document(size: Size, background: Option<&Color>) -> Document {
    let doc = Document::new()
        .set(
            "viewBox",
            format!("0 0 {} {}", size.width(), size.height()),
        )
        .set("width", size.width())
        .set("height", size.height());

    let rect = Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", size.width())
        .set("height", size.height());
    let rect = match background {
        Some(color) => rect.set("fill", color),
        None => rect.set("fill", "white"),
    };

    doc.add(rect)
}

/// Chart title, centered near the top of the canvas.
fn chart_title(title: &str, center_x: f32) -> Text {
    Text::new(title)
        .set("x", center_x)
        .set("y", 40)
        .set("text-anchor", "middle")
        .set("font-family", FONT_FAMILY)
        .set("font-size", 17)
        .set("font-weight", "bold")
        .set("fill", "black")
}

/// Text centered on a point, used for labels inside markers.
fn centered_label(content: &str, x: f32, y: f32, font_size: f32, fill: &str) -> Text {
    Text::new(content)
        .set("x", x)
        .set("y", y)
        .set("text-anchor", "middle")
        .set("dominant-baseline", "middle")
        .set("font-family", FONT_FAMILY)
        .set("font-size", font_size)
        .set("fill", fill)
}

/// Text anchored at its left edge, vertically centered on y.
fn anchored_label(content: &str, x: f32, y: f32, font_size: f32, fill: &str) -> Text {
    Text::new(content)
        .set("x", x)
        .set("y", y)
        .set("text-anchor", "start")
        .set("dominant-baseline", "middle")
        .set("font-family", FONT_FAMILY)
        .set("font-size", font_size)
        .set("fill", fill)
}

/// Title-cases a category or kind name for legend display
/// ("frontend" → "Frontend", "privacy_layer" → "Privacy Layer").
fn title_case(name: &str) -> String {
    name.replace('_', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("frontend"), "Frontend");
        assert_eq!(title_case("ai"), "Ai");
        assert_eq!(title_case("privacy_layer"), "Privacy Layer");
    }

    #[test]
    fn test_base_document_defaults_to_white() {
        let doc = base_document(Size::new(100.0, 50.0), None);
        let rendered = doc.to_string();
        assert!(rendered.contains("viewBox=\"0 0 100 50\""));
        assert!(rendered.contains("fill=\"white\""));
    }

    #[test]
    fn test_base_document_uses_configured_background() {
        let color = Color::new("#f0f0f0").unwrap();
        let rendered = base_document(Size::new(10.0, 10.0), Some(&color)).to_string();
        assert!(!rendered.contains("fill=\"white\""));
    }

    #[test]
    fn test_labels_carry_exact_content() {
        let rendered = centered_label("User Interface", 1.0, 2.0, 11.0, "white").to_string();
        assert!(rendered.contains(">User Interface</text>"));
    }
}
