//! User-journey flowchart model.
//!
//! A journey is an ordered list of steps walked top to bottom. Decision
//! steps additionally branch: the main path continues to the next step and
//! a loop-back path returns to the previous step.

use std::str::FromStr;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{color::Color, error::VizError};

/// The kind of a journey step, controlling marker shape and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Start,
    Action,
    Ai,
    Review,
    Decision,
    Monitoring,
    End,
}

impl StepKind {
    /// Returns the lowercase name used in datasets and palettes.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Action => "action",
            Self::Ai => "ai",
            Self::Review => "review",
            Self::Decision => "decision",
            Self::Monitoring => "monitoring",
            Self::End => "end",
        }
    }

    /// AI and decision steps render as diamonds, everything else as circles.
    pub fn is_diamond(self) -> bool {
        matches!(self, Self::Ai | Self::Decision)
    }
}

impl FromStr for StepKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Self::Start),
            "action" => Ok(Self::Action),
            "ai" => Ok(Self::Ai),
            "review" => Ok(Self::Review),
            "decision" => Ok(Self::Decision),
            "monitoring" => Ok(Self::Monitoring),
            "end" => Ok(Self::End),
            _ => Err(format!("Invalid step kind: {s}")),
        }
    }
}

/// A single step in the user journey.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    id: u32,
    title: String,
    display_title: String,
    description: String,
    kind: StepKind,
    time: String,
}

impl Step {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        display_title: impl Into<String>,
        description: impl Into<String>,
        kind: StepKind,
        time: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            display_title: display_title.into(),
            description: description.into(),
            kind,
            time: time.into(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Abbreviated title rendered next to the marker.
    pub fn display_title(&self) -> &str {
        &self.display_title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> StepKind {
        self.kind
    }

    /// Free-form time estimate ("30 seconds", "Ongoing", ...).
    pub fn time(&self) -> &str {
        &self.time
    }
}

/// Step kind → color lookup for the journey flowchart.
#[derive(Debug, Clone, Default)]
pub struct KindPalette {
    colors: IndexMap<StepKind, Color>,
}

impl KindPalette {
    /// Builds a palette from (kind, CSS color string) pairs.
    ///
    /// # Errors
    ///
    /// Returns [`VizError::Dataset`] if any color string fails to parse.
    pub fn from_entries<'a, I>(entries: I) -> Result<Self, VizError>
    where
        I: IntoIterator<Item = (StepKind, &'a str)>,
    {
        let mut colors = IndexMap::new();
        for (kind, color_str) in entries {
            let color = Color::new(color_str).map_err(VizError::Dataset)?;
            colors.insert(kind, color);
        }
        Ok(Self { colors })
    }

    pub fn get(&self, kind: StepKind) -> Option<&Color> {
        self.colors.get(&kind)
    }
}

/// An ordered, validated list of journey steps.
#[derive(Debug)]
pub struct Journey {
    steps: Vec<Step>,
}

impl Journey {
    /// Builds a journey from a step list.
    ///
    /// # Errors
    ///
    /// Returns [`VizError::Dataset`] if the list is empty or step ids are
    /// not unique.
    pub fn new(steps: Vec<Step>) -> Result<Self, VizError> {
        if steps.is_empty() {
            return Err(VizError::Dataset("Journey has no steps".to_string()));
        }

        let mut seen = std::collections::HashSet::new();
        for step in &steps {
            if !seen.insert(step.id()) {
                return Err(VizError::Dataset(format!(
                    "Duplicate journey step id: {}",
                    step.id()
                )));
            }
        }

        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Distinct step kinds in order of first appearance.
    ///
    /// This fixes the legend ordering deterministically.
    pub fn kinds_in_first_appearance_order(&self) -> Vec<StepKind> {
        let mut kinds = Vec::new();
        for step in &self.steps {
            if !kinds.contains(&step.kind()) {
                kinds.push(step.kind());
            }
        }
        kinds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(id: u32, kind: StepKind) -> Step {
        Step::new(id, format!("Step {id}"), format!("S{id}"), "desc", kind, "1 minute")
    }

    #[test]
    fn test_builds_journey() {
        let journey =
            Journey::new(vec![step(1, StepKind::Start), step(2, StepKind::End)]).unwrap();
        assert_eq!(journey.len(), 2);
        assert_eq!(journey.steps()[0].display_title(), "S1");
    }

    #[test]
    fn test_rejects_empty_journey() {
        assert!(Journey::new(vec![]).is_err());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err =
            Journey::new(vec![step(1, StepKind::Start), step(1, StepKind::End)]).unwrap_err();
        assert!(err.to_string().contains("Duplicate journey step id: 1"));
    }

    #[test]
    fn test_kind_parsing_round_trip() {
        for kind in [
            StepKind::Start,
            StepKind::Action,
            StepKind::Ai,
            StepKind::Review,
            StepKind::Decision,
            StepKind::Monitoring,
            StepKind::End,
        ] {
            assert_eq!(kind.as_str().parse::<StepKind>().unwrap(), kind);
        }
        assert!("teleport".parse::<StepKind>().is_err());
    }

    #[test]
    fn test_diamond_kinds() {
        assert!(StepKind::Ai.is_diamond());
        assert!(StepKind::Decision.is_diamond());
        assert!(!StepKind::Action.is_diamond());
    }

    #[test]
    fn test_kinds_in_first_appearance_order() {
        let journey = Journey::new(vec![
            step(1, StepKind::Start),
            step(2, StepKind::Action),
            step(3, StepKind::Action),
            step(4, StepKind::Ai),
            step(5, StepKind::Start),
        ])
        .unwrap();

        assert_eq!(
            journey.kinds_in_first_appearance_order(),
            vec![StepKind::Start, StepKind::Action, StepKind::Ai]
        );
    }
}
