use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const GENERIC_TITLE: &str = "Experiment Results";
pub const GENERIC_DESCRIPTION: &str = "Experiment completed successfully.";

/// Shown where a chart would go. Charts are not drawn client-side.
pub const CHART_PLACEHOLDER: &str =
    "Experiment completed successfully. Chart rendering requires additional implementation.";

/// The predefined server-side benchmarks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExperimentKind {
    Collision,
    Lookup,
    Distribution,
    HashFunction,
}

impl ExperimentKind {
    pub const ALL: [ExperimentKind; 4] = [
        ExperimentKind::Collision,
        ExperimentKind::Lookup,
        ExperimentKind::Distribution,
        ExperimentKind::HashFunction,
    ];

    /// Identifier sent in the `type` form field.
    pub fn as_str(self) -> &'static str {
        match self {
            ExperimentKind::Collision => "collision",
            ExperimentKind::Lookup => "lookup",
            ExperimentKind::Distribution => "distribution",
            ExperimentKind::HashFunction => "hashfunction",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ExperimentKind::Collision => "Collision Analysis",
            ExperimentKind::Lookup => "Lookup Performance",
            ExperimentKind::Distribution => "Bucket Distribution",
            ExperimentKind::HashFunction => "Hash Function Comparison",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ExperimentKind::Collision => {
                "This experiment measures collision rates with different HashMap sizes and data sizes."
            }
            ExperimentKind::Lookup => {
                "This experiment measures lookup performance with different HashMap configurations."
            }
            ExperimentKind::Distribution => {
                "This experiment analyzes how items are distributed across buckets."
            }
            ExperimentKind::HashFunction => {
                "This experiment compares different hash functions with the same data."
            }
        }
    }

    /// Short label for the trigger button.
    pub fn button_label(self) -> &'static str {
        match self {
            ExperimentKind::Collision => "Collision Rates",
            ExperimentKind::Lookup => "Lookup Speed",
            ExperimentKind::Distribution => "Bucket Distribution",
            ExperimentKind::HashFunction => "Compare Hash Functions",
        }
    }
}

impl fmt::Display for ExperimentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown experiment type: {0}")]
pub struct UnknownExperiment(pub String);

impl FromStr for ExperimentKind {
    type Err = UnknownExperiment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExperimentKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownExperiment(s.to_string()))
    }
}

/// Title for a declared type string, falling back to the generic title.
pub fn title_for(kind: &str) -> &'static str {
    kind.parse::<ExperimentKind>()
        .map(ExperimentKind::title)
        .unwrap_or(GENERIC_TITLE)
}

/// Description for a declared type string, falling back to the generic one.
pub fn description_for(kind: &str) -> &'static str {
    kind.parse::<ExperimentKind>()
        .map(ExperimentKind::description)
        .unwrap_or(GENERIC_DESCRIPTION)
}
