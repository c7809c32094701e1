use serde::{Deserialize, Serialize};

/// Lengths the driver constructs when nothing else is given.
pub const DEFAULT_LENGTHS: [i32; 2] = [10, 20];

/// Root configuration structure, read from `.counted.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CountedConfig {
    /// Driver settings
    #[serde(default)]
    pub run: Option<RunSection>,
}

/// `[run]` table. Every field is optional so a file can override just one.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RunSection {
    /// Lengths to construct, in order
    #[serde(default)]
    pub lengths: Option<Vec<i32>>,

    /// Index of the value whose square is reported
    #[serde(default)]
    pub report: Option<usize>,

    /// Construct on the rayon pool
    #[serde(default)]
    pub parallel: Option<bool>,
}

impl CountedConfig {
    pub fn lengths(&self) -> Vec<i32> {
        self.run
            .as_ref()
            .and_then(|run| run.lengths.clone())
            .unwrap_or_else(|| DEFAULT_LENGTHS.to_vec())
    }

    pub fn report(&self) -> usize {
        self.run.as_ref().and_then(|run| run.report).unwrap_or(0)
    }

    pub fn parallel(&self) -> bool {
        self.run.as_ref().and_then(|run| run.parallel).unwrap_or(false)
    }
}
