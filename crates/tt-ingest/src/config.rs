//! Input locations for one build.

use std::path::PathBuf;

use serde::Deserialize;

/// Where to read the two record streams from.
///
/// Typically deserialized from the application's TOML file:
///
/// ```toml
/// segments_path  = "data/map_data.csv"
/// schedules_path = "data/timetables.csv"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoadConfig {
    pub segments_path:  PathBuf,
    pub schedules_path: PathBuf,
}

impl LoadConfig {
    pub fn new(segments_path: impl Into<PathBuf>, schedules_path: impl Into<PathBuf>) -> Self {
        Self {
            segments_path:  segments_path.into(),
            schedules_path: schedules_path.into(),
        }
    }
}
