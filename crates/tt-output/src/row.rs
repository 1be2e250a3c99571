//! Plain data row types written by output backends.

/// One station (one line family at one stop name).
#[derive(Debug, Clone, PartialEq)]
pub struct StationRow {
    pub station_id:  u32,
    pub name:        String,
    pub line_family: String,
    pub lat:         f32,
    pub lon:         f32,
    pub multi_line:  bool,
    /// Line-variant names, `|`-separated.
    pub lines:       String,
}

/// One line-variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRow {
    pub line_id:     u32,
    pub name:        String,
    pub departure:   u32,
    pub arrival:     u32,
    /// Station ids in line order, `|`-separated.
    pub stations:    String,
    /// `HH:MM:SS` start times in read order, `|`-separated.
    pub start_times: String,
}

/// One undirected edge.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRow {
    pub edge_id:       u32,
    pub station_a:     u32,
    pub station_b:     u32,
    pub line_name:     String,
    pub duration_secs: u64,
    pub distance:      f32,
    pub transfer:      bool,
}

/// One scheduled visit of a line-variant at a station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitRow {
    pub station_id:   u32,
    pub station_name: String,
    pub line_id:      u32,
    pub line_name:    String,
    /// `HH:MM:SS`.
    pub time:         String,
}
