//! FILENAME: core/report-engine/src/trend.rs
//! Monthly trend series behind the dashboard's stacked-area chart.
//!
//! The chart contract is two parallel series (present/absent) over a
//! shared label axis. `TrendSource` is the seam a real aggregation over
//! stored history plugs into; `StaticTrendSource` is the stand-in used
//! until such history exists.

use serde::{Deserialize, Serialize};

// ============================================================================
// TREND POINTS
// ============================================================================

/// One period of the trend series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    /// Period label shown on the chart axis (e.g. "Jan").
    pub period: String,
    pub present: u32,
    pub absent: u32,
}

impl TrendPoint {
    pub fn new(period: impl Into<String>, present: u32, absent: u32) -> Self {
        TrendPoint { period: period.into(), present, absent }
    }
}

/// Supplies the month-by-month series. `months` is the window size,
/// newest period last.
pub trait TrendSource {
    fn monthly_trend(&self, months: usize) -> Vec<TrendPoint>;
}

// ============================================================================
// STATIC SOURCE
// ============================================================================

/// Placeholder source returning a fixed six-month series. Swap in an
/// implementation backed by recorded attendance history once one exists;
/// consumers only see the `TrendSource` trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticTrendSource;

const STATIC_SERIES: [(&str, u32, u32); 6] = [
    ("Jan", 186, 24),
    ("Feb", 192, 18),
    ("Mar", 201, 21),
    ("Apr", 189, 27),
    ("May", 205, 15),
    ("Jun", 198, 19),
];

impl TrendSource for StaticTrendSource {
    fn monthly_trend(&self, months: usize) -> Vec<TrendPoint> {
        let window = months.min(STATIC_SERIES.len());
        STATIC_SERIES[STATIC_SERIES.len() - window..]
            .iter()
            .map(|(period, present, absent)| TrendPoint::new(*period, *present, *absent))
            .collect()
    }
}

// ============================================================================
// CHART FEED
// ============================================================================

/// The shape the chart component consumes: parallel arrays of equal
/// length, one label and one value per series per period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendChartData {
    pub labels: Vec<String>,
    pub present: Vec<u32>,
    pub absent: Vec<u32>,
}

impl TrendChartData {
    pub fn from_points(points: &[TrendPoint]) -> Self {
        TrendChartData {
            labels: points.iter().map(|p| p.period.clone()).collect(),
            present: points.iter().map(|p| p.present).collect(),
            absent: points.iter().map(|p| p.absent).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
