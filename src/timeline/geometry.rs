// src/timeline/geometry.rs

//! Pixel geometry of dependency connectors.

use serde::Deserialize;

use crate::timeline::edges::EdgeAnchors;

/// Fixed measurements of the chart canvas.
///
/// Mirrors the `[chart]` section of a snapshot file:
///
/// ```toml
/// [chart]
/// label_column_px = 256
/// canvas_px = 1280
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartGeometry {
    /// Width of the task-name column left of the bars.
    pub label_column_px: f64,
    /// Height of the header row.
    pub header_px: f64,
    /// Height of one task row.
    pub row_px: f64,
    /// Vertical offset of a bar's centre line inside its row.
    pub bar_center_px: f64,
    /// Width that 100% of the window maps to.
    pub canvas_px: f64,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self {
            label_column_px: 256.0,
            header_px: 70.0,
            row_px: 60.0,
            bar_center_px: 28.0,
            canvas_px: 1024.0,
        }
    }
}

impl ChartGeometry {
    /// X coordinate of a window percentage.
    pub fn x_for_percent(&self, percent: f64) -> f64 {
        self.label_column_px + self.canvas_px * percent / 100.0
    }

    /// Y coordinate of the bar centre in row `row`.
    pub fn y_for_row(&self, row: usize) -> f64 {
        self.header_px + row as f64 * self.row_px + self.bar_center_px
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A quadratic curve from the end of the dependency bar to the start of the
/// dependent bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    pub from: Point,
    pub control: Point,
    pub to: Point,
}

impl Connector {
    /// Lay out the connector for an edge between two rows.
    ///
    /// Returns `None` when either task has no bar.
    pub fn between(
        anchors: &EdgeAnchors,
        from_row: usize,
        to_row: usize,
        geometry: &ChartGeometry,
    ) -> Option<Self> {
        let (from_pct, to_pct) = anchors.both()?;

        let from = Point {
            x: geometry.x_for_percent(from_pct),
            y: geometry.y_for_row(from_row),
        };
        let to = Point {
            x: geometry.x_for_percent(to_pct),
            y: geometry.y_for_row(to_row),
        };
        let control = Point {
            x: (from.x + to.x) / 2.0,
            y: (from.y + to.y) / 2.0,
        };

        Some(Self { from, control, to })
    }
}
