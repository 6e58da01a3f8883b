//! Donut chart geometry
//!
//! Angles are in degrees, 0 pointing up and increasing clockwise, with
//! SVG's downward y axis. Each segment advances the layout cursor by its
//! ideal sweep (`percent / 100 * 360`), so the layout always closes the
//! circle. The visible wedge starts half a gap after the cursor and is
//! `max(ideal - gap, min_visible)` wide, which keeps tiny shares visible
//! at the cost of strict proportionality.

use serde::{Deserialize, Serialize};

use super::distribution::{completion_percent, count_by_status, to_percentages, StatusShare};
use crate::domain::{Deliverable, TaskStatus};

/// A point in chart coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Converts a polar angle (0 = up, clockwise) to chart coordinates
pub fn polar_to_cartesian(center: Point, radius: f64, angle_degrees: f64) -> Point {
    let radians = (angle_degrees - 90.0).to_radians();
    Point {
        x: center.x + radius * radians.cos(),
        y: center.y + radius * radians.sin(),
    }
}

/// SVG path for a filled ring wedge between two angles
pub fn arc_path(
    center: Point,
    inner_radius: f64,
    outer_radius: f64,
    start: f64,
    end: f64,
) -> String {
    let inner_start = polar_to_cartesian(center, inner_radius, end);
    let inner_end = polar_to_cartesian(center, inner_radius, start);
    let outer_start = polar_to_cartesian(center, outer_radius, end);
    let outer_end = polar_to_cartesian(center, outer_radius, start);
    let large_arc = u8::from(end - start > 180.0);

    [
        format!("M {} {}", outer_start.x, outer_start.y),
        format!(
            "A {r} {r} 0 {large_arc} 0 {} {}",
            outer_end.x,
            outer_end.y,
            r = outer_radius
        ),
        format!("L {} {}", inner_end.x, inner_end.y),
        format!(
            "A {r} {r} 0 {large_arc} 1 {} {}",
            inner_start.x,
            inner_start.y,
            r = inner_radius
        ),
        "Z".to_string(),
    ]
    .join(" ")
}

/// Size of the donut and the spacing rules between its wedges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartGeometry {
    /// Width and height of the square canvas
    pub size: f64,

    pub outer_radius: f64,

    pub inner_radius: f64,

    /// Degrees left empty between neighbouring wedges
    pub gap_angle: f64,

    /// Smallest sweep a non-empty wedge is drawn with
    pub min_visible_angle: f64,

    /// Wedges below this share get no percentage label
    pub min_label_percent: u32,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self {
            size: 160.0,
            outer_radius: 72.0,
            inner_radius: 44.0,
            gap_angle: 3.0,
            min_visible_angle: 2.0,
            min_label_percent: 12,
        }
    }
}

impl ChartGeometry {
    pub fn center(&self) -> Point {
        Point::new(self.size / 2.0, self.size / 2.0)
    }

    /// Radius halfway through the ring, where labels sit
    pub fn label_radius(&self) -> f64 {
        (self.inner_radius + self.outer_radius) / 2.0
    }
}

/// One laid-out wedge of the donut
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcSegment {
    pub status: TaskStatus,
    pub count: usize,
    pub percent: u32,
    /// Share of the full circle before gap and minimum adjustments
    pub ideal_sweep: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Label anchor at the middle of the visible sweep
    pub label: Point,
    pub path: String,
}

impl ArcSegment {
    pub fn visible_sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn shows_label(&self, min_percent: u32) -> bool {
        self.percent >= min_percent
    }
}

/// Lays out shares as consecutive wedges starting at 0 degrees
pub fn layout_arcs(shares: &[StatusShare], geometry: &ChartGeometry) -> Vec<ArcSegment> {
    let center = geometry.center();
    let mut cursor = 0.0_f64;

    shares
        .iter()
        .map(|share| {
            let ideal_sweep = (f64::from(share.percent) / 100.0) * 360.0;
            let visible_sweep = (ideal_sweep - geometry.gap_angle).max(geometry.min_visible_angle);
            let start_angle = cursor + geometry.gap_angle / 2.0;
            let end_angle = start_angle + visible_sweep;
            cursor += ideal_sweep;

            let mid_angle = (start_angle + end_angle) / 2.0;
            ArcSegment {
                status: share.status,
                count: share.count,
                percent: share.percent,
                ideal_sweep,
                start_angle,
                end_angle,
                label: polar_to_cartesian(center, geometry.label_radius(), mid_angle),
                path: arc_path(
                    center,
                    geometry.inner_radius,
                    geometry.outer_radius,
                    start_angle,
                    end_angle,
                ),
            }
        })
        .collect()
}

/// A complete status donut for a set of deliverables
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonutChart {
    pub total: usize,
    pub completion_percent: u32,
    pub segments: Vec<ArcSegment>,
    #[serde(skip)]
    geometry: ChartGeometry,
}

impl DonutChart {
    pub fn from_deliverables(deliverables: &[Deliverable], geometry: &ChartGeometry) -> Self {
        let counts = count_by_status(deliverables);
        let shares = to_percentages(&counts, deliverables.len());

        Self {
            total: deliverables.len(),
            completion_percent: completion_percent(&counts),
            segments: layout_arcs(&shares, geometry),
            geometry: geometry.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Renders a standalone SVG document
    pub fn render_svg(&self) -> String {
        let size = self.geometry.size;
        let center = self.geometry.center();
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
        );
        svg.push('\n');

        if self.is_empty() {
            svg.push_str(&format!(
                r##"  <text x="{}" y="{}" text-anchor="middle" dominant-baseline="central" font-size="12" fill="#9ca3af">No deliverables</text>"##,
                center.x, center.y
            ));
            svg.push_str("\n</svg>\n");
            return svg;
        }

        for segment in &self.segments {
            svg.push_str(&format!(
                "  <path d=\"{}\" fill=\"{}\"><title>{}: {} ({}%)</title></path>\n",
                segment.path,
                segment.status.color(),
                escape_xml(segment.status.label()),
                segment.count,
                segment.percent
            ));
        }

        for segment in self
            .segments
            .iter()
            .filter(|s| s.shows_label(self.geometry.min_label_percent))
        {
            svg.push_str(&format!(
                "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\" font-size=\"12\" font-weight=\"bold\" fill=\"white\">{}%</text>\n",
                segment.label.x, segment.label.y, segment.percent
            ));
        }

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\" font-size=\"24\" font-weight=\"bold\">{}%</text>\n",
            center.x, center.y, self.completion_percent
        ));
        svg.push_str("</svg>\n");
        svg
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
