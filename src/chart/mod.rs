//! Status statistics and the proportional donut chart built from them

mod arcs;
mod distribution;

pub use arcs::{
    arc_path, layout_arcs, polar_to_cartesian, ArcSegment, ChartGeometry, DonutChart, Point,
};
pub use distribution::{
    completion_percent, count_by_status, count_status_labels, to_percentages, StatusCounts,
    StatusShare,
};
