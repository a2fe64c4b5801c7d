//! Plot - SVG rendering of a GeometryState
//!
//! Fixed window x,y in [-5,5] with equal aspect. World y points up, SVG y
//! points down, so every y is negated when building point strings. Grid
//! lines are drawn faintly, the unit square stands out, and the basis
//! vectors are arrows from the origin labeled e1/e2.

use dioxus::prelude::*;

use crate::geometry::{GRID_EXTENT, GeometryState};
use crate::math::{Point, PointSet};

const GRID_COLOR: &str = "#334155";
const AXIS_COLOR: &str = "#4b5563";
const SQUARE_COLOR: &str = "#3b82f6";
const E1_COLOR: &str = "#22c55e";
const E2_COLOR: &str = "#f59e0b";

/// SVG `points` attribute for a polyline, world y negated
fn polyline_points(set: &PointSet) -> String {
    set.points()
        .iter()
        .map(|p| format!("{:.4},{:.4}", p.x, -p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Triangle head for an arrow from the origin to `tip`, or None for a tip
/// too close to the origin to orient.
fn arrow_head(tip: Point) -> Option<String> {
    let len = tip.length();
    if len < 1e-9 {
        return None;
    }
    let (ux, uy) = (tip.x / len, tip.y / len);
    let (px, py) = (-uy, ux);
    let (h, w) = (0.22, 0.09);
    let base = Point::new(tip.x - ux * h, tip.y - uy * h);
    let left = Point::new(base.x + px * w, base.y + py * w);
    let right = Point::new(base.x - px * w, base.y - py * w);
    Some(
        [tip, left, right]
            .iter()
            .map(|p| format!("{:.4},{:.4}", p.x, -p.y))
            .collect::<Vec<_>>()
            .join(" "),
    )
}

/// Label anchor just past the arrow tip
fn label_pos(tip: Point) -> (f64, f64) {
    let len = tip.length();
    if len < 1e-9 {
        return (0.2, -0.2);
    }
    (tip.x * (1.0 + 0.35 / len), -(tip.y * (1.0 + 0.35 / len)))
}

#[component]
fn BasisArrow(tip: Point, color: &'static str, label: &'static str) -> Element {
    let head = arrow_head(tip);
    let (lx, ly) = label_pos(tip);
    let (x2, y2) = (tip.x, -tip.y);
    rsx! {
        line {
            x1: "0",
            y1: "0",
            x2: "{x2}",
            y2: "{y2}",
            stroke: color,
            stroke_width: "0.05",
        }
        if let Some(points) = head {
            polygon { points: "{points}", fill: color }
        }
        text {
            x: "{lx}",
            y: "{ly}",
            fill: color,
            font_size: "0.4",
            font_style: "italic",
            text_anchor: "middle",
            dominant_baseline: "middle",
            "{label}"
        }
    }
}

/// The fixed-window plot of the current geometry
#[component]
pub fn Plot(state: GeometryState) -> Element {
    let lo = -GRID_EXTENT;
    let span = 2.0 * GRID_EXTENT;
    let square = polyline_points(&state.square);
    let corner = state.square.points().get(2).copied().unwrap_or(Point::ORIGIN);
    let (label_x, label_y) = (corner.x, -corner.y - 0.25);

    rsx! {
        svg {
            view_box: "{lo} {lo} {span} {span}",
            width: "640",
            height: "640",
            style: "background: #1a1a2e; border: 1px solid #2a2a4a; border-radius: 8px;",

            // Reference grid, low emphasis
            for points in state.grid.iter().map(polyline_points) {
                polyline {
                    points: "{points}",
                    fill: "none",
                    stroke: GRID_COLOR,
                    stroke_width: "0.02",
                    opacity: "0.6",
                }
            }

            // Fixed axes
            line { x1: "{lo}", y1: "0", x2: "{GRID_EXTENT}", y2: "0", stroke: AXIS_COLOR, stroke_width: "0.03" }
            line { x1: "0", y1: "{lo}", x2: "0", y2: "{GRID_EXTENT}", stroke: AXIS_COLOR, stroke_width: "0.03" }

            // Unit square, high emphasis
            polyline {
                points: "{square}",
                fill: "rgba(59, 130, 246, 0.15)",
                stroke: SQUARE_COLOR,
                stroke_width: "0.06",
            }
            text {
                x: "{label_x}",
                y: "{label_y}",
                fill: SQUARE_COLOR,
                font_size: "0.35",
                text_anchor: "middle",
                "unit square"
            }

            BasisArrow { tip: state.e1, color: E1_COLOR, label: "e\u{2081}" }
            BasisArrow { tip: state.e2, color: E2_COLOR, label: "e\u{2082}" }
        }
    }
}
