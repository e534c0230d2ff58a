//! SVG geometry for the dashboard line chart.
//!
//! # Responsibility
//! - Turn normalized points into SVG `points` attribute strings.
//! - Render a self-contained SVG document (line, area fill, grid).
//!
//! # Invariants
//! - The area outline always starts at `0,100` and ends at `100,100`.
//! - Coordinates carry at most four fractional digits, no trailing zeros.

use crate::chart::normalize::{PlotPoint, VIEWPORT_SIZE};
use serde::{Deserialize, Serialize};

const GRADIENT_ID: &str = "grad";
const COORD_DECIMALS: usize = 4;

/// Visual settings for [`render_svg`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    /// Line and gradient color, any SVG color literal.
    pub stroke_color: String,
    pub stroke_width: f64,
    /// Opacity at the top of the area gradient; fades to zero at the bottom.
    pub fill_opacity: f64,
    /// Number of evenly spaced horizontal grid lines.
    pub grid_lines: usize,
    pub grid_stroke_width: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            stroke_color: "#f97316".to_string(),
            stroke_width: 1.5,
            fill_opacity: 0.35,
            grid_lines: 5,
            grid_stroke_width: 0.2,
        }
    }
}

/// Horizontal grid line spanning the full viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
}

/// Everything a UI needs to draw the chart without recomputing geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub points: Vec<PlotPoint>,
    /// `points` attribute for the line.
    pub polyline: String,
    /// `points` attribute for the filled area under the line.
    pub area: String,
    pub grid: Vec<GridLine>,
}

impl ChartGeometry {
    /// Builds line, area and `grid_line_count` grid lines from plot points.
    pub fn from_points(points: Vec<PlotPoint>, grid_line_count: usize) -> Self {
        let polyline = polyline_points(&points);
        let area = area_from_polyline(&polyline);
        Self {
            points,
            polyline,
            area,
            grid: grid_lines(grid_line_count),
        }
    }
}

/// Joins points as `x,y` pairs separated by spaces.
pub fn polyline_points(points: &[PlotPoint]) -> String {
    points
        .iter()
        .map(|point| format!("{},{}", format_coord(point.x), format_coord(point.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Closes the line down to the bottom edge on both sides.
pub fn area_points(points: &[PlotPoint]) -> String {
    area_from_polyline(&polyline_points(points))
}

/// Evenly spaced lines; the last one sits on the bottom edge.
pub fn grid_lines(count: usize) -> Vec<GridLine> {
    if count == 0 {
        return Vec::new();
    }
    let step = VIEWPORT_SIZE / count as f64;
    (1..=count)
        .map(|index| GridLine {
            x1: 0.0,
            x2: VIEWPORT_SIZE,
            y: index as f64 * step,
        })
        .collect()
}

/// Renders a standalone SVG document for the given geometry.
pub fn render_svg(geometry: &ChartGeometry, style: &ChartStyle) -> String {
    let size = format_coord(VIEWPORT_SIZE);
    let color = escape_attr(&style.stroke_color);
    let mut svg = String::new();

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {size} {size}" preserveAspectRatio="none">"#
    ));
    svg.push_str(&format!(
        r#"<defs><linearGradient id="{GRADIENT_ID}" x1="0" y1="0" x2="0" y2="1"><stop offset="0%" stop-color="{color}" stop-opacity="{}"/><stop offset="100%" stop-color="{color}" stop-opacity="0"/></linearGradient></defs>"#,
        format_coord(style.fill_opacity)
    ));
    svg.push_str(&format!(
        r#"<polyline fill="none" stroke="{color}" stroke-width="{}" points="{}"/>"#,
        format_coord(style.stroke_width),
        geometry.polyline
    ));
    svg.push_str(&format!(
        r#"<polygon fill="url(#{GRADIENT_ID})" points="{}"/>"#,
        geometry.area
    ));
    for line in &geometry.grid {
        let y = format_coord(line.y);
        svg.push_str(&format!(
            r#"<line x1="{}" x2="{}" y1="{y}" y2="{y}" stroke="currentColor" stroke-width="{}"/>"#,
            format_coord(line.x1),
            format_coord(line.x2),
            format_coord(style.grid_stroke_width)
        ));
    }
    svg.push_str("</svg>");
    svg
}

/// Formats a coordinate with bounded precision and no trailing zeros.
pub fn format_coord(value: f64) -> String {
    let fixed = format!("{:.*}", COORD_DECIMALS, value);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

fn area_from_polyline(polyline: &str) -> String {
    let bottom = format_coord(VIEWPORT_SIZE);
    format!("0,{bottom} {polyline} {bottom},{bottom}")
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

#[cfg(test)]
mod tests {
    use super::{
        area_points, format_coord, grid_lines, polyline_points, render_svg, ChartGeometry,
        ChartStyle,
    };
    use crate::chart::normalize::{normalize_values, PlotPoint};

    #[test]
    fn format_coord_trims_trailing_zeros() {
        assert_eq!(format_coord(100.0), "100");
        assert_eq!(format_coord(0.0), "0");
        assert_eq!(format_coord(58.333333333), "58.3333");
        assert_eq!(format_coord(16.5), "16.5");
        assert_eq!(format_coord(-0.00001), "0");
    }

    #[test]
    fn polyline_and_area_strings() {
        let points = normalize_values(&[10.0, 20.0]).unwrap();
        assert_eq!(polyline_points(&points), "0,58.3333 100,16.6667");
        assert_eq!(area_points(&points), "0,100 0,58.3333 100,16.6667 100,100");
    }

    #[test]
    fn grid_lines_split_viewport_evenly() {
        let ys = grid_lines(5).iter().map(|line| line.y).collect::<Vec<_>>();
        assert_eq!(ys, vec![20.0, 40.0, 60.0, 80.0, 100.0]);
        assert!(grid_lines(0).is_empty());
    }

    #[test]
    fn render_svg_contains_all_layers() {
        let style = ChartStyle::default();
        let geometry = ChartGeometry::from_points(
            vec![PlotPoint { x: 0.0, y: 50.0 }, PlotPoint { x: 100.0, y: 25.0 }],
            style.grid_lines,
        );
        let svg = render_svg(&geometry, &style);

        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"viewBox="0 0 100 100""#));
        assert!(svg.contains(
            r##"<polyline fill="none" stroke="#f97316" stroke-width="1.5" points="0,50 100,25"/>"##
        ));
        assert!(svg.contains(
            r#"<polygon fill="url(#grad)" points="0,100 0,50 100,25 100,100"/>"#
        ));
        assert!(svg.contains(r#"stop-opacity="0.35""#));
        assert_eq!(svg.matches("<line ").count(), 5);

        let bare = ChartGeometry::from_points(geometry.points.clone(), 0);
        assert!(bare.grid.is_empty());
        assert_eq!(bare.polyline, geometry.polyline);
    }
}
