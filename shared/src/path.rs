use std::fmt::Write;

use crate::geo::{Geometry, lon_lat};
use crate::projection::Mercator;

/// Build an SVG path `d` attribute for a polygonal geometry.
/// Each ring becomes one closed subpath; degenerate rings (< 3 points) are skipped.
pub fn svg_path(geometry: &Geometry, projection: &Mercator) -> String {
    let mut d = String::new();
    for ring in geometry.rings() {
        let points: Vec<(f64, f64)> = ring
            .iter()
            .filter_map(|pos| lon_lat(pos))
            .map(|(lon, lat)| projection.project(lon, lat))
            .collect();
        if points.len() < 3 {
            continue;
        }
        for (i, (x, y)) in points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{cmd}{},{}", round2(*x), round2(*y));
        }
        d.push('Z');
    }
    d
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
