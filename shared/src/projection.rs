use std::f64::consts::FRAC_PI_4;

use crate::config::MapConfig;

/// Latitude beyond which the Mercator y-coordinate is clamped.
const MAX_LATITUDE: f64 = 85.051_128_78;

/// Spherical Mercator projection from degrees to canvas pixels.
///
/// `center` (lon, lat) maps onto `translate`; `scale` is pixels per radian.
/// Canvas y grows downward, so north is up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mercator {
    pub center: (f64, f64),
    pub scale: f64,
    pub translate: (f64, f64),
    center_raw: (f64, f64),
}

impl Mercator {
    pub fn new(center: (f64, f64), scale: f64, translate: (f64, f64)) -> Self {
        Self {
            center,
            scale,
            translate,
            center_raw: mercator_raw(center.0, center.1),
        }
    }

    /// The fixed projection for a map canvas: center from config,
    /// scale proportional to canvas width, translated to the canvas middle.
    pub fn for_canvas(config: &MapConfig) -> Self {
        let width = config.natural_width;
        let height = config.natural_height();
        Self::new(
            config.center,
            width * config.scale_factor,
            (width / 2.0, height / 2.0),
        )
    }

    pub fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        let (x, y) = mercator_raw(lon, lat);
        (
            self.translate.0 + (x - self.center_raw.0) * self.scale,
            self.translate.1 - (y - self.center_raw.1) * self.scale,
        )
    }
}

fn mercator_raw(lon: f64, lat: f64) -> (f64, f64) {
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let lambda = lon.to_radians();
    let phi = lat.to_radians();
    (lambda, (FRAC_PI_4 + phi / 2.0).tan().ln())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn india() -> Mercator {
        Mercator::for_canvas(&MapConfig::default())
    }

    #[test]
    fn center_projects_to_canvas_middle() {
        let p = india();
        let (x, y) = p.project(79.9629, 23.5937);
        assert!((x - 600.0).abs() < 1e-9);
        assert!((y - 631.5).abs() < 1e-9);
    }

    #[test]
    fn east_is_right_and_north_is_up() {
        let p = india();
        let (cx, cy) = p.project(79.9629, 23.5937);
        let (ex, ey) = p.project(85.0, 23.5937);
        let (nx, ny) = p.project(79.9629, 30.0);
        assert!(ex > cx);
        assert!((ey - cy).abs() < 1e-9);
        assert!(ny < cy);
        assert!((nx - cx).abs() < 1e-9);
    }

    #[test]
    fn longitude_scale_is_linear() {
        let p = india();
        let (x0, _) = p.project(79.9629, 0.0);
        let (x1, _) = p.project(80.9629, 0.0);
        let expected = 1800.0 * 1f64.to_radians();
        assert!(((x1 - x0) - expected).abs() < 1e-9);
    }

    #[test]
    fn poles_stay_finite() {
        let (_, y) = india().project(0.0, 90.0);
        assert!(y.is_finite());
    }
}
