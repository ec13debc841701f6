/// Fill for regions with no score.
pub const UNSCORED_COLOR: (u8, u8, u8) = (58, 62, 78);

/// Piecewise-linear color scale over `[0, 1]`.
pub struct ColorRamp {
    stops: &'static [(f64, (u8, u8, u8))],
}

/// Sequential vulnerability scale: pale sand for low scores, deep maroon for high ones.
pub const SEVI_RAMP: ColorRamp = ColorRamp {
    stops: &[
        (0.0, (255, 244, 222)),
        (0.4, (252, 186, 120)),
        (0.7, (232, 96, 64)),
        (1.0, (128, 16, 38)),
    ],
};

impl ColorRamp {
    /// Color at `t`; out-of-range values clamp to the end stops and NaN reads as 0.
    pub fn sample(&self, t: f64) -> (u8, u8, u8) {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let Some(&(first_pos, first)) = self.stops.first() else {
            return UNSCORED_COLOR;
        };
        if t <= first_pos {
            return first;
        }

        // index of the first stop strictly past t
        let upper = self.stops.partition_point(|(pos, _)| *pos <= t);
        match (self.stops.get(upper - 1), self.stops.get(upper)) {
            (Some(&(lo_pos, lo)), Some(&(hi_pos, hi))) => {
                let f = (t - lo_pos) / (hi_pos - lo_pos);
                (mix(lo.0, hi.0, f), mix(lo.1, hi.1, f), mix(lo.2, hi.2, f))
            }
            (Some(&(_, last)), None) => last,
            _ => first,
        }
    }
}

fn mix(a: u8, b: u8, f: f64) -> u8 {
    (f64::from(a) + (f64::from(b) - f64::from(a)) * f).round() as u8
}

/// Choropleth color for a score in `[0, 1]`.
pub fn score_color(score: f64) -> (u8, u8, u8) {
    SEVI_RAMP.sample(score)
}

pub fn fill_for(score: Option<f64>) -> (u8, u8, u8) {
    score.map(score_color).unwrap_or(UNSCORED_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn luma((r, g, b): (u8, u8, u8)) -> f64 {
        0.2126 * f64::from(r) + 0.7152 * f64::from(g) + 0.0722 * f64::from(b)
    }

    #[test]
    fn stops_are_hit_exactly() {
        assert_eq!(score_color(0.0), (255, 244, 222));
        assert_eq!(score_color(0.4), (252, 186, 120));
        assert_eq!(score_color(0.7), (232, 96, 64));
        assert_eq!(score_color(1.0), (128, 16, 38));
    }

    #[test]
    fn midpoint_blends_neighbouring_stops() {
        assert_eq!(score_color(0.55), (242, 141, 92));
    }

    #[test]
    fn higher_scores_are_never_lighter() {
        let samples: Vec<f64> = (0..=100).map(|i| luma(score_color(i as f64 / 100.0))).collect();
        assert!(samples.windows(2).all(|w| w[1] <= w[0] + 1e-9));
    }

    #[test]
    fn scale_saturates_outside_unit_range() {
        assert_eq!(score_color(-0.5), score_color(0.0));
        assert_eq!(score_color(2.0), score_color(1.0));
        assert_eq!(score_color(f64::NAN), score_color(0.0));
    }

    #[test]
    fn unscored_regions_stand_apart_from_the_scale() {
        assert_eq!(fill_for(None), UNSCORED_COLOR);
        assert!((0..=20).all(|i| score_color(i as f64 / 20.0) != UNSCORED_COLOR));
        assert_eq!(fill_for(Some(0.99)), score_color(0.99));
    }
}
