use crate::config::{FIT_HEIGHT_MARGIN, FIT_WIDTH_MARGIN};
use crate::placement::Size;

/// Measurements needed to fit a container inside the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitBounds {
    /// `clientWidth` of the bounding element.
    pub client_width: f64,
    /// `scrollHeight` of the bounding element.
    pub scroll_height: f64,
    /// `innerHeight` of the window.
    pub viewport_height: f64,
}

impl FitBounds {
    pub fn available(&self) -> Size {
        Size::new(
            self.client_width - FIT_WIDTH_MARGIN,
            self.scroll_height.min(self.viewport_height - FIT_HEIGHT_MARGIN),
        )
    }
}

/// Zoom factor (never above 1) that shrinks `content` to fit `bounds`.
/// Unmeasurable content (zero or non-finite size) and collapsed bounds leave the zoom at 1.
pub fn zoom_factor(content: Size, bounds: FitBounds) -> f64 {
    if !(content.width > 0.0 && content.height > 0.0)
        || !content.width.is_finite()
        || !content.height.is_finite()
    {
        return 1.0;
    }
    let available = bounds.available();
    let factor = (available.width / content.width)
        .min(available.height / content.height)
        .min(1.0);
    if factor.is_finite() && factor > 0.0 {
        factor
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(w: f64, h: f64, vh: f64) -> FitBounds {
        FitBounds {
            client_width: w,
            scroll_height: h,
            viewport_height: vh,
        }
    }

    #[test]
    fn small_content_is_not_enlarged() {
        let f = zoom_factor(Size::new(200.0, 100.0), bounds(1920.0, 3000.0, 1080.0));
        assert_eq!(f, 1.0);
    }

    #[test]
    fn wide_content_scales_to_width() {
        let f = zoom_factor(Size::new(2000.0, 500.0), bounds(1010.0, 3000.0, 1080.0));
        assert!((f - 0.5).abs() < 1e-12);
    }

    #[test]
    fn tall_content_scales_to_viewport() {
        // viewport (1020 - 20) is tighter than scroll height
        let f = zoom_factor(Size::new(500.0, 2000.0), bounds(1920.0, 5000.0, 1020.0));
        assert!((f - 0.5).abs() < 1e-12);
    }

    #[test]
    fn short_page_uses_scroll_height() {
        let f = zoom_factor(Size::new(500.0, 1600.0), bounds(1920.0, 800.0, 1080.0));
        assert!((f - 0.5).abs() < 1e-12);
    }

    #[test]
    fn zero_sized_content_keeps_unit_zoom() {
        assert_eq!(zoom_factor(Size::new(0.0, 100.0), bounds(800.0, 800.0, 800.0)), 1.0);
        assert_eq!(zoom_factor(Size::new(100.0, 0.0), bounds(800.0, 800.0, 800.0)), 1.0);
    }
}
