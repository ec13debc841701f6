//! Tooltip placement relative to the map wrapper.
//!
//! All coordinates are wrapper-local CSS pixels with the origin at the wrapper's
//! top-left corner.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Right,
    Left,
    Top,
    Bottom,
}

impl Side {
    /// Tie-break order when two sides have the same room.
    pub const PREFERENCE: [Side; 4] = [Side::Right, Side::Left, Side::Top, Side::Bottom];
}

/// Room between the pointer and each wrapper edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Space {
    pub right: f64,
    pub left: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Space {
    pub fn around(pointer: (f64, f64), wrapper: Size) -> Self {
        let (x, y) = pointer;
        Self {
            right: wrapper.width - x,
            left: x,
            top: y,
            bottom: wrapper.height - y,
        }
    }

    pub fn get(&self, side: Side) -> f64 {
        match side {
            Side::Right => self.right,
            Side::Left => self.left,
            Side::Top => self.top,
            Side::Bottom => self.bottom,
        }
    }

    /// Side with the most room. A later side only wins with strictly more room.
    pub fn roomiest(&self) -> Side {
        Side::PREFERENCE
            .into_iter()
            .fold(Side::Right, |best, side| {
                if self.get(side) > self.get(best) {
                    side
                } else {
                    best
                }
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub side: Side,
    pub x: f64,
    pub y: f64,
}

/// Position a tooltip of size `tooltip` next to `pointer` inside `wrapper`.
///
/// The tooltip sits `gap` pixels off the pointer on the roomiest side, centered on
/// the other axis, then is clamped to stay `padding` pixels inside the wrapper.
/// A wrapper too small to hold the tooltip plus padding pins it at `padding`.
pub fn place_tooltip(
    pointer: (f64, f64),
    wrapper: Size,
    tooltip: Size,
    gap: f64,
    padding: f64,
) -> Placement {
    let (cx, cy) = pointer;
    let side = Space::around(pointer, wrapper).roomiest();

    let (x, y) = match side {
        Side::Right => (cx + gap, cy - tooltip.height / 2.0),
        Side::Left => (cx - tooltip.width - gap, cy - tooltip.height / 2.0),
        Side::Top => (cx - tooltip.width / 2.0, cy - tooltip.height - gap),
        Side::Bottom => (cx - tooltip.width / 2.0, cy + gap),
    };

    Placement {
        side,
        x: clamp_axis(x, wrapper.width, tooltip.width, padding),
        y: clamp_axis(y, wrapper.height, tooltip.height, padding),
    }
}

/// On-screen size over layout size for an element under CSS `zoom`.
///
/// Bounding rects and pointer coordinates are on-screen pixels while `left`/`top`
/// inside the zoomed subtree are layout pixels. Unmeasurable sizes give 1.
pub fn render_scale(rendered_width: f64, layout_width: f64) -> f64 {
    let scale = rendered_width / layout_width;
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    }
}

/// [`place_tooltip`] for on-screen measurements taken at `scale`.
///
/// Inputs are converted to layout pixels first, so `gap` and `padding` keep their
/// layout size and the result can be written to `left`/`top` as is.
pub fn place_tooltip_scaled(
    pointer: (f64, f64),
    wrapper: Size,
    tooltip: Size,
    gap: f64,
    padding: f64,
    scale: f64,
) -> Placement {
    let scale = if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    };
    let unzoom = |size: Size| Size::new(size.width / scale, size.height / scale);
    place_tooltip(
        (pointer.0 / scale, pointer.1 / scale),
        unzoom(wrapper),
        unzoom(tooltip),
        gap,
        padding,
    )
}

fn clamp_axis(pos: f64, extent: f64, size: f64, padding: f64) -> f64 {
    let max = extent - size - padding;
    let mut pos = pos;
    if pos < padding {
        pos = padding;
    }
    if pos > max {
        pos = max.max(padding);
    }
    pos
}
