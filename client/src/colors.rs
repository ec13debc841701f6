/// Format an RGB triple as a CSS color string.
pub fn rgb_css((r, g, b): (u8, u8, u8)) -> String {
    format!("rgb({r},{g},{b})")
}

/// Brighten a color by a factor (1.0 = no change, >1.0 = brighter).
pub fn brighten((r, g, b): (u8, u8, u8), factor: f64) -> (u8, u8, u8) {
    (
        ((r as f64 * factor).min(255.0)) as u8,
        ((g as f64 * factor).min(255.0)) as u8,
        ((b as f64 * factor).min(255.0)) as u8,
    )
}

/// Inline `style` value for a region path, lifted when hovered.
pub fn region_style(fill: (u8, u8, u8), hovered: bool) -> String {
    let fill = if hovered { brighten(fill, 1.2) } else { fill };
    format!("fill: {};", rgb_css(fill))
}
