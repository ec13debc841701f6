pub const INDIA_GEOJSON_URL: &str =
    "https://raw.githubusercontent.com/udit-001/india-maps-data/main/geojson/india.geojson";
pub const INDIA_NAME_FIELD: &str = "st_nm";

pub const NATURAL_WIDTH: f64 = 1200.0;
pub const ASPECT_RATIO: f64 = 0.95; // width / height
pub const PROJECTION_CENTER: (f64, f64) = (79.9629, 23.5937); // India, visually centered
pub const PROJECTION_SCALE_FACTOR: f64 = 1.5; // projection scale = width * factor

pub const TOOLTIP_GAP: f64 = 8.0;
pub const TOOLTIP_PADDING: f64 = 6.0;

pub const FIT_WIDTH_MARGIN: f64 = 10.0;
pub const FIT_HEIGHT_MARGIN: f64 = 20.0;

// DOM contract
pub const HOME_ID: &str = "home";
pub const MAP_ID: &str = "map";
pub const MAP_CONTAINER_SELECTOR: &str = "#home #map";
pub const WRAPPER_ID: &str = "map-svg-wrapper";
pub const TOOLTIP_ID: &str = "tooltip";
pub const OVERLAY_ID: &str = "loading-overlay";
pub const PREV_POSITION_ATTR: &str = "data-sevi-prev-position";

pub const DEFAULT_LOADING_TEXT: &str = "Loading\u{2026}";
pub const MAP_LOADING_TEXT: &str = "Loading map\u{2026}";
pub const MAP_FAILED_TEXT: &str = "Failed to load map";

/// Where region polygons come from, and which feature property names a region.
///
/// The URL and the property key always travel together: each published dataset
/// uses its own key (`st_nm` for the current source, `NAME_1` for older GADM exports).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    pub url: String,
    pub name_field: String,
}

impl Default for DataSource {
    fn default() -> Self {
        Self {
            url: INDIA_GEOJSON_URL.to_string(),
            name_field: INDIA_NAME_FIELD.to_string(),
        }
    }
}

impl DataSource {
    /// Parse a `?geojson=<url>&name_field=<key>` override from a location query string.
    /// Both keys must be present and non-empty; a half-specified override is ignored.
    pub fn from_query(search: &str) -> Option<Self> {
        let mut url = None;
        let mut name_field = None;
        for (key, value) in parse_query(search) {
            match key.as_str() {
                "geojson" => url = Some(value),
                "name_field" => name_field = Some(value),
                _ => {}
            }
        }
        let url = url.filter(|v| !v.trim().is_empty())?;
        let name_field = name_field.filter(|v| !v.trim().is_empty())?;
        Some(Self { url, name_field })
    }
}

/// Everything the map needs that isn't fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub source: DataSource,
    pub natural_width: f64,
    pub aspect_ratio: f64,
    pub center: (f64, f64),
    pub scale_factor: f64,
    pub tooltip_gap: f64,
    pub tooltip_padding: f64,
    pub fit_home_on_resize: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            source: DataSource::default(),
            natural_width: NATURAL_WIDTH,
            aspect_ratio: ASPECT_RATIO,
            center: PROJECTION_CENTER,
            scale_factor: PROJECTION_SCALE_FACTOR,
            tooltip_gap: TOOLTIP_GAP,
            tooltip_padding: TOOLTIP_PADDING,
            fit_home_on_resize: true,
        }
    }
}

impl MapConfig {
    /// Defaults, with any overrides present in the page query string applied.
    pub fn from_query(search: &str) -> Self {
        let mut config = Self::default();
        if let Some(source) = DataSource::from_query(search) {
            config.source = source;
        }
        if let Some(fit) = parse_query(search)
            .into_iter()
            .find(|(key, _)| key == "fit")
            .map(|(_, value)| parse_flag(&value))
        {
            config.fit_home_on_resize = fit;
        }
        config
    }

    pub fn natural_height(&self) -> f64 {
        (self.natural_width / self.aspect_ratio).round()
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.natural_width, self.natural_height())
    }
}

fn parse_query(search: &str) -> Vec<(String, String)> {
    let query = search.strip_prefix('?').unwrap_or(search);
    url::form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

fn parse_flag(value: &str) -> bool {
    let normalized = value.trim().to_ascii_lowercase();
    !matches!(normalized.as_str(), "0" | "false" | "no" | "off")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_height_preserves_aspect() {
        let config = MapConfig::default();
        assert_eq!(config.natural_height(), 1263.0);
        assert_eq!(config.view_box(), "0 0 1200 1263");
    }

    #[test]
    fn data_source_override_requires_both_keys() {
        assert_eq!(DataSource::from_query("?geojson=https%3A%2F%2Fx.test%2Fa.json"), None);
        assert_eq!(DataSource::from_query("?name_field=NAME_1"), None);
        assert_eq!(DataSource::from_query("?geojson=&name_field=NAME_1"), None);

        let source =
            DataSource::from_query("?geojson=https%3A%2F%2Fx.test%2Fa.json&name_field=NAME_1")
                .expect("override");
        assert_eq!(source.url, "https://x.test/a.json");
        assert_eq!(source.name_field, "NAME_1");
    }

    #[test]
    fn map_config_falls_back_to_defaults() {
        let config = MapConfig::from_query("?name_field=NAME_1");
        assert_eq!(config.source, DataSource::default());
        assert!(config.fit_home_on_resize);
    }

    #[test]
    fn map_config_reads_fit_flag() {
        assert!(!MapConfig::from_query("?fit=off").fit_home_on_resize);
        assert!(!MapConfig::from_query("fit=0").fit_home_on_resize);
        assert!(MapConfig::from_query("?fit=1").fit_home_on_resize);
    }
}
