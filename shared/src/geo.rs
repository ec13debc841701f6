use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `[lon, lat]` with any trailing ordinates (altitude) ignored by consumers.
pub type Position = Vec<f64>;
pub type Ring = Vec<Position>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon { coordinates: Vec<Ring> },
    MultiPolygon { coordinates: Vec<Vec<Ring>> },
    /// Points, lines and collections carry no fillable area.
    #[serde(other)]
    Unsupported,
}

impl Geometry {
    /// All rings (outer and holes) of every polygon, in document order.
    pub fn rings(&self) -> Vec<&Ring> {
        match self {
            Geometry::Polygon { coordinates } => coordinates.iter().collect(),
            Geometry::MultiPolygon { coordinates } => coordinates.iter().flatten().collect(),
            Geometry::Unsupported => Vec::new(),
        }
    }
}

/// A named region borrowed from a fetched collection.
#[derive(Debug, Clone, Copy)]
pub struct Region<'a> {
    pub name: Option<&'a str>,
    pub geometry: Option<&'a Geometry>,
}

impl<'a> Region<'a> {
    /// Borrowed from the collection, not the region view, so it outlives `self`.
    pub fn display_name(&self) -> &'a str {
        self.name.unwrap_or("Unknown")
    }
}

impl Feature {
    pub fn name(&self, name_field: &str) -> Option<&str> {
        self.properties
            .as_ref()
            .and_then(|props| props.get(name_field))
            .and_then(Value::as_str)
    }
}

impl FeatureCollection {
    pub fn regions<'a>(&'a self, name_field: &'a str) -> impl Iterator<Item = Region<'a>> + 'a {
        self.features.iter().map(move |feature| Region {
            name: feature.name(name_field),
            geometry: feature.geometry.as_ref(),
        })
    }
}

pub fn lon_lat(position: &[f64]) -> Option<(f64, f64)> {
    match position {
        [lon, lat, ..] => Some((*lon, *lat)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> FeatureCollection {
        serde_json::from_value(json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": { "st_nm": "Kerala", "NAME_1": "Keralam" },
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[76.0, 10.0], [77.0, 10.0], [77.0, 9.0], [76.0, 10.0]]]
                    }
                },
                {
                    "type": "Feature",
                    "properties": { "st_nm": "Lakshadweep" },
                    "geometry": {
                        "type": "MultiPolygon",
                        "coordinates": [
                            [[[72.0, 10.0, 0.0], [72.1, 10.0, 0.0], [72.0, 10.1, 0.0]]],
                            [[[73.0, 11.0], [73.1, 11.0], [73.0, 11.1]]]
                        ]
                    }
                },
                {
                    "type": "Feature",
                    "properties": null,
                    "geometry": { "type": "Point", "coordinates": [78.0, 20.0] }
                }
            ]
        }))
        .expect("valid feature collection")
    }

    #[test]
    fn decodes_polygon_and_multipolygon() {
        let fc = sample();
        assert_eq!(fc.features.len(), 3);
        assert!(matches!(fc.features[0].geometry, Some(Geometry::Polygon { .. })));
        assert_eq!(fc.features[1].geometry.as_ref().map(|g| g.rings().len()), Some(2));
        assert_eq!(fc.features[2].geometry, Some(Geometry::Unsupported));
    }

    #[test]
    fn reads_configured_name_field() {
        let fc = sample();
        let names: Vec<&str> = fc.regions("st_nm").map(|r| r.display_name()).collect();
        assert_eq!(names, vec!["Kerala", "Lakshadweep", "Unknown"]);

        let legacy: Vec<Option<&str>> = fc.regions("NAME_1").map(|r| r.name).collect();
        assert_eq!(legacy, vec![Some("Keralam"), None, None]);
    }

    #[test]
    fn display_name_outlives_region_view() {
        let fc = sample();
        let first = {
            let region = fc.regions("st_nm").next().expect("one region");
            region.display_name()
        };
        assert_eq!(first, "Kerala");
    }

    #[test]
    fn lon_lat_ignores_altitude() {
        assert_eq!(lon_lat(&[72.0, 10.0, 5.0]), Some((72.0, 10.0)));
        assert_eq!(lon_lat(&[72.0]), None);
    }
}
