pub mod colors;
pub mod config;
pub mod error;
pub mod fit;
pub mod geo;
pub mod path;
pub mod phase;
pub mod placement;
pub mod projection;
pub mod scores;

pub use colors::{fill_for, score_color};
pub use config::{DataSource, MapConfig};
pub use error::{FetchError, RenderError};
pub use geo::{Feature, FeatureCollection, Geometry, Region};
pub use phase::LoadPhase;
pub use placement::{Placement, Side, Size, place_tooltip, place_tooltip_scaled, render_scale};
pub use projection::Mercator;
pub use scores::ScoreTable;
