//! Catalog of map styles served by the Nokia tile servers.
//!
//! A requested style identifier is checked against the catalog before any url is built:
//!
//! ```
//! use nokia_tiles::catalog::{self, MapStyle};
//!
//! assert_eq!(catalog::validate("satellite.day"), Ok(MapStyle::SatelliteDay));
//! assert!(catalog::validate("satellite.night").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnsupportedStyleError;

/// Visual variant of the tiles.
///
/// The identifier of each style ([`MapStyle::as_str`]) is used verbatim in the tile url path.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MapStyle {
    /// `normal.day`
    #[default]
    NormalDay,
    /// `terrain.day`
    TerrainDay,
    /// `satellite.day`
    SatelliteDay,
    /// `hybrid.day`
    HybridDay,
    /// `normal.day.transit`
    NormalDayTransit,
    /// `normal.day.grey`, served by the traffic tile backend.
    NormalDayGrey,
}

impl MapStyle {
    /// All supported styles in catalog order.
    pub const ALL: [MapStyle; 6] = [
        MapStyle::NormalDay,
        MapStyle::TerrainDay,
        MapStyle::SatelliteDay,
        MapStyle::HybridDay,
        MapStyle::NormalDayTransit,
        MapStyle::NormalDayGrey,
    ];

    /// Style identifier as used by the tile servers.
    pub fn as_str(&self) -> &'static str {
        match self {
            MapStyle::NormalDay => "normal.day",
            MapStyle::TerrainDay => "terrain.day",
            MapStyle::SatelliteDay => "satellite.day",
            MapStyle::HybridDay => "hybrid.day",
            MapStyle::NormalDayTransit => "normal.day.transit",
            MapStyle::NormalDayGrey => "normal.day.grey",
        }
    }

    /// Returns true for the grey/traffic style, which uses its own host and server aliases.
    pub fn is_traffic(&self) -> bool {
        matches!(self, MapStyle::NormalDayGrey)
    }
}

impl fmt::Display for MapStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MapStyle {
    type Err = UnsupportedStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)
    }
}

impl TryFrom<String> for MapStyle {
    type Error = UnsupportedStyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate(&value)
    }
}

impl From<MapStyle> for String {
    fn from(value: MapStyle) -> Self {
        value.as_str().to_string()
    }
}

/// Fixed set of styles a tile provider accepts.
#[derive(Debug, Clone, Copy)]
pub struct StyleCatalog {
    styles: &'static [MapStyle],
}

/// Styles served by the Nokia Maps tile services.
pub const NOKIA_STYLES: StyleCatalog = StyleCatalog {
    styles: &MapStyle::ALL,
};

impl StyleCatalog {
    /// Checks that the catalog has a style with exactly the `requested` identifier.
    pub fn validate(&self, requested: &str) -> Result<MapStyle, UnsupportedStyleError> {
        self.styles
            .iter()
            .copied()
            .find(|style| style.as_str() == requested)
            .ok_or_else(|| UnsupportedStyleError::new(requested))
    }

    /// Returns true if the style is in the catalog.
    pub fn contains(&self, style: MapStyle) -> bool {
        self.styles.contains(&style)
    }

    /// Iterates over the styles in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = MapStyle> + '_ {
        self.styles.iter().copied()
    }
}

/// Validates `requested` against the [Nokia catalog](NOKIA_STYLES).
pub fn validate(requested: &str) -> Result<MapStyle, UnsupportedStyleError> {
    NOKIA_STYLES.validate(requested)
}
