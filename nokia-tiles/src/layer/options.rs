use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::template::Credentials;

/// Cross origin policy used when no other is configured.
pub const DEFAULT_CROSS_ORIGIN: &str = "anonymous";

fn default_cross_origin() -> Option<String> {
    Some(DEFAULT_CROSS_ORIGIN.to_string())
}

/// Options for the tiles created by the host tile layer.
///
/// Given options are merged over the default `{"crossOriginKeyword": "anonymous"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileOptions {
    /// Value of the cross origin attribute of tile images. `None` disables it.
    ///
    /// If the field is not set in a deserialized value, it is `"anonymous"`.
    #[serde(default = "default_cross_origin")]
    pub cross_origin_keyword: Option<String>,
    /// Other tile options, passed to the host tile layer as is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for TileOptions {
    fn default() -> Self {
        Self {
            cross_origin_keyword: default_cross_origin(),
            extra: Map::new(),
        }
    }
}

/// Construction request of a [`NokiaLayer`](super::NokiaLayer).
///
/// All fields are optional. Deserialized from the option object of the host map, for example:
///
/// ```json
/// {
///     "name": "Nokia Satellite",
///     "type": "satellite.day",
///     "app_id": "SqE1xcSngCd3m4a1zEGb",
///     "token": "...",
///     "servers": ["1", "2"],
///     "tileOptions": { "crossOriginKeyword": null },
///     "buffer": 2
/// }
/// ```
///
/// Keys that are not recognized are kept in [`NokiaLayerOptions::extra`] and passed through to the
/// host layer unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NokiaLayerOptions {
    /// Layer name. Defaults to `"Nokia"`.
    pub name: Option<String>,
    /// Style identifier. Defaults to `normal.day`; any other value must be in the catalog.
    #[serde(rename = "type")]
    pub style: Option<String>,
    /// Application id.
    pub app_id: Option<String>,
    /// Access token.
    pub token: Option<String>,
    /// Server aliases replacing the default ones of the style. Empty means default.
    pub servers: Option<Vec<String>>,
    /// Tile options, merged over the default ones.
    #[serde(rename = "tileOptions")]
    pub tile_options: Option<TileOptions>,
    /// Attribution markup replacing the Nokia one.
    pub attribution: Option<String>,
    /// Options for the host layer that are not interpreted here.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NokiaLayerOptions {
    /// Credentials given by the options.
    pub fn credentials(&self) -> Credentials {
        Credentials {
            app_id: self.app_id.clone(),
            token: self.token.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_compact_debug_snapshot;

    use super::*;

    #[test]
    fn deserialize_host_options() {
        let options: NokiaLayerOptions = serde_json::from_str(
            r#"{
                "name": "Nokia Satellite",
                "type": "satellite.day",
                "app_id": "app",
                "token": "secret",
                "servers": ["1", "2"],
                "buffer": 2,
                "isBaseLayer": true
            }"#,
        )
        .unwrap();

        assert_eq!(options.name.as_deref(), Some("Nokia Satellite"));
        assert_eq!(options.style.as_deref(), Some("satellite.day"));
        assert_eq!(options.credentials(), Credentials::new("app", "secret"));
        assert_eq!(options.servers, Some(vec!["1".to_string(), "2".to_string()]));
        assert_eq!(options.tile_options, None);
        assert_eq!(options.extra.get("buffer"), Some(&Value::from(2)));
        assert_eq!(options.extra.get("isBaseLayer"), Some(&Value::Bool(true)));
    }

    #[test]
    fn empty_object_is_default() {
        let options: NokiaLayerOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, NokiaLayerOptions::default());
    }

    #[test]
    fn tile_options_keep_default_cross_origin() {
        let options: TileOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, TileOptions::default());
        assert_compact_debug_snapshot!(options, @r#"TileOptions { cross_origin_keyword: Some("anonymous"), extra: {} }"#);
    }

    #[test]
    fn tile_options_override_cross_origin() {
        let options: TileOptions =
            serde_json::from_str(r#"{"crossOriginKeyword": "use-credentials"}"#).unwrap();
        assert_eq!(options.cross_origin_keyword.as_deref(), Some("use-credentials"));

        let options: TileOptions = serde_json::from_str(r#"{"crossOriginKeyword": null}"#).unwrap();
        assert_eq!(options.cross_origin_keyword, None);
    }

    #[test]
    fn tile_options_keep_unknown_keys() {
        let options: TileOptions = serde_json::from_str(
            r#"{"crossOriginKeyword": "use-credentials", "maxGetUrlLength": 2048}"#,
        )
        .unwrap();
        assert_eq!(options.cross_origin_keyword.as_deref(), Some("use-credentials"));
        assert_eq!(options.extra.get("maxGetUrlLength"), Some(&Value::from(2048)));

        let options: TileOptions = serde_json::from_str(r#"{"className": "tiles"}"#).unwrap();
        assert_eq!(options.cross_origin_keyword.as_deref(), Some(DEFAULT_CROSS_ORIGIN));
        assert_eq!(options.extra.get("className"), Some(&Value::from("tiles")));
    }
}
