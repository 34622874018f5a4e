//! Construction of tile url templates for a style.
//!
//! Nokia spreads tile requests over several subdomains of the tile host. For every subdomain alias
//! one template is produced, in alias order:
//!
//! ```text
//! http://{alias}.{host path}/{style}/${z}/${x}/${y}/256/png8?app_id={app id}&token={token}&lg=ENG
//! ```

use nokia_tiles_types::{Placeholder, UrlTemplate};

use crate::catalog::MapStyle;

/// Server aliases used by all styles except the traffic one.
pub const NUMERIC_ALIASES: [&str; 4] = ["1", "2", "3", "4"];
/// Server aliases of the traffic tile backend.
pub const TRAFFIC_ALIASES: [&str; 4] = ["a", "b", "c", "d"];

/// Host and path of the map tile service.
pub const DEFAULT_HOST_PATH: &str = "maps.nlp.nokia.com/maptile/2.1/maptile/a2e328a0c5";
/// Host and path of the traffic tile service.
pub const TRAFFIC_HOST_PATH: &str = "mrsmon.lbs.ovi.com/maptiler/v2/traffictile/b8abea5c78";

/// Size of a tile in pixels.
pub const TILE_SIZE: u32 = 256;
/// Image format requested from the servers.
pub const IMAGE_FORMAT: &str = "png8";
/// Language of the labels.
pub const LOCALE: &str = "ENG";

const SCHEME: &str = "http";

/// Application id and token issued by the provider.
///
/// Neither value is checked. Bad or missing credentials are rejected by the tile servers when tiles
/// are requested, so a missing value is written to the url as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Application id (`app_id` query parameter).
    pub app_id: Option<String>,
    /// Access token (`token` query parameter).
    pub token: Option<String>,
}

impl Credentials {
    /// Creates credentials with both values set.
    pub fn new(app_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            app_id: Some(app_id.into()),
            token: Some(token.into()),
        }
    }

    /// Returns true if both values are present.
    pub fn is_complete(&self) -> bool {
        self.app_id.is_some() && self.token.is_some()
    }
}

/// Server aliases used for the style when none are given explicitly.
pub fn default_aliases(style: MapStyle) -> &'static [&'static str] {
    if style.is_traffic() {
        &TRAFFIC_ALIASES
    } else {
        &NUMERIC_ALIASES
    }
}

/// Host and path prefix serving the style.
pub fn host_path(style: MapStyle) -> &'static str {
    if style.is_traffic() {
        TRAFFIC_HOST_PATH
    } else {
        DEFAULT_HOST_PATH
    }
}

/// Builds one template per server alias.
///
/// `explicit_aliases` replace the style's [default aliases](default_aliases) unless the list is
/// empty: an empty list is the same as no list at all.
pub fn build(
    style: MapStyle,
    credentials: &Credentials,
    explicit_aliases: Option<&[String]>,
) -> Vec<UrlTemplate> {
    let host_path = host_path(style);
    let app_id = credentials.app_id.as_deref().unwrap_or_default();
    let token = credentials.token.as_deref().unwrap_or_default();

    let template = |alias: &str| {
        UrlTemplate::new_unchecked(format!(
            "{SCHEME}://{alias}.{host_path}/{style}/{z}/{x}/{y}/{TILE_SIZE}/{IMAGE_FORMAT}?app_id={app_id}&token={token}&lg={LOCALE}",
            z = Placeholder::Z,
            x = Placeholder::X,
            y = Placeholder::Y,
        ))
    };

    match explicit_aliases {
        Some(aliases) if !aliases.is_empty() => {
            aliases.iter().map(|alias| template(alias.as_str())).collect()
        }
        _ => default_aliases(style).iter().copied().map(template).collect(),
    }
}

#[cfg(test)]
mod tests {
    use insta::{assert_debug_snapshot, assert_snapshot};

    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("abx", "def")
    }

    fn alias_of(template: &UrlTemplate) -> &str {
        let rest = template
            .as_str()
            .strip_prefix("http://")
            .expect("template has http scheme");
        rest.split('.').next().expect("template has host")
    }

    #[test]
    fn normal_day_first_template() {
        let templates = build(MapStyle::NormalDay, &credentials(), None);
        assert_snapshot!(
            templates[0],
            @"http://1.maps.nlp.nokia.com/maptile/2.1/maptile/a2e328a0c5/normal.day/${z}/${x}/${y}/256/png8?app_id=abx&token=def&lg=ENG"
        );
    }

    #[test]
    fn standard_styles_use_numeric_aliases() {
        for style in MapStyle::ALL.into_iter().filter(|style| !style.is_traffic()) {
            let templates = build(style, &credentials(), None);
            let aliases: Vec<_> = templates.iter().map(alias_of).collect();
            assert_eq!(aliases, ["1", "2", "3", "4"]);

            for (template, alias) in templates.iter().zip(aliases) {
                let prefix = format!("http://{alias}.{DEFAULT_HOST_PATH}/{style}/");
                assert!(template.as_str().starts_with(&prefix), "{template}");
            }
        }
    }

    #[test]
    fn traffic_style_uses_alphabetic_aliases_and_own_host() {
        let templates = build(MapStyle::NormalDayGrey, &credentials(), None);
        assert_debug_snapshot!(templates, @r#"
        [
            UrlTemplate(
                "http://a.mrsmon.lbs.ovi.com/maptiler/v2/traffictile/b8abea5c78/normal.day.grey/${z}/${x}/${y}/256/png8?app_id=abx&token=def&lg=ENG",
            ),
            UrlTemplate(
                "http://b.mrsmon.lbs.ovi.com/maptiler/v2/traffictile/b8abea5c78/normal.day.grey/${z}/${x}/${y}/256/png8?app_id=abx&token=def&lg=ENG",
            ),
            UrlTemplate(
                "http://c.mrsmon.lbs.ovi.com/maptiler/v2/traffictile/b8abea5c78/normal.day.grey/${z}/${x}/${y}/256/png8?app_id=abx&token=def&lg=ENG",
            ),
            UrlTemplate(
                "http://d.mrsmon.lbs.ovi.com/maptiler/v2/traffictile/b8abea5c78/normal.day.grey/${z}/${x}/${y}/256/png8?app_id=abx&token=def&lg=ENG",
            ),
        ]
        "#);
    }

    #[test]
    fn explicit_aliases_override_defaults() {
        let aliases = vec!["a".to_string(), "b".to_string()];
        let templates = build(
            MapStyle::NormalDayGrey,
            &Credentials::new("x", "y"),
            Some(aliases.as_slice()),
        );

        assert_eq!(templates.len(), 2);
        assert_eq!(
            templates[1].as_str(),
            "http://b.mrsmon.lbs.ovi.com/maptiler/v2/traffictile/b8abea5c78/normal.day.grey/${z}/${x}/${y}/256/png8?app_id=x&token=y&lg=ENG"
        );

        for style in MapStyle::ALL {
            let aliases = vec!["z9".to_string(), "tiles".to_string(), "z1".to_string()];
            let templates = build(style, &credentials(), Some(aliases.as_slice()));
            let found: Vec<_> = templates.iter().map(alias_of).collect();
            assert_eq!(found, ["z9", "tiles", "z1"]);
            assert!(templates[0].as_str().contains(host_path(style)));
        }
    }

    #[test]
    fn empty_explicit_aliases_fall_back_to_defaults() {
        for style in MapStyle::ALL {
            assert_eq!(
                build(style, &credentials(), Some(&[][..])),
                build(style, &credentials(), None)
            );
        }
    }

    #[test]
    fn templates_have_placeholders_and_credentials() {
        let credentials = Credentials::new("my-app", "my-token");
        for style in MapStyle::ALL {
            for template in build(style, &credentials, None) {
                for placeholder in Placeholder::ALL {
                    assert_eq!(template.as_str().matches(placeholder.token()).count(), 1);
                }
                assert!(template.as_str().contains("app_id=my-app"));
                assert!(template.as_str().contains("token=my-token"));
                assert!(template.as_str().ends_with("&lg=ENG"));
                assert!(UrlTemplate::parse(template.as_str()).is_ok());
            }
        }
    }

    #[test]
    fn templates_differ_only_in_alias() {
        let templates = build(MapStyle::HybridDay, &credentials(), None);
        let stripped: Vec<_> = templates
            .iter()
            .map(|template| template.as_str().split_once('.').map(|(_, rest)| rest))
            .collect();
        assert!(stripped.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn missing_and_unescaped_credentials_are_passed_through() {
        let templates = build(MapStyle::NormalDay, &Credentials::default(), None);
        assert!(templates[0].as_str().ends_with("png8?app_id=&token=&lg=ENG"));

        let credentials = Credentials {
            app_id: Some("a&b".to_string()),
            token: None,
        };
        let templates = build(MapStyle::TerrainDay, &credentials, None);
        assert!(templates[3].as_str().ends_with("png8?app_id=a&b&token=&lg=ENG"));
        assert!(!credentials.is_complete());
    }
}
