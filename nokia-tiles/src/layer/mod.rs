//! Nokia tile layer configuration.
//!
//! A [`NokiaLayer`] does not load or draw anything by itself. It resolves a construction request
//! into a [`LayerConfig`]: the list of tile url templates plus the options the generic tile layer
//! of the host map needs. The host layer then requests tiles using these templates, either reading
//! [`LayerConfig::url_templates`] directly or through [`NokiaLayer::url_source`].

use nokia_tiles_types::{TileIndex, UrlTemplate};
use serde::Serialize;

use crate::attribution::{Attribution, NOKIA_ATTRIBUTION_HTML};
use crate::catalog::{self, MapStyle};
use crate::error::UnsupportedStyleError;
use crate::template::{self, TILE_SIZE};
use crate::url_source::{self, UrlSource};

mod builder;
mod options;

pub use builder::NokiaLayerBuilder;
pub use options::{NokiaLayerOptions, TileOptions, DEFAULT_CROSS_ORIGIN};

/// Name of the layer if none is given.
pub const DEFAULT_LAYER_NAME: &str = "Nokia";

/// Resolved configuration consumed by the host tile layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerConfig {
    name: String,
    style: MapStyle,
    url_templates: Vec<UrlTemplate>,
    tile_options: TileOptions,
    attribution: String,
    tile_size: u32,
}

impl LayerConfig {
    fn resolve(options: &NokiaLayerOptions, style: MapStyle) -> Self {
        let name = options
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_LAYER_NAME)
            .to_string();

        let url_templates =
            template::build(style, &options.credentials(), options.servers.as_deref());

        Self {
            name,
            style,
            url_templates,
            tile_options: options.tile_options.clone().unwrap_or_default(),
            attribution: options
                .attribution
                .clone()
                .unwrap_or_else(|| NOKIA_ATTRIBUTION_HTML.to_string()),
            tile_size: TILE_SIZE,
        }
    }

    /// Layer name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Style of the tiles.
    pub fn style(&self) -> MapStyle {
        self.style
    }

    /// One template per server alias, in alias order.
    pub fn url_templates(&self) -> &[UrlTemplate] {
        &self.url_templates
    }

    /// Options for the tiles of the host layer.
    pub fn tile_options(&self) -> &TileOptions {
        &self.tile_options
    }

    /// Attribution markup to show with the layer.
    pub fn attribution(&self) -> &str {
        &self.attribution
    }

    /// Tile size in pixels.
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }
}

/// Runtime fields the host accumulates on a layer after it was constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerState {
    /// Whether the layer is drawn.
    pub visible: bool,
    /// Layer opacity from 0 to 1.
    pub opacity: f32,
}

impl Default for LayerState {
    fn default() -> Self {
        Self {
            visible: true,
            opacity: 1.0,
        }
    }
}

/// Raster tile layer of the Nokia Maps tile services.
///
/// ```
/// use nokia_tiles::layer::{NokiaLayer, NokiaLayerOptions};
///
/// let layer = NokiaLayer::new(NokiaLayerOptions {
///     style: Some("hybrid.day".into()),
///     app_id: Some("my-app".into()),
///     token: Some("my-token".into()),
///     ..Default::default()
/// })?;
///
/// assert_eq!(layer.config().url_templates().len(), 4);
/// # Ok::<(), nokia_tiles::error::UnsupportedStyleError>(())
/// ```
#[derive(Debug)]
pub struct NokiaLayer {
    options: NokiaLayerOptions,
    config: LayerConfig,
    state: LayerState,
}

impl NokiaLayer {
    /// Creates a layer from the construction request.
    ///
    /// A missing or empty style selects `normal.day`. Any other style must be in the
    /// [catalog](crate::catalog), otherwise construction fails.
    pub fn new(options: NokiaLayerOptions) -> Result<Self, UnsupportedStyleError> {
        let style = match options.style.as_deref().filter(|style| !style.is_empty()) {
            Some(requested) => catalog::validate(requested)?,
            None => MapStyle::default(),
        };

        let credentials = options.credentials();
        if !credentials.is_complete() {
            log::warn!(
                "Nokia layer is created without {}, tile requests will likely be rejected",
                match (&credentials.app_id, &credentials.token) {
                    (None, None) => "app_id and token",
                    (None, Some(_)) => "app_id",
                    _ => "token",
                }
            );
        }

        Ok(Self::with_style(options, style))
    }

    fn with_style(options: NokiaLayerOptions, style: MapStyle) -> Self {
        let config = LayerConfig::resolve(&options, style);
        log::debug!(
            "Resolved Nokia layer '{}' with style {} into {} tile templates",
            config.name,
            config.style,
            config.url_templates.len()
        );

        Self {
            options,
            config,
            state: LayerState::default(),
        }
    }

    /// Options the layer was constructed with.
    pub fn options(&self) -> &NokiaLayerOptions {
        &self.options
    }

    /// Resolved configuration.
    pub fn config(&self) -> &LayerConfig {
        &self.config
    }

    /// Runtime state of the layer.
    pub fn state(&self) -> &LayerState {
        &self.state
    }

    /// Shows or hides the layer.
    pub fn set_visible(&mut self, visible: bool) {
        self.state.visible = visible;
    }

    /// Sets layer opacity. The value is clamped to `0..=1`.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.state.opacity = opacity.clamp(0.0, 1.0);
    }

    /// Structured Nokia attribution, `None` if the layer was given custom attribution markup.
    pub fn attribution(&self) -> Option<Attribution> {
        self.options.attribution.is_none().then(Attribution::nokia)
    }

    /// Url source for a tile loader of the host map.
    ///
    /// Tiles are spread over the server aliases with [`url_source::round_robin`]. Returns `None`
    /// if the layer has no templates.
    pub fn url_source(&self) -> Option<impl UrlSource<TileIndex>> {
        url_source::round_robin(self.config.url_templates.clone())
    }
}

impl Clone for NokiaLayer {
    /// Constructs a new layer from the same options and copies the runtime state.
    ///
    /// The style was validated when `self` was created, so it is not looked up in the catalog
    /// again.
    fn clone(&self) -> Self {
        let mut layer = Self::with_style(self.options.clone(), self.config.style);
        layer.state = self.state.clone();
        layer
    }
}
