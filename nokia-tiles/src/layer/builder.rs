use serde_json::Value;

use super::{NokiaLayer, NokiaLayerOptions, TileOptions};
use crate::catalog::MapStyle;
use crate::error::UnsupportedStyleError;

/// Constructor for a [`NokiaLayer`].
///
/// ```
/// use nokia_tiles::layer::NokiaLayerBuilder;
///
/// let layer = NokiaLayerBuilder::new("satellite.day")
///     .with_name("Satellite")
///     .with_credentials("my-app", "my-token")
///     .build()?;
///
/// assert_eq!(layer.config().name(), "Satellite");
/// # Ok::<(), nokia_tiles::error::UnsupportedStyleError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct NokiaLayerBuilder {
    options: NokiaLayerOptions,
}

impl NokiaLayerBuilder {
    /// Initializes a builder for a layer of the given style.
    ///
    /// The style is only checked against the catalog when the layer is built.
    pub fn new(style: impl Into<String>) -> Self {
        Self {
            options: NokiaLayerOptions {
                style: Some(style.into()),
                ..Default::default()
            },
        }
    }

    /// Initializes a builder for a layer of the grey traffic style.
    pub fn new_traffic() -> Self {
        Self::new(MapStyle::NormalDayGrey)
    }

    /// Initializes a builder with the given options, for example the ones read from a
    /// configuration file.
    pub fn from_options(options: NokiaLayerOptions) -> Self {
        Self { options }
    }

    /// Sets the layer name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.options.name = Some(name.into());
        self
    }

    /// Sets the application id and token.
    pub fn with_credentials(mut self, app_id: impl Into<String>, token: impl Into<String>) -> Self {
        self.options.app_id = Some(app_id.into());
        self.options.token = Some(token.into());
        self
    }

    /// Sets the server aliases, replacing the default ones of the style.
    ///
    /// An empty list keeps the default aliases.
    pub fn with_servers<S: Into<String>>(mut self, servers: impl IntoIterator<Item = S>) -> Self {
        self.options.servers = Some(servers.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the cross origin policy of the tiles. `None` disables it.
    ///
    /// Defaults to `"anonymous"`.
    pub fn with_cross_origin(mut self, keyword: Option<String>) -> Self {
        self.options
            .tile_options
            .get_or_insert_with(TileOptions::default)
            .cross_origin_keyword = keyword;
        self
    }

    /// Sets custom attribution markup instead of the Nokia one.
    pub fn with_attribution(mut self, markup: impl Into<String>) -> Self {
        self.options.attribution = Some(markup.into());
        self
    }

    /// Adds an option that is passed through to the host layer.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.extra.insert(key.into(), value.into());
        self
    }

    /// Consumes the builder and constructs the layer.
    ///
    /// Will return an error if the style is not in the catalog.
    pub fn build(self) -> Result<NokiaLayer, UnsupportedStyleError> {
        NokiaLayer::new(self.options)
    }
}
