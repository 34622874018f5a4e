//! Raster tile layer configuration for the Nokia Maps tile services.
//!
//! The crate resolves a layer construction request into tile url templates that a generic tile
//! layer of a host map can load tiles with. It does not do any I/O itself.
//!
//! # Quick start
//!
//! ```
//! use nokia_tiles::layer::NokiaLayerBuilder;
//! use nokia_tiles::TileIndex;
//!
//! let layer = NokiaLayerBuilder::new("normal.day")
//!     .with_credentials("abx", "def")
//!     .build()?;
//!
//! assert_eq!(
//!     layer.config().url_templates()[0].as_str(),
//!     "http://1.maps.nlp.nokia.com/maptile/2.1/maptile/a2e328a0c5/normal.day/${z}/${x}/${y}/256/png8?app_id=abx&token=def&lg=ENG"
//! );
//!
//! let url_source = layer.url_source().unwrap();
//! assert_eq!(
//!     url_source(&TileIndex::new(1, 0, 2)),
//!     "http://2.maps.nlp.nokia.com/maptile/2.1/maptile/a2e328a0c5/normal.day/2/1/0/256/png8?app_id=abx&token=def&lg=ENG"
//! );
//! # Ok::<(), nokia_tiles::error::UnsupportedStyleError>(())
//! ```
//!
//! # Main components
//!
//! * [`catalog`] checks the requested style against the styles the provider serves.
//! * [`template`] builds one url template per server alias of the style.
//! * [`layer`] puts the two together into a [`LayerConfig`](layer::LayerConfig), which is handed
//!   to the host tile layer as plain data or as a [`UrlSource`](url_source::UrlSource).

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod attribution;
pub mod catalog;
pub mod error;
pub mod layer;
pub mod template;
pub mod url_source;

pub use attribution::Attribution;
pub use catalog::MapStyle;
pub use layer::{NokiaLayer, NokiaLayerBuilder, NokiaLayerOptions};
pub use template::Credentials;

// Reexport nokia_tiles_types
pub use nokia_tiles_types;
pub use nokia_tiles_types::{TileIndex, UrlTemplate};
