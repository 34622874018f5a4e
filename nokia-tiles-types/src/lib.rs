//! Types shared between tile url resolvers and the tile loaders that consume them.
//!
//! A [`UrlTemplate`] is a url with unexpanded `${z}`, `${x}` and `${y}` placeholders. The loader
//! substitutes them for every requested [`TileIndex`] with [`UrlTemplate::expand`].

pub mod error;
mod tile_index;
mod url_template;

pub use tile_index::TileIndex;
pub use url_template::{Placeholder, UrlTemplate};
