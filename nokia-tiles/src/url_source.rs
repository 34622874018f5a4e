//! Hand-off of resolved templates to tile loaders.

use nokia_tiles_types::{TileIndex, UrlTemplate};

/// Function that returns the url of the tile with the given key.
///
/// Any `Fn(&Key) -> String + Send + Sync` closure is a url source, so a tile loader of the host map
/// can take it without depending on this crate.
pub trait UrlSource<Key: ?Sized>: (Fn(&Key) -> String) + Send + Sync {}
impl<Key: ?Sized, T: Fn(&Key) -> String> UrlSource<Key> for T where T: Send + Sync {}

/// Creates a url source that spreads tiles over the given templates.
///
/// The template for a tile is picked by `(x + y) mod n`, so neighbouring tiles go to different
/// server aliases and the same tile always goes to the same alias. Returns `None` if `templates` is
/// empty.
pub fn round_robin(templates: Vec<UrlTemplate>) -> Option<impl UrlSource<TileIndex>> {
    if templates.is_empty() {
        return None;
    }

    Some(move |index: &TileIndex| {
        let slot = (i64::from(index.x) + i64::from(index.y)).rem_euclid(templates.len() as i64);
        templates[slot as usize].expand(index)
    })
}
