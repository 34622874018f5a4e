//! Prints the tile url templates of a Nokia layer.
//!
//! The layer options are read as JSON from the first argument, for example:
//!
//! ```text
//! RUST_LOG=debug cargo run --example print_templates -- '{"type": "normal.day.grey", "app_id": "abx", "token": "def"}'
//! ```

use anyhow::Context;
use nokia_tiles::{NokiaLayer, NokiaLayerOptions, TileIndex};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options: NokiaLayerOptions = match std::env::args().nth(1) {
        Some(json) => serde_json::from_str(&json).context("invalid layer options")?,
        None => NokiaLayerOptions::default(),
    };

    let layer = NokiaLayer::new(options)?;
    let config = layer.config();

    println!("{} ({})", config.name(), config.style());
    for template in config.url_templates() {
        println!("  {template}");
    }

    if let Some(url_source) = layer.url_source() {
        println!("Tile 0/0/0: {}", url_source(&TileIndex::new(0, 0, 0)));
    }

    Ok(())
}
