//! Attribution that must be displayed next to Nokia map tiles.

use serde::{Deserialize, Serialize};

/// Markup handed to the attribution control of the host map.
pub const NOKIA_ATTRIBUTION_HTML: &str = concat!(
    r#"<span class="olNokiaAttribution">"#,
    r#"<div><a target="_blank" href="http://maps.nokia.com/">Nokia.com</a>"#,
    "</span>",
);

/// Credit line of a tile provider: the text to show and the page it links to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribution {
    text: String,
    url: Option<String>,
}

impl Attribution {
    /// Credit line with an optional link.
    pub fn new(text: String, url: Option<String>) -> Self {
        Self { text, url }
    }

    /// Attribution of the Nokia tile services, the structured form of [`NOKIA_ATTRIBUTION_HTML`].
    pub fn nokia() -> Self {
        Self::new(
            "Nokia.com".to_string(),
            Some("http://maps.nokia.com/".to_string()),
        )
    }

    /// Link text.
    pub fn get_text(&self) -> &str {
        &self.text
    }

    /// Link target, if the attribution links anywhere.
    pub fn get_url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}
