//! Error types used by the crate.

use thiserror::Error;

/// Requested map style is not in the [style catalog](crate::catalog).
///
/// A layer cannot be constructed with such a style, since there is no way to derive a correct tile
/// host and path for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported Nokia map type: {style}")]
pub struct UnsupportedStyleError {
    style: String,
}

impl UnsupportedStyleError {
    /// Creates an error for the given style identifier.
    pub fn new(style: impl Into<String>) -> Self {
        Self {
            style: style.into(),
        }
    }

    /// The style identifier that was requested.
    pub fn style(&self) -> &str {
        &self.style
    }
}
