use std::fmt;

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::error::TemplateError;
use crate::TileIndex;

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\$\{([zxy])\}").expect("valid placeholder regex");
}

/// Coordinate token inside a [`UrlTemplate`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// `${z}`, the zoom level.
    Z,
    /// `${x}`, the tile column.
    X,
    /// `${y}`, the tile row.
    Y,
}

impl Placeholder {
    /// All placeholders in the order they appear in a tile path.
    pub const ALL: [Placeholder; 3] = [Placeholder::Z, Placeholder::X, Placeholder::Y];

    /// The literal token as it is written in a template.
    pub fn token(&self) -> &'static str {
        match self {
            Placeholder::Z => "${z}",
            Placeholder::X => "${x}",
            Placeholder::Y => "${y}",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "z" => Some(Placeholder::Z),
            "x" => Some(Placeholder::X),
            "y" => Some(Placeholder::Y),
            _ => None,
        }
    }

    fn value(&self, index: &TileIndex) -> String {
        match self {
            Placeholder::Z => index.z.to_string(),
            Placeholder::X => index.x.to_string(),
            Placeholder::Y => index.y.to_string(),
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Tile url with unexpanded `${z}`, `${x}` and `${y}` placeholders.
///
/// Tile loaders turn a template into the url of a single tile with [`UrlTemplate::expand`]. Every
/// occurrence of a placeholder is replaced by the decimal value of the corresponding [`TileIndex`]
/// field; the rest of the string is left untouched.
///
/// ```
/// use nokia_tiles_types::{TileIndex, UrlTemplate};
///
/// let template = UrlTemplate::parse("http://1.example.com/${z}/${x}/${y}.png")?;
/// assert_eq!(
///     template.expand(&TileIndex::new(3, 5, 4)),
///     "http://1.example.com/4/3/5.png"
/// );
/// # Ok::<(), nokia_tiles_types::error::TemplateError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UrlTemplate(String);

impl UrlTemplate {
    /// Parses a template, checking that each placeholder occurs exactly once.
    pub fn parse(template: impl Into<String>) -> Result<Self, TemplateError> {
        let template = template.into();

        for placeholder in Placeholder::ALL {
            let count = PLACEHOLDER
                .captures_iter(&template)
                .filter(|caps| Placeholder::from_name(&caps[1]) == Some(placeholder))
                .count();

            match count {
                0 => return Err(TemplateError::MissingPlaceholder(placeholder)),
                1 => {}
                count => {
                    return Err(TemplateError::DuplicatePlaceholder { placeholder, count });
                }
            }
        }

        Ok(Self(template))
    }

    /// Wraps a string that is already known to be a well formed template.
    ///
    /// Used by resolvers that assemble the template from constant parts. The placeholders are not
    /// checked.
    pub fn new_unchecked(template: String) -> Self {
        Self(template)
    }

    /// Substitutes the placeholders with the values of the given tile index.
    pub fn expand(&self, index: &TileIndex) -> String {
        PLACEHOLDER
            .replace_all(&self.0, |caps: &Captures| match Placeholder::from_name(&caps[1]) {
                Some(placeholder) => placeholder.value(index),
                None => caps[0].to_string(),
            })
            .into_owned()
    }

    /// Returns the template string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UrlTemplate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<UrlTemplate> for String {
    fn from(value: UrlTemplate) -> Self {
        value.0
    }
}

impl TryFrom<String> for UrlTemplate {
    type Error = TemplateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
