//! Error type used by the crate.

use thiserror::Error;

use crate::Placeholder;

/// Error returned when a string cannot be used as a tile url template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The template does not contain the given placeholder.
    #[error("template has no {0} placeholder")]
    MissingPlaceholder(Placeholder),
    /// The template contains the given placeholder more than once.
    #[error("template has {count} occurrences of {placeholder} placeholder")]
    DuplicatePlaceholder {
        /// Repeated placeholder.
        placeholder: Placeholder,
        /// Number of occurrences found.
        count: usize,
    },
}
