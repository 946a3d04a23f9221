//! Error types for selector building.
//!
//! Both variants are usage errors: they are returned by the mutator that
//! broke a rule and are never raised while rendering or combining.

use thiserror::Error;

use crate::part::PartKind;

/// Errors returned when a selector part is added illegally.
///
/// # Examples
///
/// ```rust
/// use cssb::{SelectorError, class};
///
/// let result = class("a").element("div");
/// assert!(matches!(result, Err(SelectorError::Order { .. })));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// An element, id or pseudo-element was set a second time.
    #[error(
        "Element, id and pseudo-element should not occur more then one time inside the selector"
    )]
    DuplicatePart(PartKind),

    /// A part was added after a part that must follow it.
    ///
    /// `part` is the rejected kind and `after` the latest-ranked kind
    /// already present on the builder.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    Order { part: PartKind, after: PartKind },
}

impl SelectorError {
    /// Returns true for [`SelectorError::DuplicatePart`].
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicatePart(_))
    }

    /// Returns true for [`SelectorError::Order`].
    pub fn is_order(&self) -> bool {
        matches!(self, Self::Order { .. })
    }

    /// The part kind whose insertion was rejected.
    pub fn part(&self) -> PartKind {
        match self {
            Self::DuplicatePart(part) | Self::Order { part, .. } => *part,
        }
    }
}
