//! Joining selectors with combinators.

use std::fmt;

use crate::render::Stringify;

/// The standard CSS combinators.
///
/// [`combine`](crate::combine) accepts any token, so these are a convenience
/// over spelling the symbol by hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// A single space. Padded like every token, so it renders as three spaces.
    Descendant,
    /// `>`
    Child,
    /// `+`
    AdjacentSibling,
    /// `~`
    GeneralSibling,
}

impl Combinator {
    pub fn as_str(self) -> &'static str {
        match self {
            Combinator::Descendant => " ",
            Combinator::Child => ">",
            Combinator::AdjacentSibling => "+",
            Combinator::GeneralSibling => "~",
        }
    }
}

impl AsRef<str> for Combinator {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selector already joined from two operands, stored as its rendered text.
///
/// Only [`combine`](crate::combine) creates one. It cannot be extended with
/// more parts, but it can be combined again.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CombinedSelector {
    selector: String,
}

impl CombinedSelector {
    pub(crate) fn join<A, B>(first: &A, combinator: &str, second: &B) -> Self
    where
        A: Stringify + ?Sized,
        B: Stringify + ?Sized,
    {
        let selector = format!(
            "{} {} {}",
            first.stringify(),
            combinator,
            second.stringify()
        );
        log::trace!("combined selector {:?}", selector);
        Self { selector }
    }

    /// Returns the stored selector text.
    pub fn stringify(&self) -> String {
        self.selector.clone()
    }

    pub fn as_str(&self) -> &str {
        &self.selector
    }

    pub fn into_string(self) -> String {
        self.selector
    }
}

impl Stringify for CombinedSelector {
    fn stringify(&self) -> String {
        CombinedSelector::stringify(self)
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.selector)
    }
}

impl From<CombinedSelector> for String {
    fn from(combined: CombinedSelector) -> Self {
        combined.selector
    }
}
