//! Entry points. Each call returns a brand new builder, so unrelated
//! selectors never share state.

use crate::builder::SelectorBuilder;
use crate::combined::CombinedSelector;
use crate::part::SelectorPart;
use crate::render::Stringify;

/// Starts a selector with an element name.
pub fn element(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(SelectorPart::Element(value.into()))
}

/// Starts a selector with an id.
pub fn id(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(SelectorPart::Id(value.into()))
}

/// Starts a selector with a class.
pub fn class(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(SelectorPart::Class(value.into()))
}

/// Starts a selector with an attribute selector.
pub fn attr(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(SelectorPart::Attribute(value.into()))
}

/// Starts a selector with a pseudo-class.
pub fn pseudo_class(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(SelectorPart::PseudoClass(value.into()))
}

/// Starts a selector with a pseudo-element.
pub fn pseudo_element(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(SelectorPart::PseudoElement(value.into()))
}

/// Joins two selectors as `"{first} {combinator} {second}"`.
///
/// The combinator is inserted verbatim and is not checked. Either operand
/// may itself be a combined selector.
pub fn combine<A, B>(first: &A, combinator: impl AsRef<str>, second: &B) -> CombinedSelector
where
    A: Stringify + ?Sized,
    B: Stringify + ?Sized,
{
    CombinedSelector::join(first, combinator.as_ref(), second)
}
