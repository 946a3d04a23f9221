//! The order-checked compound selector builder.

use std::fmt;

use crate::error::SelectorError;
use crate::part::{PartKind, PartSet, SelectorPart, Specificity, render_part};
use crate::render::Stringify;

/// Accumulates the parts of one compound selector.
///
/// Parts must arrive in the order element, id, class, attribute,
/// pseudo-class, pseudo-element. Element, id and pseudo-element may be set
/// once; classes, attributes and pseudo-classes may repeat and keep their
/// insertion order. Every rule is checked when the part is added, so a
/// builder that exists is always renderable.
///
/// A builder is owned by whoever created it. It has no interior mutability
/// and sharing one across threads requires the caller's own locking.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    element: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Option<String>,
    seen: PartSet,
}

impl SelectorBuilder {
    /// An empty builder. Renders as the empty string.
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh builder holding a single part. Cannot fail.
    pub(crate) fn starting_with(part: SelectorPart) -> Self {
        let mut builder = Self::new();
        builder.store(part);
        builder
    }

    /// Adds a part in place.
    ///
    /// The part is validated before anything is written, so on error the
    /// builder is left exactly as it was.
    pub fn push(&mut self, part: SelectorPart) -> Result<&mut Self, SelectorError> {
        let kind = part.kind();
        if let Err(err) = self.check(kind) {
            log::debug!("rejected {} {:?}: {:?}", kind, part.value(), err);
            return Err(err);
        }
        log::trace!("selector part {} {:?}", kind, part.value());
        self.store(part);
        Ok(self)
    }

    fn check(&self, kind: PartKind) -> Result<(), SelectorError> {
        if kind.is_singleton() && self.seen.contains(kind.flag()) {
            return Err(SelectorError::DuplicatePart(kind));
        }
        if let Some(after) = (self.seen & kind.later()).latest() {
            return Err(SelectorError::Order { part: kind, after });
        }
        Ok(())
    }

    fn store(&mut self, part: SelectorPart) {
        self.seen |= part.kind().flag();
        match part {
            SelectorPart::Element(v) => self.element = Some(v),
            SelectorPart::Id(v) => self.id = Some(v),
            SelectorPart::Class(v) => self.classes.push(v),
            SelectorPart::Attribute(v) => self.attributes.push(v),
            SelectorPart::PseudoClass(v) => self.pseudo_classes.push(v),
            SelectorPart::PseudoElement(v) => self.pseudo_element = Some(v),
        }
    }

    fn with(mut self, part: SelectorPart) -> Result<Self, SelectorError> {
        self.push(part)?;
        Ok(self)
    }

    /// Sets the element (type) name, e.g. `div`.
    pub fn element(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.with(SelectorPart::Element(value.into()))
    }

    /// Sets the id, rendered as `#value`.
    pub fn id(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.with(SelectorPart::Id(value.into()))
    }

    /// Appends a class, rendered as `.value`. Repeats are kept.
    pub fn class(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.with(SelectorPart::Class(value.into()))
    }

    /// Appends raw attribute-selector text, rendered as `[value]`.
    pub fn attr(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.with(SelectorPart::Attribute(value.into()))
    }

    /// Appends a pseudo-class, rendered as `:value`.
    pub fn pseudo_class(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.with(SelectorPart::PseudoClass(value.into()))
    }

    /// Sets the pseudo-element, rendered as `::value`.
    pub fn pseudo_element(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.with(SelectorPart::PseudoElement(value.into()))
    }

    /// Renders the selector. Pure; repeated calls return the same string.
    pub fn stringify(&self) -> String {
        let mut out = String::new();
        if let Some(element) = &self.element {
            render_part(PartKind::Element, element, &mut out);
        }
        if let Some(id) = &self.id {
            render_part(PartKind::Id, id, &mut out);
        }
        for class in &self.classes {
            render_part(PartKind::Class, class, &mut out);
        }
        for attr in &self.attributes {
            render_part(PartKind::Attribute, attr, &mut out);
        }
        for pseudo in &self.pseudo_classes {
            render_part(PartKind::PseudoClass, pseudo, &mut out);
        }
        if let Some(pseudo) = &self.pseudo_element {
            render_part(PartKind::PseudoElement, pseudo, &mut out);
        }
        out
    }

    /// The element, if set. Named apart from the [`element`](Self::element) mutator.
    pub fn element_name(&self) -> Option<&str> {
        self.element.as_deref()
    }

    pub fn id_name(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Classes in insertion order, repeats included.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn pseudo_classes(&self) -> &[String] {
        &self.pseudo_classes
    }

    /// The pseudo-element, if set. Named apart from the
    /// [`pseudo_element`](Self::pseudo_element) mutator.
    pub fn pseudo_element_name(&self) -> Option<&str> {
        self.pseudo_element.as_deref()
    }

    /// The kinds of part this builder has received.
    pub fn parts(&self) -> PartSet {
        self.seen
    }

    /// True until the first part is added.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Specificity of the rendered selector.
    ///
    /// Attributes and pseudo-classes weigh the same as classes; the
    /// pseudo-element weighs the same as the element.
    pub fn specificity(&self) -> Specificity {
        let count = |n: usize| u32::try_from(n).unwrap_or(u32::MAX);
        Specificity {
            ids: u32::from(self.id.is_some()),
            classes: count(self.classes.len())
                .saturating_add(count(self.attributes.len()))
                .saturating_add(count(self.pseudo_classes.len())),
            types: u32::from(self.element.is_some()) + u32::from(self.pseudo_element.is_some()),
        }
    }
}

impl Stringify for SelectorBuilder {
    fn stringify(&self) -> String {
        SelectorBuilder::stringify(self)
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stringify())
    }
}
