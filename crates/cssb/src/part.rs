//! Selector parts and their fixed ordering.
//!
//! A compound selector is written as
//! `element #id .class [attr] :pseudo-class ::pseudo-element`, in that order.
//! [`PartKind`] encodes that rank, [`PartSet`] records which kinds a builder
//! has already received, and [`SelectorPart`] carries the text of one part.

use std::fmt;

use bitflags::bitflags;

/// The kind of a selector part, ordered by its position in a compound selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PartKind {
    Element,
    Id,
    Class,
    Attribute,
    PseudoClass,
    PseudoElement,
}

impl PartKind {
    /// Every kind, in rendering order.
    pub const ALL: [PartKind; 6] = [
        PartKind::Element,
        PartKind::Id,
        PartKind::Class,
        PartKind::Attribute,
        PartKind::PseudoClass,
        PartKind::PseudoElement,
    ];

    /// Kinds that may appear at most once per selector.
    pub fn is_singleton(self) -> bool {
        matches!(
            self,
            PartKind::Element | PartKind::Id | PartKind::PseudoElement
        )
    }

    /// The flag for this kind inside a [`PartSet`].
    pub fn flag(self) -> PartSet {
        match self {
            PartKind::Element => PartSet::ELEMENT,
            PartKind::Id => PartSet::ID,
            PartKind::Class => PartSet::CLASS,
            PartKind::Attribute => PartSet::ATTRIBUTE,
            PartKind::PseudoClass => PartSet::PSEUDO_CLASS,
            PartKind::PseudoElement => PartSet::PSEUDO_ELEMENT,
        }
    }

    /// All kinds that must come after this one.
    pub fn later(self) -> PartSet {
        Self::ALL
            .iter()
            .filter(|kind| **kind > self)
            .fold(PartSet::empty(), |acc, kind| acc | kind.flag())
    }

    pub fn name(self) -> &'static str {
        match self {
            PartKind::Element => "element",
            PartKind::Id => "id",
            PartKind::Class => "class",
            PartKind::Attribute => "attribute",
            PartKind::PseudoClass => "pseudo-class",
            PartKind::PseudoElement => "pseudo-element",
        }
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// The set of part kinds a builder has received so far.
    ///
    /// # Example
    ///
    /// ```
    /// use cssb::{PartKind, PartSet};
    ///
    /// let seen = PartSet::ELEMENT | PartSet::CLASS;
    ///
    /// assert!(seen.intersects(PartKind::Id.later()));
    /// assert!(!seen.intersects(PartKind::Attribute.later()));
    /// assert_eq!(seen.latest(), Some(PartKind::Class));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PartSet: u8 {
        const ELEMENT        = 0b0000_0001;
        const ID             = 0b0000_0010;
        const CLASS          = 0b0000_0100;
        const ATTRIBUTE      = 0b0000_1000;
        const PSEUDO_CLASS   = 0b0001_0000;
        const PSEUDO_ELEMENT = 0b0010_0000;
    }
}

impl PartSet {
    /// The highest-ranked kind present, if any.
    pub fn latest(self) -> Option<PartKind> {
        PartKind::ALL
            .iter()
            .rev()
            .copied()
            .find(|kind| self.contains(kind.flag()))
    }
}

/// One piece of a compound selector, holding its raw text.
///
/// The text is stored without the leading sigil; rendering adds `#`, `.`,
/// `[...]`, `:` or `::` as appropriate. Nothing about the text is validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectorPart {
    Element(String),
    Id(String),
    Class(String),
    Attribute(String),
    PseudoClass(String),
    PseudoElement(String),
}

impl SelectorPart {
    pub fn kind(&self) -> PartKind {
        match self {
            SelectorPart::Element(_) => PartKind::Element,
            SelectorPart::Id(_) => PartKind::Id,
            SelectorPart::Class(_) => PartKind::Class,
            SelectorPart::Attribute(_) => PartKind::Attribute,
            SelectorPart::PseudoClass(_) => PartKind::PseudoClass,
            SelectorPart::PseudoElement(_) => PartKind::PseudoElement,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            SelectorPart::Element(v)
            | SelectorPart::Id(v)
            | SelectorPart::Class(v)
            | SelectorPart::Attribute(v)
            | SelectorPart::PseudoClass(v)
            | SelectorPart::PseudoElement(v) => v,
        }
    }

    /// Appends this part in CSS syntax to `out`.
    pub fn render_into(&self, out: &mut String) {
        render_part(self.kind(), self.value(), out);
    }
}

impl fmt::Display for SelectorPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.render_into(&mut out);
        f.write_str(&out)
    }
}

pub(crate) fn render_part(kind: PartKind, value: &str, out: &mut String) {
    match kind {
        PartKind::Element => out.push_str(value),
        PartKind::Id => {
            out.push('#');
            out.push_str(value);
        }
        PartKind::Class => {
            out.push('.');
            out.push_str(value);
        }
        PartKind::Attribute => {
            out.push('[');
            out.push_str(value);
            out.push(']');
        }
        PartKind::PseudoClass => {
            out.push(':');
            out.push_str(value);
        }
        PartKind::PseudoElement => {
            out.push_str("::");
            out.push_str(value);
        }
    }
}

/// CSS specificity of a built selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Specificity {
    pub ids: u32,
    pub classes: u32,
    pub types: u32,
}
