//! The render contract shared by built and combined selectors.

/// Something that renders to a CSS selector string.
///
/// Implemented by [`SelectorBuilder`](crate::SelectorBuilder) and
/// [`CombinedSelector`](crate::CombinedSelector), which lets either one be an
/// operand of [`combine`](crate::combine).
pub trait Stringify {
    fn stringify(&self) -> String;
}

impl<T: Stringify + ?Sized> Stringify for &T {
    fn stringify(&self) -> String {
        (**self).stringify()
    }
}

impl<T: Stringify + ?Sized> Stringify for Box<T> {
    fn stringify(&self) -> String {
        (**self).stringify()
    }
}
