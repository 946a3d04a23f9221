//! # cssb - CSS selector builder
//!
//! Builds CSS selector strings from typed calls and rejects selectors whose
//! parts are out of order or repeated where CSS allows only one.
//!
//! ## Quick Start
//!
//! ```rust
//! use cssb::{Combinator, SelectorError, combine, element, id};
//!
//! let editable = id("main").class("container")?.class("editable")?;
//! assert_eq!(editable.stringify(), "#main.container.editable");
//!
//! let link = element("a").attr(r#"href$=".png""#)?.pseudo_class("focus")?;
//! assert_eq!(link.stringify(), r#"a[href$=".png"]:focus"#);
//!
//! let pair = combine(
//!     &element("div").id("main")?,
//!     Combinator::AdjacentSibling,
//!     &element("table").id("data")?,
//! );
//! assert_eq!(pair.stringify(), "div#main + table#data");
//! # Ok::<(), SelectorError>(())
//! ```
//!
//! ## Part Order
//!
//! A compound selector accepts parts in this order only:
//!
//! 1. element (`div`), at most once
//! 2. id (`#main`), at most once
//! 3. classes (`.big`)
//! 4. attributes (`[href]`)
//! 5. pseudo-classes (`:hover`)
//! 6. pseudo-element (`::before`), at most once
//!
//! Setting a single-use part twice returns [`SelectorError::DuplicatePart`];
//! adding a part after one that must follow it returns
//! [`SelectorError::Order`]. Both are reported by the offending call.
//!
//! ## Not Supported
//!
//! - Parsing existing selector strings
//! - Matching selectors against a document
//! - Validating attribute or pseudo-class argument syntax
//!
//! ## Modules
//!
//! - [`builder`]: the [`SelectorBuilder`] accumulator
//! - [`combined`]: [`CombinedSelector`] and [`Combinator`]
//! - [`part`]: part kinds, ordering and specificity
//! - [`error`]: [`SelectorError`]

pub mod builder;
pub mod combined;
pub mod error;
pub mod facade;
pub mod part;
pub mod render;

pub use builder::SelectorBuilder;
pub use combined::{Combinator, CombinedSelector};
pub use error::SelectorError;
pub use facade::{attr, class, combine, element, id, pseudo_class, pseudo_element};
pub use part::{PartKind, PartSet, SelectorPart, Specificity};
pub use render::Stringify;
