//! Object exercises: a CSS selector builder plus rectangle and JSON helpers.
//!
//! The work lives in the member crates; this crate re-exports them.
//!
//! ```rust
//! use objects_rs::selector::{combine, element};
//! use objects_rs::shapes::Rectangle;
//!
//! let selector = combine(&element("ul"), ">", &element("li"));
//! assert_eq!(selector.stringify(), "ul > li");
//! assert_eq!(Rectangle::new(2.0, 3.0).area(), 6.0);
//! ```

pub use cssb as selector;
pub use shapes;
