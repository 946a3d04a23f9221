//! Small object helpers: a [`Rectangle`] with an area, and JSON conversion
//! for any serde type.
//!
//! # Usage
//!
//! ```
//! use shapes::{Rectangle, from_json, to_json};
//!
//! let rect = Rectangle::new(10.0, 20.0);
//! assert_eq!(rect.area(), 200.0);
//!
//! let json = to_json(&rect).unwrap();
//! assert_eq!(json, r#"{"width":10.0,"height":20.0}"#);
//!
//! let back: Rectangle = from_json(&json).unwrap();
//! assert_eq!(back.area(), 200.0);
//! ```

pub mod error;
pub mod json;
pub mod rectangle;

pub use error::ShapesError;
pub use json::{from_json, to_json};
pub use rectangle::Rectangle;
