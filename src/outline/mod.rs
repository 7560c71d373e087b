// src/outline/mod.rs

//! Outline text -> dependency edges.
//!
//! Only lines of the form
//!
//! ```text
//! * Child > Parent [effort|uncertainty]
//! ```
//!
//! are graph directives; everything else in the text is prose and is ignored.
//!
//! - [`edge`] holds the parsed edge record and its optional metadata.
//! - [`parser`] turns raw text into an ordered list of edges.

pub mod edge;
pub mod parser;

pub use edge::{Edge, EdgeMetadata};
pub use parser::{EdgeParser, ParseOptions};
