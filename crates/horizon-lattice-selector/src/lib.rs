//! Fluent CSS selector builder for Horizon Lattice.
//!
//! This crate assembles CSS compound selectors and combinator expressions into
//! their canonical text, featuring:
//!
//! - **Compound selectors**: element, id, classes, attributes, pseudo-classes
//!   and a pseudo-element, always rendered in canonical order
//! - **Ordering checks**: parts must be added in non-decreasing rank
//! - **Cardinality checks**: element, id and pseudo-element appear at most once
//! - **Combinators**: join built selectors with descendant, child and sibling tokens
//!
//! Only structure to text is supported. Values are opaque strings and are never
//! validated as CSS identifiers.
//!
//! # Example
//!
//! ```
//! use horizon_lattice_selector::prelude::*;
//!
//! # fn main() -> horizon_lattice_selector::Result<()> {
//! let css = element("a")?.attr(r#"href$=".png""#)?.pseudo_class("focus")?.render();
//! assert_eq!(css, r#"a[href$=".png"]:focus"#);
//!
//! let row = combine(&mut element("tr")?, Combinator::Child, &mut class("cell")?).render();
//! assert_eq!(row, "tr > .cell");
//! # Ok(())
//! # }
//! ```

pub mod logging;
pub mod selector;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types and entry points.
pub mod prelude {
    pub use crate::selector::{
        Combinator, PartKind, SelectorExpression, SimpleSelector, attr, child, class, combine,
        descendant, element, id, next_sibling, pseudo_class, pseudo_element, subsequent_sibling,
    };
    pub use crate::{Error, Result};
}
