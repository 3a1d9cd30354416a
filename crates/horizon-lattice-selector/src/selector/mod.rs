//! CSS selector building and rendering.

mod combinator;
mod expression;
mod factory;
mod kind;
mod simple;

pub use combinator::Combinator;
pub use expression::SelectorExpression;
pub use factory::{
    attr, child, class, combine, descendant, element, id, next_sibling, pseudo_class,
    pseudo_element, subsequent_sibling,
};
pub use kind::PartKind;
pub use simple::SimpleSelector;
