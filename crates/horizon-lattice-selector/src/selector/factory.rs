//! Entry points that start a new selector chain.
//!
//! Every function returns a fresh [`SelectorExpression`], so independent
//! chains never share state.

use super::{Combinator, PartKind, SelectorExpression};
use crate::Result;

fn start(kind: PartKind, value: impl Into<String>) -> Result<SelectorExpression> {
    let mut expr = SelectorExpression::new();
    expr.push(kind, value)?;
    Ok(expr)
}

/// Start a chain with a type selector (`div`).
pub fn element(name: impl Into<String>) -> Result<SelectorExpression> {
    start(PartKind::Element, name)
}

/// Start a chain with an ID selector (`#main`).
pub fn id(name: impl Into<String>) -> Result<SelectorExpression> {
    start(PartKind::Id, name)
}

/// Start a chain with a class selector (`.container`).
pub fn class(name: impl Into<String>) -> Result<SelectorExpression> {
    start(PartKind::Class, name)
}

/// Start a chain with an attribute clause (`[href$=".png"]`).
pub fn attr(clause: impl Into<String>) -> Result<SelectorExpression> {
    start(PartKind::Attribute, clause)
}

/// Start a chain with a pseudo-class (`:focus`).
pub fn pseudo_class(name: impl Into<String>) -> Result<SelectorExpression> {
    start(PartKind::PseudoClass, name)
}

/// Start a chain with a pseudo-element (`::before`).
pub fn pseudo_element(name: impl Into<String>) -> Result<SelectorExpression> {
    start(PartKind::PseudoElement, name)
}

/// Combine two expressions into `left <combinator> right`.
///
/// Both operands are rendered and therefore reset.
pub fn combine(
    left: &mut SelectorExpression,
    combinator: impl AsRef<str>,
    right: &mut SelectorExpression,
) -> SelectorExpression {
    let mut expr = SelectorExpression::new();
    expr.combine(left, combinator, right);
    expr
}

/// `left   right` (descendant).
pub fn descendant(
    left: &mut SelectorExpression,
    right: &mut SelectorExpression,
) -> SelectorExpression {
    combine(left, Combinator::Descendant, right)
}

/// `left > right` (child).
pub fn child(left: &mut SelectorExpression, right: &mut SelectorExpression) -> SelectorExpression {
    combine(left, Combinator::Child, right)
}

/// `left + right` (next sibling).
pub fn next_sibling(
    left: &mut SelectorExpression,
    right: &mut SelectorExpression,
) -> SelectorExpression {
    combine(left, Combinator::NextSibling, right)
}

/// `left ~ right` (subsequent sibling).
pub fn subsequent_sibling(
    left: &mut SelectorExpression,
    right: &mut SelectorExpression,
) -> SelectorExpression {
    combine(left, Combinator::SubsequentSibling, right)
}
