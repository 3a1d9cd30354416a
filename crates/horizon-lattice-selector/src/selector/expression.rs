//! Stateful selector builder.

use std::fmt;

use super::{PartKind, SimpleSelector};
use crate::logging::targets;
use crate::{Error, Result};

/// Builder that sequences parts into a compound selector, or holds the
/// result of combining two built expressions.
///
/// Parts must be added in non-decreasing [`PartKind::rank`] order, and
/// element, id and pseudo-element may each be added once. A rejected part
/// discards everything accumulated so far before the error is returned, so
/// the same builder can be reused from a clean state.
///
/// # Example
///
/// ```
/// use horizon_lattice_selector::selector::SelectorExpression;
///
/// # fn main() -> horizon_lattice_selector::Result<()> {
/// let mut expr = SelectorExpression::new();
/// expr.id("main")?.class("container")?.class("editable")?;
/// assert_eq!(expr.render(), "#main.container.editable");
/// assert_eq!(expr.render(), "");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SelectorExpression {
    /// Kind of the most recently added part; `None` when fresh.
    last_part: Option<PartKind>,
    accumulator: SimpleSelector,
    /// Set by [`combine`](Self::combine); takes precedence over the accumulator.
    combined: Option<String>,
}

impl SelectorExpression {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a type selector.
    pub fn element(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        self.push(PartKind::Element, name)
    }

    /// Add an ID selector.
    pub fn id(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        self.push(PartKind::Id, name)
    }

    /// Add a class selector.
    pub fn class(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        self.push(PartKind::Class, name)
    }

    /// Add an attribute selector from a pre-formatted clause body such as
    /// `href$=".png"`; the brackets are added when rendering.
    pub fn attr(&mut self, clause: impl Into<String>) -> Result<&mut Self> {
        self.push(PartKind::Attribute, clause)
    }

    /// Add a pseudo-class, without the leading colon.
    pub fn pseudo_class(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        self.push(PartKind::PseudoClass, name)
    }

    /// Add a pseudo-element, without the leading colons.
    pub fn pseudo_element(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        self.push(PartKind::PseudoElement, name)
    }

    /// Add a part of the given kind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateSingleton`] if `kind` is element, id or
    /// pseudo-element and is already present, even when higher-ranked parts
    /// were added since. Otherwise returns [`Error::OrderViolation`] if a part
    /// of higher rank was already added. In both cases the builder's rank and
    /// accumulated parts have been reset.
    pub fn push(&mut self, kind: PartKind, value: impl Into<String>) -> Result<&mut Self> {
        if kind.is_singleton() && self.has(kind) {
            return Err(self.reject(Error::duplicate_singleton(kind)));
        }
        if let Some(after) = self.last_part.filter(|&last| last > kind) {
            return Err(self.reject(Error::order_violation(kind, after)));
        }

        let value = value.into();
        match kind {
            PartKind::Element => self.accumulator.set_element(value),
            PartKind::Id => self.accumulator.set_id(value),
            PartKind::Class => self.accumulator.push_class(value),
            PartKind::Attribute => self.accumulator.push_attribute(value),
            PartKind::PseudoClass => self.accumulator.push_pseudo_class(value),
            PartKind::PseudoElement => self.accumulator.set_pseudo_element(value),
        }
        self.last_part = Some(kind);
        Ok(self)
    }

    /// Store `left <combinator> right` as this builder's result.
    ///
    /// Both operands are rendered, which resets them: rendering either one
    /// again yields the empty string. The combinator is not validated and is
    /// padded with a single space on each side, so the descendant token `" "`
    /// produces three spaces between the operands.
    pub fn combine(
        &mut self,
        left: &mut SelectorExpression,
        combinator: impl AsRef<str>,
        right: &mut SelectorExpression,
    ) -> &mut Self {
        let text = format!("{} {} {}", left.render(), combinator.as_ref(), right.render());
        tracing::trace!(target: targets::EXPRESSION, combined = %text, "combined selectors");
        self.combined = Some(text);
        self
    }

    /// Render the selector text and reset the builder to its fresh state.
    pub fn render(&mut self) -> String {
        let text = match self.combined.take() {
            Some(text) => text,
            None => self.accumulator.render(),
        };
        *self = Self::new();
        tracing::trace!(target: targets::EXPRESSION, selector = %text, "rendered selector");
        text
    }

    /// Kind of the most recently added part, or `None` if no part is pending.
    pub fn last_part(&self) -> Option<PartKind> {
        self.last_part
    }

    /// The compound selector accumulated so far.
    pub fn selector(&self) -> &SimpleSelector {
        &self.accumulator
    }

    /// Check if this builder holds a combined expression.
    pub fn is_combined(&self) -> bool {
        self.combined.is_some()
    }

    /// Check if this builder is in its fresh state.
    pub fn is_fresh(&self) -> bool {
        self.last_part.is_none() && self.accumulator.is_empty() && self.combined.is_none()
    }

    fn has(&self, kind: PartKind) -> bool {
        match kind {
            PartKind::Element => self.accumulator.element().is_some(),
            PartKind::Id => self.accumulator.id().is_some(),
            PartKind::PseudoElement => self.accumulator.pseudo_element().is_some(),
            PartKind::Class | PartKind::Attribute | PartKind::PseudoClass => false,
        }
    }

    /// Discard the partial selector and hand back `err` for the caller to return.
    fn reject(&mut self, err: Error) -> Error {
        tracing::debug!(
            target: targets::EXPRESSION,
            kind = %err.kind(),
            discarded = %self.accumulator,
            "rejected selector part: {}",
            err
        );
        self.last_part = None;
        self.accumulator = SimpleSelector::new();
        err
    }
}

/// Shows the current text without resetting the builder.
impl fmt::Display for SelectorExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.combined {
            Some(text) => f.write_str(text),
            None => write!(f, "{}", self.accumulator),
        }
    }
}
