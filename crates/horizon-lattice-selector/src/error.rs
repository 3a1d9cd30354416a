//! Error types for the selector builder.

use crate::selector::PartKind;

/// Result type alias for selector building.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while adding parts to a compound selector.
///
/// Both variants are fatal to the chain that raised them: the builder has
/// already discarded its partial state when the error reaches the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A part was added after a part of higher rank.
    #[error(
        "cannot add {kind} after {after}: selector parts must be ordered \
         element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OrderViolation {
        /// The part kind that was rejected.
        kind: PartKind,
        /// The highest-ranked part already present.
        after: PartKind,
    },

    /// A single-occurrence part was supplied twice.
    #[error(
        "{kind} supplied twice: element, id and pseudo-element may occur \
         at most once in a compound selector"
    )]
    DuplicateSingleton {
        /// The singleton part kind that was repeated.
        kind: PartKind,
    },
}

impl Error {
    /// Create an ordering error.
    pub fn order_violation(kind: PartKind, after: PartKind) -> Self {
        Self::OrderViolation { kind, after }
    }

    /// Create a cardinality error.
    pub fn duplicate_singleton(kind: PartKind) -> Self {
        Self::DuplicateSingleton { kind }
    }

    /// The part kind whose addition was rejected.
    pub fn kind(&self) -> PartKind {
        match self {
            Self::OrderViolation { kind, .. } | Self::DuplicateSingleton { kind } => *kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_violation_message_lists_required_order() {
        let err = Error::order_violation(PartKind::Element, PartKind::Class);
        let msg = err.to_string();
        assert!(msg.starts_with("cannot add element after class"));
        assert!(msg.contains("element, id, class, attribute, pseudo-class, pseudo-element"));
        assert_eq!(err.kind(), PartKind::Element);
    }

    #[test]
    fn duplicate_singleton_message_names_singletons() {
        let err = Error::duplicate_singleton(PartKind::PseudoElement);
        let msg = err.to_string();
        assert!(msg.starts_with("pseudo-element supplied twice"));
        assert!(msg.contains("element, id and pseudo-element may occur at most once"));
        assert_eq!(err.kind(), PartKind::PseudoElement);
    }
}
