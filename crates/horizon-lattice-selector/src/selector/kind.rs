//! Part kinds of a compound selector.

use std::fmt;

/// The kind of a part within a compound selector.
///
/// Variants are declared in canonical order, so the derived `Ord` agrees
/// with [`PartKind::rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PartKind {
    /// Type selector (`div`).
    Element,
    /// ID selector (`#main`).
    Id,
    /// Class selector (`.container`).
    Class,
    /// Attribute selector (`[href$=".png"]`).
    Attribute,
    /// Pseudo-class (`:focus`).
    PseudoClass,
    /// Pseudo-element (`::before`).
    PseudoElement,
}

impl PartKind {
    /// All part kinds in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Element,
        Self::Id,
        Self::Class,
        Self::Attribute,
        Self::PseudoClass,
        Self::PseudoElement,
    ];

    /// Ordinal rank (0..=5) of this kind within a compound selector.
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Whether this kind may occur at most once per compound selector.
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Human-readable name used in messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Element => "element",
            Self::Id => "id",
            Self::Class => "class",
            Self::Attribute => "attribute",
            Self::PseudoClass => "pseudo-class",
            Self::PseudoElement => "pseudo-element",
        }
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_follow_canonical_order() {
        for (i, kind) in PartKind::ALL.iter().enumerate() {
            assert_eq!(kind.rank() as usize, i);
        }
        assert!(PartKind::Element < PartKind::PseudoElement);
        assert!(PartKind::Class < PartKind::Attribute);
    }

    #[test]
    fn singletons() {
        let singletons: Vec<_> = PartKind::ALL
            .into_iter()
            .filter(|kind| kind.is_singleton())
            .collect();
        assert_eq!(
            singletons,
            vec![PartKind::Element, PartKind::Id, PartKind::PseudoElement]
        );
    }

    #[test]
    fn display_names() {
        assert_eq!(PartKind::PseudoClass.to_string(), "pseudo-class");
        assert_eq!(PartKind::Attribute.to_string(), "attribute");
    }
}
