//! Combinator tokens.

use std::fmt;

/// Combinator between two selectors.
///
/// `combine` accepts any string as its combinator; this enum names the
/// standard tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Combinator {
    /// Descendant combinator (space): matches any descendant.
    Descendant,
    /// Child combinator (>): matches direct child only.
    Child,
    /// Next-sibling combinator (+): matches the immediately following sibling.
    NextSibling,
    /// Subsequent-sibling combinator (~): matches any following sibling.
    SubsequentSibling,
}

impl Combinator {
    /// The combinator token as written between two selectors.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }
}

impl AsRef<str> for Combinator {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens() {
        assert_eq!(Combinator::Descendant.as_str(), " ");
        assert_eq!(Combinator::Child.as_ref(), ">");
        assert_eq!(Combinator::NextSibling.to_string(), "+");
        assert_eq!(Combinator::SubsequentSibling.to_string(), "~");
    }
}
