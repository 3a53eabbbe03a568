//! Combinators and combined (complex) selectors.
//!
//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
//! "A combinator is punctuation that represents a particular kind of
//! relationship between the selectors on either side."
//!
//! [`combine`] is pure: it captures both operands by value inside a fresh
//! [`Selector`] node and never mutates them, so a selector can appear in
//! several independent chains. Rendering walks the node tree recursively;
//! because each outer combination wraps the previous result, the outermost
//! combinator ends up leftmost in the final string.

use std::fmt;

use serde::Serialize;
use strum_macros::Display;

use super::builder::SelectorBuilder;

/// The four combinators, each rendering its full separator text.
///
/// Symbolic combinators get exactly one space on each side; the descendant
/// combinator is the single space itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// `A B` — B is an arbitrary descendant of A.
    #[strum(serialize = " ")]
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// `A > B` — B is a direct child of A.
    #[strum(serialize = " > ")]
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// `A + B` — B immediately follows A under the same parent.
    #[strum(serialize = " + ")]
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// `A ~ B` — B follows A (not necessarily immediately) under the same parent.
    #[strum(serialize = " ~ ")]
    SubsequentSibling,
}

/// A selector: either a single compound selector or two selectors joined by
/// a combinator.
///
/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
/// "A complex selector is a chain of one or more compound selectors
/// separated by combinators."
///
/// # Example
///
/// ```
/// use wallaby_css::selector::{Combinator, SelectorBuilder, combine};
///
/// let left = SelectorBuilder::new().element("div")?.id("main")?;
/// let right = SelectorBuilder::new().element("table")?.id("data")?;
/// let joined = combine(left, Combinator::NextSibling, right);
/// assert_eq!(joined.stringify(), "div#main + table#data");
/// # Ok::<(), wallaby_css::selector::SelectorError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Selector {
    /// A single compound selector with no combinator.
    Compound(SelectorBuilder),

    /// Two selectors joined by a combinator; either side may itself be
    /// combined.
    Complex {
        /// The selector on the left of the combinator.
        left: Box<Selector>,
        /// The joining combinator.
        combinator: Combinator,
        /// The selector on the right of the combinator.
        right: Box<Selector>,
    },
}

impl Selector {
    /// Render this selector as canonical text; idempotent.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl From<SelectorBuilder> for Selector {
    fn from(builder: SelectorBuilder) -> Self {
        Self::Compound(builder)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound(builder) => fmt::Display::fmt(builder, f),
            Self::Complex {
                left,
                combinator,
                right,
            } => write!(f, "{left}{combinator}{right}"),
        }
    }
}

/// Join two selectors with a combinator.
///
/// Both operands are captured by value at the moment of combination; later
/// changes to clones of the originals cannot affect the combined result,
/// and either operand may be a previously combined selector.
#[must_use]
pub fn combine(
    left: impl Into<Selector>,
    combinator: Combinator,
    right: impl Into<Selector>,
) -> Selector {
    Selector::Complex {
        left: Box::new(left.into()),
        combinator,
        right: Box::new(right.into()),
    }
}
