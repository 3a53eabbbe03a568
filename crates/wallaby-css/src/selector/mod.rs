//! CSS selector model: part categories, build errors, and token diagnostics.
//!
//! A selector is assembled from parts in the canonical order defined by
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/): type, ID,
//! classes, attributes, pseudo-classes, pseudo-element. The builder in
//! [`builder`] enforces that order and the at-most-once rule for the
//! singleton parts; [`combinator`] joins finished selectors into complex
//! selectors.

use serde::Serialize;
use thiserror::Error;
use wallaby_common::warning::warn_once;

pub mod builder;
pub mod combinator;

pub use builder::SelectorBuilder;
pub use combinator::{Combinator, Selector, combine};

/// The six selector-part categories, in canonical source order.
///
/// The derived [`Ord`] is the ordering contract: a part may never be added
/// after a part of a strictly greater category on the same compound
/// selector.
///
/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator."
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// — the element's tag name, e.g. `div`.
    Element,
    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// — a hash followed by an identifier, e.g. `#main`.
    Id,
    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// — a full stop followed by an identifier, e.g. `.active`.
    Class,
    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    /// — a bracketed attribute expression, e.g. `[type="text"]`.
    Attribute,
    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    /// — a colon followed by a name, e.g. `:hover`, `:nth-child(2)`.
    PseudoClass,
    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    /// — a double colon followed by a name, e.g. `::before`.
    PseudoElement,
}

impl Category {
    /// Number of categories; sizes the builder's per-category segment table.
    pub const COUNT: usize = 6;

    /// All categories in canonical rendering order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Element,
        Self::Id,
        Self::Class,
        Self::Attribute,
        Self::PseudoClass,
        Self::PseudoElement,
    ];

    /// Position of this category in the segment table.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether this category admits at most one part per compound selector.
    ///
    /// An element has exactly one type, one ID, and (per selector) one
    /// pseudo-element; classes, attributes, and pseudo-classes accumulate.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }
}

/// Errors raised while building a compound selector.
///
/// Both are fatal to the build expression: the failing call returns no new
/// value and the chain must be discarded and restarted.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorError {
    /// A singleton part (type, ID, or pseudo-element) was set a second time
    /// on the same compound selector, regardless of what was added in
    /// between.
    #[error("Element, id and pseudo-element should not occur more than one time inside the selector.")]
    Duplicate,

    /// A part was added after a part of a strictly greater category.
    #[error("Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element.")]
    OutOfOrder,
}

/// Check if a character can start an identifier.
/// [§ 4.3.10 ident-start code point](https://www.w3.org/TR/css-syntax-3/#ident-start-code-point)
const fn is_ident_start_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

/// Check if a character can continue an identifier.
/// [§ 4.3.9 ident code point](https://www.w3.org/TR/css-syntax-3/#ident-code-point)
const fn is_ident_char(c: char) -> bool {
    is_ident_start_char(c) || c.is_ascii_digit() || c == '-'
}

/// Warn (once per unique token) when a part token is not a valid CSS ident.
///
/// The token is still accepted verbatim; grammar validation is out of scope,
/// but a typo like `class("foo bar")` is worth flagging.
pub(crate) fn warn_if_not_ident(what: &str, token: &str) {
    let mut chars = token.chars();
    let valid = match chars.next() {
        Some(first) => {
            (is_ident_start_char(first) || first == '-') && chars.all(is_ident_char)
        }
        None => false,
    };
    if !valid {
        warn_once("CSS", &format!("{what} '{token}' is not a valid CSS identifier"));
    }
}
