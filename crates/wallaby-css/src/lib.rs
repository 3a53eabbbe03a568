//! Structured construction of CSS selector strings per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selector building** ([§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, ID, class, attribute, pseudo-class, and pseudo-element parts
//!   - Canonical part ordering enforced at build time
//!   - Singleton parts (type, ID, pseudo-element) rejected on repeat
//!
//! - **Combinators** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Descendant, child, next-sibling, and subsequent-sibling
//!   - Arbitrary nesting of combined selectors, rendered left-to-right
//!
//! - **Rendering**
//!   - `Display`/`stringify()` producing the canonical selector text
//!
//! # Not Implemented
//!
//! - Selector parsing (string → structured form)
//! - Grammar validation of part tokens (non-ident tokens are accepted with
//!   a one-time warning)
//! - Specificity calculation
//! - Matching against a document tree

/// CSS selector model and builder per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;
