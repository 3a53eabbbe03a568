//! Compound selector accumulation.
//!
//! [`SelectorBuilder`] is an immutable-per-step value: every part-adding
//! operation takes `&self`, checks the singleton and ordering guards, and
//! returns a fresh builder with the part appended. The receiver is never
//! touched, so a partially built selector can be branched into several
//! derived selectors without interference.

use std::fmt;

use serde::Serialize;

use super::{Category, SelectorError, warn_if_not_ident};

/// A (possibly partially built) compound selector.
///
/// Parts accumulate per category with their CSS prefix baked in at insertion
/// time (`#` for IDs, `.` for classes, `[...]` for attributes, `:`/`::` for
/// pseudos). Rendering is then a mechanical concatenation of the non-empty
/// category segments in canonical order.
///
/// # Example
///
/// ```
/// use wallaby_css::selector::SelectorBuilder;
///
/// let selector = SelectorBuilder::new()
///     .element("div")?
///     .id("main")?
///     .class("card")?
///     .class("wide")?;
/// assert_eq!(selector.stringify(), "div#main.card.wide");
/// # Ok::<(), wallaby_css::selector::SelectorError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectorBuilder {
    /// Accumulated rendered text per category, indexed by `Category::index`.
    segments: [String; Category::COUNT],
    /// Which categories hold at least one part. Rendered text can be empty
    /// even when a part was set (an empty element name), so segment
    /// emptiness cannot stand in for populated-ness.
    populated: [bool; Category::COUNT],
    /// Highest category populated so far; `None` for the zero-state template.
    last: Option<Category>,
}

impl SelectorBuilder {
    /// The zero-state template: all categories empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no part has been added yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.last.is_none()
    }

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Set the element (tag) name, e.g. `div`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if the element is already set;
    /// [`SelectorError::OutOfOrder`] if any later category is populated.
    pub fn element(&self, name: &str) -> Result<Self, SelectorError> {
        warn_if_not_ident("element name", name);
        self.set_singleton(Category::Element, name)
    }

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Set the ID; rendered with a leading `#`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if the ID is already set;
    /// [`SelectorError::OutOfOrder`] if any later category is populated.
    pub fn id(&self, name: &str) -> Result<Self, SelectorError> {
        warn_if_not_ident("id", name);
        self.set_singleton(Category::Id, &format!("#{name}"))
    }

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Append a class token; each is rendered with a leading `.` and
    /// accumulates in call order: `class("a")` then `class("b")` renders
    /// `.a.b`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if any later category is populated.
    pub fn class(&self, name: &str) -> Result<Self, SelectorError> {
        warn_if_not_ident("class name", name);
        self.append(Category::Class, &format!(".{name}"))
    }

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Append a bracketed attribute expression; the expression text between
    /// the brackets is taken verbatim, e.g. `attr("type=\"text\"")` renders
    /// `[type="text"]`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if any later category is populated.
    pub fn attr(&self, expr: &str) -> Result<Self, SelectorError> {
        self.append(Category::Attribute, &format!("[{expr}]"))
    }

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Append a pseudo-class token with a leading `:`. Functional notation
    /// like `nth-child(2)` is accepted verbatim.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if any later category is populated.
    pub fn pseudo_class(&self, name: &str) -> Result<Self, SelectorError> {
        // Only the name part of functional notation is ident-shaped.
        let bare = name.split_once('(').map_or(name, |(head, _)| head);
        warn_if_not_ident("pseudo-class name", bare);
        self.append(Category::PseudoClass, &format!(":{name}"))
    }

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Set the pseudo-element with a leading `::`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if a pseudo-element is already set.
    pub fn pseudo_element(&self, name: &str) -> Result<Self, SelectorError> {
        warn_if_not_ident("pseudo-element name", name);
        self.set_singleton(Category::PseudoElement, &format!("::{name}"))
    }

    /// Render the current accumulated state as canonical selector text.
    ///
    /// Idempotent and non-mutating; empty categories contribute nothing.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    /// Singleton path: at-most-once guard first, then the ordering guard.
    ///
    /// The two guards are independent; a repeated `element()` call reports
    /// [`SelectorError::Duplicate`] even when ordering is also violated.
    fn set_singleton(&self, category: Category, rendered: &str) -> Result<Self, SelectorError> {
        self.check_occurrence(category)?;
        self.check_order(category)?;
        Ok(self.with_segment(category, rendered))
    }

    /// Accumulating path: ordering guard only; repeats within the same
    /// category always pass (equal category compares as not-less).
    fn append(&self, category: Category, rendered: &str) -> Result<Self, SelectorError> {
        self.check_order(category)?;
        Ok(self.with_segment(category, rendered))
    }

    /// At-most-once rule for type, ID, and pseudo-element parts.
    const fn check_occurrence(&self, category: Category) -> Result<(), SelectorError> {
        if self.populated[category.index()] {
            return Err(SelectorError::Duplicate);
        }
        Ok(())
    }

    /// Ordering rule: a part may target the current highest category (the
    /// accumulating repeat case) or any greater one, never a lesser one.
    fn check_order(&self, category: Category) -> Result<(), SelectorError> {
        if self.last.is_some_and(|last| category < last) {
            return Err(SelectorError::OutOfOrder);
        }
        Ok(())
    }

    /// Copy-with-modification: clone, append the rendered part to its
    /// category segment, and raise the high-water mark.
    fn with_segment(&self, category: Category, rendered: &str) -> Self {
        let mut next = self.clone();
        next.segments[category.index()].push_str(rendered);
        next.populated[category.index()] = true;
        next.last = Some(category);
        next
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for category in Category::ALL {
            let segment = &self.segments[category.index()];
            if !segment.is_empty() {
                f.write_str(segment)?;
            }
        }
        Ok(())
    }
}
