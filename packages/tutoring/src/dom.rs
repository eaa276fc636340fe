//! # Page seams: the parts of the browser the controllers touch
//!
//! Controllers never look elements up on their own. They receive element handles
//! that were resolved once at page-ready time (see [`crate::page::PageContext`]),
//! which lets tests hand them an in-memory document instead of a real one.
//!
//! | Trait | Browser counterpart |
//! |-------|---------------------|
//! | [`PageElement`] | an `HTMLElement`: inline `display` style, `innerHTML`, and the named inputs inside it |
//! | [`Document`] | `getElementById` / `querySelector` |
//! | [`Navigator`] | `location.href`, `location.reload()`, `alert()` |
//!
//! Implementations: [`crate::memory`] for tests, `crate::web` for `wasm32`.

/// A resolved element of the host markup.
pub trait PageElement: Clone {
    /// Set the inline display style to `block` or `none`.
    fn set_visible(&self, visible: bool);

    fn is_visible(&self) -> bool;

    fn set_inner_html(&self, html: &str);

    /// Values of the checked inputs named `name` inside this element, in document order.
    fn checked_values(&self, name: &str) -> Vec<String>;

    /// Check every input named `name` inside this element whose value is in `values`.
    /// Inputs outside this element are untouched.
    fn check_values(&self, name: &str, values: &[String]);
}

pub trait Document {
    type Element: PageElement;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    fn query_selector(&self, selector: &str) -> Option<Self::Element>;
}

/// Window-level side effects.
pub trait Navigator {
    /// Full-page navigation.
    fn navigate(&self, href: &str);

    fn reload(&self);

    fn alert(&self, message: &str);
}

/// Show or hide an element that may be missing from the markup.
pub(crate) fn set_visible<E: PageElement>(element: Option<&E>, visible: bool) {
    if let Some(element) = element {
        element.set_visible(visible);
    }
}
