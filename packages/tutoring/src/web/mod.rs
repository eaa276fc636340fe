//! # Browser implementations of the page seams
//!
//! Compiled only for `wasm32` with the `web` feature. Each type wraps a
//! `web-sys` handle:
//!
//! | Type | Implements | Wraps |
//! |------|-----------|-------|
//! | [`WebElement`] | [`PageElement`](crate::dom::PageElement) | `HtmlElement` |
//! | [`WebDocument`] | [`Document`](crate::dom::Document) | `Document` |
//! | [`WebNavigator`] | [`Navigator`](crate::dom::Navigator) | `Window` |
//! | [`WebPush`] | [`PushPlatform`](crate::push::PushPlatform) | `Window` + the registered `ServiceWorkerRegistration` |
//!
//! DOM calls that can throw are treated as no-ops; a missing or odd element
//! must never take the page down.

mod document;
mod push;

pub use document::{WebDocument, WebElement, WebNavigator};
pub use push::WebPush;
