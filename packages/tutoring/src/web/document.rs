use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, Window};

use crate::dom::{Document, Navigator, PageElement};

#[derive(Clone)]
pub struct WebElement {
    element: HtmlElement,
}

impl WebElement {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    /// The underlying element, for attaching event listeners.
    pub fn html(&self) -> &HtmlElement {
        &self.element
    }

    fn inputs(&self, name: &str) -> Vec<HtmlInputElement> {
        let selector = format!(r#"input[name="{name}"]"#);
        let Ok(list) = self.element.query_selector_all(&selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
            .collect()
    }
}

impl PageElement for WebElement {
    fn set_visible(&self, visible: bool) {
        let display = if visible { "block" } else { "none" };
        let _ = self.element.style().set_property("display", display);
    }

    fn is_visible(&self) -> bool {
        self.element
            .style()
            .get_property_value("display")
            .map(|display| display != "none")
            .unwrap_or(true)
    }

    fn set_inner_html(&self, html: &str) {
        self.element.set_inner_html(html);
    }

    fn checked_values(&self, name: &str) -> Vec<String> {
        self.inputs(name)
            .into_iter()
            .filter(|input| input.checked())
            .map(|input| input.value())
            .collect()
    }

    fn check_values(&self, name: &str, values: &[String]) {
        for input in self.inputs(name) {
            if values.contains(&input.value()) {
                input.set_checked(true);
            }
        }
    }
}

#[derive(Clone)]
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    pub fn from_window(window: &Window) -> Option<Self> {
        window.document().map(|document| Self { document })
    }

    pub fn inner(&self) -> &web_sys::Document {
        &self.document
    }
}

impl Document for WebDocument {
    type Element = WebElement;

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        let element = self.document.get_element_by_id(id)?;
        element.dyn_into::<HtmlElement>().ok().map(WebElement::new)
    }

    fn query_selector(&self, selector: &str) -> Option<WebElement> {
        let element = self.document.query_selector(selector).ok().flatten()?;
        element.dyn_into::<HtmlElement>().ok().map(WebElement::new)
    }
}

#[derive(Clone)]
pub struct WebNavigator {
    window: Window,
}

impl WebNavigator {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Navigator for WebNavigator {
    fn navigate(&self, href: &str) {
        let _ = self.window.location().set_href(href);
    }

    fn reload(&self) {
        let _ = self.window.location().reload();
    }

    fn alert(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }
}
