//! Wiring between the page context and browser events.

use std::rc::Rc;

use tutoring::web::{WebDocument, WebElement, WebNavigator, WebPush};
use tutoring::{ClientConfig, HttpBackend, PageContext};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{DocumentReadyState, Event, EventTarget, Window};

struct App {
    config: ClientConfig,
    backend: HttpBackend,
    navigator: WebNavigator,
    push: WebPush,
    page: PageContext<WebElement>,
}

/// Run once the document is parsed.
pub fn start(config: ClientConfig) {
    let Some(window) = web_sys::window() else {
        tracing::error!("no window available");
        return;
    };
    let Some(document) = WebDocument::from_window(&window) else {
        tracing::error!("window has no document");
        return;
    };

    if document.inner().ready_state() == DocumentReadyState::Loading {
        let target = document.inner().clone();
        listen(&target, "DOMContentLoaded", move |_| {
            run(window.clone(), document.clone(), config.clone());
        });
    } else {
        run(window, document, config);
    }
}

fn run(window: Window, document: WebDocument, config: ClientConfig) {
    let origin = match window.location().origin() {
        Ok(origin) => origin,
        Err(e) => {
            tracing::error!("cannot read page origin: {:?}", e);
            return;
        }
    };
    let backend = match HttpBackend::new(&origin, config.endpoints.clone()) {
        Ok(backend) => backend,
        Err(e) => {
            tracing::error!("cannot create backend client: {}", e);
            return;
        }
    };

    let page = PageContext::resolve(&document, &config);
    tracing::debug!("page layout {:?}", page.layout);
    let app = Rc::new(App {
        config,
        backend,
        navigator: WebNavigator::new(window.clone()),
        push: WebPush::new(window),
        page,
    });

    attach_links(&app);
    attach_push(&app);

    spawn_local(async move {
        if app
            .page
            .boot(&app.backend, &app.navigator, &app.config)
            .await
            .is_none()
        {
            return;
        }
        attach_sections(&app);
        attach_search(&app);

        let status_app = Rc::clone(&app);
        spawn_local(async move {
            status_app.page.push.refresh_status(&status_app.backend).await;
        });

        app.page.editor.prefill(&app.backend).await;
        attach_editor(&app);
    });
}

fn attach_links(app: &Rc<App>) {
    for link in &app.page.links {
        let app = Rc::clone(app);
        let target = link.clone();
        listen(link.element.html(), "click", move |_| {
            target.follow(&app.navigator);
        });
    }
}

fn attach_push(app: &Rc<App>) {
    let Some(button) = app.page.push.button() else {
        return;
    };
    let handler_app = Rc::clone(app);
    listen(button.html(), "click", move |_| {
        let app = Rc::clone(&handler_app);
        spawn_local(async move {
            let outcome = app
                .page
                .push
                .activate(&app.push, &app.backend, &app.navigator, &app.config)
                .await;
            match outcome {
                Ok(activation) => tracing::debug!("push activation: {:?}", activation),
                Err(e) => tracing::error!("push activation failed: {}", e),
            }
        });
    });
}

fn attach_sections(app: &Rc<App>) {
    for button in &app.page.section_buttons {
        let app = Rc::clone(app);
        let section = button.section.clone();
        listen(button.element.html(), "click", move |_| {
            app.page.view.show(&section);
        });
    }
}

fn attach_search(app: &Rc<App>) {
    let Some(search) = app.page.search.as_ref() else {
        return;
    };
    let handler_app = Rc::clone(app);
    listen(search.form().html(), "submit", move |event: Event| {
        event.prevent_default();
        let app = Rc::clone(&handler_app);
        spawn_local(async move {
            if let Some(search) = app.page.search.as_ref() {
                search.submit(&app.backend, &app.config.messages).await;
            }
        });
    });
}

fn attach_editor(app: &Rc<App>) {
    let Some(form) = app.page.editor.form() else {
        return;
    };
    let handler_app = Rc::clone(app);
    listen(form.html(), "submit", move |event: Event| {
        event.prevent_default();
        let app = Rc::clone(&handler_app);
        spawn_local(async move {
            let result = app
                .page
                .editor
                .submit(&app.backend, &app.navigator, &app.page.view)
                .await;
            if let Err(e) = result {
                tracing::error!("profile update failed: {}", e);
            }
        });
    });
}

/// Attach a listener for the lifetime of the page.
fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        tracing::error!("cannot listen for {}: {:?}", event, e);
    }
    closure.forget();
}
