use std::cell::RefCell;

use js_sys::{Reflect, Uint8Array, JSON};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Notification, PushSubscriptionOptionsInit, ServiceWorkerRegistration, Window};

use crate::error::ClientError;
use crate::push::{Permission, PushPlatform};

/// Push messaging through the page's service worker container.
pub struct WebPush {
    window: Window,
    registration: RefCell<Option<ServiceWorkerRegistration>>,
}

impl WebPush {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            registration: RefCell::new(None),
        }
    }
}

impl PushPlatform for WebPush {
    fn is_supported(&self) -> bool {
        let has_worker = Reflect::has(&self.window.navigator(), &JsValue::from_str("serviceWorker"))
            .unwrap_or(false);
        let has_push = Reflect::has(&self.window, &JsValue::from_str("PushManager")).unwrap_or(false);
        has_worker && has_push
    }

    async fn register_worker(&self, script: &str) -> Result<(), ClientError> {
        let container = self.window.navigator().service_worker();
        let registration = JsFuture::from(container.register(script)).await?;
        let registration = registration.dyn_into::<ServiceWorkerRegistration>()?;
        *self.registration.borrow_mut() = Some(registration);
        Ok(())
    }

    async fn request_permission(&self) -> Result<Permission, ClientError> {
        let result = JsFuture::from(Notification::request_permission()?).await?;
        Ok(Permission::from_name(&result.as_string().unwrap_or_default()))
    }

    async fn subscribe(&self, server_key: &[u8]) -> Result<String, ClientError> {
        let registration = self
            .registration
            .borrow()
            .clone()
            .ok_or_else(|| ClientError::Browser("no service worker registered".to_string()))?;

        let options = PushSubscriptionOptionsInit::new();
        options.set_user_visible_only(true);
        let key: JsValue = Uint8Array::from(server_key).into();
        options.set_application_server_key(Some(&key));

        let promise = registration.push_manager()?.subscribe_with_options(&options)?;
        let subscription = JsFuture::from(promise).await?;
        let json = JSON::stringify(&subscription)?;
        Ok(String::from(json))
    }
}
