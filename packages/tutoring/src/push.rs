//! # Push enrollment
//!
//! Two independent flows around the "activate push" button:
//!
//! - [`PushEnrollment::refresh_status`] asks the backend whether this device is
//!   already subscribed and hides the button if so. Any failure leaves the
//!   button visible so the user can still activate.
//! - [`PushEnrollment::activate`] runs on click: capability check, worker
//!   registration, permission prompt, subscription with the configured server
//!   key, and hand-off of the subscription JSON to the backend.
//!
//! Capability absence and permission denial are reported with an alert and end
//! the flow normally. Everything else is returned to the caller as an error.

use std::future::Future;

use crate::backend::TutoringBackend;
use crate::config::ClientConfig;
use crate::dom::{set_visible, Navigator, PageElement};
use crate::error::ClientError;
use crate::push_key::decode_server_key;

pub const ACTIVATE_BUTTON_ID: &str = "btn-activatepush";

/// Result of `Notification.requestPermission()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
    Default,
}

impl Permission {
    pub fn from_name(name: &str) -> Self {
        match name {
            "granted" => Permission::Granted,
            "denied" => Permission::Denied,
            _ => Permission::Default,
        }
    }
}

/// Browser push capabilities.
pub trait PushPlatform {
    /// Whether both background workers and push messaging are available.
    fn is_supported(&self) -> bool;

    fn register_worker(&self, script: &str) -> impl Future<Output = Result<(), ClientError>>;

    fn request_permission(&self) -> impl Future<Output = Result<Permission, ClientError>>;

    /// Subscribe with `userVisibleOnly` and the given application server key.
    /// Returns the subscription serialised as JSON.
    fn subscribe(&self, server_key: &[u8]) -> impl Future<Output = Result<String, ClientError>>;
}

/// How an activation attempt ended, when it did not fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    Subscribed,
    Unsupported,
    PermissionDenied,
}

pub struct PushEnrollment<E: PageElement> {
    button: Option<E>,
}

impl<E: PageElement> PushEnrollment<E> {
    pub fn new(button: Option<E>) -> Self {
        Self { button }
    }

    pub fn button(&self) -> Option<&E> {
        self.button.as_ref()
    }

    /// Show the activate button unless the device is already subscribed.
    pub async fn refresh_status<B: TutoringBackend>(&self, backend: &B) {
        if self.button.is_none() {
            return;
        }
        let has_push = match backend.push_status().await {
            Ok(has_push) => has_push,
            Err(e) => {
                tracing::warn!("push status check failed: {}", e);
                false
            }
        };
        set_visible(self.button.as_ref(), !has_push);
    }

    pub async fn activate<P, B, N>(
        &self,
        platform: &P,
        backend: &B,
        navigator: &N,
        config: &ClientConfig,
    ) -> Result<Activation, ClientError>
    where
        P: PushPlatform,
        B: TutoringBackend,
        N: Navigator,
    {
        if !platform.is_supported() {
            navigator.alert(&config.messages.push_unsupported);
            return Ok(Activation::Unsupported);
        }

        platform.register_worker(&config.push.worker_script).await?;
        tracing::debug!("registered push worker {}", config.push.worker_script);

        let permission = platform.request_permission().await?;
        if permission != Permission::Granted {
            tracing::info!("notification permission {:?}", permission);
            navigator.alert(&config.messages.push_permission_denied);
            return Ok(Activation::PermissionDenied);
        }

        let key = decode_server_key(&config.push.server_key)?;
        let subscription = platform.subscribe(&key).await?;
        backend.subscribe_push(subscription).await?;

        navigator.alert(&config.messages.push_activated);
        Ok(Activation::Subscribed)
    }
}
