//! In-memory implementations of the page and backend seams, for tests and for
//! driving the controllers outside a browser.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::backend::{SessionClient, SessionState, TutoringBackend};
use crate::dom::{Document, Navigator, PageElement};
use crate::error::ClientError;
use crate::models::{Profile, TutorEntry};
use crate::push::{Permission, PushPlatform};

/// A named input (checkbox) inside a [`MemoryElement`].
#[derive(Clone, Debug, PartialEq)]
pub struct MemoryInput {
    pub name: String,
    pub value: String,
    pub checked: bool,
}

#[derive(Debug)]
struct ElementState {
    visible: bool,
    inner_html: String,
    html_writes: Vec<String>,
    inputs: Vec<MemoryInput>,
}

/// Shared handle to an element; clones observe the same state.
#[derive(Clone, Debug)]
pub struct MemoryElement {
    state: Arc<Mutex<ElementState>>,
}

impl Default for MemoryElement {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryElement {
    /// A visible, empty element.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(ElementState {
                visible: true,
                inner_html: String::new(),
                html_writes: Vec::new(),
                inputs: Vec::new(),
            })),
        }
    }

    pub fn add_input(&self, name: &str, value: &str, checked: bool) {
        self.state.lock().unwrap().inputs.push(MemoryInput {
            name: name.to_string(),
            value: value.to_string(),
            checked,
        });
    }

    /// Toggle the checked state of every input with this value.
    pub fn set_checked(&self, value: &str, checked: bool) {
        for input in self.state.lock().unwrap().inputs.iter_mut() {
            if input.value == value {
                input.checked = checked;
            }
        }
    }

    pub fn inputs(&self) -> Vec<MemoryInput> {
        self.state.lock().unwrap().inputs.clone()
    }

    pub fn inner_html(&self) -> String {
        self.state.lock().unwrap().inner_html.clone()
    }

    /// Every value ever assigned to `innerHTML`, oldest first.
    pub fn html_writes(&self) -> Vec<String> {
        self.state.lock().unwrap().html_writes.clone()
    }
}

impl PageElement for MemoryElement {
    fn set_visible(&self, visible: bool) {
        self.state.lock().unwrap().visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.state.lock().unwrap().visible
    }

    fn set_inner_html(&self, html: &str) {
        let mut state = self.state.lock().unwrap();
        state.inner_html = html.to_string();
        state.html_writes.push(html.to_string());
    }

    fn checked_values(&self, name: &str) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .inputs
            .iter()
            .filter(|input| input.name == name && input.checked)
            .map(|input| input.value.clone())
            .collect()
    }

    fn check_values(&self, name: &str, values: &[String]) {
        for input in self.state.lock().unwrap().inputs.iter_mut() {
            if input.name == name && values.contains(&input.value) {
                input.checked = true;
            }
        }
    }
}

/// Elements addressable by id or by selector.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    by_id: Arc<Mutex<HashMap<String, MemoryElement>>>,
    by_selector: Arc<Mutex<HashMap<String, MemoryElement>>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fresh element with the given id and return a handle to it.
    pub fn add(&self, id: &str) -> MemoryElement {
        let element = MemoryElement::new();
        self.insert(id, element.clone());
        element
    }

    pub fn insert(&self, id: &str, element: MemoryElement) {
        self.by_id.lock().unwrap().insert(id.to_string(), element);
    }

    /// Make `element` the match for `selector`.
    pub fn insert_selector(&self, selector: &str, element: MemoryElement) {
        self.by_selector
            .lock()
            .unwrap()
            .insert(selector.to_string(), element);
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.by_id.lock().unwrap().get(id).cloned()
    }

    fn query_selector(&self, selector: &str) -> Option<MemoryElement> {
        if let Some(id) = selector.strip_prefix('#') {
            return self.element_by_id(id);
        }
        self.by_selector.lock().unwrap().get(selector).cloned()
    }
}

/// Records navigations, reloads and alerts instead of performing them.
#[derive(Clone, Debug, Default)]
pub struct MemoryNavigator {
    navigations: Arc<Mutex<Vec<String>>>,
    reloads: Arc<Mutex<usize>>,
    alerts: Arc<Mutex<Vec<String>>>,
}

impl MemoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.lock().unwrap().clone()
    }

    pub fn reloads(&self) -> usize {
        *self.reloads.lock().unwrap()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Navigator for MemoryNavigator {
    fn navigate(&self, href: &str) {
        self.navigations.lock().unwrap().push(href.to_string());
    }

    fn reload(&self) {
        *self.reloads.lock().unwrap() += 1;
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

/// A request received by [`MemoryBackend`].
#[derive(Clone, Debug, PartialEq)]
pub enum BackendCall {
    Profile,
    PushStatus,
    SubscribePush(String),
    SearchTutors(Vec<String>),
    UserSubjects,
    EditTutorProfile(Vec<String>),
}

#[derive(Debug)]
struct BackendState {
    session: Result<SessionState, ClientError>,
    push_status: Result<bool, ClientError>,
    subscribe: Result<(), ClientError>,
    search: Result<Vec<TutorEntry>, ClientError>,
    subjects: Result<Vec<String>, ClientError>,
    edit: Result<(), ClientError>,
    calls: Vec<BackendCall>,
}

impl Default for BackendState {
    fn default() -> Self {
        Self {
            session: Ok(SessionState::Unauthenticated),
            push_status: Ok(false),
            subscribe: Ok(()),
            search: Ok(Vec::new()),
            subjects: Ok(Vec::new()),
            edit: Ok(()),
            calls: Vec::new(),
        }
    }
}

/// Scripted backend. Every endpoint answers with its configured result and
/// every request is recorded.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    state: Arc<Mutex<BackendState>>,
}

impl MemoryBackend {
    /// Unauthenticated, not subscribed, empty search results.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: Profile) -> Self {
        let backend = Self::new();
        backend.set_session(Ok(SessionState::Authenticated(profile)));
        backend
    }

    pub fn set_session(&self, session: Result<SessionState, ClientError>) {
        self.state.lock().unwrap().session = session;
    }

    pub fn set_push_status(&self, status: Result<bool, ClientError>) {
        self.state.lock().unwrap().push_status = status;
    }

    pub fn set_subscribe(&self, result: Result<(), ClientError>) {
        self.state.lock().unwrap().subscribe = result;
    }

    pub fn set_search(&self, results: Result<Vec<TutorEntry>, ClientError>) {
        self.state.lock().unwrap().search = results;
    }

    pub fn set_subjects(&self, subjects: Result<Vec<String>, ClientError>) {
        self.state.lock().unwrap().subjects = subjects;
    }

    pub fn set_edit(&self, result: Result<(), ClientError>) {
        self.state.lock().unwrap().edit = result;
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.state.lock().unwrap().calls.clone()
    }

    fn record(&self, call: BackendCall) {
        self.state.lock().unwrap().calls.push(call);
    }
}

impl SessionClient for MemoryBackend {
    async fn fetch_profile(&self) -> Result<SessionState, ClientError> {
        self.record(BackendCall::Profile);
        self.state.lock().unwrap().session.clone()
    }
}

impl TutoringBackend for MemoryBackend {
    async fn push_status(&self) -> Result<bool, ClientError> {
        self.record(BackendCall::PushStatus);
        self.state.lock().unwrap().push_status.clone()
    }

    async fn subscribe_push(&self, subscription_json: String) -> Result<(), ClientError> {
        self.record(BackendCall::SubscribePush(subscription_json));
        self.state.lock().unwrap().subscribe.clone()
    }

    async fn search_tutors(&self, subjects: &[String]) -> Result<Vec<TutorEntry>, ClientError> {
        self.record(BackendCall::SearchTutors(subjects.to_vec()));
        self.state.lock().unwrap().search.clone()
    }

    async fn user_subjects(&self) -> Result<Vec<String>, ClientError> {
        self.record(BackendCall::UserSubjects);
        self.state.lock().unwrap().subjects.clone()
    }

    async fn edit_tutor_profile(&self, subjects: &[String]) -> Result<(), ClientError> {
        self.record(BackendCall::EditTutorProfile(subjects.to_vec()));
        self.state.lock().unwrap().edit.clone()
    }
}

#[derive(Debug)]
struct PushState {
    supported: bool,
    permission: Permission,
    subscription: String,
    registered: Vec<String>,
    server_key: Option<Vec<u8>>,
}

/// Push platform that grants permission and returns a fixed subscription.
#[derive(Clone, Debug)]
pub struct MemoryPush {
    state: Arc<Mutex<PushState>>,
}

impl Default for MemoryPush {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPush {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(PushState {
                supported: true,
                permission: Permission::Granted,
                subscription: "{}".to_string(),
                registered: Vec::new(),
                server_key: None,
            })),
        }
    }

    pub fn set_supported(&self, supported: bool) {
        self.state.lock().unwrap().supported = supported;
    }

    pub fn set_permission(&self, permission: Permission) {
        self.state.lock().unwrap().permission = permission;
    }

    pub fn set_subscription(&self, json: &str) {
        self.state.lock().unwrap().subscription = json.to_string();
    }

    pub fn registered_workers(&self) -> Vec<String> {
        self.state.lock().unwrap().registered.clone()
    }

    /// Key passed to the last `subscribe` call.
    pub fn server_key(&self) -> Option<Vec<u8>> {
        self.state.lock().unwrap().server_key.clone()
    }
}

impl PushPlatform for MemoryPush {
    fn is_supported(&self) -> bool {
        self.state.lock().unwrap().supported
    }

    async fn register_worker(&self, script: &str) -> Result<(), ClientError> {
        self.state.lock().unwrap().registered.push(script.to_string());
        Ok(())
    }

    async fn request_permission(&self) -> Result<Permission, ClientError> {
        Ok(self.state.lock().unwrap().permission)
    }

    async fn subscribe(&self, server_key: &[u8]) -> Result<String, ClientError> {
        let mut state = self.state.lock().unwrap();
        state.server_key = Some(server_key.to_vec());
        Ok(state.subscription.clone())
    }
}
