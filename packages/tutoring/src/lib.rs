//! # Tutoring client: page logic for the tutoring PWA
//!
//! Session gate, push enrollment, the profile-driven view switch, tutor search
//! and profile editing, written against small traits so the same code runs in
//! the browser (`wasm32` + `web` feature) and in native tests.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`backend`] | [`SessionClient`] and [`TutoringBackend`] traits |
//! | [`http`] | [`HttpBackend`], the reqwest implementation of both |
//! | [`dom`] | [`PageElement`], [`Document`] and [`Navigator`] seams |
//! | [`page`] | [`PageContext`]: element resolution and the load sequence |
//! | [`session`] | login check with redirect |
//! | [`push`] | push status and activation |
//! | [`view`] | exclusive sections and callouts |
//! | [`search`] | tutor search form |
//! | [`profile_edit`] | subject pre-check and edit submission |
//! | [`html`] | escaping and result markup |
//! | [`memory`] | in-memory seams for tests |

pub mod backend;
pub mod config;
pub mod dom;
pub mod error;
pub mod html;
pub mod http;
pub mod memory;
pub mod models;
pub mod page;
pub mod profile_edit;
pub mod push;
pub mod push_key;
pub mod query;
pub mod search;
pub mod session;
pub mod view;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub mod web;

pub use backend::{SessionClient, SessionState, TutoringBackend};
pub use config::ClientConfig;
pub use dom::{Document, Navigator, PageElement};
pub use error::ClientError;
pub use http::HttpBackend;
pub use models::{Profile, TutorEntry};
pub use page::PageContext;
pub use push::{Activation, Permission, PushEnrollment, PushPlatform};
pub use search::{SearchForm, SearchOutcome};
pub use view::{PageLayout, ViewSwitch};
