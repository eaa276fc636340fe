//! Async interfaces to the tutoring backend.
//!
//! Split in two: [`SessionClient`] is the single capability every protected page
//! needs, [`TutoringBackend`] covers the push and tutor-directory endpoints.
//! [`crate::http::HttpBackend`] implements both over HTTP,
//! [`crate::memory::MemoryBackend`] implements both for tests.

use std::future::Future;

use crate::error::ClientError;
use crate::models::{Profile, TutorEntry};

/// Outcome of asking the backend who the caller is.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    Authenticated(Profile),
    Unauthenticated,
}

pub trait SessionClient {
    fn fetch_profile(&self) -> impl Future<Output = Result<SessionState, ClientError>>;
}

pub trait TutoringBackend {
    /// Whether this device already holds a push subscription.
    fn push_status(&self) -> impl Future<Output = Result<bool, ClientError>>;

    /// Forward a browser-issued subscription, serialised as JSON, verbatim.
    fn subscribe_push(&self, subscription_json: String)
        -> impl Future<Output = Result<(), ClientError>>;

    fn search_tutors(
        &self,
        subjects: &[String],
    ) -> impl Future<Output = Result<Vec<TutorEntry>, ClientError>>;

    /// Subjects the caller currently teaches.
    fn user_subjects(&self) -> impl Future<Output = Result<Vec<String>, ClientError>>;

    /// Replace the caller's subjects. Sent as a query-string GET.
    fn edit_tutor_profile(&self, subjects: &[String])
        -> impl Future<Output = Result<(), ClientError>>;
}
