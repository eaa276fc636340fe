//! # Tutor search: submit, query, render
//!
//! [`SearchForm`] owns the `.search-form` element and the `#search-results`
//! container. A submission collects the checked `subject` inputs and walks:
//!
//! | Condition | Results container |
//! |-----------|-------------------|
//! | no subject checked | "select at least one" message, no request |
//! | request in flight | loading message |
//! | error status, transport or decode failure | generic failure message (detail only logged) |
//! | success, zero entries | "no matches" message |
//! | success | escaped result list, see [`crate::html::render_results`] |
//!
//! Submissions are not cancelled or sequenced. If two are in flight, whichever
//! completes last paints the container.

use crate::backend::TutoringBackend;
use crate::config::MessagesConfig;
use crate::dom::PageElement;
use crate::html::{muted, render_results};

pub const SEARCH_FORM_SELECTOR: &str = ".search-form";
pub const SEARCH_RESULTS_ID: &str = "search-results";
pub const SUBJECT_INPUT: &str = "subject";

/// What a search pass ended up rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    NothingSelected,
    Failed,
    NoMatches,
    Matches(usize),
}

#[derive(Clone)]
pub struct SearchForm<E: PageElement> {
    form: E,
    results: E,
}

impl<E: PageElement> SearchForm<E> {
    /// Both elements are required; a page without either has no search.
    pub fn new(form: Option<E>, results: Option<E>) -> Option<Self> {
        Some(Self {
            form: form?,
            results: results?,
        })
    }

    pub fn form(&self) -> &E {
        &self.form
    }

    /// Handle a submit event.
    pub async fn submit<B: TutoringBackend>(
        &self,
        backend: &B,
        messages: &MessagesConfig,
    ) -> SearchOutcome {
        let subjects = self.form.checked_values(SUBJECT_INPUT);
        self.search(backend, &subjects, messages).await
    }

    pub async fn search<B: TutoringBackend>(
        &self,
        backend: &B,
        subjects: &[String],
        messages: &MessagesConfig,
    ) -> SearchOutcome {
        if subjects.is_empty() {
            self.results.set_inner_html(&muted(&messages.select_subject));
            return SearchOutcome::NothingSelected;
        }

        self.results.set_inner_html(&muted(&messages.searching));
        match backend.search_tutors(subjects).await {
            Ok(entries) if entries.is_empty() => {
                self.results.set_inner_html(&muted(&messages.no_results));
                SearchOutcome::NoMatches
            }
            Ok(entries) => {
                tracing::debug!("search for {:?} found {} tutors", subjects, entries.len());
                self.results
                    .set_inner_html(&render_results(&entries, &messages.subjects_label));
                SearchOutcome::Matches(entries.len())
            }
            Err(e) => {
                tracing::error!("tutor search failed: {}", e);
                self.results.set_inner_html(&muted(&messages.search_failed));
                SearchOutcome::Failed
            }
        }
    }
}
