//! # Page context: one-shot element resolution and the load sequence
//!
//! [`PageContext::resolve`] looks up every element any controller needs, once,
//! when the page is ready. Elements missing from the markup stay `None` and the
//! corresponding handler is skipped. [`PageContext::boot`] runs the blocking
//! part of the load sequence:
//!
//! 1. session gate (stops here after redirecting to the login page)
//! 2. view switch from the profile
//!
//! After `boot` the caller attaches the section and search listeners, then
//! starts the push status check and [`ProfileEditor::prefill`] as independent
//! tasks. Neither may delay the listeners, since requests have no timeout.

use crate::backend::SessionClient;
use crate::config::ClientConfig;
use crate::dom::{Document, Navigator, PageElement};
use crate::models::Profile;
use crate::profile_edit::{edit_form_selector, ProfileEditor, EDIT_SECTION_ID};
use crate::push::{PushEnrollment, ACTIVATE_BUTTON_ID};
use crate::search::{SearchForm, SEARCH_FORM_SELECTOR, SEARCH_RESULTS_ID};
use crate::session::require_session;
use crate::view::{PageLayout, ViewSwitch};

pub const TUTORING_LINK_ID: &str = "app-tutoring";
pub const PW_LINK_ID: &str = "app-pw";

/// An element that navigates to `href` when clicked.
#[derive(Clone)]
pub struct NavLink<E: PageElement> {
    pub element: E,
    pub href: String,
}

impl<E: PageElement> NavLink<E> {
    pub fn follow<N: Navigator>(&self, navigator: &N) {
        navigator.navigate(&self.href);
    }
}

/// A layout button resolved together with the section it reveals.
#[derive(Clone)]
pub struct SectionButton<E: PageElement> {
    pub element: E,
    pub section: String,
}

pub struct PageContext<E: PageElement> {
    pub layout: PageLayout,
    pub links: Vec<NavLink<E>>,
    pub section_buttons: Vec<SectionButton<E>>,
    pub push: PushEnrollment<E>,
    pub view: ViewSwitch<E>,
    pub search: Option<SearchForm<E>>,
    pub editor: ProfileEditor<E>,
}

impl<E: PageElement> PageContext<E> {
    pub fn resolve<D: Document<Element = E>>(document: &D, config: &ClientConfig) -> Self {
        let layout = PageLayout::detect(document);

        let links = [
            (TUTORING_LINK_ID, &config.pages.tutoring),
            (PW_LINK_ID, &config.pages.pw),
        ]
        .into_iter()
        .filter_map(|(id, href)| {
            document.element_by_id(id).map(|element| NavLink {
                element,
                href: href.clone(),
            })
        })
        .collect();

        let section_buttons = layout
            .bindings
            .iter()
            .filter_map(|binding| {
                document
                    .element_by_id(&binding.button)
                    .map(|element| SectionButton {
                        element,
                        section: binding.section.clone(),
                    })
            })
            .collect();

        let search = SearchForm::new(
            document.query_selector(SEARCH_FORM_SELECTOR),
            document.element_by_id(SEARCH_RESULTS_ID),
        );
        let editor = ProfileEditor::new(
            document.query_selector(&edit_form_selector(&config.endpoints.edit_tutor_profile)),
            document.element_by_id(EDIT_SECTION_ID),
        );

        Self {
            view: ViewSwitch::resolve(document, &layout),
            layout,
            links,
            section_buttons,
            push: PushEnrollment::new(document.element_by_id(ACTIVATE_BUTTON_ID)),
            search,
            editor,
        }
    }

    /// Gate the page and apply the view. `None` means the browser is being sent
    /// to login.
    pub async fn boot<C, N>(&self, client: &C, navigator: &N, config: &ClientConfig) -> Option<Profile>
    where
        C: SessionClient,
        N: Navigator,
    {
        let profile = require_session(client, navigator, config).await?;
        self.view.apply_profile(Some(&profile));
        Some(profile)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use tokio::sync::oneshot;

    use super::*;
    use crate::backend::{SessionState, TutoringBackend};
    use crate::error::ClientError;
    use crate::memory::{BackendCall, MemoryBackend, MemoryDocument, MemoryElement, MemoryNavigator};
    use crate::models::TutorEntry;
    use crate::search::{SearchOutcome, SUBJECT_INPUT};
    use crate::view::{EDIT_PROFILE_CALLOUT_ID, REGISTER_CALLOUT_ID};

    fn tutoring_page() -> MemoryDocument {
        let doc = MemoryDocument::new();
        for id in [
            ACTIVATE_BUTTON_ID,
            "page-firstopen",
            "page-register",
            REGISTER_CALLOUT_ID,
            EDIT_PROFILE_CALLOUT_ID,
            "btn-register",
            "btn-edit",
            SEARCH_RESULTS_ID,
        ] {
            doc.add(id);
        }
        let edit = doc.add(EDIT_SECTION_ID);
        edit.add_input(SUBJECT_INPUT, "math", false);
        edit.add_input(SUBJECT_INPUT, "art", false);
        doc.insert_selector(&edit_form_selector("/edit-tutor-profile"), edit);

        let form = MemoryElement::new();
        form.add_input(SUBJECT_INPUT, "math", false);
        doc.insert_selector(SEARCH_FORM_SELECTOR, form);
        doc
    }

    fn visible(doc: &MemoryDocument, id: &str) -> bool {
        doc.element_by_id(id).unwrap().is_visible()
    }

    #[test]
    fn test_resolve_tutoring_page() {
        let doc = tutoring_page();
        let page = PageContext::resolve(&doc, &ClientConfig::default());

        assert_eq!(page.layout, PageLayout::tutoring());
        assert!(page.links.is_empty());
        let sections: Vec<&str> = page
            .section_buttons
            .iter()
            .map(|b| b.section.as_str())
            .collect();
        assert_eq!(sections, vec!["page-register", "page-edit"]);
        assert!(page.push.button().is_some());
        assert!(page.search.is_some());
        assert!(page.editor.form().is_some());
    }

    #[test]
    fn test_resolve_index_page_links() {
        let doc = MemoryDocument::new();
        doc.add(TUTORING_LINK_ID);
        doc.add(PW_LINK_ID);
        let page = PageContext::resolve(&doc, &ClientConfig::default());
        let navigator = MemoryNavigator::new();

        for link in &page.links {
            link.follow(&navigator);
        }

        assert_eq!(
            navigator.navigations(),
            vec!["/app/tutoring.html", "/app/pw.html"]
        );
        assert!(page.search.is_none());
        assert!(page.push.button().is_none());
    }

    #[test]
    fn test_search_requires_results_container() {
        let doc = MemoryDocument::new();
        doc.insert_selector(SEARCH_FORM_SELECTOR, MemoryElement::new());
        let page = PageContext::resolve(&doc, &ClientConfig::default());
        assert!(page.search.is_none());
    }

    #[tokio::test]
    async fn test_boot_for_tutor() {
        let doc = tutoring_page();
        let page = PageContext::resolve(&doc, &ClientConfig::default());
        let backend = MemoryBackend::with_profile(Profile {
            username: "jdoe".to_string(),
            tutoring: true,
            ..Profile::default()
        });
        backend.set_push_status(Ok(true));
        backend.set_subjects(Ok(vec!["art".to_string()]));
        let navigator = MemoryNavigator::new();

        let profile = page
            .boot(&backend, &navigator, &ClientConfig::default())
            .await
            .unwrap();

        assert_eq!(profile.username, "jdoe");
        assert_eq!(backend.calls(), vec![BackendCall::Profile]);
        assert!(!visible(&doc, REGISTER_CALLOUT_ID));
        assert!(visible(&doc, EDIT_PROFILE_CALLOUT_ID));
        assert!(visible(&doc, "page-firstopen"));
        assert!(!visible(&doc, EDIT_SECTION_ID));
        assert!(navigator.navigations().is_empty());

        page.push.refresh_status(&backend).await;
        page.editor.prefill(&backend).await;

        assert!(!visible(&doc, ACTIVATE_BUTTON_ID));
        assert_eq!(
            doc.element_by_id(EDIT_SECTION_ID)
                .unwrap()
                .checked_values(SUBJECT_INPUT),
            vec!["art"]
        );
    }

    /// Backend whose push status and subject requests answer only when released.
    struct PendingBackend {
        inner: MemoryBackend,
        push: RefCell<Option<oneshot::Receiver<bool>>>,
        subjects: RefCell<Option<oneshot::Receiver<Vec<String>>>>,
    }

    impl SessionClient for PendingBackend {
        async fn fetch_profile(&self) -> Result<SessionState, ClientError> {
            self.inner.fetch_profile().await
        }
    }

    impl TutoringBackend for PendingBackend {
        async fn push_status(&self) -> Result<bool, ClientError> {
            let rx = self.push.borrow_mut().take();
            match rx {
                Some(rx) => rx.await.map_err(|e| ClientError::Transport(e.to_string())),
                None => Ok(false),
            }
        }

        async fn subscribe_push(&self, subscription_json: String) -> Result<(), ClientError> {
            self.inner.subscribe_push(subscription_json).await
        }

        async fn search_tutors(&self, subjects: &[String]) -> Result<Vec<TutorEntry>, ClientError> {
            self.inner.search_tutors(subjects).await
        }

        async fn user_subjects(&self) -> Result<Vec<String>, ClientError> {
            let rx = self.subjects.borrow_mut().take();
            match rx {
                Some(rx) => rx.await.map_err(|e| ClientError::Transport(e.to_string())),
                None => Ok(Vec::new()),
            }
        }

        async fn edit_tutor_profile(&self, subjects: &[String]) -> Result<(), ClientError> {
            self.inner.edit_tutor_profile(subjects).await
        }
    }

    #[tokio::test]
    async fn test_search_works_while_background_requests_hang() {
        let doc = tutoring_page();
        let config = ClientConfig::default();
        let page = PageContext::resolve(&doc, &config);
        let (subjects_tx, subjects_rx) = oneshot::channel();
        let (_push_tx, push_rx) = oneshot::channel();
        let backend = PendingBackend {
            inner: MemoryBackend::with_profile(Profile {
                username: "mia".to_string(),
                tutoring: true,
                ..Profile::default()
            }),
            push: RefCell::new(Some(push_rx)),
            subjects: RefCell::new(Some(subjects_rx)),
        };
        backend.inner.set_search(Ok(vec![TutorEntry {
            username: "jdoe".to_string(),
            subjects: vec!["math".to_string()],
            ..TutorEntry::default()
        }]));
        let navigator = MemoryNavigator::new();

        page.boot(&backend, &navigator, &config).await.unwrap();
        assert!(visible(&doc, "page-firstopen"));
        assert!(visible(&doc, EDIT_PROFILE_CALLOUT_ID));

        let search = page.search.as_ref().unwrap();
        doc.query_selector(SEARCH_FORM_SELECTOR)
            .unwrap()
            .set_checked("math", true);
        let results = doc.element_by_id(SEARCH_RESULTS_ID).unwrap();

        let push_status = page.push.refresh_status(&backend);
        let prefill = page.editor.prefill(&backend);
        let user = async {
            // Subjects are still pending here.
            let outcome = search.submit(&backend, &config.messages).await;
            assert_eq!(outcome, SearchOutcome::Matches(1));
            assert!(results.inner_html().contains(">jdoe<"));

            page.view.show("page-register");
            assert!(visible(&doc, "page-register"));
            assert!(!visible(&doc, "page-firstopen"));

            subjects_tx.send(vec!["art".to_string()]).unwrap();
        };

        tokio::select! {
            _ = push_status => panic!("push status was never answered"),
            _ = async { tokio::join!(prefill, user) } => {}
        }

        assert_eq!(
            doc.element_by_id(EDIT_SECTION_ID)
                .unwrap()
                .checked_values(SUBJECT_INPUT),
            vec!["art"]
        );
        assert!(visible(&doc, ACTIVATE_BUTTON_ID));
    }

    #[tokio::test]
    async fn test_boot_unauthenticated_stops_after_redirect() {
        let doc = tutoring_page();
        let page = PageContext::resolve(&doc, &ClientConfig::default());
        let backend = MemoryBackend::new();
        let navigator = MemoryNavigator::new();
        let results = doc.element_by_id(SEARCH_RESULTS_ID).unwrap();

        let profile = page
            .boot(&backend, &navigator, &ClientConfig::default())
            .await;

        assert!(profile.is_none());
        assert_eq!(navigator.navigations(), vec!["/app/login.html"]);
        assert_eq!(backend.calls(), vec![BackendCall::Profile]);
        assert!(visible(&doc, EDIT_PROFILE_CALLOUT_ID));
        assert!(visible(&doc, "page-register"));
        assert!(results.html_writes().is_empty());
    }
}
