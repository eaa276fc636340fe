//! Tutor profile editing: pre-checking the current subjects and submitting the
//! edited selection.

use crate::backend::TutoringBackend;
use crate::dom::{Navigator, PageElement};
use crate::error::ClientError;
use crate::search::SUBJECT_INPUT;
use crate::view::ViewSwitch;

pub const EDIT_SECTION_ID: &str = "page-edit";

/// Selector of the edit form, which posts to `action` when scripts are off.
pub fn edit_form_selector(action: &str) -> String {
    format!(r#"form[action="{action}"]"#)
}

#[derive(Clone)]
pub struct ProfileEditor<E: PageElement> {
    form: Option<E>,
    edit_section: Option<E>,
}

impl<E: PageElement> ProfileEditor<E> {
    pub fn new(form: Option<E>, edit_section: Option<E>) -> Self {
        Self { form, edit_section }
    }

    pub fn form(&self) -> Option<&E> {
        self.form.as_ref()
    }

    /// Check the caller's current subjects inside the edit section only.
    ///
    /// Failures are logged and leave every checkbox as it was.
    pub async fn prefill<B: TutoringBackend>(&self, backend: &B) {
        let Some(section) = self.edit_section.as_ref() else {
            return;
        };
        match backend.user_subjects().await {
            Ok(subjects) => section.check_values(SUBJECT_INPUT, &subjects),
            Err(ClientError::Status(status)) => {
                tracing::debug!("subjects request returned {}", status);
            }
            Err(e) => tracing::error!("failed to fetch subjects: {}", e),
        }
    }

    /// Send the checked subjects, then return to the default section and reload.
    ///
    /// On failure nothing changes on the page and the error is returned.
    pub async fn submit<B, N>(
        &self,
        backend: &B,
        navigator: &N,
        view: &ViewSwitch<E>,
    ) -> Result<(), ClientError>
    where
        B: TutoringBackend,
        N: Navigator,
    {
        let Some(form) = self.form.as_ref() else {
            return Ok(());
        };
        let subjects = form.checked_values(SUBJECT_INPUT);
        backend.edit_tutor_profile(&subjects).await?;

        tracing::debug!("tutor profile updated with {:?}", subjects);
        if self.edit_section.is_some() {
            view.show_default();
        }
        navigator.reload();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;
    use crate::memory::{BackendCall, MemoryBackend, MemoryDocument, MemoryElement, MemoryNavigator};
    use crate::query::subject_query;
    use crate::view::PageLayout;

    struct Page {
        doc: MemoryDocument,
        edit: MemoryElement,
        search_form: MemoryElement,
        editor: ProfileEditor<MemoryElement>,
        view: ViewSwitch<MemoryElement>,
    }

    fn page() -> Page {
        let doc = MemoryDocument::new();
        doc.add("page-firstopen");
        doc.add("page-register");
        let edit = doc.add(EDIT_SECTION_ID);
        for subject in ["math", "physics", "art"] {
            edit.add_input(SUBJECT_INPUT, subject, false);
        }
        let selector = edit_form_selector("/edit-tutor-profile");
        assert_eq!(selector, r#"form[action="/edit-tutor-profile"]"#);
        doc.insert_selector(&selector, edit.clone());

        let search_form = MemoryElement::new();
        for subject in ["math", "physics", "art"] {
            search_form.add_input(SUBJECT_INPUT, subject, false);
        }
        doc.insert_selector(".search-form", search_form.clone());

        let editor = ProfileEditor::new(
            doc.query_selector(&selector),
            doc.element_by_id(EDIT_SECTION_ID),
        );
        let view = ViewSwitch::resolve(&doc, &PageLayout::tutoring());
        Page {
            doc,
            edit,
            search_form,
            editor,
            view,
        }
    }

    #[tokio::test]
    async fn test_prefill_checks_only_edit_section() {
        let page = page();
        let backend = MemoryBackend::new();
        backend.set_subjects(Ok(vec!["math".to_string(), "art".to_string()]));

        page.editor.prefill(&backend).await;

        assert_eq!(page.edit.checked_values(SUBJECT_INPUT), vec!["math", "art"]);
        assert!(page.search_form.checked_values(SUBJECT_INPUT).is_empty());
    }

    #[tokio::test]
    async fn test_prefill_failure_changes_nothing() {
        let page = page();
        let backend = MemoryBackend::new();
        backend.set_subjects(Err(ClientError::Status(401)));

        page.editor.prefill(&backend).await;

        assert!(page.edit.checked_values(SUBJECT_INPUT).is_empty());
    }

    #[tokio::test]
    async fn test_submit_sends_selection_and_reloads() {
        let page = page();
        page.edit.set_checked("math", true);
        page.edit.set_checked("physics", true);
        page.view.show(EDIT_SECTION_ID);
        let backend = MemoryBackend::new();
        let navigator = MemoryNavigator::new();

        page.editor
            .submit(&backend, &navigator, &page.view)
            .await
            .unwrap();

        let subjects = vec!["math".to_string(), "physics".to_string()];
        assert_eq!(
            backend.calls(),
            vec![BackendCall::EditTutorProfile(subjects.clone())]
        );
        assert_eq!(subject_query(&subjects), "subject=math&subject=physics");
        assert!(!page.edit.is_visible());
        assert!(page.doc.element_by_id("page-firstopen").unwrap().is_visible());
        assert_eq!(navigator.reloads(), 1);
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_page_and_returns_error() {
        let page = page();
        page.edit.set_checked("art", true);
        page.view.show(EDIT_SECTION_ID);
        let backend = MemoryBackend::new();
        backend.set_edit(Err(ClientError::Status(500)));
        let navigator = MemoryNavigator::new();

        let err = page
            .editor
            .submit(&backend, &navigator, &page.view)
            .await
            .unwrap_err();

        assert_eq!(err, ClientError::Status(500));
        assert!(page.edit.is_visible());
        assert_eq!(navigator.reloads(), 0);
        assert!(navigator.alerts().is_empty());
    }
}
