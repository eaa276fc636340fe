//! # Profile-driven view switch
//!
//! Tutoring pages contain a group of mutually exclusive main sections and two
//! callouts. The page variants (first-open/register/edit, standard/edit,
//! student/teacher registration) differ only in which sections exist, so one
//! [`PageLayout`] describes a variant and one [`ViewSwitch`] drives it.
//!
//! ## Invariants
//!
//! - At most one section of the exclusive group is visible after any operation,
//!   and exactly one if it exists in the markup.
//! - The register callout and the edit-profile callout are never both visible.
//! - Missing elements are skipped silently.

use serde::{Deserialize, Serialize};

use crate::dom::{set_visible, Document, PageElement};
use crate::models::Profile;

pub const REGISTER_CALLOUT_ID: &str = "section-register-callout";
pub const EDIT_PROFILE_CALLOUT_ID: &str = "section-edit-profile-callout";

/// A button that, when clicked, makes `section` the visible main section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionBinding {
    pub button: String,
    pub section: String,
}

impl SectionBinding {
    pub fn new(button: &str, section: &str) -> Self {
        Self {
            button: button.to_string(),
            section: section.to_string(),
        }
    }
}

/// Which exclusive sections a page variant has.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLayout {
    /// Section shown on load.
    pub default_section: String,
    pub bindings: Vec<SectionBinding>,
}

impl PageLayout {
    /// First-open page with register and edit sections.
    pub fn tutoring() -> Self {
        Self {
            default_section: "page-firstopen".to_string(),
            bindings: vec![
                SectionBinding::new("btn-register", "page-register"),
                SectionBinding::new("btn-edit", "page-edit"),
            ],
        }
    }

    /// Standard overview page with an edit section.
    pub fn standard() -> Self {
        Self {
            default_section: "page-standard".to_string(),
            bindings: vec![
                SectionBinding::new("btn-register", "page-register"),
                SectionBinding::new("btn-edit", "page-edit"),
            ],
        }
    }

    /// Registration split into student and teacher forms.
    pub fn role_registration() -> Self {
        Self {
            default_section: "page-firstopen".to_string(),
            bindings: vec![
                SectionBinding::new("btn-register-student", "page-register-student"),
                SectionBinding::new("btn-register-teacher", "page-register-teacher"),
                SectionBinding::new("btn-edit", "page-edit"),
            ],
        }
    }

    /// Pick the variant matching the sections present in `document`.
    pub fn detect<D: Document>(document: &D) -> Self {
        if document.element_by_id("page-register-student").is_some()
            || document.element_by_id("page-register-teacher").is_some()
        {
            Self::role_registration()
        } else if document.element_by_id("page-standard").is_some() {
            Self::standard()
        } else {
            Self::tutoring()
        }
    }

    /// Every section of the exclusive group, default first.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.default_section.as_str())
            .chain(self.bindings.iter().map(|b| b.section.as_str()))
    }
}

/// Resolved elements of one page variant.
#[derive(Clone)]
pub struct ViewSwitch<E: PageElement> {
    default_section: String,
    sections: Vec<(String, Option<E>)>,
    register_callout: Option<E>,
    edit_profile_callout: Option<E>,
}

impl<E: PageElement> ViewSwitch<E> {
    pub fn resolve<D: Document<Element = E>>(document: &D, layout: &PageLayout) -> Self {
        let mut sections: Vec<(String, Option<E>)> = Vec::new();
        for id in layout.sections() {
            if sections.iter().all(|(known, _)| known != id) {
                sections.push((id.to_string(), document.element_by_id(id)));
            }
        }
        Self {
            default_section: layout.default_section.clone(),
            sections,
            register_callout: document.element_by_id(REGISTER_CALLOUT_ID),
            edit_profile_callout: document.element_by_id(EDIT_PROFILE_CALLOUT_ID),
        }
    }

    /// Initial state after the profile is known.
    pub fn apply_profile(&self, profile: Option<&Profile>) {
        let tutoring = Profile::is_tutoring(profile);
        tracing::debug!("applying view for tutoring={}", tutoring);
        set_visible(self.register_callout.as_ref(), !tutoring);
        set_visible(self.edit_profile_callout.as_ref(), tutoring);
        self.show_default();
    }

    /// Make `section` the only visible main section. Unknown ids are ignored.
    pub fn show(&self, section: &str) {
        if self.sections.iter().all(|(id, _)| id != section) {
            tracing::warn!("unknown section {}", section);
            return;
        }
        for (id, element) in &self.sections {
            set_visible(element.as_ref(), id == section);
        }
    }

    pub fn show_default(&self) {
        self.show(&self.default_section);
    }

    pub fn section(&self, id: &str) -> Option<&E> {
        self.sections
            .iter()
            .find(|(known, _)| known == id)
            .and_then(|(_, element)| element.as_ref())
    }
}
