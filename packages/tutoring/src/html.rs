//! HTML fragments written into the results container.
//!
//! All text that originates from the backend passes through [`escape_html`]
//! before it is interpolated; callers never build markup from raw fields.

use crate::models::TutorEntry;

/// Escape the five HTML-significant characters.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// A muted status paragraph.
pub fn muted(message: &str) -> String {
    format!(r#"<p class="muted">{}</p>"#, escape_html(message))
}

/// Render one block per tutor inside a `tutor-list` wrapper.
pub fn render_results(entries: &[TutorEntry], subjects_label: &str) -> String {
    let mut html = String::from(r#"<div class="tutor-list">"#);
    for entry in entries {
        html.push_str(&render_entry(entry, subjects_label));
    }
    html.push_str("</div>");
    html
}

fn render_entry(entry: &TutorEntry, subjects_label: &str) -> String {
    let name = escape_html(&entry.display_name());
    let mut infos = escape_html(&entry.username);
    if let Some(class) = entry.class.as_deref().filter(|c| !c.trim().is_empty()) {
        infos.push_str(" &middot; ");
        infos.push_str(&escape_html(class));
    }
    let subjects = entry
        .subjects
        .iter()
        .map(|s| escape_html(s))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"<div class="search-result"><span class="name">{name}</span><span class="infos">{infos}</span><div class="subjects">{}: {subjects}</div></div>"#,
        escape_html(subjects_label),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(username: &str) -> TutorEntry {
        TutorEntry {
            username: username.to_string(),
            ..TutorEntry::default()
        }
    }

    #[test]
    fn test_escape_all_special_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_escape_ampersand_first() {
        // An already-escaped entity must be escaped again, not passed through.
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_render_single_entry() {
        let tutor = TutorEntry {
            username: "jdoe".to_string(),
            firstname: Some("Jane".to_string()),
            lastname: Some("Doe".to_string()),
            class: Some("11a".to_string()),
            subjects: vec!["math".to_string(), "physics".to_string()],
        };

        let html = render_results(&[tutor], "Fächer");
        assert!(html.starts_with(r#"<div class="tutor-list">"#));
        assert!(html.contains(r#"<span class="name">Jane Doe</span>"#));
        assert!(html.contains(r#"<span class="infos">jdoe &middot; 11a</span>"#));
        assert!(html.contains("Fächer: math, physics"));
        assert_eq!(html.matches(r#"class="search-result""#).count(), 1);
    }

    #[test]
    fn test_render_falls_back_to_username_without_class() {
        let html = render_results(&[entry("anon")], "Fächer");
        assert!(html.contains(r#"<span class="name">anon</span>"#));
        assert!(html.contains(r#"<span class="infos">anon</span>"#));
        assert!(!html.contains("&middot;"));

        let blank = TutorEntry {
            class: Some(String::new()),
            ..entry("anon")
        };
        let html = render_results(&[blank], "Fächer");
        assert!(html.contains(r#"<span class="infos">anon</span>"#));
    }

    #[test]
    fn test_render_escapes_every_field() {
        let hostile = TutorEntry {
            username: "<script>alert(1)</script>".to_string(),
            firstname: Some("\"Bob\"".to_string()),
            lastname: Some("O'Neil & Co".to_string()),
            class: Some("<b>9c</b>".to_string()),
            subjects: vec!["<img src=x onerror=alert(1)>".to_string()],
        };

        let html = render_results(&[hostile], "Fächer");
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<img"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("&quot;Bob&quot; O&#39;Neil &amp; Co"));
        assert!(html.contains("&lt;b&gt;9c&lt;/b&gt;"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
    }

    #[test]
    fn test_render_many_entries_in_order() {
        let html = render_results(&[entry("a"), entry("b"), entry("c")], "Fächer");
        assert_eq!(html.matches(r#"class="search-result""#).count(), 3);
        let a = html.find(">a<").unwrap();
        let c = html.find(">c<").unwrap();
        assert!(a < c);
    }

    #[test]
    fn test_muted_message() {
        assert_eq!(muted("Keine Treffer."), r#"<p class="muted">Keine Treffer.</p>"#);
    }
}
