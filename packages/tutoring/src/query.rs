use url::form_urlencoded;

/// Query string with one `subject` pair per selected value, in selection order.
///
/// Encoded as `application/x-www-form-urlencoded`, matching what a browser
/// `URLSearchParams` would produce for the same form.
pub fn subject_query(subjects: &[String]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for subject in subjects {
        serializer.append_pair("subject", subject);
    }
    serializer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_each_subject_once_in_order() {
        let query = subject_query(&strings(&["math", "physics"]));
        assert_eq!(query, "subject=math&subject=physics");
        assert_eq!(query.matches("subject=math").count(), 1);
        assert_eq!(query.matches("subject=physics").count(), 1);
    }

    #[test]
    fn test_empty_selection() {
        assert_eq!(subject_query(&[]), "");
    }

    #[test]
    fn test_values_are_form_encoded() {
        let query = subject_query(&strings(&["Deutsch & Kunst", "Erdkunde/Geo"]));
        assert_eq!(query, "subject=Deutsch+%26+Kunst&subject=Erdkunde%2FGeo");
    }

    #[test]
    fn test_duplicates_are_kept() {
        let query = subject_query(&strings(&["math", "math"]));
        assert_eq!(query, "subject=math&subject=math");
    }
}
