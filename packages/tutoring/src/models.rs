//! # Wire models for the tutoring backend
//!
//! Every type here is read-only on the client: it is deserialised from a backend
//! response, used for one render pass and dropped. Optional fields are tolerated
//! as missing so older backend payloads keep working.
//!
//! | Struct | Endpoint | Notes |
//! |--------|----------|-------|
//! | [`Profile`] | `/profile` | Session data of the caller. `tutoring` defaults to `false`. |
//! | [`TutorEntry`] | `/search-tutors` | One match; see [`TutorEntry::display_name`]. |
//! | [`SearchResponse`] | `/search-tutors` | Wrapper around the result list. |
//! | [`PushStatus`] | `/api/push/status` | Whether this device already holds a subscription. |
//! | [`UserSubjects`] | `/get-subjects` | Subjects the caller currently teaches. |

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Session profile of the current user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    /// Role name from the session ("student", "teacher", ...).
    #[serde(default)]
    pub role: Option<String>,
    /// Whether the user has an active tutor listing. The backend stores this as
    /// an integer column, so `1`/`0` and `null` are accepted too.
    #[serde(default, deserialize_with = "loose_bool")]
    pub tutoring: bool,
}

/// `true`, any non-zero number, or the strings `"true"`/`"1"`. Everything else,
/// `null` included, is `false`.
fn loose_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => matches!(s.trim(), "true" | "1"),
        _ => false,
    })
}

impl Profile {
    /// Tutor status of an optional profile; no profile means not tutoring.
    pub fn is_tutoring(profile: Option<&Profile>) -> bool {
        profile.is_some_and(|p| p.tutoring)
    }
}

/// A single tutor returned by the search endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TutorEntry {
    pub username: String,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub subjects: Vec<String>,
}

impl TutorEntry {
    /// First and last name joined and trimmed, or the username if both are blank.
    pub fn display_name(&self) -> String {
        let first = self.firstname.as_deref().unwrap_or_default();
        let last = self.lastname.as_deref().unwrap_or_default();
        let name = format!("{first} {last}");
        let name = name.trim();
        if name.is_empty() {
            self.username.clone()
        } else {
            name.to_string()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<TutorEntry>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PushStatus {
    #[serde(default)]
    pub has_push: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSubjects {
    #[serde(default)]
    pub user_subjects: Vec<String>,
}
