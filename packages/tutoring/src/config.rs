//! # Client configuration: `tutoring.toml`
//!
//! Everything the page scripts need to know about their surroundings: backend
//! endpoint paths, the pages they navigate to, the push worker and server key,
//! and the user-facing message strings.
//!
//! ```toml
//! [endpoints]
//! profile = "/profile"
//! search_tutors = "/search-tutors"
//!
//! [pages]
//! login = "/app/login.html"
//!
//! [push]
//! worker_script = "/app/js/sw/sw.js"
//!
//! [log]
//! level = "debug"
//! ```
//!
//! Every section and field has a production default, so a missing or empty file
//! is equivalent to [`ClientConfig::default`].

use serde::{Deserialize, Serialize};

/// Public half of the VAPID key pair used by the push backend.
pub const VAPID_PUBLIC_KEY: &str =
    "BFKZeYhAiE6zy3S3rWWSLbRqYn026iSBN-HPcnPiDh2rNWb1DE0Kugfy_Da5qS__c-7UHFcCfwlqxjAeAbMh2a4";

/// Top-level configuration stored in `tutoring.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub endpoints: EndpointsConfig,
    #[serde(default)]
    pub pages: PagesConfig,
    #[serde(default)]
    pub push: PushConfig,
    #[serde(default)]
    pub messages: MessagesConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Backend endpoint paths, relative to the page origin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointsConfig {
    pub profile: String,
    pub push_status: String,
    pub push_subscribe: String,
    pub search_tutors: String,
    pub get_subjects: String,
    pub edit_tutor_profile: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            profile: "/profile".to_string(),
            push_status: "/api/push/status".to_string(),
            push_subscribe: "/api/push/subscribe".to_string(),
            search_tutors: "/search-tutors".to_string(),
            get_subjects: "/get-subjects".to_string(),
            edit_tutor_profile: "/edit-tutor-profile".to_string(),
        }
    }
}

/// Pages the client navigates to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagesConfig {
    pub login: String,
    pub tutoring: String,
    pub pw: String,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            login: "/app/login.html".to_string(),
            tutoring: "/app/tutoring.html".to_string(),
            pw: "/app/pw.html".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PushConfig {
    /// Script registered as the background delivery worker.
    pub worker_script: String,
    /// URL-safe base64 VAPID public key. Must match the backend's private key.
    pub server_key: String,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            worker_script: "/app/js/sw/sw.js".to_string(),
            server_key: VAPID_PUBLIC_KEY.to_string(),
        }
    }
}

/// User-facing strings. Developer detail goes to the log, never here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagesConfig {
    pub select_subject: String,
    pub searching: String,
    pub no_results: String,
    pub search_failed: String,
    pub subjects_label: String,
    pub push_unsupported: String,
    pub push_permission_denied: String,
    pub push_activated: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            select_subject: "Bitte mindestens ein Fach wählen.".to_string(),
            searching: "Suche läuft…".to_string(),
            no_results: "Keine Treffer.".to_string(),
            search_failed: "Fehler bei der Suche.".to_string(),
            subjects_label: "Fächer".to_string(),
            push_unsupported: "Push nicht unterstützt".to_string(),
            push_permission_denied: "Permission verweigert".to_string(),
            push_activated: "Push aktiviert!".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Maximum level written to the browser console: "error" through "trace".
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LogConfig {
    /// Parsed level, `INFO` if the configured name is not a level.
    pub fn max_level(&self) -> tracing::Level {
        self.level.parse().unwrap_or(tracing::Level::INFO)
    }
}

impl ClientConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "tutoring.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
