use thiserror::Error;

/// Errors raised by the client layer.
///
/// None of these are shown to the user verbatim; controllers translate them into
/// a configured message or a safe default state and log the detail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected response status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("invalid url: {0}")]
    Url(String),
    #[error("invalid push server key: {0}")]
    ServerKey(String),
    #[error("browser api failed: {0}")]
    Browser(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            ClientError::Status(status.as_u16())
        } else {
            ClientError::Transport(e.to_string())
        }
    }
}

impl From<url::ParseError> for ClientError {
    fn from(e: url::ParseError) -> Self {
        ClientError::Url(e.to_string())
    }
}

impl From<base64::DecodeError> for ClientError {
    fn from(e: base64::DecodeError) -> Self {
        ClientError::ServerKey(e.to_string())
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl From<wasm_bindgen::JsValue> for ClientError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        ClientError::Browser(format!("{value:?}"))
    }
}
