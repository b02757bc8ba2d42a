//! Error type shared by configuration loading and the browser binding.

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("invalid config json: {0}")]
    Config(#[from] serde_json::Error),
    #[error("config field must not be empty: {field}")]
    InvalidConfig { field: &'static str },
    #[error("unknown log level: {0}")]
    InvalidLogLevel(String),
    #[error("dom operation failed: {op}: {detail}")]
    Dom { op: &'static str, detail: String },
}

impl UiError {
    /// Wrap a JS exception raised by a web-sys call.
    #[must_use]
    pub fn dom(op: &'static str, err: &JsValue) -> Self {
        let detail = err.as_string().unwrap_or_else(|| format!("{err:?}"));
        Self::Dom { op, detail }
    }
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
