use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures at the browser boundary.
///
/// None of these are fatal: callers log them and fall back to defaults so the
/// page keeps rendering.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("sessionStorage is not available")]
    StorageUnavailable,

    #[error("sessionStorage operation failed: {0}")]
    Storage(String),

    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
}

impl SiteError {
    /// Wrap a rejected `Storage` call. The JS error is usually a
    /// `DOMException` (quota, security) with a readable string form.
    pub fn storage(err: JsValue) -> Self {
        SiteError::Storage(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
