use std::fmt::Debug;

use log::warn;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("local storage is not available")]
    StorageUnavailable,
    #[error("required element `{0}` is missing")]
    MissingElement(String),
    #[error("javascript error: {0}")]
    Js(String),
    #[error("invalid site configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("message could not be sent: {0}")]
    Send(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        SiteError::Js(message)
    }
}

pub fn window() -> Result<web_sys::Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<web_sys::Document, SiteError> {
    window()?.document().ok_or(SiteError::NoDocument)
}

/// Logs a failed browser call that has no caller to report to. Returns
/// whether the call succeeded.
pub fn warn_on_failure<E: Debug>(what: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to {}: {:?}", what, e);
            false
        }
    }
}
