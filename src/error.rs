//! Loader Errors

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("failed to read response body: {0}")]
    Body(String),
    #[error("malformed feed: {0}")]
    Decode(#[from] serde_json::Error),
}

impl LoadError {
    pub fn network(err: JsValue) -> Self {
        LoadError::Network(format!("{:?}", err))
    }

    pub fn body(err: JsValue) -> Self {
        LoadError::Body(format!("{:?}", err))
    }
}
