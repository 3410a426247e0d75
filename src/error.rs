use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum EffectsError {
    #[error("no global window object")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("browser call failed: {0}")]
    Js(String),
    #[error("invalid page configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for EffectsError {
    fn from(value: JsValue) -> Self {
        match value.as_string() {
            Some(message) => EffectsError::Js(message),
            None => EffectsError::Js(format!("{:?}", value)),
        }
    }
}
