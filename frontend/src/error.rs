use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error, PartialEq)]
pub enum UiError {
    #[error("no browser window available")]
    NoWindow,
    #[error("element is not mounted")]
    NotMounted,
    #[error("browser call failed: {0}")]
    Js(String),
    #[error("unknown transition variant `{0}`")]
    UnknownVariant(String),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
