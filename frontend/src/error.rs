use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, EnhanceError>;

/// Failures while wiring a page feature. None of these are shown to the
/// visitor; the entry point logs them and moves on to the next feature.
#[derive(Debug, thiserror::Error)]
pub enum EnhanceError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for EnhanceError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        Self::Js(message)
    }
}
