//! Widget Errors

use thiserror::Error;
use wasm_bindgen::JsValue;

pub type ConfirmResult<T> = Result<T, ConfirmError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfirmError {
    /// A DOM call failed while building or registering the element
    #[error("dom error: {0}")]
    Dom(String),
    /// Options passed from JS could not be deserialized
    #[error("invalid options: {0}")]
    Options(String),
}

impl From<JsValue> for ConfirmError {
    fn from(value: JsValue) -> Self {
        ConfirmError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<serde_wasm_bindgen::Error> for ConfirmError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        ConfirmError::Options(err.to_string())
    }
}

impl From<ConfirmError> for JsValue {
    fn from(err: ConfirmError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ConfirmError::Dom("boom".into()).to_string(), "dom error: boom");
        assert_eq!(
            ConfirmError::Options("missing field".into()).to_string(),
            "invalid options: missing field"
        );
    }
}
