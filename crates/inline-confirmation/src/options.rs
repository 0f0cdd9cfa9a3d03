//! Widget Options
//!
//! Labels and color defaults. Every field is optional when read from JS or JSON.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::error::ConfirmResult;

pub const DEFAULT_ACTIVE_BG: &str = "#c21807";
pub const DEFAULT_ACTIVE_FG: &str = "#000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfirmOptions {
    /// Text of the fallback "yes" control
    pub yes_label: String,
    /// Text of the fallback "no" control
    pub no_label: String,
    /// Fallback for `--active-bg`
    pub active_bg: String,
    /// Fallback for `--active-fg`
    pub active_fg: String,
}

impl Default for ConfirmOptions {
    fn default() -> Self {
        Self {
            yes_label: "Yes".to_string(),
            no_label: "No".to_string(),
            active_bg: DEFAULT_ACTIVE_BG.to_string(),
            active_fg: DEFAULT_ACTIVE_FG.to_string(),
        }
    }
}

impl ConfirmOptions {
    /// Read options handed over from JS. `undefined`/`null` give the defaults.
    pub fn from_js(value: JsValue) -> ConfirmResult<Self> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_wasm_bindgen::from_value(value)?)
    }

    /// Active-state colors as an inline style, for renderings without a shadow root
    pub fn active_style(&self) -> String {
        format!(
            "background-color: var(--active-bg, {}); color: var(--active-fg, {});",
            self.active_bg, self.active_fg
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ConfirmOptions::default();
        assert_eq!(options.yes_label, "Yes");
        assert_eq!(options.no_label, "No");
        assert_eq!(options.active_bg, "#c21807");
        assert_eq!(options.active_fg, "#000");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let options: ConfirmOptions =
            serde_json::from_str(r#"{ "yesLabel": "Delete", "activeBg": "navy" }"#).unwrap();
        assert_eq!(options.yes_label, "Delete");
        assert_eq!(options.no_label, "No");
        assert_eq!(options.active_bg, "navy");
        assert_eq!(options.active_fg, "#000");
    }

    #[test]
    fn test_active_style() {
        let options = ConfirmOptions {
            active_bg: "red".into(),
            active_fg: "white".into(),
            ..Default::default()
        };
        assert_eq!(
            options.active_style(),
            "background-color: var(--active-bg, red); color: var(--active-fg, white);"
        );
    }
}
