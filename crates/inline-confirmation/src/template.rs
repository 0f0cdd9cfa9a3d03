//! Shadow Markup
//!
//! Stylesheet and prompt template injected into each element's shadow root.

use crate::options::ConfirmOptions;

/// Attribute naming the notification a control emits
pub const DATA_EVENT_ATTR: &str = "data-event";

/// Slot shown while inactive
pub const CONTENT_SLOT: &str = "content";

/// Prompt subtree. The `yes`/`no` spans carry the event tag so slotted
/// replacements trigger the same choice as the fallback buttons.
pub const PROMPT_TEMPLATE: &str = r#"<div class="confirm">
  <slot name="confirm"></slot>
  <span class="yes" data-event="confirm">
    <slot name="yes"><button type="button" class="link"></button></slot>
  </span>
  <span class="no" data-event="cancel">
    <slot name="no"><button type="button" class="link"></button></slot>
  </span>
</div>"#;

/// Per-instance stylesheet with the color fallbacks from `options`
pub fn stylesheet(options: &ConfirmOptions) -> String {
    format!(
        r#"
:host {{
  display: inline-block;
}}

.inline-confirm {{
  padding: 5px;
}}

.active {{
  background-color: var(--active-bg, {bg});
  color: var(--active-fg, {fg});
}}

.active button.link:hover {{
  color: #fff;
}}

button.link {{
  border: none;
  background-color: transparent;
  cursor: pointer;
  color: inherit;
  font-size: 100%;
  text-decoration: underline;
}}

button.link:hover {{
  color: var(--theme-accent);
}}

button.link:focus {{
  outline: none;
}}

::slotted([slot=confirm]) {{
  font-size: 18px;
}}
"#,
        bg = options.active_bg,
        fg = options.active_fg,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_uses_color_fallbacks() {
        let css = stylesheet(&ConfirmOptions::default());
        assert!(css.contains("var(--active-bg, #c21807)"));
        assert!(css.contains("var(--active-fg, #000)"));
        assert!(css.contains(":host {\n  display: inline-block;\n}"));

        let custom = ConfirmOptions {
            active_bg: "teal".into(),
            ..Default::default()
        };
        assert!(stylesheet(&custom).contains("var(--active-bg, teal)"));
    }

    #[test]
    fn test_template_tags_both_choices() {
        assert!(PROMPT_TEMPLATE.contains(r#"class="yes" data-event="confirm""#));
        assert!(PROMPT_TEMPLATE.contains(r#"class="no" data-event="cancel""#));
        for slot in ["confirm", "yes", "no"] {
            assert!(PROMPT_TEMPLATE.contains(&format!(r#"<slot name="{}">"#, slot)));
        }
    }
}
