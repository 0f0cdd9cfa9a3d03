//! Delete Confirm Button Component
//!
//! Inline delete confirmation built on `InlineConfirmation` slots.

use inline_confirmation::{Confirm, Content, InlineConfirmation, No, Yes};
use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows a × button initially. When clicked, shows "Delete?" with ✓/✗ buttons.
///
/// # Arguments
/// * `button_class` - CSS class for the initial delete button
/// * `on_confirm` - Callback to execute when user confirms deletion
/// * `on_cancel` - Callback to execute when user backs out
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let active = RwSignal::new(false);

    view! {
        <InlineConfirmation active=active on_confirm=on_confirm on_cancel=on_cancel>
            <Content slot>
                <button
                    class=button_class.clone()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        active.set(true);
                    }
                >
                    "×"
                </button>
            </Content>
            <Confirm slot>
                <span class="delete-confirm-text">"Delete?"</span>
            </Confirm>
            <Yes slot>
                <button class="confirm-btn">"✓"</button>
            </Yes>
            <No slot>
                <button class="cancel-btn">"✗"</button>
            </No>
        </InlineConfirmation>
    }
}
