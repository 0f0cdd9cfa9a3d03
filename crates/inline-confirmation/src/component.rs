//! Inline Confirmation Component
//!
//! Leptos rendering of the widget. Named slots replace the custom element's `<slot>`s.

use leptos::prelude::*;

use crate::options::ConfirmOptions;
use crate::state::ConfirmEvent;

/// Shown while inactive
#[slot]
pub struct Content {
    pub children: ChildrenFn,
}

/// Prompt label in front of the yes/no controls
#[slot]
pub struct Confirm {
    pub children: ChildrenFn,
}

/// Replaces the default "Yes" button
#[slot]
pub struct Yes {
    pub children: ChildrenFn,
}

/// Replaces the default "No" button
#[slot]
pub struct No {
    pub children: ChildrenFn,
}

/// Inline yes/no confirmation
///
/// Shows `Content` until `active` becomes true, then the prompt. Clicking yes runs
/// `on_confirm`, clicking no runs `on_cancel`; either way `active` goes back to false
/// after the callback.
#[component]
pub fn InlineConfirmation(
    active: RwSignal<bool>,
    #[prop(optional, into)] on_confirm: Option<Callback<()>>,
    #[prop(optional, into)] on_cancel: Option<Callback<()>>,
    #[prop(optional)] options: ConfirmOptions,
    #[prop(optional)] content: Option<Content>,
    #[prop(optional)] confirm: Option<Confirm>,
    #[prop(optional)] yes: Option<Yes>,
    #[prop(optional)] no: Option<No>,
) -> impl IntoView {
    let on_choice = move |event: ConfirmEvent| {
        let callback = match event {
            ConfirmEvent::Confirm => on_confirm,
            ConfirmEvent::Cancel => on_cancel,
        };
        choose(active, callback, event);
    };

    let active_style = options.active_style();
    let root_style = move || {
        if active.get() {
            format!("display: inline-block; padding: 5px; {}", active_style)
        } else {
            "display: inline-block; padding: 5px;".to_string()
        }
    };

    let yes_label = options.yes_label;
    let no_label = options.no_label;
    let content_view = move || content.as_ref().map(|c| (c.children)());

    view! {
        <span class="inline-confirm" class:active=move || active.get() style=root_style>
            <Show when=move || active.get() fallback=content_view>
                <span class="confirm">
                    {confirm.as_ref().map(|c| (c.children)())}
                    <span class="yes" on:click=move |_| on_choice(ConfirmEvent::Confirm)>
                        {match yes.as_ref() {
                            Some(slot) => (slot.children)(),
                            None => view! { <button type="button" class="link">{yes_label.clone()}</button> }.into_any(),
                        }}
                    </span>
                    <span class="no" on:click=move |_| on_choice(ConfirmEvent::Cancel)>
                        {match no.as_ref() {
                            Some(slot) => (slot.children)(),
                            None => view! { <button type="button" class="link">{no_label.clone()}</button> }.into_any(),
                        }}
                    </span>
                </span>
            </Show>
        </span>
    }
}

/// Run the choice's callback, then drop back to inactive.
///
/// Returns whether this call reset `active`; false when the callback already did.
pub(crate) fn choose(
    active: RwSignal<bool>,
    callback: Option<Callback<()>>,
    event: ConfirmEvent,
) -> bool {
    log::debug!("[InlineConfirmation] choice: {}", event);
    if let Some(callback) = callback {
        callback.run(());
    }

    if !active.get_untracked() {
        return false;
    }
    active.set(false);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_runs_while_still_active() {
        Owner::new().with(|| {
            let active = RwSignal::new(true);
            let seen = RwSignal::new(None::<bool>);
            let callback = Callback::new(move |_: ()| seen.set(Some(active.get_untracked())));

            assert!(choose(active, Some(callback), ConfirmEvent::Confirm));
            assert_eq!(seen.get_untracked(), Some(true));
            assert!(!active.get_untracked());
        });
    }

    #[test]
    fn test_both_choices_reset() {
        Owner::new().with(|| {
            for event in ConfirmEvent::ALL {
                let active = RwSignal::new(true);
                let calls = RwSignal::new(0u32);
                let callback = Callback::new(move |_: ()| calls.update(|n| *n += 1));

                assert!(choose(active, Some(callback), event));
                assert_eq!(calls.get_untracked(), 1);
                assert!(!active.get_untracked());
            }
        });
    }

    #[test]
    fn test_missing_callback_still_resets() {
        Owner::new().with(|| {
            let active = RwSignal::new(true);
            assert!(choose(active, None, ConfirmEvent::Cancel));
            assert!(!active.get_untracked());
        });
    }

    #[test]
    fn test_callback_reset_is_not_repeated() {
        Owner::new().with(|| {
            let active = RwSignal::new(true);
            let callback = Callback::new(move |_: ()| active.set(false));

            assert!(!choose(active, Some(callback), ConfirmEvent::Confirm));
            assert!(!active.get_untracked());
        });
    }
}
