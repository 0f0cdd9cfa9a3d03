//! Inline Confirmation Demo App
//!
//! A deletable list using `DeleteConfirmButton`, plus a free-standing confirmation
//! with the default Yes/No controls.

use inline_confirmation::{Confirm, ConfirmOptions, Content, InlineConfirmation};
use leptos::prelude::*;

use crate::components::{DeleteConfirmButton, EventLog};
use crate::config::DemoConfig;
use crate::models::{Entry, LogLine};

#[component]
pub fn App(config: DemoConfig) -> impl IntoView {
    // State
    let (entries, set_entries) = signal(config.entries);
    let (log_lines, set_log_lines) = signal(Vec::<LogLine>::new());
    let (next_seq, set_next_seq) = signal(0u32);
    let reset_active = RwSignal::new(false);

    let push_log = move |text: String| {
        log::info!("[APP] {}", text);
        let seq = next_seq.get_untracked();
        set_next_seq.set(seq + 1);
        set_log_lines.update(|lines| lines.push(LogLine { seq, text }));
    };

    let reset_options = ConfirmOptions {
        yes_label: "Reset".to_string(),
        no_label: "Keep".to_string(),
        ..Default::default()
    };

    view! {
        <main class="demo">
            <h1>"Inline Confirmation"</h1>

            <ul class="entry-list">
                <For
                    each=move || entries.get()
                    key=|entry: &Entry| entry.id
                    children=move |entry: Entry| {
                        let id = entry.id;
                        let name = entry.name.clone();
                        let cancel_name = entry.name.clone();
                        view! {
                            <li class="entry">
                                <span class="entry-name">{entry.name}</span>
                                <DeleteConfirmButton
                                    button_class="delete-btn"
                                    on_confirm=move |_: ()| {
                                        set_entries.update(|list| list.retain(|e| e.id != id));
                                        push_log(format!("confirm: deleted {}", name));
                                    }
                                    on_cancel=move |_: ()| {
                                        push_log(format!("cancel: kept {}", cancel_name));
                                    }
                                />
                            </li>
                        }
                    }
                />
            </ul>

            <p class="reset-row">
                <InlineConfirmation
                    active=reset_active
                    options=reset_options
                    on_confirm=move |_: ()| {
                        set_log_lines.set(Vec::new());
                        push_log("confirm: log cleared".to_string());
                    }
                    on_cancel=move |_: ()| push_log("cancel: log kept".to_string())
                >
                    <Content slot>
                        <button class="link" on:click=move |_| reset_active.set(true)>
                            "Clear event log"
                        </button>
                    </Content>
                    <Confirm slot>
                        <span>"Clear all events? "</span>
                    </Confirm>
                </InlineConfirmation>
            </p>

            <p class="entry-count">{move || format!("{} entries", entries.get().len())}</p>

            <EventLog lines=log_lines />
        </main>
    }
}
