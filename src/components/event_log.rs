//! Event Log Component

use leptos::prelude::*;

use crate::models::LogLine;

/// Most recent notifications, newest first
#[component]
pub fn EventLog(lines: ReadSignal<Vec<LogLine>>) -> impl IntoView {
    view! {
        <section class="event-log">
            <h2>"Events"</h2>
            <Show
                when=move || !lines.get().is_empty()
                fallback=|| view! { <p class="event-log-empty">"Nothing yet"</p> }
            >
                <ul>
                    <For
                        each=move || lines.get().into_iter().rev()
                        key=|line| line.seq
                        children=move |line| view! { <li>{line.text}</li> }
                    />
                </ul>
            </Show>
        </section>
    }
}
