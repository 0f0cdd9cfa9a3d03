//! Inline Confirmation
//!
//! Inline yes/no confirmation widget. Shows its content until activated, then swaps
//! in a "confirm? yes / no" prompt, reports the choice and falls back to inactive.
//!
//! Two renderings share the same headless core:
//! - `element`: the `inline-confirmation` custom element (shadow DOM + named slots)
//! - `component`: the `InlineConfirmation` Leptos component (Leptos slots)

mod error;
mod state;
mod conditional;
mod view;
mod options;
mod template;
mod dom;
mod element;
mod component;

pub use error::{ConfirmError, ConfirmResult};
pub use state::{active_from_attribute, ConfirmEvent, ConfirmState};
pub use conditional::{Conditional, SwapParent};
pub use view::{InlineConfirmView, UpdateOptions};
pub use options::ConfirmOptions;
pub use template::{stylesheet, DATA_EVENT_ATTR, PROMPT_TEMPLATE};
pub use element::{define, define_with, ElementHandle, TAG_NAME};
pub use component::{Confirm, Content, InlineConfirmation, InlineConfirmationProps, No, Yes};
