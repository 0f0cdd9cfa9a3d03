//! UI Components
//!
//! Demo components built on the inline confirmation widget.

mod delete_confirm_button;
mod event_log;

pub use delete_confirm_button::DeleteConfirmButton;
pub use event_log::EventLog;
