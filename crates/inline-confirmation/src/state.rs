//! Confirmation State
//!
//! The two-state machine behind the widget and the choices that leave the active state.

use std::fmt;
use std::str::FromStr;

/// Choice made from the prompt, doubles as the notification name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfirmEvent {
    /// "yes" control, emits `confirm`
    Confirm,
    /// "no" control, emits `cancel`
    Cancel,
}

impl ConfirmEvent {
    pub const ALL: [ConfirmEvent; 2] = [ConfirmEvent::Confirm, ConfirmEvent::Cancel];

    /// Notification name dispatched on the host
    pub fn name(self) -> &'static str {
        match self {
            ConfirmEvent::Confirm => "confirm",
            ConfirmEvent::Cancel => "cancel",
        }
    }
}

impl fmt::Display for ConfirmEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConfirmEvent {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "confirm" => Ok(ConfirmEvent::Confirm),
            "cancel" => Ok(ConfirmEvent::Cancel),
            _ => Err(()),
        }
    }
}

/// Per-instance state. Starts `Inactive`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfirmState {
    #[default]
    Inactive,
    Active,
}

impl ConfirmState {
    pub fn from_active(active: bool) -> Self {
        if active {
            ConfirmState::Active
        } else {
            ConfirmState::Inactive
        }
    }

    pub fn is_active(self) -> bool {
        self == ConfirmState::Active
    }
}

/// Boolean attribute reflection: present means active, whatever the value
pub fn active_from_attribute(value: Option<&str>) -> bool {
    value.is_some()
}
