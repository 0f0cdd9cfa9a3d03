//! Demo Models

use serde::{Deserialize, Serialize};

/// Row shown in the demo list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: u32,
    pub name: String,
}

/// One line in the event log
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub seq: u32,
    pub text: String,
}
