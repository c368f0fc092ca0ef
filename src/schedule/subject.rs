//! Subject line decomposition

use regex::Regex;
use std::sync::LazyLock;

static ORGANIZER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([^\]]*)\]\s*(.*)$").expect("organizer regex"));

/// Organizer and meeting name split out of a subject line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub organizer: String,
    pub meeting: String,
}

impl Subject {
    /// Split a subject line.
    ///
    /// `[Team] Title` gives organizer `[Team]`, `x Title` gives a bare
    /// title, anything else is taken whole as the meeting name.
    pub fn parse(line: &str) -> Self {
        if let Some(caps) = ORGANIZER_RE.captures(line) {
            return Self {
                organizer: format!("[{}]", &caps[1]),
                meeting: caps[2].trim().to_string(),
            };
        }

        if let Some(rest) = line.strip_prefix("x ") {
            return Self {
                organizer: String::new(),
                meeting: rest.to_string(),
            };
        }

        Self {
            organizer: String::new(),
            meeting: line.to_string(),
        }
    }
}
