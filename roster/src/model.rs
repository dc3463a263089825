use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::RosterError;

/// One signed-up guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A single pizza night and the guests signed up for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friday {
    pub id: i64,
    pub date: NaiveDate,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default = "default_max_guests")]
    pub max_guests: u32,
    #[serde(default)]
    pub guests: Vec<Guest>,
}

fn default_max_guests() -> u32 {
    10
}

impl Friday {
    /// Heading line for the group row, e.g. "Fri Jun 07 · 3/10".
    pub fn heading(&self) -> String {
        format!(
            "{} · {}/{}",
            self.date.format("%a %b %d"),
            self.guests.len(),
            self.max_guests
        )
    }

    pub fn is_full(&self) -> bool {
        self.guests.len() as u32 >= self.max_guests
    }
}

/// The full guest roster: every upcoming pizza night.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    pub fridays: Vec<Friday>,
}

impl Roster {
    pub fn from_json(raw: &str) -> Result<Self, RosterError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}
