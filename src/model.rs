// File: src/model.rs
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::{EvlistError, EvlistResult};

/// Wire format for dates, ISO `yyyy-mm-dd`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Opaque backend-assigned identifier. Compared by equality only; the client
/// never generates one. A record is "new" until the create response names it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EventId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// json-server style backends assign integer ids; normalize both forms to the
// string rendition so equality and URL building stay uniform.
impl<'de> Deserialize<'de> for EventId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Str(String),
            Num(i64),
        }
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Str(s) => EventId(s),
            Raw::Num(n) => EventId(n.to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub event_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// An event without an id: the POST body for creation and the validated form
/// of the inline edit row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub event_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl EventDraft {
    /// Builds a draft from the three raw input strings.
    ///
    /// Every save path funnels through here: empty fields, malformed dates
    /// and start > end are rejected before any network call is issued.
    pub fn parse(name: &str, start: &str, end: &str) -> EvlistResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EvlistError::EmptyField("event name"));
        }
        let start_date = parse_date(start, "start date")?;
        let end_date = parse_date(end, "end date")?;
        if start_date > end_date {
            return Err(EvlistError::DateOrder {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            event_name: name.to_string(),
            start_date,
            end_date,
        })
    }

    /// Attaches an id, producing the full record a PUT carries.
    pub fn into_event(self, id: EventId) -> Event {
        Event {
            id,
            event_name: self.event_name,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

fn parse_date(raw: &str, field: &'static str) -> EvlistResult<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(EvlistError::EmptyField(field));
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| EvlistError::InvalidDate(raw.to_string()))
}
