use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{field_update::FieldUpdate, stage::StageNr, tag::Tag, tag::TagNr};

pub type TicketId = String;

const DISPLAY_DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub stage_nr: StageNr,
    pub title: String,
    pub description: String,
    #[serde(with = "crate::timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(default, with = "crate::timestamp::option")]
    pub due_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub is_done: bool,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Ticket {
    pub fn created_date_formatted(&self) -> String {
        self.created_at.format(DISPLAY_DATE_FORMAT).to_string()
    }

    pub fn due_date_formatted(&self) -> Option<String> {
        self.due_at
            .map(|due| due.format(DISPLAY_DATE_FORMAT).to_string())
    }

    pub fn has_tag(&self, nr: TagNr) -> bool {
        self.tags.iter().any(|tag| tag.nr == nr)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketCreate {
    pub stage_nr: StageNr,
    pub title: String,
    pub description: String,
    #[serde(default, with = "crate::timestamp::option")]
    pub due_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub tags: Vec<TagNr>,
}

impl TicketCreate {
    pub fn new(stage_nr: StageNr, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            stage_nr,
            title: title.into(),
            description: description.into(),
            due_at: None,
            tags: Vec::new(),
        }
    }
}

/// Sparse patch for a ticket. Only fields that are set reach the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_nr: Option<StageNr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "FieldUpdate::is_no_change")]
    pub due_at: FieldUpdate<NaiveDateTime>,
    /// Replaces the full tag set when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagNr>>,
}

impl TicketUpdate {
    pub fn is_empty(&self) -> bool {
        self.stage_nr.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.due_at.is_no_change()
            && self.tags.is_none()
    }
}
