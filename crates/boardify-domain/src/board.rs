use serde::{Deserialize, Serialize};

use crate::{
    stage::{Stage, StageNr},
    tag::Tag,
    ticket::Ticket,
};

/// Server-assigned identifier. Opaque to the client.
pub type BoardId = String;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    #[serde(default)]
    pub tickets: Vec<Ticket>,
    pub stages: Vec<Stage>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Board {
    pub fn stage(&self, nr: StageNr) -> Option<&Stage> {
        self.stages.iter().find(|stage| stage.nr == nr)
    }

    pub fn tickets_in_stage(&self, nr: StageNr) -> impl Iterator<Item = &Ticket> {
        self.tickets.iter().filter(move |ticket| ticket.stage_nr == nr)
    }

    pub fn done_tickets_count(&self) -> usize {
        self.tickets.iter().filter(|ticket| ticket.is_done).count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardCreate {
    pub name: String,
    pub stages: Vec<Stage>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardUpdate {
    pub name: String,
}

/// Summary row returned by the board listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardOverview {
    pub id: BoardId,
    pub name: String,
    pub tickets_count: u64,
    pub done_tickets_count: u64,
}

impl BoardOverview {
    pub fn open_tickets_count(&self) -> u64 {
        self.tickets_count.saturating_sub(self.done_tickets_count)
    }
}
