use serde::{Deserialize, Serialize};

/// Ordinal of a stage within its board. Tickets refer to stages by this
/// number, not by position in the board's stage list.
pub type StageNr = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub nr: StageNr,
    pub name: String,
}

impl Stage {
    pub fn new(nr: StageNr, name: impl Into<String>) -> Self {
        Self {
            nr,
            name: name.into(),
        }
    }
}
