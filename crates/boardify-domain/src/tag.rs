use serde::{Deserialize, Serialize};

pub type TagNr = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Some backend revisions name this field `id`.
    #[serde(alias = "id")]
    pub nr: TagNr,
    pub name: String,
}

impl Tag {
    pub fn new(nr: TagNr, name: impl Into<String>) -> Self {
        Self {
            nr,
            name: name.into(),
        }
    }
}
