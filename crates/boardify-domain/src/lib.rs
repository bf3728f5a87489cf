pub mod auth;
pub mod board;
pub mod field_update;
pub mod operations;
pub mod stage;
pub mod tag;
pub mod ticket;
pub mod timestamp;

pub use auth::{Token, User, UserCredentials};
pub use board::{Board, BoardCreate, BoardId, BoardOverview, BoardUpdate};
pub use field_update::FieldUpdate;
pub use operations::BoardifyOperations;
pub use stage::{Stage, StageNr};
pub use tag::{Tag, TagNr};
pub use ticket::{Ticket, TicketCreate, TicketId, TicketUpdate};
