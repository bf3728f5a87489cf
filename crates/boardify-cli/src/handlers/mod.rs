pub mod board;
pub mod session;
pub mod ticket;
