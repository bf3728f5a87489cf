//! Paths of the backend endpoints, relative to the base URL.

pub const REGISTER: &str = "/users/register";
pub const LOGIN: &str = "/users/login";
pub const CURRENT_USER: &str = "/users/me";
pub const BOARDS: &str = "/boards";
pub const TICKETS: &str = "/tickets";

pub fn board(id: &str) -> String {
    format!("{}/{}", BOARDS, urlencoding::encode(id))
}

pub fn tickets_for_board(board_id: &str) -> String {
    format!("{}?board_id={}", TICKETS, urlencoding::encode(board_id))
}

pub fn ticket(id: &str) -> String {
    format!("{}/{}", TICKETS, urlencoding::encode(id))
}
