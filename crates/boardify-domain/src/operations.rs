use async_trait::async_trait;
use boardify_core::BoardifyResult;

use crate::{
    Board, BoardCreate, BoardOverview, BoardUpdate, Ticket, TicketCreate, TicketUpdate, Token,
    User, UserCredentials,
};

/// Everything a consumer can ask of the backend.
/// The CLI programs against this trait rather than a concrete client.
#[async_trait]
pub trait BoardifyOperations: Send + Sync {
    // Session
    async fn is_logged_in(&self) -> bool;
    async fn current_token(&self) -> Option<Token>;
    async fn login(&self, credentials: &UserCredentials) -> BoardifyResult<()>;
    async fn logout(&self) -> BoardifyResult<()>;
    async fn register(&self, credentials: &UserCredentials) -> BoardifyResult<User>;
    async fn current_user(&self) -> BoardifyResult<User>;

    // Board operations
    async fn list_boards(&self) -> BoardifyResult<Vec<BoardOverview>>;
    async fn get_board(&self, id: &str) -> BoardifyResult<Board>;
    async fn create_board(&self, board: &BoardCreate) -> BoardifyResult<Board>;
    async fn update_board(&self, id: &str, board: &BoardUpdate) -> BoardifyResult<Board>;
    async fn delete_board(&self, id: &str) -> BoardifyResult<()>;

    // Ticket operations
    async fn create_ticket(&self, board_id: &str, ticket: &TicketCreate)
        -> BoardifyResult<Ticket>;
    async fn update_ticket(&self, ticket_id: &str, ticket: &TicketUpdate)
        -> BoardifyResult<Ticket>;
    async fn delete_ticket(&self, ticket_id: &str) -> BoardifyResult<()>;
}
