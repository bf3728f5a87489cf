use crate::endpoints;
use crate::payload::Payload;
use crate::service::BackendService;
use async_trait::async_trait;
use boardify_core::{BoardifyError, BoardifyResult, LoginEncoding};
use boardify_domain::{
    Board, BoardCreate, BoardOverview, BoardUpdate, BoardifyOperations, Ticket, TicketCreate,
    TicketUpdate, Token, User, UserCredentials,
};
use boardify_persistence::AUTH_TOKEN_KEY;
use reqwest::Method;

impl BackendService {
    fn login_payload(&self, credentials: &UserCredentials) -> BoardifyResult<Payload> {
        match self.login_encoding() {
            LoginEncoding::Json => Payload::json(credentials),
            LoginEncoding::Form => Ok(Payload::form([
                ("username", credentials.username.as_str()),
                ("password", credentials.password.as_str()),
            ])),
        }
    }
}

#[async_trait]
impl BoardifyOperations for BackendService {
    async fn is_logged_in(&self) -> bool {
        self.stored_token().await.is_some()
    }

    async fn current_token(&self) -> Option<Token> {
        self.stored_token().await
    }

    async fn login(&self, credentials: &UserCredentials) -> BoardifyResult<()> {
        let payload = self.login_payload(credentials)?;
        let token: Token = self.fetch(Method::POST, endpoints::LOGIN, payload).await?;

        let serialized =
            serde_json::to_string(&token).map_err(|e| BoardifyError::Serialization(e.to_string()))?;
        self.store().set(AUTH_TOKEN_KEY, &serialized).await?;

        tracing::info!("Logged in as {}", credentials.username);
        Ok(())
    }

    async fn logout(&self) -> BoardifyResult<()> {
        self.store().remove(AUTH_TOKEN_KEY).await?;
        tracing::info!("Logged out");
        Ok(())
    }

    async fn register(&self, credentials: &UserCredentials) -> BoardifyResult<User> {
        self.fetch(
            Method::POST,
            endpoints::REGISTER,
            Payload::json(credentials)?,
        )
        .await
    }

    async fn current_user(&self) -> BoardifyResult<User> {
        self.get(endpoints::CURRENT_USER).await
    }

    async fn list_boards(&self) -> BoardifyResult<Vec<BoardOverview>> {
        self.get(endpoints::BOARDS).await
    }

    async fn get_board(&self, id: &str) -> BoardifyResult<Board> {
        self.get(&endpoints::board(id)).await
    }

    async fn create_board(&self, board: &BoardCreate) -> BoardifyResult<Board> {
        self.fetch(Method::POST, endpoints::BOARDS, Payload::json(board)?)
            .await
    }

    async fn update_board(&self, id: &str, board: &BoardUpdate) -> BoardifyResult<Board> {
        self.fetch(Method::PATCH, &endpoints::board(id), Payload::json(board)?)
            .await
    }

    async fn delete_board(&self, id: &str) -> BoardifyResult<()> {
        self.execute(Method::DELETE, &endpoints::board(id), Payload::Empty)
            .await?;
        Ok(())
    }

    async fn create_ticket(
        &self,
        board_id: &str,
        ticket: &TicketCreate,
    ) -> BoardifyResult<Ticket> {
        self.fetch(
            Method::POST,
            &endpoints::tickets_for_board(board_id),
            Payload::json(ticket)?,
        )
        .await
    }

    async fn update_ticket(
        &self,
        ticket_id: &str,
        ticket: &TicketUpdate,
    ) -> BoardifyResult<Ticket> {
        self.fetch(
            Method::PATCH,
            &endpoints::ticket(ticket_id),
            Payload::json(ticket)?,
        )
        .await
    }

    async fn delete_ticket(&self, ticket_id: &str) -> BoardifyResult<()> {
        self.execute(Method::DELETE, &endpoints::ticket(ticket_id), Payload::Empty)
            .await?;
        Ok(())
    }
}
