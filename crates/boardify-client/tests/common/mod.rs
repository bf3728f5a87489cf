//! In-process stand-in for the Boardify backend.
//!
//! Mirrors the real server's routes and rules closely enough for the client:
//! bearer auth on board/ticket routes, server-assigned ids and timestamps,
//! `is_done` derived from the board's last stage. Every request's
//! `Authorization` header is recorded for assertions.

#![allow(dead_code)]

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Json, Router,
};
use boardify_domain::{
    Board, BoardCreate, BoardOverview, BoardUpdate, Stage, Tag, Ticket, TicketCreate,
    TicketUpdate, Token, User, UserCredentials,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub route: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
}

#[derive(Default)]
struct FakeState {
    users: HashMap<String, (String, User)>,
    sessions: HashMap<String, String>,
    boards: Vec<Board>,
    ticket_boards: HashMap<String, String>,
    requests: Vec<RecordedRequest>,
}

type Shared = Arc<Mutex<FakeState>>;

pub struct FakeBackend {
    pub base_url: String,
    state: Shared,
}

impl FakeBackend {
    pub async fn spawn() -> Self {
        let state = Shared::default();
        let app = router(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    /// Registers a user directly, bypassing HTTP.
    pub fn add_user(&self, username: &str, password: &str) {
        let mut state = self.state.lock().unwrap();
        let user = User {
            username: username.to_string(),
            id: uuid::Uuid::new_v4().to_string(),
        };
        state
            .users
            .insert(username.to_string(), (password.to_string(), user));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().last().cloned().expect("no requests recorded")
    }

    pub fn clear_requests(&self) {
        self.state.lock().unwrap().requests.clear();
    }
}

fn router(state: Shared) -> Router {
    Router::new()
        .route("/users/register", post(register))
        .route("/users/login", post(login))
        .route("/users/me", get(me))
        .route("/boards", get(list_boards).post(create_board))
        .route(
            "/boards/{id}",
            get(get_board).patch(update_board).delete(delete_board),
        )
        .route("/tickets", post(create_ticket))
        .route("/tickets/{id}", patch(update_ticket).delete(delete_ticket))
        .with_state(state)
}

fn header_value(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Records the request and resolves the caller from its bearer token.
fn authorize(state: &mut FakeState, route: &str, headers: &HeaderMap) -> Option<String> {
    let authorization = header_value(headers, header::AUTHORIZATION);
    state.requests.push(RecordedRequest {
        route: route.to_string(),
        authorization: authorization.clone(),
        content_type: header_value(headers, header::CONTENT_TYPE),
    });

    let token = authorization?.strip_prefix("Bearer ")?.to_string();
    state.sessions.get(&token).cloned()
}

fn require_user(state: &mut FakeState, route: &str, headers: &HeaderMap) -> Result<String, StatusCode> {
    authorize(state, route, headers).ok_or(StatusCode::UNAUTHORIZED)
}

async fn register(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(creds): Json<UserCredentials>,
) -> Result<Json<User>, StatusCode> {
    let mut state = state.lock().unwrap();
    authorize(&mut state, "POST /users/register", &headers);
    if state.users.contains_key(&creds.username) {
        return Err(StatusCode::CONFLICT);
    }
    let user = User {
        username: creds.username.clone(),
        id: uuid::Uuid::new_v4().to_string(),
    };
    state
        .users
        .insert(creds.username, (creds.password, user.clone()));
    Ok(Json(user))
}

#[derive(Deserialize)]
struct LoginForm {
    username: String,
    password: String,
}

async fn login(
    State(state): State<Shared>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Token>, StatusCode> {
    let mut state = state.lock().unwrap();
    authorize(&mut state, "POST /users/login", &headers);

    let is_form = header_value(&headers, header::CONTENT_TYPE)
        .map(|ct| ct.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false);
    let creds: LoginForm = if is_form {
        let pairs: HashMap<String, String> = url_decode_pairs(&body);
        LoginForm {
            username: pairs.get("username").cloned().unwrap_or_default(),
            password: pairs.get("password").cloned().unwrap_or_default(),
        }
    } else {
        serde_json::from_slice(&body).map_err(|_| StatusCode::UNPROCESSABLE_ENTITY)?
    };

    match state.users.get(&creds.username) {
        Some((password, _)) if *password == creds.password => {
            let access_token = uuid::Uuid::new_v4().simple().to_string();
            state
                .sessions
                .insert(access_token.clone(), creds.username.clone());
            Ok(Json(Token::new(access_token, "Bearer")))
        }
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}

fn url_decode_pairs(body: &[u8]) -> HashMap<String, String> {
    let text = String::from_utf8_lossy(body);
    text.split('&')
        .filter_map(|pair| pair.split_once('='))
        .map(|(k, v)| (decode(k), decode(v)))
        .collect()
}

fn decode(raw: &str) -> String {
    urlencoding::decode(&raw.replace('+', " "))
        .map(|s| s.into_owned())
        .unwrap_or_default()
}

async fn me(State(state): State<Shared>, headers: HeaderMap) -> Result<Json<User>, StatusCode> {
    let mut state = state.lock().unwrap();
    let username = require_user(&mut state, "GET /users/me", &headers)?;
    state
        .users
        .get(&username)
        .map(|(_, user)| Json(user.clone()))
        .ok_or(StatusCode::UNAUTHORIZED)
}

async fn list_boards(
    State(state): State<Shared>,
    headers: HeaderMap,
) -> Result<Json<Vec<BoardOverview>>, StatusCode> {
    let mut state = state.lock().unwrap();
    require_user(&mut state, "GET /boards", &headers)?;
    let overviews = state
        .boards
        .iter()
        .map(|board| BoardOverview {
            id: board.id.clone(),
            name: board.name.clone(),
            tickets_count: board.tickets.len() as u64,
            done_tickets_count: board.done_tickets_count() as u64,
        })
        .collect();
    Ok(Json(overviews))
}

async fn create_board(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(create): Json<BoardCreate>,
) -> Result<Json<Board>, StatusCode> {
    let mut state = state.lock().unwrap();
    require_user(&mut state, "POST /boards", &headers)?;
    let board = Board {
        id: uuid::Uuid::new_v4().to_string(),
        name: create.name,
        tickets: Vec::new(),
        stages: create.stages,
        tags: create.tags,
    };
    state.boards.push(board.clone());
    Ok(Json(board))
}

/// Board returned alongside the 404 for the id `gone`.
fn gone_board() -> Board {
    Board {
        id: "gone".to_string(),
        name: "Archived".to_string(),
        tickets: Vec::new(),
        stages: vec![Stage::new(1, "Todo")],
        tags: Vec::new(),
    }
}

/// `malformed` answers 200 with a body that is not a board; `gone` answers 404
/// with a body that is one.
async fn get_board(
    State(state): State<Shared>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let mut state = state.lock().unwrap();
    if let Err(status) = require_user(&mut state, "GET /boards/{id}", &headers) {
        return status.into_response();
    }
    match id.as_str() {
        "malformed" => Json(serde_json::json!({"unexpected": true})).into_response(),
        "gone" => (StatusCode::NOT_FOUND, Json(gone_board())).into_response(),
        _ => match state.boards.iter().find(|b| b.id == id) {
            Some(board) => Json(board.clone()).into_response(),
            None => StatusCode::NOT_FOUND.into_response(),
        },
    }
}

async fn update_board(
    State(state): State<Shared>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(update): Json<BoardUpdate>,
) -> Result<Json<Board>, StatusCode> {
    let mut state = state.lock().unwrap();
    require_user(&mut state, "PATCH /boards/{id}", &headers)?;
    let board = state
        .boards
        .iter_mut()
        .find(|b| b.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    board.name = update.name;
    Ok(Json(board.clone()))
}

async fn delete_board(
    State(state): State<Shared>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let mut state = state.lock().unwrap();
    require_user(&mut state, "DELETE /boards/{id}", &headers)?;
    let before = state.boards.len();
    state.boards.retain(|b| b.id != id);
    if state.boards.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    state.ticket_boards.retain(|_, board_id| *board_id != id);
    Ok(Json(serde_json::json!({})))
}

#[derive(Deserialize)]
struct TicketQuery {
    board_id: String,
}

fn resolve_tags(board: &Board, nrs: &[i64]) -> Vec<Tag> {
    board
        .tags
        .iter()
        .filter(|tag| nrs.contains(&tag.nr))
        .cloned()
        .collect()
}

fn is_last_stage(board: &Board, stage_nr: i64) -> bool {
    board.stages.iter().map(|s| s.nr).max() == Some(stage_nr)
}

async fn create_ticket(
    State(state): State<Shared>,
    Query(query): Query<TicketQuery>,
    headers: HeaderMap,
    Json(create): Json<TicketCreate>,
) -> Result<Json<Ticket>, StatusCode> {
    let mut state = state.lock().unwrap();
    require_user(&mut state, "POST /tickets", &headers)?;
    let board = state
        .boards
        .iter_mut()
        .find(|b| b.id == query.board_id)
        .ok_or(StatusCode::NOT_FOUND)?;

    let ticket = Ticket {
        id: uuid::Uuid::new_v4().to_string(),
        stage_nr: create.stage_nr,
        title: create.title,
        description: create.description,
        created_at: chrono::Local::now().naive_local(),
        due_at: create.due_at,
        is_done: is_last_stage(board, create.stage_nr),
        tags: resolve_tags(board, &create.tags),
    };
    board.tickets.push(ticket.clone());
    let board_id = board.id.clone();
    state.ticket_boards.insert(ticket.id.clone(), board_id);
    Ok(Json(ticket))
}

async fn update_ticket(
    State(state): State<Shared>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(update): Json<TicketUpdate>,
) -> Result<Json<Ticket>, StatusCode> {
    let mut state = state.lock().unwrap();
    require_user(&mut state, "PATCH /tickets/{id}", &headers)?;
    let board_id = state
        .ticket_boards
        .get(&id)
        .cloned()
        .ok_or(StatusCode::NOT_FOUND)?;
    let board = state
        .boards
        .iter_mut()
        .find(|b| b.id == board_id)
        .ok_or(StatusCode::NOT_FOUND)?;

    let done = update.stage_nr.map(|nr| is_last_stage(board, nr));
    let tags = update.tags.as_ref().map(|nrs| resolve_tags(board, nrs));
    let ticket = board
        .tickets
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;

    if let Some(stage_nr) = update.stage_nr {
        ticket.stage_nr = stage_nr;
    }
    if let Some(done) = done {
        ticket.is_done = done;
    }
    if let Some(title) = update.title {
        ticket.title = title;
    }
    if let Some(description) = update.description {
        ticket.description = description;
    }
    update.due_at.apply_to(&mut ticket.due_at);
    if let Some(tags) = tags {
        ticket.tags = tags;
    }
    Ok(Json(ticket.clone()))
}

async fn delete_ticket(
    State(state): State<Shared>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let mut state = state.lock().unwrap();
    require_user(&mut state, "DELETE /tickets/{id}", &headers)?;
    let board_id = state
        .ticket_boards
        .remove(&id)
        .ok_or(StatusCode::NOT_FOUND)?;
    if let Some(board) = state.boards.iter_mut().find(|b| b.id == board_id) {
        board.tickets.retain(|t| t.id != id);
    }
    Ok(Json(serde_json::json!({})))
}
