//! Wish HTTP Routes
//!
//! The four collection endpoints. Each handler decodes its input, runs one
//! collection call under the state lock and answers with the full list.
//!
//! | Method | Path    | Body                 |
//! |--------|---------|----------------------|
//! | GET    | `/`     | none                 |
//! | POST   | `/`     | `{"description"}`    |
//! | PUT    | `/`     | `{"id","description"}` |
//! | DELETE | `/:id`  | none                 |

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use tokio::sync::RwLock;

use crate::observability::{log_event_with_fields, Event};
use crate::wishlist::{Wish, WishError, WishList, WishPayload, WishResult};

// ==================
// Shared State
// ==================

/// Wish list shared across handlers.
///
/// Reads take the shared lock; every mutation holds the exclusive lock
/// until its resulting list has been copied out. Logging happens after
/// the guard is released.
#[derive(Debug, Default)]
pub struct WishState {
    wishes: RwLock<WishList>,
}

impl WishState {
    pub fn new(list: WishList) -> Self {
        Self {
            wishes: RwLock::new(list),
        }
    }

    /// State holding only the seed wish
    pub fn seeded() -> Self {
        Self::new(WishList::seeded())
    }

    /// Copy of the current list
    pub async fn snapshot(&self) -> Vec<Wish> {
        self.wishes.read().await.wishes().to_vec()
    }
}

// ==================
// Wish Routes
// ==================

/// Create wish routes
pub fn wish_routes(state: Arc<WishState>) -> Router {
    Router::new()
        .route(
            "/",
            get(list_handler).post(create_handler).put(replace_handler),
        )
        .route("/:id", delete(delete_handler))
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

fn decode_payload(body: &[u8]) -> WishResult<WishPayload> {
    WishPayload::from_slice(body).map_err(|e| rejected(e.into()))
}

/// Parse a path id as an unsigned decimal integer
fn parse_id(raw: &str) -> WishResult<u64> {
    // u64::from_str tolerates a leading '+'
    if raw.starts_with('+') {
        return Err(rejected(WishError::BadRequest(format!(
            "invalid id: {}",
            raw
        ))));
    }
    raw.parse::<u64>().map_err(|e| rejected(e.into()))
}

fn rejected(err: WishError) -> WishError {
    log_event_with_fields(
        Event::RequestRejected,
        &[
            ("reason", err.to_string().as_str()),
            ("status", err.status_code().as_str()),
        ],
    );
    err
}

// ==================
// Handlers
// ==================

async fn list_handler(State(state): State<Arc<WishState>>) -> Json<Vec<Wish>> {
    Json(state.snapshot().await)
}

async fn create_handler(
    State(state): State<Arc<WishState>>,
    body: Bytes,
) -> WishResult<Json<Vec<Wish>>> {
    let payload = decode_payload(&body)?;

    let wishes = {
        let mut list = state.wishes.write().await;
        list.add(payload.description).to_vec()
    };

    if let Some(added) = wishes.last() {
        log_event_with_fields(Event::WishAdded, &[("id", added.id.to_string().as_str())]);
    }
    Ok(Json(wishes))
}

async fn replace_handler(
    State(state): State<Arc<WishState>>,
    body: Bytes,
) -> WishResult<Json<Vec<Wish>>> {
    let payload = decode_payload(&body)?;

    let updated = {
        let mut list = state.wishes.write().await;
        list.update(payload.id, payload.description)
            .map(<[Wish]>::to_vec)
    };
    let wishes = updated.map_err(rejected)?;

    log_event_with_fields(Event::WishUpdated, &[("id", payload.id.to_string().as_str())]);
    Ok(Json(wishes))
}

async fn delete_handler(
    State(state): State<Arc<WishState>>,
    Path(raw_id): Path<String>,
) -> WishResult<Json<Vec<Wish>>> {
    let id = parse_id(&raw_id)?;

    let removed = {
        let mut list = state.wishes.write().await;
        list.remove(id).map(<[Wish]>::to_vec)
    };
    let wishes = removed.map_err(rejected)?;

    log_event_with_fields(Event::WishRemoved, &[("id", id.to_string().as_str())]);
    Ok(Json(wishes))
}
