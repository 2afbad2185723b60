use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Query, State},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
};
use percent_encoding::percent_decode_str;
use crate::models::score_body;
use crate::routes::{first_param, AppState, QueryPairs};
use crate::routes::league;

const PLAYERS_PREFIX: &str = "/players/";

// `/players/league` is the league listing, not a player called "league"
const LEAGUE_SEGMENT: &str = "league";

/// Everything after `/players/` in the request path, percent-decoded.
///
/// Bytes that do not decode to UTF-8 are replaced rather than rejected, so
/// every name reaches the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerName(pub String);

impl<S: Send + Sync> FromRequestParts<S> for PlayerName {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .uri
            .path()
            .strip_prefix(PLAYERS_PREFIX)
            .unwrap_or_default();

        Ok(Self(percent_decode_str(raw).decode_utf8_lossy().into_owned()))
    }
}

// GET /players/{name} - Player's win count as plain text
pub async fn get_player(
    State(state): State<AppState>,
    PlayerName(name): PlayerName,
    Query(params): Query<QueryPairs>,
) -> Response {
    if name == LEAGUE_SEGMENT {
        return league::list_league(State(state), Query(params))
            .await
            .into_response();
    }

    show_score(&state, &name).into_response()
}

// POST /players/{name}?league=high - Record one win
pub async fn record_win(
    State(state): State<AppState>,
    PlayerName(name): PlayerName,
    Query(params): Query<QueryPairs>,
) -> StatusCode {
    // Missing means the empty label, which still overwrites the player's league
    let league = first_param(&params, "league");

    state.store.record_win(&name, &league);

    StatusCode::ACCEPTED
}

// A zero score and an unknown player both answer 404 with body "0"
fn show_score(state: &AppState, name: &str) -> (StatusCode, String) {
    let score = state.store.player_score(name);

    let status = if score == 0 {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };

    (status, score_body(score))
}
