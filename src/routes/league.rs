use axum::{
    extract::{Query, State},
    response::Json,
};
use crate::models::{LeagueResponse, PlayersResponse};
use crate::routes::{first_param, AppState, QueryPairs};

// GET /league - Every player with at least one win
pub async fn list_players(State(state): State<AppState>) -> Json<PlayersResponse> {
    let players = state.store.players();

    tracing::debug!(count = players.len(), "listing players");

    Json(PlayersResponse { players })
}

// GET /players/league?value=high - Players currently in the given league
pub async fn list_league(
    State(state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> Json<LeagueResponse> {
    let league = first_param(&params, "value");
    let players = state.store.players_of_league(&league);

    tracing::debug!(%league, count = players.len(), "listing league");

    Json(LeagueResponse { players, league })
}
