use serde::{Deserialize, Serialize};

/// Body of `GET /league`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PlayersResponse {
    pub players: Vec<String>,
}

/// Body of `GET /players/league?value=...`, echoes the requested label back as-is
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LeagueResponse {
    pub players: Vec<String>,
    pub league: String,
}

// Scores are plain decimal text, never JSON
pub fn score_body(score: u64) -> String {
    score.to_string()
}
