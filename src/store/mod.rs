use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Everything the router needs from a player store.
///
/// Implementations must apply `record_win` as one indivisible step so two
/// requests racing on the same player never lose an increment.
pub trait PlayerStore: Send + Sync {
    /// Add one win for `name`, creating the player if needed, and overwrite
    /// its league with `league` (the empty label means "no league").
    fn record_win(&self, name: &str, league: &str);

    /// Current win count for `name`, or 0 for a player never recorded.
    fn player_score(&self, name: &str) -> u64;

    /// Every player with at least one win. Order is unspecified.
    fn players(&self) -> Vec<String>;

    /// Every player currently assigned to exactly `league`. Order is unspecified.
    fn players_of_league(&self, league: &str) -> Vec<String>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerRecord {
    pub wins: u64,
    pub league: String,
}

// In-memory store, lives for the whole process and is dropped at shutdown
#[derive(Debug, Default)]
pub struct InMemoryPlayerStore {
    players: RwLock<HashMap<String, PlayerRecord>>,
}

impl InMemoryPlayerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlayerStore for InMemoryPlayerStore {
    fn record_win(&self, name: &str, league: &str) {
        // Every write finishes before its guard drops, so a poisoned map is still consistent
        let mut players = self.players.write().unwrap_or_else(PoisonError::into_inner);

        let record = players.entry(name.to_string()).or_default();
        record.wins = record.wins.saturating_add(1);
        record.league = league.to_string();

        tracing::debug!(player = name, league, wins = record.wins, "recorded win");
    }

    fn player_score(&self, name: &str) -> u64 {
        let players = self.players.read().unwrap_or_else(PoisonError::into_inner);

        players.get(name).map(|record| record.wins).unwrap_or(0)
    }

    fn players(&self) -> Vec<String> {
        let players = self.players.read().unwrap_or_else(PoisonError::into_inner);

        players
            .iter()
            .filter(|(_, record)| record.wins > 0)
            .map(|(name, _)| name.clone())
            .collect()
    }

    fn players_of_league(&self, league: &str) -> Vec<String> {
        let players = self.players.read().unwrap_or_else(PoisonError::into_inner);

        players
            .iter()
            .filter(|(_, record)| record.league == league)
            .map(|(name, _)| name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn as_set(names: Vec<String>) -> HashSet<String> {
        names.into_iter().collect()
    }

    fn set_of(names: &[&str]) -> HashSet<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn unknown_player_scores_zero_without_being_created() {
        let store = InMemoryPlayerStore::new();

        assert_eq!(store.player_score("katty"), 0);
        assert!(store.players().is_empty());
    }

    #[test]
    fn first_win_creates_player() {
        let store = InMemoryPlayerStore::new();

        store.record_win("james", "");

        assert_eq!(store.player_score("james"), 1);
        assert_eq!(store.players(), vec!["james".to_string()]);
    }

    #[test]
    fn wins_accumulate() {
        let store = InMemoryPlayerStore::new();

        for expected in 1..=5 {
            store.record_win("james", "high");
            assert_eq!(store.player_score("james"), expected);
        }
    }

    #[test]
    fn latest_league_wins() {
        let store = InMemoryPlayerStore::new();

        store.record_win("james", "A");
        store.record_win("james", "B");

        assert!(store.players_of_league("A").is_empty());
        assert_eq!(store.players_of_league("B"), vec!["james".to_string()]);
        assert_eq!(store.player_score("james"), 2);
    }

    #[test]
    fn empty_league_overwrites_previous_label() {
        let store = InMemoryPlayerStore::new();

        store.record_win("james", "high");
        store.record_win("james", "");

        assert!(store.players_of_league("high").is_empty());
        assert_eq!(store.players_of_league(""), vec!["james".to_string()]);
    }

    #[test]
    fn league_match_is_case_sensitive() {
        let store = InMemoryPlayerStore::new();

        store.record_win("james", "High");

        assert!(store.players_of_league("high").is_empty());
        assert_eq!(as_set(store.players_of_league("High")), set_of(&["james"]));
    }

    #[test]
    fn unknown_league_is_empty() {
        let store = InMemoryPlayerStore::new();
        store.record_win("james", "high");

        assert!(store.players_of_league("nonexistent").is_empty());
    }

    #[test]
    fn players_groups_by_league() {
        let store = InMemoryPlayerStore::new();

        store.record_win("james", "high");
        store.record_win("alex", "high");
        store.record_win("bike", "low");

        assert_eq!(as_set(store.players()), set_of(&["james", "alex", "bike"]));
        assert_eq!(as_set(store.players_of_league("high")), set_of(&["james", "alex"]));
        assert_eq!(as_set(store.players_of_league("low")), set_of(&["bike"]));
    }

    #[test]
    fn concurrent_wins_are_not_lost() {
        let store = InMemoryPlayerStore::new();

        std::thread::scope(|scope| {
            for worker in 0..8 {
                let store = &store;
                scope.spawn(move || {
                    let league = if worker % 2 == 0 { "even" } else { "odd" };
                    for _ in 0..250 {
                        store.record_win("james", league);
                    }
                });
            }
        });

        assert_eq!(store.player_score("james"), 2000);

        let even = store.players_of_league("even");
        let odd = store.players_of_league("odd");
        assert_eq!(even.len() + odd.len(), 1, "player must sit in exactly one league");
    }
}
