//! Run leaderboard
//!
//! Persisted to key-value storage as a JSON array, keeps the top 10 runs.

use serde::{Deserialize, Serialize};

use crate::platform::storage::{KeyValueStore, StorageError};

/// Maximum number of runs to keep
pub const MAX_ENTRIES: usize = 10;

/// Storage key for the serialized leaderboard
pub const STORAGE_KEY: &str = "gameScores";

/// A finished run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub score: u64,
    pub rings: u32,
    /// Difficulty reached when the run ended
    pub speed_multiplier: f64,
}

/// Top runs, sorted descending by score
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Check if a score would make the board
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_ENTRIES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Append, re-sort descending and truncate to [`MAX_ENTRIES`].
    ///
    /// Returns the 1-based rank, or `None` if the entry fell off the end.
    /// Ties keep earlier runs ahead.
    pub fn insert(&mut self, entry: LeaderboardEntry) -> Option<usize> {
        let score = entry.score;
        self.entries.push(entry);
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));

        let rank = self.entries.iter().filter(|e| e.score >= score).count();
        self.entries.truncate(MAX_ENTRIES);

        (rank <= MAX_ENTRIES).then_some(rank)
    }

    /// Record a finished run and write the board to storage.
    ///
    /// Runs that scored nothing are not recorded and nothing is written.
    pub fn save(
        &mut self,
        entry: LeaderboardEntry,
        store: &mut impl KeyValueStore,
    ) -> Result<Option<usize>, StorageError> {
        if entry.score == 0 {
            return Ok(None);
        }
        let rank = self.insert(entry);
        self.persist(store)?;
        log::info!("Leaderboard saved ({} entries)", self.entries.len());
        Ok(rank)
    }

    /// Overwrite the stored board with this one
    pub fn persist(&self, store: &mut impl KeyValueStore) -> Result<(), StorageError> {
        let json = serde_json::to_string(self)?;
        store.set_item(STORAGE_KEY, &json)
    }

    /// Load the stored board; missing or malformed data starts fresh
    pub fn load(store: &impl KeyValueStore) -> Self {
        match store.get_item(STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<Leaderboard>(&json) {
                Ok(mut board) => {
                    board.entries.sort_by(|a, b| b.score.cmp(&a.score));
                    board.entries.truncate(MAX_ENTRIES);
                    log::info!("Loaded {} leaderboard entries", board.entries.len());
                    board
                }
                Err(e) => {
                    log::warn!("Stored leaderboard is malformed ({}), starting fresh", e);
                    Self::new()
                }
            },
            Ok(None) => {
                log::info!("No leaderboard found, starting fresh");
                Self::new()
            }
            Err(e) => {
                log::warn!("Could not read leaderboard: {}", e);
                Self::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::storage::MemoryStore;
    use proptest::prelude::*;

    fn entry(score: u64) -> LeaderboardEntry {
        LeaderboardEntry {
            score,
            rings: (score / 100) as u32,
            speed_multiplier: 1.0,
        }
    }

    fn stored_scores(store: &MemoryStore) -> Vec<u64> {
        let json = store.get_item(STORAGE_KEY).unwrap().unwrap();
        let entries: Vec<LeaderboardEntry> = serde_json::from_str(&json).unwrap();
        entries.iter().map(|e| e.score).collect()
    }

    #[test]
    fn test_sorted_descending() {
        let mut board = Leaderboard::new();
        let mut store = MemoryStore::new();
        for score in [300, 1000, 200, 500] {
            board.save(entry(score), &mut store).unwrap();
        }
        assert_eq!(stored_scores(&store), vec![1000, 500, 300, 200]);
        assert_eq!(board.top_score(), Some(1000));
    }

    #[test]
    fn test_lower_eleventh_entry_changes_nothing() {
        let mut board = Leaderboard::new();
        let mut store = MemoryStore::new();
        for i in 1..=10 {
            board.save(entry(i * 100), &mut store).unwrap();
        }
        let before = stored_scores(&store);

        assert!(!board.qualifies(50));
        assert_eq!(board.save(entry(50), &mut store).unwrap(), None);
        assert_eq!(stored_scores(&store), before);
    }

    #[test]
    fn test_higher_eleventh_entry_displaces_lowest() {
        let mut board = Leaderboard::new();
        let mut store = MemoryStore::new();
        for i in 1..=10 {
            board.save(entry(i * 100), &mut store).unwrap();
        }

        assert_eq!(board.save(entry(5000), &mut store).unwrap(), Some(1));
        let scores = stored_scores(&store);
        assert_eq!(scores.len(), 10);
        assert_eq!(scores[0], 5000);
        assert!(!scores.contains(&100));
    }

    #[test]
    fn test_zero_score_not_saved() {
        let mut board = Leaderboard::new();
        let mut store = MemoryStore::new();
        assert_eq!(board.save(entry(0), &mut store).unwrap(), None);
        assert!(board.is_empty());
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_tie_ranks_behind_existing() {
        let mut board = Leaderboard::new();
        board.insert(entry(300));
        assert_eq!(board.insert(entry(300)), Some(2));
    }

    #[test]
    fn test_json_field_names() {
        let mut board = Leaderboard::new();
        board.insert(LeaderboardEntry {
            score: 300,
            rings: 3,
            speed_multiplier: 1.5,
        });
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"[{"score":300,"rings":3,"speedMultiplier":1.5}]"#);
    }

    #[test]
    fn test_load_round_trip_and_malformed() {
        let mut board = Leaderboard::new();
        let mut store = MemoryStore::new();
        board.save(entry(700), &mut store).unwrap();
        assert_eq!(Leaderboard::load(&store), board);

        store.set_item(STORAGE_KEY, "{oops").unwrap();
        assert!(Leaderboard::load(&store).is_empty());
        assert!(Leaderboard::load(&MemoryStore::new()).is_empty());
    }

    proptest! {
        #[test]
        fn prop_bounded_and_sorted(scores in proptest::collection::vec(0u64..100_000, 0..40)) {
            let mut board = Leaderboard::new();
            for score in scores {
                board.insert(entry(score));
                prop_assert!(board.len() <= MAX_ENTRIES);
                prop_assert!(board.entries().windows(2).all(|w| w[0].score >= w[1].score));
            }
        }
    }
}
