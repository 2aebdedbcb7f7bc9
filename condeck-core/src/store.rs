//! Contest list persistence.
//!
//! The whole contest list lives in a single JSON file under the data
//! directory. Reads never fail: a missing or unparsable file yields an empty
//! list so a corrupt store degrades to a fresh start instead of an error.

use std::path::PathBuf;

use crate::config::CondeckConfig;
use crate::contest::Contest;
use crate::error::{CondeckError, CondeckResult};

const CONTESTS_FILE: &str = "contests.json";

/// On-disk contest store.
pub struct ContestStore {
    dir: PathBuf,
}

impl ContestStore {
    pub fn new(dir: PathBuf) -> Self {
        ContestStore { dir }
    }

    /// Open the store at the configured data directory.
    pub fn open_default() -> CondeckResult<Self> {
        let config = CondeckConfig::load()?;
        Ok(ContestStore::new(config.data_path()))
    }

    fn path(&self) -> PathBuf {
        self.dir.join(CONTESTS_FILE)
    }

    /// Load the contest list. Missing or unreadable files yield an empty list.
    pub fn load(&self) -> Vec<Contest> {
        match std::fs::read_to_string(self.path()) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Vec::new(),
        }
    }

    /// Persist the full contest list, writing through a temp file.
    pub fn save(&self, contests: &[Contest]) -> CondeckResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let path = self.path();
        let temp = self.dir.join(format!("{CONTESTS_FILE}.tmp"));

        let content = serde_json::to_string_pretty(contests)
            .map_err(|e| CondeckError::Serialization(e.to_string()))?;

        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &path)?;
        Ok(())
    }

    pub fn find(&self, id: &str) -> Option<Contest> {
        self.load().into_iter().find(|c| c.id == id)
    }

    pub fn add(&self, contest: Contest) -> CondeckResult<()> {
        let mut contests = self.load();
        contests.push(contest);
        self.save(&contests)
    }

    /// Replace the stored contest with the same id.
    pub fn update(&self, contest: Contest) -> CondeckResult<()> {
        let mut contests = self.load();

        let Some(existing) = contests.iter_mut().find(|c| c.id == contest.id) else {
            return Err(CondeckError::ContestNotFound(contest.id));
        };
        *existing = contest;

        self.save(&contests)
    }

    /// Remove a contest by id, returning the removed record.
    pub fn remove(&self, id: &str) -> CondeckResult<Contest> {
        let mut contests = self.load();

        let Some(pos) = contests.iter().position(|c| c.id == id) else {
            return Err(CondeckError::ContestNotFound(id.to_string()));
        };
        let removed = contests.remove(pos);

        self.save(&contests)?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample(name: &str) -> Contest {
        Contest::new(name, date(2024, 6, 1), date(2024, 6, 10))
    }

    #[test]
    fn load_from_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContestStore::new(dir.path().join("nothing-here"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn load_from_corrupt_file_falls_back_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONTESTS_FILE), "not json {{{").unwrap();

        let store = ContestStore::new(dir.path().to_path_buf());
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContestStore::new(dir.path().to_path_buf());

        let contests = vec![sample("a"), sample("b")];
        store.save(&contests).unwrap();

        assert_eq!(store.load(), contests);
        // No stray temp file left behind
        assert!(!dir.path().join(format!("{CONTESTS_FILE}.tmp")).exists());
    }

    #[test]
    fn add_appends_and_find_locates_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContestStore::new(dir.path().to_path_buf());

        let contest = sample("jam");
        let id = contest.id.clone();
        store.add(contest).unwrap();
        store.add(sample("other")).unwrap();

        assert_eq!(store.load().len(), 2);
        assert_eq!(store.find(&id).unwrap().name, "jam");
        assert!(store.find("missing").is_none());
    }

    #[test]
    fn update_replaces_matching_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContestStore::new(dir.path().to_path_buf());

        let mut contest = sample("before");
        store.add(contest.clone()).unwrap();

        contest.name = "after".to_string();
        store.update(contest.clone()).unwrap();

        assert_eq!(store.find(&contest.id).unwrap().name, "after");
    }

    #[test]
    fn update_unknown_id_errors() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContestStore::new(dir.path().to_path_buf());

        let result = store.update(sample("ghost"));
        assert!(matches!(result, Err(CondeckError::ContestNotFound(_))));
    }

    #[test]
    fn remove_returns_the_removed_contest() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContestStore::new(dir.path().to_path_buf());

        let contest = sample("gone");
        let id = contest.id.clone();
        store.add(contest).unwrap();

        let removed = store.remove(&id).unwrap();
        assert_eq!(removed.name, "gone");
        assert!(store.load().is_empty());

        assert!(matches!(
            store.remove(&id),
            Err(CondeckError::ContestNotFound(_))
        ));
    }
}
