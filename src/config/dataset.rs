use crate::core::TournamentSource;
use crate::domain::model::{RawGroups, RawMatch, TeamNames};
use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

pub const GROUPS_FILE: &str = "groups.json";
pub const MATCHES_FILE: &str = "matches.json";
pub const NAMES_FILE: &str = "names.json";

/// A dataset directory such as `data/qatar-2022/`.
#[derive(Debug, Clone)]
pub struct DataDirectory {
    base_path: PathBuf,
}

impl DataDirectory {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.base_path
    }

    fn read_json<T: DeserializeOwned>(&self, file: &str) -> Result<T> {
        let full_path = self.base_path.join(file);
        tracing::debug!("Reading {}", full_path.display());
        let data = fs::read(&full_path)?;
        Ok(serde_json::from_slice(&data)?)
    }
}

impl TournamentSource for DataDirectory {
    fn load_groups(&self) -> Result<RawGroups> {
        self.read_json(GROUPS_FILE)
    }

    fn load_matches(&self) -> Result<Vec<RawMatch>> {
        self.read_json(MATCHES_FILE)
    }

    fn load_names(&self) -> Result<TeamNames> {
        if !self.base_path.join(NAMES_FILE).exists() {
            tracing::warn!(
                "{} not found in {}, showing team codes",
                NAMES_FILE,
                self.base_path.display()
            );
            return Ok(TeamNames::new());
        }
        self.read_json(NAMES_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::OutcomeError;
    use tempfile::TempDir;

    #[test]
    fn test_reads_dataset_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(GROUPS_FILE), r#"{"A": ["QAT", "ECU", "SEN", "NED"]}"#).unwrap();
        fs::write(dir.path().join(MATCHES_FILE), r#"[{"NED": -1, "QAT": -1}]"#).unwrap();

        let source = DataDirectory::new(dir.path());
        let groups = source.load_groups().unwrap();
        assert_eq!(groups["A"].len(), 4);

        let matches = source.load_matches().unwrap();
        let keys: Vec<&String> = matches[0].0.keys().collect();
        assert_eq!(keys, vec!["NED", "QAT"]);

        assert!(source.load_names().unwrap().is_empty());
    }

    #[test]
    fn test_missing_and_invalid_files() {
        let dir = TempDir::new().unwrap();
        let source = DataDirectory::new(dir.path());
        assert!(matches!(source.load_groups(), Err(OutcomeError::IoError(_))));

        fs::write(dir.path().join(MATCHES_FILE), "[{").unwrap();
        assert!(matches!(source.load_matches(), Err(OutcomeError::JsonError(_))));
    }
}
