use crate::domain::model::TeamCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutcomeError {
    #[error("{team} appears more than once in the group file (again in group {group})")]
    DuplicateTeam { team: TeamCode, group: String },

    #[error("{team} plays a match but does not belong to a group")]
    UnknownTeam { team: TeamCode },

    #[error("Match #{index} is malformed: {reason}")]
    MalformedMatch { index: usize, reason: String },

    #[error("{team1} and {team2} play against each other but aren't in the same group")]
    CrossGroupMatch { team1: TeamCode, team2: TeamCode },

    #[error("{team1} vs. {team2}: only one team has a recorded score")]
    InconsistentScore { team1: TeamCode, team2: TeamCode },

    #[error("Group {group} has {size} teams, expected {expected}")]
    InvalidGroupSize {
        group: String,
        size: usize,
        expected: usize,
    },

    #[error("Unknown group: {group}")]
    UnknownGroup { group: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 資料檔內容有誤
    Input,
    /// 設定或命令列參數有誤
    Config,
    /// 檔案系統等外部錯誤
    System,
}

impl OutcomeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            OutcomeError::DuplicateTeam { .. }
            | OutcomeError::UnknownTeam { .. }
            | OutcomeError::MalformedMatch { .. }
            | OutcomeError::CrossGroupMatch { .. }
            | OutcomeError::InconsistentScore { .. }
            | OutcomeError::InvalidGroupSize { .. }
            | OutcomeError::JsonError(_) => ErrorCategory::Input,
            OutcomeError::UnknownGroup { .. } | OutcomeError::ConfigError { .. } => {
                ErrorCategory::Config
            }
            OutcomeError::IoError(_) => ErrorCategory::System,
        }
    }

    /// Process exit code for the binary.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 1,
            ErrorCategory::Config => 2,
            ErrorCategory::System => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            OutcomeError::DuplicateTeam { .. } | OutcomeError::InvalidGroupSize { .. } => {
                "Check groups.json: every team belongs to exactly one group of four"
            }
            OutcomeError::UnknownTeam { .. } | OutcomeError::CrossGroupMatch { .. } => {
                "Check that matches.json and groups.json use the same team codes"
            }
            OutcomeError::MalformedMatch { .. } => {
                "Each match must map exactly two team codes to integer scores"
            }
            OutcomeError::InconsistentScore { .. } => {
                "Unplayed matches use -1 for both teams; played matches use real scores for both"
            }
            OutcomeError::UnknownGroup { .. } => "Omit --group to list every group in the dataset",
            OutcomeError::IoError(_) => "Make sure the dataset directory exists and is readable",
            OutcomeError::JsonError(_) => "Make sure the data files are valid JSON",
            OutcomeError::ConfigError { .. } => "Review the settings file and command-line flags",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Input sanity check failed: {}", self),
            ErrorCategory::Config => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, OutcomeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_input_errors() {
        let err = OutcomeError::InconsistentScore {
            team1: TeamCode::from("QAT"),
            team2: TeamCode::from("ECU"),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.exit_code(), 1);
        assert!(err.user_friendly_message().contains("QAT vs. ECU"));
    }

    #[test]
    fn test_exit_codes_follow_category() {
        let config = OutcomeError::UnknownGroup {
            group: "Z".to_string(),
        };
        assert_eq!(config.exit_code(), 2);

        let io = OutcomeError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.category(), ErrorCategory::System);
        assert_eq!(io.exit_code(), 3);
    }
}
