use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

/// Score value marking a match that has not been played yet.
pub const UNPLAYED_SCORE: i64 = -1;

/// Largest score accepted in a match record.
pub const MAX_SCORE: i64 = i32::MAX as i64;

/// Number of teams in every group.
pub const GROUP_SIZE: usize = 4;

/// Team identifier as it appears in the data files (usually a country code).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamCode(String);

impl TeamCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TeamCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for TeamCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl Borrow<str> for TeamCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `groups.json`: group identifier to member codes. Sorted by identifier.
pub type RawGroups = BTreeMap<String, Vec<TeamCode>>;

/// `names.json`: team code to full display name.
pub type TeamNames = BTreeMap<TeamCode, String>;

/// Points per team, seeded from played matches.
pub type PointsTable = BTreeMap<TeamCode, i32>;

/// Goals for minus goals against, from played matches only.
pub type GoalDifferences = BTreeMap<TeamCode, i64>;

/// One entry of `matches.json` before validation. Key order is kept, the
/// first key is the home side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawMatch(pub serde_json::Map<String, serde_json::Value>);

impl RawMatch {
    pub fn new<I, K>(scores: I) -> Self
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<String>,
    {
        Self(
            scores
                .into_iter()
                .map(|(team, score)| (team.into(), serde_json::Value::from(score)))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: String,
    pub members: Vec<TeamCode>,
}

impl Group {
    pub fn contains(&self, team: &TeamCode) -> bool {
        self.members.contains(team)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalScore {
    pub team1: i64,
    pub team2: i64,
}

/// A validated match. `score` is `None` until the match is played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub team1: TeamCode,
    pub team2: TeamCode,
    pub score: Option<FinalScore>,
}

impl Match {
    pub fn is_played(&self) -> bool {
        self.score.is_some()
    }
}

/// Result assigned to an unplayed match during enumeration. Variant order is
/// the branch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Team1Wins,
    Team2Wins,
    Draw,
}

impl MatchOutcome {
    pub const ALL: [MatchOutcome; 3] = [
        MatchOutcome::Team1Wins,
        MatchOutcome::Team2Wins,
        MatchOutcome::Draw,
    ];

    /// Points awarded to (team1, team2).
    pub fn points(self) -> (i32, i32) {
        match self {
            MatchOutcome::Team1Wins => (3, 0),
            MatchOutcome::Team2Wins => (0, 3),
            MatchOutcome::Draw => (1, 1),
        }
    }

    /// The sibling branch explored after this one.
    pub fn next(self) -> Option<MatchOutcome> {
        match self {
            MatchOutcome::Team1Wins => Some(MatchOutcome::Team2Wins),
            MatchOutcome::Team2Wins => Some(MatchOutcome::Draw),
            MatchOutcome::Draw => None,
        }
    }

    pub fn from_score(score: FinalScore) -> Self {
        match score.team1.cmp(&score.team2) {
            std::cmp::Ordering::Greater => MatchOutcome::Team1Wins,
            std::cmp::Ordering::Less => MatchOutcome::Team2Wins,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
        }
    }

    /// "X beats Y" / "X ties Y", using the supplied display names.
    pub fn describe(self, team1: &str, team2: &str) -> String {
        match self {
            MatchOutcome::Team1Wins => format!("{} beats {}", team1, team2),
            MatchOutcome::Team2Wins => format!("{} beats {}", team2, team1),
            MatchOutcome::Draw => format!("{} ties {}", team1, team2),
        }
    }
}

/// Points of one group's teams, in group member order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Standings {
    entries: Vec<(TeamCode, i32)>,
}

impl Standings {
    pub fn new(entries: Vec<(TeamCode, i32)>) -> Self {
        Self { entries }
    }

    pub fn points(&self, team: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|(code, _)| code.as_str() == team)
            .map(|(_, points)| *points)
    }

    pub fn slot_of(&self, team: &TeamCode) -> Option<usize> {
        self.entries.iter().position(|(code, _)| code == team)
    }

    pub fn add_at(&mut self, slot: usize, delta: i32) {
        if let Some((_, points)) = self.entries.get_mut(slot) {
            *points += delta;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TeamCode, i32)> {
        self.entries.iter().map(|(code, points)| (code, *points))
    }
}

/// Validated tournament data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tournament {
    pub groups: Vec<Group>,
    pub matches: Vec<Match>,
}

impl Tournament {
    /// Case-insensitive lookup by group identifier.
    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups
            .iter()
            .find(|group| group.id.eq_ignore_ascii_case(id))
    }

    pub fn participants(&self) -> impl Iterator<Item = &TeamCode> {
        self.groups.iter().flat_map(|group| group.members.iter())
    }
}
