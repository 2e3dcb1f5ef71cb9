//! Enumeration of every result combination for a group's unplayed matches.
//!
//! [`Outcomes`] walks the result tree depth first, one unplayed match per
//! level, trying team1 win, team2 win and draw in that order. Points are
//! added in place when a branch is entered and removed when it is left, so
//! sibling branches never see each other's results. Goal differences are
//! never touched.

use crate::domain::model::{GoalDifferences, Match, MatchOutcome, Standings};
use crate::utils::error::{OutcomeError, Result};

/// A result chosen for one unplayed match on the way to a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision<'a> {
    pub game: &'a Match,
    pub outcome: MatchOutcome,
}

/// One complete hypothetical points table for a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<'a> {
    pub standings: Standings,
    pub goal_differences: &'a GoalDifferences,
    pub path: Vec<Decision<'a>>,
}

struct Fixture<'a> {
    game: &'a Match,
    slot1: usize,
    slot2: usize,
}

/// Lazy iterator over the 3^k snapshots of a group with k unplayed matches.
pub struct Outcomes<'a> {
    standings: Standings,
    goal_differences: &'a GoalDifferences,
    fixtures: Vec<Fixture<'a>>,
    chosen: Vec<MatchOutcome>,
    started: bool,
}

impl<'a> Outcomes<'a> {
    /// Fails only if an unplayed match names a team missing from `base`.
    pub fn new<I>(base: Standings, goal_differences: &'a GoalDifferences, unplayed: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Match>,
    {
        let slot = |standings: &Standings, game: &Match, first: bool| {
            let team = if first { &game.team1 } else { &game.team2 };
            standings
                .slot_of(team)
                .ok_or_else(|| OutcomeError::UnknownTeam { team: team.clone() })
        };

        let fixtures = unplayed
            .into_iter()
            .map(|game| -> Result<Fixture<'a>> {
                Ok(Fixture {
                    game,
                    slot1: slot(&base, game, true)?,
                    slot2: slot(&base, game, false)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            chosen: Vec::with_capacity(fixtures.len()),
            standings: base,
            goal_differences,
            fixtures,
            started: false,
        })
    }

    /// Number of snapshots the full walk yields, if it fits in `usize`.
    pub fn total(&self) -> Option<usize> {
        u32::try_from(self.fixtures.len())
            .ok()
            .and_then(|k| 3usize.checked_pow(k))
    }

    fn apply(&mut self, outcome: MatchOutcome) {
        let fixture = &self.fixtures[self.chosen.len()];
        let (points1, points2) = outcome.points();
        let (slot1, slot2) = (fixture.slot1, fixture.slot2);
        self.standings.add_at(slot1, points1);
        self.standings.add_at(slot2, points2);
        self.chosen.push(outcome);
    }

    fn undo(&mut self) -> Option<MatchOutcome> {
        let outcome = self.chosen.pop()?;
        let fixture = &self.fixtures[self.chosen.len()];
        let (points1, points2) = outcome.points();
        let (slot1, slot2) = (fixture.slot1, fixture.slot2);
        self.standings.add_at(slot1, -points1);
        self.standings.add_at(slot2, -points2);
        Some(outcome)
    }

    /// Takes the first branch at every remaining level.
    fn descend(&mut self) {
        while self.chosen.len() < self.fixtures.len() {
            self.apply(MatchOutcome::Team1Wins);
        }
    }

    /// Leaves exhausted levels and moves to the next sibling branch.
    fn advance(&mut self) -> bool {
        while let Some(last) = self.undo() {
            if let Some(next) = last.next() {
                self.apply(next);
                return true;
            }
        }
        false
    }

    fn snapshot(&self) -> Snapshot<'a> {
        Snapshot {
            standings: self.standings.clone(),
            goal_differences: self.goal_differences,
            path: self
                .fixtures
                .iter()
                .zip(&self.chosen)
                .map(|(fixture, outcome)| Decision {
                    game: fixture.game,
                    outcome: *outcome,
                })
                .collect(),
        }
    }
}

impl<'a> Iterator for Outcomes<'a> {
    type Item = Snapshot<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
        } else if !self.advance() {
            return None;
        }
        self.descend();
        Some(self.snapshot())
    }
}

impl std::iter::FusedIterator for Outcomes<'_> {}
