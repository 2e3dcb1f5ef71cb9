//! Qualification tiers for one snapshot, from points alone.
//!
//! Teams are ordered by points, then two cuts split off the top two point
//! tiers. Only the top two teams of a group advance, so the tier sizes decide
//! who is certain and who depends on goal difference. Head-to-head and other
//! tie-breaks are not modelled: a four-way tie leaves every team in
//! [`Tier::Out`] even though two of them will go through.

use crate::domain::model::{Standings, TeamCode};

/// Places per group that advance.
pub const QUALIFYING_PLACES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Top two on points alone.
    Certain,
    /// Top two only if goal difference goes their way.
    GoalDifference,
    Out,
}

/// Points a team must strictly exceed to reach a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threshold {
    Points(i32),
    Unreachable,
}

impl Threshold {
    pub fn exceeded_by(self, points: i32) -> bool {
        match self {
            Threshold::Points(limit) => points > limit,
            Threshold::Unreachable => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Size of the top point tier.
    pub first_cut: usize,
    /// Combined size of the top two point tiers.
    pub second_cut: usize,
    pub advancement: Threshold,
    pub goal_difference: Threshold,
}

impl Classification {
    pub fn tier(&self, points: i32) -> Tier {
        if self.advancement.exceeded_by(points) {
            Tier::Certain
        } else if self.goal_difference.exceeded_by(points) {
            Tier::GoalDifference
        } else {
            Tier::Out
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedTeam<'a> {
    pub team: &'a TeamCode,
    pub points: i32,
    pub tier: Tier,
}

/// Index of the first strict points drop at or after `start` in a
/// descending list, or its length if there is none.
pub fn find_cut(ordered: &[i32], start: usize) -> usize {
    (start..ordered.len().saturating_sub(1))
        .find(|&i| ordered[i] > ordered[i + 1])
        .map_or(ordered.len(), |i| i + 1)
}

pub fn classify(standings: &Standings) -> Classification {
    let mut ordered: Vec<i32> = standings.iter().map(|(_, points)| points).collect();
    ordered.sort_by(|a, b| b.cmp(a));

    let first_cut = find_cut(&ordered, 0);
    let second_cut = find_cut(&ordered, first_cut);
    let tier_below = |cut: usize| {
        ordered
            .get(cut)
            .map_or(Threshold::Unreachable, |points| Threshold::Points(*points))
    };

    let mut advancement = Threshold::Unreachable;
    let mut goal_difference = Threshold::Unreachable;

    if first_cut > QUALIFYING_PLACES {
        goal_difference = tier_below(first_cut);
    } else {
        advancement = tier_below(first_cut);
    }

    if second_cut == QUALIFYING_PLACES {
        advancement = tier_below(second_cut);
    } else if second_cut > QUALIFYING_PLACES && first_cut == 1 {
        goal_difference = tier_below(second_cut);
    }

    Classification {
        first_cut,
        second_cut,
        advancement,
        goal_difference,
    }
}

/// Every team with its tier, in alphabetical order of team code.
pub fn rank(standings: &Standings) -> Vec<RankedTeam<'_>> {
    let classification = classify(standings);
    let mut ranked: Vec<RankedTeam> = standings
        .iter()
        .map(|(team, points)| RankedTeam {
            team,
            points,
            tier: classification.tier(points),
        })
        .collect();
    ranked.sort_by(|a, b| a.team.cmp(b.team));
    ranked
}
