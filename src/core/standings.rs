use crate::domain::model::{
    GoalDifferences, Group, Match, MatchOutcome, PointsTable, Standings, TeamCode,
};

/// Points from every played match. Unplayed matches contribute nothing and
/// every participant starts at zero.
pub fn compute_points<'a, I>(matches: &[Match], participants: I) -> PointsTable
where
    I: IntoIterator<Item = &'a TeamCode>,
{
    let mut points: PointsTable = participants.into_iter().map(|t| (t.clone(), 0)).collect();

    for game in matches {
        let Some(score) = game.score else { continue };
        let (points1, points2) = MatchOutcome::from_score(score).points();
        *points.entry(game.team1.clone()).or_default() += points1;
        *points.entry(game.team2.clone()).or_default() += points2;
    }

    points
}

pub fn compute_goal_differences<'a, I>(matches: &[Match], participants: I) -> GoalDifferences
where
    I: IntoIterator<Item = &'a TeamCode>,
{
    let mut differences: GoalDifferences =
        participants.into_iter().map(|t| (t.clone(), 0)).collect();

    for game in matches {
        let Some(score) = game.score else { continue };
        let diff = score.team1 - score.team2;
        *differences.entry(game.team1.clone()).or_default() += diff;
        *differences.entry(game.team2.clone()).or_default() -= diff;
    }

    differences
}

/// Unplayed matches of `group`, in input order.
pub fn unplayed_group_matches<'a>(matches: &'a [Match], group: &Group) -> Vec<&'a Match> {
    matches
        .iter()
        .filter(|game| !game.is_played() && group.contains(&game.team1))
        .collect()
}

/// The group's slice of the points table, in member order.
pub fn group_standings(points: &PointsTable, group: &Group) -> Standings {
    Standings::new(
        group
            .members
            .iter()
            .map(|team| (team.clone(), points.get(team).copied().unwrap_or(0)))
            .collect(),
    )
}
