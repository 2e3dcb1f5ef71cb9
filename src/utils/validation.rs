use crate::domain::model::{
    FinalScore, Group, Match, RawGroups, RawMatch, TeamCode, Tournament, GROUP_SIZE, MAX_SCORE,
    UNPLAYED_SCORE,
};
use crate::utils::error::{OutcomeError, Result};
use std::collections::HashMap;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checks group membership and match records against each other and builds
/// the validated [`Tournament`]. Nothing is computed when this fails.
pub fn validate_tournament(groups: &RawGroups, matches: &[RawMatch]) -> Result<Tournament> {
    let mut group_of: HashMap<&TeamCode, usize> = HashMap::new();
    let mut validated_groups = Vec::with_capacity(groups.len());

    for (index, (id, members)) in groups.iter().enumerate() {
        if members.len() != GROUP_SIZE {
            return Err(OutcomeError::InvalidGroupSize {
                group: id.clone(),
                size: members.len(),
                expected: GROUP_SIZE,
            });
        }
        for member in members {
            if group_of.insert(member, index).is_some() {
                return Err(OutcomeError::DuplicateTeam {
                    team: member.clone(),
                    group: id.clone(),
                });
            }
        }
        validated_groups.push(Group {
            id: id.clone(),
            members: members.clone(),
        });
    }

    let mut validated_matches = Vec::with_capacity(matches.len());
    for (index, raw) in matches.iter().enumerate() {
        for team in raw.0.keys() {
            if !group_of.contains_key(&TeamCode::from(team.as_str())) {
                return Err(OutcomeError::UnknownTeam {
                    team: TeamCode::from(team.as_str()),
                });
            }
        }

        let [(team1, score1), (team2, score2)] = match_entries(index, raw)?;

        if (score1 == UNPLAYED_SCORE) != (score2 == UNPLAYED_SCORE) {
            return Err(OutcomeError::InconsistentScore { team1, team2 });
        }

        if group_of.get(&team1) != group_of.get(&team2) {
            return Err(OutcomeError::CrossGroupMatch { team1, team2 });
        }

        let score = (score1 != UNPLAYED_SCORE).then_some(FinalScore {
            team1: score1,
            team2: score2,
        });
        validated_matches.push(Match {
            team1,
            team2,
            score,
        });
    }

    tracing::debug!(
        "Validated {} groups and {} matches",
        validated_groups.len(),
        validated_matches.len()
    );

    Ok(Tournament {
        groups: validated_groups,
        matches: validated_matches,
    })
}

fn match_entries(index: usize, raw: &RawMatch) -> Result<[(TeamCode, i64); 2]> {
    if raw.0.len() != 2 {
        return Err(OutcomeError::MalformedMatch {
            index,
            reason: format!("expected two teams, found {}", raw.0.len()),
        });
    }

    let mut entries = raw.0.iter().map(|(team, value)| -> Result<(TeamCode, i64)> {
        let score = value.as_i64().ok_or_else(|| OutcomeError::MalformedMatch {
            index,
            reason: format!("score for {} is not an integer: {}", team, value),
        })?;
        if score < UNPLAYED_SCORE {
            return Err(OutcomeError::MalformedMatch {
                index,
                reason: format!("score for {} is negative: {}", team, score),
            });
        }
        if score > MAX_SCORE {
            return Err(OutcomeError::MalformedMatch {
                index,
                reason: format!("score for {} is out of range: {}", team, score),
            });
        }
        Ok((TeamCode::from(team.as_str()), score))
    });

    match (entries.next(), entries.next()) {
        (Some(first), Some(second)) => Ok([first?, second?]),
        _ => Err(OutcomeError::MalformedMatch {
            index,
            reason: "expected two teams".to_string(),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.contains('\0') {
        return Err(OutcomeError::ConfigError {
            message: format!("{}: path contains null bytes", field_name),
        });
    }
    validate_non_empty_string(field_name, path)
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(OutcomeError::ConfigError {
            message: format!("{}: value cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}
