use crate::app::printer::{Printer, RenderOptions};
use crate::core::outcomes::Outcomes;
use crate::core::standings::{
    compute_goal_differences, compute_points, group_standings, unplayed_group_matches,
};
use crate::core::{DisplayOptions, Result, TournamentSource};
use crate::domain::model::{Group, TeamNames};
use crate::utils::error::OutcomeError;
use crate::utils::validation::validate_tournament;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub groups: usize,
    pub snapshots: usize,
}

pub struct OutcomeEngine<S: TournamentSource> {
    source: S,
}

impl<S: TournamentSource> OutcomeEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Loads and validates the data, then writes every possible outcome of
    /// the selected groups to `out`. Nothing is written if the input is
    /// rejected.
    pub fn run<D, W>(&self, options: &D, out: W) -> Result<RunSummary>
    where
        D: DisplayOptions + ?Sized,
        W: Write,
    {
        let raw_groups = self.source.load_groups()?;
        let raw_matches = self.source.load_matches()?;
        tracing::debug!(
            "Loaded {} groups and {} matches",
            raw_groups.len(),
            raw_matches.len()
        );

        let tournament = validate_tournament(&raw_groups, &raw_matches)?;

        let selected: Vec<&Group> = match options.group() {
            Some(id) => vec![tournament
                .group(id)
                .ok_or_else(|| OutcomeError::UnknownGroup {
                    group: id.to_string(),
                })?],
            None => tournament.groups.iter().collect(),
        };

        let mut names = TeamNames::new();
        if options.full_names() {
            names = self.source.load_names()?;
            for team in tournament.participants() {
                if !names.contains_key(team) {
                    tracing::warn!("No full name for {}, showing the code instead", team);
                }
            }
        }

        let points = compute_points(&tournament.matches, tournament.participants());
        let goal_differences =
            compute_goal_differences(&tournament.matches, tournament.participants());

        let mut printer = Printer::new(out, RenderOptions::from_display(options), names);
        let mut summary = RunSummary::default();

        for group in selected {
            let unplayed = unplayed_group_matches(&tournament.matches, group);
            let outcomes = Outcomes::new(
                group_standings(&points, group),
                &goal_differences,
                unplayed.iter().copied(),
            )?;
            match outcomes.total() {
                Some(total) => tracing::debug!(
                    "Group {}: {} unplayed matches, {} outcomes",
                    group.id,
                    unplayed.len(),
                    total
                ),
                None => tracing::warn!(
                    "Group {}: {} unplayed matches, outcome count overflows",
                    group.id,
                    unplayed.len()
                ),
            }

            printer.group_header(group, &unplayed)?;
            for snapshot in outcomes {
                printer.snapshot(&snapshot)?;
                summary.snapshots += 1;
            }
            summary.groups += 1;
        }

        printer.flush()?;
        Ok(summary)
    }
}
