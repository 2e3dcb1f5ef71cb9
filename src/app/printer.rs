use crate::core::classify::{rank, Tier};
use crate::core::outcomes::Snapshot;
use crate::domain::model::{Group, Match, TeamCode, TeamNames};
use crate::domain::ports::DisplayOptions;
use colored::Colorize;
use std::io::Write;

const NAME_WIDTH: usize = 14;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub colour: bool,
    pub full_names: bool,
    pub win_path: bool,
}

impl RenderOptions {
    /// Colour is used only when `colored` will actually emit styles, so
    /// piped output falls back to the text markers.
    pub fn from_display<D: DisplayOptions + ?Sized>(options: &D) -> Self {
        Self {
            colour: options.colour() && colored::control::SHOULD_COLORIZE.should_colorize(),
            full_names: options.full_names(),
            win_path: options.win_path(),
        }
    }
}

/// Writes the per-group report: header, unplayed matches, one line per
/// snapshot.
pub struct Printer<W: Write> {
    out: W,
    options: RenderOptions,
    names: TeamNames,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, options: RenderOptions, names: TeamNames) -> Self {
        Self {
            out,
            options,
            names,
        }
    }

    pub fn display_name<'n>(&'n self, team: &'n TeamCode) -> &'n str {
        if self.options.full_names {
            if let Some(name) = self.names.get(team) {
                return name;
            }
        }
        team.as_str()
    }

    pub fn group_header(&mut self, group: &Group, unplayed: &[&Match]) -> std::io::Result<()> {
        let title = format!("GROUP {}", group.id.to_uppercase());
        if self.options.colour {
            writeln!(self.out, "\n{}", title.as_str().bold())?;
        } else {
            writeln!(self.out, "\n{}", title)?;
        }

        writeln!(self.out, "Matches:")?;
        for game in unplayed {
            let line = format!(
                "\t{} vs. {}",
                self.display_name(&game.team1),
                self.display_name(&game.team2)
            );
            writeln!(self.out, "{}", line)?;
        }
        writeln!(self.out, "Possible Outcomes:")
    }

    pub fn snapshot(&mut self, snapshot: &Snapshot<'_>) -> std::io::Result<()> {
        if self.options.win_path {
            let path: Vec<String> = snapshot
                .path
                .iter()
                .map(|decision| {
                    decision.outcome.describe(
                        self.display_name(&decision.game.team1),
                        self.display_name(&decision.game.team2),
                    )
                })
                .collect();
            writeln!(self.out, "\t{}", path.join(", "))?;
        }

        let mut line = String::new();
        for ranked in rank(&snapshot.standings) {
            let name = format!("{:>width$}", self.display_name(ranked.team), width = NAME_WIDTH);
            let goal_difference = snapshot
                .goal_differences
                .get(ranked.team)
                .copied()
                .unwrap_or(0);
            line.push_str(&self.cell(&name, ranked.points, goal_difference, ranked.tier));
        }
        writeln!(self.out, "{}", line)
    }

    fn cell(&self, name: &str, points: i32, goal_difference: i64, tier: Tier) -> String {
        match (tier, self.options.colour) {
            (Tier::Certain, true) => format!("\t{} ({})     ", name.green(), points),
            (Tier::Certain, false) => format!("\t+{} ({})     ", name, points),
            (Tier::GoalDifference, true) => {
                format!("\t{} ({}, {:>2}) ", name.magenta(), points, goal_difference)
            }
            (Tier::GoalDifference, false) => {
                format!("\t?{} ({}, {:>2}) ", name, points, goal_difference)
            }
            (Tier::Out, true) => format!("\t{} ({})     ", name, points),
            (Tier::Out, false) => format!("\t {} ({})     ", name, points),
        }
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
