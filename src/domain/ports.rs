use crate::domain::model::{RawGroups, RawMatch, TeamNames};
use crate::utils::error::Result;

/// Where group membership, match results and display names come from.
pub trait TournamentSource {
    fn load_groups(&self) -> Result<RawGroups>;
    fn load_matches(&self) -> Result<Vec<RawMatch>>;
    /// Full team names. Sources without a name table return an empty map.
    fn load_names(&self) -> Result<TeamNames>;
}

/// Presentation switches consumed by the printer and the group selection.
pub trait DisplayOptions {
    fn full_names(&self) -> bool;
    fn colour(&self) -> bool;
    fn win_path(&self) -> bool;
    fn group(&self) -> Option<&str>;
}
