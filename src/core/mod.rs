pub mod classify;
pub mod engine;
pub mod outcomes;
pub mod standings;

pub use crate::domain::model::{GoalDifferences, Match, Standings, Tournament};
pub use crate::domain::ports::{DisplayOptions, TournamentSource};
pub use crate::utils::error::Result;
