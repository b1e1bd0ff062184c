pub mod aggregation;
mod collection;
pub mod models;
pub mod normalizer;
pub mod statistics;

pub use aggregation::{group_by_tournament, merge_all, select_top, MatchGroup};
pub use collection::TournamentCollection;
pub use models::*;
pub use normalizer::{normalize_match, normalize_matches, normalize_tournament};
pub use statistics::build_statistics;
