use log::warn;

use super::aggregation::MatchGroup;
use super::collection::TournamentCollection;
use super::models::Statistics;

/// Pair every match group with its tournament, in group order.
///
/// Groups whose tournament is not in the catalog are left out.
pub fn build_statistics(groups: Vec<MatchGroup>, tournaments: &TournamentCollection) -> Vec<Statistics> {
    groups
        .into_iter()
        .filter_map(|group| match tournaments.find(group.tournament_id) {
            Some(tournament) => Some(Statistics {
                tournament: tournament.clone(),
                matches: group.matches,
            }),
            None => {
                warn!(
                    "Dropping {} match(es) of unknown tournament {}",
                    group.matches.len(),
                    group.tournament_id
                );
                None
            }
        })
        .collect()
}
