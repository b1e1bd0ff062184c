use std::cmp::Reverse;

use super::models::Match;

/// Matches of one tournament inside the most-recent window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchGroup {
    pub tournament_id: i64,
    pub matches: Vec<Match>,
}

/// Concatenate per-tournament lists in the order they are given
pub fn merge_all(per_tournament: Vec<Vec<Match>>) -> Vec<Match> {
    per_tournament.into_iter().flatten().collect()
}

/// Most recent `n` matches, newest first.
///
/// The sort is stable, so matches with equal timestamps keep their input order.
pub fn select_top(mut matches: Vec<Match>, n: usize) -> Vec<Match> {
    matches.sort_by_key(|m| Reverse(m.date_time));
    matches.truncate(n);
    matches
}

/// Partition matches by tournament.
///
/// Groups appear in order of first appearance and keep the input order inside.
pub fn group_by_tournament(matches: Vec<Match>) -> Vec<MatchGroup> {
    let mut groups: Vec<MatchGroup> = Vec::new();

    for m in matches {
        match groups.iter_mut().find(|g| g.tournament_id == m.tournament_id) {
            Some(group) => group.matches.push(m),
            None => groups.push(MatchGroup {
                tournament_id: m.tournament_id,
                matches: vec![m],
            }),
        }
    }

    groups
}
