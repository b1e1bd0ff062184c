use super::models::Tournament;

/// Normalized tournaments in catalog order: regular entries first, then unique ones
#[derive(Debug, Clone)]
pub struct TournamentCollection {
    tournaments: Vec<Tournament>,
}

impl TournamentCollection {
    pub fn len(&self) -> usize {
        self.tournaments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tournaments.is_empty()
    }

    /// First tournament with the given id
    pub fn find(&self, id: i64) -> Option<&Tournament> {
        self.tournaments.iter().find(|t| t.id == id)
    }

    pub fn ids(&self) -> Vec<i64> {
        self.tournaments.iter().map(|t| t.id).collect()
    }
}

impl FromIterator<Tournament> for TournamentCollection {
    fn from_iter<I: IntoIterator<Item = Tournament>>(iter: I) -> Self {
        Self {
            tournaments: iter.into_iter().collect(),
        }
    }
}
