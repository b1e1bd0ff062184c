use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Tournament as exposed by the statistics endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teams {
    pub home: String,
    pub away: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: i32,
    pub away: i32,
}

/// Single fixture, tagged with the tournament it was fetched for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub tournament_id: i64,
    pub date_time: DateTime<Utc>,
    pub teams: Teams,
    pub score: Score,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<String>,
}

/// A tournament together with its matches from the most-recent window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub tournament: Tournament,
    pub matches: Vec<Match>,
}

// --- API Response Structures ---

/// Outer wrapper of every provider response: `{ "doc": [ { "data": ... } ] }`
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default = "Vec::new")]
    pub doc: Vec<EnvelopeDoc<T>>,
}

#[derive(Debug, Deserialize)]
pub struct EnvelopeDoc<T> {
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Payload at `doc[0].data`, if present
    pub fn into_data(self) -> Option<T> {
        self.doc.into_iter().next().and_then(|doc| doc.data)
    }
}

/// Provider collections are JSON objects keyed by id, or `[]` when empty
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawCollection {
    Keyed(Map<String, Value>),
    Listed(Vec<Value>),
}

impl Default for RawCollection {
    fn default() -> Self {
        Self::Listed(Vec::new())
    }
}

impl RawCollection {
    /// Entries ordered by key: integer keys ascending, then the remaining keys in provider order
    pub fn into_values(self) -> Vec<Value> {
        match self {
            Self::Keyed(map) => {
                let (mut numbered, named): (Vec<_>, Vec<_>) = map
                    .into_iter()
                    .map(|(key, value)| (index_key(&key), value))
                    .partition(|(index, _)| index.is_some());
                numbered.sort_by_key(|(index, _)| *index);

                numbered
                    .into_iter()
                    .chain(named)
                    .map(|(_, value)| value)
                    .collect()
            }
            Self::Listed(values) => values,
        }
    }
}

/// Canonical non-negative integer key, e.g. `"42"` but not `"042"` or `"-1"`
fn index_key(key: &str) -> Option<u32> {
    key.parse::<u32>()
        .ok()
        .filter(|index| index.to_string() == key && *index != u32::MAX)
}

/// `doc[0].data` of the tournament catalog endpoint
#[derive(Debug, Default, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub tournaments: Vec<Value>,
    #[serde(default)]
    pub uniquetournaments: RawCollection,
}

/// Catalog entry; regular and unique tournaments share this shape
#[derive(Debug, Clone, Deserialize)]
pub struct RawTournament {
    #[serde(rename = "_id")]
    pub id: i64,
    pub name: String,
}

/// `doc[0].data` of the fixtures endpoint
#[derive(Debug, Default, Deserialize)]
pub struct FixturesData {
    #[serde(default)]
    pub matches: RawCollection,
}

/// Fixture record; every field is optional here and checked during normalization
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMatch {
    pub time: Option<RawMatchTime>,
    pub teams: Option<RawTeams>,
    pub result: Option<RawResult>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMatchTime {
    /// `DD/MM/YY`
    pub date: Option<String>,
    /// `hh:mm`
    pub time: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTeams {
    pub home: Option<RawTeam>,
    pub away: Option<RawTeam>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTeam {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawResult {
    pub home: Option<i32>,
    pub away: Option<i32>,
}
