use chrono::{DateTime, NaiveDateTime, Utc};

use super::models::{Match, RawMatch, RawTournament, Score, Teams, Tournament};
use crate::errors::{AppError, AppResult};

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

pub fn normalize_tournament(raw: &RawTournament) -> Tournament {
    Tournament {
        id: raw.id,
        name: raw.name.clone(),
    }
}

/// Convert one fixture record into a `Match` owned by `tournament_id`.
///
/// Every field except the comment is required; the first missing one is
/// reported as a `MalformedMatch` error.
pub fn normalize_match(raw: &RawMatch, tournament_id: i64) -> AppResult<Match> {
    let missing = |field: &str| AppError::malformed_match(tournament_id, format!("missing {field}"));

    let time = raw.time.as_ref();
    let date = time
        .and_then(|t| t.date.as_deref())
        .ok_or_else(|| missing("time.date"))?;
    let clock = time
        .and_then(|t| t.time.as_deref())
        .ok_or_else(|| missing("time.time"))?;

    let teams = raw.teams.as_ref();
    let home = teams
        .and_then(|t| t.home.as_ref())
        .and_then(|t| t.name.clone())
        .ok_or_else(|| missing("teams.home.name"))?;
    let away = teams
        .and_then(|t| t.away.as_ref())
        .and_then(|t| t.name.clone())
        .ok_or_else(|| missing("teams.away.name"))?;

    let result = raw.result.as_ref();
    let home_score = result
        .and_then(|r| r.home)
        .ok_or_else(|| missing("result.home"))?;
    let away_score = result
        .and_then(|r| r.away)
        .ok_or_else(|| missing("result.away"))?;

    let date_time = parse_match_date_time(date, clock).ok_or_else(|| {
        AppError::malformed_match(
            tournament_id,
            format!("unparseable date/time {:?} {:?}", date, clock),
        )
    })?;

    Ok(Match {
        tournament_id,
        date_time,
        teams: Teams { home, away },
        score: Score {
            home: home_score,
            away: away_score,
        },
        events: raw.comment.clone(),
    })
}

/// Normalize every fixture of one tournament; any bad record fails the whole list.
pub fn normalize_matches(raw_matches: &[RawMatch], tournament_id: i64) -> AppResult<Vec<Match>> {
    raw_matches
        .iter()
        .map(|raw| normalize_match(raw, tournament_id))
        .collect()
}

/// Rebuild a timestamp from a `DD/MM/YY` date and an `hh:mm` time.
///
/// The year is always read as 2000+YY and the result is taken as UTC.
pub fn parse_match_date_time(date: &str, time: &str) -> Option<DateTime<Utc>> {
    let parts: Vec<&str> = date.trim().split('/').collect();
    let [day, month, year] = parts.as_slice() else {
        return None;
    };

    let composed = format!("20{}-{}-{}T{}", year, month, day, time.trim());
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&composed, format).ok())
        .map(|naive| naive.and_utc())
}
