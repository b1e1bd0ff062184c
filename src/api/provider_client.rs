use log::{debug, info};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ProviderSettings;
use crate::domain::models::{CatalogData, Envelope, FixturesData, RawMatch, RawTournament};
use crate::errors::{AppError, AppResult};
use crate::http::JsonClient;

/// Tournament catalog; unique tournaments come ordered by their id key
#[derive(Debug, Default)]
pub struct TournamentCatalog {
    pub tournaments: Vec<RawTournament>,
    pub unique_tournaments: Vec<RawTournament>,
}

/// Statistics provider API client
#[derive(Debug, Clone)]
pub struct ProviderClient {
    client: JsonClient,
    base_url: String,
    catalog_path: String,
    fixtures_season: String,
}

impl ProviderClient {
    pub fn new(settings: &ProviderSettings) -> AppResult<Self> {
        let client = JsonClient::new(settings.user_agent, settings.timeout_secs)?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            catalog_path: settings.catalog_path.clone(),
            fixtures_season: settings.fixtures_season.clone(),
        })
    }

    /// Fetch the regular and unique tournaments of the configured category
    pub async fn fetch_tournament_catalog(&self) -> AppResult<TournamentCatalog> {
        let url = self.build_catalog_url();
        info!("Fetching tournament catalog from {}", url);

        let data: CatalogData = self.fetch_envelope_data(&url).await?;

        let tournaments = Self::decode_tournaments(&url, data.tournaments)?;
        let unique_tournaments =
            Self::decode_tournaments(&url, data.uniquetournaments.into_values())?;

        Ok(TournamentCatalog {
            tournaments,
            unique_tournaments,
        })
    }

    /// Fetch the fixture records of one tournament.
    ///
    /// Regular and unique tournament ids are queried the same way.
    pub async fn fetch_fixtures(&self, tournament_id: i64) -> AppResult<Vec<RawMatch>> {
        let url = self.build_fixtures_url(tournament_id);
        debug!("Fetching fixtures for tournament {} from {}", tournament_id, url);

        let data: FixturesData = self.fetch_envelope_data(&url).await?;

        data.matches
            .into_values()
            .into_iter()
            .map(|value| {
                serde_json::from_value(value)
                    .map_err(|e| AppError::malformed_match(tournament_id, e.to_string()))
            })
            .collect()
    }

    // --- Helper Methods ---

    async fn fetch_envelope_data<T: DeserializeOwned>(&self, url: &str) -> AppResult<T> {
        let envelope: Envelope<T> = self.client.get_json(url).await?;
        envelope
            .into_data()
            .ok_or_else(|| AppError::upstream(url, "missing doc[0].data"))
    }

    fn decode_tournaments(url: &str, values: Vec<Value>) -> AppResult<Vec<RawTournament>> {
        values
            .into_iter()
            .map(|value| {
                serde_json::from_value(value)
                    .map_err(|e| AppError::upstream(url, format!("Invalid tournament entry: {e}")))
            })
            .collect()
    }

    fn build_catalog_url(&self) -> String {
        format!("{}/{}", self.base_url, self.catalog_path)
    }

    fn build_fixtures_url(&self, tournament_id: i64) -> String {
        format!(
            "{}/fixtures_tournament/{}/{}",
            self.base_url, tournament_id, self.fixtures_season
        )
    }
}
