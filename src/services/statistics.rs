use futures::future::try_join_all;
use log::{debug, info, warn};

use crate::api::ProviderClient;
use crate::config::AppConfig;
use crate::domain::{
    self, build_statistics, group_by_tournament, merge_all, select_top, Match, Statistics,
    TournamentCollection,
};
use crate::errors::AppResult;

/// Runs the catalog → fixtures → top-N → statistics pipeline for one request
#[derive(Debug, Clone)]
pub struct StatisticsService {
    client: ProviderClient,
    top_n: usize,
}

impl StatisticsService {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let client = ProviderClient::new(&config.provider)?;
        Ok(Self::with_client(client, config.aggregation.top_n))
    }

    pub fn with_client(client: ProviderClient, top_n: usize) -> Self {
        Self { client, top_n }
    }

    pub async fn collect_statistics(&self) -> AppResult<Vec<Statistics>> {
        // Step 1: Catalog
        let tournaments = self.load_tournaments().await?;
        if tournaments.is_empty() {
            warn!("Catalog contains no tournaments");
        }
        info!("  → {} tournaments in catalog", tournaments.len());

        // Step 2: Fixtures, all or nothing
        let per_tournament = self.fetch_all_matches(&tournaments).await?;

        // Step 3: Most recent window
        let merged = merge_all(per_tournament);
        let total = merged.len();
        let top = select_top(merged, self.top_n);
        let groups = group_by_tournament(top);
        info!(
            "  → Selected {} of {} matches across {} tournaments",
            groups.iter().map(|g| g.matches.len()).sum::<usize>(),
            total,
            groups.len()
        );

        // Step 4: Pair with tournaments
        Ok(build_statistics(groups, &tournaments))
    }

    /// Fixtures of a single tournament, normalized
    pub async fn fetch_tournament_matches(&self, tournament_id: i64) -> AppResult<Vec<Match>> {
        let raw_matches = self.client.fetch_fixtures(tournament_id).await?;
        let matches = domain::normalize_matches(&raw_matches, tournament_id)?;
        debug!("Tournament {}: {} matches", tournament_id, matches.len());
        Ok(matches)
    }

    async fn load_tournaments(&self) -> AppResult<TournamentCollection> {
        let catalog = self.client.fetch_tournament_catalog().await?;
        debug!(
            "Catalog: {} regular, {} unique tournaments",
            catalog.tournaments.len(),
            catalog.unique_tournaments.len()
        );

        Ok(catalog
            .tournaments
            .iter()
            .chain(catalog.unique_tournaments.iter())
            .map(domain::normalize_tournament)
            .collect())
    }

    /// One result slot per tournament, in catalog order; the first error aborts the rest
    async fn fetch_all_matches(&self, tournaments: &TournamentCollection) -> AppResult<Vec<Vec<Match>>> {
        let fetches = tournaments
            .ids()
            .into_iter()
            .map(|id| self.fetch_tournament_matches(id));

        try_join_all(fetches).await
    }
}
