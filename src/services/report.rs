use anyhow::{Context, Result};
use colored::Colorize;
use log::info;

use crate::api::models::StatisticsResponse;
use crate::config::AppConfig;
use crate::domain::{Match, Statistics};
use crate::services::statistics::StatisticsService;

/// One-shot pipeline runs for the command line
pub struct ReportService {
    service: StatisticsService,
}

impl ReportService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let service = StatisticsService::new(config).context("Failed to create statistics service")?;
        Ok(Self { service })
    }

    pub async fn print_statistics(&self, as_json: bool) -> Result<()> {
        info!("=== Collecting Match Statistics ===");
        let statistics = self.service.collect_statistics().await?;

        if as_json {
            let body = serde_json::to_string_pretty(&StatisticsResponse { statistics })?;
            println!("{body}");
        } else {
            print!("{}", render_summary(&statistics));
        }
        Ok(())
    }

    pub async fn print_fixtures(&self, tournament_id: i64) -> Result<()> {
        let matches = self
            .service
            .fetch_tournament_matches(tournament_id)
            .await
            .with_context(|| format!("Failed to fetch fixtures for tournament {}", tournament_id))?;
        info!("  → {} fixtures for tournament {}", matches.len(), tournament_id);

        println!("{}", serde_json::to_string_pretty(&matches)?);
        Ok(())
    }
}

pub fn render_summary(statistics: &[Statistics]) -> String {
    if statistics.is_empty() {
        return format!("{}\n", "No recent matches".dimmed());
    }

    statistics
        .iter()
        .flat_map(|entry| {
            let heading = format!(
                "{} {}",
                entry.tournament.name.bold(),
                format!("(#{})", entry.tournament.id).dimmed()
            );
            std::iter::once(heading).chain(entry.matches.iter().map(|m| format!("  {}", render_match(m))))
        })
        .map(|line| line + "\n")
        .collect()
}

fn render_match(m: &Match) -> String {
    let line = format!(
        "{}  {} {} - {} {}",
        m.date_time.format("%Y-%m-%d %H:%M"),
        m.teams.home,
        m.score.home.to_string().green(),
        m.score.away.to_string().green(),
        m.teams.away
    );
    match m.events.as_deref().filter(|e| !e.is_empty()) {
        Some(events) => format!("{line}  {}", events.italic()),
        None => line,
    }
}
