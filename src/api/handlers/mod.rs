use crate::services::statistics::StatisticsService;

pub mod matches;

pub struct AppState {
    pub service: StatisticsService,
}
