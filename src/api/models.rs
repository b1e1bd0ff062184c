use serde::{Deserialize, Serialize};

use crate::domain::Statistics;

/// Body of `GET /matches`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsResponse {
    pub statistics: Vec<Statistics>,
}
