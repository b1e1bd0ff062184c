use log::warn;

pub struct ProviderSettings {
    pub base_url: String,
    pub catalog_path: String,
    pub fixtures_season: String,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: "https://cp.fn.sportradar.com/common/en/Etc:UTC/gismo".to_string(),
            catalog_path: "config_tournaments/1/17".to_string(),
            fixtures_season: "2021".to_string(),
            user_agent: "MatchStatistics/1.0",
            timeout_secs: 30,
        }
    }
}

pub struct AggregationSettings {
    /// Size of the most-recent window across all tournaments
    pub top_n: usize,
}

impl Default for AggregationSettings {
    fn default() -> Self {
        Self { top_n: 5 }
    }
}

pub struct AppConfig {
    pub provider: ProviderSettings,
    pub aggregation: AggregationSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            provider: ProviderSettings::default(),
            aggregation: AggregationSettings::default(),
        }
    }

    /// Defaults overridden by `PROVIDER_*` / `FIXTURES_SEASON` environment variables
    pub fn from_env() -> Self {
        let mut config = Self::new();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let provider = &mut self.provider;

        if let Some(url) = lookup("PROVIDER_BASE_URL") {
            provider.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(path) = lookup("PROVIDER_CATALOG_PATH") {
            provider.catalog_path = path.trim_matches('/').to_string();
        }
        if let Some(season) = lookup("FIXTURES_SEASON") {
            provider.fixtures_season = season;
        }
        provider.timeout_secs = parse_positive_or_default(
            "PROVIDER_TIMEOUT_SECS",
            lookup("PROVIDER_TIMEOUT_SECS"),
            provider.timeout_secs,
        );
    }
}

/// Zero is rejected along with unparseable values
fn parse_positive_or_default(key: &str, raw: Option<String>, default: u64) -> u64 {
    match raw {
        Some(value) => match value.trim().parse::<u64>() {
            Ok(parsed) if parsed > 0 => parsed,
            _ => {
                warn!("Ignoring invalid {}={:?}, using default", key, value);
                default
            }
        },
        None => default,
    }
}
