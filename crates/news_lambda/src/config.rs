pub const DEFAULT_TABLE_NAME: &str = "NewsTable";
pub const DEFAULT_REGION: &str = "us-east-1";
pub const TABLE_NAME_VAR: &str = "NEWS_TABLE_NAME";
pub const REGION_VAR: &str = "NEWS_TABLE_REGION";

/// Table location resolved once per process at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsTableConfig {
    pub table_name: String,
    pub region: String,
}

impl Default for NewsTableConfig {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            region: DEFAULT_REGION.to_string(),
        }
    }
}

impl NewsTableConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Blank or missing values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str, default: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            table_name: read(TABLE_NAME_VAR, DEFAULT_TABLE_NAME),
            region: read(REGION_VAR, DEFAULT_REGION),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn missing_variables_use_defaults() {
        let config = NewsTableConfig::from_lookup(|_| None);
        assert_eq!(config, NewsTableConfig::default());
        assert_eq!(config.table_name, "NewsTable");
        assert_eq!(config.region, "us-east-1");
    }

    #[test]
    fn variables_override_defaults() {
        let vars = HashMap::from([
            ("NEWS_TABLE_NAME", "StagingNews"),
            ("NEWS_TABLE_REGION", "eu-west-1"),
        ]);
        let config =
            NewsTableConfig::from_lookup(|key| vars.get(key).map(|value| value.to_string()));

        assert_eq!(config.table_name, "StagingNews");
        assert_eq!(config.region, "eu-west-1");
    }

    #[test]
    fn blank_variables_fall_back() {
        let config = NewsTableConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config, NewsTableConfig::default());
    }
}
