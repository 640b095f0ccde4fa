use std::env;

pub const DEFAULT_GRAPHIQL_PATH: &str = "/graphiql";

/// Startup configuration for the adapter.
///
/// Built once per process, either from the environment or through the builder,
/// and handed to the adapter by value.
#[derive(Debug, Clone)]
pub struct AdapterConfig {
    /// Base URL of the companion service (health probe target, explorer endpoint).
    pub engine_proxy_url: Option<String>,
    pub graphiql: bool,
    pub graphiql_path: String,
    pub tracing: bool,
    pub cache_control: bool,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            engine_proxy_url: None,
            graphiql: false,
            graphiql_path: DEFAULT_GRAPHIQL_PATH.to_string(),
            tracing: true,
            cache_control: true,
        }
    }
}

impl AdapterConfig {
    pub fn builder() -> AdapterConfigBuilder {
        AdapterConfigBuilder::default()
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let flag = |key: &str, default: bool| {
            lookup(key)
                .map(|v| v == "true" || v == "1")
                .unwrap_or(default)
        };

        Self {
            engine_proxy_url: lookup("ENGINE_PROXY_URL").filter(|v| !v.trim().is_empty()),
            graphiql: flag("LAMBDAQL_GRAPHIQL", defaults.graphiql),
            graphiql_path: lookup("LAMBDAQL_GRAPHIQL_PATH").unwrap_or(defaults.graphiql_path),
            tracing: flag("LAMBDAQL_TRACING", defaults.tracing),
            cache_control: flag("LAMBDAQL_CACHE_CONTROL", defaults.cache_control),
        }
    }
}

#[derive(Default)]
pub struct AdapterConfigBuilder {
    config: AdapterConfig,
}

impl AdapterConfigBuilder {
    pub fn engine_proxy_url(mut self, url: impl Into<String>) -> Self {
        self.config.engine_proxy_url = Some(url.into());
        self
    }

    pub fn graphiql(mut self, enabled: bool) -> Self {
        self.config.graphiql = enabled;
        self
    }

    pub fn graphiql_path(mut self, path: impl Into<String>) -> Self {
        self.config.graphiql_path = path.into();
        self
    }

    pub fn tracing(mut self, enabled: bool) -> Self {
        self.config.tracing = enabled;
        self
    }

    pub fn cache_control(mut self, enabled: bool) -> Self {
        self.config.cache_control = enabled;
        self
    }

    pub fn build(self) -> AdapterConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = AdapterConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.engine_proxy_url, None);
        assert!(!config.graphiql);
        assert_eq!(config.graphiql_path, "/graphiql");
        assert!(config.tracing);
        assert!(config.cache_control);
    }

    #[test]
    fn test_reads_all_recognized_variables() {
        let config = AdapterConfig::from_lookup(lookup_from(&[
            ("ENGINE_PROXY_URL", "http://localhost:3001"),
            ("LAMBDAQL_GRAPHIQL", "1"),
            ("LAMBDAQL_GRAPHIQL_PATH", "/explore"),
            ("LAMBDAQL_TRACING", "false"),
            ("LAMBDAQL_CACHE_CONTROL", "0"),
        ]));
        assert_eq!(
            config.engine_proxy_url.as_deref(),
            Some("http://localhost:3001")
        );
        assert!(config.graphiql);
        assert_eq!(config.graphiql_path, "/explore");
        assert!(!config.tracing);
        assert!(!config.cache_control);
    }

    #[test]
    fn test_blank_proxy_url_is_unset() {
        let config = AdapterConfig::from_lookup(lookup_from(&[("ENGINE_PROXY_URL", "  ")]));
        assert_eq!(config.engine_proxy_url, None);
    }

    #[test]
    fn test_builder_overrides_defaults() {
        let config = AdapterConfig::builder()
            .engine_proxy_url("https://engine.example.com")
            .graphiql(true)
            .tracing(false)
            .build();
        assert_eq!(
            config.engine_proxy_url.as_deref(),
            Some("https://engine.example.com")
        );
        assert!(config.graphiql);
        assert!(!config.tracing);
        assert!(config.cache_control);
    }
}
