/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the catalog document lives: an http(s) URL or a filesystem path.
    pub catalog_url: String,
    /// Name of the top-level field holding the game list.
    pub list_field: String,
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            catalog_url: std::env::var("CATALOG_URL").unwrap_or_else(|_| "Games.json".to_string()),
            list_field: std::env::var("CATALOG_LIST_FIELD")
                .unwrap_or_else(|_| "Game List".to_string()),
            http_timeout_secs: std::env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_url: "Games.json".to_string(),
            list_field: "Game List".to_string(),
            http_timeout_secs: 10,
        }
    }
}
