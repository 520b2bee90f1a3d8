use shared_types::AppConfig;
use std::path::Path;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Parse `config.toml` contents. Invalid files fall back to defaults.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to parse {CONFIG_PATH}, using defaults");
        AppConfig::default()
    })
}

/// Read and parse a config file. A missing file yields defaults.
pub fn read_config_file(path: &Path) -> AppConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => parse_config(&contents),
        Err(e) => {
            tracing::info!(path = %path.display(), error = %e, "no config file, using defaults");
            AppConfig::default()
        }
    }
}

/// Variables baked in at build time, for targets without a filesystem or
/// process environment (the web build).
fn build_time_var(key: &str) -> Option<String> {
    match key {
        "AUTH_BACKEND" => option_env!("AUTH_BACKEND").map(str::to_string),
        "AUTH_API_URL" => option_env!("AUTH_API_URL").map(str::to_string),
        _ => None,
    }
}

/// Load `config.toml`, apply environment overrides, and keep the result for
/// the process lifetime. Only the first call reads anything.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let config = read_config_file(Path::new(CONFIG_PATH))
            .with_overrides(|key| std::env::var(key).ok().or_else(|| build_time_var(key)));
        tracing::info!(
            backend = ?config.auth.backend,
            base_url = %config.auth.base_url,
            "auth configuration loaded"
        );
        config
    })
}
