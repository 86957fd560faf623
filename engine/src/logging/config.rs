use std::collections::HashMap;
use tracing::Level;

/// Environment variable read by [`init_logging`] when no other name is given
pub const DEFAULT_LOG_ENV_VAR: &str = "TRANSPORTER_LOG";

/// Per-scope log level table, parsed from strings like `warn,teleport=debug`
#[derive(Debug, Clone)]
pub struct LogConfig {
    global_level: Level,
    scope_levels: HashMap<String, Level>,
}

impl LogConfig {
    pub fn new() -> Self {
        Self {
            global_level: Level::WARN,
            scope_levels: HashMap::new(),
        }
    }

    pub fn from_env(env_var_name: &str) -> Self {
        match std::env::var(env_var_name) {
            Ok(value) => Self::parse(&value),
            Err(_) => Self::new(),
        }
    }

    /// Parse a comma separated list of `level` and `scope=level` entries.
    /// Unknown levels are skipped rather than rejected.
    pub fn parse(config_str: &str) -> Self {
        let mut config = Self::new();

        for part in config_str.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match part.split_once('=') {
                Some((scope, level)) => {
                    if let Some(level) = parse_level(level) {
                        config.scope_levels.insert(scope.trim().to_string(), level);
                    }
                }
                None => {
                    if let Some(level) = parse_level(part) {
                        config.global_level = level;
                    }
                }
            }
        }

        config
    }

    pub fn should_log(&self, scope: &str, level: Level) -> bool {
        let target_level = self.scope_levels.get(scope).unwrap_or(&self.global_level);
        level <= *target_level
    }

    pub fn global_level(&self) -> Level {
        self.global_level
    }

    pub fn set_global_level(&mut self, level: Level) {
        self.global_level = level;
    }

    pub fn set_scope_level(&mut self, scope: impl Into<String>, level: Level) {
        self.scope_levels.insert(scope.into(), level);
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_level(level_str: &str) -> Option<Level> {
    level_str.trim().parse::<Level>().ok()
}

/// Install the fmt subscriber and the scope table read from `env_var_name`.
/// Calling it twice keeps the first subscriber and the first scope table.
pub fn init_logging(env_var_name: &str) -> LogConfig {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("trace")),
        )
        .try_init();

    let config = LogConfig::from_env(env_var_name);
    super::set_log_config(config.clone());
    config
}
