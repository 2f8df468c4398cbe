use serde::{Deserialize, Serialize};
use showdown_engine::table::MAX_PLAYERS;
use std::fs;

pub const CONFIG_ENV: &str = "SHOWDOWN_CONFIG";
pub const PLAYERS_ENV: &str = "SHOWDOWN_PLAYERS";
pub const SEED_ENV: &str = "SHOWDOWN_SEED";
pub const COLOR_ENV: &str = "SHOWDOWN_COLOR";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub players: u8,
    pub seed: Option<u64>,
    pub color: bool,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub players: ValueSource,
    pub seed: ValueSource,
    pub color: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            players: ValueSource::Default,
            seed: ValueSource::Default,
            color: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: 2,
            seed: None,
            color: true,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

/// Resolve configuration from the process environment.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_from(|key| std::env::var(key).ok())
}

/// Defaults, then the TOML file named by `SHOWDOWN_CONFIG`, then the
/// `SHOWDOWN_*` variables. `lookup` stands in for the environment.
pub fn load_from<F>(lookup: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = non_empty(lookup(CONFIG_ENV)) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.color {
            cfg.color = v;
            sources.color = ValueSource::File;
        }
    }

    if let Some(players) = non_empty(lookup(PLAYERS_ENV)) {
        cfg.players = players
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid players: {}", players)))?;
        sources.players = ValueSource::Env;
    }
    if let Some(seed) = non_empty(lookup(SEED_ENV)) {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(color) = non_empty(lookup(COLOR_ENV)) {
        cfg.color = parse_bool(&color)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid color: {}", color)))?;
        sources.color = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    players: Option<u8>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    color: Option<bool>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.players == 0 || cfg.players as usize > MAX_PLAYERS {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: players must be between 1 and {}",
            MAX_PLAYERS
        )));
    }
    Ok(())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
