use std::path::PathBuf;

use crate::{
    error::{config::ConfigError, AppError},
    model::spawn::{SpawnSettings, MAX_SPAWN_COUNT},
};

const DEFAULT_DATABASE_URL: &str = "sqlite://cardcaptor.db?mode=rwc";
const DEFAULT_ART_DIRECTORY: &str = "art";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOG_DIRECTORY: &str = "logs";
const DEFAULT_SPAWN_COUNT: usize = 3;

pub struct Config {
    pub discord_bot_token: String,
    /// When set, slash commands are registered to this guild instead of globally.
    pub discord_guild_id: Option<u64>,

    pub database_url: String,
    pub art_directory: PathBuf,

    pub spawn_count: usize,
    pub spawn_with_replacement: bool,

    pub log_level: String,
    pub log_directory: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of the named variable, if set
    ///
    /// # Returns
    /// - `Ok(Config)` - Validated configuration with defaults applied
    /// - `Err(ConfigError)` - A required variable is missing or a value is invalid
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let discord_bot_token = var("DISCORD_BOT_TOKEN")
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?;

        let discord_guild_id = var("DISCORD_GUILD_ID")
            .map(|value| {
                value.trim().parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                    name: "DISCORD_GUILD_ID".to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                })
            })
            .transpose()?;

        let spawn_count = match var("SPAWN_COUNT") {
            Some(value) => parse_spawn_count(&value)?,
            None => DEFAULT_SPAWN_COUNT,
        };

        let spawn_with_replacement = match var("SPAWN_WITH_REPLACEMENT") {
            Some(value) => parse_bool("SPAWN_WITH_REPLACEMENT", &value)?,
            None => true,
        };

        Ok(Self {
            discord_bot_token,
            discord_guild_id,
            database_url: var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            art_directory: var("ART_DIRECTORY")
                .unwrap_or_else(|| DEFAULT_ART_DIRECTORY.to_string())
                .into(),
            spawn_count,
            spawn_with_replacement,
            log_level: var("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_directory: var("LOG_DIRECTORY")
                .unwrap_or_else(|| DEFAULT_LOG_DIRECTORY.to_string())
                .into(),
        })
    }

    pub fn spawn_settings(&self) -> SpawnSettings {
        SpawnSettings {
            count: self.spawn_count,
            with_replacement: self.spawn_with_replacement,
        }
    }
}

fn parse_spawn_count(value: &str) -> Result<usize, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        name: "SPAWN_COUNT".to_string(),
        value: value.to_string(),
        reason,
    };

    let count = value
        .trim()
        .parse::<usize>()
        .map_err(|e| invalid(e.to_string()))?;

    if !(1..=MAX_SPAWN_COUNT).contains(&count) {
        return Err(invalid(format!("must be between 1 and {}", MAX_SPAWN_COUNT)));
    }

    Ok(count)
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn applies_defaults() {
        let config = Config::from_lookup(lookup(&[("DISCORD_BOT_TOKEN", "token")])).unwrap();

        assert_eq!(config.discord_bot_token, "token");
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.art_directory, PathBuf::from("art"));
        assert_eq!(config.spawn_count, 3);
        assert!(config.spawn_with_replacement);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.discord_guild_id, None);
    }

    #[test]
    fn requires_bot_token() {
        let result = Config::from_lookup(lookup(&[("DISCORD_BOT_TOKEN", "  ")]));

        assert!(matches!(
            result,
            Err(ConfigError::MissingEnvVar(name)) if name == "DISCORD_BOT_TOKEN"
        ));
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("DISCORD_BOT_TOKEN", "token"),
            ("DISCORD_GUILD_ID", "123456789"),
            ("ART_DIRECTORY", "/srv/art"),
            ("SPAWN_COUNT", "5"),
            ("SPAWN_WITH_REPLACEMENT", "false"),
        ]))
        .unwrap();

        assert_eq!(config.discord_guild_id, Some(123456789));
        assert_eq!(config.art_directory, PathBuf::from("/srv/art"));
        assert_eq!(
            config.spawn_settings(),
            SpawnSettings {
                count: 5,
                with_replacement: false
            }
        );
    }

    #[test]
    fn rejects_spawn_count_outside_action_row() {
        for value in ["0", "6", "three"] {
            let result = Config::from_lookup(lookup(&[
                ("DISCORD_BOT_TOKEN", "token"),
                ("SPAWN_COUNT", value),
            ]));
            assert!(
                matches!(
                    result,
                    Err(ConfigError::InvalidEnvVar { ref name, .. }) if name == "SPAWN_COUNT"
                ),
                "accepted SPAWN_COUNT={}",
                value
            );
        }
    }

    #[test]
    fn rejects_unparseable_flags() {
        let result = Config::from_lookup(lookup(&[
            ("DISCORD_BOT_TOKEN", "token"),
            ("SPAWN_WITH_REPLACEMENT", "maybe"),
        ]));

        assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
    }
}
