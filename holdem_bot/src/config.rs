//! Bot configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use holdem_agent::{
    bot::{BotConfig, DecisionConfig},
    constants::DEFAULT_AGGRESSION_MULTIPLIER,
    entities::Usd,
    messages::Room,
};
use std::{net::SocketAddr, str::FromStr};

/// Server the bot connects to unless told otherwise.
pub const DEFAULT_SERVER: &str = "127.0.0.1:4711";

/// Complete bot configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct BotSettings {
    /// Poker server address
    pub server: SocketAddr,
    /// Name to register with
    pub name: Option<String>,
    /// Room to register for
    pub room: Room,
    /// Big blinds an opponent must invest to count as aggressive
    pub aggression_multiplier: Usd,
}

impl BotSettings {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `server_override` - Optional server address override (from CLI args)
    /// * `name_override` - Optional bot name override (from CLI args)
    /// * `room_override` - Optional room override (from CLI args)
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but can't be parsed
    pub fn from_env(
        server_override: Option<SocketAddr>,
        name_override: Option<String>,
        room_override: Option<Room>,
    ) -> Result<Self, ConfigError> {
        Self::from_lookup(server_override, name_override, room_override, |key| {
            std::env::var(key).ok()
        })
    }

    /// Same as [`BotSettings::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(
        server_override: Option<SocketAddr>,
        name_override: Option<String>,
        room_override: Option<Room>,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server = match server_override {
            Some(server) => server,
            None => match parse_var(&lookup, "BOT_SERVER")? {
                Some(server) => server,
                None => DEFAULT_SERVER.parse().map_err(|_| ConfigError::Invalid {
                    var: "BOT_SERVER".to_string(),
                    reason: format!("default {DEFAULT_SERVER} is not an address"),
                })?,
            },
        };

        let name = name_override.or_else(|| lookup("BOT_NAME"));

        let room = match room_override {
            Some(room) => room,
            None => parse_var(&lookup, "BOT_ROOM")?.unwrap_or_default(),
        };

        let aggression_multiplier = parse_var(&lookup, "BOT_AGGRESSION_MULTIPLIER")?
            .unwrap_or(DEFAULT_AGGRESSION_MULTIPLIER);

        Ok(BotSettings {
            server,
            name,
            room,
            aggression_multiplier,
        })
    }

    /// Validate configuration after loading
    ///
    /// A missing name is not an error here; the bot reports it when it
    /// registers.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.aggression_multiplier == 0 {
            return Err(ConfigError::Invalid {
                var: "BOT_AGGRESSION_MULTIPLIER".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if self.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(ConfigError::Invalid {
                var: "BOT_NAME".to_string(),
                reason: "Must not be blank".to_string(),
            });
        }

        Ok(())
    }

    pub fn bot_config(&self) -> BotConfig {
        BotConfig {
            name: self.name.clone(),
            decision: DecisionConfig {
                aggression_multiplier: self.aggression_multiplier,
            },
        }
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse an optional variable, rejecting values that don't parse
fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| {
            value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
                var: key.to_string(),
                reason: e.to_string(),
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = BotSettings::from_lookup(None, None, None, lookup_from(&[])).unwrap();
        assert_eq!(settings.server, DEFAULT_SERVER.parse().unwrap());
        assert_eq!(settings.name, None);
        assert_eq!(settings.room, Room::Training);
        assert_eq!(settings.aggression_multiplier, DEFAULT_AGGRESSION_MULTIPLIER);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_env_values() {
        let lookup = lookup_from(&[
            ("BOT_SERVER", "10.0.0.2:5000"),
            ("BOT_NAME", "pairbot"),
            ("BOT_ROOM", "Tournament"),
            ("BOT_AGGRESSION_MULTIPLIER", "6"),
        ]);
        let settings = BotSettings::from_lookup(None, None, None, lookup).unwrap();
        assert_eq!(settings.server, "10.0.0.2:5000".parse().unwrap());
        assert_eq!(settings.name.as_deref(), Some("pairbot"));
        assert_eq!(settings.room, Room::Tournament);
        assert_eq!(settings.aggression_multiplier, 6);
        assert_eq!(settings.bot_config().decision.aggression_multiplier, 6);
    }

    #[test]
    fn test_overrides_win() {
        let lookup = lookup_from(&[
            ("BOT_SERVER", "10.0.0.2:5000"),
            ("BOT_NAME", "from_env"),
            ("BOT_ROOM", "tournament"),
        ]);
        let settings = BotSettings::from_lookup(
            Some("192.168.10.100:4711".parse().unwrap()),
            Some("from_cli".to_string()),
            Some(Room::Freeplay),
            lookup,
        )
        .unwrap();
        assert_eq!(settings.server, "192.168.10.100:4711".parse().unwrap());
        assert_eq!(settings.name.as_deref(), Some("from_cli"));
        assert_eq!(settings.room, Room::Freeplay);
    }

    #[test]
    fn test_unparsable_values_are_invalid() {
        let err = BotSettings::from_lookup(None, None, None, lookup_from(&[("BOT_ROOM", "casino")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref var, .. } if var == "BOT_ROOM"));

        let err = BotSettings::from_lookup(
            None,
            None,
            None,
            lookup_from(&[("BOT_SERVER", "not an address")]),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref var, .. } if var == "BOT_SERVER"));
    }

    #[test]
    fn test_validation_zero_multiplier() {
        let settings = BotSettings::from_lookup(
            None,
            None,
            None,
            lookup_from(&[("BOT_AGGRESSION_MULTIPLIER", "0")]),
        )
        .unwrap();
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_validation_blank_name() {
        let settings =
            BotSettings::from_lookup(None, Some("  ".to_string()), None, lookup_from(&[]))
                .unwrap();
        assert!(settings.validate().is_err());
    }
}
