use clap::Subcommand;
use studydeck_core::{Config, ConfigError, CoreError};

use super::CmdResult;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "timer.session_minutes")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
    /// List all config values
    List,
    /// List every key that `get` and `set` accept
    Keys,
    /// Reset config to defaults
    Reset,
}

pub fn run(action: ConfigAction) -> CmdResult {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(unknown_key(&key).into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            match config.set(&key, &value) {
                Ok(()) => println!("{key} = {}", config.get(&key).unwrap_or(value)),
                Err(CoreError::Config(ConfigError::UnknownKey(_))) => {
                    return Err(unknown_key(&key).into())
                }
                Err(e) => return Err(e.into()),
            }
        }
        ConfigAction::List => {
            let config = Config::load()?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Keys => {
            let config = Config::load()?;
            for key in Config::keys() {
                println!("{key} = {}", config.get(&key).unwrap_or_default());
            }
        }
        ConfigAction::Reset => {
            let config = Config::default();
            config.save()?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}

/// Error text for a key the config does not have, naming the likely
/// intended keys (timer lengths live under `timer.`, list limits under
/// `display.`).
fn unknown_key(key: &str) -> String {
    let suggestions = Config::suggest(key);
    if suggestions.is_empty() {
        format!("unknown key: {key} (see `studydeck config keys`)")
    } else {
        format!("unknown key: {key}, did you mean {}?", suggestions.join(" or "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_timer_field_suggests_section() {
        assert_eq!(
            unknown_key("short_break_minutes"),
            "unknown key: short_break_minutes, did you mean timer.short_break_minutes?"
        );
    }

    #[test]
    fn unrelated_key_points_at_keys_command() {
        assert!(unknown_key("theme").contains("studydeck config keys"));
    }
}
