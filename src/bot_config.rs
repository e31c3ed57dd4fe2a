#![cfg(feature = "std")]

//! Runtime settings for the bot binaries.

use std::env;

use crate::session::SessionManager;

/// Environment variable with a fixed RNG seed for reproducible games.
pub const SEED_ENV: &str = "TICTACTOE_SEED";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BotConfig {
    /// Seed for the opponents' pickers; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl BotConfig {
    /// Read settings from the process environment, after loading a `.env`
    /// file from the working directory if one exists.
    pub fn from_env() -> anyhow::Result<Self> {
        check_env_file(dotenvy::dotenv())?;
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build settings from a variable lookup.
    pub fn from_vars<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = match lookup(SEED_ENV) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                anyhow::anyhow!("{} must be an unsigned integer, got {:?}: {}", SEED_ENV, raw, e)
            })?),
            None => None,
        };
        Ok(Self { seed })
    }

    /// Replace the seed when one was given on the command line.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Session manager matching these settings.
    pub fn session_manager(&self) -> SessionManager {
        match self.seed {
            Some(seed) => SessionManager::seeded(seed),
            None => SessionManager::new(),
        }
    }
}

/// A missing `.env` is fine; one that cannot be read or parsed is not.
fn check_env_file<T>(loaded: Result<T, dotenvy::Error>) -> anyhow::Result<()> {
    match loaded {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(anyhow::anyhow!("failed to load .env file: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_from_vars() {
        let cfg = BotConfig::from_vars(|k| (k == SEED_ENV).then(|| "42".to_string())).unwrap();
        assert_eq!(cfg.seed, Some(42));

        let cfg = BotConfig::from_vars(|_| None).unwrap();
        assert_eq!(cfg.seed, None);

        assert!(BotConfig::from_vars(|_| Some("nope".to_string())).is_err());
    }

    #[test]
    fn cli_seed_overrides() {
        let cfg = BotConfig { seed: Some(1) };
        assert_eq!(cfg.clone().with_seed(Some(7)).seed, Some(7));
        assert_eq!(cfg.with_seed(None).seed, Some(1));
    }

    #[test]
    fn missing_env_file_is_ignored() {
        let missing = std::env::temp_dir().join("tictactoe-no-such-dir").join(".env");
        assert!(check_env_file(dotenvy::from_path(&missing)).is_ok());
    }

    #[test]
    fn malformed_env_file_is_an_error() {
        let path = std::env::temp_dir().join(format!("tictactoe-bad-{}.env", std::process::id()));
        std::fs::write(&path, "this is not an assignment\n").unwrap();
        let result = check_env_file(dotenvy::from_path(&path));
        let _ = std::fs::remove_file(&path);
        assert!(result.is_err());
    }
}
