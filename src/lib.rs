// Re-export all public modules so they can be used from main.rs
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

// MVC Architecture
pub mod model;
pub mod view;
pub mod controller;

pub use config::GameConfig;
pub use controller::{FrameOutcome, GameSession, Intent};
pub use error::ConfigError;
pub use model::{LaneCamera, Obstacle, ObstacleTrack};

/// Resolve the session config from the command line: the `--config` file when
/// given, defaults otherwise, with `--seed` applied on top.
pub fn resolve_config(args: &cli::CliArgs) -> Result<GameConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_config_applies_seed() {
        let args = cli::CliArgs { config: None, seed: Some(5) };
        let config = resolve_config(&args).expect("defaults are valid");
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.bpm, 200.0);
    }

    #[test]
    fn test_resolve_config_missing_file() {
        let args = cli::CliArgs { config: Some("/nonexistent/run.json".into()), seed: None };
        assert!(matches!(resolve_config(&args), Err(ConfigError::Read { .. })));
    }
}
